// File: crates/errplot-core/src/colormap.rs
// Summary: Piecewise-linear colormaps from normalized scalars to colors.

use skia_safe as skia;

/// A colormap over evenly spaced RGB stops. Evaluation is a deterministic
/// pure function of the input; the same `t` always yields the same color.
#[derive(Clone, Debug)]
pub struct ColorMap {
    stops: Vec<[u8; 3]>,
}

impl ColorMap {
    /// Build a colormap from at least two RGB stops.
    pub fn from_stops(stops: &[[u8; 3]]) -> Self {
        assert!(stops.len() >= 2, "a colormap needs at least two stops");
        Self { stops: stops.to_vec() }
    }

    /// Teal -> yellow -> orange -> red ramp; higher relative error runs hot.
    pub fn error_heat() -> Self {
        Self::from_stops(&[
            [0x2a, 0x9d, 0x8f],
            [0xe9, 0xc4, 0x6a],
            [0xf4, 0xa2, 0x61],
            [0xe7, 0x6f, 0x51],
        ])
    }

    /// Blue -> light cyan ramp used by the gradient bar chart.
    pub fn ocean() -> Self {
        Self::from_stops(&[[0x00, 0x77, 0xb6], [0x90, 0xe0, 0xef]])
    }

    /// Evaluate at `t` in [0, 1]; out-of-range inputs clamp to the end stops.
    pub fn eval(&self, t: f64) -> skia::Color {
        self.eval_with_alpha(t, 255)
    }

    pub fn eval_with_alpha(&self, t: f64, alpha: u8) -> skia::Color {
        let [r, g, b] = self.eval_rgb(t);
        skia::Color::from_argb(alpha, r, g, b)
    }

    /// The interpolated RGB triple at `t`, clamped to [0, 1].
    pub fn eval_rgb(&self, t: f64) -> [u8; 3] {
        let t = t.clamp(0.0, 1.0);
        let segments = self.stops.len() - 1;
        let pos = t * segments as f64;
        let i = (pos.floor() as usize).min(segments - 1);
        let frac = pos - i as f64;
        let lo = self.stops[i];
        let hi = self.stops[i + 1];
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
        [mix(lo[0], hi[0]), mix(lo[1], hi[1]), mix(lo[2], hi[2])]
    }
}
