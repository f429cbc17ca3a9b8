// File: crates/errplot-core/src/polar.rs
// Summary: Polar bar chart of error vs n with max-normalized color mapping.

use std::f64::consts::TAU;
use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::colorbar::Colorbar;
use crate::colormap::ColorMap;
use crate::data::Dataset;
use crate::error::DataError;
use crate::grid::sci;
use crate::render::{self, RenderOptions};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::{pt, POLAR_HEIGHT, POLAR_WIDTH};

// Radial layout, in axis units: wedges span [R_INNER, R_INNER + R_HEIGHT],
// grid rings sit at R_RINGS, `n` rim labels at R_RIM, value labels anchor
// at R_LABEL, and R_MAX bounds the drawable disc.
const R_INNER: f64 = 0.2;
const R_HEIGHT: f64 = 1.0;
const R_RINGS: [f64; 2] = [0.5, 1.0];
const R_RIM: f64 = 1.3;
const R_LABEL: f64 = 1.5;
const R_MAX: f64 = 1.95;
/// Full angular width of one wedge, in radians.
const WEDGE_WIDTH: f64 = 0.4;
const FILL_ALPHA: u8 = 217;

pub struct PolarErrorChart {
    pub data: Dataset,
    pub title: String,
    pub colorbar_label: String,
    pub cmap: ColorMap,
    pub theme: Theme,
}

impl PolarErrorChart {
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            title: "Error distribution across n values (polar projection)".to_string(),
            colorbar_label: "Error magnitude".to_string(),
            cmap: ColorMap::error_heat(),
            theme: Theme::light(),
        }
    }

    /// Errors scaled by the dataset maximum, each in [0, 1]. All-equal
    /// positive errors normalize to 1.0 across the board.
    pub fn normalized_errors(&self) -> Result<Vec<f64>, DataError> {
        let max = self.validate()?;
        Ok(self.data.err_values.iter().map(|e| e / max).collect())
    }

    /// Check the renderability preconditions and return the maximum error.
    fn validate(&self) -> Result<f64, DataError> {
        if self.data.is_empty() {
            return Err(DataError::Degenerate("no data points to draw".into()));
        }
        let max = self.data.max_err().unwrap_or(f64::NAN);
        if !(max > 0.0) {
            return Err(DataError::Degenerate(format!(
                "maximum error must be positive to normalize, got {max}"
            )));
        }
        Ok(max)
    }

    /// Render the chart to a PNG at `path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        render::write_png(path, &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let max_err = self.validate()?;
        render::render_png_bytes(opts, |canvas| {
            self.draw(canvas, opts, max_err);
            Ok(())
        })
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, max_err: f64) {
        let s = opts.scale_for(POLAR_WIDTH, POLAR_HEIGHT);
        let px = |points: f32| pt(points) * s;

        let left = px(opts.insets.left as f32);
        let right = opts.width as f32 - px(opts.insets.right as f32);
        let top = px(opts.insets.top as f32);
        let bottom = opts.height as f32 - px(opts.insets.bottom as f32);

        let cx = (left + right) * 0.5;
        let cy = (top + bottom) * 0.5;
        // px per radial axis unit
        let unit = ((right - left).min(bottom - top) * 0.5).max(1.0) / R_MAX as f32;

        let n = self.data.len();
        let angles: Vec<f64> = (0..n).map(|i| i as f64 * TAU / n as f64).collect();
        let shaper = TextShaper::new();

        // grid under the bars
        let mut grid = skia::Paint::default();
        grid.set_anti_alias(true);
        grid.set_style(skia::paint::Style::Stroke);
        grid.set_stroke_width(px(0.8));
        grid.set_color(self.theme.grid);
        grid.set_path_effect(skia::dash_path_effect::new(&[px(6.0), px(4.0)], 0.0));
        for r in R_RINGS {
            canvas.draw_circle((cx, cy), r as f32 * unit, &grid);
        }
        let spoke_r = R_INNER + R_HEIGHT;
        for &theta in &angles {
            let (x, y) = polar_xy(cx, cy, unit, theta, spoke_r);
            canvas.draw_line((cx, cy), (x, y), &grid);
        }

        // one wedge per data point, colored by error relative to the maximum
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(px(2.0));
        edge.set_color(self.theme.wedge_edge);
        for (&theta, &err) in angles.iter().zip(&self.data.err_values) {
            fill.set_color(self.cmap.eval_with_alpha(err / max_err, FILL_ALPHA));
            let path = wedge_path(cx, cy, unit, theta, WEDGE_WIDTH * 0.5, R_INNER, R_INNER + R_HEIGHT);
            canvas.draw_path(&path, &fill);
            canvas.draw_path(&path, &edge);
        }

        if opts.draw_labels {
            // n values around the rim
            for (&theta, &nv) in angles.iter().zip(&self.data.n_values) {
                let (x, y) = polar_xy(cx, cy, unit, theta, R_RIM);
                shaper.draw(
                    canvas,
                    &nv.to_string(),
                    x,
                    y,
                    px(10.0),
                    self.theme.text,
                    true,
                    HAlign::Center,
                    VAlign::Center,
                );
            }

            // boxed value labels, flipped in the lower half so text is never
            // upside-down
            for i in 0..n {
                let theta = angles[i];
                let deg = theta.to_degrees();
                let lower = (90.0..270.0).contains(&deg);
                let (rotation, halign) = if lower {
                    (-(deg as f32 + 180.0), HAlign::Right)
                } else {
                    (-deg as f32, HAlign::Left)
                };
                let text = format!(
                    "n={}\nerr={}",
                    self.data.n_values[i],
                    sci(self.data.err_values[i], 2)
                );
                let (x, y) = polar_xy(cx, cy, unit, theta, R_LABEL);
                draw_boxed_label(
                    canvas, &shaper, &self.theme, &text, x, y,
                    px(9.0), rotation, halign, px(3.0),
                );
            }

            shaper.draw(
                canvas,
                &self.title,
                cx,
                px(24.0),
                px(16.0),
                self.theme.title,
                true,
                HAlign::Center,
                VAlign::Top,
            );
        }

        let cb_h = (bottom - top) * 0.7;
        let cb = Colorbar {
            rect: skia::Rect::from_xywh(right + px(40.0), cy - cb_h * 0.5, px(22.0), cb_h),
            cmap: &self.cmap,
            vmin: self.data.min_err().unwrap_or(0.0),
            vmax: max_err,
            label: &self.colorbar_label,
            tick_size: px(9.0),
            label_size: px(12.0),
        };
        cb.draw(canvas, &shaper, &self.theme, px(1.2), opts.draw_labels);
    }
}

fn polar_xy(cx: f32, cy: f32, unit: f32, theta: f64, r: f64) -> (f32, f32) {
    // theta measures clockwise from the top of the circle
    let rp = r as f32 * unit;
    (cx + rp * theta.sin() as f32, cy - rp * theta.cos() as f32)
}

/// Annular sector centered on `theta`, spanning [r0, r1] radially.
fn wedge_path(cx: f32, cy: f32, unit: f32, theta: f64, half_width: f64, r0: f64, r1: f64) -> skia::Path {
    let inner = r0 as f32 * unit;
    let outer = r1 as f32 * unit;
    let outer_rect = skia::Rect::from_ltrb(cx - outer, cy - outer, cx + outer, cy + outer);
    let inner_rect = skia::Rect::from_ltrb(cx - inner, cy - inner, cx + inner, cy + inner);
    // skia arcs measure from the +x axis, clockwise on screen; our angles
    // measure from the top, also clockwise
    let start = (theta - half_width).to_degrees() as f32 - 90.0;
    let sweep = (half_width * 2.0).to_degrees() as f32;
    let mut path = skia::PathBuilder::new();
    path.arc_to(outer_rect, start, sweep, true);
    path.arc_to(inner_rect, start + sweep, -sweep, false);
    path.close();
    path.detach()
}

/// Rounded translucent box behind a label, rotated about the anchor.
#[allow(clippy::too_many_arguments)]
fn draw_boxed_label(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    degrees: f32,
    halign: HAlign,
    pad: f32,
) {
    let p = shaper.layout(text, size, theme.text, true);
    let (w, h) = (p.longest_line(), p.height());
    let dx = match halign {
        HAlign::Left => 0.0,
        HAlign::Center => -w * 0.5,
        HAlign::Right => -w,
    };

    canvas.save();
    canvas.translate((x, y));
    canvas.rotate(degrees, None);
    let mut face = skia::Paint::default();
    face.set_anti_alias(true);
    face.set_color(theme.label_box);
    let rect = skia::Rect::from_ltrb(dx - pad, -h * 0.5 - pad, dx + w + pad, h * 0.5 + pad);
    canvas.draw_round_rect(rect, pad * 1.5, pad * 1.5, &face);
    p.paint(canvas, (dx, -h * 0.5));
    canvas.restore();
}
