// File: crates/errplot-core/src/theme.rs
// Summary: Fixed light palette for the error chart renderers.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub title: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub wedge_edge: skia::Color,
    pub label_box: skia::Color,
    pub plot_face: skia::Color,
    pub bar_edge: skia::Color,
    pub bar_grid: skia::Color,
    pub ref_line: skia::Color,
    pub callout_face: skia::Color,
    pub callout_edge: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            title: skia::Color::from_argb(255, 0x21, 0x25, 0x29),
            text: skia::Color::from_argb(255, 0x21, 0x25, 0x29),
            grid: skia::Color::from_argb(77, 128, 128, 128),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            wedge_edge: skia::Color::from_argb(217, 255, 255, 255),
            label_box: skia::Color::from_argb(204, 255, 255, 255),
            plot_face: skia::Color::from_argb(255, 0xf8, 0xf9, 0xfa),
            bar_edge: skia::Color::from_argb(217, 0x03, 0x04, 0x5e),
            bar_grid: skia::Color::from_argb(179, 0xad, 0xb5, 0xbd),
            ref_line: skia::Color::from_argb(102, 0x49, 0x50, 0x57),
            callout_face: skia::Color::from_argb(230, 0xff, 0xd1, 0x66),
            callout_edge: skia::Color::from_argb(255, 0xd0, 0x00, 0x00),
        }
    }
}
