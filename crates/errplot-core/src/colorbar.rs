// File: crates/errplot-core/src/colorbar.rs
// Summary: Vertical colorbar legend mapping a colormap back to raw values.

use skia_safe as skia;

use crate::colormap::ColorMap;
use crate::grid::{linspace, sci};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;

/// A vertical legend strip: the colormap minimum sits at the bottom, tick
/// labels cover the raw (non-normalized) value range, and the caption runs
/// bottom-to-top beside the ticks.
pub struct Colorbar<'a> {
    pub rect: skia::Rect,
    pub cmap: &'a ColorMap,
    pub vmin: f64,
    pub vmax: f64,
    pub label: &'a str,
    /// Tick label size, in pixels.
    pub tick_size: f32,
    /// Caption size, in pixels.
    pub label_size: f32,
}

impl Colorbar<'_> {
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        theme: &Theme,
        stroke_px: f32,
        draw_labels: bool,
    ) {
        let rect = self.rect;

        // Sample the ramp one row at a time; no shader keeps output identical
        // across backends.
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(false);
        let rows = rect.height().ceil().max(1.0) as i32;
        for row in 0..rows {
            let t = row as f64 / (rows as f64 - 1.0).max(1.0);
            fill.set_color(self.cmap.eval(t));
            let y1 = rect.bottom - row as f32;
            let y0 = (y1 - 1.0).max(rect.top);
            canvas.draw_rect(skia::Rect::from_ltrb(rect.left, y0, rect.right, y1), &fill);
        }

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(stroke_px);
        border.set_color(theme.axis_line);
        canvas.draw_rect(rect, &border);

        if !draw_labels {
            return;
        }

        let tick_len = rect.width() * 0.35;
        let ticks: Vec<String> = linspace(self.vmin, self.vmax, 6)
            .iter()
            .map(|v| sci(*v, 1))
            .collect();
        let mut label_w = 0.0f32;
        for (i, tick) in ticks.iter().enumerate() {
            let f = i as f32 / (ticks.len() - 1) as f32;
            let y = rect.bottom - f * rect.height();
            canvas.draw_line((rect.right, y), (rect.right + tick_len, y), &border);
            shaper.draw(
                canvas,
                tick,
                rect.right + tick_len * 1.6,
                y,
                self.tick_size,
                theme.text,
                false,
                HAlign::Left,
                VAlign::Center,
            );
            label_w = label_w.max(shaper.measure(tick, self.tick_size, false).0);
        }

        let caption_x = rect.right + tick_len * 1.6 + label_w + self.label_size * 0.6;
        shaper.draw_rotated(
            canvas,
            self.label,
            caption_x,
            rect.center_y(),
            self.label_size,
            theme.text,
            false,
            -90.0,
            HAlign::Center,
            VAlign::Top,
        );
    }
}
