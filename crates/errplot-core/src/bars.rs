// File: crates/errplot-core/src/bars.rs
// Summary: Log-scale gradient bar chart of error vs n with an optimal-n callout.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::colorbar::Colorbar;
use crate::colormap::ColorMap;
use crate::data::Dataset;
use crate::error::DataError;
use crate::grid::{logspace, sci};
use crate::render::{self, RenderOptions};
use crate::scale::ValueScale;
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::Theme;
use crate::types::{pt, BARS_HEIGHT, BARS_WIDTH};

/// Bar width in x-axis units (n values are one unit apart).
const BAR_WIDTH: f64 = 0.7;
const FILL_ALPHA: u8 = 217;
// y limits padded to 0.8x the smallest and 1.2x the largest error
const Y_PAD_LO: f64 = 0.8;
const Y_PAD_HI: f64 = 1.2;
/// Count of dotted reference levels spanning the data's decade range.
const REF_LEVELS: usize = 5;

pub struct GradientBarChart {
    pub data: Dataset,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub colorbar_label: String,
    pub cmap: ColorMap,
    pub theme: Theme,
}

impl GradientBarChart {
    pub fn new(data: Dataset) -> Self {
        Self {
            data,
            title: "Effect of series term count on approximation accuracy".to_string(),
            x_label: "Number of series terms (n)".to_string(),
            y_label: "Approximation error (log scale)".to_string(),
            colorbar_label: "Error value".to_string(),
            cmap: ColorMap::ocean(),
            theme: Theme::light(),
        }
    }

    /// Index of the data point the callout marks: the first minimum error.
    pub fn optimal_index(&self) -> Option<usize> {
        self.data.min_err_index()
    }

    /// Check the renderability preconditions; returns (min_err, max_err).
    fn validate(&self) -> Result<(f64, f64), DataError> {
        if self.data.is_empty() {
            return Err(DataError::Degenerate("no data points to draw".into()));
        }
        if self.data.len() < 2 {
            return Err(DataError::Degenerate(
                "min/max normalization needs at least two data points".into(),
            ));
        }
        if let Some(bad) = self.data.err_values.iter().copied().find(|&e| !(e > 0.0)) {
            return Err(DataError::Degenerate(format!(
                "error values must be positive on a log scale, got {bad}"
            )));
        }
        let min = self.data.min_err().unwrap_or(f64::NAN);
        let max = self.data.max_err().unwrap_or(f64::NAN);
        if min == max {
            return Err(DataError::Degenerate(
                "all error values are equal; min/max normalization is undefined".into(),
            ));
        }
        Ok((min, max))
    }

    /// Render the chart to a PNG at `path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        render::write_png(path, &bytes)
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (min_err, max_err) = self.validate()?;
        render::render_png_bytes(opts, |canvas| {
            self.draw(canvas, opts, min_err, max_err);
            Ok(())
        })
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, min_err: f64, max_err: f64) {
        let s = opts.scale_for(BARS_WIDTH, BARS_HEIGHT);
        let px = |points: f32| pt(points) * s;

        let left = px(opts.insets.left as f32);
        let right = opts.width as f32 - px(opts.insets.right as f32);
        let top = px(opts.insets.top as f32);
        let bottom = opts.height as f32 - px(opts.insets.bottom as f32);

        // x covers every n with one bar slot of padding on each side
        let x_min = self.data.n_values.iter().min().copied().unwrap_or(0) as f64 - 1.0;
        let x_max = self.data.n_values.iter().max().copied().unwrap_or(0) as f64 + 1.0;
        let xspan = (x_max - x_min).max(1e-9);
        let sx = |x: f64| -> f32 { left + ((x - x_min) / xspan) as f32 * (right - left) };
        let scale_y = ValueScale::new_log10(top, bottom, Y_PAD_LO * min_err, Y_PAD_HI * max_err);

        let shaper = TextShaper::new();

        // plot face and grids under the bars
        let mut face = skia::Paint::default();
        face.set_color(self.theme.plot_face);
        canvas.draw_rect(skia::Rect::from_ltrb(left, top, right, bottom), &face);

        let mut ygrid = skia::Paint::default();
        ygrid.set_anti_alias(true);
        ygrid.set_style(skia::paint::Style::Stroke);
        ygrid.set_stroke_width(px(0.8));
        ygrid.set_color(self.theme.bar_grid);
        ygrid.set_path_effect(skia::dash_path_effect::new(&[px(5.0), px(4.0)], 0.0));
        let dec_lo = scale_y.vmin.log10().ceil() as i32;
        let dec_hi = scale_y.vmax.log10().floor() as i32;
        for d in dec_lo..=dec_hi {
            let y = scale_y.to_px(10f64.powi(d));
            canvas.draw_line((left, y), (right, y), &ygrid);
        }

        let mut refline = skia::Paint::default();
        refline.set_anti_alias(true);
        refline.set_style(skia::paint::Style::Stroke);
        refline.set_stroke_width(px(0.8));
        refline.set_color(self.theme.ref_line);
        refline.set_path_effect(skia::dash_path_effect::new(&[px(1.5), px(3.0)], 0.0));
        let levels = logspace(min_err.log10().floor(), max_err.log10().ceil(), REF_LEVELS);
        for level in levels {
            if level < scale_y.vmin || level > scale_y.vmax {
                continue;
            }
            let y = scale_y.to_px(level);
            canvas.draw_line((left, y), (right, y), &refline);
        }

        // bars, colored by inverted min/max normalization so the best
        // (lowest) error draws the most saturated color
        let span = max_err - min_err;
        let half = (BAR_WIDTH * 0.5 / xspan) as f32 * (right - left);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        let mut edge = skia::Paint::default();
        edge.set_anti_alias(true);
        edge.set_style(skia::paint::Style::Stroke);
        edge.set_stroke_width(px(1.5));
        edge.set_color(self.theme.bar_edge);
        for (&nv, &err) in self.data.n_values.iter().zip(&self.data.err_values) {
            let t = (err - min_err) / span;
            fill.set_color(self.cmap.eval_with_alpha(1.0 - t, FILL_ALPHA));
            let x = sx(nv as f64);
            let rect = skia::Rect::from_ltrb(x - half, scale_y.to_px(err), x + half, bottom);
            canvas.draw_rect(rect, &fill);
            canvas.draw_rect(rect, &edge);
        }

        let mut axis = skia::Paint::default();
        axis.set_anti_alias(true);
        axis.set_style(skia::paint::Style::Stroke);
        axis.set_stroke_width(px(1.0));
        axis.set_color(self.theme.axis_line);
        canvas.draw_rect(skia::Rect::from_ltrb(left, top, right, bottom), &axis);

        if opts.draw_labels {
            // error value above each bar, climbing at 45 degrees
            for (&nv, &err) in self.data.n_values.iter().zip(&self.data.err_values) {
                shaper.draw_rotated(
                    canvas,
                    &sci(err, 1),
                    sx(nv as f64),
                    scale_y.to_px(err * 1.05),
                    px(9.0),
                    self.theme.text,
                    true,
                    -45.0,
                    HAlign::Left,
                    VAlign::Bottom,
                );
            }

            for &nv in &self.data.n_values {
                let x = sx(nv as f64);
                canvas.draw_line((x, bottom), (x, bottom + px(4.0)), &axis);
                shaper.draw(
                    canvas,
                    &nv.to_string(),
                    x,
                    bottom + px(7.0),
                    px(10.0),
                    self.theme.text,
                    false,
                    HAlign::Center,
                    VAlign::Top,
                );
            }
            for d in dec_lo..=dec_hi {
                let v = 10f64.powi(d);
                let y = scale_y.to_px(v);
                canvas.draw_line((left - px(4.0), y), (left, y), &axis);
                shaper.draw(
                    canvas,
                    &sci(v, 0),
                    left - px(7.0),
                    y,
                    px(9.0),
                    self.theme.text,
                    false,
                    HAlign::Right,
                    VAlign::Center,
                );
            }

            shaper.draw(
                canvas,
                &self.x_label,
                (left + right) * 0.5,
                bottom + px(28.0),
                px(12.0),
                self.theme.text,
                true,
                HAlign::Center,
                VAlign::Top,
            );
            shaper.draw_rotated(
                canvas,
                &self.y_label,
                left - px(70.0),
                (top + bottom) * 0.5,
                px(12.0),
                self.theme.text,
                true,
                -90.0,
                HAlign::Center,
                VAlign::Top,
            );
            shaper.draw(
                canvas,
                &self.title,
                (left + right) * 0.5,
                px(22.0),
                px(16.0),
                self.theme.title,
                true,
                HAlign::Center,
                VAlign::Top,
            );

            if let Some(i) = self.optimal_index() {
                let nv = self.data.n_values[i];
                let err = self.data.err_values[i];
                let tip = (sx(nv as f64), scale_y.to_px(err));
                let text = format!("Optimal n: {nv}\nError: {}", sci(err, 1));
                let tx = sx(nv as f64 + 0.5);
                // a decade above the bar tip, clamped into the plot
                let ty = scale_y.to_px(err * 10.0).max(top + px(12.0));
                draw_callout(
                    canvas, &shaper, &self.theme, &text,
                    tx, ty, tip, px(10.0), px(5.0), px(1.5),
                );
            }
        }

        let cb_h = (bottom - top) * 0.8;
        let cb = Colorbar {
            rect: skia::Rect::from_xywh(
                right + px(30.0),
                (top + bottom) * 0.5 - cb_h * 0.5,
                px(20.0),
                cb_h,
            ),
            cmap: &self.cmap,
            vmin: min_err,
            vmax: max_err,
            label: &self.colorbar_label,
            tick_size: px(8.0),
            label_size: px(10.0),
        };
        cb.draw(canvas, &shaper, &self.theme, px(1.0), opts.draw_labels);
    }
}

/// Rounded callout box anchored at its text's lower-left corner, with an
/// arrow from the box boundary to `tip`.
#[allow(clippy::too_many_arguments)]
fn draw_callout(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    theme: &Theme,
    text: &str,
    x: f32,
    y: f32,
    tip: (f32, f32),
    size: f32,
    pad: f32,
    stroke: f32,
) {
    let p = shaper.layout(text, size, theme.text, true);
    let (w, h) = (p.longest_line(), p.height());
    let rect = skia::Rect::from_ltrb(x - pad, y - h - pad, x + w + pad, y + pad);

    let mut face = skia::Paint::default();
    face.set_anti_alias(true);
    face.set_color(theme.callout_face);
    canvas.draw_round_rect(rect, pad, pad, &face);
    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(stroke);
    edge.set_color(theme.callout_edge);
    canvas.draw_round_rect(rect, pad, pad, &edge);
    p.paint(canvas, (x, y - h));

    // arrow leaves the box where the line from its center exits the rect
    let (cx, cy) = (rect.center_x(), rect.center_y());
    let (dx, dy) = (tip.0 - cx, tip.1 - cy);
    let tx = if dx != 0.0 {
        ((if dx < 0.0 { rect.left } else { rect.right }) - cx) / dx
    } else {
        f32::INFINITY
    };
    let ty = if dy != 0.0 {
        ((if dy < 0.0 { rect.top } else { rect.bottom }) - cy) / dy
    } else {
        f32::INFINITY
    };
    let t = tx.min(ty).max(0.0);
    let start = (cx + dx * t, cy + dy * t);

    canvas.draw_line(start, tip, &edge);

    let len = ((tip.0 - start.0).powi(2) + (tip.1 - start.1).powi(2)).sqrt().max(1.0);
    let (ux, uy) = ((tip.0 - start.0) / len, (tip.1 - start.1) / len);
    let head = size * 0.9;
    let base = (tip.0 - ux * head, tip.1 - uy * head);
    let (nx, ny) = (-uy, ux);
    let mut head_builder = skia::PathBuilder::new();
    head_builder.move_to(tip);
    head_builder.line_to((base.0 + nx * head * 0.45, base.1 + ny * head * 0.45));
    head_builder.line_to((base.0 - nx * head * 0.45, base.1 - ny * head * 0.45));
    head_builder.close();
    let head_path = head_builder.detach();
    let mut head_fill = skia::Paint::default();
    head_fill.set_anti_alias(true);
    head_fill.set_color(theme.callout_edge);
    canvas.draw_path(&head_path, &head_fill);
}
