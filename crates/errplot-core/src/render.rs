// File: crates/errplot-core/src/render.rs
// Summary: Raster surface plumbing shared by the chart renderers.

use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::types::{Insets, BARS_HEIGHT, BARS_WIDTH, POLAR_HEIGHT, POLAR_WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    pub draw_labels: bool,
}

impl RenderOptions {
    /// Defaults for the polar chart surface (14 x 10 in at 350 DPI, white).
    pub fn polar() -> Self {
        Self {
            width: POLAR_WIDTH,
            height: POLAR_HEIGHT,
            insets: Insets::new(40, 230, 90, 40),
            background: skia::Color::from_argb(255, 255, 255, 255),
            draw_labels: true,
        }
    }

    /// Defaults for the gradient bar chart surface (14 x 8 in at 350 DPI, white).
    pub fn bars() -> Self {
        Self {
            width: BARS_WIDTH,
            height: BARS_HEIGHT,
            insets: Insets::new(110, 150, 70, 80),
            background: skia::Color::from_argb(255, 255, 255, 255),
            draw_labels: true,
        }
    }

    /// Uniform scale factor from the chart's design size to this surface.
    /// 1.0 when rendering at the default geometry.
    pub(crate) fn scale_for(&self, design_w: i32, design_h: i32) -> f32 {
        let sx = self.width as f32 / design_w as f32;
        let sy = self.height as f32 / design_h as f32;
        sx.min(sy).max(1e-3)
    }
}

/// Render onto a CPU raster surface and encode the snapshot as PNG bytes.
pub(crate) fn render_png_bytes<F>(opts: &RenderOptions, draw: F) -> Result<Vec<u8>>
where
    F: FnOnce(&skia::Canvas) -> Result<()>,
{
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.background);
    draw(canvas)?;

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Write encoded bytes, creating the parent directory if needed.
pub(crate) fn write_png(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
