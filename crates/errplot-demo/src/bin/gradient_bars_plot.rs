// File: crates/errplot-demo/src/bin/gradient_bars_plot.rs
// Summary: One-shot renderer: result/data.txt -> result/gradient_bars_plot.png.

use anyhow::{Context, Result};
use errplot_core::{read_data, GradientBarChart, RenderOptions};

const INPUT: &str = "result/data.txt";
const OUTPUT: &str = "result/gradient_bars_plot.png";

fn main() -> Result<()> {
    let data = read_data(INPUT).with_context(|| format!("failed to load '{INPUT}'"))?;
    let chart = GradientBarChart::new(data);
    chart
        .render_to_png(&RenderOptions::bars(), OUTPUT)
        .with_context(|| format!("failed to render '{OUTPUT}'"))?;
    println!("Gradient bar chart saved as {OUTPUT}");
    Ok(())
}
