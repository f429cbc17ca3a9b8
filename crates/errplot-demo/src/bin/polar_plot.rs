// File: crates/errplot-demo/src/bin/polar_plot.rs
// Summary: One-shot renderer: result/data.txt -> result/polar_plot.png.

use anyhow::{Context, Result};
use errplot_core::{read_data, PolarErrorChart, RenderOptions};

const INPUT: &str = "result/data.txt";
const OUTPUT: &str = "result/polar_plot.png";

fn main() -> Result<()> {
    let data = read_data(INPUT).with_context(|| format!("failed to load '{INPUT}'"))?;
    let chart = PolarErrorChart::new(data);
    chart
        .render_to_png(&RenderOptions::polar(), OUTPUT)
        .with_context(|| format!("failed to render '{OUTPUT}'"))?;
    println!("Polar chart saved as {OUTPUT}");
    Ok(())
}
