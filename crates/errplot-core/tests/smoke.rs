// File: crates/errplot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNGs.

use errplot_core::{Dataset, GradientBarChart, PolarErrorChart, RenderOptions};

fn sample() -> Dataset {
    Dataset::from_pairs(&[
        (1, 2.0e-1),
        (2, 9.5e-2),
        (3, 3.1e-2),
        (4, 8.7e-3),
        (5, 2.2e-3),
        (6, 5.4e-4),
        (7, 1.3e-4),
        (8, 3.1e-5),
    ])
}

#[test]
fn render_polar_smoke_png() {
    let chart = PolarErrorChart::new(sample());
    let mut opts = RenderOptions::polar();
    // keep the smoke run off the full 350 DPI surface
    opts.width = 1400;
    opts.height = 1000;

    let out = std::path::PathBuf::from("target/test_out/polar_smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_gradient_smoke_png() {
    let chart = GradientBarChart::new(sample());
    let mut opts = RenderOptions::bars();
    opts.width = 1400;
    opts.height = 800;

    let out = std::path::PathBuf::from("target/test_out/gradient_smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
