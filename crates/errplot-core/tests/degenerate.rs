// File: crates/errplot-core/tests/degenerate.rs
// Purpose: Typed rejections for datasets the renderers cannot draw, and the
// documented properties of the valid edge cases.

use errplot_core::{DataError, Dataset, GradientBarChart, PolarErrorChart, RenderOptions};

fn assert_degenerate(result: anyhow::Result<Vec<u8>>) {
    let err = result.expect_err("degenerate dataset must be rejected");
    let data_err = err.downcast_ref::<DataError>().expect("typed DataError");
    assert!(matches!(data_err, DataError::Degenerate(_)), "got {data_err}");
}

#[test]
fn polar_rejects_an_empty_dataset() {
    let chart = PolarErrorChart::new(Dataset::default());
    assert_degenerate(chart.render_to_png_bytes(&RenderOptions::polar()));
}

#[test]
fn polar_rejects_all_zero_errors() {
    let chart = PolarErrorChart::new(Dataset::from_pairs(&[(1, 0.0), (2, 0.0)]));
    assert_degenerate(chart.render_to_png_bytes(&RenderOptions::polar()));
}

#[test]
fn polar_all_equal_errors_share_one_color() {
    let chart = PolarErrorChart::new(Dataset::from_pairs(&[(1, 2.5e-3), (2, 2.5e-3), (3, 2.5e-3)]));
    let norm = chart.normalized_errors().expect("all-equal positive errors are valid");
    assert!(norm.iter().all(|&t| t == 1.0));
    let colors: Vec<[u8; 3]> = norm.iter().map(|&t| chart.cmap.eval_rgb(t)).collect();
    assert!(colors.windows(2).all(|w| w[0] == w[1]), "wedge colors differ");
}

#[test]
fn gradient_rejects_a_single_point() {
    let chart = GradientBarChart::new(Dataset::from_pairs(&[(1, 1e-3)]));
    assert_degenerate(chart.render_to_png_bytes(&RenderOptions::bars()));
}

#[test]
fn gradient_rejects_non_positive_errors() {
    let chart = GradientBarChart::new(Dataset::from_pairs(&[(1, 0.0), (2, 1e-3)]));
    assert_degenerate(chart.render_to_png_bytes(&RenderOptions::bars()));

    let chart = GradientBarChart::new(Dataset::from_pairs(&[(1, -1e-3), (2, 1e-3)]));
    assert_degenerate(chart.render_to_png_bytes(&RenderOptions::bars()));
}

#[test]
fn gradient_rejects_equal_min_and_max() {
    let chart = GradientBarChart::new(Dataset::from_pairs(&[(1, 1e-3), (2, 1e-3)]));
    assert_degenerate(chart.render_to_png_bytes(&RenderOptions::bars()));
}

#[test]
fn gradient_marks_the_lowest_error_optimal() {
    let chart = GradientBarChart::new(Dataset::from_pairs(&[(1, 1e-3), (2, 1e-4), (3, 1e-2)]));
    let i = chart.optimal_index().expect("non-empty dataset");
    assert_eq!(chart.data.n_values[i], 2);
}
