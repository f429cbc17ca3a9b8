// File: crates/errplot-core/tests/colormap.rs
// Purpose: Colormap interpolation and tick/format helpers.

use errplot_core::grid::{linspace, logspace, sci};
use errplot_core::ColorMap;

#[test]
fn endpoints_hit_the_stop_colors() {
    let cmap = ColorMap::error_heat();
    assert_eq!(cmap.eval_rgb(0.0), [0x2a, 0x9d, 0x8f]);
    assert_eq!(cmap.eval_rgb(1.0), [0xe7, 0x6f, 0x51]);

    let cmap = ColorMap::ocean();
    assert_eq!(cmap.eval_rgb(0.0), [0x00, 0x77, 0xb6]);
    assert_eq!(cmap.eval_rgb(1.0), [0x90, 0xe0, 0xef]);
}

#[test]
fn midpoint_interpolates_linearly() {
    let cmap = ColorMap::ocean();
    assert_eq!(cmap.eval_rgb(0.5), [72, 172, 211]);
}

#[test]
fn out_of_range_inputs_clamp() {
    let cmap = ColorMap::error_heat();
    assert_eq!(cmap.eval_rgb(-3.0), cmap.eval_rgb(0.0));
    assert_eq!(cmap.eval_rgb(42.0), cmap.eval_rgb(1.0));
}

#[test]
fn linspace_is_inclusive_and_even() {
    let v = linspace(0.0, 1.0, 5);
    assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn logspace_spans_the_decade_range() {
    let levels = logspace(-4.0, -2.0, 5);
    assert_eq!(levels.len(), 5);
    assert!((levels[0] - 1e-4).abs() < 1e-16);
    assert!((levels[4] - 1e-2).abs() < 1e-14);
    assert!(levels.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn sci_formats_like_a_two_digit_exponent() {
    assert_eq!(sci(1.234e-4, 2), "1.23e-04");
    assert_eq!(sci(0.000123, 1), "1.2e-04");
    assert_eq!(sci(1e-4, 0), "1e-04");
    assert_eq!(sci(1000.0, 0), "1e+03");
    assert_eq!(sci(0.0, 1), "0.0e+00");
    // rounding carries into the next decade
    assert_eq!(sci(9.99e-3, 1), "1.0e-02");
}
