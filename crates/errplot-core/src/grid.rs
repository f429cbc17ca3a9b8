// File: crates/errplot-core/src/grid.rs
// Summary: Tick layout helpers and scientific-notation formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// `steps` powers of ten over evenly spaced exponents in [exp_start, exp_end].
pub fn logspace(exp_start: f64, exp_end: f64, steps: usize) -> Vec<f64> {
    linspace(exp_start, exp_end, steps)
        .into_iter()
        .map(|e| 10f64.powf(e))
        .collect()
}

/// Scientific notation with a fixed mantissa precision and a two-digit
/// exponent: `sci(0.000123, 1)` is `"1.2e-04"`.
pub fn sci(v: f64, digits: usize) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{v:.digits$}e+00");
    }
    let mut exp = v.abs().log10().floor() as i32;
    let mut mant = v / 10f64.powi(exp);
    // rounding at the requested precision can carry the mantissa to 10.0
    if mant.abs() + 0.5 * 10f64.powi(-(digits as i32)) >= 10.0 {
        mant /= 10.0;
        exp += 1;
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mant:.digits$}e{sign}{:02}", exp.abs())
}
