//! Trapezoidal integration over a Hermite spline
//!
//! Fixed-step trapezoidal rule, no adaptive refinement. The step count
//! is an accuracy/performance knob (default 20, see
//! `config::SamplingConfig`); consumers tolerate the discretization
//! error rather than demanding an exact quadrature.

use crate::spline::HermiteSpline;

/// Integrate `curve` over `[t1, t2]` with `steps` equal sub-intervals
///
/// Returns 0.0 for a degenerate interval (`t2 <= t1`) or `steps == 0`.
pub fn integrate(curve: &HermiteSpline, t1: f64, t2: f64, steps: u32) -> f64 {
    if t2 <= t1 || steps == 0 {
        return 0.0;
    }

    let width = (t2 - t1) / steps as f64;
    let mut sum = 0.0;
    for i in 0..steps {
        let a = t1 + width * i as f64;
        let b = t1 + width * (i + 1) as f64;
        sum += (curve.evaluate(a) + curve.evaluate(b)) * 0.5 * (b - a);
    }
    sum
}
