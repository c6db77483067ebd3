//! Survival model - Probability of completing a burn of a given length
//!
//! Inside the rated window the model is a pure exponential pinned to
//! the configured reliability at exactly the rated burn time:
//!
//! `survival(t) = reliability ^ (t / rated_burn_time)`
//!
//! which is `exp(-base_rate * t)` for the constant hazard rate
//! `base_rate = -ln(reliability) / rated_burn_time`. Past the rated
//! window the hazard curve scales that base rate, and the extra
//! failure exposure is the integral of the curve from the rated time
//! to `t`:
//!
//! `survival(t) = reliability * exp(-base_rate * ∫ hazard)`
//!
//! Both branches agree at `t = rated_burn_time`, so the survival curve
//! is continuous across the boundary.
//!
//! Precondition: `reliability` is in `(0, 1]`, guaranteed by the
//! upstream validation in the curve builders and `EngineConfig`. The
//! evaluation path stays branch-free rather than re-checking it.

pub mod integrate;

pub use integrate::integrate;

use crate::spline::HermiteSpline;
use serde::{Deserialize, Serialize};

/// Constant hazard rate matching `reliability` at the rated burn time
pub fn base_failure_rate(reliability: f64, rated_burn_time: f64) -> f64 {
    -reliability.ln() / rated_burn_time
}

/// Probability of surviving a burn of length `t`
///
/// `hazard` must be the curve built for the same burn-time
/// configuration (see `build_hazard_curve`); `steps` is the
/// integrator's sub-interval count for the overburn region.
pub fn survival_at_time(
    t: f64,
    rated_burn_time: f64,
    reliability: f64,
    hazard: &HermiteSpline,
    steps: u32,
) -> f64 {
    if t <= 0.0 {
        return 1.0;
    }
    if t <= rated_burn_time {
        return reliability.powf(t / rated_burn_time);
    }

    let base_rate = base_failure_rate(reliability, rated_burn_time);
    let integrated_hazard = integrate(hazard, rated_burn_time, t, steps);
    (reliability * (-base_rate * integrated_hazard).exp()).clamp(0.0, 1.0)
}

/// One sampled survival curve, ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalSamples {
    /// Sample times, evenly spaced over `[0, max_time]`
    pub times: Vec<f64>,
    /// Survival probability at each sample time
    pub probabilities: Vec<f64>,
    /// Minimum probability observed across the samples
    pub min: f64,
}

/// Sample the survival curve at `points` evenly spaced times
///
/// Both endpoints are included (`times[0] == 0`, `times[last] ==
/// max_time`). A non-positive `max_time` degenerates to the single
/// sample `(0, 1)`; `points` below 2 is raised to 2.
pub fn sample_survival(
    reliability: f64,
    rated_burn_time: f64,
    hazard: &HermiteSpline,
    max_time: f64,
    points: usize,
    steps: u32,
) -> SurvivalSamples {
    if max_time <= 0.0 {
        return SurvivalSamples {
            times: vec![0.0],
            probabilities: vec![1.0],
            min: 1.0,
        };
    }

    let points = points.max(2);
    let step = max_time / (points - 1) as f64;
    let mut times = Vec::with_capacity(points);
    let mut probabilities = Vec::with_capacity(points);
    let mut min = f64::INFINITY;

    for i in 0..points {
        let t = step * i as f64;
        let p = survival_at_time(t, rated_burn_time, reliability, hazard, steps);
        min = min.min(p);
        times.push(t);
        probabilities.push(p);
    }

    SurvivalSamples {
        times,
        probabilities,
        min,
    }
}
