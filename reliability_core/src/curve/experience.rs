//! Reliability-by-experience curve
//!
//! Maps accumulated operational data ("experience units") to an
//! instantaneous reliability, interpolating between the configured
//! start-of-life and fully-matured values. The spline is built in
//! failure-probability space (`1 - reliability`) and converted back on
//! evaluation.
//!
//! The midpoint sits at 3000 experience units carrying 75% of the
//! total improvement, with a tangent blended from a small curvature
//! term and the chord toward the matured endpoint. That choice keeps
//! the failure probability monotone non-increasing whenever
//! `reliability_end >= reliability_start`, without relying on caller
//! discipline.

use crate::curve::ensure_reliability;
use crate::error::ModelError;
use crate::spline::{HermiteSpline, SplineKey};

/// Experience at which reliability reaches its matured value
pub const MAX_EXPERIENCE: f64 = 10_000.0;

/// Fraction of the total improvement reached at the midpoint key
const MID_FRACTION: f64 = 0.75;
/// Horizontal midpoint position as a fraction of the 5000-unit band
/// past the 1000-unit break-in (0.4 puts the key at 3000 units)
const MID_POSITION: f64 = 0.4;
/// Blend between the curvature term and the linear chord term
const TANGENT_WEIGHT: f64 = 0.5;

/// Failure-probability spline over experience for one reliability range
#[derive(Debug, Clone)]
pub struct ExperienceCurve {
    spline: HermiteSpline,
}

impl ExperienceCurve {
    /// Build the curve for a start/end reliability pair
    ///
    /// Fails with `InvalidInput` if either reliability is outside `(0, 1]`.
    pub fn new(reliability_start: f64, reliability_end: f64) -> Result<Self, ModelError> {
        ensure_reliability("start reliability", reliability_start)?;
        ensure_reliability("end reliability", reliability_end)?;

        let fail_start = 1.0 - reliability_start;
        let fail_end = 1.0 - reliability_end;

        let mid_x = MID_POSITION * 5000.0 + 1000.0;
        let mid_y = fail_start + MID_FRACTION * (fail_end - fail_start);
        let tangent = (fail_end - fail_start) * 0.0001 * TANGENT_WEIGHT
            + (fail_end - mid_y) / (MAX_EXPERIENCE - mid_x) * (1.0 - TANGENT_WEIGHT);

        let spline = HermiteSpline::new(vec![
            SplineKey::flat(0.0, fail_start),
            SplineKey::new(mid_x, mid_y, tangent, tangent),
            SplineKey::flat(MAX_EXPERIENCE, fail_end),
        ])?;
        Ok(ExperienceCurve { spline })
    }

    /// Reliability after accumulating `experience` data units
    ///
    /// Experience is clamped to `[0, MAX_EXPERIENCE]`.
    pub fn reliability_at(&self, experience: f64) -> f64 {
        1.0 - self.spline.evaluate(experience.clamp(0.0, MAX_EXPERIENCE))
    }

    /// The underlying failure-probability spline
    pub fn spline(&self) -> &HermiteSpline {
        &self.spline
    }
}
