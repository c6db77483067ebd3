//! Hermite spline - Piecewise cubic curve with explicit per-key tangents
//!
//! Each segment between keys `k0` and `k1` is evaluated with the
//! standard cubic Hermite basis, tangents scaled by segment duration:
//!
//! `value = h00(s)·k0.value + h10(s)·d·k0.out_tangent + h01(s)·k1.value + h11(s)·d·k1.in_tangent`
//!
//! with `d = k1.time - k0.time`, `s = (t - k0.time) / d` and
//! `h00 = 2s³-3s²+1`, `h10 = s³-2s²+s`, `h01 = -2s³+3s²`, `h11 = s³-s²`.
//!
//! Outside the key range the curve extrapolates flat (first/last key
//! value). Splines are immutable once built, so they can be evaluated
//! from multiple threads without locking.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// A single control point on a Hermite spline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineKey {
    /// Position on the horizontal axis (seconds for hazard curves,
    /// data units for experience curves)
    pub time: f64,
    /// Curve value at this key
    pub value: f64,
    /// Tangent used by the segment ending at this key
    pub in_tangent: f64,
    /// Tangent used by the segment starting at this key
    pub out_tangent: f64,
}

impl SplineKey {
    pub fn new(time: f64, value: f64, in_tangent: f64, out_tangent: f64) -> Self {
        SplineKey {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }

    /// Key with zero tangents (flat boundary key)
    pub fn flat(time: f64, value: f64) -> Self {
        SplineKey::new(time, value, 0.0, 0.0)
    }
}

/// An immutable piecewise cubic Hermite curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HermiteSpline {
    keys: Vec<SplineKey>,
}

impl HermiteSpline {
    /// Build a spline from keys in strictly increasing time order
    ///
    /// Fails with `InvalidCurve` if fewer than 2 keys are given or the
    /// key times are not strictly increasing.
    pub fn new(keys: Vec<SplineKey>) -> Result<Self, ModelError> {
        if keys.len() < 2 {
            return Err(ModelError::InvalidCurve(format!(
                "a spline needs at least 2 keys, got {}",
                keys.len()
            )));
        }
        for pair in keys.windows(2) {
            if pair[1].time <= pair[0].time {
                return Err(ModelError::InvalidCurve(format!(
                    "key times must be strictly increasing ({} then {})",
                    pair[0].time, pair[1].time
                )));
            }
        }
        Ok(HermiteSpline { keys })
    }

    /// Evaluate the curve at `t`, clamping to the first/last key value
    /// outside the key range
    pub fn evaluate(&self, t: f64) -> f64 {
        let first = self.keys[0];
        if t <= first.time {
            return first.value;
        }
        let last = self.keys[self.keys.len() - 1];
        if t >= last.time {
            return last.value;
        }

        // t is strictly inside the key range, so a bracketing segment exists
        let idx = self
            .keys
            .windows(2)
            .position(|pair| t < pair[1].time)
            .unwrap_or(self.keys.len() - 2);
        let k0 = self.keys[idx];
        let k1 = self.keys[idx + 1];

        let d = k1.time - k0.time;
        let s = (t - k0.time) / d;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * k0.value + h10 * d * k0.out_tangent + h01 * k1.value + h11 * d * k1.in_tangent
    }

    /// The control points, in time order
    pub fn keys(&self) -> &[SplineKey] {
        &self.keys
    }

    /// Time of the first key
    pub fn first_time(&self) -> f64 {
        self.keys[0].time
    }

    /// Time of the last key
    pub fn last_time(&self) -> f64 {
        self.keys[self.keys.len() - 1].time
    }
}
