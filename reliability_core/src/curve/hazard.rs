//! Hazard curve - Time-varying failure-rate multiplier for one engine
//!
//! The curve value at time `t` scales the engine's base failure rate:
//! 1.0 is the nominal rated-zone hazard, the value starts high near
//! t=0 to model startup transients, and it climbs steeply once the
//! burn runs past what the engine was rated (and optionally tested)
//! for.
//!
//! Shape, for `rated = 300`, `tested = 600`, `penalty = 2.0`:
//! - t=0:    10.0   (ignition transient)
//! - t=5:    1.0    (settled to nominal)
//! - t=305:  1.0    (plateau extends 5s past rated time)
//! - t=600:  2.0    (penalty at the demonstrated limit)
//! - t=1500: 100.0  (terminal hazard at 2.5× tested time)
//!
//! The curve depends only on the burn-time configuration, never on
//! reliability, so one hazard curve is built per configuration and
//! shared across every reliability value evaluated against it.
//!
//! The ramp-shape constants below are empirical tuning inherited from
//! the reference reliability model. Outputs must match that model, so
//! they are reproduced verbatim, not re-derived.

use crate::error::ModelError;
use crate::spline::{HermiteSpline, SplineKey};

/// Hazard multiplier at the instant of ignition
const STARTUP_HAZARD: f64 = 10.0;
/// Seconds until the startup transient settles to nominal
const STARTUP_SETTLE_TIME: f64 = 5.0;
/// In-tangent of the settle key: shapes the decay from the startup
/// transient; the outgoing plateau segment stays flat
const STARTUP_SETTLE_TANGENT: f64 = -0.8;
/// Seconds of nominal hazard granted past the rated burn time
const RATED_CUSHION: f64 = 5.0;
/// The hazard ramp tops out at this multiple of the reference duration
const RUNOUT_FACTOR: f64 = 2.5;
/// Hazard multiplier at the top of the ramp
const TERMINAL_HAZARD: f64 = 100.0;
/// Ramp shape into the tested-time penalty key
const OVERBURN_RAMP_SHAPE: f64 = 3.135;
/// Ramp shape into the terminal key when a tested time is present
const TERMINAL_RAMP_SHAPE: f64 = 1.989;
/// Ramp shape into the terminal key without a tested time
const UNTESTED_RAMP_SHAPE: f64 = 292.8;

/// Build the hazard curve for one engine configuration
///
/// Fails with `InvalidInput` if `rated_burn_time <= 0` or a tested
/// burn time does not exceed the rated burn time. A tested time that
/// falls inside the post-rated cushion cannot produce an ordered key
/// sequence and surfaces as `InvalidCurve`.
pub fn build_hazard_curve(
    rated_burn_time: f64,
    tested_burn_time: Option<f64>,
    overburn_penalty: f64,
) -> Result<HermiteSpline, ModelError> {
    if !(rated_burn_time > 0.0) {
        return Err(ModelError::InvalidInput(format!(
            "rated burn time must be positive, got {rated_burn_time}"
        )));
    }
    if let Some(tested) = tested_burn_time {
        if !(tested > rated_burn_time) {
            return Err(ModelError::InvalidInput(format!(
                "tested burn time ({tested}) must exceed rated burn time ({rated_burn_time})"
            )));
        }
    }

    let plateau_end = rated_burn_time + RATED_CUSHION;
    let mut keys = vec![
        SplineKey::flat(0.0, STARTUP_HAZARD),
        // the settle tangent only bends the incoming startup segment;
        // a zero out-tangent keeps the plateau toward rated+cushion at
        // exactly 1.0
        SplineKey::new(STARTUP_SETTLE_TIME, 1.0, STARTUP_SETTLE_TANGENT, 0.0),
        SplineKey::flat(plateau_end, 1.0),
    ];

    match tested_burn_time {
        Some(tested) => {
            let penalty_tangent =
                OVERBURN_RAMP_SHAPE / (tested - plateau_end) * (overburn_penalty - 1.0);
            let terminal_time = tested * RUNOUT_FACTOR;
            let terminal_tangent = TERMINAL_RAMP_SHAPE / (terminal_time - tested)
                * (TERMINAL_HAZARD - overburn_penalty);
            keys.push(SplineKey::new(
                tested,
                overburn_penalty,
                penalty_tangent,
                penalty_tangent,
            ));
            keys.push(SplineKey::new(
                terminal_time,
                TERMINAL_HAZARD,
                terminal_tangent,
                terminal_tangent,
            ));
        }
        None => {
            let terminal_time = rated_burn_time * RUNOUT_FACTOR;
            let terminal_tangent = UNTESTED_RAMP_SHAPE / (terminal_time - plateau_end);
            keys.push(SplineKey::new(
                terminal_time,
                TERMINAL_HAZARD,
                terminal_tangent,
                terminal_tangent,
            ));
        }
    }

    HermiteSpline::new(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_rated_time() {
        assert!(build_hazard_curve(0.0, None, 1.0).is_err());
        assert!(build_hazard_curve(-10.0, None, 1.0).is_err());
    }

    #[test]
    fn test_rejects_tested_not_beyond_rated() {
        assert!(build_hazard_curve(300.0, Some(300.0), 2.0).is_err());
        assert!(build_hazard_curve(300.0, Some(120.0), 2.0).is_err());
    }

    #[test]
    fn test_rejects_tested_inside_cushion() {
        // tested = rated + 3 collides with the plateau key at rated + 5
        let err = build_hazard_curve(300.0, Some(303.0), 2.0).unwrap_err();
        assert!(matches!(err, ModelError::InvalidCurve(_)));
    }

    #[test]
    fn test_startup_and_plateau_values() {
        let curve = build_hazard_curve(300.0, None, 1.0).unwrap();
        assert!((curve.evaluate(0.0) - 10.0).abs() < 1e-12);
        assert!((curve.evaluate(5.0) - 1.0).abs() < 1e-12);
        assert!((curve.evaluate(305.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_plateau_stays_nominal() {
        // between settling and the post-rated cushion the hazard is
        // exactly the nominal multiplier, both endpoints 1.0 with flat
        // tangents
        let curve = build_hazard_curve(300.0, Some(600.0), 2.0).unwrap();
        for t in [10.0, 50.0, 105.0, 150.0, 200.0, 250.0, 300.0] {
            let v = curve.evaluate(t);
            assert!(
                (v - 1.0).abs() < 1e-12,
                "plateau hazard at t={t} is {v}, expected 1.0"
            );
        }
    }

    #[test]
    fn test_tested_configuration_key_values() {
        // rated 300, tested 600, penalty 2.0
        let curve = build_hazard_curve(300.0, Some(600.0), 2.0).unwrap();
        assert!((curve.evaluate(600.0) - 2.0).abs() < 1e-12);
        assert!((curve.evaluate(1500.0) - 100.0).abs() < 1e-12);
        // flat past the terminal key
        assert!((curve.evaluate(9000.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_untested_configuration_tops_out() {
        let curve = build_hazard_curve(300.0, None, 1.0).unwrap();
        assert!((curve.evaluate(750.0) - 100.0).abs() < 1e-12);
        assert!((curve.evaluate(2000.0) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic_rebuild() {
        let probes = [0.0, 2.5, 5.0, 150.0, 305.0, 400.0, 600.0, 1000.0, 1500.0];
        let a = build_hazard_curve(300.0, Some(600.0), 2.0).unwrap();
        let b = build_hazard_curve(300.0, Some(600.0), 2.0).unwrap();
        for t in probes {
            assert_eq!(a.evaluate(t), b.evaluate(t));
        }
    }

    #[test]
    fn test_hazard_stays_positive_and_ramps_after_tested_time() {
        let curve = build_hazard_curve(300.0, Some(600.0), 2.0).unwrap();
        // the whole curve is a positive multiplier
        for i in 0..=300 {
            let t = i as f64 * 5.0;
            assert!(curve.evaluate(t) > 0.0, "hazard not positive at t={t}");
        }
        // the rated-window plateau sits at the nominal multiplier
        assert!((curve.evaluate(150.0) - 1.0).abs() < 1e-12);
        // past the tested time the ramp toward the terminal key never falls
        let mut prev = curve.evaluate(600.0);
        for i in 1..=45 {
            let t = 600.0 + (1500.0 - 600.0) * i as f64 / 45.0;
            let v = curve.evaluate(t);
            assert!(
                v >= prev - 1e-9,
                "hazard dipped from {prev} to {v} at t={t}"
            );
            prev = v;
        }
    }
}
