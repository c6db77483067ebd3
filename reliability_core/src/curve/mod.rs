//! Curve builders for the reliability model
//!
//! Two independent spline constructions share the Hermite evaluator:
//! - `hazard`: time -> unitless hazard multiplier for one engine
//!   configuration
//! - `experience`: accumulated data units -> instantaneous reliability

pub mod experience;
pub mod hazard;

pub use experience::{ExperienceCurve, MAX_EXPERIENCE};
pub use hazard::build_hazard_curve;

use crate::error::ModelError;

/// Reject a reliability value outside `(0, 1]`
///
/// Zero is excluded because the survival model takes `ln(reliability)`.
pub(crate) fn ensure_reliability(label: &str, value: f64) -> Result<(), ModelError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidInput(format!(
            "{label} must be in (0, 1], got {value}"
        )))
    }
}
