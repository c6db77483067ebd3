//! Error types for the reliability model

use thiserror::Error;

/// Validation failure raised by the fallible constructors.
///
/// Evaluation functions (spline evaluation, integration, survival
/// sampling) are total over their validated domain and never return
/// this type. Bad scalars are rejected up front rather than clamped,
/// so a caller can never be shown odds computed from silently
/// "repaired" inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A spline cannot be built from the given keys.
    #[error("invalid curve: {0}")]
    InvalidCurve(String),
    /// A scalar input violates a construction precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
