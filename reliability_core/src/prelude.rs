//! Prelude module for convenient imports
//!
//! ```rust
//! use reliability_core::prelude::*;
//! ```

// Curves
pub use crate::curve::{build_hazard_curve, ExperienceCurve, MAX_EXPERIENCE};
pub use crate::spline::{HermiteSpline, SplineKey};

// Survival model
pub use crate::survival::{integrate, sample_survival, survival_at_time, SurvivalSamples};

// Composition and orchestration
pub use crate::chart::{ignition_reliability, BurnChart};
pub use crate::cluster::cluster_probability;

// Config
pub use crate::config::{default_engines, EngineConfig, SamplingConfig};

// Errors and formatting
pub use crate::error::ModelError;
pub use crate::format::{format_duration, format_odds, format_percent};
