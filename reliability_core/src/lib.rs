//! reliability_core - Burn survival-probability engine
//!
//! Predicts an engine's (or clustered-engine's) chance of completing a
//! burn of a given duration, from a reliability range, a rated burn
//! time and optional overburn behavior. The pipeline:
//!
//! - `spline`: piecewise cubic Hermite curves (the shared evaluator)
//! - `curve::hazard`: time -> hazard multiplier for one configuration
//! - `curve::experience`: accumulated data -> instantaneous reliability
//! - `survival`: exponential decay scaled by the integrated hazard
//! - `cluster`: independence-based composition for N-unit clusters
//! - `chart`: orchestration into renderable sample sets
//! - `format`: display strings for the hosting layer
//!
//! Everything is a pure function over explicit inputs; splines are
//! immutable once built, so curves can be shared and evaluated across
//! threads freely. The library knows nothing about rendering surfaces
//! or input devices.

pub mod chart;
pub mod cluster;
pub mod config;
pub mod curve;
pub mod error;
pub mod format;
pub mod prelude;
pub mod spline;
pub mod survival;

// Re-export core types for convenience
pub use chart::{ignition_reliability, nice_axis_floor, BurnChart};
pub use cluster::cluster_probability;
pub use config::{
    default_engines, load_engine_configs, parse_engine_configs, ConfigError, EngineConfig,
    SamplingConfig,
};
pub use curve::{build_hazard_curve, ExperienceCurve, MAX_EXPERIENCE};
pub use error::ModelError;
pub use format::{format_duration, format_odds, format_percent};
pub use spline::{HermiteSpline, SplineKey};
pub use survival::{base_failure_rate, integrate, sample_survival, survival_at_time, SurvivalSamples};
