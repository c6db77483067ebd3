//! Engine definition loading
//!
//! Engine configurations arrive as `[[engines]]` TOML tables. The
//! hosting application owns where the file lives; this module owns
//! turning raw values into validated scalars the model accepts.

use super::ConfigError;
use crate::curve::ensure_reliability;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One engine (or clustered-engine) reliability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name
    pub name: String,
    /// Cycle reliability with zero operating experience
    pub cycle_reliability_start: f64,
    /// Cycle reliability at maximum experience
    pub cycle_reliability_end: f64,
    /// Certified burn duration in seconds
    pub rated_burn_time: f64,
    /// Longer duration demonstrated in testing, if any
    #[serde(default)]
    pub tested_burn_time: Option<f64>,
    /// Hazard multiplier at the tested-burn-time boundary
    #[serde(default = "default_overburn_penalty")]
    pub overburn_penalty: f64,
    /// Ignition reliability with zero experience
    #[serde(default)]
    pub ignition_reliability_start: Option<f64>,
    /// Ignition reliability at maximum experience
    #[serde(default)]
    pub ignition_reliability_end: Option<f64>,
    /// Number of independently-failing identical units
    #[serde(default = "default_cluster_size")]
    pub cluster_size: u32,
    /// Current accumulated experience, if the caller wants a "current"
    /// curve between the start/end extremes
    #[serde(default)]
    pub experience: Option<f64>,
}

fn default_overburn_penalty() -> f64 {
    1.0
}
fn default_cluster_size() -> u32 {
    1
}

impl EngineConfig {
    /// Check every construction precondition of the model
    ///
    /// Nothing is clamped or repaired: a bad value is surfaced so the
    /// caller never renders odds computed from silently altered inputs.
    pub fn validate(&self) -> Result<(), ModelError> {
        ensure_reliability("cycle_reliability_start", self.cycle_reliability_start)?;
        ensure_reliability("cycle_reliability_end", self.cycle_reliability_end)?;
        if !(self.rated_burn_time > 0.0) {
            return Err(ModelError::InvalidInput(format!(
                "rated_burn_time must be positive, got {}",
                self.rated_burn_time
            )));
        }
        if let Some(tested) = self.tested_burn_time {
            if !(tested > self.rated_burn_time) {
                return Err(ModelError::InvalidInput(format!(
                    "tested_burn_time ({tested}) must exceed rated_burn_time ({})",
                    self.rated_burn_time
                )));
            }
        }
        match (self.ignition_reliability_start, self.ignition_reliability_end) {
            (Some(start), Some(end)) => {
                ensure_reliability("ignition_reliability_start", start)?;
                ensure_reliability("ignition_reliability_end", end)?;
            }
            (None, None) => {}
            _ => {
                return Err(ModelError::InvalidInput(
                    "ignition reliability needs both start and end values".to_string(),
                ));
            }
        }
        if self.cluster_size == 0 {
            return Err(ModelError::InvalidInput(
                "cluster_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether an ignition reliability pair is configured
    pub fn has_ignition_model(&self) -> bool {
        self.ignition_reliability_start.is_some() && self.ignition_reliability_end.is_some()
    }
}

/// Container for engine configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnginesConfig {
    pub engines: Vec<EngineConfig>,
}

/// Load engine configurations from a TOML file, validating each
pub fn load_engine_configs(path: &Path) -> Result<Vec<EngineConfig>, ConfigError> {
    let config: EnginesConfig = super::load_toml(path)?;
    validate_all(config.engines)
}

/// Load engine configurations from a TOML string, validating each
pub fn parse_engine_configs(content: &str) -> Result<Vec<EngineConfig>, ConfigError> {
    let config: EnginesConfig = super::parse_toml(content)?;
    validate_all(config.engines)
}

fn validate_all(engines: Vec<EngineConfig>) -> Result<Vec<EngineConfig>, ConfigError> {
    for engine in &engines {
        engine.validate()?;
    }
    Ok(engines)
}

/// Built-in engine definitions used by the demo and as a fallback
pub fn default_engines() -> Vec<EngineConfig> {
    let toml = include_str!("../../config/engines.toml");
    parse_engine_configs(toml).unwrap_or_else(|_| {
        vec![EngineConfig {
            name: "Generic Kerosene Engine".to_string(),
            cycle_reliability_start: 0.95,
            cycle_reliability_end: 0.999,
            rated_burn_time: 300.0,
            tested_burn_time: None,
            overburn_penalty: 1.0,
            ignition_reliability_start: None,
            ignition_reliability_end: None,
            cluster_size: 1,
            experience: None,
        }]
    })
}
