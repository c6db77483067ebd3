//! Sampling and integration tuning

use serde::{Deserialize, Serialize};

/// Tunable accuracy/performance knobs for curve sampling
///
/// The defaults reproduce the reference model (100 sample points, 20
/// integrator sub-intervals). Lower values trade chart resolution and
/// integration accuracy for speed without changing the model itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Number of evenly spaced sample times per curve
    #[serde(default = "default_points")]
    pub points: usize,
    /// Trapezoidal sub-intervals used for the overburn hazard integral
    #[serde(default = "default_integrator_steps")]
    pub integrator_steps: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            points: default_points(),
            integrator_steps: default_integrator_steps(),
        }
    }
}

fn default_points() -> usize {
    100
}
fn default_integrator_steps() -> u32 {
    20
}
