//! Burn chart - Per-configuration orchestration
//!
//! Stages the leaf components for one engine configuration:
//! 1. Validate the configuration.
//! 2. Build the hazard curve once.
//! 3. Sample start-of-life and matured survival curves against that
//!    shared curve, plus a "current" curve when an experience value is
//!    configured.
//! 4. Raise every sample to the cluster size.
//! 5. Derive the display axis floor from the minimum across all sets.
//!
//! Building the hazard curve once and reusing it for every
//! reliability value is the one optimization the model relies on; the
//! curve depends only on the burn-time configuration.

use crate::cluster::cluster_probability;
use crate::config::{EngineConfig, SamplingConfig};
use crate::curve::{build_hazard_curve, ExperienceCurve};
use crate::error::ModelError;
use crate::spline::HermiteSpline;
use crate::survival::{sample_survival, SurvivalSamples};

/// Sampled survival curves for one engine configuration
#[derive(Debug, Clone)]
pub struct BurnChart {
    /// Survival with start-of-life reliability
    pub start: SurvivalSamples,
    /// Survival with fully-matured reliability
    pub end: SurvivalSamples,
    /// Survival at the configured current experience, when present
    pub current: Option<SurvivalSamples>,
    /// Minimum across all sample sets, floored to a display-friendly
    /// axis value
    pub axis_floor: f64,
}

impl BurnChart {
    /// Compute the chart for `config` over `[0, horizon]` seconds
    pub fn compute(
        config: &EngineConfig,
        horizon: f64,
        sampling: &SamplingConfig,
    ) -> Result<BurnChart, ModelError> {
        config.validate()?;
        let hazard = build_hazard_curve(
            config.rated_burn_time,
            config.tested_burn_time,
            config.overburn_penalty,
        )?;

        let start = clustered_samples(
            config.cycle_reliability_start,
            config,
            &hazard,
            horizon,
            sampling,
        );
        let end = clustered_samples(
            config.cycle_reliability_end,
            config,
            &hazard,
            horizon,
            sampling,
        );

        let current = match config.experience {
            Some(experience) => {
                let curve = ExperienceCurve::new(
                    config.cycle_reliability_start,
                    config.cycle_reliability_end,
                )?;
                // the spline can overshoot the matured endpoint by a
                // hair; keep the fed-back value a valid reliability
                let reliability = curve.reliability_at(experience).min(1.0);
                Some(clustered_samples(
                    reliability,
                    config,
                    &hazard,
                    horizon,
                    sampling,
                ))
            }
            None => None,
        };

        let mut min = start.min.min(end.min);
        if let Some(samples) = &current {
            min = min.min(samples.min);
        }

        Ok(BurnChart {
            start,
            end,
            current,
            axis_floor: nice_axis_floor(min),
        })
    }

    /// Default chart horizon for a configuration: the top of the
    /// hazard ramp (2.5× the tested or rated burn time)
    pub fn default_horizon(config: &EngineConfig) -> f64 {
        config.tested_burn_time.unwrap_or(config.rated_burn_time) * 2.5
    }
}

/// Cluster-adjusted ignition reliability at `experience` data units
///
/// Returns `Ok(None)` when the configuration has no ignition model.
pub fn ignition_reliability(
    config: &EngineConfig,
    experience: f64,
) -> Result<Option<f64>, ModelError> {
    config.validate()?;
    match (
        config.ignition_reliability_start,
        config.ignition_reliability_end,
    ) {
        (Some(start), Some(end)) => {
            let curve = ExperienceCurve::new(start, end)?;
            let unit = curve.reliability_at(experience).min(1.0);
            Ok(Some(cluster_probability(unit, config.cluster_size)))
        }
        _ => Ok(None),
    }
}

/// Round a minimum probability down to a tenth for axis scaling
///
/// Display-only: the sampled probabilities themselves are never
/// touched.
pub fn nice_axis_floor(min_probability: f64) -> f64 {
    ((min_probability * 10.0).floor() / 10.0).clamp(0.0, 0.9)
}

fn clustered_samples(
    reliability: f64,
    config: &EngineConfig,
    hazard: &HermiteSpline,
    horizon: f64,
    sampling: &SamplingConfig,
) -> SurvivalSamples {
    let mut samples = sample_survival(
        reliability,
        config.rated_burn_time,
        hazard,
        horizon,
        sampling.points,
        sampling.integrator_steps,
    );
    if config.cluster_size > 1 {
        for p in &mut samples.probabilities {
            *p = cluster_probability(*p, config.cluster_size);
        }
        samples.min = samples
            .probabilities
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EngineConfig {
        EngineConfig {
            name: "Test".to_string(),
            cycle_reliability_start: 0.95,
            cycle_reliability_end: 0.999,
            rated_burn_time: 300.0,
            tested_burn_time: None,
            overburn_penalty: 1.0,
            ignition_reliability_start: None,
            ignition_reliability_end: None,
            cluster_size: 1,
            experience: None,
        }
    }

    #[test]
    fn test_chart_hits_reliability_at_rated_time() {
        let config = config();
        // 101 points over [0, 600] gives a 6s step, so sample index 50
        // lands exactly on the 300s rated time
        let sampling = SamplingConfig {
            points: 101,
            ..SamplingConfig::default()
        };
        let chart = BurnChart::compute(&config, 600.0, &sampling).unwrap();
        assert!((chart.start.probabilities[50] - 0.95).abs() < 1e-12);
        assert!((chart.end.probabilities[50] - 0.999).abs() < 1e-12);
        assert!(chart.current.is_none());
    }

    #[test]
    fn test_current_curve_sits_between_extremes() {
        let mut config = config();
        config.experience = Some(3000.0);
        let chart = BurnChart::compute(&config, 600.0, &SamplingConfig::default()).unwrap();
        let current = chart.current.expect("experience configured");
        let last = current.probabilities.len() - 1;
        assert!(current.probabilities[last] >= chart.start.probabilities[last] - 1e-9);
        assert!(current.probabilities[last] <= chart.end.probabilities[last] + 1e-9);
    }

    #[test]
    fn test_cluster_applies_to_every_sample() {
        let mut quad = config();
        quad.cluster_size = 4;
        let single = config();
        let sampling = SamplingConfig::default();
        let quad_chart = BurnChart::compute(&quad, 600.0, &sampling).unwrap();
        let single_chart = BurnChart::compute(&single, 600.0, &sampling).unwrap();
        for (q, s) in quad_chart
            .start
            .probabilities
            .iter()
            .zip(&single_chart.start.probabilities)
        {
            assert!((q - s.powi(4)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_axis_floor_is_a_tenth() {
        assert_eq!(nice_axis_floor(0.9731), 0.9);
        assert_eq!(nice_axis_floor(0.42), 0.4);
        assert_eq!(nice_axis_floor(0.999), 0.9);
        assert_eq!(nice_axis_floor(0.05), 0.0);
        assert_eq!(nice_axis_floor(-0.2), 0.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = config();
        config.cycle_reliability_start = 1.5;
        let err = BurnChart::compute(&config, 600.0, &SamplingConfig::default()).unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput(_)));
    }

    #[test]
    fn test_ignition_reliability() {
        let mut config = config();
        config.ignition_reliability_start = Some(0.93);
        config.ignition_reliability_end = Some(0.999);
        config.cluster_size = 2;
        let none = ignition_reliability(&self::config(), 1000.0).unwrap();
        assert!(none.is_none());
        let at_zero = ignition_reliability(&config, 0.0).unwrap().unwrap();
        assert!((at_zero - 0.93_f64.powi(2)).abs() < 1e-9);
        let matured = ignition_reliability(&config, 10_000.0).unwrap().unwrap();
        assert!((matured - 0.999_f64.powi(2)).abs() < 1e-9);
    }

    #[test]
    fn test_default_horizon() {
        let mut config = config();
        assert_eq!(BurnChart::default_horizon(&config), 750.0);
        config.tested_burn_time = Some(600.0);
        assert_eq!(BurnChart::default_horizon(&config), 1500.0);
    }
}
