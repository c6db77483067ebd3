//! Example Mission - Text chart demo for reliability_core
//!
//! Loads engine definitions (the built-in set, or a TOML file given
//! as the first argument), computes a burn chart per engine and
//! prints an ASCII survival chart plus a short legend. This binary
//! plays the role of the rendering host: all numbers come from
//! reliability_core, all presentation lives here.

use reliability_core::prelude::*;
use std::path::Path;
use std::process::ExitCode;

/// Chart rows between 100% and the axis floor
const CHART_ROWS: usize = 12;
/// Chart columns (sample sets are down-sampled to this width)
const CHART_COLS: usize = 64;

fn main() -> ExitCode {
    let engines = match std::env::args().nth(1) {
        Some(path) => match reliability_core::load_engine_configs(Path::new(&path)) {
            Ok(engines) => engines,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => default_engines(),
    };

    let sampling = SamplingConfig::default();
    for engine in &engines {
        let horizon = BurnChart::default_horizon(engine);
        match BurnChart::compute(engine, horizon, &sampling) {
            Ok(chart) => print_engine(engine, &chart, horizon),
            Err(err) => {
                eprintln!("error: {}: {err}", engine.name);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn print_engine(engine: &EngineConfig, chart: &BurnChart, horizon: f64) {
    println!("=== {} ===", engine.name);
    println!(
        "rated burn {} (cluster of {}), chart horizon {}",
        format_duration(engine.rated_burn_time),
        engine.cluster_size,
        format_duration(horizon),
    );

    print_curve_rows(chart);

    let last = chart.start.probabilities.len() - 1;
    print_legend("start of life", chart.start.probabilities[last]);
    if let Some(current) = &chart.current {
        print_legend("current", current.probabilities[last]);
    }
    print_legend("fully matured", chart.end.probabilities[last]);

    if let Some(experience) = engine.experience {
        if let Ok(Some(ignition)) = ignition_reliability(engine, experience) {
            println!(
                "  ignition: {} ({})",
                format_percent(ignition, 2),
                format_odds(1.0 - ignition)
            );
        }
    }
    println!();
}

/// Render the start/end (and current) curves as rows of characters,
/// scanning from 100% down to the chart's axis floor
fn print_curve_rows(chart: &BurnChart) {
    let floor = chart.axis_floor;
    for row in 0..CHART_ROWS {
        let upper = 1.0 - (1.0 - floor) * row as f64 / CHART_ROWS as f64;
        let lower = 1.0 - (1.0 - floor) * (row + 1) as f64 / CHART_ROWS as f64;
        let mut line = String::with_capacity(CHART_COLS);
        for col in 0..CHART_COLS {
            line.push(cell_char(chart, col, lower, upper));
        }
        println!("{:>6} |{line}", format_percent(upper, 0));
    }
}

/// Pick the marker for one chart cell: the curve passing through this
/// probability band wins, worst case (start-of-life) drawn last
fn cell_char(chart: &BurnChart, col: usize, lower: f64, upper: f64) -> char {
    let in_band = |samples: &SurvivalSamples| {
        let p = sample_at_col(samples, col);
        p > lower && p <= upper
    };
    if in_band(&chart.start) {
        return '*';
    }
    if let Some(current) = &chart.current {
        if in_band(current) {
            return 'o';
        }
    }
    if in_band(&chart.end) {
        return '.';
    }
    ' '
}

fn sample_at_col(samples: &SurvivalSamples, col: usize) -> f64 {
    let idx = col * (samples.probabilities.len() - 1) / (CHART_COLS - 1);
    samples.probabilities[idx]
}

fn print_legend(label: &str, survival: f64) {
    println!(
        "  {label}: {} survival at horizon ({})",
        format_percent(survival, 2),
        format_odds(1.0 - survival)
    );
}
