//! The fit pipeline: data → fit → curve samples → chart.
//!
//! Keeping this separate from `app::run` means the computed outputs can be
//! tested without touching stdout or the terminal.

use tracing::{debug, info};

use crate::domain::{Chart, FitConfig, SampleSet};
use crate::error::AppError;
use crate::fit::{fit_polynomial, sample_fit};
use crate::models::Polynomial;
use crate::plot::build_chart;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub samples: SampleSet,
    pub polynomial: Polynomial,
    pub curve: Vec<(f64, f64)>,
    pub chart: Chart,
}

/// Execute the pipeline on the embedded data set.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let samples = crate::data::literal_samples()?;
    run_fit_with_samples(config, samples)
}

/// Execute the pipeline on caller-provided samples.
pub fn run_fit_with_samples(config: &FitConfig, samples: SampleSet) -> Result<RunOutput, AppError> {
    config.validate()?;
    debug!(n = samples.len(), degree = config.degree, "fitting");

    let polynomial = fit_polynomial(&samples, config.degree)?;
    info!(coefficients = ?polynomial.coefficients(), "fitted polynomial");

    let curve = sample_fit(&polynomial, &samples, config.curve_samples);
    debug!(m = curve.len(), "sampled fitted curve");

    let chart = build_chart(&samples, &curve);

    Ok(RunOutput {
        samples,
        polynomial,
        curve,
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_FIT;

    #[test]
    fn run_fit_default_config() {
        let run = run_fit(&FitConfig::default()).unwrap();
        assert_eq!(run.samples.len(), 4);
        assert_eq!(run.polynomial.degree(), 2);
        assert_eq!(run.curve.len(), 100);
        assert_eq!(run.chart.points.len(), 4);
        assert_eq!(run.chart.curve, run.curve);
    }

    #[test]
    fn run_fit_surfaces_fit_error() {
        let config = FitConfig {
            degree: 5,
            ..FitConfig::default()
        };
        let err = run_fit(&config).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_FIT);
    }
}
