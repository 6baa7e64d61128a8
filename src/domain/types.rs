//! Shared domain types.
//!
//! These are plain in-memory values: built once by a pipeline stage and read by
//! the following stages. Nothing here is persisted.

use crate::error::{AppError, EXIT_INVALID_INPUT};

/// Chart title.
pub const CHART_TITLE: &str = "Quadratic Fit to Data";
/// X-axis description.
pub const X_LABEL: &str = "x";
/// Y-axis description.
pub const Y_LABEL: &str = "y";
/// Legend entry for the observed points.
pub const POINTS_LABEL: &str = "Data Points";
/// Legend entry for the fitted curve.
pub const CURVE_LABEL: &str = "Quadratic Fit";

/// Paired observations `(x_i, y_i)`.
///
/// Invariant: `x.len() == y.len()` and every value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, AppError> {
        if x.len() != y.len() {
            return Err(AppError::new(
                EXIT_INVALID_INPUT,
                format!("Sample length mismatch: {} x-values vs {} y-values.", x.len(), y.len()),
            ));
        }
        if let Some(i) = x.iter().zip(y.iter()).position(|(a, b)| !(a.is_finite() && b.is_finite())) {
            return Err(AppError::new(
                EXIT_INVALID_INPUT,
                format!("Non-finite sample at index {i}."),
            ));
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Paired `(x, y)` tuples in input order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    /// `(min(x), max(x))`, or `None` when empty.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &v in &self.x {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
    }

    /// Number of distinct x-values (exact comparison).
    pub fn distinct_x(&self) -> usize {
        let mut xs = self.x.clone();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        xs.len()
    }
}

/// Where the chart goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Interactive terminal chart when stdout is a TTY, ASCII otherwise.
    Auto,
    /// Interactive ratatui view.
    Terminal,
    /// Fixed-size text chart on stdout.
    Ascii,
}

/// Concrete chart destination, after `DisplayMode::Auto` is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTarget {
    Terminal,
    Ascii,
}

impl DisplayMode {
    /// Resolve against whether stdout is a terminal.
    pub fn resolve(self, stdout_is_tty: bool) -> ChartTarget {
        match self {
            DisplayMode::Auto if stdout_is_tty => ChartTarget::Terminal,
            DisplayMode::Auto => ChartTarget::Ascii,
            DisplayMode::Terminal => ChartTarget::Terminal,
            DisplayMode::Ascii => ChartTarget::Ascii,
        }
    }
}

/// Run configuration.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Polynomial degree to fit.
    pub degree: usize,
    /// Number of points sampled along the fitted curve.
    pub curve_samples: usize,
    /// ASCII chart width (columns).
    pub plot_width: usize,
    /// ASCII chart height (rows).
    pub plot_height: usize,
    pub display: DisplayMode,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            degree: 2,
            curve_samples: 100,
            plot_width: 72,
            plot_height: 20,
            display: DisplayMode::Auto,
        }
    }
}

impl FitConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.curve_samples == 0 {
            return Err(AppError::new(EXIT_INVALID_INPUT, "Curve sample count must be > 0."));
        }
        if self.plot_width == 0 || self.plot_height == 0 {
            return Err(AppError::new(EXIT_INVALID_INPUT, "Plot size must be non-zero."));
        }
        Ok(())
    }
}

/// A render-only chart description.
///
/// Bounds are computed once when the chart is built so that every sink draws
/// the same window.
#[derive(Debug, Clone)]
pub struct Chart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points_label: &'static str,
    pub curve_label: &'static str,
    /// Observed points (scatter).
    pub points: Vec<(f64, f64)>,
    /// Fitted curve samples (line).
    pub curve: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_rejects_length_mismatch() {
        let err = SampleSet::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
    }

    #[test]
    fn sample_set_rejects_non_finite() {
        assert!(SampleSet::new(vec![1.0, f64::NAN], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn sample_set_range_and_distinct() {
        let s = SampleSet::new(vec![3.0, 1.0, 3.0, 2.0], vec![0.0; 4]).unwrap();
        assert_eq!(s.x_range(), Some((1.0, 3.0)));
        assert_eq!(s.distinct_x(), 3);
        assert_eq!(s.points()[0], (3.0, 0.0));
    }

    #[test]
    fn display_mode_resolves_auto() {
        assert_eq!(DisplayMode::Auto.resolve(true), ChartTarget::Terminal);
        assert_eq!(DisplayMode::Auto.resolve(false), ChartTarget::Ascii);
        assert_eq!(DisplayMode::Ascii.resolve(true), ChartTarget::Ascii);
        assert_eq!(DisplayMode::Terminal.resolve(false), ChartTarget::Terminal);
    }

    #[test]
    fn default_config_is_valid() {
        let config = FitConfig::default();
        assert_eq!(config.degree, 2);
        assert_eq!(config.curve_samples, 100);
        assert!(config.validate().is_ok());
        assert!(FitConfig { curve_samples: 0, ..config }.validate().is_err());
    }
}
