//! Chart construction and the output sinks that draw it.
//!
//! The pipeline builds one [`Chart`] (series, labels and bounds) and hands it
//! to a [`ChartSink`]. Sinks only draw; they never recompute data.

use crate::domain::{
    CHART_TITLE, CURVE_LABEL, Chart, POINTS_LABEL, SampleSet, X_LABEL, Y_LABEL,
};
use crate::error::AppError;

pub mod ascii;

pub use ascii::{AsciiChart, render_ascii_chart};

/// Something that turns a chart into visual output.
pub trait ChartSink {
    fn render(&mut self, chart: &Chart) -> Result<(), AppError>;
}

/// Fraction of the data span added on each side of the y-range.
const Y_PAD_FRAC: f64 = 0.05;

/// Build the scatter-plus-line chart for a fit.
pub fn build_chart(samples: &SampleSet, curve: &[(f64, f64)]) -> Chart {
    let points = samples.points();

    let x_bounds = span(points.iter().chain(curve).map(|&(x, _)| x), 0.0);
    let y_bounds = span(points.iter().chain(curve).map(|&(_, y)| y), Y_PAD_FRAC);

    Chart {
        title: CHART_TITLE,
        x_label: X_LABEL,
        y_label: Y_LABEL,
        points_label: POINTS_LABEL,
        curve_label: CURVE_LABEL,
        points,
        curve: curve.to_vec(),
        x_bounds,
        y_bounds,
    }
}

/// `[min, max]` of the values, padded by `frac` of the span on each side.
///
/// Falls back to `[0, 1]` without finite values and to `[v - 0.5, v + 0.5]`
/// when all values coincide, so bounds are always strictly increasing.
fn span(values: impl Iterator<Item = f64>, frac: f64) -> [f64; 2] {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values.filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }

    if !(lo.is_finite() && hi.is_finite()) {
        return [0.0, 1.0];
    }
    if hi <= lo {
        return [lo - 0.5, hi + 0.5];
    }

    let pad = (hi - lo) * frac;
    [lo - pad, hi + pad]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_carries_labels_and_bounds() {
        let samples = SampleSet::new(vec![0.0, 10.0], vec![0.0, 100.0]).unwrap();
        let curve = vec![(0.0, 0.0), (5.0, 50.0), (10.0, 100.0)];
        let chart = build_chart(&samples, &curve);

        assert_eq!(chart.title, "Quadratic Fit to Data");
        assert_eq!(chart.points_label, "Data Points");
        assert_eq!(chart.curve_label, "Quadratic Fit");
        assert_eq!(chart.x_bounds, [0.0, 10.0]);
        assert_eq!(chart.y_bounds, [-5.0, 105.0]);
        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.curve.len(), 3);
    }

    #[test]
    fn flat_data_gets_unit_window() {
        let samples = SampleSet::new(vec![2.0, 2.0], vec![7.0, 7.0]).unwrap();
        let chart = build_chart(&samples, &[(2.0, 7.0)]);
        assert_eq!(chart.x_bounds, [1.5, 2.5]);
        assert_eq!(chart.y_bounds, [6.5, 7.5]);
    }
}
