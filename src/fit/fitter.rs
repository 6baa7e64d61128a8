//! Least-squares polynomial fitting.
//!
//! Given:
//! - samples `(x_i, y_i)`
//! - a degree `d`
//!
//! we build the Vandermonde design matrix with rows `[x_i^d, ..., x_i, 1]`
//! and solve the ordinary least squares problem for the coefficients.
//!
//! A unique fit needs at least `d + 1` samples with at least `d + 1` distinct
//! x-values. Both are checked up front so the caller gets a specific error
//! rather than a minimum-norm solution that merely looks plausible.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::domain::SampleSet;
use crate::error::FitError;
use crate::math::solve_least_squares;
use crate::models::{Polynomial, fill_design_row};

/// Fit a polynomial of `degree` to `samples` by least squares.
pub fn fit_polynomial(samples: &SampleSet, degree: usize) -> Result<Polynomial, FitError> {
    let n = samples.len();
    let p = degree + 1;

    if n < p {
        return Err(FitError::Underdetermined { degree, points: n });
    }
    let distinct = samples.distinct_x();
    if distinct < p {
        return Err(FitError::RankDeficient { degree, distinct });
    }

    let design = design_matrix(samples.x(), degree);
    let y = DVector::from_column_slice(samples.y());

    debug!(n, degree, "solving least squares");
    let beta = solve_least_squares(&design, &y).ok_or(FitError::Singular { degree })?;

    Ok(Polynomial::new(beta.iter().copied().collect()))
}

/// Vandermonde design matrix, one row per sample, highest power first.
pub fn design_matrix(x: &[f64], degree: usize) -> DMatrix<f64> {
    let p = degree + 1;
    let mut design = DMatrix::<f64>::zeros(x.len(), p);
    let mut row = vec![0.0; p];
    for (i, &xi) in x.iter().enumerate() {
        fill_design_row(xi, &mut row);
        for (j, &v) in row.iter().enumerate() {
            design[(i, j)] = v;
        }
    }
    design
}

/// Sum of squared residuals of `poly` over `samples`.
pub fn sum_squared_residuals(poly: &Polynomial, samples: &SampleSet) -> f64 {
    samples
        .x()
        .iter()
        .zip(samples.y())
        .map(|(&x, &y)| {
            let r = poly.eval(x) - y;
            r * r
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(x: &[f64], y: &[f64]) -> SampleSet {
        SampleSet::new(x.to_vec(), y.to_vec()).unwrap()
    }

    #[test]
    fn recovers_exact_quadratic() {
        // y = 2x^2 - 3x + 1
        let x = [-2.0, -1.0, 0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|&v| 2.0 * v * v - 3.0 * v + 1.0).collect();
        let poly = fit_polynomial(&samples(&x, &y), 2).unwrap();

        let c = poly.coefficients();
        assert_eq!(c.len(), 3);
        assert!((c[0] - 2.0).abs() < 1e-10, "{c:?}");
        assert!((c[1] + 3.0).abs() < 1e-10, "{c:?}");
        assert!((c[2] - 1.0).abs() < 1e-10, "{c:?}");
    }

    #[test]
    fn large_x_values_fit_without_singularity() {
        // y = 1e-3 t^2 + t + 1 with x = t * 1e6
        let x = [1e6, 2e6, 3e6, 4e6];
        let y: Vec<f64> = x
            .iter()
            .map(|&v| {
                let t = v / 1e6;
                1e-3 * t * t + t + 1.0
            })
            .collect();
        let poly = fit_polynomial(&samples(&x, &y), 2).unwrap();

        let c = poly.coefficients();
        assert!((c[0] / 1e-15 - 1.0).abs() < 1e-6, "{c:?}");
        assert!((c[1] / 1e-6 - 1.0).abs() < 1e-6, "{c:?}");
        assert!((c[2] - 1.0).abs() < 1e-6, "{c:?}");
        for (&xi, &yi) in x.iter().zip(&y) {
            assert!((poly.eval(xi) - yi).abs() < 1e-9);
        }
    }

    #[test]
    fn degree_zero_is_the_mean() {
        let s = samples(&[1.0, 2.0, 3.0], &[1.0, 2.0, 6.0]);
        let poly = fit_polynomial(&s, 0).unwrap();
        assert!((poly.coefficients()[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_points_is_underdetermined() {
        let s = samples(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0]);
        let err = fit_polynomial(&s, 5).unwrap_err();
        assert_eq!(err, FitError::Underdetermined { degree: 5, points: 4 });
    }

    #[test]
    fn repeated_x_is_rank_deficient() {
        let s = samples(&[1.0, 1.0, 2.0, 2.0], &[1.0, 1.5, 2.0, 2.5]);
        let err = fit_polynomial(&s, 2).unwrap_err();
        assert_eq!(err, FitError::RankDeficient { degree: 2, distinct: 2 });
    }

    #[test]
    fn design_matrix_rows() {
        let m = design_matrix(&[2.0, 3.0], 2);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m[(0, 0)], 4.0);
        assert_eq!(m[(1, 1)], 3.0);
        assert_eq!(m[(1, 2)], 1.0);
    }
}
