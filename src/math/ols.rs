//! Least squares solver.
//!
//! Solves
//!
//! ```text
//! minimize ‖X β - y‖²
//! ```
//!
//! for a tall design matrix `X` (more rows than columns, or square).
//!
//! Implementation choices:
//! - We use SVD rather than forming the normal equations: polynomial design
//!   matrices are badly scaled (`x^2` next to `1`), and SVD keeps the
//!   conditioning of `X` instead of squaring it.
//! - Each column is divided by its L2 norm before the decomposition and the
//!   coefficients are unscaled afterwards. Without this, large x-values make
//!   the `x^d` column dwarf the intercept column and a well-posed system looks
//!   rank deficient.
//! - (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)
//! - The numerical rank of the scaled matrix is checked against a relative
//!   singular-value cutoff before solving, so a rank-deficient system is
//!   reported instead of being silently solved in the minimum-norm sense.

use nalgebra::{DMatrix, DVector};

/// Singular values below `RANK_RTOL * σ_max` count as zero.
const RANK_RTOL: f64 = 1e-12;

/// Solve a full-column-rank least squares problem using SVD.
///
/// Returns `None` if `x` is rank deficient or the solution is not finite.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    if x.nrows() != y.len() || x.nrows() < x.ncols() {
        return None;
    }

    // An all-zero column keeps scale 1; the rank check rejects it below.
    let scales: Vec<f64> = x
        .column_iter()
        .map(|col| match col.norm() {
            n if n > 0.0 && n.is_finite() => n,
            _ => 1.0,
        })
        .collect();

    let mut scaled = x.clone();
    for (j, &s) in scales.iter().enumerate() {
        scaled.column_mut(j).unscale_mut(s);
    }

    let svd = scaled.svd(true, true);
    let max = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
    if max == 0.0 || !max.is_finite() {
        return None;
    }
    let eps = max * RANK_RTOL;
    if svd.rank(eps) < x.ncols() {
        return None;
    }

    let mut beta = svd.solve(y, eps).ok()?;
    for (b, &s) in beta.iter_mut().zip(&scales) {
        *b /= s;
    }

    if beta.iter().all(|v| v.is_finite()) {
        Some(beta)
    } else {
        None
    }
}
