//! Dense sampling of a fitted polynomial for plotting.

use tracing::warn;

use crate::domain::SampleSet;
use crate::math::lin_space;
use crate::models::Polynomial;

/// Sample `poly` at `m` evenly spaced points across `[lo, hi]` (inclusive).
///
/// When `lo == hi` the grid collapses to `m` copies of that single x, each
/// paired with the same `f(lo)`. This is a well-defined (if uninteresting)
/// curve and not an error.
pub fn sample_curve(poly: &Polynomial, lo: f64, hi: f64, m: usize) -> Vec<(f64, f64)> {
    if lo == hi && m > 1 {
        warn!(x = lo, m, "degenerate sampling range; curve collapses to one point");
    }
    lin_space(lo, hi, m)
        .into_iter()
        .map(|x| (x, poly.eval(x)))
        .collect()
}

/// Sample `poly` across the x-range of `samples`.
///
/// Returns an empty curve for an empty sample set.
pub fn sample_fit(poly: &Polynomial, samples: &SampleSet, m: usize) -> Vec<(f64, f64)> {
    match samples.x_range() {
        Some((lo, hi)) => sample_curve(poly, lo, hi, m),
        None => Vec::new(),
    }
}
