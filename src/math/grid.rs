//! Evenly spaced grids.

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
///
/// The last point is pinned to `max` exactly rather than accumulated, so
/// `out[steps - 1] == max` holds bit-for-bit. When `min == max` every point is
/// that value. `steps == 0` yields an empty grid and `steps == 1` yields `[min]`.
pub fn lin_space(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (steps as f64 - 1.0);
            let mut out = Vec::with_capacity(steps);
            for i in 0..steps - 1 {
                out.push(min + step * i as f64);
            }
            out.push(max);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lin_space_includes_endpoints() {
        let v = lin_space(0.1, 10.0, 5);
        assert_eq!(v.len(), 5);
        assert_eq!(v[0], 0.1);
        assert_eq!(v[4], 10.0);
    }

    #[test]
    fn lin_space_small_counts() {
        assert!(lin_space(1.0, 2.0, 0).is_empty());
        assert_eq!(lin_space(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(lin_space(3.0, 3.0, 3), vec![3.0, 3.0, 3.0]);
    }
}
