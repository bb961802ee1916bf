use crate::error::{GeometryError, Result};

/// Returns the Euclidean distance between two points given as coordinate
/// slices: `sqrt(sum_k (x_k - y_k)^2)`.
///
/// # Errors
///
/// Returns [`GeometryError::DimensionMismatch`] if the slices have different
/// lengths.
pub fn euclidean(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(GeometryError::DimensionMismatch {
            expected: x.len(),
            found: y.len(),
        }
        .into());
    }
    Ok(squared_distance(x, y).sqrt())
}

/// Sum of squared coordinate differences. Both slices must share a length.
#[must_use]
pub(crate) fn squared_distance(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y)
        .map(|(a, b)| {
            let d = a - b;
            d * d
        })
        .sum()
}
