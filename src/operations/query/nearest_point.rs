use crate::error::{GeometryError, Result};
use crate::math::metric::squared_distance;
use crate::math::PointSet;

/// Result of a nearest point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPointResult {
    /// Index of the first closest point in the searched set.
    pub index: usize,
    /// Distance from the query point to that point.
    pub distance: f64,
}

/// Finds the point of a set closest to a query point (the infimum distance).
pub struct NearestPoint<'a> {
    point: &'a [f64],
    set: &'a PointSet,
}

impl<'a> NearestPoint<'a> {
    /// Creates a new `NearestPoint` query.
    #[must_use]
    pub fn new(point: &'a [f64], set: &'a PointSet) -> Self {
        Self { point, set }
    }

    /// Executes the query with a linear scan over the set.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySet`] if the set has no points and
    /// [`GeometryError::DimensionMismatch`] if the query point's dimension
    /// differs from the set's, and [`GeometryError::NonFiniteCoordinate`] if
    /// the query point has a NaN or infinite coordinate.
    pub fn execute(&self) -> Result<NearestPointResult> {
        if self.set.is_empty() {
            return Err(GeometryError::EmptySet("searched point set").into());
        }
        if self.point.len() != self.set.dim() {
            return Err(GeometryError::DimensionMismatch {
                expected: self.set.dim(),
                found: self.point.len(),
            }
            .into());
        }
        if let Some(axis) = self.point.iter().position(|c| !c.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { point: 0, axis }.into());
        }

        let (index, dist_sq) = nearest_squared(self.point, self.set);
        Ok(NearestPointResult {
            index,
            distance: dist_sq.sqrt(),
        })
    }
}

/// Linear scan returning the index and squared distance of the first
/// closest point. The set must be non-empty and share the point's dimension.
pub(crate) fn nearest_squared(point: &[f64], set: &PointSet) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_dist = f64::INFINITY;

    for (i, candidate) in set.iter().enumerate() {
        let d = squared_distance(point, candidate);
        if d < best_dist {
            best_dist = d;
            best_index = i;
        }
    }

    (best_index, best_dist)
}
