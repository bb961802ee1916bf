use rayon::prelude::*;

use super::nearest_point::nearest_squared;
use crate::error::{GeometryError, Result};
use crate::math::PointSet;
use crate::operations::Execution;

/// Computes the directed Hausdorff distance `max_{x in from} min_{y in to} |x - y|`.
///
/// Not symmetric: a set contained in `to` has distance zero regardless of
/// how many extra points `to` holds.
pub struct DirectedHausdorff<'a> {
    from: &'a PointSet,
    to: &'a PointSet,
    execution: Execution,
}

impl<'a> DirectedHausdorff<'a> {
    /// Creates a new `DirectedHausdorff` query.
    #[must_use]
    pub fn new(from: &'a PointSet, to: &'a PointSet) -> Self {
        Self {
            from,
            to,
            execution: Execution::default(),
        }
    }

    /// Sets the execution strategy.
    #[must_use]
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySet`] if either set is empty and
    /// [`GeometryError::DimensionMismatch`] if their dimensions differ.
    pub fn execute(&self) -> Result<f64> {
        check_inputs(self.from, self.to)?;
        let distance = directed(self.from, self.to, self.execution);
        tracing::trace!(m = self.from.len(), n = self.to.len(), distance, "directed hausdorff");
        Ok(distance)
    }
}

/// Validates a pair of sets for a Hausdorff query.
pub(crate) fn check_inputs(first: &PointSet, second: &PointSet) -> Result<()> {
    if first.is_empty() {
        return Err(GeometryError::EmptySet("first point set").into());
    }
    if second.is_empty() {
        return Err(GeometryError::EmptySet("second point set").into());
    }
    if first.dim() != second.dim() {
        return Err(GeometryError::DimensionMismatch {
            expected: first.dim(),
            found: second.dim(),
        }
        .into());
    }
    Ok(())
}

/// Directed distance over validated inputs.
///
/// Maxima are taken over squared distances with a single square root at the
/// end; `sqrt` is monotonic so the value matches a per-pair computation.
pub(crate) fn directed(from: &PointSet, to: &PointSet, execution: Execution) -> f64 {
    let sup_sq = match execution {
        Execution::Sequential => from
            .iter()
            .map(|p| nearest_squared(p, to).1)
            .fold(0.0, f64::max),
        Execution::Parallel => from
            .par_iter()
            .map(|p| nearest_squared(p, to).1)
            .reduce(|| 0.0, f64::max),
    };
    sup_sq.sqrt()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PointDistError;
    use approx::assert_relative_eq;

    #[test]
    fn subset_has_zero_directed_distance() {
        let small = PointSet::from_rows(&[[0.0, 0.0, 0.0]]).unwrap();
        let large = PointSet::from_rows(&[[0.0, 0.0, 0.0], [10.0, 10.0, 10.0]]).unwrap();

        let forward = DirectedHausdorff::new(&small, &large).execute().unwrap();
        assert!(forward.abs() < 1e-15);

        let backward = DirectedHausdorff::new(&large, &small).execute().unwrap();
        assert_relative_eq!(backward, 10.0 * 3.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn takes_worst_nearest_distance() {
        let from = PointSet::from_rows(&[[0.0, 0.0], [0.0, 2.0], [0.0, 7.0]]).unwrap();
        let to = PointSet::from_rows(&[[1.0, 0.0], [0.0, 5.0]]).unwrap();
        // Nearest distances: 1, 2, 2. Worst is 2.
        let d = DirectedHausdorff::new(&from, &to).execute().unwrap();
        assert_relative_eq!(d, 2.0);
    }

    #[test]
    fn parallel_matches_sequential() {
        let from = PointSet::from_flat((0..300).map(|i| f64::from(i) * 0.37).collect(), 3).unwrap();
        let to = PointSet::from_flat((0..240).map(|i| f64::from(i).sin()).collect(), 3).unwrap();

        let seq = DirectedHausdorff::new(&from, &to).execute().unwrap();
        let par = DirectedHausdorff::new(&from, &to)
            .with_execution(Execution::Parallel)
            .execute()
            .unwrap();
        assert_eq!(seq.to_bits(), par.to_bits());
    }

    #[test]
    fn empty_inputs_fail() {
        let set = PointSet::from_rows(&[[0.0, 0.0, 0.0]]).unwrap();
        let empty = PointSet::empty();

        let err = DirectedHausdorff::new(&empty, &set).execute().unwrap_err();
        assert!(matches!(
            err,
            PointDistError::Geometry(GeometryError::EmptySet("first point set"))
        ));

        let err = DirectedHausdorff::new(&set, &empty).execute().unwrap_err();
        assert!(matches!(
            err,
            PointDistError::Geometry(GeometryError::EmptySet("second point set"))
        ));
    }
}
