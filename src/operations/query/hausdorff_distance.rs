use super::directed_hausdorff::{check_inputs, directed};
use crate::error::Result;
use crate::math::PointSet;
use crate::operations::Execution;

/// Result of a Hausdorff distance query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HausdorffResult {
    /// The symmetric Hausdorff distance, `max(forward, backward)`.
    pub distance: f64,
    /// Directed distance from the first set to the second.
    pub forward: f64,
    /// Directed distance from the second set to the first.
    pub backward: f64,
}

/// Computes the Hausdorff distance between two point sets.
///
/// Uses the naive O(m·n·d) algorithm without a spatial index: every point of
/// each set is compared against every point of the other.
pub struct HausdorffDistance<'a> {
    first: &'a PointSet,
    second: &'a PointSet,
    execution: Execution,
}

impl<'a> HausdorffDistance<'a> {
    /// Creates a new `HausdorffDistance` query.
    #[must_use]
    pub fn new(first: &'a PointSet, second: &'a PointSet) -> Self {
        Self {
            first,
            second,
            execution: Execution::default(),
        }
    }

    /// Sets the execution strategy.
    #[must_use]
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Executes the query, returning both directed components and their
    /// maximum.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptySet`](crate::error::GeometryError::EmptySet)
    /// if either set is empty and
    /// [`GeometryError::DimensionMismatch`](crate::error::GeometryError::DimensionMismatch)
    /// if their dimensions differ.
    pub fn execute(&self) -> Result<HausdorffResult> {
        check_inputs(self.first, self.second)?;
        tracing::debug!(
            m = self.first.len(),
            n = self.second.len(),
            dim = self.first.dim(),
            execution = ?self.execution,
            "computing hausdorff distance"
        );

        let (forward, backward) = match self.execution {
            Execution::Sequential => (
                directed(self.first, self.second, self.execution),
                directed(self.second, self.first, self.execution),
            ),
            Execution::Parallel => rayon::join(
                || directed(self.first, self.second, self.execution),
                || directed(self.second, self.first, self.execution),
            ),
        };

        let distance = forward.max(backward);
        tracing::trace!(forward, backward, distance, "hausdorff distance");
        Ok(HausdorffResult {
            distance,
            forward,
            backward,
        })
    }
}
