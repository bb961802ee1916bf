//! Hausdorff distance between finite point sets.
//!
//! ```
//! let x = [[0.0, 0.0, 0.0], [10.0, 10.0, 10.0]];
//! let y = [[0.0, 0.0, 0.0]];
//! let d = pointdist::hausdorff_distance(&x, &y)?;
//! assert!((d - 10.0 * 3.0_f64.sqrt()).abs() < 1e-12);
//! # Ok::<(), pointdist::PointDistError>(())
//! ```

pub mod error;
pub mod math;
pub mod operations;

pub use error::{PointDistError, Result};
pub use math::PointSet;

use operations::query::HausdorffDistance;

/// Computes the Hausdorff distance between two sets of points given as
/// coordinate rows.
///
/// # Errors
///
/// Returns [`error::GeometryError::EmptySet`] if either set is empty,
/// [`error::GeometryError::DimensionMismatch`] if the points do not all share
/// one dimension, and [`error::GeometryError::NonFiniteCoordinate`] for NaN or
/// infinite coordinates.
pub fn hausdorff_distance<X, Y>(x: &[X], y: &[Y]) -> Result<f64>
where
    X: AsRef<[f64]>,
    Y: AsRef<[f64]>,
{
    let x = PointSet::from_rows(x)?;
    let y = PointSet::from_rows(y)?;
    Ok(HausdorffDistance::new(&x, &y).execute()?.distance)
}
