use rayon::prelude::*;

use crate::error::{GeometryError, OperationError, Result};

/// An ordered, immutable set of points sharing one dimension.
///
/// Coordinates are stored row-major in a single flat buffer. Every
/// coordinate is finite and every point has exactly `dim` coordinates.
/// Zero-dimensional points are allowed; an empty set has dimension 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    coords: Vec<f64>,
    dim: usize,
    len: usize,
}

impl PointSet {
    /// Creates an empty point set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            coords: Vec::new(),
            dim: 0,
            len: 0,
        }
    }

    /// Builds a point set from rows of coordinates.
    ///
    /// The first row fixes the dimension.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if a row differs in
    /// length from the first and [`GeometryError::NonFiniteCoordinate`] for
    /// NaN or infinite values.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };
        let dim = first.as_ref().len();

        let mut coords = Vec::with_capacity(rows.len() * dim);
        for row in rows {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(GeometryError::DimensionMismatch {
                    expected: dim,
                    found: row.len(),
                }
                .into());
            }
            coords.extend_from_slice(row);
        }
        Self::from_parts(coords, dim, rows.len())
    }

    /// Builds a point set from a row-major coordinate buffer.
    ///
    /// An empty buffer gives an empty set whatever `dim` is.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if a non-empty buffer does not
    /// split into points of dimension `dim`, and
    /// [`GeometryError::NonFiniteCoordinate`] for NaN or infinite values.
    pub fn from_flat(coords: Vec<f64>, dim: usize) -> Result<Self> {
        if coords.is_empty() {
            return Ok(Self::empty());
        }
        if dim == 0 || coords.len() % dim != 0 {
            return Err(OperationError::InvalidInput(format!(
                "{} coordinates do not split into points of dimension {dim}",
                coords.len()
            ))
            .into());
        }
        let len = coords.len() / dim;
        Self::from_parts(coords, dim, len)
    }

    /// `coords.len()` must equal `dim * len`.
    fn from_parts(coords: Vec<f64>, dim: usize, len: usize) -> Result<Self> {
        if len == 0 {
            return Ok(Self::empty());
        }
        if let Some(i) = coords.iter().position(|c| !c.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate {
                point: i / dim,
                axis: i % dim,
            }
            .into());
        }
        Ok(Self { coords, dim, len })
    }

    /// Number of points in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the set contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of coordinates per point (0 for an empty set).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the coordinates of point `index`, if present.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<&[f64]> {
        if index >= self.len {
            return None;
        }
        let start = index.checked_mul(self.dim)?;
        let end = start.checked_add(self.dim)?;
        self.coords.get(start..end)
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        (0..self.len).map(move |i| self.row(i))
    }

    /// Iterates over the points on the rayon thread pool.
    pub fn par_iter(&self) -> impl IndexedParallelIterator<Item = &[f64]> + '_ {
        (0..self.len).into_par_iter().map(move |i| self.row(i))
    }

    /// The row-major coordinate buffer.
    #[must_use]
    pub fn as_flat(&self) -> &[f64] {
        &self.coords
    }

    /// Row `i`, for `i < len`.
    fn row(&self, i: usize) -> &[f64] {
        &self.coords[i * self.dim..(i + 1) * self.dim]
    }
}

impl<const D: usize> TryFrom<&[nalgebra::Point<f64, D>]> for PointSet {
    type Error = crate::error::PointDistError;

    fn try_from(points: &[nalgebra::Point<f64, D>]) -> Result<Self> {
        let coords = points
            .iter()
            .flat_map(|p| p.coords.iter().copied())
            .collect();
        Self::from_parts(coords, D, points.len())
    }
}

impl<const D: usize> TryFrom<&[[f64; D]]> for PointSet {
    type Error = crate::error::PointDistError;

    fn try_from(points: &[[f64; D]]) -> Result<Self> {
        Self::from_rows(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PointDistError;
    use crate::math::{Point2, Point3};

    #[test]
    fn rows_are_stored_in_order() {
        let set = PointSet::from_rows(&[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.dim(), 3);
        assert_eq!(set.point(1).unwrap(), &[3.0, 4.0, 5.0]);
        assert!(set.point(2).is_none());
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn empty_rows_give_empty_set() {
        let rows: [[f64; 3]; 0] = [];
        let set = PointSet::from_rows(&rows).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
        assert!(set.point(0).is_none());
    }

    #[test]
    fn ragged_rows_fail() {
        let rows = vec![vec![0.0, 0.0, 0.0], vec![1.0, 1.0]];
        let err = PointSet::from_rows(&rows).unwrap_err();
        assert!(matches!(
            err,
            PointDistError::Geometry(GeometryError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn nan_coordinate_fails() {
        let err = PointSet::from_rows(&[[0.0, 0.0], [1.0, f64::NAN]]).unwrap_err();
        assert!(matches!(
            err,
            PointDistError::Geometry(GeometryError::NonFiniteCoordinate { point: 1, axis: 1 })
        ));
    }

    #[test]
    fn zero_dimension_rows_keep_their_count() {
        let rows: Vec<Vec<f64>> = vec![vec![], vec![]];
        let set = PointSet::from_rows(&rows).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.dim(), 0);
        assert!(!set.is_empty());
        assert_eq!(set.point(1).unwrap(), &[] as &[f64]);
        assert!(set.point(2).is_none());
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn huge_index_is_none() {
        let set = PointSet::from_rows(&[[0.0, 1.0, 2.0]]).unwrap();
        assert!(set.point(usize::MAX / 3).is_none());
        assert!(set.point(usize::MAX).is_none());
    }

    #[test]
    fn par_iter_visits_points_in_order() {
        let set = PointSet::from_flat((0..12).map(f64::from).collect(), 3).unwrap();
        let seq: Vec<&[f64]> = set.iter().collect();
        let par: Vec<&[f64]> = set.par_iter().collect();
        assert_eq!(seq, par);
        assert_eq!(par[3], &[9.0, 10.0, 11.0]);
    }

    #[test]
    fn flat_buffer_must_divide_by_dim() {
        let err = PointSet::from_flat(vec![0.0; 5], 3).unwrap_err();
        assert!(matches!(err, PointDistError::Operation(_)));

        let err = PointSet::from_flat(vec![0.0; 3], 0).unwrap_err();
        assert!(matches!(err, PointDistError::Operation(_)));

        let set = PointSet::from_flat(vec![0.0; 6], 3).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn from_nalgebra_points() {
        let pts = [Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)];
        let set = PointSet::try_from(&pts[..]).unwrap();
        assert_eq!(set.dim(), 3);
        assert_eq!(set.as_flat(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let planar = [Point2::new(1.0, 2.0)];
        let set = PointSet::try_from(&planar[..]).unwrap();
        assert_eq!(set.dim(), 2);
    }
}
