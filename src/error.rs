use thiserror::Error;

/// Top-level error type for point set distance queries.
#[derive(Debug, Error)]
pub enum PointDistError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the shape of the input points.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("empty point set: {0}")]
    EmptySet(&'static str),

    #[error("non-finite coordinate at point {point}, axis {axis}")]
    NonFiniteCoordinate { point: usize, axis: usize },
}

/// Errors related to query setup.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PointDistError`].
pub type Result<T> = std::result::Result<T, PointDistError>;
