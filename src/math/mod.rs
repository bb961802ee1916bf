pub mod metric;
pub mod point_set;

pub use point_set::PointSet;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;
