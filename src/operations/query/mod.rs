mod directed_hausdorff;
mod hausdorff_distance;
mod nearest_point;

pub use directed_hausdorff::DirectedHausdorff;
pub use hausdorff_distance::{HausdorffDistance, HausdorffResult};
pub use nearest_point::{NearestPoint, NearestPointResult};
