pub mod distance_2d;
pub mod orient_2d;

pub use distance_2d::distance;
pub use orient_2d::{cross_2d, segments_intersect, side_of_line, Side};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for degeneracy checks.
///
/// The orientation predicates themselves compare signs exactly.
pub const TOLERANCE: f64 = 1e-10;
