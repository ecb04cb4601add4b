//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::segments_intersection::{
    segments_intersection2d, segments_intersection3d, SegmentsIntersection,
};
pub use self::tolerance::{
    is_greater_or_equal, is_less_or_equal, is_negative, is_positive, is_zero, points_eq, TOLERANCE,
};

pub(crate) use self::sort::sort3;
pub(crate) use self::tolerance::points_eq2d;

mod center;
mod segments_intersection;
mod sort;
mod tolerance;
