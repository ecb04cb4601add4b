pub use self::intersection_point_segment_hexahedron::intersection_point_segment_hexahedron;
pub use self::intersection_point_segment_plane::intersection_point_segment_plane;
pub use self::intersection_point_segment_polygon::intersection_point_segment_triangle;
pub use self::segment_intersection::{IntersectionCount, SegmentIntersection};

pub(crate) use self::intersection_point_segment_polygon::{
    intersection_point_segment_quadrilateral, polygon_edges,
};

mod intersection_point_segment_hexahedron;
mod intersection_point_segment_plane;
mod intersection_point_segment_polygon;
mod segment_intersection;
