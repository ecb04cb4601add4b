pub use self::intersection_test_segment_hexahedron::intersection_test_segment_hexahedron;
pub use self::intersection_test_segment_plane::intersection_test_segment_plane;
pub use self::intersection_test_segment_polygon::intersection_test_segment_triangle;

pub(crate) use self::intersection_test_segment_polygon::intersection_test_segment_quadrilateral;

mod intersection_test_segment_hexahedron;
mod intersection_test_segment_plane;
mod intersection_test_segment_polygon;
