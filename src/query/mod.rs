//! Tolerance-aware geometric queries between segments, planes, and convex
//! volumes.
//!
//! # Intersection point queries
//! Compute where a segment meets another shape:
//! [`intersection_point_segment_plane`], [`intersection_point_segment_triangle`],
//! [`intersection_point_segment_hexahedron`].
//!
//! # Intersection tests
//! Only answer whether the shapes touch:
//! [`intersection_test_segment_plane`], [`intersection_test_segment_triangle`],
//! [`intersection_test_segment_hexahedron`].
//!
//! # Containment and classification
//! [`point_in_triangle`], [`point_in_hexahedron`], and the
//! [`SpaceRelation`] queries locating a whole shape relative to a plane.

pub use self::error::DegenerateShape;
pub use self::intersection_point::{
    intersection_point_segment_hexahedron, intersection_point_segment_plane,
    intersection_point_segment_triangle, IntersectionCount, SegmentIntersection,
};
pub use self::intersection_test::{
    intersection_test_segment_hexahedron, intersection_test_segment_plane,
    intersection_test_segment_triangle,
};
pub use self::point::{point_in_hexahedron, point_in_triangle};
pub use self::space_relation::{
    space_relation_hexahedron_plane, space_relation_point_plane, space_relation_segment_plane,
    SpaceRelation,
};

pub(crate) use self::intersection_point::{
    intersection_point_segment_quadrilateral, polygon_edges,
};
pub(crate) use self::intersection_test::intersection_test_segment_quadrilateral;

mod error;
mod intersection_point;
mod intersection_test;
pub(crate) mod point;
mod space_relation;
