use crate::query::point::point_in_hexahedron;
use crate::query::{self, DegenerateShape};
use crate::shape::{Hexahedron, Segment};

/// Tests whether `segment` and `hexahedron` intersect, without computing
/// where. A segment entirely inside the volume counts as intersecting.
///
/// # Errors
/// Returns an error if one of the faces cannot be processed because its
/// vertices are (nearly) coincident or collinear.
///
/// # Panics
/// Panics if the faces fail to separate the inside from the outside, which
/// happens when the hexahedron is not convex or its faces are not planar.
pub fn intersection_test_segment_hexahedron(
    segment: &Segment,
    hexahedron: &Hexahedron,
) -> Result<bool, DegenerateShape> {
    for i in 0..6 {
        if query::intersection_test_segment_quadrilateral(segment, &hexahedron.face(i))? {
            return Ok(true);
        }
    }

    let inside_a = point_in_hexahedron(hexahedron, &segment.a);
    let inside_b = point_in_hexahedron(hexahedron, &segment.b);

    match (inside_a, inside_b) {
        (true, true) => Ok(true),
        (false, false) => Ok(false),
        _ => panic!(
            "segment-hexahedron intersection: one endpoint lies inside and the other outside, \
             yet no face intersection was found; the hexahedron is non-convex or has non-planar \
             faces"
        ),
    }
}
