use crate::math::{Point, Real};
use crate::shape::{Hexahedron, Plane};
use crate::utils;

// Tests whether `p1` and `p2` lie on the same side of the plane supporting
// the triangle `(a, b, c)`. Points on the plane count as being on both sides,
// so the test only fails when the plane strictly separates `p1` and `p2`.
fn same_side_of_plane(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    p1: &Point<Real>,
    p2: &Point<Real>,
) -> bool {
    let plane = Plane::from_points(a, b, c);
    !utils::is_negative(plane.signed_distance(p1) * plane.signed_distance(p2))
}

/// Tests whether `pt` lies inside `hexahedron`, boundary included.
///
/// One same-side test runs per face: `pt` must be on the same side of each
/// face's supporting plane as a hexahedron vertex opposite to that face. The
/// test is total: a face with a degenerate supporting plane yields signed
/// distances close to zero and counts as satisfied.
pub fn point_in_hexahedron(hexahedron: &Hexahedron, pt: &Point<Real>) -> bool {
    (0..6).all(|i| {
        let face = hexahedron.face(i);
        let reference = hexahedron.face_reference_vertex(i);
        same_side_of_plane(&face.a, &face.b, &face.c, pt, &reference)
    })
}
