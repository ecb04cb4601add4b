use crate::math::{Point, Real};
use crate::shape::{Hexahedron, Plane, Segment};
use crate::utils;

/// The position of a whole shape relative to a plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpaceRelation {
    /// Every vertex of the shape lies on the plane.
    Contained,
    /// The shape lies in the positive half-space, vertices on the plane
    /// included.
    Positive,
    /// The shape lies in the negative half-space, vertices on the plane
    /// included.
    Negative,
    /// The shape has vertices strictly on both sides of the plane.
    BothSides,
}

/// Classifies `pt` against `plane`.
///
/// Never returns [`SpaceRelation::BothSides`].
pub fn space_relation_point_plane(pt: &Point<Real>, plane: &Plane) -> SpaceRelation {
    space_relation_points_plane(&[*pt], plane)
}

/// Classifies `segment` against `plane` from the positions of its two
/// endpoints.
pub fn space_relation_segment_plane(segment: &Segment, plane: &Plane) -> SpaceRelation {
    space_relation_points_plane(&[segment.a, segment.b], plane)
}

/// Classifies `hexahedron` against `plane` from the positions of its eight
/// vertices.
///
/// A convex hexahedron is on one side of the plane iff all its vertices are,
/// so no other points need to be examined.
pub fn space_relation_hexahedron_plane(hexahedron: &Hexahedron, plane: &Plane) -> SpaceRelation {
    space_relation_points_plane(hexahedron.vertices(), plane)
}

// Vertex sweep shared by the classifiers above. Vertices within tolerance of
// the plane count toward both half-spaces, so a shape flush against the plane
// still classifies to its side and `BothSides` requires vertices strictly
// beyond tolerance on both sides.
fn space_relation_points_plane(points: &[Point<Real>], plane: &Plane) -> SpaceRelation {
    let mut all_zero = true;
    let mut all_positive = true;
    let mut all_negative = true;

    for pt in points {
        let dist = plane.signed_distance(pt);

        all_zero = all_zero && utils::is_zero(dist);
        all_positive = all_positive && utils::is_greater_or_equal(dist, 0.0);
        all_negative = all_negative && utils::is_less_or_equal(dist, 0.0);
    }

    if all_zero {
        SpaceRelation::Contained
    } else if all_positive {
        SpaceRelation::Positive
    } else if all_negative {
        SpaceRelation::Negative
    } else {
        SpaceRelation::BothSides
    }
}
