use crate::math::{Point, Real, Vector};
use crate::query::point::{point_in_convex_polygon, point_in_quadrilateral, point_in_triangle};
use crate::query::{self, polygon_edges, DegenerateShape, SegmentIntersection};
use crate::shape::{Plane, Quadrilateral, Segment, Triangle};
use crate::utils;

/// Tests whether `segment` and `triangle` intersect, without computing where.
///
/// # Errors
/// Returns an error if the triangle has (nearly) coincident or collinear
/// vertices.
pub fn intersection_test_segment_triangle(
    segment: &Segment,
    triangle: &Triangle,
) -> Result<bool, DegenerateShape> {
    let plane = Plane::from_points(&triangle.a, &triangle.b, &triangle.c);

    match query::intersection_point_segment_plane(segment, &plane) {
        SegmentIntersection::None => Ok(false),
        SegmentIntersection::Point(pt) => point_in_triangle(triangle, &pt),
        SegmentIntersection::Infinite => {
            coplanar_intersection_test(segment, triangle.vertices(), &plane.normal)
        }
        SegmentIntersection::PointPair(..) => unreachable!(),
    }
}

/// Tests whether `segment` and `quadrilateral` intersect, without computing
/// where.
pub(crate) fn intersection_test_segment_quadrilateral(
    segment: &Segment,
    quadrilateral: &Quadrilateral,
) -> Result<bool, DegenerateShape> {
    let vertices = quadrilateral.vertices();
    let plane = Plane::from_points(&vertices[0], &vertices[1], &vertices[2]);

    match query::intersection_point_segment_plane(segment, &plane) {
        SegmentIntersection::None => Ok(false),
        SegmentIntersection::Point(pt) => point_in_quadrilateral(quadrilateral, &pt),
        SegmentIntersection::Infinite => {
            coplanar_intersection_test(segment, vertices, &plane.normal)
        }
        SegmentIntersection::PointPair(..) => unreachable!(),
    }
}

// Boolean version of the coplanar case: the shapes touch iff an endpoint is
// inside the polygon or the segment hits one of its edges.
fn coplanar_intersection_test(
    segment: &Segment,
    vertices: &[Point<Real>],
    normal: &Vector<Real>,
) -> Result<bool, DegenerateShape> {
    if point_in_convex_polygon(vertices, &segment.a)?
        || point_in_convex_polygon(vertices, &segment.b)?
    {
        return Ok(true);
    }

    Ok(polygon_edges(vertices)
        .any(|edge| utils::segments_intersection3d(segment, &edge, normal).is_some()))
}
