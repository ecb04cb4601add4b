use arrayvec::ArrayVec;

use super::intersection_point_segment_polygon::order_from_segment_start;
use crate::math::{Point, Real};
use crate::query::point::point_in_hexahedron;
use crate::query::{self, DegenerateShape, SegmentIntersection};
use crate::shape::{Hexahedron, Segment};
use crate::utils;

/// Computes the intersection point(s) between `segment` and the boundary of
/// `hexahedron`.
///
/// The result collects the points where the segment meets the hexahedron's
/// six faces. A segment lying entirely inside the volume, or lying in the
/// plane of one of the faces with both endpoints on it, reports
/// [`SegmentIntersection::Infinite`]. Pairs are ordered by distance from the
/// segment's `a` endpoint.
///
/// # Errors
/// Returns an error if one of the faces cannot be processed because its
/// vertices are (nearly) coincident or collinear.
///
/// # Panics
/// Panics if the faces fail to separate the inside from the outside, which
/// happens when the hexahedron is not convex or its faces are not planar.
pub fn intersection_point_segment_hexahedron(
    segment: &Segment,
    hexahedron: &Hexahedron,
) -> Result<SegmentIntersection, DegenerateShape> {
    let mut points: ArrayVec<Point<Real>, 6> = ArrayVec::new();

    for i in 0..6 {
        let face = hexahedron.face(i);

        match query::intersection_point_segment_quadrilateral(segment, &face)? {
            SegmentIntersection::None => {}
            SegmentIntersection::Point(pt) => {
                if !points.iter().any(|other| utils::points_eq(other, &pt)) {
                    points.push(pt);
                }
            }
            // A single face already carries both intersection points, ordered
            // from `segment.a`.
            pair @ SegmentIntersection::PointPair(..) => return Ok(pair),
            SegmentIntersection::Infinite => return Ok(SegmentIntersection::Infinite),
        }
    }

    match points.len() {
        0 => {
            let inside_a = point_in_hexahedron(hexahedron, &segment.a);
            let inside_b = point_in_hexahedron(hexahedron, &segment.b);

            match (inside_a, inside_b) {
                (true, true) => Ok(SegmentIntersection::Infinite),
                (false, false) => Ok(SegmentIntersection::None),
                _ => panic!(
                    "segment-hexahedron intersection: one endpoint lies inside and the other \
                     outside, yet no face intersection was found; the hexahedron is non-convex \
                     or has non-planar faces"
                ),
            }
        }
        1 => Ok(SegmentIntersection::Point(points[0])),
        2 => Ok(order_from_segment_start(segment, points[0], points[1])),
        len => {
            // A segment grazing an edge or corner of the hexahedron can
            // collect one point per adjacent face that survives deduplication.
            // The extreme points along the segment are the entry and the exit.
            log::debug!(
                "segment-hexahedron intersection collected {} distinct face points, keeping the \
                 two extremes",
                len
            );

            let mut first = points[0];
            let mut second = points[0];

            for pt in points.iter() {
                if na::distance_squared(&segment.a, pt)
                    < na::distance_squared(&segment.a, &first)
                {
                    first = *pt;
                }
                if na::distance_squared(&segment.a, pt)
                    > na::distance_squared(&segment.a, &second)
                {
                    second = *pt;
                }
            }

            Ok(SegmentIntersection::PointPair(first, second))
        }
    }
}
