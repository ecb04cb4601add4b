use arrayvec::ArrayVec;

use crate::math::{Point, Real, Vector};
use crate::query::point::point_in_convex_polygon;
use crate::query::{self, DegenerateShape, SegmentIntersection};
use crate::shape::{Plane, Quadrilateral, Segment, Triangle};
use crate::utils::{self, SegmentsIntersection};

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Computes the intersection point(s) between `segment` and `triangle`,
/// boundary included.
///
/// A segment lying in the triangle's plane reports the part of itself covered
/// by the triangle: its own endpoints when it is fully inside, and the points
/// where it enters or leaves through the boundary otherwise.
///
/// # Errors
/// Returns an error if the triangle has (nearly) coincident or collinear
/// vertices.
pub fn intersection_point_segment_triangle(
    segment: &Segment,
    triangle: &Triangle,
) -> Result<SegmentIntersection, DegenerateShape> {
    intersection_point_segment_polygon(segment, triangle.vertices())
}

/// Computes the intersection point(s) between `segment` and `quadrilateral`.
pub(crate) fn intersection_point_segment_quadrilateral(
    segment: &Segment,
    quadrilateral: &Quadrilateral,
) -> Result<SegmentIntersection, DegenerateShape> {
    intersection_point_segment_polygon(segment, quadrilateral.vertices())
}

// Shared implementation working on the polygon's vertex slice. The vertices
// must be coplanar and describe a convex polygon.
fn intersection_point_segment_polygon(
    segment: &Segment,
    vertices: &[Point<Real>],
) -> Result<SegmentIntersection, DegenerateShape> {
    let plane = Plane::from_points(&vertices[0], &vertices[1], &vertices[2]);

    match query::intersection_point_segment_plane(segment, &plane) {
        SegmentIntersection::None => Ok(SegmentIntersection::None),
        SegmentIntersection::Point(pt) => {
            if point_in_convex_polygon(vertices, &pt)? {
                Ok(SegmentIntersection::Point(pt))
            } else {
                Ok(SegmentIntersection::None)
            }
        }
        SegmentIntersection::Infinite => {
            coplanar_segment_polygon_intersection(segment, vertices, &plane.normal)
        }
        // The plane query never reports point pairs.
        SegmentIntersection::PointPair(..) => unreachable!(),
    }
}

// Resolves the intersection once `segment` is known to lie in the polygon's
// plane.
fn coplanar_segment_polygon_intersection(
    segment: &Segment,
    vertices: &[Point<Real>],
    normal: &Vector<Real>,
) -> Result<SegmentIntersection, DegenerateShape> {
    let inside_a = point_in_convex_polygon(vertices, &segment.a)?;
    let inside_b = point_in_convex_polygon(vertices, &segment.b)?;

    if inside_a && inside_b {
        if utils::points_eq(&segment.a, &segment.b) {
            Ok(SegmentIntersection::Point(segment.a))
        } else {
            Ok(SegmentIntersection::PointPair(segment.a, segment.b))
        }
    } else if inside_a || inside_b {
        Ok(one_endpoint_inside(segment, vertices, normal, inside_a))
    } else {
        Ok(both_endpoints_outside(segment, vertices, normal))
    }
}

// One endpoint is inside the polygon and the other is not: the intersection
// runs from the inside endpoint to the point where the segment leaves through
// the boundary.
fn one_endpoint_inside(
    segment: &Segment,
    vertices: &[Point<Real>],
    normal: &Vector<Real>,
    inside_is_a: bool,
) -> SegmentIntersection {
    let (inside_t, inside_pt) = if inside_is_a {
        (0.0, segment.a)
    } else {
        (1.0, segment.b)
    };

    // The exit point is the boundary hit farthest along the segment from the
    // inside endpoint.
    let mut exit_t = inside_t;

    for edge in polygon_edges(vertices) {
        match utils::segments_intersection3d(segment, &edge, normal) {
            Some(SegmentsIntersection::Point { loc1, .. }) => {
                exit_t = farther_from(inside_t, exit_t, loc1.parameter());
            }
            Some(SegmentsIntersection::Segment {
                first_loc1,
                second_loc1,
                ..
            }) => {
                exit_t = farther_from(inside_t, exit_t, first_loc1.parameter());
                exit_t = farther_from(inside_t, exit_t, second_loc1.parameter());
            }
            None => {}
        }
    }

    let exit_pt = segment.a + segment.scaled_direction() * exit_t;

    if utils::points_eq(&inside_pt, &exit_pt) {
        // The inside endpoint sits on the boundary and the rest of the
        // segment runs outward.
        SegmentIntersection::Point(inside_pt)
    } else if inside_t < exit_t {
        SegmentIntersection::PointPair(inside_pt, exit_pt)
    } else {
        SegmentIntersection::PointPair(exit_pt, inside_pt)
    }
}

// Both endpoints are outside the polygon: the intersection is either a
// collinear overlap with one of the edges, or up to two crossing points
// through the boundary.
fn both_endpoints_outside(
    segment: &Segment,
    vertices: &[Point<Real>],
    normal: &Vector<Real>,
) -> SegmentIntersection {
    let mut candidates: ArrayVec<(Real, Point<Real>), 8> = ArrayVec::new();

    for edge in polygon_edges(vertices) {
        match utils::segments_intersection3d(segment, &edge, normal) {
            Some(SegmentsIntersection::Point { loc1, .. }) => {
                let t = loc1.parameter();
                push_candidate(&mut candidates, t, segment.a + segment.scaled_direction() * t);
            }
            Some(SegmentsIntersection::Segment {
                first_loc1,
                first_loc2,
                second_loc2,
                ..
            }) => {
                let p1 = edge.point_at(&first_loc2);
                let p2 = edge.point_at(&second_loc2);

                if utils::points_eq(&p1, &p2) {
                    // Collinear contact reduced to a single point.
                    push_candidate(&mut candidates, first_loc1.parameter(), p1);
                } else {
                    // A positive-length collinear overlap with an edge covers
                    // that whole edge since both segment endpoints lie outside
                    // the polygon.
                    return order_from_segment_start(segment, edge.a, edge.b);
                }
            }
            None => {}
        }
    }

    match candidates.len() {
        0 => SegmentIntersection::None,
        1 => SegmentIntersection::Point(candidates[0].1),
        _ => {
            // Keep the extreme crossings along the segment. More than two
            // distinct candidates only show up when the segment grazes a
            // vertex shared by two edges.
            let mut first = candidates[0];
            let mut second = candidates[0];

            for candidate in candidates.iter().copied() {
                if candidate.0 < first.0 {
                    first = candidate;
                }
                if candidate.0 > second.0 {
                    second = candidate;
                }
            }

            SegmentIntersection::PointPair(first.1, second.1)
        }
    }
}

fn push_candidate(candidates: &mut ArrayVec<(Real, Point<Real>), 8>, t: Real, pt: Point<Real>) {
    if !candidates.iter().any(|(_, other)| utils::points_eq(other, &pt)) {
        candidates.push((t, pt));
    }
}

fn farther_from(origin: Real, t1: Real, t2: Real) -> Real {
    if (t2 - origin).abs() > (t1 - origin).abs() {
        t2
    } else {
        t1
    }
}

pub(crate) fn order_from_segment_start(
    segment: &Segment,
    p1: Point<Real>,
    p2: Point<Real>,
) -> SegmentIntersection {
    if na::distance_squared(&segment.a, &p1) <= na::distance_squared(&segment.a, &p2) {
        SegmentIntersection::PointPair(p1, p2)
    } else {
        SegmentIntersection::PointPair(p2, p1)
    }
}

pub(crate) fn polygon_edges(vertices: &[Point<Real>]) -> impl Iterator<Item = Segment> + '_ {
    (0..vertices.len()).map(move |i| Segment::new(vertices[i], vertices[(i + 1) % vertices.len()]))
}
