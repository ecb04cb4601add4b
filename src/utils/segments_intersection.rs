use na::Point2;

use crate::math::{Point, Real, Vector};
use crate::shape::{Segment, SegmentPointLocation};
use crate::utils;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Intersection between two segments.
#[derive(Copy, Clone, Debug)]
pub enum SegmentsIntersection {
    /// Single point of intersection.
    Point {
        /// Where the intersection point sits on the first segment.
        loc1: SegmentPointLocation,
        /// Where the intersection point sits on the second segment.
        loc2: SegmentPointLocation,
    },
    /// Intersection along a segment (when both segments are collinear).
    ///
    /// The `first_*` pair locates the overlap endpoint closest to the first
    /// segment's `a` vertex, the `second_*` pair the other one.
    Segment {
        /// Location of the first overlap endpoint on the first segment.
        first_loc1: SegmentPointLocation,
        /// Location of the first overlap endpoint on the second segment.
        first_loc2: SegmentPointLocation,
        /// Location of the second overlap endpoint on the first segment.
        second_loc1: SegmentPointLocation,
        /// Location of the second overlap endpoint on the second segment.
        second_loc2: SegmentPointLocation,
    },
}

/// Computes the intersection between two coplanar 3D segments.
///
/// Both segments must lie in a common plane with the given (not necessarily
/// unit) `normal`. The computation runs in 2D, after dropping the coordinate
/// where `normal` is largest in absolute value; barycentric locations are
/// preserved by this projection.
pub fn segments_intersection3d(
    seg1: &Segment,
    seg2: &Segment,
    normal: &Vector<Real>,
) -> Option<SegmentsIntersection> {
    let k = normal.iamax();
    let i = (k + 1) % 3;
    let j = (k + 2) % 3;
    let proj = |pt: &Point<Real>| Point2::new(pt[i], pt[j]);

    segments_intersection2d(
        &proj(&seg1.a),
        &proj(&seg1.b),
        &proj(&seg2.a),
        &proj(&seg2.b),
        utils::TOLERANCE,
    )
}

/// Computes the intersection between the segments `[a, b]` and `[c, d]`.
pub fn segments_intersection2d(
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
    d: &Point2<Real>,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    let ab = b - a;
    let cd = d - c;
    let ac = c - a;

    // A zero perp-product means the segments are parallel: handle separately.
    let denom = ab.perp(&cd);
    if denom.abs() <= epsilon || ulps_eq!(denom, 0.0) {
        return parallel_intersection(a, b, c, d, epsilon);
    }

    let s = ac.perp(&cd) / denom;
    let t = ac.perp(&ab) / denom;

    if !utils::is_greater_or_equal(s, 0.0)
        || !utils::is_less_or_equal(s, 1.0)
        || !utils::is_greater_or_equal(t, 0.0)
        || !utils::is_less_or_equal(t, 1.0)
    {
        return None;
    }

    Some(SegmentsIntersection::Point {
        loc1: parameter_location(s),
        loc2: parameter_location(t),
    })
}

// Snaps a parameter already known to be inside `[0, 1]` (within tolerance)
// to the segment vertices.
fn parameter_location(t: Real) -> SegmentPointLocation {
    if utils::is_zero(t) {
        SegmentPointLocation::OnVertex(0)
    } else if utils::is_zero(t - 1.0) {
        SegmentPointLocation::OnVertex(1)
    } else {
        SegmentPointLocation::OnEdge([1.0 - t, t])
    }
}

fn parallel_intersection(
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
    d: &Point2<Real>,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    let ab = b - a;
    let cd = d - c;
    let ac = c - a;

    // Parallel but not on a common line: no intersection. Checking against
    // both segments keeps a degenerate one from slipping through.
    if ab.perp(&ac).abs() > epsilon || cd.perp(&ac).abs() > epsilon {
        return None;
    }

    // Both segments lie on one line: sweep it along the coordinate where the
    // longer segment extends the most.
    let dir = if ab.norm_squared() >= cd.norm_squared() {
        ab
    } else {
        cd
    };
    let i = if dir.x.abs() >= dir.y.abs() { 0 } else { 1 };

    if utils::is_zero(dir[i]) {
        // Both segments are single points.
        return if utils::points_eq2d(a, c) {
            Some(SegmentsIntersection::Segment {
                first_loc1: SegmentPointLocation::OnVertex(0),
                first_loc2: SegmentPointLocation::OnVertex(0),
                second_loc1: SegmentPointLocation::OnVertex(1),
                second_loc2: SegmentPointLocation::OnVertex(1),
            })
        } else {
            None
        };
    }

    if utils::is_zero(ab[i]) {
        // `[a, b]` is a single point lying somewhere on `[c, d]`.
        let t = (a[i] - c[i]) / cd[i];
        if !utils::is_greater_or_equal(t, 0.0) || !utils::is_less_or_equal(t, 1.0) {
            return None;
        }

        let loc2 = parameter_location(t);
        return Some(SegmentsIntersection::Segment {
            first_loc1: SegmentPointLocation::OnVertex(0),
            first_loc2: loc2,
            second_loc1: SegmentPointLocation::OnVertex(1),
            second_loc2: loc2,
        });
    }

    // Parameters of `c` and `d` along `[a, b]`, and the overlap of their
    // range with `[0, 1]`.
    let sc = (c[i] - a[i]) / ab[i];
    let sd = (d[i] - a[i]) / ab[i];

    let (enter, exit) = if sc <= sd { (sc, sd) } else { (sd, sc) };
    let lo = enter.max(0.0);
    let hi = exit.min(1.0);

    if !utils::is_less_or_equal(lo, hi) {
        return None;
    }

    // Maps a parameter on `[a, b]` back to one on `[c, d]`.
    let on_cd = |s: Real| {
        if utils::is_zero(sd - sc) {
            SegmentPointLocation::OnVertex(0)
        } else {
            parameter_location((s - sc) / (sd - sc))
        }
    };

    Some(SegmentsIntersection::Segment {
        first_loc1: parameter_location(lo),
        first_loc2: on_cd(lo),
        second_loc1: parameter_location(hi),
        second_loc2: on_cd(hi),
    })
}
