use crate::query::SegmentIntersection;
use crate::shape::{Plane, Segment};
use crate::utils;

/// Computes the intersection point(s) between `segment` and `plane`.
///
/// An endpoint within tolerance of the plane counts as lying on it, so a
/// segment that merely touches the plane with one endpoint reports that
/// endpoint. A segment with both endpoints on the plane reports
/// [`SegmentIntersection::Infinite`], including the degenerate case where the
/// two endpoints coincide.
pub fn intersection_point_segment_plane(segment: &Segment, plane: &Plane) -> SegmentIntersection {
    let da = plane.signed_distance(&segment.a);
    let db = plane.signed_distance(&segment.b);

    match (utils::is_zero(da), utils::is_zero(db)) {
        (true, true) => SegmentIntersection::Infinite,
        (true, false) => SegmentIntersection::Point(segment.a),
        (false, true) => SegmentIntersection::Point(segment.b),
        (false, false) => {
            // Both endpoints are strictly off the plane, so a crossing exists
            // iff the raw signed distances have opposite signs.
            if da * db < 0.0 {
                let t = na::clamp(da / (da - db), 0.0, 1.0);
                SegmentIntersection::Point(segment.a + segment.scaled_direction() * t)
            } else {
                SegmentIntersection::None
            }
        }
    }
}
