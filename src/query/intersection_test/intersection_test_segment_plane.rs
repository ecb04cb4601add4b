use crate::shape::{Plane, Segment};
use crate::utils;

/// Tests whether `segment` and `plane` intersect, without computing where.
///
/// Endpoints within tolerance of the plane count as touching it.
pub fn intersection_test_segment_plane(segment: &Segment, plane: &Plane) -> bool {
    let da = plane.signed_distance(&segment.a);
    let db = plane.signed_distance(&segment.b);

    utils::is_zero(da) || utils::is_zero(db) || da * db < 0.0
}
