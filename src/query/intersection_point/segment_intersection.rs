use crate::math::{Point, Real};

/// The number of points in the intersection between a segment and another shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionCount {
    /// The intersection is empty.
    None,
    /// The intersection is a single point.
    One,
    /// The intersection consists of exactly two points.
    Two,
    /// The intersection holds infinitely many points.
    Infinite,
}

/// The result of an intersection-point query between a segment and another shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// The segment does not touch the shape.
    None,
    /// The segment touches the shape at a single point.
    Point(Point<Real>),
    /// The segment meets the shape at exactly two points.
    ///
    /// The first point is always the one closest to the segment's `a` endpoint.
    PointPair(Point<Real>, Point<Real>),
    /// The segment shares infinitely many points with the shape: it lies in
    /// the queried plane, or is embedded in the queried volume.
    Infinite,
}

impl SegmentIntersection {
    /// The number of intersection points described by this result.
    pub fn count(&self) -> IntersectionCount {
        match self {
            SegmentIntersection::None => IntersectionCount::None,
            SegmentIntersection::Point(_) => IntersectionCount::One,
            SegmentIntersection::PointPair(..) => IntersectionCount::Two,
            SegmentIntersection::Infinite => IntersectionCount::Infinite,
        }
    }

    /// Does this result describe a non-empty intersection?
    pub fn is_intersection(&self) -> bool {
        *self != SegmentIntersection::None
    }
}
