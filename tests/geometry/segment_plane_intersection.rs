use na::{Point3, Vector3};
use riposte3d::query::{self, IntersectionCount, SegmentIntersection};
use riposte3d::shape::{Plane, Segment};

#[test]
fn crossing_segment_reports_the_crossing_point() {
    let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), 0.0);
    let segment = Segment::new(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 1.0));

    let inter = query::intersection_point_segment_plane(&segment, &plane);

    assert_eq!(inter, SegmentIntersection::Point(Point3::new(0.0, 0.0, 0.0)));
    assert_eq!(inter.count(), IntersectionCount::One);
    assert!(query::intersection_test_segment_plane(&segment, &plane));
}

#[test]
fn endpoint_touch_reports_the_endpoint() {
    let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), 0.0);
    let segment = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0));

    let inter = query::intersection_point_segment_plane(&segment, &plane);

    assert_eq!(inter, SegmentIntersection::Point(Point3::new(0.0, 0.0, 0.0)));
    assert!(query::intersection_test_segment_plane(&segment, &plane));
}

#[test]
fn coplanar_segment_reports_infinitely_many_points() {
    let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), -1.0);
    let segment = Segment::new(Point3::new(3.0, -2.0, 1.0), Point3::new(-5.0, 8.0, 1.0));

    let inter = query::intersection_point_segment_plane(&segment, &plane);

    assert_eq!(inter, SegmentIntersection::Infinite);
    assert_eq!(inter.count(), IntersectionCount::Infinite);
    assert!(query::intersection_test_segment_plane(&segment, &plane));
}

#[test]
fn segment_on_one_side_misses() {
    let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), 0.0);
    let segment = Segment::new(Point3::new(0.0, 0.0, 0.1), Point3::new(5.0, 5.0, 3.0));

    let inter = query::intersection_point_segment_plane(&segment, &plane);

    assert_eq!(inter, SegmentIntersection::None);
    assert_eq!(inter.count(), IntersectionCount::None);
    assert!(!inter.is_intersection());
    assert!(!query::intersection_test_segment_plane(&segment, &plane));
}

#[test]
fn degenerate_segment_on_the_plane_is_infinite() {
    let plane = Plane::new(Vector3::new(0.0, 1.0, 0.0), -2.0);
    let pt = Point3::new(4.0, 2.0, -1.0);
    let segment = Segment::new(pt, pt);

    let inter = query::intersection_point_segment_plane(&segment, &plane);

    assert_eq!(inter, SegmentIntersection::Infinite);
}

#[test]
fn tilted_plane_crossing_point_lies_on_the_plane() {
    let plane = Plane::from_points(
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
        &Point3::new(0.0, 0.0, 1.0),
    );
    let segment = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

    match query::intersection_point_segment_plane(&segment, &plane) {
        SegmentIntersection::Point(pt) => {
            let expected = Point3::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
            assert_relative_eq!(pt, expected, epsilon = 1.0e-6);
            // The reported point must lie on the plane itself.
            let normalized = plane.normalized().unwrap();
            assert_relative_eq!(normalized.signed_distance(&pt), 0.0, epsilon = 1.0e-6);
        }
        inter => panic!("expected a point intersection, found {:?}", inter),
    }
}
