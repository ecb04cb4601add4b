use na::{Point3, Vector3};
use riposte3d::query::{self, IntersectionCount, SegmentIntersection};
use riposte3d::shape::{Hexahedron, Segment};

fn unit_cube() -> Hexahedron {
    Hexahedron::cuboid(Vector3::new(0.5, 0.5, 0.5))
}

#[test]
fn crossing_segment_reports_entry_and_exit_in_order() {
    let cube = unit_cube();
    let segment = Segment::new(Point3::new(0.0, 0.0, -2.0), Point3::new(0.0, 0.0, 2.0));

    let inter = query::intersection_point_segment_hexahedron(&segment, &cube).unwrap();

    assert_eq!(
        inter,
        SegmentIntersection::PointPair(Point3::new(0.0, 0.0, -0.5), Point3::new(0.0, 0.0, 0.5))
    );
    assert_eq!(inter.count(), IntersectionCount::Two);
}

#[test]
fn embedded_segment_reports_infinitely_many_points() {
    let cube = unit_cube();
    let segment = Segment::new(Point3::new(0.0, 0.0, -0.1), Point3::new(0.0, 0.0, 0.1));

    let inter = query::intersection_point_segment_hexahedron(&segment, &cube).unwrap();

    assert_eq!(inter, SegmentIntersection::Infinite);
    assert_eq!(inter.count(), IntersectionCount::Infinite);
    assert!(query::intersection_test_segment_hexahedron(&segment, &cube).unwrap());
}

#[test]
fn degenerate_segment_inside_reports_infinitely_many_points() {
    let cube = unit_cube();
    let pt = Point3::new(0.1, -0.2, 0.3);
    let segment = Segment::new(pt, pt);

    let inter = query::intersection_point_segment_hexahedron(&segment, &cube).unwrap();
    assert_eq!(inter, SegmentIntersection::Infinite);
}

#[test]
fn face_graze_reports_a_single_point() {
    let cube = unit_cube();
    // Touches the top face z = 0.5 with one endpoint and leaves upward.
    let segment = Segment::new(Point3::new(0.25, 0.25, 0.5), Point3::new(0.25, 0.25, 2.0));

    let inter = query::intersection_point_segment_hexahedron(&segment, &cube).unwrap();

    assert_eq!(
        inter,
        SegmentIntersection::Point(Point3::new(0.25, 0.25, 0.5))
    );
    assert_eq!(inter.count(), IntersectionCount::One);
}

#[test]
fn edge_graze_deduplicates_the_shared_point() {
    let cube = unit_cube();
    // Crosses the edge shared by the faces x = 0.5 and z = 0.5.
    let segment = Segment::new(Point3::new(0.0, 0.0, 1.0), Point3::new(1.0, 0.0, 0.0));

    let inter = query::intersection_point_segment_hexahedron(&segment, &cube).unwrap();

    assert_eq!(
        inter,
        SegmentIntersection::Point(Point3::new(0.5, 0.0, 0.5))
    );
}

#[test]
fn segment_lying_on_a_face_reports_its_endpoints() {
    let cube = unit_cube();
    // Lies in the plane of the top face, inside the face's bounds.
    let segment = Segment::new(Point3::new(-0.25, 0.0, 0.5), Point3::new(0.25, 0.0, 0.5));

    let inter = query::intersection_point_segment_hexahedron(&segment, &cube).unwrap();
    assert_eq!(inter, SegmentIntersection::PointPair(segment.a, segment.b));
}

#[test]
fn outside_segment_misses() {
    let cube = unit_cube();
    let segment = Segment::new(Point3::new(2.0, 0.0, -2.0), Point3::new(2.0, 0.0, 2.0));

    let inter = query::intersection_point_segment_hexahedron(&segment, &cube).unwrap();

    assert_eq!(inter, SegmentIntersection::None);
    assert!(!query::intersection_test_segment_hexahedron(&segment, &cube).unwrap());
}

#[test]
fn boolean_test_agrees_with_the_point_query() {
    let cube = unit_cube();

    let segments = [
        Segment::new(Point3::new(0.0, 0.0, -2.0), Point3::new(0.0, 0.0, 2.0)),
        Segment::new(Point3::new(0.0, 0.0, -0.1), Point3::new(0.0, 0.0, 0.1)),
        Segment::new(Point3::new(2.0, 0.0, -2.0), Point3::new(2.0, 0.0, 2.0)),
        Segment::new(Point3::new(0.25, 0.25, 0.5), Point3::new(0.25, 0.25, 2.0)),
        Segment::new(Point3::new(-2.0, -2.0, 0.0), Point3::new(2.0, 2.0, 0.0)),
    ];

    for segment in &segments {
        let point_query = query::intersection_point_segment_hexahedron(segment, &cube).unwrap();
        let boolean = query::intersection_test_segment_hexahedron(segment, &cube).unwrap();
        assert_eq!(point_query.is_intersection(), boolean);
    }
}

#[test]
fn skewed_hexahedron_crossing() {
    // The unit cube sheared by x ↦ x + z, crossed vertically through the
    // center of its top face.
    let hexahedron = Hexahedron::new(
        Point3::new(0.0, -0.5, 0.5),
        Point3::new(1.0, -0.5, 0.5),
        Point3::new(1.0, 0.5, 0.5),
        Point3::new(0.0, 0.5, 0.5),
        Point3::new(-1.0, -0.5, -0.5),
        Point3::new(-1.0, 0.5, -0.5),
        Point3::new(0.0, 0.5, -0.5),
        Point3::new(0.0, -0.5, -0.5),
    );
    let segment = Segment::new(Point3::new(0.5, 0.0, -2.0), Point3::new(0.5, 0.0, 2.0));

    let inter = query::intersection_point_segment_hexahedron(&segment, &hexahedron).unwrap();

    // Enters through a slanted side face and leaves through the top.
    assert_eq!(
        inter,
        SegmentIntersection::PointPair(Point3::new(0.5, 0.0, 0.0), Point3::new(0.5, 0.0, 0.5))
    );
}
