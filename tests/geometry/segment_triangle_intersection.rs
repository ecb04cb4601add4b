use na::Point3;
use riposte3d::math::{Point, Real};
use riposte3d::query::{self, SegmentIntersection};
use riposte3d::shape::{Segment, Triangle};

fn reference_triangle() -> Triangle {
    Triangle::new(
        Point3::new(-1.0, -1.0, 0.0),
        Point3::new(1.0, -1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    )
}

fn assert_point_pair(inter: SegmentIntersection, first: Point<Real>, second: Point<Real>) {
    match inter {
        SegmentIntersection::PointPair(p1, p2) => {
            assert_relative_eq!(p1, first, epsilon = 1.0e-5);
            assert_relative_eq!(p2, second, epsilon = 1.0e-5);
        }
        _ => panic!("expected a point pair, found {:?}", inter),
    }
}

#[test]
fn transversal_crossing_inside_and_outside() {
    let triangle = reference_triangle();

    let through = Segment::new(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 1.0));
    let beside = Segment::new(Point3::new(2.0, 0.0, -1.0), Point3::new(2.0, 0.0, 1.0));

    assert_eq!(
        query::intersection_point_segment_triangle(&through, &triangle).unwrap(),
        SegmentIntersection::Point(Point3::new(0.0, 0.0, 0.0))
    );
    assert_eq!(
        query::intersection_point_segment_triangle(&beside, &triangle).unwrap(),
        SegmentIntersection::None
    );

    assert!(query::intersection_test_segment_triangle(&through, &triangle).unwrap());
    assert!(!query::intersection_test_segment_triangle(&beside, &triangle).unwrap());
}

#[test]
fn coplanar_segment_inside_reports_its_own_endpoints() {
    let triangle = reference_triangle();
    let segment = Segment::new(Point3::new(-0.2, -0.5, 0.0), Point3::new(0.3, 0.1, 0.0));

    let inter = query::intersection_point_segment_triangle(&segment, &triangle).unwrap();

    assert_eq!(inter, SegmentIntersection::PointPair(segment.a, segment.b));
}

#[test]
fn coplanar_segment_entering_through_an_edge() {
    let triangle = reference_triangle();
    // Starts inside, leaves through the bottom edge y = -1.
    let segment = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, -2.0, 0.0));

    let inter = query::intersection_point_segment_triangle(&segment, &triangle).unwrap();
    assert_point_pair(inter, Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, -1.0, 0.0));
}

#[test]
fn coplanar_segment_crossing_two_edges() {
    let triangle = reference_triangle();
    let segment = Segment::new(Point3::new(-2.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));

    // The triangle edges join (±1, -1) to (0, 1), so y = 0 cuts them at
    // x = ±0.5.
    let inter = query::intersection_point_segment_triangle(&segment, &triangle).unwrap();
    assert_point_pair(inter, Point3::new(-0.5, 0.0, 0.0), Point3::new(0.5, 0.0, 0.0));
}

#[test]
fn coplanar_segment_collinear_with_an_edge() {
    let triangle = reference_triangle();
    let segment = Segment::new(Point3::new(-3.0, -1.0, 0.0), Point3::new(3.0, -1.0, 0.0));

    // The overlap covers the whole bottom edge, reported from the vertex
    // closest to the segment start.
    let inter = query::intersection_point_segment_triangle(&segment, &triangle).unwrap();
    assert_eq!(
        inter,
        SegmentIntersection::PointPair(Point3::new(-1.0, -1.0, 0.0), Point3::new(1.0, -1.0, 0.0))
    );
}

#[test]
fn coplanar_degenerate_segment_inside_is_a_point() {
    let triangle = reference_triangle();
    let pt = Point3::new(0.1, -0.2, 0.0);
    let segment = Segment::new(pt, pt);

    let inter = query::intersection_point_segment_triangle(&segment, &triangle).unwrap();
    assert_eq!(inter, SegmentIntersection::Point(pt));
}

#[test]
fn face_graze_touching_a_vertex_counts_once() {
    let triangle = reference_triangle();
    // Crosses the triangle's plane exactly at the apex (0, 1, 0).
    let segment = Segment::new(Point3::new(0.0, 1.0, -1.0), Point3::new(0.0, 1.0, 1.0));

    let inter = query::intersection_point_segment_triangle(&segment, &triangle).unwrap();
    assert_eq!(inter, SegmentIntersection::Point(Point3::new(0.0, 1.0, 0.0)));
}

#[test]
fn degenerate_triangle_is_reported_as_an_error() {
    let collinear = Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(3.0, 3.0, 0.0),
    );
    let coincident = Triangle::new(
        Point3::new(1.0, 2.0, 3.0),
        Point3::new(1.0, 2.0, 3.0),
        Point3::new(0.0, 0.0, 1.0),
    );
    let segment = Segment::new(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 1.0));

    assert!(query::intersection_point_segment_triangle(&segment, &collinear).is_err());
    assert!(query::intersection_point_segment_triangle(&segment, &coincident).is_err());
    assert!(query::intersection_test_segment_triangle(&segment, &collinear).is_err());
}

#[test]
fn triangle_edges_touch_their_own_triangle() {
    let triangle = reference_triangle();

    // Every edge, queried as a segment, touches the triangle (it lies on the
    // boundary), and its midpoint is contained.
    for edge in triangle.edges() {
        assert!(query::intersection_test_segment_triangle(&edge, &triangle).unwrap());
        assert_eq!(query::point_in_triangle(&triangle, &edge.center()), Ok(true));
    }
}
