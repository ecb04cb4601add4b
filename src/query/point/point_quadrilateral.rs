use crate::math::{Point, Real};
use crate::query::point::point_in_triangle;
use crate::query::DegenerateShape;
use crate::shape::{Quadrilateral, Triangle};

/// Tests whether `pt` lies inside the convex polygon with the given
/// consecutive `vertices`, boundary included.
///
/// The polygon is decomposed into the triangle fan anchored at its first
/// vertex; `pt` is inside the polygon if it is inside any fan triangle. A
/// degenerate fan triangle makes the whole test fail with [`DegenerateShape`].
pub(crate) fn point_in_convex_polygon(
    vertices: &[Point<Real>],
    pt: &Point<Real>,
) -> Result<bool, DegenerateShape> {
    let mut inside = false;

    for i in 1..vertices.len() - 1 {
        let tri = Triangle::new(vertices[0], vertices[i + 1], vertices[i]);
        inside = point_in_triangle(&tri, pt)? || inside;
    }

    Ok(inside)
}

/// Tests whether `pt` lies inside `quad`, boundary included.
pub(crate) fn point_in_quadrilateral(
    quad: &Quadrilateral,
    pt: &Point<Real>,
) -> Result<bool, DegenerateShape> {
    point_in_convex_polygon(quad.vertices(), pt)
}
