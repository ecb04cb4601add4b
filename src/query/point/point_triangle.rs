use crate::math::{Point, Real};
use crate::query::DegenerateShape;
use crate::shape::Triangle;
use crate::utils;

/// Tests whether `pt` lies inside `triangle`, boundary included.
///
/// The test is carried out on the barycentric coordinates of `pt` with regard
/// to the triangle, so a point slightly off the triangle's plane is treated
/// like its in-plane projection.
///
/// # Errors
///
/// Returns [`DegenerateShape`] if the triangle has (almost) collinear or
/// coincident vertices.
pub fn point_in_triangle(triangle: &Triangle, pt: &Point<Real>) -> Result<bool, DegenerateShape> {
    let bcoords = triangle
        .barycentric_coordinates(pt)
        .ok_or(DegenerateShape)?;

    Ok(bcoords
        .iter()
        .all(|coord| utils::is_greater_or_equal(*coord, 0.0)))
}
