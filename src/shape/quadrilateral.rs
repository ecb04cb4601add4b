//! Definition of the quadrilateral face shape.

use crate::math::{Point, Real};

use core::mem;

/// A convex planar quadrilateral with four consecutive vertices.
///
/// This is not a standalone public shape: it only exists as the face
/// representation handed out by [`Hexahedron::face`](crate::shape::Hexahedron).
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub(crate) struct Quadrilateral {
    /// The quadrilateral first point.
    pub a: Point<Real>,
    /// The quadrilateral second point.
    pub b: Point<Real>,
    /// The quadrilateral third point.
    pub c: Point<Real>,
    /// The quadrilateral fourth point.
    pub d: Point<Real>,
}

impl Quadrilateral {
    /// Creates a quadrilateral from four consecutive points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Quadrilateral {
        Quadrilateral { a, b, c, d }
    }

    /// Reference to an array containing the four vertices of this quadrilateral.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 4] {
        unsafe { mem::transmute(self) }
    }
}
