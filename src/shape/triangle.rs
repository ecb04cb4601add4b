//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};
use crate::shape::Segment;
use crate::utils;

use core::mem;
use na::{self, ComplexField, Unit};

/// A triangle shape.
///
/// The vertices are expected counter-clockwise when seen from the positive
/// side of the plane spanned by the triangle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        *Self::from_array(&arr)
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates the reference to a triangle from the reference to an array of three points.
    pub fn from_array(arr: &[Point<Real>; 3]) -> &Triangle {
        unsafe { mem::transmute(arr) }
    }

    /// Reference to an array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 3] {
        unsafe { mem::transmute(self) }
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn normal(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        // Kahan's formula, with the side lengths sorted so that a >= b >= c.
        let ab = na::distance(&self.a, &self.b);
        let bc = na::distance(&self.b, &self.c);
        let ca = na::distance(&self.c, &self.a);

        let (c, b, a) = utils::sort3(ab, bc, ca);
        let sqr = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));

        // The product can dip slightly below zero on almost-degenerate
        // triangles.
        ComplexField::sqrt(sqr.max(0.0)) * 0.25
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&[self.a, self.b, self.c])
    }

    /// The perimeter of this triangle.
    #[inline]
    pub fn perimeter(&self) -> Real {
        na::distance(&self.a, &self.b)
            + na::distance(&self.b, &self.c)
            + na::distance(&self.c, &self.a)
    }

    /// Tests whether this triangle is degenerate, i.e., its vertices are
    /// (almost) collinear or coincident.
    ///
    /// This is the same criterion that makes [`Triangle::barycentric_coordinates`]
    /// return `None`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        utils::is_zero(self.scaled_normal().norm_squared())
    }

    /// The barycentric coordinates of `p` with regard to the vertices of
    /// this triangle, in the order `[a, b, c]`.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn barycentric_coordinates(&self, p: &Point<Real>) -> Option<[Real; 3]> {
        let v0 = self.c - self.a;
        let v1 = self.b - self.a;
        let v2 = p - self.a;

        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d02 = v0.dot(&v2);
        let d11 = v1.dot(&v1);
        let d12 = v1.dot(&v2);

        // By the Lagrange identity this is `|v0 × v1|²`, i.e. four times the
        // squared area of the triangle.
        let denom = d00 * d11 - d01 * d01;

        if utils::is_zero(denom) {
            return None;
        }

        let u = (d11 * d02 - d01 * d12) / denom;
        let v = (d00 * d12 - d01 * d02) / denom;

        Some([1.0 - u - v, v, u])
    }
}
