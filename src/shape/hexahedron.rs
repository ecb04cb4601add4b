//! Definition of the hexahedron shape.

use crate::math::{Point, Real, Vector};
use crate::shape::Quadrilateral;
use crate::utils;

use core::mem;

/// A convex hexahedron with 8 vertices and 6 planar quadrilateral faces.
///
/// The faces are the quadrilaterals ABCD, EFGH, ABHE, BCGH, ADFE, and CDFG.
/// Whoever builds the hexahedron is responsible for convexity and face
/// planarity: the intersection queries assume both.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Hexahedron {
    /// The hexahedron first point.
    pub a: Point<Real>,
    /// The hexahedron second point.
    pub b: Point<Real>,
    /// The hexahedron third point.
    pub c: Point<Real>,
    /// The hexahedron fourth point.
    pub d: Point<Real>,
    /// The hexahedron fifth point.
    pub e: Point<Real>,
    /// The hexahedron sixth point.
    pub f: Point<Real>,
    /// The hexahedron seventh point.
    pub g: Point<Real>,
    /// The hexahedron eighth point.
    pub h: Point<Real>,
}

impl Hexahedron {
    /// Creates a hexahedron from eight points.
    #[inline]
    pub fn new(
        a: Point<Real>,
        b: Point<Real>,
        c: Point<Real>,
        d: Point<Real>,
        e: Point<Real>,
        f: Point<Real>,
        g: Point<Real>,
        h: Point<Real>,
    ) -> Hexahedron {
        Hexahedron {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }

    /// Creates the reference to a hexahedron from the reference to an array of eight points.
    pub fn from_array(arr: &[Point<Real>; 8]) -> &Hexahedron {
        unsafe { mem::transmute(arr) }
    }

    /// Builds the axis-aligned hexahedron centered at the origin, with the
    /// given half-extents along each coordinate axis.
    pub fn cuboid(half_extents: Vector<Real>) -> Hexahedron {
        let he = half_extents;
        Hexahedron::new(
            Point::new(-he.x, -he.y, he.z),
            Point::new(he.x, -he.y, he.z),
            Point::new(he.x, he.y, he.z),
            Point::new(-he.x, he.y, he.z),
            Point::new(-he.x, -he.y, -he.z),
            Point::new(-he.x, he.y, -he.z),
            Point::new(he.x, he.y, -he.z),
            Point::new(he.x, -he.y, -he.z),
        )
    }

    /// Reference to an array containing the eight vertices of this hexahedron.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>; 8] {
        unsafe { mem::transmute(self) }
    }

    /// Computes the center of this hexahedron.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(self.vertices())
    }

    /// Returns the i-th face of this hexahedron.
    ///
    /// The 0-th face is the quadrilateral ABCD.
    /// The 1-st face is the quadrilateral EFGH.
    /// The 2-nd face is the quadrilateral ABHE.
    /// The 3-rd face is the quadrilateral BCGH.
    /// The 4-th face is the quadrilateral ADFE.
    /// The 5-th face is the quadrilateral CDFG.
    pub(crate) fn face(&self, i: usize) -> Quadrilateral {
        match i {
            0 => Quadrilateral::new(self.a, self.b, self.c, self.d),
            1 => Quadrilateral::new(self.e, self.f, self.g, self.h),
            2 => Quadrilateral::new(self.a, self.b, self.h, self.e),
            3 => Quadrilateral::new(self.b, self.c, self.g, self.h),
            4 => Quadrilateral::new(self.a, self.d, self.f, self.e),
            5 => Quadrilateral::new(self.c, self.d, self.f, self.g),
            _ => panic!("Hexahedron face index out of bounds (must be < 6)."),
        }
    }

    /// Returns a vertex of this hexahedron that does not belong to the i-th
    /// face, to be used as the interior reference for same-side tests.
    ///
    /// Face indexing matches [`Hexahedron::face`].
    pub(crate) fn face_reference_vertex(&self, i: usize) -> Point<Real> {
        match i {
            0 => self.e,
            1 => self.a,
            2 => self.d,
            3 => self.a,
            4 => self.b,
            5 => self.b,
            _ => panic!("Hexahedron face index out of bounds (must be < 6)."),
        }
    }
}

impl From<[Point<Real>; 8]> for Hexahedron {
    fn from(arr: [Point<Real>; 8]) -> Self {
        *Self::from_array(&arr)
    }
}
