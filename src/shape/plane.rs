//! Definition of the plane shape.

use crate::math::{Point, Real, Vector};
use na::Unit;

/// An infinite plane described by the equation `normal · x + d = 0`.
///
/// The normal is not required to be a unit vector: the *sign* of
/// [`Plane::signed_distance`] is always meaningful, while its magnitude is
/// only proportional to the true euclidean distance. Use [`Plane::normalized`]
/// when actual distances are needed.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's normal, i.e., the coefficients `(a, b, c)` of its equation.
    pub normal: Vector<Real>,
    /// The constant term `d` of the plane's equation.
    pub d: Real,
}

impl Plane {
    /// Builds a new plane from its normal and constant term.
    #[inline]
    pub fn new(normal: Vector<Real>, d: Real) -> Plane {
        Plane { normal, d }
    }

    /// Builds the plane supporting the triangle `(a, b, c)`.
    ///
    /// The normal is `(b - a) × (c - a)`, so it points toward the side from
    /// which the triangle winds counter-clockwise. The plane is degenerate
    /// (its normal is almost zero) if the three points are almost collinear.
    #[inline]
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Plane {
        let normal = (b - a).cross(&(c - a));
        let d = -normal.dot(&a.coords);
        Plane { normal, d }
    }

    /// Builds the plane containing `point` with the given normal.
    #[inline]
    pub fn from_point_and_normal(point: &Point<Real>, normal: Vector<Real>) -> Plane {
        let d = -normal.dot(&point.coords);
        Plane { normal, d }
    }

    /// The signed distance from `pt` to this plane, scaled by the norm of the
    /// plane's normal.
    ///
    /// Positive on the side the normal points toward, negative on the other
    /// side, zero on the plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.d
    }

    /// This plane, rescaled so that its normal is a unit vector.
    ///
    /// Returns `None` if the normal is almost zero.
    pub fn normalized(&self) -> Option<Plane> {
        Unit::try_new_and_get(self.normal, crate::math::DEFAULT_EPSILON)
            .map(|(normal, norm)| Plane::new(normal.into_inner(), self.d / norm))
    }

    /// Projects `pt` onto this plane.
    ///
    /// The plane must be normalized for the projection to be exact; with a
    /// non-unit normal the correction is off by the squared norm of the
    /// normal.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normal * self.signed_distance(pt)
    }
}
