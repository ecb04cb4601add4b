use crate::math::{Point, Real};
use na::Point2;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// The absolute tolerance applied by every approximate comparison of this crate.
///
/// All boundary decisions (on-plane tests, polygon membership, intersection
/// point deduplication) funnel through the helpers of this module so that the
/// whole crate shares a single numerical policy.
pub const TOLERANCE: Real = 1.0e-5;

/// Tests whether `x` is zero, within [`TOLERANCE`].
#[inline]
pub fn is_zero(x: Real) -> bool {
    x.abs() <= TOLERANCE
}

/// Tests whether `x` is positive, beyond [`TOLERANCE`].
#[inline]
pub fn is_positive(x: Real) -> bool {
    x > TOLERANCE
}

/// Tests whether `x` is negative, beyond [`TOLERANCE`].
#[inline]
pub fn is_negative(x: Real) -> bool {
    x < -TOLERANCE
}

/// Tests whether `lhs` is smaller than, or approximately equal to, `rhs`.
#[inline]
pub fn is_less_or_equal(lhs: Real, rhs: Real) -> bool {
    lhs <= rhs + TOLERANCE
}

/// Tests whether `lhs` is greater than, or approximately equal to, `rhs`.
#[inline]
pub fn is_greater_or_equal(lhs: Real, rhs: Real) -> bool {
    lhs >= rhs - TOLERANCE
}

/// Tests whether `p1` and `p2` coincide, within [`TOLERANCE`].
#[inline]
pub fn points_eq(p1: &Point<Real>, p2: &Point<Real>) -> bool {
    is_zero(na::distance(p1, p2))
}

#[inline]
pub(crate) fn points_eq2d(p1: &Point2<Real>, p2: &Point2<Real>) -> bool {
    is_zero(na::distance(p1, p2))
}
