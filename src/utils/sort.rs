use crate::math::Real;

/// Sorts a triple of values in increasing order.
#[inline]
pub fn sort3(a: Real, b: Real, c: Real) -> (Real, Real, Real) {
    let (a, b) = if b < a { (b, a) } else { (a, b) };
    let (b, c) = if c < b { (c, b) } else { (b, c) };
    let (a, b) = if b < a { (b, a) } else { (a, b) };

    (a, b, c)
}
