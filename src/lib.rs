/*!
riposte
========

**riposte** is a 3-dimensional library of tolerance-aware intersection
predicates between line segments, planes, and convex volumes, written with
the rust programming language.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)] // TODO: deny this
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for mathematical types.
pub mod math {
    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub type Point<N> = na::Point3<N>;

    /// The vector type.
    pub type Vector<N> = na::Vector3<N>;

    /// The unit vector type.
    pub type UnitVector<N> = na::UnitVector3<N>;
}
