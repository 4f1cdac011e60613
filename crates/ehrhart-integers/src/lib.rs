//! # ehrhart-integers
//!
//! Arbitrary precision integer and rational arithmetic for exact
//! polyhedral geometry.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//! - The small algebraic trait seam (`Ring`, `OrderedRing`, `Field`) the
//!   matrix layer is generic over
//!
//! Every coordinate in the geometry crates is one of these two types;
//! floating point is never used, so all combinatorial decisions
//! (incidence, sign classification, determinant tests) are exact.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod integer;
pub mod rational;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
pub use traits::{Field, OrderedRing, Ring};
