//! Polyhedral cones and the double description method.
//!
//! The centerpiece is the Motzkin-Burger skeleton algorithm, which
//! converts between the two representations of a polyhedral cone: the
//! implicit one (a homogeneous system `A x >= 0`) and the parametric one
//! (extreme rays plus a lineality basis). [`Cone`] wraps both
//! representations behind a lazy state machine so each conversion runs
//! at most once.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cone;
mod polyhedron;
mod skeleton;

pub use cone::{Cone, ConeError};
pub use polyhedron::Polyhedron;
pub use skeleton::{skeleton, skeleton_with_rule, PivotRule, Skeleton};
