//! Dense exact linear algebra.
//!
//! Matrices here are small and dense (inequality systems, generator
//! matrices, lattice bases), so a row-major `Vec` with a rich editing
//! surface beats anything clever. Everything is exact: elimination over
//! the rationals, fraction-free determinants over the integers, and a
//! Smith-style diagonalization for solving linear systems in integers.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod diophantine;
mod matrix;
mod smith;

pub use diophantine::{solve_integer, IntegerSolution};
pub use matrix::{dot, Matrix};
pub use smith::diagonalize;
