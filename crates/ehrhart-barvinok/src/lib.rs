//! Lattice point counting with Barvinok's algorithm.
//!
//! The pipeline runs entirely in exact arithmetic: the homogenization
//! cone of the input system is skeletonized, each vertex support cone
//! is triangulated and signed-decomposed into unimodular cones via LLL
//! short vectors, and the short rational generating functions of the
//! unimodular cones are specialized along a generic direction and
//! summed. [`count_lattice_points`] is the entry point; the lower
//! layers are exported for direct use and for testing.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod count;
mod decompose;
mod lambda;
mod lll;
mod unicone;

pub use count::{count_lattice_points, count_lattice_points_seeded, LatticeCount, Polytope};
pub use decompose::SimplicialCone;
pub use lambda::{powers_lambda, random_lambda};
pub use lll::{lll_reduce, lll_reduce_int};
pub use unicone::UniCone;

use thiserror::Error;

/// Errors from the counting pipeline.
///
/// These are contract violations rather than answers: an empty or
/// unbounded polytope is a regular [`LatticeCount`] value, not an
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BarvinokError {
    /// A triangulation cell does not have exactly `dim` independent
    /// generators.
    #[error("cone is not simplicial")]
    NotSimplicial,
    /// A generator matrix that should be invertible is singular.
    #[error("degenerate generator matrix")]
    Degenerate,
    /// No short vector reducing the cone index was found; with exact
    /// arithmetic this indicates an internal invariant was broken.
    #[error("index reduction found no short vector")]
    IndexReductionFailed,
    /// The generating functions summed to a non-integer, which a
    /// correct decomposition never produces.
    #[error("total count is not an integer")]
    NonIntegralCount,
}
