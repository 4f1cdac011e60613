//! # Ehrhart
//!
//! Exact polyhedral computation in Rust: the Motzkin-Burger double
//! description method, lazy cone representations, LLL lattice basis
//! reduction, and Barvinok's polynomial-time lattice point counting.
//!
//! All arithmetic is arbitrary precision and exact; no floating point
//! is used anywhere in the pipeline.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ehrhart::prelude::*;
//!
//! // x, y >= 0 and x + y <= 4, as rows (b | c) meaning b + c x >= 0.
//! let triangle = Matrix::from_rows(vec![
//!     vec![Integer::new(0), Integer::new(1), Integer::new(0)],
//!     vec![Integer::new(0), Integer::new(0), Integer::new(1)],
//!     vec![Integer::new(4), Integer::new(-1), Integer::new(-1)],
//! ]);
//! assert_eq!(
//!     count_lattice_points(&triangle)?,
//!     LatticeCount::Finite(Integer::new(15)),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use ehrhart_barvinok as barvinok;
pub use ehrhart_cone as cone;
pub use ehrhart_integers as integers;
pub use ehrhart_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ehrhart_barvinok::{
        count_lattice_points, lll_reduce, lll_reduce_int, BarvinokError, LatticeCount, Polytope,
    };
    pub use ehrhart_cone::{skeleton, Cone, Polyhedron, Skeleton};
    pub use ehrhart_integers::{Integer, Rational, Ring};
    pub use ehrhart_linalg::{solve_integer, Matrix};
}
