//! Linear systems over the integers.

use ehrhart_integers::{Integer, Ring};

use crate::{diagonalize, Matrix};

/// The integer solution set of `a * x == b`, parametrized as
/// `x = particular + basis * t` for integer vectors `t`.
#[derive(Clone, Debug)]
pub struct IntegerSolution {
    /// One integer solution.
    pub particular: Vec<Integer>,
    /// Columns span the integer kernel of `a`; shape `ncols x k` where
    /// `k` is the kernel dimension (possibly zero).
    pub basis: Matrix<Integer>,
}

/// Solves `a * x == b` over the integers.
///
/// Returns `None` if the system has no integer solution, either because
/// it is inconsistent over the rationals or because divisibility fails.
///
/// # Panics
///
/// Panics if `b.len() != a.nrows()`.
#[must_use]
pub fn solve_integer(a: &Matrix<Integer>, b: &[Integer]) -> Option<IntegerSolution> {
    assert_eq!(b.len(), a.nrows(), "right-hand side length mismatch");
    let n = a.ncols();
    let res = diagonalize(a);

    // a x = b  <=>  d y = u b  with  x = v y.
    let ub = res.u.mv(b);
    let mut y = vec![Integer::new(0); n];
    for (i, ubi) in ub.iter().enumerate() {
        if i < res.rank {
            if !ubi.is_divisible_by(&res.d[(i, i)]) {
                return None;
            }
            y[i] = ubi / &res.d[(i, i)];
        } else if !ubi.is_zero() {
            return None;
        }
    }

    let particular = res.v.mv(&y);
    let free: Vec<usize> = (res.rank..n).collect();
    let basis = Matrix::from_fn(n, free.len(), |i, j| res.v[(i, free[j])].clone());
    Some(IntegerSolution { particular, basis })
}
