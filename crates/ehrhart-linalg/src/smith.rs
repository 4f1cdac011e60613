//! Integer matrix diagonalization by unimodular row and column operations.
//!
//! This is the elimination half of a Smith normal form: the result is
//! diagonal with non-negative entries, but the divisibility chain between
//! successive diagonal entries is not enforced. Solving linear systems in
//! integers only needs the diagonal form, and skipping the chain keeps the
//! transform matrices simple and obviously unimodular.

use ehrhart_integers::{Integer, Ring};

use crate::Matrix;

/// The result of [`diagonalize`]: `d == u * a * v` with `u`, `v`
/// unimodular and `d` diagonal with non-negative entries.
#[derive(Clone, Debug)]
pub struct Diagonalization {
    /// The diagonal matrix, same shape as the input.
    pub d: Matrix<Integer>,
    /// Unimodular row transform, `nrows x nrows`.
    pub u: Matrix<Integer>,
    /// Unimodular column transform, `ncols x ncols`.
    pub v: Matrix<Integer>,
    /// The number of non-zero diagonal entries.
    pub rank: usize,
}

/// Diagonalizes an integer matrix by elementary row and column
/// operations, returning `d = u * a * v`.
#[must_use]
pub fn diagonalize(a: &Matrix<Integer>) -> Diagonalization {
    let m = a.nrows();
    let n = a.ncols();
    let mut d = a.clone();
    let mut u = Matrix::identity(m);
    let mut v = Matrix::identity(n);
    let mut rank = 0;

    for t in 0..m.min(n) {
        // Find a pivot in the remaining submatrix.
        let mut pivot = None;
        'search: for i in t..m {
            for j in t..n {
                if !d[(i, j)].is_zero() {
                    pivot = Some((i, j));
                    break 'search;
                }
            }
        }
        let Some((pi, pj)) = pivot else { break };
        d.swap_rows(t, pi);
        u.swap_rows(t, pi);
        d.swap_cols(t, pj);
        v.swap_cols(t, pj);

        // Euclidean elimination: reduce the pivot column and row until
        // both are clear. A nonzero remainder becomes the new (smaller)
        // pivot, so this terminates.
        loop {
            let mut clean = true;
            for i in t + 1..m {
                if d[(i, t)].is_zero() {
                    continue;
                }
                let q = d[(i, t)].div_floor(&d[(t, t)]);
                if !q.is_zero() {
                    let c = -q;
                    d.add_scaled_row(i, t, &c);
                    u.add_scaled_row(i, t, &c);
                }
                if !d[(i, t)].is_zero() {
                    d.swap_rows(t, i);
                    u.swap_rows(t, i);
                    clean = false;
                }
            }
            for j in t + 1..n {
                if d[(t, j)].is_zero() {
                    continue;
                }
                let q = d[(t, j)].div_floor(&d[(t, t)]);
                if !q.is_zero() {
                    let c = -q;
                    d.add_scaled_col(j, t, &c);
                    v.add_scaled_col(j, t, &c);
                }
                if !d[(t, j)].is_zero() {
                    d.swap_cols(t, j);
                    v.swap_cols(t, j);
                    clean = false;
                }
            }
            if clean {
                break;
            }
        }

        if d[(t, t)].is_negative() {
            let neg = Integer::new(-1);
            d.scale_row(t, &neg);
            u.scale_row(t, &neg);
        }
        rank += 1;
    }

    Diagonalization { d, u, v, rank }
}
