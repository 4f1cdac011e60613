//! Lenstra-Lenstra-Lovasz lattice basis reduction.
//!
//! Both variants treat the *columns* of the input matrix as the basis
//! and reduce it in place, returning the unimodular transform `H` with
//! `B_reduced = B_original * H`. [`lll_reduce`] works over the
//! rationals with an explicit Gram-Schmidt tableau; [`lll_reduce_int`]
//! is the all-integer version that keeps the subdeterminants `d[k]` and
//! the scaled Gram-Schmidt coefficients `lambda(k, j)` instead, so
//! every division along the way is exact.

use ehrhart_integers::{Integer, Rational};
use ehrhart_linalg::{dot, Matrix};
use num_traits::{One, Zero};

/// Reduces the columns of `b` in place with the classic rational LLL
/// (delta = 3/4). Returns the transform `H`, or `None` if the columns
/// are linearly dependent (`b` is left partially modified in that
/// case).
pub fn lll_reduce(b: &mut Matrix<Rational>) -> Option<Matrix<Rational>> {
    let n = b.ncols();
    let mut h = Matrix::identity(n);
    if n < 2 {
        if n == 1 && squared_norm(&b.col_vec(0)).is_zero() {
            return None;
        }
        return Some(h);
    }

    // Bst holds the orthogonalized columns; Mu(k, j) for j < k are the
    // Gram-Schmidt coefficients and Mu(j, j) = |Bst_j|^2.
    let mut bst = Matrix::zeros(b.nrows(), n);
    let mut mu = Matrix::zeros(n, n);
    bst.assign_col(0, &b.col_vec(0));
    mu[(0, 0)] = squared_norm(&bst.col_vec(0));

    let half = Rational::from_i64(1, 2);
    let delta = Rational::from_i64(3, 4);

    let mut k = 1usize;
    let mut k_max = 0usize;
    while k < n {
        if k > k_max {
            k_max = k;
            orthogonalize(b, &mut bst, &mut mu, k);
            if mu[(k, k)].is_zero() {
                return None;
            }
        }
        if mu[(k, k - 1)].abs() > half {
            size_reduce(b, &mut h, &mut mu, k, k - 1);
        }
        let lovasz = (&delta - &(&mu[(k, k - 1)] * &mu[(k, k - 1)])) * &mu[(k - 1, k - 1)];
        if mu[(k, k)] < lovasz {
            interchange(b, &mut bst, &mut h, &mut mu, k, k_max);
            k = k.max(2) - 1;
        } else {
            for l in (0..k - 1).rev() {
                if mu[(k, l)].abs() > half {
                    size_reduce(b, &mut h, &mut mu, k, l);
                }
            }
            k += 1;
        }
    }
    Some(h)
}

fn squared_norm(v: &[Rational]) -> Rational {
    dot(v, v)
}

/// Extends the Gram-Schmidt tableau to column `k`.
fn orthogonalize(
    b: &Matrix<Rational>,
    bst: &mut Matrix<Rational>,
    mu: &mut Matrix<Rational>,
    k: usize,
) {
    let bk = b.col_vec(k);
    let mut w = bk.clone();
    for j in 0..k {
        mu[(k, j)] = &dot(&bk, &bst.col_vec(j)) / &mu[(j, j)];
        let bj = bst.col_vec(j);
        for (wi, bji) in w.iter_mut().zip(&bj) {
            *wi = &*wi - &(&mu[(k, j)] * bji);
        }
    }
    mu[(k, k)] = squared_norm(&w);
    bst.assign_col(k, &w);
}

/// Makes `|Mu(k, l)| <= 1/2` by subtracting an integer multiple of
/// column `l` from column `k`.
fn size_reduce(
    b: &mut Matrix<Rational>,
    h: &mut Matrix<Rational>,
    mu: &mut Matrix<Rational>,
    k: usize,
    l: usize,
) {
    let half = Rational::from_i64(1, 2);
    let q = Rational::from_integer((&mu[(k, l)] + &half).floor());
    let neg_q = -&q;
    b.add_scaled_col(k, l, &neg_q);
    h.add_scaled_col(k, l, &neg_q);
    mu[(k, l)] = &mu[(k, l)] - &q;
    for i in 0..l {
        mu[(k, i)] = &mu[(k, i)] - &(&q * &mu[(l, i)]);
    }
}

/// Swaps columns `k-1` and `k` and patches the Gram-Schmidt tableau.
fn interchange(
    b: &mut Matrix<Rational>,
    bst: &mut Matrix<Rational>,
    h: &mut Matrix<Rational>,
    mu: &mut Matrix<Rational>,
    k: usize,
    k_max: usize,
) {
    b.swap_cols(k, k - 1);
    h.swap_cols(k, k - 1);
    for j in 0..k - 1 {
        let t = mu[(k, j)].clone();
        mu[(k, j)] = mu[(k - 1, j)].clone();
        mu[(k - 1, j)] = t;
    }
    let m = mu[(k, k - 1)].clone();
    let b2 = &mu[(k, k)] + &(&(&m * &m) * &mu[(k - 1, k - 1)]);
    mu[(k, k - 1)] = &(&m * &mu[(k - 1, k - 1)]) / &b2;

    let bvec = bst.col_vec(k - 1);
    let bk = bst.col_vec(k);
    let new_prev: Vec<Rational> = bk
        .iter()
        .zip(&bvec)
        .map(|(x, y)| x + &(&m * y))
        .collect();
    bst.assign_col(k - 1, &new_prev);
    let coeff = &mu[(k, k)] / &b2;
    let new_k: Vec<Rational> = bk
        .iter()
        .zip(&bvec)
        .map(|(x, y)| &-&(x * &mu[(k, k - 1)]) + &(y * &coeff))
        .collect();
    bst.assign_col(k, &new_k);

    mu[(k, k)] = &(&mu[(k - 1, k - 1)] * &mu[(k, k)]) / &b2;
    mu[(k - 1, k - 1)] = b2;
    for i in k + 1..=k_max {
        let t = mu[(i, k)].clone();
        mu[(i, k)] = &mu[(i, k - 1)] - &(&m * &t);
        mu[(i, k - 1)] = &t + &(&mu[(k, k - 1)] * &mu[(i, k)]);
    }
}

/// Reduces the columns of `b` in place with the all-integer LLL.
/// Returns the transform `H`, or `None` if the columns are linearly
/// dependent.
pub fn lll_reduce_int(b: &mut Matrix<Integer>) -> Option<Matrix<Integer>> {
    let n = b.ncols();
    let mut h = Matrix::identity(n);
    if n < 2 {
        if n == 1 && dot(&b.col_vec(0), &b.col_vec(0)).is_zero() {
            return None;
        }
        return Some(h);
    }

    // d[k] is the Gram determinant of the first k columns; lambda(k, j)
    // is d[j+1] times the Gram-Schmidt coefficient mu(k, j).
    let mut d = vec![Integer::zero(); n + 1];
    d[0] = Integer::one();
    d[1] = dot(&b.col_vec(0), &b.col_vec(0));
    let mut lambda = Matrix::zeros(n, n);

    let two = Integer::new(2);
    let three = Integer::new(3);
    let four = Integer::new(4);

    let mut k = 1usize;
    let mut k_max = 0usize;
    while k < n {
        if k > k_max {
            k_max = k;
            orthogonalize_int(b, &mut lambda, &mut d, k);
            if d[k + 1].is_zero() {
                return None;
            }
        }
        if &two * &lambda[(k, k - 1)].abs() > d[k] {
            size_reduce_int(b, &mut h, &mut lambda, &d, k, k - 1);
        }
        let lhs = &(&four * &d[k + 1]) * &d[k - 1];
        let rhs =
            &(&three * &(&d[k] * &d[k])) - &(&four * &(&lambda[(k, k - 1)] * &lambda[(k, k - 1)]));
        if lhs < rhs {
            interchange_int(b, &mut h, &mut lambda, &mut d, k, k_max);
            k = k.max(2) - 1;
        } else {
            for l in (0..k - 1).rev() {
                if &two * &lambda[(k, l)].abs() > d[l + 1] {
                    size_reduce_int(b, &mut h, &mut lambda, &d, k, l);
                }
            }
            k += 1;
        }
    }
    Some(h)
}

fn orthogonalize_int(
    b: &Matrix<Integer>,
    lambda: &mut Matrix<Integer>,
    d: &mut [Integer],
    k: usize,
) {
    let bk = b.col_vec(k);
    for j in 0..=k {
        let mut u = dot(&bk, &b.col_vec(j));
        for i in 0..j {
            u = &(&(&d[i + 1] * &u) - &(&lambda[(k, i)] * &lambda[(j, i)])) / &d[i];
        }
        if j < k {
            lambda[(k, j)] = u;
        } else {
            d[k + 1] = u;
        }
    }
}

fn size_reduce_int(
    b: &mut Matrix<Integer>,
    h: &mut Matrix<Integer>,
    lambda: &mut Matrix<Integer>,
    d: &[Integer],
    k: usize,
    l: usize,
) {
    let q = lambda[(k, l)].prquot(&d[l + 1]);
    let neg_q = -&q;
    b.add_scaled_col(k, l, &neg_q);
    h.add_scaled_col(k, l, &neg_q);
    lambda[(k, l)] = &lambda[(k, l)] - &(&q * &d[l + 1]);
    for i in 0..l {
        lambda[(k, i)] = &lambda[(k, i)] - &(&q * &lambda[(l, i)]);
    }
}

fn interchange_int(
    b: &mut Matrix<Integer>,
    h: &mut Matrix<Integer>,
    lambda: &mut Matrix<Integer>,
    d: &mut [Integer],
    k: usize,
    k_max: usize,
) {
    b.swap_cols(k, k - 1);
    h.swap_cols(k, k - 1);
    for j in 0..k - 1 {
        let t = lambda[(k, j)].clone();
        lambda[(k, j)] = lambda[(k - 1, j)].clone();
        lambda[(k - 1, j)] = t;
    }
    let lam = lambda[(k, k - 1)].clone();
    let bb = &(&(&d[k - 1] * &d[k + 1]) + &(&lam * &lam)) / &d[k];
    for i in k + 1..=k_max {
        let t = lambda[(i, k)].clone();
        lambda[(i, k)] = &(&(&d[k + 1] * &lambda[(i, k - 1)]) - &(&lam * &t)) / &d[k];
        lambda[(i, k - 1)] = &(&(&bb * &t) + &(&lam * &lambda[(i, k)])) / &d[k + 1];
    }
    d[k] = bb;
}
