//! Barvinok's signed decomposition into unimodular cones.
//!
//! A [`SimplicialCone`] has exactly `d` generators in dimension `d`;
//! its index is the determinant of the generator matrix. The
//! decomposition repeatedly picks a short vector `z` of the dual
//! lattice and replaces the cone by the `d` cones obtained by swapping
//! one generator for `z`, each carrying a sign. Every step divides the
//! largest index by at least its `1/d`-th root, so the recursion depth
//! is polynomial for fixed `d`.

use ehrhart_integers::{Integer, Rational};
use ehrhart_linalg::Matrix;
use num_traits::{One, Zero};

use crate::lll::lll_reduce_int;
use crate::unicone::UniCone;
use crate::BarvinokError;

/// A simplicial cone with a sign, one node of the decomposition tree.
#[derive(Clone, Debug)]
pub struct SimplicialCone {
    generators: Matrix<Integer>,
    vertex: Vec<Rational>,
    sign: i8,
    index: Integer,
}

impl SimplicialCone {
    /// Wraps a square generator matrix (one generator per row) rooted
    /// at `vertex`.
    ///
    /// Fails when the matrix is not square or its determinant is zero:
    /// such a cone is not simplicial and cannot be decomposed.
    pub fn new(
        generators: Matrix<Integer>,
        vertex: Vec<Rational>,
        sign: i8,
    ) -> Result<Self, BarvinokError> {
        if !generators.is_square() {
            return Err(BarvinokError::NotSimplicial);
        }
        let index = generators.det();
        if index.is_zero() {
            return Err(BarvinokError::NotSimplicial);
        }
        Ok(Self {
            generators,
            vertex,
            sign,
            index,
        })
    }

    /// The generator rows.
    #[must_use]
    pub fn generators(&self) -> &Matrix<Integer> {
        &self.generators
    }

    /// The determinant of the generator matrix.
    #[must_use]
    pub fn index(&self) -> &Integer {
        &self.index
    }

    /// Decomposes this cone into unimodular cones, appending them to
    /// `out`.
    ///
    /// The short vector is taken from an LLL reduced basis of the
    /// scaled dual lattice; when that vector misses the Minkowski
    /// bound, an exact enumeration over small combinations of the
    /// reduced basis finds one that meets it, so every non-unimodular
    /// cone strictly reduces.
    pub fn decompose(self, out: &mut Vec<UniCone>) -> Result<(), BarvinokError> {
        let mut work = vec![self];
        while let Some(k) = work.pop() {
            if k.index.abs().is_one() {
                out.push(UniCone::new(k.generators, k.vertex, k.sign));
                continue;
            }

            // Columns of `dual` span |det| times the dual lattice; the
            // positive scaling keeps the signs of the true dual
            // coordinates readable off the reduced vectors.
            let mut dual = k.generators.transpose().adjugate();
            if k.index.is_negative() {
                dual = dual.map(|v| -v);
            }
            let h = lll_reduce_int(&mut dual).ok_or(BarvinokError::IndexReductionFailed)?;
            let rows = dual.transpose();

            let min_index = shortest_row(&rows);
            let short = rows.row_vec(min_index);
            let mut z: Vec<Integer> = h.col_vec(min_index);
            if short.iter().all(|v| !v.is_positive()) {
                z = z.into_iter().map(|v| -v).collect();
            }

            let mut dets = replacement_dets(&k.generators, &z);
            if dets
                .iter()
                .any(|dj| !dj.is_zero() && dj.abs() >= k.index.abs())
            {
                // LLL overshot the Minkowski bound; enumerate instead.
                z = enumerate_short_vector(&rows, &h, &k.index);
                dets = replacement_dets(&k.generators, &z);
                if dets
                    .iter()
                    .any(|dj| !dj.is_zero() && dj.abs() >= k.index.abs())
                {
                    return Err(BarvinokError::IndexReductionFailed);
                }
            }

            for (j, dj) in dets.into_iter().enumerate() {
                if dj.is_zero() {
                    continue;
                }
                let mut m = k.generators.clone();
                m.row_mut(j).clone_from_slice(&z);
                let sign = if (&dj * &k.index).is_positive() {
                    k.sign
                } else {
                    -k.sign
                };
                if dj.abs().is_one() {
                    out.push(UniCone::new(m, k.vertex.clone(), sign));
                } else {
                    work.push(Self {
                        generators: m,
                        vertex: k.vertex.clone(),
                        sign,
                        index: dj,
                    });
                }
            }
        }
        Ok(())
    }
}

/// The row with the smallest maximum absolute entry.
fn shortest_row(rows: &Matrix<Integer>) -> usize {
    let mut best = 0;
    let mut best_norm: Option<Integer> = None;
    for i in 0..rows.nrows() {
        let norm = rows
            .row(i)
            .iter()
            .map(Integer::abs)
            .max()
            .unwrap_or_else(Integer::zero);
        if best_norm.as_ref().map_or(true, |b| &norm < b) {
            best = i;
            best_norm = Some(norm);
        }
    }
    best
}

/// The determinants of `generators` with row `j` replaced by `z`, for
/// every `j`.
fn replacement_dets(generators: &Matrix<Integer>, z: &[Integer]) -> Vec<Integer> {
    (0..generators.nrows())
        .map(|j| {
            let mut m = generators.clone();
            m.row_mut(j).clone_from_slice(z);
            m.det()
        })
        .collect()
}

/// Searches integer combinations of the reduced dual basis rows for a
/// vector meeting the Minkowski bound, in shells of growing sup-norm.
///
/// The rows are the true dual basis scaled by `|index|`, so the bound
/// `|w_j| <= |index|^{-1/d}` becomes the exact integer test
/// `|s_j|^d <= |index|^{d-1}`. Minkowski's theorem guarantees a
/// combination passes it, so the search terminates.
fn enumerate_short_vector(
    rows: &Matrix<Integer>,
    h: &Matrix<Integer>,
    index: &Integer,
) -> Vec<Integer> {
    let d = rows.nrows();
    let bound = index.abs().pow(d as u32 - 1);
    let mut radius: i64 = 1;
    loop {
        let mut c = vec![-radius; d];
        'shell: loop {
            // Only the surface of the box is new at this radius.
            if c.iter().any(|&v| v.abs() == radius) {
                let s: Vec<Integer> = (0..rows.ncols())
                    .map(|j| {
                        (0..d).fold(Integer::zero(), |acc, i| {
                            acc + &(&Integer::new(c[i]) * &rows[(i, j)])
                        })
                    })
                    .collect();
                if s.iter().all(|sj| sj.abs().pow(d as u32) <= bound) {
                    let mut z: Vec<Integer> = (0..h.nrows())
                        .map(|i| {
                            (0..d).fold(Integer::zero(), |acc, j| {
                                acc + &(&Integer::new(c[j]) * &h[(i, j)])
                            })
                        })
                        .collect();
                    if s.iter().filter(|sj| sj.is_negative()).count() == d {
                        z = z.into_iter().map(|v| -v).collect();
                    }
                    return z;
                }
            }
            let mut i = 0;
            while i < d && c[i] == radius {
                c[i] = -radius;
                i += 1;
            }
            if i == d {
                break 'shell;
            }
            c[i] += 1;
        }
        radius += 1;
    }
}
