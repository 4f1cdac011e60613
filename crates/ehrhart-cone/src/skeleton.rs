//! The Motzkin-Burger double description algorithm.
//!
//! Given a homogeneous inequality system `A x >= 0`, [`skeleton`]
//! produces the generators of the solution cone: a matrix `F` of extreme
//! rays, a basis `E` of the maximal linear subspace contained in the
//! cone, and the relation matrix `Q = F * A^T` recording which rays lie
//! on which facets. Corollary (redundant) inequalities are removed from
//! `A` along the way, so the returned system is irredundant.
//!
//! The algorithm runs in two phases. A Gauss phase diagonalizes
//! `Q = A^T` by unimodular row operations mirrored on `F`, peeling off
//! kernel vectors into `E`. The incremental phase then imposes the
//! remaining inequalities one at a time, splitting the current rays by
//! sign and replacing the negative ones with balanced combinations of
//! adjacent positive/negative pairs.

use ehrhart_integers::Integer;
use ehrhart_linalg::Matrix;
use num_traits::{One, Zero};

/// Strategy for picking the next inequality in the incremental phase.
///
/// The result is the same cone either way; the intermediate ray counts
/// (and so the running time) can differ a lot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PivotRule {
    /// Take inequalities in the order they appear.
    #[default]
    Natural,
    /// Take the inequality minimizing the number of (positive, negative)
    /// ray pairs.
    MinPairs,
    /// Take the inequality maximizing that number.
    MaxPairs,
}

/// The double description of a cone, as returned by [`skeleton`].
#[derive(Clone, Debug)]
pub struct Skeleton {
    /// The irredundant inequality system; a row-subset of the input,
    /// possibly reordered.
    pub inequalities: Matrix<Integer>,
    /// Extreme rays of the cone, one per row. Empty when the cone is a
    /// pure subspace (or just the origin).
    pub generators: Matrix<Integer>,
    /// `generators * inequalities^T`; entry `(i, j)` is zero exactly
    /// when ray `i` lies on facet `j`, and positive otherwise.
    pub relation: Matrix<Integer>,
    /// A basis of the maximal linear subspace inside the cone.
    pub basis: Matrix<Integer>,
}

/// Computes the double description of the cone `{ x : a x >= 0 }`.
///
/// Inequalities are processed in their natural order; see
/// [`skeleton_with_rule`] to choose a different pivot rule.
#[must_use]
pub fn skeleton(a: Matrix<Integer>) -> Skeleton {
    skeleton_with_rule(a, PivotRule::Natural)
}

/// Computes the double description with an explicit pivot rule.
#[must_use]
pub fn skeleton_with_rule(a: Matrix<Integer>, rule: PivotRule) -> Skeleton {
    MotzkinBurger {
        a,
        f: Matrix::empty(0),
        q: Matrix::empty(0),
        e: Matrix::empty(0),
        rule,
        rank: 0,
        current_column: 0,
    }
    .run()
}

struct MotzkinBurger {
    a: Matrix<Integer>,
    f: Matrix<Integer>,
    q: Matrix<Integer>,
    e: Matrix<Integer>,
    rule: PivotRule,
    rank: usize,
    current_column: usize,
}

impl MotzkinBurger {
    fn run(mut self) -> Skeleton {
        self.gauss();

        let n = self.a.ncols();
        self.rank = n - self.e.nrows();
        self.current_column = self.rank;

        while self.current_column < self.a.nrows() {
            let current_ost = self.q.nrows();

            let new_column = self.select_column(current_ost);
            if new_column != self.current_column {
                self.q.swap_cols(self.current_column, new_column);
                self.a.swap_rows(self.current_column, new_column);
            }

            let mut j_plus = Vec::new();
            let mut j_minus = Vec::new();
            for ii in 0..current_ost {
                match self.q[(ii, self.current_column)].signum() {
                    1 => j_plus.push(ii),
                    -1 => j_minus.push(ii),
                    _ => {}
                }
            }

            if j_minus.len() == current_ost {
                // Every ray violates this inequality: only the origin is
                // left of the pointed part.
                self.f = Matrix::empty(n);
                self.q = Matrix::empty(self.a.nrows());
                return self.finish();
            }

            if j_minus.is_empty() {
                // Corollary inequality, already implied.
                self.a.erase_row(self.current_column);
                self.q.erase_col(self.current_column);
                continue;
            }

            let mut common_zero = Vec::new();
            for &j_m in &j_minus {
                for &j_p in &j_plus {
                    common_zero.clear();
                    if !self.balanced(j_p, j_m, current_ost, &mut common_zero) {
                        continue;
                    }

                    let b_minus = self.q[(j_m, self.current_column)].clone();
                    let b_plus = self.q[(j_p, self.current_column)].clone();
                    let delta = b_minus.gcd(&b_plus);
                    let alpha_plus = -(&b_minus / &delta);
                    let alpha_minus = &b_plus / &delta;

                    let new_f = combine(self.f.row(j_p), self.f.row(j_m), &alpha_plus, &alpha_minus);
                    let new_q = combine(self.q.row(j_p), self.q.row(j_m), &alpha_plus, &alpha_minus);
                    self.f.push_row(&new_f);
                    self.q.push_row(&new_q);

                    let fi = self.f.nrows() - 1;
                    let qi = self.q.nrows() - 1;
                    let g = self.f.row_content(fi).gcd(&self.q.row_content(qi));
                    if !g.is_zero() && !g.is_one() {
                        self.f.div_row_exact(fi, &g);
                        self.q.div_row_exact(qi, &g);
                    }
                }
            }

            self.f.erase_rows(&j_minus);
            self.q.erase_rows(&j_minus);
            self.current_column += 1;
        }

        self.finish()
    }

    /// Diagonalizes `q = a^T` by row operations mirrored on `f`, moving
    /// kernel vectors into `e`. Row swaps of `a` keep `q == f * a^T`.
    fn gauss(&mut self) {
        let n = self.a.ncols();
        let m = self.a.nrows();

        self.f = Matrix::identity(n);
        self.e = Matrix::empty(n);
        self.q = self.a.transpose();

        let mut i = 0;
        while i < self.q.nrows() {
            let Some(j) = (i..m).find(|&j| !self.q[(i, j)].is_zero()) else {
                // Zero row: the matching f row is orthogonal to every
                // inequality and joins the subspace basis.
                let row = self.f.take_row(i);
                self.e.push_row(&row);
                self.q.erase_row(i);
                continue;
            };

            if i != j {
                self.q.swap_cols(i, j);
                self.a.swap_rows(i, j);
            }

            if self.q[(i, i)].is_negative() {
                let neg = Integer::new(-1);
                self.q.scale_row(i, &neg);
                self.f.scale_row(i, &neg);
            }

            let b = self.q[(i, i)].clone();
            for ii in 0..self.q.nrows() {
                if ii == i {
                    continue;
                }
                let b_ii = self.q[(ii, i)].clone();
                let alpha = b.gcd(&b_ii);
                let b_i = &b / &alpha;
                let c = -(&b_ii / &alpha);
                self.q.scale_row(ii, &b_i);
                self.q.add_scaled_row(ii, i, &c);
                self.f.scale_row(ii, &b_i);
                self.f.add_scaled_row(ii, i, &c);

                let g = self.q.row_content(ii).gcd(&self.f.row_content(ii));
                if !g.is_zero() && !g.is_one() {
                    self.q.div_row_exact(ii, &g);
                    self.f.div_row_exact(ii, &g);
                }
            }
            i += 1;
        }
    }

    /// True if rays `j_plus` and `j_minus` are adjacent: they share
    /// enough common facets and no third ray lies on all of them.
    fn balanced(
        &self,
        j_plus: usize,
        j_minus: usize,
        current_ost: usize,
        common_zero: &mut Vec<usize>,
    ) -> bool {
        for j in 0..self.current_column {
            if self.q[(j_plus, j)].is_zero() && self.q[(j_minus, j)].is_zero() {
                common_zero.push(j);
            }
        }

        if self.rank < 2 || common_zero.len() + 2 < self.rank {
            return false;
        }

        for row in 0..current_ost {
            if row != j_plus && row != j_minus && self.reroof(row, common_zero) {
                return false;
            }
        }
        true
    }

    /// True if `row` lies on every facet the candidate pair shares.
    fn reroof(&self, row: usize, common_zero: &[usize]) -> bool {
        common_zero.iter().all(|&j| self.q[(row, j)].is_zero())
    }

    fn select_column(&self, current_ost: usize) -> usize {
        let candidates = self.current_column..self.a.nrows();
        match self.rule {
            PivotRule::Natural => self.current_column,
            PivotRule::MinPairs => candidates
                .min_by_key(|&j| self.pair_count(j, current_ost))
                .unwrap_or(self.current_column),
            PivotRule::MaxPairs => candidates
                .max_by_key(|&j| self.pair_count(j, current_ost))
                .unwrap_or(self.current_column),
        }
    }

    /// The number of (positive, negative) ray pairs column `j` induces.
    fn pair_count(&self, j: usize, current_ost: usize) -> usize {
        let mut plus = 0usize;
        let mut minus = 0usize;
        for i in 0..current_ost {
            match self.q[(i, j)].signum() {
                1 => plus += 1,
                -1 => minus += 1,
                _ => {}
            }
        }
        plus * minus
    }

    fn finish(self) -> Skeleton {
        Skeleton {
            inequalities: self.a,
            generators: self.f,
            relation: self.q,
            basis: self.e,
        }
    }
}

fn combine(p: &[Integer], m: &[Integer], ap: &Integer, am: &Integer) -> Vec<Integer> {
    p.iter()
        .zip(m)
        .map(|(x, y)| &(x * ap) + &(y * am))
        .collect()
}
