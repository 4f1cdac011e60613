//! Unimodular cones and their short rational generating functions.
//!
//! A [`UniCone`] is one signed summand of the Barvinok decomposition of
//! a vertex support cone. Its generating function is
//!
//! ```text
//!   sign * t^p / prod_i (1 - t^{g_i})
//! ```
//!
//! where `p` is the unique lattice point in the fundamental
//! parallelepiped of the shifted cone and the `g_i` are the generator
//! rows. Projecting onto a generic line `lambda` and substituting
//! `t = 1 + s` turns each cone into a univariate rational function
//! whose `s^d` Taylor coefficient sums to the lattice point count.

use ehrhart_cone::skeleton;
use ehrhart_integers::{Integer, Rational};
use ehrhart_linalg::{dot, Matrix};
use num_traits::{One, Zero};

use crate::BarvinokError;

/// One unimodular cone of the signed decomposition, rooted at a
/// (possibly non-integral) vertex of the polytope.
#[derive(Clone, Debug)]
pub struct UniCone {
    generators: Matrix<Integer>,
    vertex: Vec<Rational>,
    sign: i8,
    lattice_point: Vec<Integer>,
    numerator_degree: Integer,
    denominator: Vec<Integer>,
}

impl UniCone {
    /// Wraps a unimodular generator matrix (one generator per row) with
    /// the vertex it is rooted at and its sign in the decomposition.
    #[must_use]
    pub fn new(generators: Matrix<Integer>, vertex: Vec<Rational>, sign: i8) -> Self {
        Self {
            generators,
            vertex,
            sign,
            lattice_point: Vec::new(),
            numerator_degree: Integer::zero(),
            denominator: Vec::new(),
        }
    }

    /// The generator rows.
    #[must_use]
    pub fn generators(&self) -> &Matrix<Integer> {
        &self.generators
    }

    /// The sign of this cone's contribution, +1 or -1.
    #[must_use]
    pub fn sign(&self) -> i8 {
        self.sign
    }

    /// The lattice point of the fundamental parallelepiped, once
    /// [`Self::compute_lattice_point`] has run.
    #[must_use]
    pub fn lattice_point(&self) -> &[Integer] {
        &self.lattice_point
    }

    /// Replaces the generators by those of the dual cone.
    ///
    /// The decomposition runs in the dual space, where the generator
    /// rows are the facet normals of the support cone. Converting back
    /// is one more double description run; unimodularity is preserved.
    pub fn dualize(&mut self) {
        self.generators = skeleton(self.generators.clone()).generators;
    }

    /// True if `lambda` is not orthogonal to any generator, so the
    /// projection onto the line spanned by `lambda` keeps every
    /// denominator factor nontrivial.
    #[must_use]
    pub fn admits_lambda(&self, lambda: &[Integer]) -> bool {
        (0..self.generators.nrows()).all(|i| !dot(self.generators.row(i), lambda).is_zero())
    }

    /// Finds the unique lattice point of the half-open fundamental
    /// parallelepiped spanned by the generators at the vertex.
    ///
    /// An integral vertex is its own lattice point. Otherwise the
    /// vertex is written in generator coordinates, each coordinate is
    /// rounded up, and the result is mapped back; unimodularity makes
    /// the rounded combination integral.
    pub fn compute_lattice_point(&mut self) -> Result<(), BarvinokError> {
        if self.vertex.iter().all(Rational::is_integer) {
            self.lattice_point = self.vertex.iter().map(Rational::ceil).collect();
            return Ok(());
        }
        let gt = self.generators.transpose();
        let inv = gt.to_rational().inverse().ok_or(BarvinokError::Degenerate)?;
        let coords = inv.mv(&self.vertex);
        let rounded: Vec<Integer> = coords.iter().map(Rational::ceil).collect();
        self.lattice_point = (0..gt.nrows())
            .map(|i| dot(gt.row(i), &rounded))
            .collect();
        Ok(())
    }

    /// Projects the generating function onto the line `lambda` and
    /// substitutes `t = 1 + s`, storing the denominator coefficients
    /// and returning the numerator degree.
    ///
    /// Each generator of negative degree is flipped to positive, which
    /// shifts the numerator; each one of non-negative degree flips the
    /// sign. The denominator is kept as the coefficients of
    /// `prod_i ((1+s)^{c_i} - 1) / s^d`, truncated past degree `d`.
    pub fn project_to_line(&mut self, lambda: &[Integer]) -> Integer {
        let d = self.generators.ncols();
        let mut degree = dot(&self.lattice_point, lambda);
        let mut den: Vec<Integer> = Vec::new();
        for i in 0..self.generators.nrows() {
            let mut c = dot(self.generators.row(i), lambda);
            if c.is_negative() {
                c = -c;
                degree = &degree + &c;
            } else {
                self.sign = -self.sign;
            }
            let factor: Vec<Integer> = (0..=d).map(|j| binomial(&c, j + 1)).collect();
            den = if i == 0 {
                factor
            } else {
                convolve_truncated(&den, &factor, d)
            };
        }
        self.denominator = den;
        self.numerator_degree = degree.clone();
        degree
    }

    /// The `s^d` Taylor coefficient of this cone's projected function,
    /// with the numerator degree shifted down by `min_degree`.
    ///
    /// The shift multiplies every cone by the same `(1+s)^{-min}`,
    /// which leaves the total count unchanged while keeping the
    /// binomial arguments non-negative and small.
    #[must_use]
    pub fn count_contribution(&self, min_degree: &Integer) -> Rational {
        let d = self.denominator.len() - 1;
        let shifted = &self.numerator_degree - min_degree;
        debug_assert!(!shifted.is_negative());
        let sign = Integer::new(i64::from(self.sign));
        let num: Vec<Rational> = (0..=d)
            .map(|i| Rational::from_integer(&sign * &binomial(&shifted, i)))
            .collect();
        let den: Vec<Rational> = self
            .denominator
            .iter()
            .map(|v| Rational::from_integer(v.clone()))
            .collect();
        // Taylor division num / den up to degree d.
        let mut coeffs: Vec<Rational> = Vec::with_capacity(d + 1);
        for k in 0..=d {
            let mut acc = num[k].clone();
            for j in 1..=k {
                acc = acc - &(&den[j] * &coeffs[k - j]);
            }
            coeffs.push(&acc / &den[0]);
        }
        coeffs[d].clone()
    }
}

/// The binomial coefficient `C(n, k)` for non-negative `n`, zero when
/// `k > n`.
pub(crate) fn binomial(n: &Integer, k: usize) -> Integer {
    debug_assert!(!n.is_negative());
    let mut r = Integer::one();
    for i in 1..=k {
        let factor = &(n - &Integer::new(i as i64)) + &Integer::one();
        if factor.is_zero() || factor.is_negative() {
            return Integer::zero();
        }
        r = &(&r * &factor) / &Integer::new(i as i64);
    }
    r
}

fn convolve_truncated(a: &[Integer], b: &[Integer], max_degree: usize) -> Vec<Integer> {
    let mut out = vec![Integer::zero(); max_degree + 1];
    for (i, ai) in a.iter().enumerate().take(max_degree + 1) {
        for (j, bj) in b.iter().enumerate().take(max_degree + 1 - i) {
            out[i + j] = &out[i + j] + &(ai * bj);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_rows(rows: &[&[i64]]) -> Matrix<Integer> {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Integer::new(v)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(&Integer::new(5), 0), Integer::one());
        assert_eq!(binomial(&Integer::new(5), 2), Integer::new(10));
        assert_eq!(binomial(&Integer::new(5), 5), Integer::one());
        assert_eq!(binomial(&Integer::new(5), 6), Integer::zero());
        assert_eq!(binomial(&Integer::new(0), 0), Integer::one());
        assert_eq!(binomial(&Integer::new(0), 1), Integer::zero());
    }

    #[test]
    fn test_lattice_point_integral_vertex() {
        let mut c = UniCone::new(
            int_rows(&[&[1, 0], &[0, 1]]),
            vec![Rational::from(2), Rational::from(3)],
            1,
        );
        c.compute_lattice_point().unwrap();
        assert_eq!(c.lattice_point(), &[Integer::new(2), Integer::new(3)]);
    }

    #[test]
    fn test_lattice_point_fractional_vertex() {
        // Vertex (1/2, 1/2) with the standard quadrant: the first
        // lattice point up the cone is (1, 1).
        let mut c = UniCone::new(
            int_rows(&[&[1, 0], &[0, 1]]),
            vec![Rational::from_i64(1, 2), Rational::from_i64(1, 2)],
            1,
        );
        c.compute_lattice_point().unwrap();
        assert_eq!(c.lattice_point(), &[Integer::one(), Integer::one()]);
    }

    #[test]
    fn test_lattice_point_skew_generators() {
        // Generators (1, 2) and (0, -1) at vertex (1/3, 0): the vertex
        // in generator coordinates is (1/3, 2/3), rounding up gives
        // (1, 1), which maps back to (1, 1).
        let mut c = UniCone::new(
            int_rows(&[&[1, 2], &[0, -1]]),
            vec![Rational::from_i64(1, 3), Rational::from(0)],
            1,
        );
        c.compute_lattice_point().unwrap();
        assert_eq!(c.lattice_point(), &[Integer::new(1), Integer::new(1)]);
    }

    #[test]
    fn test_admits_lambda() {
        let c = UniCone::new(int_rows(&[&[1, 0], &[1, 1]]), vec![], 1);
        assert!(c.admits_lambda(&[Integer::new(1), Integer::new(2)]));
        // Orthogonal to the second generator.
        assert!(!c.admits_lambda(&[Integer::new(1), Integer::new(-1)]));
        // Orthogonal to the first.
        assert!(!c.admits_lambda(&[Integer::new(0), Integer::new(1)]));
    }

    #[test]
    fn test_dualize_quadrant() {
        let mut c = UniCone::new(int_rows(&[&[1, 0], &[0, 1]]), vec![], 1);
        c.dualize();
        let mut rows: Vec<Vec<Integer>> =
            (0..2).map(|i| c.generators().row_vec(i)).collect();
        rows.sort();
        assert_eq!(rows[0], vec![Integer::zero(), Integer::one()]);
        assert_eq!(rows[1], vec![Integer::one(), Integer::zero()]);
    }

    #[test]
    fn test_segment_generating_function() {
        // The segment [0, 2] splits into the cone at 0 with generator
        // +1 and the cone at 2 with generator -1. Projecting with
        // lambda = (1) and summing the s^1 coefficients counts the
        // three lattice points.
        let mut at_zero = UniCone::new(int_rows(&[&[1]]), vec![Rational::from(0)], 1);
        let mut at_two = UniCone::new(int_rows(&[&[-1]]), vec![Rational::from(2)], 1);
        let lambda = vec![Integer::one()];
        at_zero.compute_lattice_point().unwrap();
        at_two.compute_lattice_point().unwrap();
        let d0 = at_zero.project_to_line(&lambda);
        let d2 = at_two.project_to_line(&lambda);
        assert_eq!(d0, Integer::new(0));
        assert_eq!(d2, Integer::new(3));
        let min = d0;
        let total = at_zero.count_contribution(&min) + at_two.count_contribution(&min);
        assert_eq!(total, Rational::from(3));
    }

    #[test]
    fn test_quadrant_corner_count() {
        // The quadrant at the origin: f(t) = 1 / ((1-t1)(1-t2)).
        // Projected with lambda = (1, 2) and evaluated at s = 0 the
        // s^2 coefficient is the single cone's count weight.
        let mut c = UniCone::new(
            int_rows(&[&[1, 0], &[0, 1]]),
            vec![Rational::from(0), Rational::from(0)],
            1,
        );
        c.compute_lattice_point().unwrap();
        let lambda = vec![Integer::new(1), Integer::new(2)];
        assert!(c.admits_lambda(&lambda));
        let deg = c.project_to_line(&lambda);
        assert_eq!(deg, Integer::zero());
        // Both generators have positive degree, so the sign flips
        // twice and the denominator is (C(1,1) + ...)(C(2,1) + ...).
        assert_eq!(c.sign(), 1);
    }
}
