//! Polyhedral cones with lazy dual representations.

use std::cmp::Ordering;

use ehrhart_integers::{Integer, Rational};
use ehrhart_linalg::Matrix;
use thiserror::Error;

use crate::skeleton::skeleton;

const IMPLICIT_VALID: u8 = 0x01;
const IMPLICIT_NORMAL: u8 = 0x02;
const PARAMETRIC_VALID: u8 = 0x04;
const PARAMETRIC_NORMAL: u8 = 0x08;

const IMPLICIT: u8 = IMPLICIT_VALID | IMPLICIT_NORMAL;
const PARAMETRIC: u8 = PARAMETRIC_VALID | PARAMETRIC_NORMAL;
const ALL: u8 = IMPLICIT | PARAMETRIC;

/// Errors from cone operations whose preconditions are not met.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConeError {
    /// The cone is not a linear subspace, so it has no equation-only or
    /// basis-only representation.
    #[error("cone is not a subspace")]
    NotSubspace,
    /// Two cones from spaces of different dimension were combined.
    #[error("space dimension mismatch: {left} != {right}")]
    DimensionMismatch {
        /// Dimension of the left-hand cone's ambient space.
        left: usize,
        /// Dimension of the right-hand cone's ambient space.
        right: usize,
    },
}

/// A polyhedral cone, kept in both of its representations.
///
/// A cone is the set `{ x : A x >= 0, E x = 0 }` (the implicit side) and
/// equally the set of non-negative combinations of generator rows plus
/// arbitrary combinations of basis rows (the parametric side). Either
/// side alone determines the cone; the other is rebuilt on demand with
/// the skeleton algorithm and cached.
///
/// Each side is tracked through three states: absent, valid (describes
/// the cone, possibly with redundant rows), and normal (valid and
/// irredundant, with the maximal subspace split off into the
/// equation/basis matrix). Queries take `&mut self` because they may
/// trigger a conversion; the cone they describe never changes.
#[derive(Clone, Debug)]
pub struct Cone {
    inequation: Matrix<Integer>,
    equation: Matrix<Integer>,
    generatrix: Matrix<Integer>,
    basis: Matrix<Integer>,
    state: u8,
}

impl Default for Cone {
    /// The single-point cone in 0-dimensional space.
    fn default() -> Self {
        Self {
            inequation: Matrix::empty(0),
            equation: Matrix::empty(0),
            generatrix: Matrix::empty(0),
            basis: Matrix::empty(0),
            state: ALL,
        }
    }
}

impl Cone {
    /// The cone containing only the origin of a `dim`-dimensional space.
    #[must_use]
    pub fn null(dim: usize) -> Self {
        let mut state = PARAMETRIC;
        if dim == 0 {
            state |= IMPLICIT;
        }
        Self {
            inequation: Matrix::empty(dim),
            equation: Matrix::empty(dim),
            generatrix: Matrix::empty(dim),
            basis: Matrix::empty(dim),
            state,
        }
    }

    /// The whole `dim`-dimensional space as a cone.
    #[must_use]
    pub fn space(dim: usize) -> Self {
        let mut state = IMPLICIT;
        if dim == 0 {
            state |= PARAMETRIC;
        }
        Self {
            inequation: Matrix::empty(dim),
            equation: Matrix::empty(dim),
            generatrix: Matrix::empty(dim),
            basis: Matrix::empty(dim),
            state,
        }
    }

    /// The solution cone of the system `a x >= 0`.
    #[must_use]
    pub fn from_inequalities(a: Matrix<Integer>) -> Self {
        let dim = a.ncols();
        Self {
            inequation: a,
            equation: Matrix::empty(dim),
            generatrix: Matrix::empty(dim),
            basis: Matrix::empty(dim),
            state: IMPLICIT_VALID,
        }
    }

    /// The subspace `e x = 0` as a cone.
    #[must_use]
    pub fn from_equations(e: Matrix<Integer>) -> Self {
        let dim = e.ncols();
        Self {
            inequation: Matrix::empty(dim),
            equation: e,
            generatrix: Matrix::empty(dim),
            basis: Matrix::empty(dim),
            state: IMPLICIT_VALID,
        }
    }

    /// The conic hull of the rows of `g`.
    #[must_use]
    pub fn from_generators(g: Matrix<Integer>) -> Self {
        let dim = g.ncols();
        Self {
            inequation: Matrix::empty(dim),
            equation: Matrix::empty(dim),
            generatrix: g,
            basis: Matrix::empty(dim),
            state: PARAMETRIC_VALID,
        }
    }

    /// The subspace spanned by the rows of `b` as a cone.
    #[must_use]
    pub fn from_basis(b: Matrix<Integer>) -> Self {
        let dim = b.ncols();
        Self {
            inequation: Matrix::empty(dim),
            equation: Matrix::empty(dim),
            generatrix: Matrix::empty(dim),
            basis: b,
            state: PARAMETRIC_VALID,
        }
    }

    /// The dual cone, obtained by swapping the roles of the two
    /// representations: inequalities become generators and equations
    /// become the basis, and vice versa.
    ///
    /// Whatever sides are valid (or normal) in `self` carry over to the
    /// opposite sides of the dual, so no conversion is triggered.
    #[must_use]
    pub fn dual(&self) -> Self {
        let mut out = Self {
            inequation: Matrix::empty(self.space_dim()),
            equation: Matrix::empty(self.space_dim()),
            generatrix: Matrix::empty(self.space_dim()),
            basis: Matrix::empty(self.space_dim()),
            state: 0,
        };
        if self.has(IMPLICIT_VALID) {
            out.generatrix = self.inequation.clone();
            out.basis = self.equation.clone();
            out.state |= if self.has(IMPLICIT) {
                PARAMETRIC
            } else {
                PARAMETRIC_VALID
            };
        }
        if self.has(PARAMETRIC_VALID) {
            out.inequation = self.generatrix.clone();
            out.equation = self.basis.clone();
            out.state |= if self.has(PARAMETRIC) {
                IMPLICIT
            } else {
                IMPLICIT_VALID
            };
        }
        out
    }

    fn has(&self, flags: u8) -> bool {
        self.state & flags == flags
    }

    /// True if the implicit side currently describes the cone.
    #[must_use]
    pub fn is_implicit_valid(&self) -> bool {
        self.has(IMPLICIT_VALID)
    }

    /// True if the parametric side currently describes the cone.
    #[must_use]
    pub fn is_parametric_valid(&self) -> bool {
        self.has(PARAMETRIC_VALID)
    }

    /// True if the implicit side is valid and irredundant.
    #[must_use]
    pub fn is_implicit_normal(&self) -> bool {
        self.has(IMPLICIT)
    }

    /// True if the parametric side is valid and irredundant.
    #[must_use]
    pub fn is_parametric_normal(&self) -> bool {
        self.has(PARAMETRIC)
    }

    /// Rebuilds the implicit side from the parametric one if needed.
    pub fn validate_implicit(&mut self) {
        if !self.has(IMPLICIT_VALID) {
            self.force_validate_implicit();
        }
    }

    /// Rebuilds the parametric side from the implicit one if needed.
    pub fn validate_parametric(&mut self) {
        if !self.has(PARAMETRIC_VALID) {
            self.force_validate_parametric();
        }
    }

    /// Makes both sides valid.
    pub fn validate_all(&mut self) {
        self.validate_implicit();
        self.validate_parametric();
    }

    /// Brings the implicit side to normal form.
    pub fn normalize_implicit(&mut self) {
        if !self.has(IMPLICIT) {
            self.validate_parametric();
            self.force_validate_implicit();
        }
    }

    /// Brings the parametric side to normal form.
    pub fn normalize_parametric(&mut self) {
        if !self.has(PARAMETRIC) {
            self.validate_implicit();
            self.force_validate_parametric();
        }
    }

    /// Brings both sides to normal form.
    pub fn normalize_all(&mut self) {
        if self.has(ALL) {
            return;
        }
        if self.has(IMPLICIT_VALID) {
            self.force_validate_parametric();
            self.force_validate_implicit();
        } else {
            self.force_validate_implicit();
            self.force_validate_parametric();
        }
    }

    /// Runs the skeleton on the parametric side. The resulting implicit
    /// side is both valid and normal.
    fn force_validate_implicit(&mut self) {
        debug_assert!(self.has(PARAMETRIC_VALID));
        let mut a = self.generatrix.clone();
        extend_rep(&mut a, &self.basis);
        let sk = skeleton(a);
        self.inequation = sk.generators;
        self.equation = sk.basis;
        self.state |= IMPLICIT;
    }

    /// Runs the skeleton on the implicit side. The resulting parametric
    /// side is both valid and normal.
    fn force_validate_parametric(&mut self) {
        debug_assert!(self.has(IMPLICIT_VALID));
        let mut a = self.inequation.clone();
        extend_rep(&mut a, &self.equation);
        let sk = skeleton(a);
        self.generatrix = sk.generators;
        self.basis = sk.basis;
        self.state |= PARAMETRIC;
    }

    /// The dimension of the ambient space.
    #[must_use]
    pub fn space_dim(&self) -> usize {
        if self.has(IMPLICIT_VALID) {
            self.inequation.ncols()
        } else {
            self.generatrix.ncols()
        }
    }

    /// The dimension of the cone itself.
    pub fn dim(&mut self) -> usize {
        self.normalize_implicit();
        self.equation.ncols() - self.equation.nrows()
    }

    /// True if the cone contains no line.
    pub fn is_pointed(&mut self) -> bool {
        if self.has(PARAMETRIC) {
            self.basis.is_empty()
        } else if self.has(IMPLICIT) && self.inequation.is_empty() {
            self.equation.is_square()
        } else if self.has(PARAMETRIC_VALID) && !self.basis.is_zero_matrix() {
            false
        } else {
            self.normalize_parametric();
            self.basis.is_empty()
        }
    }

    /// True if the cone is a linear subspace (possibly the origin or the
    /// whole space).
    pub fn is_subspace(&mut self) -> bool {
        if self.has(IMPLICIT) {
            self.inequation.is_empty()
        } else if self.has(PARAMETRIC) {
            self.generatrix.is_empty()
        } else if self.has(IMPLICIT_VALID) && self.inequation.is_zero_matrix() {
            true
        } else if self.has(PARAMETRIC_VALID) && self.generatrix.is_zero_matrix() {
            true
        } else {
            self.normalize_implicit();
            self.inequation.is_empty()
        }
    }

    /// True if the cone is the whole ambient space.
    pub fn is_space(&mut self) -> bool {
        if self.has(IMPLICIT_VALID) {
            self.inequation.is_zero_matrix() && self.equation.is_zero_matrix()
        } else if self.has(PARAMETRIC) {
            self.basis.is_square()
        } else {
            self.normalize_implicit();
            self.inequation.is_empty() && self.equation.is_empty()
        }
    }

    /// True if the cone is just the origin.
    pub fn is_null(&mut self) -> bool {
        if self.has(PARAMETRIC_VALID) {
            self.generatrix.is_zero_matrix() && self.basis.is_zero_matrix()
        } else if self.has(IMPLICIT) {
            self.equation.is_square()
        } else {
            self.normalize_parametric();
            self.generatrix.is_empty() && self.basis.is_empty()
        }
    }

    /// True if the cone has full dimension.
    pub fn is_bodily(&mut self) -> bool {
        self.dim() == self.space_dim()
    }

    /// True if the minimal generator set is square and non-singular,
    /// i.e. the cone is spanned by `dim` linearly independent rays.
    pub fn is_simplicial(&mut self) -> bool {
        self.normalize_implicit();
        self.inequation.nrows() == self.equation.ncols() - self.equation.nrows()
    }

    /// An inequality system defining the cone on its own: the equations
    /// are folded in as pairs of opposite inequalities.
    pub fn inequation(&mut self) -> Matrix<Integer> {
        self.validate_implicit();
        if self.equation.is_zero_matrix() {
            self.inequation.clone()
        } else {
            let mut res = self.inequation.clone();
            extend_rep(&mut res, &self.equation);
            res
        }
    }

    /// A generator system spanning the cone on its own: the basis is
    /// folded in as pairs of opposite rays.
    pub fn generatrix(&mut self) -> Matrix<Integer> {
        self.validate_parametric();
        if self.basis.is_zero_matrix() {
            self.generatrix.clone()
        } else {
            let mut res = self.generatrix.clone();
            extend_rep(&mut res, &self.basis);
            res
        }
    }

    /// The equation system of the cone, if it is a subspace.
    ///
    /// # Errors
    ///
    /// Returns [`ConeError::NotSubspace`] otherwise.
    pub fn equation(&mut self) -> Result<&Matrix<Integer>, ConeError> {
        self.normalize_implicit();
        if self.is_subspace() {
            Ok(&self.equation)
        } else {
            Err(ConeError::NotSubspace)
        }
    }

    /// The basis of the cone, if it is a subspace.
    ///
    /// # Errors
    ///
    /// Returns [`ConeError::NotSubspace`] otherwise.
    pub fn basis(&mut self) -> Result<&Matrix<Integer>, ConeError> {
        self.normalize_parametric();
        if self.is_subspace() {
            Ok(&self.basis)
        } else {
            Err(ConeError::NotSubspace)
        }
    }

    /// Equations of the minimal subspace containing the cone.
    pub fn min_ambient_equation(&mut self) -> &Matrix<Integer> {
        self.normalize_implicit();
        &self.equation
    }

    /// A basis of the maximal subspace contained in the cone.
    pub fn max_embedded_basis(&mut self) -> &Matrix<Integer> {
        self.normalize_parametric();
        &self.basis
    }

    /// A minimal inequality-only system for the cone.
    ///
    /// Each equation row is kept as an inequality, and a single extra
    /// row (the negated sum of the equation rows) closes them, which is
    /// one row cheaper than negating each equation.
    pub fn min_inequation(&mut self) -> Matrix<Integer> {
        self.normalize_implicit();
        if self.equation.is_empty() {
            self.inequation.clone()
        } else {
            let mut res = self.inequation.clone();
            res.append_rows(&self.equation);
            res.push_row(&negated_row_sum(&self.equation));
            res
        }
    }

    /// A minimal generator-only system for the cone.
    pub fn min_generatrix(&mut self) -> Matrix<Integer> {
        self.normalize_parametric();
        if self.basis.is_empty() {
            self.generatrix.clone()
        } else {
            let mut res = self.generatrix.clone();
            res.append_rows(&self.basis);
            res.push_row(&negated_row_sum(&self.basis));
            res
        }
    }

    /// The ray/facet relation matrix `G * A^T`.
    ///
    /// Entry `(i, j)` is zero exactly when generator `i` lies on the
    /// hyperplane of inequality `j`. Normalize the cone first if minimal
    /// rays and facets are wanted.
    pub fn relation(&mut self) -> Matrix<Integer> {
        self.validate_all();
        self.generatrix.mm(&self.inequation.transpose())
    }

    /// True if the ray `x` meets the relative interior of the cone.
    pub fn strict_inside(&mut self, x: &[Integer]) -> bool {
        self.normalize_implicit();
        self.inequation.mv(x).iter().all(Integer::is_positive)
            && self.equation.mv(x).iter().all(|v| v.signum() == 0)
    }

    /// True if the ray `x` lies in the (closed) cone.
    pub fn unstrict_inside(&mut self, x: &[Integer]) -> bool {
        self.normalize_implicit();
        self.inequation.mv(x).iter().all(|v| !v.is_negative())
            && self.equation.mv(x).iter().all(|v| v.signum() == 0)
    }

    /// Direct read access to the inequality matrix.
    #[must_use]
    pub fn inequation_matrix(&self) -> &Matrix<Integer> {
        &self.inequation
    }

    /// Direct read access to the equation matrix.
    #[must_use]
    pub fn equation_matrix(&self) -> &Matrix<Integer> {
        &self.equation
    }

    /// Direct read access to the generator matrix.
    #[must_use]
    pub fn generatrix_matrix(&self) -> &Matrix<Integer> {
        &self.generatrix
    }

    /// Direct read access to the basis matrix.
    #[must_use]
    pub fn basis_matrix(&self) -> &Matrix<Integer> {
        &self.basis
    }

    /// Intersects this cone with `x` in place.
    ///
    /// # Errors
    ///
    /// Returns [`ConeError::DimensionMismatch`] if the ambient spaces
    /// differ.
    pub fn intersection(&mut self, mut x: Cone) -> Result<(), ConeError> {
        if self.space_dim() != x.space_dim() {
            return Err(ConeError::DimensionMismatch {
                left: self.space_dim(),
                right: x.space_dim(),
            });
        }
        if !x.is_space() {
            self.validate_implicit();
            x.validate_implicit();
            self.state &= !(PARAMETRIC | IMPLICIT_NORMAL);
            self.inequation.append_rows(&x.inequation);
            self.equation.append_rows(&x.equation);
        }
        Ok(())
    }

    /// Replaces this cone with the conic hull of its union with `x`.
    ///
    /// # Errors
    ///
    /// Returns [`ConeError::DimensionMismatch`] if the ambient spaces
    /// differ.
    pub fn conic_union(&mut self, mut x: Cone) -> Result<(), ConeError> {
        if self.space_dim() != x.space_dim() {
            return Err(ConeError::DimensionMismatch {
                left: self.space_dim(),
                right: x.space_dim(),
            });
        }
        if !x.is_null() {
            self.validate_parametric();
            x.validate_parametric();
            self.state &= !(IMPLICIT | PARAMETRIC_NORMAL);
            self.generatrix.append_rows(&x.generatrix);
            self.basis.append_rows(&x.basis);
        }
        Ok(())
    }

    /// Total order on cones as point sets.
    ///
    /// Cones in the same ambient space compare equal exactly when they
    /// contain the same points; the rest of the order is an arbitrary
    /// but fixed tie-break on the normalized representations.
    pub fn compare(&mut self, other: &mut Cone) -> Ordering {
        let c = self.space_dim().cmp(&other.space_dim());
        if c != Ordering::Equal {
            return c;
        }
        let c = self.dim().cmp(&other.dim());
        if c != Ordering::Equal {
            return c;
        }
        if self.dim() == 0 {
            return Ordering::Equal;
        }

        self.normalize_implicit();
        other.normalize_implicit();

        let c = self
            .inequation
            .nrows()
            .cmp(&other.inequation.nrows())
            .reverse();
        if c != Ordering::Equal {
            return c;
        }

        let c = sorted_primitive_rows(&self.inequation).cmp(&sorted_primitive_rows(&other.inequation));
        if c != Ordering::Equal {
            return c;
        }

        let c = self
            .equation
            .nrows()
            .cmp(&other.equation.nrows())
            .reverse();
        if c != Ordering::Equal {
            return c;
        }
        if self.equation.nrows() == 0 {
            return Ordering::Equal;
        }

        cmp_rational_matrices(
            &self.equation.to_rational().rref(),
            &other.equation.to_rational().rref(),
        )
    }
}

/// Appends `x` and `-x` below `res`, turning equality rows into
/// inequality pairs (or basis rows into opposite ray pairs).
fn extend_rep(res: &mut Matrix<Integer>, x: &Matrix<Integer>) {
    res.append_rows(x);
    res.append_rows(&-x);
}

fn negated_row_sum(m: &Matrix<Integer>) -> Vec<Integer> {
    let mut sum = m.row_vec(0);
    for i in 1..m.nrows() {
        for (s, v) in sum.iter_mut().zip(m.row(i)) {
            *s = &*s + v;
        }
    }
    for s in &mut sum {
        *s = -&*s;
    }
    sum
}

/// Each row divided by its content, rows sorted; a canonical form for
/// row-set comparison.
fn sorted_primitive_rows(m: &Matrix<Integer>) -> Vec<Vec<Integer>> {
    let mut norm = m.clone();
    let mut rows = Vec::with_capacity(norm.nrows());
    for i in 0..norm.nrows() {
        norm.normalize_row(i);
        rows.push(norm.row_vec(i));
    }
    rows.sort();
    rows
}

fn cmp_rational_matrices(a: &Matrix<Rational>, b: &Matrix<Rational>) -> Ordering {
    let c = (a.nrows(), a.ncols()).cmp(&(b.nrows(), b.ncols()));
    if c != Ordering::Equal {
        return c;
    }
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let c = a[(i, j)].cmp(&b[(i, j)]);
            if c != Ordering::Equal {
                return c;
            }
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_matrix(rows: &[&[i64]]) -> Matrix<Integer> {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Integer::new(v)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_quadrant_queries() {
        let mut c = Cone::from_inequalities(int_matrix(&[&[1, 0], &[0, 1]]));
        assert_eq!(c.space_dim(), 2);
        assert_eq!(c.dim(), 2);
        assert!(c.is_pointed());
        assert!(c.is_bodily());
        assert!(c.is_simplicial());
        assert!(!c.is_subspace());
        assert!(!c.is_null());
        assert!(!c.is_space());
    }

    #[test]
    fn test_quadrant_membership() {
        let mut c = Cone::from_inequalities(int_matrix(&[&[1, 0], &[0, 1]]));
        let interior = [Integer::new(1), Integer::new(1)];
        let boundary = [Integer::new(1), Integer::new(0)];
        let outside = [Integer::new(-1), Integer::new(1)];
        assert!(c.strict_inside(&interior));
        // A point on a facet is in the closed cone but not strictly
        // inside it.
        assert!(!c.strict_inside(&boundary));
        assert!(c.unstrict_inside(&boundary));
        assert!(!c.unstrict_inside(&outside));
    }

    #[test]
    fn test_half_plane_not_pointed() {
        let mut c = Cone::from_inequalities(int_matrix(&[&[1, -1]]));
        assert_eq!(c.dim(), 2);
        assert!(!c.is_pointed());
        assert_eq!(c.max_embedded_basis(), &int_matrix(&[&[1, 1]]));
    }

    #[test]
    fn test_null_and_space() {
        let mut n = Cone::null(3);
        assert!(n.is_null());
        assert!(n.is_pointed());
        assert!(n.is_subspace());
        assert!(!n.is_space());
        assert_eq!(n.dim(), 0);

        let mut s = Cone::space(3);
        assert!(s.is_space());
        assert!(s.is_subspace());
        assert!(!s.is_null());
        assert_eq!(s.dim(), 3);
    }

    #[test]
    fn test_subspace_round_trip() {
        // The line x = y, z = 0 given by equations.
        let mut c = Cone::from_equations(int_matrix(&[&[1, -1, 0], &[0, 0, 1]]));
        assert!(c.is_subspace());
        assert_eq!(c.dim(), 1);
        let basis = c.basis().unwrap();
        assert_eq!(basis.nrows(), 1);
        let b = basis.row_vec(0);
        assert_eq!(b[0], b[1]);
        assert!(b[2].signum() == 0);
    }

    #[test]
    fn test_not_subspace_error() {
        let mut c = Cone::from_inequalities(int_matrix(&[&[1, 0], &[0, 1]]));
        assert_eq!(c.basis().unwrap_err(), ConeError::NotSubspace);
        assert_eq!(c.equation().unwrap_err(), ConeError::NotSubspace);
    }

    #[test]
    fn test_generators_round_trip() {
        // Start from rays, convert to inequalities and back.
        let g = int_matrix(&[&[1, 0], &[1, 2]]);
        let mut c = Cone::from_generators(g);
        c.normalize_all();
        for ray in [[1i64, 0], [1, 2]] {
            let ray: Vec<Integer> = ray.iter().map(|&v| Integer::new(v)).collect();
            assert!(c.unstrict_inside(&ray));
        }
        assert!(c.strict_inside(&[Integer::new(1), Integer::new(1)]));
        assert!(!c.unstrict_inside(&[Integer::new(-1), Integer::new(0)]));
    }

    #[test]
    fn test_dual_of_dual() {
        let mut c = Cone::from_inequalities(int_matrix(&[&[1, 0], &[1, 2]]));
        let mut dd = c.dual().dual();
        assert_eq!(c.compare(&mut dd), Ordering::Equal);
    }

    #[test]
    fn test_dual_swaps_representations() {
        let octant = int_matrix(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]);
        let c = Cone::from_inequalities(octant.clone());
        let mut d = c.dual();
        // The dual of the first octant is itself.
        let mut expect = Cone::from_generators(octant);
        assert_eq!(d.compare(&mut expect), Ordering::Equal);
    }

    #[test]
    fn test_intersection() {
        let mut c = Cone::from_inequalities(int_matrix(&[&[1, 0]]));
        c.intersection(Cone::from_inequalities(int_matrix(&[&[0, 1]])))
            .unwrap();
        assert!(c.is_pointed());
        assert_eq!(c.dim(), 2);
        let mut expect = Cone::from_inequalities(int_matrix(&[&[1, 0], &[0, 1]]));
        assert_eq!(c.compare(&mut expect), Ordering::Equal);
    }

    #[test]
    fn test_conic_union() {
        let mut c = Cone::from_generators(int_matrix(&[&[1, 0]]));
        c.conic_union(Cone::from_generators(int_matrix(&[&[0, 1]])))
            .unwrap();
        let mut expect = Cone::from_inequalities(int_matrix(&[&[1, 0], &[0, 1]]));
        assert_eq!(c.compare(&mut expect), Ordering::Equal);
    }

    #[test]
    fn test_dimension_mismatch() {
        let mut c = Cone::space(2);
        let err = c.intersection(Cone::space(3)).unwrap_err();
        assert_eq!(
            err,
            ConeError::DimensionMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn test_min_inequation_closes_equations() {
        // The line x = y as inequalities only.
        let mut c = Cone::from_equations(int_matrix(&[&[1, -1]]));
        let mi = c.min_inequation();
        let mut direct = Cone::from_inequalities(mi);
        assert_eq!(direct.dim(), 1);
        assert!(direct.is_subspace());
    }

    #[test]
    fn test_de_morgan_duality() {
        // dual(a union b) == dual(a) intersect dual(b).
        let a = Cone::from_inequalities(int_matrix(&[&[1, 0], &[1, 2]]));
        let b = Cone::from_inequalities(int_matrix(&[&[0, 1], &[2, 1]]));
        let mut lhs = a.dual();
        lhs.intersection(b.dual()).unwrap();
        let mut union = a.clone();
        union.conic_union(b).unwrap();
        let mut rhs = union.dual();
        assert_eq!(lhs.compare(&mut rhs), Ordering::Equal);
    }

    #[test]
    fn test_compare_distinguishes() {
        let mut a = Cone::from_inequalities(int_matrix(&[&[1, 0], &[0, 1]]));
        let mut b = Cone::from_inequalities(int_matrix(&[&[1, 0], &[1, 2]]));
        assert_ne!(a.compare(&mut b), Ordering::Equal);
        // Scaling an inequality doesn't change the cone.
        let mut scaled = Cone::from_inequalities(int_matrix(&[&[3, 0], &[0, 7]]));
        assert_eq!(a.compare(&mut scaled), Ordering::Equal);
    }
}
