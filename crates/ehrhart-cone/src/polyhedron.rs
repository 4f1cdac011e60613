//! Polyhedra as homogenized cones.

use ehrhart_integers::{Integer, Rational};
use ehrhart_linalg::Matrix;

use crate::{Cone, ConeError};

/// A (possibly unbounded) polyhedron `{ x : b + A x >= 0 }`, stored as
/// its homogenization cone in one dimension up.
///
/// Row `i` of the defining matrix is `(b_i | A_i)`: column 0 holds the
/// free term and the rest the coefficients. A generator of the
/// homogenization cone with positive first coordinate, divided by that
/// coordinate, is a vertex; a generator with zero first coordinate is a
/// recession ray.
#[derive(Clone, Debug)]
pub struct Polyhedron {
    cone: Cone,
}

impl Polyhedron {
    /// Builds the polyhedron from rows `(b_i | A_i)` meaning
    /// `b_i + A_i x >= 0`.
    ///
    /// The non-negativity of the homogenizing coordinate is added as an
    /// extra inequality, so unbounded directions come out as recession
    /// rays rather than spurious vertices at infinity.
    #[must_use]
    pub fn from_inequalities(a: Matrix<Integer>) -> Self {
        let dim = a.ncols();
        let mut a = a;
        let mut x0 = vec![Integer::new(0); dim];
        if let Some(first) = x0.first_mut() {
            *first = Integer::new(1);
        }
        a.push_row(&x0);
        Self {
            cone: Cone::from_inequalities(a),
        }
    }

    /// The dimension of the space the polyhedron lives in.
    #[must_use]
    pub fn space_dim(&self) -> usize {
        self.cone.space_dim().saturating_sub(1)
    }

    /// The homogenization cone.
    #[must_use]
    pub fn cone(&self) -> &Cone {
        &self.cone
    }

    /// Mutable access to the homogenization cone.
    pub fn cone_mut(&mut self) -> &mut Cone {
        &mut self.cone
    }

    /// The vertices, each of length `space_dim()`.
    pub fn vertices(&mut self) -> Vec<Vec<Rational>> {
        let g = self.cone.generatrix();
        let mut out = Vec::new();
        for i in 0..g.nrows() {
            let lead = &g[(i, 0)];
            if lead.is_positive() {
                let denom = Rational::from_integer(lead.clone());
                out.push(
                    (1..g.ncols())
                        .map(|j| Rational::from_integer(g[(i, j)].clone()) / denom.clone())
                        .collect(),
                );
            }
        }
        out
    }

    /// Directions in which the polyhedron is unbounded, one per row.
    ///
    /// Lineality directions appear as two opposite rows.
    pub fn recession_rays(&mut self) -> Matrix<Integer> {
        let g = self.cone.generatrix();
        let mut out = Matrix::empty(self.space_dim());
        for i in 0..g.nrows() {
            if g[(i, 0)].signum() == 0 {
                out.push_row(&g.row(i)[1..]);
            }
        }
        out
    }

    /// Intersects with another polyhedron of the same ambient space.
    ///
    /// The duplicated homogenizing inequality is removed as a corollary
    /// on the next conversion.
    pub fn intersection(&mut self, other: Polyhedron) -> Result<(), ConeError> {
        self.cone.intersection(other.cone)
    }

    /// True if the polyhedron has no points.
    ///
    /// The homogenizing inequality `x0 >= 0` is part of the system, so
    /// the polyhedron is nonempty exactly when some generator of the
    /// cone (with the lineality folded in) has a positive first
    /// coordinate, i.e. when there is at least one vertex.
    pub fn is_empty(&mut self) -> bool {
        self.vertices().is_empty()
    }

    /// True if the polyhedron is nonempty and has no recession ray.
    pub fn is_bounded(&mut self) -> bool {
        !self.is_empty() && self.recession_rays().nrows() == 0
    }
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
    fn test_unit_square() {
        // 0 <= x <= 1, 0 <= y <= 1.
        let a = int_matrix(&[
            &[0, 1, 0],
            &[0, 0, 1],
            &[1, -1, 0],
            &[1, 0, -1],
        ]);
        let mut p = Polyhedron::from_inequalities(a);
        assert_eq!(p.space_dim(), 2);
        let mut vs = p.vertices();
        vs.sort();
        assert_eq!(vs.len(), 4);
        assert_eq!(vs[0], vec![Rational::from(0), Rational::from(0)]);
        assert_eq!(vs[3], vec![Rational::from(1), Rational::from(1)]);
        assert!(p.is_bounded());
    }

    #[test]
    fn test_half_open_strip() {
        // x >= 0: unbounded in x and in both y directions.
        let a = int_matrix(&[&[0, 1, 0]]);
        let mut p = Polyhedron::from_inequalities(a);
        assert!(!p.is_empty());
        assert!(!p.is_bounded());
        assert!(p.recession_rays().nrows() > 0);
    }

    #[test]
    fn test_empty() {
        // x >= 1 and x <= 0.
        let a = int_matrix(&[&[-1, 1], &[0, -1]]);
        let mut p = Polyhedron::from_inequalities(a);
        assert!(p.is_empty());
        assert!(p.vertices().is_empty());
    }

    #[test]
    fn test_intersection_of_strips() {
        // The vertical strip 0 <= x <= 1 meets the horizontal strip
        // 0 <= y <= 1 in the unit square.
        let v = Polyhedron::from_inequalities(int_matrix(&[&[0, 1, 0], &[1, -1, 0]]));
        let h = Polyhedron::from_inequalities(int_matrix(&[&[0, 0, 1], &[1, 0, -1]]));
        let mut p = v;
        p.intersection(h).unwrap();
        let mut vs = p.vertices();
        vs.sort();
        assert_eq!(vs.len(), 4);
        assert!(p.is_bounded());
    }

    #[test]
    fn test_fractional_vertex() {
        // 2x <= 1, x >= 0 in one dimension: vertices 0 and 1/2.
        let a = int_matrix(&[&[1, -2], &[0, 1]]);
        let mut p = Polyhedron::from_inequalities(a);
        let mut vs = p.vertices();
        vs.sort();
        assert_eq!(vs, vec![
            vec![Rational::from(0)],
            vec![Rational::from_i64(1, 2)],
        ]);
    }
}
