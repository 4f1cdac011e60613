//! The lattice point counting driver.
//!
//! A polytope is given as rows `(b_i | c_i)` meaning `b_i + c_i x >= 0`.
//! The homogenization cone of the system is skeletonized once; the
//! generator leads classify the polytope (empty, unbounded, a point, or
//! bodily), each vertex contributes its support cone, the support cones
//! are triangulated and signed-decomposed into unimodular cones, and the
//! `s^d` Taylor coefficients of their projected generating functions sum
//! to the count.

use ehrhart_cone::skeleton;
use ehrhart_integers::{Integer, Rational};
use ehrhart_linalg::{dot, solve_integer, Matrix};
use num_traits::{One, Zero};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::decompose::SimplicialCone;
use crate::lambda::random_lambda;
use crate::unicone::UniCone;
use crate::BarvinokError;

/// The number of lattice points of a polyhedron.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LatticeCount {
    /// A finite count; zero for an empty polytope.
    Finite(Integer),
    /// The polyhedron is unbounded, so no finite count exists to
    /// report: the count is infinite whenever the polyhedron contains
    /// a lattice point at all.
    Unbounded,
}

/// A polyhedron `{ x : b + A x >= 0 }` held as its inequality system,
/// ready for lattice point counting.
///
/// Row `i` of the system is `(b_i | A_i)`. The name is aspirational:
/// the system may well describe an unbounded or empty set, and
/// [`Polytope::count`] reports that rather than failing.
#[derive(Clone, Debug)]
pub struct Polytope {
    system: Matrix<Integer>,
}

impl Polytope {
    /// Wraps an inequality system given as rows `(b_i | A_i)`.
    #[must_use]
    pub fn new(system: Matrix<Integer>) -> Self {
        Self { system }
    }

    /// The defining inequality system.
    #[must_use]
    pub fn system(&self) -> &Matrix<Integer> {
        &self.system
    }

    /// Counts the lattice points.
    pub fn count(&self) -> Result<LatticeCount, BarvinokError> {
        count_lattice_points(&self.system)
    }

    /// Counts the lattice points with an explicit seed for the
    /// projection direction search. Any seed yields the same count.
    pub fn count_seeded(&self, seed: u64) -> Result<LatticeCount, BarvinokError> {
        count_lattice_points_seeded(&self.system, seed)
    }
}

/// Counts the lattice points of `{ x : b + c x >= 0 }` given as rows
/// `(b_i | c_i)`.
pub fn count_lattice_points(system: &Matrix<Integer>) -> Result<LatticeCount, BarvinokError> {
    count_lattice_points_seeded(system, 1)
}

/// Same as [`count_lattice_points`] with an explicit seed for the
/// projection direction search. Any seed yields the same count.
pub fn count_lattice_points_seeded(
    system: &Matrix<Integer>,
    seed: u64,
) -> Result<LatticeCount, BarvinokError> {
    let skel = skeleton(system.clone());
    let mut a = skel.inequalities;
    let mut f = skel.generators;
    let mut q = skel.relation;
    let mut e = skel.basis;

    // Inequalities tight on every generator pin the polytope to an
    // affine sublattice. Substituting its integer parametrization
    // drops those dimensions; repeat until nothing is forced.
    loop {
        let tight: Vec<usize> = (0..q.ncols()).filter(|&j| q.col_is_zero(j)).collect();
        if tight.is_empty() {
            break;
        }
        let mut stripped = a.clone();
        let col0 = stripped.take_col(0);
        let rhs: Vec<Integer> = col0.iter().map(|v| -v).collect();
        let sub = stripped.select_rows(&tight);
        let sub_rhs: Vec<Integer> = tight.iter().map(|&i| rhs[i].clone()).collect();
        let Some(sol) = solve_integer(&sub, &sub_rhs) else {
            // The sublattice misses the integers entirely.
            return Ok(LatticeCount::Finite(Integer::zero()));
        };
        let k = sol.basis.ncols();
        let shifted = stripped.mv(&sol.particular);
        let constants: Vec<Integer> = shifted.iter().zip(&rhs).map(|(x, y)| x - y).collect();
        if k == 0 {
            // A unique integral candidate; count it if it satisfies
            // the remaining inequalities.
            let feasible = constants.iter().all(|v| !v.is_negative());
            let count = if feasible { Integer::one() } else { Integer::zero() };
            return Ok(LatticeCount::Finite(count));
        }
        if k == stripped.ncols() {
            // The tight rows were trivial; nothing to substitute.
            break;
        }
        let mut reduced = stripped.mm(&sol.basis);
        reduced.insert_col(0, &constants);
        let skel = skeleton(reduced);
        a = skel.inequalities;
        f = skel.generators;
        q = skel.relation;
        e = skel.basis;
    }

    // A lineality direction means the polytope, if nonempty, contains
    // a full lattice line.
    if e.nrows() > 0 {
        let nonempty = (0..f.nrows()).any(|i| f[(i, 0)].signum() != 0)
            || (0..e.nrows()).any(|i| e[(i, 0)].signum() != 0);
        return Ok(if nonempty {
            LatticeCount::Unbounded
        } else {
            LatticeCount::Finite(Integer::zero())
        });
    }

    let mut has_vertex = false;
    let mut has_ray = false;
    for i in 0..f.nrows() {
        match f[(i, 0)].signum() {
            1 => has_vertex = true,
            0 => has_ray = true,
            _ => {}
        }
    }
    if !has_vertex {
        return Ok(LatticeCount::Finite(Integer::zero()));
    }
    if has_ray {
        return Ok(LatticeCount::Unbounded);
    }
    if f.nrows() == 1 {
        // A single vertex; its generator row is primitive, so the lead
        // is one exactly when the vertex is integral.
        let count = if f[(0, 0)].is_one() {
            Integer::one()
        } else {
            Integer::zero()
        };
        return Ok(LatticeCount::Finite(count));
    }

    let n = a.ncols();
    let dim = n - 1;
    let mut simplicial = Vec::new();
    for i in 0..f.nrows() {
        let lead = f[(i, 0)].clone();
        let vertex: Vec<Rational> = (1..n)
            .map(|j| Rational::new(f[(i, j)].clone(), lead.clone()))
            .collect();
        let mut support = Matrix::empty(dim);
        for j in 0..q.ncols() {
            if q[(i, j)].is_zero() {
                support.push_row(&a.row(j)[1..]);
            }
        }
        triangulate(&support, &vertex, &mut simplicial)?;
    }

    let mut unicones: Vec<UniCone> = Vec::new();
    for sc in simplicial {
        sc.decompose(&mut unicones)?;
    }
    if unicones.is_empty() {
        return Ok(LatticeCount::Finite(Integer::zero()));
    }
    for uc in &mut unicones {
        uc.dualize();
        uc.compute_lattice_point()?;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let lambda = random_lambda(dim, &unicones, &mut rng);

    let mut min_degree: Option<Integer> = None;
    for uc in &mut unicones {
        let degree = uc.project_to_line(&lambda);
        min_degree = Some(match min_degree {
            Some(m) if m <= degree => m,
            _ => degree,
        });
    }
    let min_degree = match min_degree {
        Some(m) => m,
        None => Integer::zero(),
    };

    let mut total = Rational::zero();
    for uc in &unicones {
        total = total + &uc.count_contribution(&min_degree);
    }
    let count = total.to_integer().ok_or(BarvinokError::NonIntegralCount)?;
    Ok(LatticeCount::Finite(count))
}

/// Triangulates a support cone into simplicial cones rooted at
/// `vertex`, appending them to `out`.
///
/// A cone with exactly `dim` generators is already simplicial. The
/// general case lifts each generator onto the paraboloid by its squared
/// norm and reads the triangulation off the lower facets of the lifted
/// cone; cells left degenerate by cocircular generators are split by
/// pulling.
fn triangulate(
    support: &Matrix<Integer>,
    vertex: &[Rational],
    out: &mut Vec<SimplicialCone>,
) -> Result<(), BarvinokError> {
    let d = support.ncols();
    if support.nrows() == d {
        out.push(SimplicialCone::new(support.clone(), vertex.to_vec(), 1)?);
        return Ok(());
    }
    let norms: Vec<Integer> = (0..support.nrows())
        .map(|i| dot(support.row(i), support.row(i)))
        .collect();
    let mut lifted = support.clone();
    lifted.insert_col(d, &norms);
    if lifted.rank() <= d {
        // Every generator lies on one sphere, so the lift is flat and
        // has no lower hull to read a triangulation off. Fan directly.
        for s in fan_simplices(support, d) {
            out.push(SimplicialCone::new(s, vertex.to_vec(), 1)?);
        }
        return Ok(());
    }
    let skel = skeleton(lifted);
    for i in 0..skel.generators.nrows() {
        // Facet normals with negative lift coordinate bound the lower
        // hull; their tight generators form one cell each.
        if !skel.generators[(i, d)].is_negative() {
            continue;
        }
        let mut cell = Matrix::empty(d);
        for j in 0..skel.relation.ncols() {
            if skel.relation[(i, j)].is_zero() {
                cell.push_row(&skel.inequalities.row(j)[..d]);
            }
        }
        if cell.nrows() == d {
            out.push(SimplicialCone::new(cell, vertex.to_vec(), 1)?);
        } else {
            for s in fan_simplices(&cell, d) {
                out.push(SimplicialCone::new(s, vertex.to_vec(), 1)?);
            }
        }
    }
    Ok(())
}

/// Splits a cone of rank `rank` with more than `rank` generators into
/// simplicial pieces by pulling its first extreme generator: the cone
/// is the union, over the facets avoiding that generator, of the joins
/// of the generator with each facet, and the facets recurse one rank
/// down.
fn fan_simplices(gens: &Matrix<Integer>, rank: usize) -> Vec<Matrix<Integer>> {
    let skel = skeleton(gens.clone());
    let kept = skel.inequalities;
    if kept.nrows() == rank {
        return vec![kept];
    }
    let mut out = Vec::new();
    for i in 0..skel.generators.nrows() {
        if skel.relation[(i, 0)].is_zero() {
            // This facet contains the apex.
            continue;
        }
        let members: Vec<usize> = (0..skel.relation.ncols())
            .filter(|&j| skel.relation[(i, j)].is_zero())
            .collect();
        let facet = kept.select_rows(&members);
        for mut s in fan_simplices(&facet, rank - 1) {
            s.insert_row(0, kept.row(0));
            out.push(s);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lambda::powers_lambda;

    fn system(rows: &[&[i64]]) -> Matrix<Integer> {
        Matrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Integer::new(v)).collect())
                .collect(),
        )
    }

    fn finite(n: i64) -> LatticeCount {
        LatticeCount::Finite(Integer::new(n))
    }

    #[test]
    fn test_segment() {
        // 0 <= x <= 5.
        let a = system(&[&[0, 1], &[5, -1]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(6));
    }

    #[test]
    fn test_segment_fractional_ends() {
        // 1/2 <= x <= 3/2 contains only x = 1.
        let a = system(&[&[-1, 2], &[3, -2]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(1));
    }

    #[test]
    fn test_empty_segment() {
        // x >= 1 and x <= 0.
        let a = system(&[&[-1, 1], &[0, -1]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(0));
    }

    #[test]
    fn test_single_point_by_equality() {
        // x = 5 as a pair of inequalities; the tight system reduction
        // resolves it without ever building a support cone.
        let a = system(&[&[-5, 1], &[5, -1]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(1));
    }

    #[test]
    fn test_equality_without_integer_point() {
        // 2x = 1.
        let a = system(&[&[-1, 2], &[1, -2]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(0));
    }

    #[test]
    fn test_unbounded_ray() {
        // x >= 0.
        let a = system(&[&[0, 1]]);
        assert_eq!(count_lattice_points(&a).unwrap(), LatticeCount::Unbounded);
    }

    #[test]
    fn test_unbounded_strip() {
        // 0 <= x <= 1 in two variables, y free.
        let a = system(&[&[0, 1, 0], &[1, -1, 0]]);
        assert_eq!(count_lattice_points(&a).unwrap(), LatticeCount::Unbounded);
    }

    #[test]
    fn test_unit_square() {
        let a = system(&[&[0, 1, 0], &[0, 0, 1], &[1, -1, 0], &[1, 0, -1]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(4));
    }

    #[test]
    fn test_square_side_two() {
        let a = system(&[&[0, 1, 0], &[0, 0, 1], &[2, -1, 0], &[2, 0, -1]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(9));
    }

    #[test]
    fn test_triangle() {
        // x, y >= 0, x + y <= 4: C(6, 2) = 15 points.
        let a = system(&[&[0, 1, 0], &[0, 0, 1], &[4, -1, -1]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(15));
    }

    #[test]
    fn test_triangle_fractional_vertices() {
        // x, y >= 0, 2x + 3y <= 6: 7 points.
        let a = system(&[&[0, 1, 0], &[0, 0, 1], &[6, -2, -3]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(7));
    }

    #[test]
    fn test_cube() {
        let a = system(&[
            &[0, 1, 0, 0],
            &[0, 0, 1, 0],
            &[0, 0, 0, 1],
            &[2, -1, 0, 0],
            &[2, 0, -1, 0],
            &[2, 0, 0, -1],
        ]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(27));
    }

    #[test]
    fn test_diamond() {
        // |x| + |y| <= 2: 13 points.
        let a = system(&[
            &[2, -1, -1],
            &[2, -1, 1],
            &[2, 1, -1],
            &[2, 1, 1],
        ]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(13));
    }

    #[test]
    fn test_octahedron() {
        // |x| + |y| + |z| <= 1: 7 points. Every vertex has four tight
        // facets, so the triangulation must split degenerate cells.
        let mut rows = Vec::new();
        for sx in [-1i64, 1] {
            for sy in [-1i64, 1] {
                for sz in [-1i64, 1] {
                    rows.push(vec![
                        Integer::new(1),
                        Integer::new(sx),
                        Integer::new(sy),
                        Integer::new(sz),
                    ]);
                }
            }
        }
        let a = Matrix::from_rows(rows);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(7));
    }

    #[test]
    fn test_triangulate_cocircular_generators() {
        // All four generators share squared norm 3, so the paraboloid
        // lift is flat and no facet passes the lower-hull sign test;
        // the cone must still come back split into two cells.
        let support = system(&[&[-1, 1, 1], &[-1, 1, -1], &[-1, -1, 1], &[-1, -1, -1]]);
        let vertex = vec![
            Rational::from(1),
            Rational::from(0),
            Rational::from(0),
        ];
        let mut out = Vec::new();
        triangulate(&support, &vertex, &mut out).unwrap();
        assert_eq!(out.len(), 2);
        for sc in &out {
            assert_eq!(sc.generators().nrows(), 3);
        }
    }

    #[test]
    fn test_seed_independence() {
        let a = system(&[&[0, 1, 0], &[0, 0, 1], &[4, -1, -1]]);
        for seed in 0..5 {
            assert_eq!(count_lattice_points_seeded(&a, seed).unwrap(), finite(15));
        }
    }

    #[test]
    fn test_lower_dimensional_polytope() {
        // The segment x + y = 2, 0 <= x <= 2 in the plane: 3 points
        // found through the tight system substitution.
        let a = system(&[
            &[-2, 1, 1],
            &[2, -1, -1],
            &[0, 1, 0],
            &[2, -1, 0],
        ]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(3));
    }

    #[test]
    fn test_lower_dimensional_without_points() {
        // 2x + 2y = 1 has no integer solutions at all.
        let a = system(&[&[-1, 2, 2], &[1, -2, -2]]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(0));
    }

    #[test]
    fn test_lambda_strategies_agree() {
        // Tangent cones of the triangle x, y >= 0, x + y <= 4, built
        // from the facet normals tight at each vertex. The projected
        // sums must not depend on which regular direction is used.
        let data: [(&[i64], &[&[i64]]); 3] = [
            (&[0, 0], &[&[1, 0], &[0, 1]]),
            (&[4, 0], &[&[0, 1], &[-1, -1]]),
            (&[0, 4], &[&[1, 0], &[-1, -1]]),
        ];
        let mut base: Vec<UniCone> = Vec::new();
        for (v, normals) in &data {
            let vertex: Vec<Rational> = v
                .iter()
                .map(|&c| Rational::from_integer(Integer::new(c)))
                .collect();
            let sc = SimplicialCone::new(system(normals), vertex, 1).unwrap();
            sc.decompose(&mut base).unwrap();
        }
        for uc in &mut base {
            uc.dualize();
            uc.compute_lattice_point().unwrap();
        }

        let total = |mut cones: Vec<UniCone>, lambda: &[Integer]| {
            let mut min_degree: Option<Integer> = None;
            for uc in &mut cones {
                let degree = uc.project_to_line(lambda);
                min_degree = Some(match min_degree {
                    Some(m) if m <= degree => m,
                    _ => degree,
                });
            }
            let min_degree = min_degree.unwrap();
            let mut sum = Rational::zero();
            for uc in &cones {
                sum = sum + &uc.count_contribution(&min_degree);
            }
            sum.to_integer().unwrap()
        };

        let powers = powers_lambda(2, &base).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let random = random_lambda(2, &base, &mut rng);
        let by_powers = total(base.clone(), &powers);
        let by_random = total(base, &random);
        assert_eq!(by_powers, by_random);
        assert_eq!(by_powers, Integer::new(15));
    }

    #[test]
    fn test_polytope_wrapper() {
        let p = Polytope::new(system(&[&[0, 1, 0], &[0, 0, 1], &[4, -1, -1]]));
        assert_eq!(p.system().nrows(), 3);
        assert_eq!(p.count().unwrap(), finite(15));
        assert_eq!(p.count_seeded(9).unwrap(), finite(15));
    }

    #[test]
    fn test_simplex_3d() {
        // x, y, z >= 0, x + y + z <= 3: C(6, 3) = 20 points.
        let a = system(&[
            &[0, 1, 0, 0],
            &[0, 0, 1, 0],
            &[0, 0, 0, 1],
            &[3, -1, -1, -1],
        ]);
        assert_eq!(count_lattice_points(&a).unwrap(), finite(20));
    }
}
