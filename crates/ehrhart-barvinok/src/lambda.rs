//! Projection directions for the generating function specialization.
//!
//! The univariate substitution `t_i -> t^{lambda_i}` is only valid
//! when `lambda` is orthogonal to no generator of any cone; otherwise
//! a denominator factor degenerates. Two strategies are provided: a
//! deterministic sweep over moment curve points, and the randomized
//! search used by the counting driver.

use ehrhart_integers::Integer;
use num_traits::One;
use rand::Rng;

use crate::unicone::UniCone;

/// Tries the moment curve directions `(1, i, i^2, ...)` in turn.
///
/// A generator row turns into a nonzero polynomial of degree below
/// `dim` in `i`, so it rules out fewer than `dim` values; with
/// `dim * (dim - 1) * cones + 1` candidates at least one direction
/// admits every cone. `None` is therefore unreachable for cones with
/// nonzero generator rows, but the type does not promise that.
pub fn powers_lambda(dim: usize, cones: &[UniCone]) -> Option<Vec<Integer>> {
    let generators: usize = cones.iter().map(|c| c.generators().nrows()).sum();
    let limit = generators * dim.saturating_sub(1) + 1;
    for i in 0..limit {
        let base = Integer::new(i as i64);
        let mut lambda = Vec::with_capacity(dim);
        let mut power = Integer::one();
        for _ in 0..dim {
            lambda.push(power.clone());
            power = &power * &base;
        }
        if cones.iter().all(|c| c.admits_lambda(&lambda)) {
            return Some(lambda);
        }
    }
    None
}

/// Draws a direction with small random coordinates, then nudges random
/// coordinates until every cone admits it.
///
/// Each nudge moves the direction off finitely many hyperplanes, so
/// the loop terminates with probability one and in practice after a
/// handful of steps.
pub fn random_lambda<R: Rng>(dim: usize, cones: &[UniCone], rng: &mut R) -> Vec<Integer> {
    debug_assert!(dim > 0);
    let mut lambda: Vec<Integer> = (0..dim)
        .map(|_| Integer::new(rng.gen_range(-9..=9)))
        .collect();
    loop {
        if cones.iter().all(|c| c.admits_lambda(&lambda)) {
            return lambda;
        }
        let i = rng.gen_range(0..dim);
        lambda[i] = &lambda[i] + &Integer::one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ehrhart_integers::Rational;
    use ehrhart_linalg::Matrix;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn axis_cone() -> UniCone {
        let gens = Matrix::from_rows(vec![
            vec![Integer::new(1), Integer::new(0)],
            vec![Integer::new(0), Integer::new(1)],
        ]);
        UniCone::new(gens, vec![Rational::from(0), Rational::from(0)], 1)
    }

    #[test]
    fn test_powers_lambda_skips_orthogonal() {
        let cones = vec![axis_cone()];
        // (1, 0) is orthogonal to the second axis, so the sweep must
        // move past i = 0.
        let lambda = powers_lambda(2, &cones).unwrap();
        assert!(cones[0].admits_lambda(&lambda));
        assert_eq!(lambda, vec![Integer::one(), Integer::one()]);
    }

    #[test]
    fn test_powers_lambda_one_dimensional() {
        let gens = Matrix::from_rows(vec![vec![Integer::new(-1)]]);
        let cones = vec![UniCone::new(gens, vec![Rational::from(0)], 1)];
        let lambda = powers_lambda(1, &cones).unwrap();
        assert_eq!(lambda, vec![Integer::one()]);
    }

    #[test]
    fn test_random_lambda_admits_all() {
        let cones = vec![axis_cone()];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let lambda = random_lambda(2, &cones, &mut rng);
            assert!(cones[0].admits_lambda(&lambda));
        }
    }
}
