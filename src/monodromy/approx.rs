//! Approximate (uncertified) monodromy follower: adaptive step
//! doubling/halving driven by how far the previous step displaced the
//! roots, relative to how far apart they are (`spec.md` §4.G).

use super::{fit, lbraid_to_word};
use crate::bivariate::BiPoly;
use crate::braid::Braid;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::numeric::{dist, nearest_pair, C};
use crate::polynomial::separate_roots_initial_guess;

/// Follow the roots of `curve.substitute_y((1-t)*a + t*b)` from `t = 0` to
/// `t = 1`, returning the braid traced out.
///
/// Starts with step `1.0` and, after every trial step, either doubles it
/// (the roots moved less than `1/adaptivity_factor` of their separation, a
/// comfortable margin) or halves it (they moved too far, or Newton simply
/// failed to converge from the previous root as a guess). Not certified:
/// this is the heuristic companion to [`super::certified_follower`], which
/// uses a rigorous Sturm-sequence bound instead of a displacement ratio.
///
/// # Errors
///
/// [`Error::NewtonNonConvergent`] if the step shrinks below `2^-n` of the
/// segment without regaining separation; [`Error::FitAmbiguous`] if the
/// roots found at `t = 1` cannot be matched, closest-point, to `end_zeros`.
pub fn approximate_follower(
    curve: &BiPoly,
    a: C,
    b: C,
    start_zeros: &[C],
    end_zeros: &[C],
    config: &Config,
) -> Result<Braid> {
    let n = start_zeros.len();
    if n == 0 {
        return Ok(Braid::identity(0));
    }

    let mut prev = start_zeros.to_vec();
    let mut total = 0.0_f64;
    let mut step = 1.0_f64;
    let mut braid = Braid::identity(n);
    let min_step = 2f64.powi(-(n as i32) - 8);

    while total < 1.0 - 1e-12 {
        step = step.min(1.0 - total);
        let next_total = total + step;
        let y_t = a * (1.0 - next_total) + b * next_total;
        let poly_t = curve.substitute_y(y_t);

        let advanced = separate_roots_initial_guess(&poly_t, &prev, config.safety, config.newton_limit)
            .ok()
            .filter(|next| {
                let displacement =
                    prev.iter().zip(next.iter()).fold(0.0_f64, |m, (p, q)| m.max(dist(*p, *q)));
                displacement * config.adaptivity_factor < nearest_pair(next)
            });

        match advanced {
            Some(next) => {
                braid = braid.compose(&lbraid_to_word(&prev, &next)?);
                prev = next;
                total = next_total;
                step *= 2.0;
            }
            None => {
                step /= 2.0;
                if step < min_step {
                    return Err(Error::NewtonNonConvergent {
                        limit: config.newton_limit,
                    });
                }
            }
        }
    }

    let fitted = fit(&prev, end_zeros)?;
    braid = braid.compose(&lbraid_to_word(&prev, &fitted)?);
    Ok(braid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bivariate::Rational;
    use num_traits::Zero;

    fn r(n: i64) -> Rational {
        Rational::from_integer(n.into())
    }

    /// `y = x^2 - 1`, as a curve constant in `y` (two fixed points at every
    /// fibre), just to exercise the follower's plumbing without needing a
    /// discriminant-rich curve.
    fn two_points_curve() -> BiPoly {
        BiPoly::from_grid(vec![vec![r(-1), r(0), r(1)]])
    }

    #[test]
    fn approximate_follower_of_a_constant_fibre_is_the_identity() {
        let curve = two_points_curve();
        let zeros = vec![C::new(-1.0, 0.0), C::new(1.0, 0.0)];
        let config = Config::new().approximate();
        let braid = approximate_follower(&curve, C::zero(), C::new(1.0, 0.0), &zeros, &zeros, &config).unwrap();
        assert!(braid.is_identity());
    }

    #[test]
    fn approximate_follower_of_zero_strands_is_trivial() {
        let curve = two_points_curve();
        let config = Config::new().approximate();
        let braid = approximate_follower(&curve, C::zero(), C::new(1.0, 0.0), &[], &[], &config).unwrap();
        assert!(braid.is_identity());
    }
}
