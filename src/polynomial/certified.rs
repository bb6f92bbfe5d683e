//! Certified Newton refinement and root separation (`spec.md` §4.C).
//!
//! Every bound this module hands back is a genuine certified bound, not a
//! float-precision heuristic: downstream braid reconstruction only ever
//! trusts the `error` field of a [`NewtonResult`], never the bit pattern of
//! the refined root itself.

use crate::error::{Error, Result};
use crate::numeric::{nearest_pair, primitive_root, simp, C};
use crate::polynomial::{div_rem, Poly};
use num_complex::Complex;

/// Seed modulus used while bootstrapping one root at a time in
/// [`separate_roots`], ahead of having any prior guess to refine.
const BOOTSTRAP_EPS: f64 = 1e-9;

/// A Newton-refined root together with its certified error bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    /// The refined root, rationalised by [`crate::numeric::simp`].
    pub root: C,
    /// Certified upper bound on `|root - true root|`, `<= eps`.
    pub error: f64,
}

/// Refine `z0` to a root of `p` within `eps`, via
/// `z <- z - p(z)/p'(z)`.
///
/// Terminates successfully once a correction has modulus
/// `<= eps / (100 * (deg(p) + 1))`, at which point the refined value is
/// passed through [`simp`] to keep it rational. Fails with
/// [`Error::NewtonNonConvergent`] after `lim` iterations, or if the
/// derivative vanishes along the way.
pub fn newton_root(p: &Poly<C>, z0: C, eps: f64, lim: u32) -> Result<NewtonResult> {
    let der = p.derive();
    let degree = p.degree().unwrap_or(0);
    let threshold = eps / (100.0 * (degree as f64 + 1.0));

    let mut z = z0;
    for _ in 0..lim {
        let dz = der.eval(&z);
        if dz.norm() == 0.0 {
            return Err(Error::NewtonNonConvergent { limit: lim });
        }
        let correction = p.eval(&z) / dz;
        z -= correction;
        if correction.norm() <= threshold {
            return Ok(NewtonResult {
                root: simp(z, threshold),
                error: eps,
            });
        }
    }
    Err(Error::NewtonNonConvergent { limit: lim })
}

/// Refine a whole list of initial guesses, one per root, certifying that
/// their attraction basins are pairwise disjoint.
///
/// Calls [`newton_root`] on each guess with tolerance
/// `nearest_pair(v) / (2 * safety)`. Succeeds iff every call converges and
/// the minimum pairwise distance of the refined roots, divided by
/// `2 * safety`, exceeds the largest returned error — at which point the
/// disks of that radius around the refined roots are pairwise disjoint and
/// each contains exactly one root of `p`.
pub fn separate_roots_initial_guess(
    p: &Poly<C>,
    v: &[C],
    safety: f64,
    lim: u32,
) -> Result<Vec<C>> {
    if v.is_empty() {
        return Ok(Vec::new());
    }
    let tol = nearest_pair(v) / (2.0 * safety);

    let mut refined = Vec::with_capacity(v.len());
    let mut max_error = 0.0_f64;
    for &z0 in v {
        let result = newton_root(p, z0, tol, lim)?;
        max_error = max_error.max(result.error);
        refined.push(result.root);
    }

    let min_dist = nearest_pair(&refined);
    if min_dist / (2.0 * safety) <= max_error {
        return Err(Error::RootsNotSeparated { safety });
    }
    Ok(refined)
}

/// Bootstrap a full, certified root list from scratch.
///
/// Finds one root at a time from seeds `5/4 * E(2*(deg p + 1), k)`
/// (`k = 0, 1, ...`), divides it out of a shrinking working copy of `p`,
/// and once all `deg p` seeds have produced a root, jointly certifies the
/// whole list via [`separate_roots_initial_guess`].
pub fn separate_roots(p: &Poly<C>, safety: f64, lim: u32) -> Result<Vec<C>> {
    let guesses = bootstrap_guesses(p, lim)?;
    separate_roots_initial_guess(p, &guesses, safety, lim)
}

fn bootstrap_guesses(p: &Poly<C>, lim: u32) -> Result<Vec<C>> {
    let mut remaining = p.clone();
    let mut roots = Vec::new();
    while remaining.degree().is_some_and(|d| d > 0) {
        let root = bootstrap_one_root(&remaining, lim)?;
        roots.push(root);
        let divisor = Poly::new_from_roots(&[root]);
        let (quotient, _remainder) = div_rem(&remaining, &divisor);
        remaining = quotient;
    }
    Ok(roots)
}

fn bootstrap_one_root(p: &Poly<C>, lim: u32) -> Result<C> {
    let degree = p.degree().unwrap_or(0);
    let modulus = 2 * (degree as u64 + 1);
    for k in 0..modulus {
        let seed = primitive_root(modulus, k as i64) * Complex::new(1.25, 0.0);
        if let Ok(result) = newton_root(p, seed, BOOTSTRAP_EPS, lim) {
            return Ok(result.root);
        }
    }
    Err(Error::NewtonNonConvergent { limit: lim })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadratic() -> Poly<C> {
        Poly::new_from_roots(&[Complex::new(2.0, 0.0), Complex::new(-3.0, 0.0)])
    }

    #[test]
    fn newton_root_converges_from_a_nearby_guess() {
        let p = quadratic();
        let result = newton_root(&p, Complex::new(1.8, 0.2), 1e-8, 100).unwrap();
        assert!((result.root - Complex::new(2.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn newton_root_fails_on_a_stationary_point() {
        let p: Poly<C> = Poly::new_from_coeffs(&[Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)]);
        // der is the zero polynomial, evaluates to 0 everywhere.
        let result = newton_root(&p, Complex::new(0.5, 0.0), 1e-8, 10);
        assert!(result.is_err());
    }

    #[test]
    fn separate_roots_initial_guess_certifies_well_separated_roots() {
        let p = quadratic();
        let guesses = vec![Complex::new(1.9, 0.1), Complex::new(-2.8, -0.1)];
        let refined = separate_roots_initial_guess(&p, &guesses, 100.0, 100).unwrap();
        assert_eq!(2, refined.len());
    }

    #[test]
    fn separate_roots_bootstraps_from_scratch() {
        let p = quadratic();
        let roots = separate_roots(&p, 100.0, 200).unwrap();
        assert_eq!(2, roots.len());
        let mut re: Vec<f64> = roots.iter().map(|z| z.re).collect();
        re.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((re[0] - (-3.0)).abs() < 1e-4);
        assert!((re[1] - 2.0).abs() < 1e-4);
    }
}
