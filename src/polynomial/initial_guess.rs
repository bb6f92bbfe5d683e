//! Initial root-guess generation via the upper convex hull of the
//! log-coefficient points, and Aberth-Ehrlich simultaneous refinement.
//!
//! Certified Newton refinement (`newton_root`) only ever improves a guess
//! it is handed; the guess itself has to come from somewhere, and this
//! convex-hull/Aberth-Ehrlich construction is the standard way to bootstrap
//! one without prior knowledge of root locations. Written directly against
//! plain `f64`/[`super::super::numeric::C`] rather than a generic `Float`
//! bound, since nothing else in this crate needs that generality.

use crate::numeric::C;
use crate::polynomial::Poly;
use num_complex::Complex;
use num_traits::{Inv, One, Zero};
use std::f64::consts::PI;

/// Upper convex hull of `(k, ln|c_k|)`, used to size the Aberth initial
/// guesses by coefficient magnitude (Newton's polygon).
///
/// Monotone-chain (Andrew's) algorithm, O(n log n) but the input here is
/// already sorted by `k` so no sort step is needed.
fn convex_hull_top(set: &[(usize, f64)]) -> Vec<(usize, f64)> {
    let mut stack: Vec<(usize, f64)> = Vec::new();
    stack.push(set[0]);
    if set.len() > 1 {
        stack.push(set[1]);
    }
    for &p in set.iter().skip(2) {
        loop {
            let len = stack.len();
            if len < 2 {
                break;
            }
            let next_to_top = stack[len - 2];
            let top = stack[len - 1];
            let cp = cross_product(next_to_top, top, p);
            if cp < 0.0 {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

fn cross_product(p0: (usize, f64), p1: (usize, f64), p2: (usize, f64)) -> f64 {
    let first = (p1.0 as f64 - p0.0 as f64, p1.1 - p0.1);
    let second = (p2.0 as f64 - p0.0 as f64, p2.1 - p0.1);
    first.0 * second.1 - second.0 * first.1
}

/// Generate one initial Aberth guess per root, placed on concentric
/// circles sized from the convex hull of the log-coefficient points.
///
/// # Panics
///
/// Panics if `p` is the zero polynomial.
#[must_use]
pub fn initial_guess(p: &Poly<f64>) -> Vec<C> {
    let coeffs = p.as_slice();
    assert!(!p.is_zero(), "cannot seed roots for the zero polynomial");

    let set: Vec<(usize, f64)> = coeffs
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != 0.0)
        .map(|(k, c)| (k, c.abs().ln()))
        .collect();
    if set.len() < 2 {
        // A monomial c*x^n has a single root at 0 with multiplicity n.
        return vec![C::zero(); p.degree().unwrap_or(0)];
    }
    let hull = convex_hull_top(&set);

    let mut guesses = Vec::with_capacity(p.degree().unwrap_or(0));
    for w in hull.windows(2) {
        let (k0, y0) = w[0];
        let (k1, y1) = w[1];
        let n_k = k1 - k0;
        let ratio = (coeffs[k0] / coeffs[k1]).abs();
        let r = ratio.powf(1.0 / (y1 - y0));
        let tau = 2.0 * PI;
        for i in 0..n_k {
            let theta = tau * (i as f64) / (n_k as f64);
            guesses.push(Complex::new(theta.cos(), theta.sin()) * r);
        }
    }
    guesses
}

/// One sweep of Aberth-Ehrlich simultaneous Newton correction.
///
/// Returns the updated guesses and, for each root, the modulus of the
/// correction just applied (used by the certified layer to decide when to
/// stop sweeping).
#[must_use]
pub fn aberth_step(p: &Poly<C>, der: &Poly<C>, guesses: &[C]) -> (Vec<C>, Vec<f64>) {
    let mut next = guesses.to_vec();
    let mut deltas = vec![0.0; guesses.len()];
    for i in 0..guesses.len() {
        let zi = guesses[i];
        let newton_term = p.eval(&zi) / der.eval(&zi);
        let coupling: C = guesses
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &zj)| (zi - zj).inv())
            .fold(Complex::zero(), |acc, term| acc + term);
        let denom = Complex::<f64>::one() - newton_term * coupling;
        let delta = newton_term / denom;
        next[i] = zi - delta;
        deltas[i] = delta.norm();
    }
    (next, deltas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::Poly;

    #[test]
    fn convex_hull_sizes_guesses_like_roots() {
        let p = Poly::new_from_roots(&[10.0, 10.0 / 323.4, 1.0, -2.0, 3.0]);
        let guesses = initial_guess(&p);
        assert_eq!(5, guesses.len());
    }

    #[test]
    fn aberth_step_moves_toward_a_known_root() {
        // p(x) = (x - 2)(x - 3), roots at 2 and 3.
        let p: Poly<C> = Poly::new_from_roots(&[Complex::new(2.0, 0.0), Complex::new(3.0, 0.0)]);
        let der = p.derive();
        let guesses = vec![Complex::new(1.5, 0.1), Complex::new(3.5, -0.1)];
        let (next, deltas) = aberth_step(&p, &der, &guesses);
        assert!(deltas.iter().all(|d| d.is_finite()));
        assert!((next[0] - guesses[0]).norm() > 0.0);
    }
}
