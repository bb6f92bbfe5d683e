//! Sturm sequences over `Poly<f64>`, used by the certified follower
//! (`spec.md` §4.H) to certify that a real polynomial in the step
//! parameter `t` stays strictly positive throughout an interval.
//!
//! The chain itself is built and stored in `f64` (`div_rem`'s repeated
//! subtraction does not compound badly enough to need more), but every
//! point this module actually tests against zero is evaluated at
//! [`BigComplex`]'s working precision first: `build`'s remainder chain can
//! produce coefficients spanning many orders of magnitude, and a plain
//! `f64` Horner evaluation of those against the `1e-12` zero-tolerance
//! below can flip a true sign change into a false one from rounding alone.

use crate::numeric::BigComplex;
use crate::polynomial::{self, Poly};

/// The Sturm sequence of a real polynomial: `p0 = p`, `p1 = p'`, and
/// `p_{k+1} = -rem(p_{k-1}, p_k)` until a zero remainder.
pub struct SturmSequence {
    chain: Vec<Poly<f64>>,
}

impl SturmSequence {
    #[must_use]
    pub fn build(p: &Poly<f64>) -> Self {
        let mut chain = vec![p.clone(), p.derive()];
        while chain.len() < 64 {
            let last = chain.last().unwrap();
            if last.is_zero() {
                break;
            }
            let prev = &chain[chain.len() - 2];
            let (_, r) = polynomial::div_rem(prev, last);
            let neg_r = -&r;
            let done = neg_r.is_zero();
            chain.push(neg_r);
            if done {
                break;
            }
        }
        SturmSequence { chain }
    }

    fn sign_changes(&self, x: f64) -> usize {
        let signs: Vec<i32> = self
            .chain
            .iter()
            .map(|p| eval_certified(p.as_slice(), x))
            .filter(|v| v.abs() > 1e-12)
            .map(|v| if v > 0.0 { 1 } else { -1 })
            .collect();
        signs.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Number of distinct real roots in `(lo, hi]`, assuming neither
    /// endpoint is itself a root.
    #[must_use]
    pub fn root_count(&self, lo: f64, hi: f64) -> usize {
        self.sign_changes(lo).saturating_sub(self.sign_changes(hi))
    }
}

/// Largest value `s` in `(tm, 1]` such that `poly` is positive throughout
/// `[tm, s]`, found by halving the remaining interval up to `adapt`
/// (floor 4) times and certifying each candidate with a Sturm root count.
///
/// Returns `tm` itself if `poly(tm) <= 0` or no certified step can be
/// found — the caller (the certified monodromy follower) treats that as a
/// stall.
#[must_use]
pub fn sturm(poly: &Poly<f64>, tm: f64, adapt: u32) -> f64 {
    if eval_certified(poly.as_slice(), tm) <= 0.0 {
        return tm;
    }
    let seq = SturmSequence::build(poly);
    let mut step = 1.0 - tm;
    for _ in 0..adapt.max(4) {
        let s = tm + step;
        if seq.root_count(tm, s) == 0 {
            return s;
        }
        step /= 2.0;
    }
    tm
}

/// A dyadic value strictly between `tm` and `s`, used to back off from the
/// certified endpoint so the next step's interval is closed, not half-open
/// (`spec.md` §4.H's `binary_low`).
#[must_use]
pub fn binary_low(s: f64, tm: f64) -> f64 {
    tm + (s - tm) / 2.0
}

/// Horner-evaluate `coeffs` (lowest degree first) at the real point `x`,
/// accumulating at [`BigComplex`]'s working precision and only rounding
/// back to `f64` in the final result, so the `1e-12` zero-tolerance above
/// is tested against a value that has not already absorbed `f64` rounding
/// from the accumulation itself.
fn eval_certified(coeffs: &[f64], x: f64) -> f64 {
    let xb = BigComplex::new(x, 0.0);
    let acc = coeffs
        .iter()
        .rev()
        .fold(BigComplex::new(0.0, 0.0), |acc, &c| acc * xb.clone() + BigComplex::new(c, 0.0));
    acc.to_c().re
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;

    #[test]
    fn sturm_certifies_a_positive_constant_for_the_whole_interval() {
        let p = poly!(1.0);
        let s = sturm(&p, 0.0, 8);
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sturm_stops_before_a_root() {
        // 1 - 2t has a root at t = 0.5.
        let p = poly!(1.0, -2.0);
        let s = sturm(&p, 0.0, 8);
        assert!(s <= 0.5 + 1e-6);
    }

    #[test]
    fn sturm_returns_tm_when_already_nonpositive() {
        let p = poly!(-1.0);
        assert_eq!(0.0, sturm(&p, 0.0, 8));
    }
}
