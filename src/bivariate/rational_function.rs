//! `RationalFunctionY`: the field of fractions of `Poly<Rational>`.
//!
//! Bivariate resultants and gcds (`spec.md` §3's discriminant, §6's
//! `gcd`/`discriminant(P, x)` collaborator) need the `y`-coefficients of a
//! polynomial in `x` to form a *field*, so the existing division-based
//! [`crate::polynomial`] kernel (Gaussian elimination, Euclidean `gcd`) can
//! be reused unchanged instead of hand-rolling fraction-free (Bareiss)
//! elimination. This is exactly that field, one level up from `Rational`
//! the same way `Poly<Rational>` is one level up from `Rational` itself.

use super::Rational;
use crate::polynomial::{self, Poly};
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A rational function in `y`, `num(y) / den(y)`, kept in lowest terms with
/// a monic denominator.
#[derive(Clone, Debug)]
pub struct RationalFunctionY {
    num: Poly<Rational>,
    den: Poly<Rational>,
}

impl RationalFunctionY {
    /// Embed a plain polynomial as `p / 1`.
    #[must_use]
    pub fn from_poly(p: Poly<Rational>) -> Self {
        RationalFunctionY { num: p, den: Poly::one() }
    }

    /// Build `num / den`, reducing by their gcd and normalizing the
    /// denominator to be monic.
    ///
    /// # Panics
    ///
    /// Panics if `den` is the zero polynomial.
    #[must_use]
    pub fn new(num: Poly<Rational>, den: Poly<Rational>) -> Self {
        assert!(!den.is_zero(), "rational function with zero denominator");
        let mut rf = RationalFunctionY { num, den };
        rf.reduce();
        rf
    }

    fn reduce(&mut self) {
        let g = polynomial::gcd(&self.num, &self.den);
        if !g.is_one() {
            self.num = polynomial::exact_div(&self.num, &g).unwrap_or_else(|_| self.num.clone());
            self.den = polynomial::exact_div(&self.den, &g).unwrap_or_else(|_| self.den.clone());
        }
        let lc = self.den.leading_coeff();
        if !lc.is_one() {
            self.num = scalar_div(&self.num, &lc);
            self.den = scalar_div(&self.den, &lc);
        }
    }

    /// Lower back to a plain polynomial.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if the denominator is not a nonzero constant —
    /// an internal invariant of every bivariate computation that is
    /// mathematically guaranteed to produce a polynomial result.
    #[must_use]
    pub fn to_poly(&self) -> Poly<Rational> {
        debug_assert_eq!(
            Some(0),
            self.den.degree(),
            "expected a polynomial result; denominator was non-constant"
        );
        let lc = self.den.leading_coeff();
        scalar_div(&self.num, &lc)
    }
}

fn scalar_div(p: &Poly<Rational>, s: &Rational) -> Poly<Rational> {
    Poly::new_from_coeffs_iter(p.coeffs().into_iter().map(|c| c / s.clone()))
}

impl PartialEq for RationalFunctionY {
    fn eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}

impl Add for RationalFunctionY {
    type Output = RationalFunctionY;
    fn add(self, rhs: RationalFunctionY) -> RationalFunctionY {
        let num = &(&self.num * &rhs.den) + &(&rhs.num * &self.den);
        let den = &self.den * &rhs.den;
        RationalFunctionY::new(num, den)
    }
}

impl Sub for RationalFunctionY {
    type Output = RationalFunctionY;
    fn sub(self, rhs: RationalFunctionY) -> RationalFunctionY {
        let num = &(&self.num * &rhs.den) - &(&rhs.num * &self.den);
        let den = &self.den * &rhs.den;
        RationalFunctionY::new(num, den)
    }
}

impl Mul for RationalFunctionY {
    type Output = RationalFunctionY;
    fn mul(self, rhs: RationalFunctionY) -> RationalFunctionY {
        RationalFunctionY::new(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Div for RationalFunctionY {
    type Output = RationalFunctionY;
    fn div(self, rhs: RationalFunctionY) -> RationalFunctionY {
        RationalFunctionY::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }
}

impl Neg for RationalFunctionY {
    type Output = RationalFunctionY;
    fn neg(self) -> RationalFunctionY {
        RationalFunctionY { num: -self.num, den: self.den }
    }
}

impl Zero for RationalFunctionY {
    fn zero() -> Self {
        RationalFunctionY { num: Poly::zero(), den: Poly::one() }
    }
    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for RationalFunctionY {
    fn one() -> Self {
        RationalFunctionY { num: Poly::one(), den: Poly::one() }
    }
}
