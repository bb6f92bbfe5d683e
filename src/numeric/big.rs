//! Arbitrary-precision complex numbers, backing the certified monodromy
//! follower's Sturm arithmetic (`spec.md` §4.H) where repeated squaring of
//! polynomials in the step parameter `t` can outgrow `f64` precision.

use rug::{Complex, Float};
use std::ops::{Add, Mul, Neg, Sub};

/// Default working precision, in bits, for [`BigComplex`] arithmetic.
pub const DEFAULT_PRECISION: u32 = 256;

/// An arbitrary-precision complex number (`rug::Complex` wrapper).
#[derive(Debug, Clone)]
pub struct BigComplex {
    inner: Complex,
}

impl BigComplex {
    /// Build a [`BigComplex`] from `f64` parts at the default precision.
    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        Self::with_precision(re, im, DEFAULT_PRECISION)
    }

    /// Build a [`BigComplex`] from `f64` parts at a chosen precision.
    #[must_use]
    pub fn with_precision(re: f64, im: f64, precision: u32) -> Self {
        BigComplex {
            inner: Complex::with_val(precision, (re, im)),
        }
    }

    /// Working precision, in bits.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.inner.prec().0
    }

    /// Squared modulus `re^2 + im^2`, as a `rug::Float`.
    #[must_use]
    pub fn norm_sqr(&self) -> Float {
        let (re, im) = (self.inner.real(), self.inner.imag());
        Float::with_val(self.precision(), re * re + im * im)
    }

    /// Modulus, converted back to `f64`.
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.norm_sqr().sqrt().to_f64()
    }

    /// Convert to a floating [`super::C`].
    #[must_use]
    pub fn to_c(&self) -> super::C {
        super::C::new(self.inner.real().to_f64(), self.inner.imag().to_f64())
    }

    /// Multiplicative inverse.
    #[must_use]
    pub fn inv(&self) -> Self {
        let prec = self.precision();
        BigComplex {
            inner: Complex::with_val(prec, self.inner.clone().recip()),
        }
    }
}

impl Add for BigComplex {
    type Output = BigComplex;
    fn add(self, rhs: BigComplex) -> BigComplex {
        let prec = self.precision().max(rhs.precision());
        BigComplex {
            inner: Complex::with_val(prec, self.inner + rhs.inner),
        }
    }
}

impl Sub for BigComplex {
    type Output = BigComplex;
    fn sub(self, rhs: BigComplex) -> BigComplex {
        let prec = self.precision().max(rhs.precision());
        BigComplex {
            inner: Complex::with_val(prec, self.inner - rhs.inner),
        }
    }
}

impl Mul for BigComplex {
    type Output = BigComplex;
    fn mul(self, rhs: BigComplex) -> BigComplex {
        let prec = self.precision().max(rhs.precision());
        BigComplex {
            inner: Complex::with_val(prec, self.inner * rhs.inner),
        }
    }
}

impl Neg for BigComplex {
    type Output = BigComplex;
    fn neg(self) -> BigComplex {
        let prec = self.precision();
        BigComplex {
            inner: Complex::with_val(prec, -self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_f64() {
        let z = BigComplex::new(1.5, -2.25);
        let back = z.to_c();
        assert_eq!(1.5, back.re);
        assert_eq!(-2.25, back.im);
    }

    #[test]
    fn abs_matches_pythagoras() {
        let z = BigComplex::new(3.0, 4.0);
        assert!((z.abs() - 5.0).abs() < 1e-12);
    }
}
