//! Univariate polynomial ring kernel.
//!
//! `Poly<T>` is deliberately generic over its coefficient ring: the
//! ring-level operations (`trim`, `degree`, `derive`, evaluation) need only
//! `Zero`/`One`/`Clone`, while division-requiring operations (`div_rem`,
//! `gcd`, `exact_div`, `discriminant`) are gated behind a `Div` bound in
//! their own `impl` blocks, splitting `Poly<T>`'s capabilities by trait
//! bound rather than committing to one monolithic bound.
//!
//! Instantiating `T` one level up, at `Poly<Rational>`, turns this same
//! kernel into the ring backing the bivariate polynomial module
//! ([`crate::bivariate`]) instead of duplicating the arithmetic.

pub mod arithmetic;
pub mod certified;
pub mod division;
pub mod initial_guess;
pub mod resultant;

pub use certified::{newton_root, separate_roots, separate_roots_initial_guess, NewtonResult};
pub use division::{div_rem, exact_div, gcd};
pub use resultant::{discriminant, resultant};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, Neg};

/// Dense univariate polynomial, coefficients from lowest to highest degree:
/// `p(x) = c0 + c1*x + c2*x^2 + ...`
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Poly<T> {
    coeffs: Vec<T>,
}

impl<T: Debug> Debug for Poly<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poly").field("coeffs", &self.coeffs).finish()
    }
}

/// Macro shortcut to build a polynomial from its coefficients, lowest
/// degree first.
///
/// # Example
/// ```
/// use vankampen::poly;
/// use vankampen::polynomial::Poly;
/// let p = poly!(1., 2., 3.);
/// assert_eq!(Some(2), p.degree());
/// ```
#[macro_export]
macro_rules! poly {
    ($($c:expr),+ $(,)*) => {
        $crate::polynomial::Poly::new_from_coeffs(&[$($c,)*])
    };
}

impl<T> Poly<T> {
    /// Number of stored coefficients (degree + 1, never zero).
    fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// View the coefficients as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.coeffs
    }
}

impl<T: Clone + PartialEq + Zero> Poly<T> {
    /// Build a polynomial from a slice of coefficients, trimming leading
    /// zero coefficients of high degree.
    #[must_use]
    pub fn new_from_coeffs(coeffs: &[T]) -> Self {
        let mut p = Self { coeffs: coeffs.into() };
        p.trim();
        p
    }

    /// Build a polynomial from an iterator of coefficients, trimming
    /// leading zero coefficients of high degree.
    #[must_use]
    pub fn new_from_coeffs_iter<I: IntoIterator<Item = T>>(coeffs: I) -> Self {
        let mut p = Self { coeffs: coeffs.into_iter().collect() };
        p.trim();
        p
    }

    /// Drop trailing zero coefficients, never leaving the vector empty.
    fn trim(&mut self) {
        if let Some(p) = self.coeffs.iter().rposition(|c| c != &T::zero()) {
            self.coeffs.truncate(p + 1);
        } else {
            self.coeffs.resize(1, T::zero());
        }
    }

    /// Degree of the polynomial, or `None` for the zero polynomial.
    ///
    /// # Example
    /// ```
    /// use vankampen::polynomial::Poly;
    /// let p = Poly::new_from_coeffs(&[1., 2., 3.]);
    /// assert_eq!(Some(2), p.degree());
    /// ```
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.len() - 1)
        }
    }

    /// `true` for the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.len() == 1 && self.coeffs[0] == T::zero()
    }

    /// Vector copy of the coefficients, lowest degree first.
    #[must_use]
    pub fn coeffs(&self) -> Vec<T> {
        self.coeffs.clone()
    }
}

impl<T: Clone + One + PartialEq + Zero> Poly<T> {
    /// The leading (highest-degree) coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> T {
        self.coeffs.last().cloned().unwrap_or_else(T::one)
    }
}

impl<T: Clone + Mul<Output = T> + Neg<Output = T> + One + PartialEq + Zero> Poly<T> {
    /// Build the monic polynomial `(x - r1)(x - r2)...` from its roots.
    #[must_use]
    pub fn new_from_roots(roots: &[T]) -> Self {
        let mut p = roots.iter().fold(Self::one_poly(), |acc, r| {
            acc * Self { coeffs: vec![-r.clone(), T::one()] }
        });
        p.trim();
        p
    }

    fn one_poly() -> Self {
        Self { coeffs: vec![T::one()] }
    }
}

impl<T: Clone + Add<Output = T> + Mul<Output = T> + One + PartialEq + Zero> Poly<T> {
    /// Derivative of the polynomial.
    ///
    /// Multiplies each coefficient by its exponent, built up by repeated
    /// addition of `T::one()` rather than `NumCast`, so this works uniformly
    /// over every coefficient ring used in the crate — floats, `Rational`,
    /// and `Complex<f64>` alike (`Complex` has no sane `NumCast`).
    ///
    /// # Example
    /// ```
    /// use vankampen::polynomial::Poly;
    /// let p = Poly::new_from_coeffs(&[1., 0., 1.]);
    /// assert_eq!(Poly::new_from_coeffs(&[0., 2.]), p.derive());
    /// ```
    #[must_use]
    pub fn derive(&self) -> Self {
        if self.len() == 1 {
            return Poly { coeffs: vec![T::zero()] };
        }
        let coeffs: Vec<T> = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.clone() * nat(i))
            .collect();
        Self::new_from_coeffs(&coeffs)
    }
}

/// The natural number `n` embedded in a ring, via repeated addition of
/// `T::one()`. Avoids requiring `NumCast`, which types like `Complex<f64>`
/// cannot sensibly implement.
fn nat<T: Add<Output = T> + One + Zero>(n: usize) -> T {
    (0..n).fold(T::zero(), |acc, _| acc + T::one())
}

impl<T> Poly<T> {
    /// Evaluate the polynomial at `x` using Horner's method. `x` may be a
    /// different type than the coefficients (e.g. evaluating a real
    /// polynomial at a complex point).
    ///
    /// # Example
    /// ```
    /// use vankampen::polynomial::Poly;
    /// use num_complex::Complex;
    /// let p = Poly::new_from_coeffs(&[0., 0., 2.]);
    /// assert_eq!(18., p.eval(&3.));
    /// assert_eq!(Complex::new(-18., 0.), p.eval(&Complex::new(0., 3.)));
    /// ```
    pub fn eval<'a, U>(&'a self, x: &'a U) -> U
    where
        T: 'a,
        U: 'a + Add<&'a T, Output = U> + Mul<&'a U, Output = U> + num_traits::Zero,
    {
        self.coeffs.iter().rev().fold(U::zero(), |acc, c| acc * x + c)
    }
}

impl<T> Index<usize> for Poly<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.coeffs[i]
    }
}

impl<T> IndexMut<usize> for Poly<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coeffs[i]
    }
}

impl<T: Clone + PartialEq + Zero> Zero for Poly<T> {
    fn zero() -> Self {
        Poly { coeffs: vec![T::zero()] }
    }
    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl<T: Clone + Mul<Output = T> + One + PartialEq + Zero> One for Poly<T> {
    fn one() -> Self {
        Poly { coeffs: vec![T::one()] }
    }
    fn is_one(&self) -> bool {
        self.len() == 1 && self.coeffs[0] == T::one()
    }
}

impl<T: Display + PartialEq + Zero> Display for Poly<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.len() == 1 {
            return write!(f, "{}", self.coeffs[0]);
        }
        let mut sep = "";
        for (i, c) in self.coeffs.iter().enumerate().filter(|(_, c)| **c != T::zero()) {
            write!(f, "{sep}")?;
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                _ => write!(f, "{c}*x^{i}")?,
            }
            sep = " + ";
        }
        Ok(())
    }
}

impl<T> AsRef<[T]> for Poly<T> {
    fn as_ref(&self) -> &[T] {
        &self.coeffs
    }
}
