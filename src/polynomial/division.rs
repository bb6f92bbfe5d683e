//! Division, exact division and the Euclidean gcd, for polynomials whose
//! coefficient ring is a field (anywhere a leading coefficient needs to be
//! inverted). Instantiated at `T = f64`/`Complex<f64>` for the floating
//! pipeline and at `T = Rational`/`RationalFunctionY` for the exact
//! bivariate pipeline (`spec.md` §4.B, §3).

use super::Poly;
use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Bound covering every operation a field needs to support polynomial
/// long division, named once so `division.rs`/`resultant.rs` don't repeat
/// the same six-trait list.
pub trait Field:
    Clone
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Field for T where
    T: Clone
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
{
}

/// Polynomial long division: `num = quotient * den + remainder`, with
/// `deg(remainder) < deg(den)`.
///
/// # Panics
///
/// Panics if `den` is the zero polynomial.
#[must_use]
pub fn div_rem<T: Field>(num: &Poly<T>, den: &Poly<T>) -> (Poly<T>, Poly<T>) {
    assert!(!den.is_zero(), "division by the zero polynomial");
    let den_deg = den.degree().unwrap();
    let lc = den.leading_coeff();

    let mut remainder = num.coeffs();
    let mut quotient = vec![T::zero(); remainder.len().saturating_sub(den_deg)];

    loop {
        let rem_deg = match Poly::new_from_coeffs(&remainder).degree() {
            Some(d) => d,
            None => break,
        };
        if rem_deg < den_deg {
            break;
        }
        let shift = rem_deg - den_deg;
        let factor = remainder[rem_deg].clone() / lc.clone();
        for (j, c) in den.coeffs().into_iter().enumerate() {
            remainder[shift + j] = remainder[shift + j].clone() - factor.clone() * c;
        }
        quotient[shift] = factor;
    }

    (
        Poly::new_from_coeffs_iter(quotient),
        Poly::new_from_coeffs_iter(remainder),
    )
}

/// Division that fails if `den` does not divide `num` exactly.
///
/// # Errors
///
/// Returns `Err` with the non-zero remainder when the division is not
/// exact.
pub fn exact_div<T: Field>(num: &Poly<T>, den: &Poly<T>) -> Result<Poly<T>, Poly<T>> {
    let (q, r) = div_rem(num, den);
    if r.is_zero() {
        Ok(q)
    } else {
        Err(r)
    }
}

/// Monic greatest common divisor via the Euclidean algorithm.
///
/// Returns the unit polynomial `1` when both inputs are zero.
#[must_use]
pub fn gcd<T: Field>(a: &Poly<T>, b: &Poly<T>) -> Poly<T> {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let (_, r) = div_rem(&a, &b);
        a = b;
        b = r;
    }
    if a.is_zero() {
        return Poly::one();
    }
    let lc = a.leading_coeff();
    Poly::new_from_coeffs_iter(a.coeffs().into_iter().map(|c| c / lc.clone()))
}

/// Squarefree part of `p`, i.e. `p / gcd(p, p')`, for a polynomial over a
/// field of characteristic zero.
#[must_use]
pub fn squarefree_part<T: Field>(p: &Poly<T>) -> Poly<T> {
    let d = p.derive();
    if d.is_zero() {
        return p.clone();
    }
    let g = gcd(p, &d);
    exact_div(p, &g).expect("gcd(p, p') always divides p exactly")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;

    #[test]
    fn division_matches_textbook() {
        let p3 = poly!(1., 1., 1., 1., 1.);
        let p4 = poly!(-1., 0., 1.);
        let (q, r) = div_rem(&p3, &p4);
        assert_eq!(poly!(2., 1., 1.), q);
        assert_eq!(poly!(3., 2.), r);
    }

    #[test]
    fn exact_div_detects_nonzero_remainder() {
        let p = poly!(1., 1.);
        let d = poly!(1., 1., 1.);
        assert!(exact_div(&p, &d).is_err());
    }

    #[test]
    fn gcd_of_coprime_is_one() {
        let a = poly!(-1., 1.); // x - 1
        let b = poly!(-2., 1.); // x - 2
        let g = gcd(&a, &b);
        assert_eq!(Some(0), g.degree());
    }

    #[test]
    fn gcd_extracts_shared_factor() {
        // (x-1)(x-2) and (x-1)(x-3) share (x-1).
        let a = Poly::new_from_roots(&[1., 2.]);
        let b = Poly::new_from_roots(&[1., 3.]);
        let g = gcd(&a, &b);
        assert_eq!(Some(1), g.degree());
        assert!(g.eval(&1.0_f64).abs() < 1e-9);
    }

    #[test]
    fn squarefree_part_removes_double_root() {
        // (x - 1)^2 (x - 2)
        let p = Poly::new_from_roots(&[1., 1., 2.]);
        let sf = squarefree_part(&p);
        assert_eq!(Some(2), sf.degree());
    }
}
