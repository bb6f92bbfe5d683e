//! Bivariate polynomial arithmetic (`gcd`, `coefficients(P, x)`,
//! `discriminant(P, x)`, `derivative`, `exact_div`, `substitute`): no
//! off-the-shelf crate covers this, so it is built here by generalizing
//! [`crate::polynomial::Poly`] one level up. A [`BiPoly`] is stored as a
//! dense grid of exact rational coefficients, and `Res_x`/`gcd`-in-`x` are
//! obtained for free by instantiating the univariate [`crate::polynomial`]
//! kernel at `T = RationalFunctionY`, the field of fractions of
//! `Poly<Rational>` — pushing the coefficient ring up one level and reusing
//! the field-based kernel, the same move `polynomial::mod`'s module doc
//! describes for going from plain numbers to `Poly<Rational>` itself.

pub mod parse;
mod rational_function;

pub use rational_function::RationalFunctionY;

use crate::error::{Error, Result};
use crate::numeric::C;
use crate::polynomial::{self, Poly};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// Exact rational coefficient type, used throughout the bivariate layer to
/// keep `P`'s discriminant and root locations exact.
pub type Rational = BigRational;

/// A bivariate polynomial `P(x, y) = sum_j c_j(x) y^j`, stored as the dense
/// grid of its `(y-power, x-power)` coefficients.
///
/// `grid[j]` is the coefficient list (lowest-to-highest `x` power) of the
/// `y^j` term; all rows are padded to the same length so the grid can be
/// transposed cheaply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiPoly {
    grid: Vec<Vec<Rational>>,
}

impl BiPoly {
    /// Build from a ragged grid of coefficients, padding rows to a common
    /// `x`-length and trimming trailing all-zero `y`-rows.
    #[must_use]
    pub fn from_grid(mut grid: Vec<Vec<Rational>>) -> Self {
        let width = grid.iter().map(Vec::len).max().unwrap_or(1).max(1);
        for row in &mut grid {
            row.resize(width, Rational::zero());
        }
        while grid.len() > 1 && grid.last().is_some_and(|r| r.iter().all(Zero::is_zero)) {
            grid.pop();
        }
        if grid.is_empty() {
            grid.push(vec![Rational::zero(); width]);
        }
        BiPoly { grid }
    }

    /// Degree in `y`, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree_y(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.grid.len() - 1)
        }
    }

    /// Degree in `x`, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree_x(&self) -> Option<usize> {
        self.grid
            .iter()
            .filter_map(|row| Poly::new_from_coeffs(row).degree())
            .max()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.grid.iter().all(|row| row.iter().all(Zero::is_zero))
    }

    /// View `P` as a polynomial in `x`, coefficients being polynomials in
    /// `y` (the transpose of the stored grid).
    #[must_use]
    pub fn as_poly_x(&self) -> Poly<Poly<Rational>> {
        let width = self.grid[0].len();
        let rows: Vec<Poly<Rational>> = (0..width)
            .map(|i| Poly::new_from_coeffs_iter(self.grid.iter().map(|row| row[i].clone())))
            .collect();
        Poly::new_from_coeffs_iter(rows)
    }

    /// View `P` as a polynomial in `y`, coefficients being polynomials in
    /// `x` (the stored grid, as-is).
    #[must_use]
    pub fn as_poly_y(&self) -> Poly<Poly<Rational>> {
        Poly::new_from_coeffs_iter(self.grid.iter().map(|row| Poly::new_from_coeffs(row)))
    }

    /// The `y`-power coefficients `c_j(x)`, lowest `j` first.
    #[must_use]
    pub fn y_coefficients(&self) -> Vec<Poly<Rational>> {
        self.grid.iter().map(|row| Poly::new_from_coeffs(row)).collect()
    }

    /// `gcd` of the `x`-power coefficients of `P` viewed in `Q[y][x]` —
    /// each one a polynomial in `y` — i.e. the factor of `P` made of lines
    /// `x = const` that never participate in monodromy because they are
    /// vertical in the `(x, y) -> y` projection. The result is a polynomial
    /// in `y`, the same indeterminate as [`BiPoly::discriminant_y`], so the
    /// two combine directly into `Δ(y)`.
    #[must_use]
    pub fn vertical_part(&self) -> Poly<Rational> {
        self.as_poly_x()
            .as_slice()
            .iter()
            .filter(|c| !c.is_zero())
            .fold(Poly::zero(), |acc, c| {
                if acc.is_zero() {
                    c.clone()
                } else {
                    polynomial::gcd(&acc, c)
                }
            })
    }

    /// `d(P)/dx`, as a polynomial in `x` over `y`-polynomial coefficients.
    #[must_use]
    pub fn derivative_x(&self) -> BiPoly {
        let rows: Vec<Vec<Rational>> = self
            .grid
            .iter()
            .map(|row| Poly::new_from_coeffs(row).derive().coeffs())
            .collect();
        BiPoly::from_grid(rows)
    }

    /// Discriminant of `P` viewed as a polynomial in `x`:
    /// `Res_x(P, dP/dx) / lead_x(P)`, a polynomial in `y`.
    ///
    /// `spec.md` §3: this is the ring-in-`y` discriminant, combined by the
    /// caller with [`BiPoly::vertical_part`] to get the full `Δ(y)`.
    #[must_use]
    pub fn discriminant_y(&self) -> Poly<Rational> {
        let p = to_rfy_poly(&self.as_poly_x());
        polynomial::discriminant(&p).to_poly()
    }

    /// Substitute a fixed complex value for `y`, returning `P(·, y)` as a
    /// polynomial in `x` over `C`.
    #[must_use]
    pub fn substitute_y(&self, y: C) -> Poly<C> {
        self.grid.iter().rev().fold(Poly::<C>::zero(), |acc, row| {
            let scaled = Poly::new_from_coeffs_iter(acc.as_slice().iter().map(|c| c * y));
            let row_c: Vec<C> = row.iter().map(|r| C::new(r.to_f64().unwrap_or(0.0), 0.0)).collect();
            &scaled + &Poly::new_from_coeffs(&row_c)
        })
    }

    /// Divide `P` by `gcd(P, dP/dx)` (in `x`), yielding the squarefree
    /// part. Used by the driver when the input curve is not already
    /// squarefree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquarefree`] describing the shared factor —
    /// callers that want the division, not an error report, should instead
    /// call [`BiPoly::squarefree_part`].
    pub fn check_squarefree(&self) -> Result<()> {
        let g = self.gcd_with_derivative_x();
        if g.degree().unwrap_or(0) == 0 {
            Ok(())
        } else {
            Err(Error::NotSquarefree {
                factor: format!("{g}"),
            })
        }
    }

    /// `gcd(P, dP/dx)` in `x`, over the field of fractions of `Poly<Rational>`
    /// in `y`, converted back to an honest polynomial.
    #[must_use]
    pub fn gcd_with_derivative_x(&self) -> Poly<RationalFunctionY> {
        let p = to_rfy_poly(&self.as_poly_x());
        let d = p.derive();
        polynomial::gcd(&p, &d)
    }

    /// `P / gcd(P, dP/dx)`, the squarefree part of `P` in `x`.
    #[must_use]
    pub fn squarefree_part(&self) -> BiPoly {
        let g = self.gcd_with_derivative_x();
        let p = to_rfy_poly(&self.as_poly_x());
        let (q, _r) = polynomial::div_rem(&p, &g);
        from_rfy_poly(&q)
    }
}

/// Lift a `Poly<Poly<Rational>>` (polynomial in `x` with `y`-polynomial
/// coefficients) into the field of fractions, so the field-gated kernel
/// operations (`gcd`, `resultant`, `div_rem`) apply.
fn to_rfy_poly(p: &Poly<Poly<Rational>>) -> Poly<RationalFunctionY> {
    Poly::new_from_coeffs_iter(p.as_slice().iter().map(|c| RationalFunctionY::from_poly(c.clone())))
}

/// Lower a `Poly<RationalFunctionY>` back into `Poly<Poly<Rational>>`,
/// requiring every coefficient to in fact be a polynomial (constant
/// denominator) — true whenever the value came from exact bivariate
/// algebra rather than arbitrary field division.
fn from_rfy_poly(p: &Poly<RationalFunctionY>) -> BiPoly {
    let rows: Vec<Vec<Rational>> = p.as_slice().iter().map(|c| c.to_poly().coeffs()).collect();
    BiPoly::from_grid(transpose(&rows))
}

/// Transpose a ragged `Vec<Vec<Rational>>`, the coefficient rows being
/// indexed by `x`-power and the result rows by `y`-power.
fn transpose(rows: &[Vec<Rational>]) -> Vec<Vec<Rational>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(1);
    (0..width)
        .map(|j| {
            rows.iter()
                .map(|row| row.get(j).cloned().unwrap_or_else(Rational::zero))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::from_integer(n.into())
    }

    /// `x^2 - 1`, as a `BiPoly` with no `y`-dependence at all.
    fn two_vertical_lines() -> BiPoly {
        BiPoly::from_grid(vec![vec![r(-1), r(0), r(1)]])
    }

    #[test]
    fn vertical_part_of_a_curve_with_no_y_dependence_is_trivial() {
        // x^2 - 1 has no y-dependence at all, so every x-power coefficient
        // is a distinct constant in y and their gcd (in y) is a unit —
        // these are genuine vertical lines, but they introduce no shared
        // y-factor, so `vertical_part` (itself a polynomial in y) is trivial.
        let p = two_vertical_lines();
        let v = p.vertical_part();
        assert_eq!(Some(0), v.degree());
    }

    #[test]
    fn vertical_part_detects_a_y_factor_shared_by_every_x_coefficient() {
        // P = (y - 2) * (x^2 + x): every x-power coefficient is a multiple
        // of (y - 2), so the whole line y = 2 lies on the curve.
        let p = BiPoly::from_grid(vec![vec![r(0), r(-2), r(-2)], vec![r(0), r(1), r(1)]]);
        let v = p.vertical_part();
        assert_eq!(Some(1), v.degree());
    }

    #[test]
    fn degree_x_and_y_match_grid_shape() {
        // P = y^2 + x*y + 1
        let p = BiPoly::from_grid(vec![vec![r(1)], vec![r(0), r(1)], vec![r(1)]]);
        assert_eq!(Some(1), p.degree_x());
        assert_eq!(Some(2), p.degree_y());
    }

    #[test]
    fn substitute_y_zero_recovers_the_y0_slice() {
        // P = x^2 + y, substituting y=0 gives x^2.
        let p = BiPoly::from_grid(vec![vec![r(0), r(0), r(1)], vec![r(1)]]);
        let sliced = p.substitute_y(C::new(0.0, 0.0));
        assert_eq!(Some(2), sliced.degree());
    }

    #[test]
    fn squarefree_curve_has_trivial_derivative_gcd() {
        // P = x^2 - y is squarefree in x for every fixed y != 0... at least
        // its gcd(P, dP/dx) in the function field of y is a nonzero constant.
        let p = BiPoly::from_grid(vec![vec![r(0), r(0), r(1)], vec![r(-1)]]);
        assert!(p.check_squarefree().is_ok());
    }
}
