//! Resultant and discriminant, via the Sylvester matrix determinant.
//!
//! `spec.md` §3 defines the discriminant as `Res_x(P, dP/dx) / lead(P)`.
//! Computed here with ordinary Gaussian elimination over the coefficient
//! field `T` (no fraction-free/Bareiss bookkeeping is needed: when `T`
//! itself is a field — plain rationals for a univariate discriminant, or
//! the rational-function field `RationalFunctionY` for the bivariate
//! discriminant in [`crate::bivariate`] — every division performed during
//! elimination is already exact by construction).

use super::division::Field;
use super::Poly;

/// The resultant `Res(p, q)`, via the determinant of the Sylvester matrix.
///
/// Returns zero if either polynomial is zero, matching the classical
/// convention.
#[must_use]
pub fn resultant<T: Field>(p: &Poly<T>, q: &Poly<T>) -> T {
    let (m, n) = match (p.degree(), q.degree()) {
        (Some(m), Some(n)) => (m, n),
        _ => return T::zero(),
    };
    if m == 0 && n == 0 {
        return T::one();
    }
    let size = m + n;
    let mut mat = vec![vec![T::zero(); size]; size];

    let p_hi_to_lo: Vec<T> = p.coeffs().into_iter().rev().collect();
    for i in 0..n {
        for (k, c) in p_hi_to_lo.iter().enumerate() {
            mat[i][i + k] = c.clone();
        }
    }
    let q_hi_to_lo: Vec<T> = q.coeffs().into_iter().rev().collect();
    for i in 0..m {
        for (k, c) in q_hi_to_lo.iter().enumerate() {
            mat[n + i][i + k] = c.clone();
        }
    }
    determinant(mat)
}

/// Discriminant: `Res(p, p') / lead(p)`.
#[must_use]
pub fn discriminant<T: Field>(p: &Poly<T>) -> T {
    let d = p.derive();
    resultant(p, &d) / p.leading_coeff()
}

/// Determinant of a square matrix over a field, via Gaussian elimination
/// with row-swap pivoting.
fn determinant<T: Field>(mut mat: Vec<Vec<T>>) -> T {
    let n = mat.len();
    let mut det = T::one();
    for col in 0..n {
        let pivot_row = (col..n).find(|&r| mat[r][col] != T::zero());
        let Some(pivot_row) = pivot_row else {
            return T::zero();
        };
        if pivot_row != col {
            mat.swap(pivot_row, col);
            det = -det;
        }
        let pivot = mat[col][col].clone();
        det = det * pivot.clone();
        for r in (col + 1)..n {
            if mat[r][col] != T::zero() {
                let factor = mat[r][col].clone() / pivot.clone();
                for c in col..n {
                    let sub = factor.clone() * mat[col][c].clone();
                    mat[r][c] = mat[r][c].clone() - sub;
                }
            }
        }
    }
    det
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;

    #[test]
    fn resultant_of_shared_root_is_zero() {
        let p = Poly::new_from_roots(&[1., 2.]);
        let q = Poly::new_from_roots(&[2., 3.]);
        assert!(resultant(&p, &q).abs() < 1e-9);
    }

    #[test]
    fn discriminant_of_quadratic_matches_b2_minus_4ac() {
        // x^2 + b x + c has discriminant b^2 - 4c (up to the lead(p) = 1 factor).
        let p = poly!(3., 2., 1.); // c=3, b=2, a=1
        let expected = 2_f64.powi(2) - 4.0 * 3.0;
        assert!((discriminant(&p) - expected).abs() < 1e-9);
    }

    #[test]
    fn discriminant_of_double_root_is_zero() {
        let p = Poly::new_from_roots(&[1., 1.]);
        assert!(discriminant(&p).abs() < 1e-9);
    }
}
