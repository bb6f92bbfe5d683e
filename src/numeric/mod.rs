//! Complex-number kernel (`spec.md` §4.A).
//!
//! Two complex types back the pipeline: a fast floating kernel
//! (`num_complex::Complex<f64>`, used as-is throughout the root finder and
//! the monodromy followers) and an arbitrary-precision kernel
//! ([`BigComplex`], `rug`-backed, used by the certified follower's Sturm
//! arithmetic where `f64` does not carry enough precision across many
//! adaptive steps). [`simp`] and [`cyclotomic`] provide the two remaining
//! primitives this component contributes to the rest of the crate.

pub mod big;
pub mod cyclotomic;
pub mod simp;

pub use big::BigComplex;
pub use cyclotomic::primitive_root;
pub use simp::simp;

use num_complex::Complex;

/// Floating complex number used across the root finder, geometry and
/// monodromy modules.
pub type C = Complex<f64>;

/// Euclidean distance between two floating complex numbers.
#[must_use]
pub fn dist(a: C, b: C) -> f64 {
    (a - b).norm()
}

/// Minimum pairwise distance in a slice of points, or `f64::INFINITY` if
/// fewer than two points are given.
///
/// # Example
/// ```
/// use num_complex::Complex;
/// use vankampen::numeric::nearest_pair;
/// let v = vec![Complex::new(0., 0.), Complex::new(1., 0.), Complex::new(3., 4.)];
/// assert_eq!(1.0, nearest_pair(&v));
/// ```
#[must_use]
pub fn nearest_pair(points: &[C]) -> f64 {
    let mut min = f64::INFINITY;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = dist(points[i], points[j]);
            if d < min {
                min = d;
            }
        }
    }
    min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_pair_empty_and_single() {
        assert_eq!(f64::INFINITY, nearest_pair(&[]));
        assert_eq!(f64::INFINITY, nearest_pair(&[C::new(0., 0.)]));
    }
}
