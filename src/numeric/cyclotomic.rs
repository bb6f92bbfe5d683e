//! Primitive roots of unity `E(n,k) = exp(2*pi*i*k/n)`.
//!
//! Used to bootstrap `separate_roots` (`spec.md` §4.C) with a seed that
//! avoids any particular alignment with the polynomial's own roots, and to
//! generate the rotated seeds `newton_root` retries with on non-convergence.

use super::C;
use std::f64::consts::PI;

/// The primitive root of unity `E(n,k) = exp(2*pi*i*k/n)`.
///
/// # Example
/// ```
/// use vankampen::numeric::primitive_root;
/// let e4_1 = primitive_root(4, 1);
/// assert!((e4_1.re).abs() < 1e-12);
/// assert!((e4_1.im - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn primitive_root(n: u64, k: i64) -> C {
    let theta = 2.0 * PI * (k as f64) / (n as f64);
    C::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn e_3_is_cube_root_of_unity() {
        let e = primitive_root(3, 1);
        let cubed = e * e * e;
        assert!((cubed.re - 1.0).abs() < 1e-9);
        assert!(cubed.im.abs() < 1e-9);
    }
}
