//! Certified monodromy follower: at every instant, each root is kept
//! inside a "protected disk" whose radius is rigorously certified, via a
//! Sturm sequence, to stay valid for the whole of the next step
//! (`spec.md` §4.H).

use super::sturm::{self, sturm};
use super::{fit, lbraid_to_word};
use crate::bivariate::{BiPoly, Rational};
use crate::braid::Braid;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::numeric::C;
use crate::polynomial::{separate_roots_initial_guess, Poly};
use num_traits::{ToPrimitive, Zero};

/// Follow the roots of `curve.substitute_y((1-t)*a + t*b)` from `t = 0` to
/// `t = 1`, returning the braid traced out.
///
/// At each instant `tm`, every strand `k` carries a protection radius
/// `R[k]` (half the distance to its nearest neighbour) and a certification
/// polynomial `R[k]*|dP/dx|^2 - n^2*|P|^2`, evaluated along the segment as
/// a function of `t`. [`sturm::sturm`] finds the largest `s` past which
/// that polynomial is guaranteed to stay positive for every strand — i.e.
/// past which Newton's method, started from the current root, is
/// guaranteed to stay inside the same protected disk — and the follower
/// advances to a point strictly inside `(tm, s]`.
///
/// # Errors
///
/// [`Error::NonSeparable`] if some strand's certification polynomial is
/// already non-positive at `tm` (the protected disks have collided), or if
/// the certified step count exceeds `config.newton_limit`;
/// [`Error::FitAmbiguous`] if the roots found at `t = 1` cannot be
/// matched, closest-point, to `end_zeros`.
pub fn certified_follower(
    curve: &BiPoly,
    a: C,
    b: C,
    start_zeros: &[C],
    end_zeros: &[C],
    config: &Config,
) -> Result<Braid> {
    let n = start_zeros.len();
    if n == 0 {
        return Ok(Braid::identity(0));
    }

    let dcurve = curve.derivative_x();
    let mut v = start_zeros.to_vec();
    let mut tm = 0.0_f64;
    let mut adapt = vec![8u32; n];
    let mut braid = Braid::identity(n);
    let mut iterations = 0u32;

    while tm < 1.0 - 1e-9 {
        iterations += 1;
        if iterations > config.newton_limit {
            return Err(Error::NonSeparable { tm });
        }

        let radii = protection_radii(&v);
        let mut s = 1.0_f64;
        for k in 0..n {
            let g = certification_polynomial(curve, &dcurve, v[k], radii[k], n, a, b);
            let s_k = sturm(&g, tm, adapt[k]);
            if s_k <= tm + 1e-12 {
                return Err(Error::NonSeparable { tm });
            }
            adapt[k] = adapt[k].max(8);
            s = s.min(s_k);
        }

        let next_tm = sturm::binary_low(s, tm);
        let y_t = a * (1.0 - next_tm) + b * next_tm;
        let poly_t = curve.substitute_y(y_t);
        let next_v = separate_roots_initial_guess(&poly_t, &v, config.safety, config.newton_limit)?;
        braid = braid.compose(&lbraid_to_word(&v, &next_v)?);
        v = next_v;
        tm = next_tm;
    }

    let fitted = fit(&v, end_zeros)?;
    braid = braid.compose(&lbraid_to_word(&v, &fitted)?);
    Ok(braid)
}

/// Half the squared distance from `v[k]` to its nearest other root: the
/// largest disk around `v[k]` guaranteed not to contain another root.
fn protection_radii(v: &[C]) -> Vec<f64> {
    (0..v.len())
        .map(|k| {
            (0..v.len())
                .filter(|&l| l != k)
                .map(|l| (v[k] - v[l]).norm_sqr() / 4.0)
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}

/// `R[k]*|dP/dx(v[k], y(t))|^2 - n^2*|P(v[k], y(t))|^2`, as a real
/// polynomial in `t`, where `y(t) = (1-t)*a + t*b`.
///
/// Positivity of this polynomial on `[tm, s]` certifies that Newton's
/// method, started at `v[k]`, converges to the unique root of
/// `P(·, y(t))` inside the disk of radius `sqrt(R[k])` around `v[k]`, for
/// every `t` in that range (a Kantorovich-type basin-of-attraction bound).
fn certification_polynomial(curve: &BiPoly, dcurve: &BiPoly, vk: C, rk: f64, n: usize, a: C, b: C) -> Poly<f64> {
    let p_in_t = compose_with_affine(&fiber_at_x(curve, vk), a, b);
    let dp_in_t = compose_with_affine(&fiber_at_x(dcurve, vk), a, b);
    let protp = scale(&norm_sqr_poly(&p_in_t), (n * n) as f64);
    let protdpdx = scale(&norm_sqr_poly(&dp_in_t), rk);
    &protdpdx - &protp
}

/// `P(x, ·)` for fixed complex `x`, as a polynomial in `y` with `C`
/// coefficients (each `x`-coefficient polynomial, over `Rational`, cast
/// down to `f64` and evaluated at `x`).
fn fiber_at_x(curve: &BiPoly, x: C) -> Poly<C> {
    let p_y = curve.as_poly_y();
    let coeffs: Vec<C> = p_y.as_slice().iter().map(|c_in_x| rational_poly_to_f64(c_in_x).eval(&x)).collect();
    Poly::new_from_coeffs(&coeffs)
}

fn rational_poly_to_f64(p: &Poly<Rational>) -> Poly<f64> {
    let coeffs: Vec<f64> = p.as_slice().iter().map(|c| c.to_f64().unwrap_or(0.0)).collect();
    Poly::new_from_coeffs(&coeffs)
}

/// Compose a polynomial in `y` with the affine substitution
/// `y = a + (b-a)*t`, by Horner evaluation with a polynomial accumulator.
fn compose_with_affine(p_in_y: &Poly<C>, a: C, b: C) -> Poly<C> {
    let y_of_t = Poly::new_from_coeffs(&[a, b - a]);
    p_in_y.as_slice().iter().rev().fold(Poly::<C>::zero(), |acc, c| {
        &(&acc * &y_of_t) + &Poly::new_from_coeffs(&[*c])
    })
}

/// `|p(t)|^2` as a real polynomial, exact for real `t`: `p * conj(p)`
/// always has real coefficients when `p`'s argument ranges over the
/// reals, since its value is real at every real point.
fn norm_sqr_poly(p: &Poly<C>) -> Poly<f64> {
    let conj: Vec<C> = p.as_slice().iter().map(|c| c.conj()).collect();
    let conj_poly = Poly::new_from_coeffs(&conj);
    let prod = p * &conj_poly;
    let coeffs: Vec<f64> = prod.as_slice().iter().map(|c| c.re).collect();
    Poly::new_from_coeffs(&coeffs)
}

fn scale(p: &Poly<f64>, factor: f64) -> Poly<f64> {
    Poly::new_from_coeffs_iter(p.as_slice().iter().map(|c| c * factor))
}
