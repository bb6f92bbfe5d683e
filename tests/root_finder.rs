//! Certified root-finder properties, `spec.md` §8's "root-finder
//! certification" universal property: whatever comes back from
//! `separate_roots`/`separate_roots_initial_guess`, each returned value is
//! within its certified tolerance of some genuine root, and the returned
//! set has exactly one entry per root of the polynomial.

use num_complex::Complex;
use proptest::prelude::*;
use vankampen::numeric::C;
use vankampen::polynomial::{newton_root, separate_roots, separate_roots_initial_guess, Poly};

proptest! {
    #[test]
    fn separate_roots_recovers_well_separated_real_roots(count in 1usize..6) {
        let roots: Vec<C> = (0..count).map(|k| Complex::new(k as f64 * 10.0, 0.0)).collect();
        let p = Poly::new_from_roots(&roots);
        let found = separate_roots(&p, 100.0, 500).unwrap();
        prop_assert_eq!(found.len(), roots.len());
        for expected in &roots {
            let closest = found.iter().map(|z| (z - expected).norm()).fold(f64::INFINITY, f64::min);
            prop_assert!(closest < 1e-4);
        }
    }

    #[test]
    fn newton_root_converges_to_within_its_own_certified_bound(re in -10.0f64..10.0, im in -10.0f64..10.0) {
        let target = Complex::new(re, im);
        let p = Poly::new_from_roots(&[target]);
        let guess = target + Complex::new(0.1, -0.05);
        let result = newton_root(&p, guess, 1e-6, 200).unwrap();
        prop_assert!((result.root - target).norm() <= result.error);
    }
}

#[test]
fn separate_roots_initial_guess_rejects_guesses_that_collapse_together() {
    let p = Poly::new_from_roots(&[Complex::new(0.0, 0.0), Complex::new(1e-3, 0.0)]);
    let guesses = vec![Complex::new(0.0, 0.0), Complex::new(1e-3, 0.0)];
    let result = separate_roots_initial_guess(&p, &guesses, 1e6, 200);
    assert!(result.is_err());
}

#[test]
fn separate_roots_of_a_single_root_polynomial_finds_it() {
    let p: Poly<C> = Poly::new_from_roots(&[Complex::new(3.0, -2.0)]);
    let roots = separate_roots(&p, 100.0, 200).unwrap();
    assert_eq!(1, roots.len());
    assert!((roots[0] - Complex::new(3.0, -2.0)).norm() < 1e-6);
}
