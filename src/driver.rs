//! End-to-end pipeline, `spec.md` §5's overall control flow split into the
//! three stages its persistence format is built around: `prepare` (read
//! `P`, locate the loop graph and every fibre), `run_segments` (the
//! per-segment monodromy braids, independently resumable/parallelizable),
//! and `finish` (compose braids along loops, Hurwitz-quotient to a
//! presentation).

use crate::bivariate::{BiPoly, Rational};
use crate::braid::Braid;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::group::{db_vk_quotient, vk_quotient, Presentation};
use crate::loops::{build_loops, LoopGraph};
use crate::monodromy::{approximate_follower, certified_follower};
use crate::numeric::C;
use crate::polynomial::{separate_roots, Poly};
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Output of the `prepare` stage: everything needed to compute every
/// segment's monodromy braid independently of the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prepared {
    /// The squarefree curve actually used (may differ from the input if
    /// it was not already squarefree).
    pub curve: BiPoly,
    /// `Δ(y)`, the discriminant combined with the vertical part.
    pub discy: Poly<Rational>,
    /// Certified roots of `discy`, the critical values of the projection.
    pub roots: Vec<C>,
    /// The loop graph built around `roots`.
    pub graph: LoopGraph,
    /// `zeros[p]` for `p` in `graph.points`, `zeros[p][k]` the `k`-th root
    /// of `curve.substitute_y(graph.points[p])`.
    pub zeros: Vec<Vec<C>>,
    /// Whether `curve`'s `x`-degree is achieved by a constant (`y`-free)
    /// leading coefficient — governs whether [`finish`] uses
    /// [`vk_quotient`] or [`db_vk_quotient`].
    pub monic: bool,
}

/// The full bundled result record, `spec.md` §3's `Result record R`.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub curve: BiPoly,
    pub discy: Poly<Rational>,
    pub roots: Vec<C>,
    pub graph: LoopGraph,
    pub zeros: Vec<Vec<C>>,
    /// One braid per segment of `graph.segments`, in the segment's
    /// canonical (lower-index-to-higher-index) direction.
    pub monodromy: Vec<Braid>,
    /// One composite braid per loop of `graph.loops`.
    pub braids: Vec<Braid>,
    pub presentation: Presentation,
}

/// Stage 1: make `curve` squarefree if needed, compute its discriminant
/// and the discriminant's roots, build the loop graph, and compute every
/// point's fibre.
///
/// # Errors
///
/// Propagates [`crate::error::Error::RootsNotSeparated`] /
/// [`crate::error::Error::NewtonNonConvergent`] from root-finding the
/// discriminant or any fibre.
pub fn prepare(curve: &BiPoly, config: &Config) -> Result<Prepared> {
    let curve = if curve.check_squarefree().is_ok() {
        curve.clone()
    } else {
        info!("input curve not squarefree, dividing out the shared factor");
        curve.squarefree_part()
    };

    let discy = combined_discriminant(&curve);
    let roots = discriminant_roots(&discy, config)?;
    debug!(count = roots.len(), "located discriminant roots");

    let graph = build_loops(&roots);
    let mut zeros = Vec::with_capacity(graph.points.len());
    for &p in &graph.points {
        let fibre_poly = curve.substitute_y(p);
        zeros.push(separate_roots(&fibre_poly, config.safety, config.newton_limit)?);
    }

    let monic = is_monic(&curve);
    Ok(Prepared { curve, discy, roots, graph, zeros, monic })
}

/// Stage 2: compute the monodromy braid of every segment, each
/// independent of the others (the natural unit of parallel dispatch,
/// `spec.md` §6).
///
/// # Errors
///
/// Propagates monodromy-follower failures
/// ([`crate::error::Error::SingularMonodromy`],
/// [`crate::error::Error::NonSeparable`],
/// [`crate::error::Error::NewtonNonConvergent`],
/// [`crate::error::Error::FitAmbiguous`]).
pub fn run_segments(prepared: &Prepared, config: &Config) -> Result<Vec<Braid>> {
    prepared
        .graph
        .segments
        .iter()
        .map(|&(i, j)| {
            let (a, b) = (prepared.graph.points[i], prepared.graph.points[j]);
            let (start, end) = (&prepared.zeros[i], &prepared.zeros[j]);
            if config.monodromy_approx {
                approximate_follower(&prepared.curve, a, b, start, end, config)
            } else {
                certified_follower(&prepared.curve, a, b, start, end, config)
            }
        })
        .collect()
}

/// Stage 3: compose the per-loop braid from `monodromy`, then
/// Hurwitz-quotient to the final presentation.
///
/// # Errors
///
/// For a non-monic curve, [`Error::InvalidConfig`] if no trivializing line
/// height within the retry budget avoids every critical value of `discy`.
pub fn finish(prepared: Prepared, monodromy: Vec<Braid>) -> Result<PipelineResult> {
    let n = prepared.zeros[prepared.graph.basepoint].len();
    let braids: Vec<Braid> = prepared
        .graph
        .loops
        .iter()
        .map(|signed| compose_loop(signed, &monodromy, n))
        .collect();

    let presentation = if prepared.monic {
        vk_quotient(&braids, n)
    } else {
        let height = trivializing_line_height(&prepared.discy, &prepared.roots)?;
        debug!(%height, "trivializing line height found for non-monic curve");
        db_vk_quotient(&braids, n, n)
    };

    Ok(PipelineResult {
        curve: prepared.curve,
        discy: prepared.discy,
        roots: prepared.roots,
        graph: prepared.graph,
        zeros: prepared.zeros,
        monodromy,
        braids,
        presentation,
    })
}

/// Run all three stages in sequence, for callers that do not need the
/// per-segment parallelism.
///
/// # Errors
///
/// Anything [`prepare`] or [`run_segments`] can return.
pub fn run(curve: &BiPoly, config: &Config) -> Result<PipelineResult> {
    let prepared = prepare(curve, config)?;
    let monodromy = run_segments(&prepared, config)?;
    finish(prepared, monodromy)
}

fn compose_loop(signed: &[i32], monodromy: &[Braid], n: usize) -> Braid {
    signed.iter().fold(Braid::identity(n), |acc, &s| {
        let idx = (s.unsigned_abs() as usize) - 1;
        if s > 0 {
            acc.compose(&monodromy[idx])
        } else {
            acc.compose(&monodromy[idx].inverse())
        }
    })
}

/// `Δ(y) = Res_x(P, dP/dx)/lead_x(P) * vertical_part(P)`, `spec.md` §3.
fn combined_discriminant(curve: &BiPoly) -> Poly<Rational> {
    let disc = curve.discriminant_y();
    let vertical = curve.vertical_part();
    &disc * &vertical
}

/// Cast `discy`'s exact rational coefficients down to `f64` and certify
/// its complex roots.
fn discriminant_roots(discy: &Poly<Rational>, config: &Config) -> Result<Vec<C>> {
    if discy.degree().unwrap_or(0) == 0 {
        return Ok(Vec::new());
    }
    let coeffs: Vec<C> = discy.as_slice().iter().map(|c| C::new(c.to_f64().unwrap_or(0.0), 0.0)).collect();
    separate_roots(&Poly::new_from_coeffs(&coeffs), config.safety, config.newton_limit)
}

/// `true` if `P`'s top `x`-degree coefficient (as a polynomial in `y`) is
/// a nonzero constant — every fibre then has the same number of roots.
fn is_monic(curve: &BiPoly) -> bool {
    let as_x = curve.as_poly_x();
    as_x.leading_coeff().degree() == Some(0)
}

/// How many increasing integer heights to try past the minimal safe one
/// before giving up (`spec.md` §9's "bounded retry loop").
const TRIVIALIZING_HEIGHT_RETRIES: i64 = 16;

/// Pick the rational height `h` of the trivializing horizontal line used by
/// [`db_vk_quotient`] for non-monic curves: strictly above every critical
/// value's real part by a margin of at least the critical values' minimum
/// pairwise separation ("dispersal"), then nudged upward by whole integers
/// until `discy(h) != 0` exactly.
///
/// # Errors
///
/// [`Error::InvalidConfig`] if every height tried within the retry budget
/// is itself a root of `discy`.
fn trivializing_line_height(discy: &Poly<Rational>, roots: &[C]) -> Result<Rational> {
    let max_re = roots.iter().map(|z| z.re).fold(f64::NEG_INFINITY, f64::max);
    let max_re = if max_re.is_finite() { max_re } else { 0.0 };
    let dispersal = crate::numeric::nearest_pair(roots);
    let dispersal = if dispersal.is_finite() { dispersal } else { 1.0 };
    let base = (max_re + dispersal).ceil() as i64;

    for attempt in 0..TRIVIALIZING_HEIGHT_RETRIES {
        let h = Rational::from_integer((base + attempt).into());
        if !discy.eval(&h).is_zero() {
            return Ok(h);
        }
        warn!(height = base + attempt, "trivializing line height is itself a critical value, retrying");
    }
    Err(Error::InvalidConfig)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::from_integer(n.into())
    }

    /// `y - x`: a smooth line, graph of a function of `x`, so it has no
    /// branch points at all and trivial monodromy.
    fn a_line() -> BiPoly {
        BiPoly::from_grid(vec![vec![r(0), r(-1)], vec![r(1)]])
    }

    /// `x^2 - 1`: two parallel vertical lines, independent of `y`.
    fn two_vertical_lines() -> BiPoly {
        BiPoly::from_grid(vec![vec![r(-1), r(0), r(1)]])
    }

    #[test]
    fn prepare_of_a_smooth_line_has_no_branch_points() {
        let config = Config::default();
        let prepared = prepare(&a_line(), &config).unwrap();
        assert!(prepared.roots.is_empty());
        assert!(prepared.graph.loops.is_empty());
        assert!(prepared.monic);
    }

    #[test]
    fn run_of_a_smooth_line_has_a_presentation_with_no_relations() {
        let config = Config::default();
        let result = run(&a_line(), &config).unwrap();
        assert!(result.presentation.relations.is_empty());
        assert_eq!(1, result.presentation.generators);
    }

    #[test]
    fn is_monic_holds_for_a_curve_with_constant_leading_x_coefficient() {
        assert!(is_monic(&a_line()));
        assert!(is_monic(&two_vertical_lines()));
    }

    #[test]
    fn trivializing_line_height_clears_the_lone_critical_value() {
        // disc(y) = y - 5 has its only critical value at y = 5.
        let discy = Poly::new_from_coeffs(&[r(-5), r(1)]);
        let roots = vec![C::new(5.0, 0.0)];
        let h = trivializing_line_height(&discy, &roots).unwrap();
        assert!(h > r(5));
        assert!(!discy.eval(&h).is_zero());
    }

    #[test]
    fn trivializing_line_height_reports_invalid_config_when_discy_is_always_zero() {
        let discy = Poly::<Rational>::zero();
        let roots = vec![C::new(0.0, 0.0)];
        let err = trivializing_line_height(&discy, &roots).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig));
    }

    /// `x*y - 1`: a hyperbola, non-monic (leading x-coefficient is `y`,
    /// not a constant) with a single degenerate fibre at `y = 0`.
    fn a_hyperbola() -> BiPoly {
        BiPoly::from_grid(vec![vec![r(-1), r(0)], vec![r(0), r(1)]])
    }

    #[test]
    fn run_of_a_non_monic_curve_goes_through_the_trivializing_line_path() {
        let config = Config::default();
        let prepared = prepare(&a_hyperbola(), &config).unwrap();
        assert!(!prepared.monic);
        let monodromy = run_segments(&prepared, &config).unwrap();
        let loop_count = prepared.graph.loops.len();
        let n = prepared.zeros[prepared.graph.basepoint].len();
        let result = finish(prepared, monodromy).unwrap();
        assert_eq!(n + loop_count, result.presentation.generators);
    }
}
