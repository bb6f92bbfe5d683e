//! Monodromy followers and the linear braid reconstructor (`spec.md`
//! §4.F-H): turning the motion of a polynomial's roots along a segment of
//! the loop graph into an element of `Bₙ`.

pub mod approx;
pub mod certified;
pub mod sturm;

pub use approx::approximate_follower;
pub use certified::certified_follower;

use crate::braid::Braid;
use crate::error::{Error, Result};
use crate::numeric::C;

/// Reconstruct the braid produced by the straight-line homotopy
/// `t -> (1-t)*v1 + t*v2` between two `n`-tuples of distinct points
/// (`spec.md` §4.F).
///
/// # Errors
///
/// Returns [`Error::SingularMonodromy`] if, even after lexicographic
/// desingularisation, some instant sees more real parts coincide than the
/// desingularisation step can resolve (should not happen for inputs
/// produced by this pipeline's own monodromy followers).
pub fn lbraid_to_word(v1: &[C], v2: &[C]) -> Result<Braid> {
    let n = v1.len();
    assert_eq!(n, v2.len(), "lbraid_to_word: mismatched strand counts");
    if n <= 1 {
        return Ok(Braid::identity(n));
    }

    let (v1, v2) = desingularize(v1, v2)?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| v1[a].re.partial_cmp(&v1[b].re).unwrap());
    let mut pos = vec![0usize; n];
    for (k, &s) in order.iter().enumerate() {
        pos[s] = k;
    }

    let mut crossings: Vec<(f64, usize, usize)> = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let num = v1[j].re - v1[i].re;
            let den = (v2[i].re - v2[j].re) - (v1[i].re - v1[j].re);
            if den.abs() < 1e-14 {
                continue;
            }
            let t = num / den;
            if t <= 1e-9 || t >= 1.0 - 1e-9 {
                continue;
            }
            let before = v1[i].re - v1[j].re;
            let after = v2[i].re - v2[j].re;
            if before.signum() != after.signum() {
                crossings.push((t, i, j));
            }
        }
    }
    crossings.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    let mut braid = Braid::identity(n);
    let mut idx = 0;
    while idx < crossings.len() {
        let t0 = crossings[idx].0;
        let mut group = vec![crossings[idx]];
        let mut j = idx + 1;
        while j < crossings.len() && (crossings[j].0 - t0).abs() < 1e-6 {
            group.push(crossings[j]);
            j += 1;
        }
        idx = j;

        let mut strands: Vec<usize> = group.iter().flat_map(|&(_, a, b)| [a, b]).collect();
        strands.sort_unstable();
        strands.dedup();
        let positions: Vec<usize> = strands.iter().map(|&s| pos[s]).collect();
        let min_pos = *positions.iter().min().unwrap();
        let max_pos = *positions.iter().max().unwrap();
        let width = max_pos - min_pos + 1;
        if width != strands.len() {
            return Err(Error::SingularMonodromy);
        }

        // `Braid::star` always builds the canonical "ascending strands pass
        // to the front" word; the colliding block's actual orientation
        // depends on which strand is in front at the collision instant,
        // decided by imaginary part (`spec.md` §4.F): compare the strand
        // at the leftmost position against the one at the rightmost, the
        // same comparison the former width == 2 special case made, and
        // invert the star braid when that order is reversed.
        let s_lo = strands.iter().copied().find(|&s| pos[s] == min_pos).unwrap();
        let s_hi = strands.iter().copied().find(|&s| pos[s] == max_pos).unwrap();
        let star = Braid::star(n, min_pos, width);
        let star = if v1[s_lo].im >= v1[s_hi].im { star } else { star.inverse() };
        braid = braid.compose(&star);
        order[min_pos..=max_pos].reverse();
        for (p, &s) in order[min_pos..=max_pos].iter().enumerate() {
            pos[s] = min_pos + p;
        }
    }

    Ok(braid)
}

/// Lexicographic desingularisation: if any two points among `v1`/`v2` share
/// a real part exactly, multiply every point in both configurations by
/// `1 - i*tan(theta)/2` for increasingly small `theta` until the
/// coincidence is broken.
fn desingularize(v1: &[C], v2: &[C]) -> Result<(Vec<C>, Vec<C>)> {
    let mut theta = 0.0;
    for attempt in 0..32 {
        let rotated1: Vec<C> = v1.iter().map(|&z| rotate(z, theta)).collect();
        let rotated2: Vec<C> = v2.iter().map(|&z| rotate(z, theta)).collect();
        if !has_tie(&rotated1) && !has_tie(&rotated2) {
            return Ok((rotated1, rotated2));
        }
        theta = 1e-3 / 2f64.powi(attempt);
    }
    Err(Error::SingularMonodromy)
}

fn rotate(z: C, theta: f64) -> C {
    if theta == 0.0 {
        return z;
    }
    z * C::new(1.0, -theta.tan() / 2.0)
}

fn has_tie(points: &[C]) -> bool {
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if (points[i].re - points[j].re).abs() < 1e-13 {
                return true;
            }
        }
    }
    false
}

/// Re-index `found` as the closest-point bijection onto `target`, shared by
/// both followers' final "snap to the known endpoint fibre" step.
///
/// # Errors
///
/// [`Error::FitAmbiguous`] if some found point is nearly equidistant
/// between two targets, if some found point's displacement from its match
/// exceeds one tenth of `target`'s minimum pairwise distance, or if the
/// resulting assignment is not a bijection.
pub(crate) fn fit(found: &[C], target: &[C]) -> Result<Vec<C>> {
    let n = found.len();
    assert_eq!(n, target.len(), "fit: mismatched strand counts");
    let max_displacement = crate::numeric::nearest_pair(target) / 10.0;
    let mut assignment = vec![None; n];
    for (i, z) in found.iter().enumerate() {
        let mut ranked: Vec<(f64, usize)> =
            target.iter().enumerate().map(|(j, w)| (crate::numeric::dist(*z, *w), j)).collect();
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        let best = ranked[0];
        if let Some(second) = ranked.get(1) {
            if second.0 - best.0 < 1e-6 {
                return Err(Error::FitAmbiguous {
                    reason: format!("point {i} is nearly equidistant between two fibre points"),
                });
            }
        }
        if best.0 > max_displacement {
            return Err(Error::FitAmbiguous {
                reason: format!(
                    "point {i} displaced {} from its nearest fibre point, exceeding the tolerance {max_displacement}",
                    best.0
                ),
            });
        }
        assignment[i] = Some(best.1);
    }
    let mut used = vec![false; n];
    let mut out = vec![C::new(0.0, 0.0); n];
    for (i, slot) in assignment.into_iter().enumerate() {
        let j = slot.expect("every point was ranked above");
        if used[j] {
            return Err(Error::FitAmbiguous {
                reason: format!("fibre point {j} claimed by more than one strand"),
            });
        }
        used[j] = true;
        out[i] = target[j];
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lbraid_to_word_of_stationary_points_is_identity() {
        let v = vec![C::new(0.0, 0.0), C::new(1.0, 0.0), C::new(2.0, 0.0)];
        let b = lbraid_to_word(&v, &v).unwrap();
        assert!(b.is_identity());
    }

    #[test]
    fn lbraid_to_word_of_a_simple_swap_has_one_crossing() {
        let v1 = vec![C::new(0.0, 0.1), C::new(1.0, -0.1)];
        let v2 = vec![C::new(1.0, 0.1), C::new(0.0, -0.1)];
        let b = lbraid_to_word(&v1, &v2).unwrap();
        assert_eq!(1, b.reflection_length());
    }

    #[test]
    fn lbraid_to_word_of_no_crossing_is_identity() {
        let v1 = vec![C::new(0.0, 0.0), C::new(1.0, 0.0)];
        let v2 = vec![C::new(0.1, 0.5), C::new(1.1, 0.5)];
        let b = lbraid_to_word(&v1, &v2).unwrap();
        assert!(b.is_identity());
    }

    #[test]
    fn simultaneous_triple_collision_respects_imaginary_part_order() {
        // Three strands starting in ascending real-part order and ending in
        // the reverse order all collide at t = 1/2. The strand with the
        // greatest imaginary part at the crossing instant should pass in
        // front, giving the ordinary (non-inverted) star braid.
        let v1 = vec![C::new(0.0, 0.3), C::new(1.0, 0.2), C::new(2.0, 0.1)];
        let v2 = vec![C::new(2.0, 0.3), C::new(1.0, 0.2), C::new(0.0, 0.1)];
        let forward = lbraid_to_word(&v1, &v2).unwrap();
        assert_eq!(Braid::star(3, 0, 3), forward);

        // Reversing the imaginary parts (so the *lowest*-real-part strand is
        // now behind, not in front) must flip the handedness of every
        // crossing: the reconstructed braid is the inverse star braid, not
        // the same one.
        let v1_rev = vec![C::new(0.0, 0.1), C::new(1.0, 0.2), C::new(2.0, 0.3)];
        let v2_rev = vec![C::new(2.0, 0.1), C::new(1.0, 0.2), C::new(0.0, 0.3)];
        let backward = lbraid_to_word(&v1_rev, &v2_rev).unwrap();
        assert_eq!(Braid::star(3, 0, 3).inverse(), backward);
        assert_ne!(forward, backward);
    }
}
