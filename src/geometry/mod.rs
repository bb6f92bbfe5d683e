//! Planar geometry helpers for the loop constructor (`spec.md` §4.D).
//!
//! Every function here is a pure function of its complex-number
//! arguments — no shared state, matching the "all intermediate
//! computations are pure functions of their inputs" invariant of §5.

use crate::numeric::{primitive_root, C};

/// Euclidean distance from `z` to the closed segment `[a, b]`.
#[must_use]
pub fn dist_seg(z: C, a: C, b: C) -> f64 {
    let ab = b - a;
    let len_sqr = ab.norm_sqr();
    if len_sqr == 0.0 {
        return (z - a).norm();
    }
    let t = ((z - a).re * ab.re + (z - a).im * ab.im) / len_sqr;
    let t = t.clamp(0.0, 1.0);
    let closest = a + ab * t;
    (z - closest).norm()
}

/// The two endpoints of the perpendicular bisector of `[x, y]`, each at
/// distance `|x - y|` from the midpoint, along the bisector.
#[must_use]
pub fn mediatrix(x: C, y: C) -> (C, C) {
    let mid = (x + y) / 2.0;
    let d = y - x;
    if d.norm() == 0.0 {
        return (mid, mid);
    }
    // Rotating d by +-90 degrees (multiplication by +-i) gives a vector of
    // the same length |x - y| along the bisector direction.
    let perp = C::new(-d.im, d.re);
    (mid + perp, mid - perp)
}

/// Intersection of lines `(x1 x2)` and `(y1 y2)`, or `None` if the lines
/// are parallel (including when either pair of endpoints coincides).
#[must_use]
pub fn crossing(x1: C, x2: C, y1: C, y2: C) -> Option<C> {
    let d1 = x2 - x1;
    let d2 = y2 - y1;
    if d1.norm() == 0.0 || d2.norm() == 0.0 {
        return None;
    }
    // Solve x1 + t*d1 = y1 + s*d2 via the 2x2 linear system in (t, s).
    let denom = d1.re * d2.im - d1.im * d2.re;
    if denom.abs() < 1e-12 {
        return None;
    }
    let rhs = y1 - x1;
    let t = (rhs.re * d2.im - rhs.im * d2.re) / denom;
    Some(x1 + d1 * t)
}

/// Sort `list` trigonometrically around `c`, starting just below the
/// negative imaginary axis (the direction `-i`) and proceeding
/// counter-clockwise.
#[must_use]
pub fn cycorder(list: &[C], c: C) -> Vec<C> {
    let start = -std::f64::consts::FRAC_PI_2 + 1e-9;
    let mut with_angle: Vec<(f64, C)> = list
        .iter()
        .map(|&p| {
            let d = p - c;
            let mut theta = d.im.atan2(d.re) - start;
            while theta < 0.0 {
                theta += std::f64::consts::TAU;
            }
            while theta >= std::f64::consts::TAU {
                theta -= std::f64::consts::TAU;
            }
            (theta, p)
        })
        .collect();
    with_angle.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    with_angle.into_iter().map(|(_, p)| p).collect()
}

/// Sublist of `list` consisting of the points `y` for which no other point
/// of `list` lies in the closed disk with diameter `[c, y]` — the
/// Voronoi-adjacent "neighbours" of `c` among `list`.
#[must_use]
pub fn neighbours(list: &[C], c: C) -> Vec<C> {
    list.iter()
        .copied()
        .filter(|&y| {
            let mid = (c + y) / 2.0;
            let radius = (y - c).norm() / 2.0;
            !list
                .iter()
                .any(|&z| z != y && z != c && (z - mid).norm() <= radius + 1e-12)
        })
        .collect()
}

/// For the current Voronoi-polygon vertex cycle `cells` (with parallel
/// witness list `witnesses`), mark which edges the mediatrix of `(y, z)`
/// crosses when `z` is proposed as an additional witness.
///
/// Returns one boolean per edge of `cells` (edge `i` joins `cells[i]` and
/// `cells[(i+1) % len]`).
#[must_use]
pub fn detects_left_crossing(cells: &[C], witnesses: &[C], y: C, z: C) -> Vec<bool> {
    debug_assert_eq!(cells.len(), witnesses.len());
    let (m1, m2) = mediatrix(y, z);
    let n = cells.len();
    (0..n)
        .map(|i| {
            let a = cells[i];
            let b = cells[(i + 1) % n];
            crossing(m1, m2, a, b)
                .map(|p| dist_seg(p, a, b) < 1e-9)
                .unwrap_or(false)
        })
        .collect()
}

/// A single generator of the primitive-root perturbation used to break
/// ties when a witness lies exactly on a previous polygon edge.
#[must_use]
pub fn tie_break_epsilon(k: i64) -> C {
    primitive_root(360, k) * 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_seg_to_endpoint_when_projection_falls_outside() {
        let z = C::new(-1.0, 0.0);
        let a = C::new(0.0, 0.0);
        let b = C::new(1.0, 0.0);
        assert!((dist_seg(z, a, b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dist_seg_to_perpendicular_foot() {
        let z = C::new(0.5, 1.0);
        let a = C::new(0.0, 0.0);
        let b = C::new(1.0, 0.0);
        assert!((dist_seg(z, a, b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mediatrix_endpoints_equidistant_from_inputs() {
        let x = C::new(0.0, 0.0);
        let y = C::new(2.0, 0.0);
        let (p, q) = mediatrix(x, y);
        assert!(((p - x).norm() - (p - y).norm()).abs() < 1e-9);
        assert!(((q - x).norm() - (q - y).norm()).abs() < 1e-9);
    }

    #[test]
    fn crossing_of_perpendicular_lines() {
        let p = crossing(C::new(-1.0, 0.0), C::new(1.0, 0.0), C::new(0.0, -1.0), C::new(0.0, 1.0));
        assert_eq!(Some(C::new(0.0, 0.0)), p);
    }

    #[test]
    fn crossing_of_parallel_lines_is_none() {
        let p = crossing(C::new(0.0, 0.0), C::new(1.0, 0.0), C::new(0.0, 1.0), C::new(1.0, 1.0));
        assert!(p.is_none());
    }

    #[test]
    fn cycorder_starts_below_negative_imaginary_axis() {
        let pts = vec![C::new(1.0, 0.0), C::new(0.0, -1.0), C::new(-1.0, 0.0), C::new(0.0, 1.0)];
        let sorted = cycorder(&pts, C::new(0.0, 0.0));
        assert_eq!(C::new(0.0, -1.0), sorted[0]);
    }

    #[test]
    fn neighbours_excludes_points_behind_a_closer_one() {
        let c = C::new(0.0, 0.0);
        let near = C::new(1.0, 0.0);
        let far = C::new(2.0, 0.0); // lies in the disk of diameter [c, far] trivially, but also
                                     // behind `near` on the same ray: the disk of diameter
                                     // [c, far] contains `near`, so `far` is not a neighbour.
        let result = neighbours(&[near, far], c);
        assert_eq!(vec![near], result);
    }
}
