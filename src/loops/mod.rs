//! Planar loop graph construction around the roots of the discriminant
//! (`spec.md` §4.E): an approximate Voronoi / mediatrix "honeycomb" of
//! loops, one per root, all based at a common `basepoint`, that generate
//! `pi_1(C - R, basepoint)`.

use crate::geometry::{crossing, cycorder, mediatrix, neighbours};
use crate::numeric::C;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The planar loop graph `spec.md` §3 describes: a point set, the
/// segments joining them, and each root's loop as a signed sequence of
/// segment indices (negative meaning "traversed in reverse").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopGraph {
    /// Every vertex that appears in some segment, `points[basepoint]`
    /// being the common basepoint of all loops.
    pub points: Vec<C>,
    /// Undirected edges between `points` indices, `segments[i].0 <
    /// segments[i].1`.
    pub segments: Vec<(usize, usize)>,
    /// `loops[k]` is the signed segment-index sequence (1-based, negative
    /// for reverse traversal) of the loop encircling `order[k]`.
    pub loops: Vec<Vec<i32>>,
    /// Index into `points` of the shared basepoint.
    pub basepoint: usize,
    /// `order[k]` is the index, into the `roots` slice passed to
    /// [`build_loops`], of the root that `loops[k]` encircles.
    pub order: Vec<usize>,
}

const MERGE_EPS: f64 = 1e-9;

/// Build the loop graph for a list of (distinct) complex roots.
///
/// Follows a five-step recipe (build each root's Voronoi cell, a spanning
/// tree over the roots, a handle from the basepoint to each cell, then the
/// loop itself), with two simplifications recorded in `DESIGN.md`: the
/// spanning tree is a plain Euclidean minimum spanning tree rather than one
/// restricted to "lovers" edges, and each Voronoi cell is clipped against
/// every other root rather than only its neighbour candidates — both
/// produce the same geometric result, just by doing asymptotically more
/// work than the incremental construction this trades away.
#[must_use]
pub fn build_loops(roots: &[C]) -> LoopGraph {
    if roots.is_empty() {
        return LoopGraph {
            points: vec![C::new(0.0, 0.0)],
            segments: Vec::new(),
            loops: Vec::new(),
            basepoint: 0,
            order: Vec::new(),
        };
    }

    let centroid = roots.iter().fold(C::new(0.0, 0.0), |acc, &z| acc + z) / roots.len() as f64;
    let mut order: Vec<usize> = (0..roots.len()).collect();
    order.sort_by(|&i, &j| {
        (roots[i] - centroid).norm().partial_cmp(&(roots[j] - centroid).norm()).unwrap()
    });
    let sorted: Vec<C> = order.iter().map(|&i| roots[i]).collect();
    let d = sorted.len();

    let basepoint_point = choose_basepoint(&sorted, centroid);
    let box_corners = bounding_box(&sorted);

    let cells: Vec<Vec<C>> = (0..d).map(|i| voronoi_cell(i, &sorted, &box_corners)).collect();
    let parent = minimum_spanning_tree(&sorted);

    let mut raw_walks: Vec<Vec<C>> = Vec::with_capacity(d);
    for i in 0..d {
        let path = tree_path(&parent, i);
        let handle = handle_points(&sorted, &path, basepoint_point);
        let target_mid = *handle.last().unwrap();
        let circle = rotate_to_nearest(&cells[i], target_mid);
        raw_walks.push(raw_walk(&handle, &circle));
    }

    let (points, segments, loops) = convert_loops(basepoint_point, &raw_walks);
    LoopGraph {
        points,
        segments,
        loops,
        basepoint: 0,
        order,
    }
}

/// A point well outside the bounding box of the roots, along the
/// direction away from the centroid that `cycorder` itself treats as the
/// start of its angular sweep (`-i`), so every loop's handle departs
/// "downward" from the basepoint.
fn choose_basepoint(roots: &[C], centroid: C) -> C {
    let spread = roots.iter().map(|&z| (z - centroid).norm()).fold(0.0_f64, f64::max).max(1.0);
    centroid + C::new(0.0, -(spread * 3.0 + 1.0))
}

fn bounding_box(roots: &[C]) -> [C; 4] {
    let margin = roots
        .iter()
        .map(|&z| z.norm())
        .fold(1.0_f64, f64::max)
        * 4.0
        + 10.0;
    let min_re = roots.iter().map(|z| z.re).fold(f64::INFINITY, f64::min) - margin;
    let max_re = roots.iter().map(|z| z.re).fold(f64::NEG_INFINITY, f64::max) + margin;
    let min_im = roots.iter().map(|z| z.im).fold(f64::INFINITY, f64::min) - margin;
    let max_im = roots.iter().map(|z| z.im).fold(f64::NEG_INFINITY, f64::max) + margin;
    [
        C::new(min_re, min_im),
        C::new(max_re, min_im),
        C::new(max_re, max_im),
        C::new(min_re, max_im),
    ]
}

/// The Voronoi cell of `sorted[i]` among `sorted`, clipped to the
/// bounding box: start from the box, then Sutherland-Hodgman-clip against
/// the perpendicular-bisector half-plane of every other root.
fn voronoi_cell(i: usize, sorted: &[C], box_corners: &[C; 4]) -> Vec<C> {
    let y = sorted[i];
    let mut cell: Vec<C> = box_corners.to_vec();
    let others: Vec<C> = sorted.iter().copied().filter(|&z| z != y).collect();
    for z in cycorder(&others, y) {
        let (m1, m2) = mediatrix(y, z);
        let mut clipped = Vec::with_capacity(cell.len() + 1);
        let n = cell.len();
        for k in 0..n {
            let a = cell[k];
            let b = cell[(k + 1) % n];
            let a_in = (a - y).norm_sqr() <= (a - z).norm_sqr();
            let b_in = (b - y).norm_sqr() <= (b - z).norm_sqr();
            if a_in {
                clipped.push(a);
            }
            if a_in != b_in {
                if let Some(p) = crossing(m1, m2, a, b) {
                    clipped.push(p);
                }
            }
        }
        if clipped.len() >= 3 {
            cell = clipped;
        }
    }
    cycorder(&cell, y)
}

/// Prim's algorithm over the complete graph on `sorted`, returning each
/// node's parent in the tree (node `0` is the root, its own parent).
fn minimum_spanning_tree(sorted: &[C]) -> Vec<usize> {
    let d = sorted.len();
    let mut parent = vec![0usize; d];
    let mut in_tree = vec![false; d];
    let mut best_dist = vec![f64::INFINITY; d];
    in_tree[0] = true;
    for j in 1..d {
        best_dist[j] = (sorted[j] - sorted[0]).norm();
        parent[j] = 0;
    }
    for _ in 1..d {
        let next = (0..d)
            .filter(|&j| !in_tree[j])
            .min_by(|&a, &b| best_dist[a].partial_cmp(&best_dist[b]).unwrap());
        let Some(next) = next else { break };
        in_tree[next] = true;
        for j in 0..d {
            if !in_tree[j] {
                let dist = (sorted[j] - sorted[next]).norm();
                if dist < best_dist[j] {
                    best_dist[j] = dist;
                    parent[j] = next;
                }
            }
        }
    }
    parent
}

/// The tree-path from the root (index `0`) to `i`, root first.
fn tree_path(parent: &[usize], i: usize) -> Vec<usize> {
    let mut path = vec![i];
    let mut cur = i;
    while cur != 0 {
        cur = parent[cur];
        path.push(cur);
    }
    path.reverse();
    path
}

/// `[basepoint, mid(path[0],path[1]), mid(path[1],path[2]), ...,
/// mid(path[-2],path[-1])]` — a simplified stand-in for `spec.md`'s
/// `handle[i]` (a concatenation of Voronoi-cell half-circles along the
/// tree path): this walks straight between consecutive tree-path
/// midpoints instead, recorded as a simplification in `DESIGN.md`.
fn handle_points(sorted: &[C], path: &[usize], basepoint: C) -> Vec<C> {
    let mut pts = vec![basepoint];
    for w in path.windows(2) {
        pts.push((sorted[w[0]] + sorted[w[1]]) / 2.0);
    }
    if path.len() == 1 {
        pts.push(sorted[path[0]]);
    }
    pts
}

/// Rotate a cyclic point list so its first element is the one closest to
/// `target`.
fn rotate_to_nearest(cell: &[C], target: C) -> Vec<C> {
    let start = (0..cell.len())
        .min_by(|&a, &b| (cell[a] - target).norm().partial_cmp(&(cell[b] - target).norm()).unwrap())
        .unwrap_or(0);
    cell.iter().cycle().skip(start).take(cell.len()).copied().collect()
}

/// `handle . circle . reverse(handle)`, as an open point-to-point walk.
fn raw_walk(handle: &[C], circle: &[C]) -> Vec<C> {
    let mut walk = handle.to_vec();
    if !circle.is_empty() {
        walk.extend(circle.iter().skip(1).copied());
        walk.push(circle[0]);
    }
    let mut back: Vec<C> = handle.to_vec();
    back.reverse();
    walk.extend(back.into_iter().skip(1));
    walk
}

/// Deduplicate points (within [`MERGE_EPS`]) across all walks, build the
/// segment list, and encode each walk as a signed segment-index sequence,
/// then `shrink` every loop to a fixpoint by cancelling adjacent
/// back-tracks.
fn convert_loops(basepoint: C, walks: &[Vec<C>]) -> (Vec<C>, Vec<(usize, usize)>, Vec<Vec<i32>>) {
    let mut points = vec![basepoint];
    let mut segments = Vec::new();
    let mut segment_index: HashMap<(usize, usize), usize> = HashMap::new();
    let mut loops = Vec::with_capacity(walks.len());

    for walk in walks {
        let mut signed = Vec::with_capacity(walk.len());
        let mut prev = dedup_point(&mut points, walk[0]);
        for &p in &walk[1..] {
            let idx = dedup_point(&mut points, p);
            if idx == prev {
                continue;
            }
            let (lo, hi, sign) = if prev < idx { (prev, idx, 1) } else { (idx, prev, -1) };
            let seg = *segment_index.entry((lo, hi)).or_insert_with(|| {
                segments.push((lo, hi));
                segments.len() - 1
            });
            signed.push(sign * (seg as i32 + 1));
            prev = idx;
        }
        loops.push(shrink(signed));
    }

    (points, segments, loops)
}

fn dedup_point(points: &mut Vec<C>, p: C) -> usize {
    if let Some(i) = points.iter().position(|&q| (q - p).norm() < MERGE_EPS) {
        return i;
    }
    points.push(p);
    points.len() - 1
}

/// Cancel adjacent `(s, -s)` back-tracks to a fixpoint, the same
/// stack-based free reduction [`crate::braid::Braid`] and
/// [`crate::group`] use.
#[must_use]
pub fn shrink(signed: Vec<i32>) -> Vec<i32> {
    let mut stack: Vec<i32> = Vec::with_capacity(signed.len());
    for g in signed {
        if stack.last() == Some(&-g) {
            stack.pop();
        } else {
            stack.push(g);
        }
    }
    stack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_loops_of_empty_roots_has_no_loops() {
        let graph = build_loops(&[]);
        assert!(graph.loops.is_empty());
    }

    #[test]
    fn build_loops_of_a_single_root_has_one_loop() {
        let graph = build_loops(&[C::new(0.0, 0.0)]);
        assert_eq!(1, graph.loops.len());
        assert_eq!(vec![0], graph.order);
    }

    #[test]
    fn build_loops_of_two_roots_has_two_loops_sharing_a_basepoint() {
        let graph = build_loops(&[C::new(-1.0, 0.0), C::new(1.0, 0.0)]);
        assert_eq!(2, graph.loops.len());
        assert_eq!(2, graph.order.len());
        for l in &graph.loops {
            assert!(!l.is_empty());
        }
    }

    #[test]
    fn shrink_cancels_an_immediate_backtrack() {
        assert_eq!(Vec::<i32>::new(), shrink(vec![1, -1]));
        assert_eq!(vec![2], shrink(vec![1, 2, -1, 1]));
    }

    #[test]
    fn neighbours_based_graph_stays_available_for_diagnostics() {
        // `neighbours` is re-exported from `geometry` and used directly by
        // anything inspecting why two roots ended up as tree siblings; not
        // exercised by `build_loops` itself (which uses a full MST), but
        // kept importable so callers can explain the tree.
        let pts = [C::new(0.0, 0.0), C::new(1.0, 0.0), C::new(2.0, 0.0)];
        assert!(!neighbours(&pts, C::new(0.0, 0.0)).is_empty());
    }
}
