//! Loop graph properties, `spec.md` §8: `shrink` reaches a fixpoint and
//! every root gets its own loop, regardless of how many roots there are
//! or where they sit.

use proptest::prelude::*;
use vankampen::loops::{build_loops, shrink};
use vankampen::numeric::C;

#[test]
fn shrink_is_idempotent_on_already_reduced_words() {
    let reduced = vec![1, 2, 3, -1];
    assert_eq!(reduced.clone(), shrink(reduced));
}

#[test]
fn shrink_fully_cancels_a_word_and_its_reverse_negation() {
    let word = vec![1, 2, 3];
    let mut round_trip = word.clone();
    round_trip.extend(word.iter().rev().map(|g| -g));
    assert!(shrink(round_trip).is_empty());
}

proptest! {
    #[test]
    fn shrink_of_any_word_is_a_fixpoint_of_shrink(word in prop::collection::vec(-5i32..=5, 0..20).prop_filter("no zero generators", |w| w.iter().all(|&g| g != 0))) {
        let once = shrink(word);
        let twice = shrink(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn build_loops_produces_one_loop_per_root(count in 1usize..8) {
        let roots: Vec<C> = (0..count).map(|k| C::new(k as f64 * 2.0, (k % 2) as f64)).collect();
        let graph = build_loops(&roots);
        prop_assert_eq!(graph.loops.len(), count);
        prop_assert_eq!(graph.order.len(), count);
        for l in &graph.loops {
            prop_assert_eq!(l.clone(), shrink(l.clone()));
        }
    }

    #[test]
    fn every_loop_starts_and_ends_at_the_basepoint_segment_set(count in 2usize..6) {
        let roots: Vec<C> = (0..count).map(|k| C::new((k as f64).cos() * 3.0, (k as f64).sin() * 3.0)).collect();
        let graph = build_loops(&roots);
        // every segment index used by a loop is a valid index into `segments`
        for l in &graph.loops {
            for &s in l {
                let idx = (s.unsigned_abs() as usize) - 1;
                prop_assert!(idx < graph.segments.len());
            }
        }
    }
}
