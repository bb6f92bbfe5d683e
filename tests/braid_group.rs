//! Group-law properties of `Braid` and the Hurwitz action, `spec.md`
//! §8's "braid group laws" and "Hurwitz action" universal properties.

use proptest::prelude::*;
use vankampen::braid::Braid;
use vankampen::group::hurwitz_action;

const STRANDS: usize = 5;

fn arb_generator() -> impl Strategy<Value = i32> {
    (1..STRANDS as i32).prop_flat_map(|i| prop_oneof![Just(i), Just(-i)])
}

fn arb_word(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(arb_generator(), 0..max_len)
}

proptest! {
    #[test]
    fn composing_with_identity_is_a_no_op(word in arb_word(12)) {
        let b = Braid::from_word(STRANDS, word);
        prop_assert_eq!(&b, &b.compose(&Braid::identity(STRANDS)));
        prop_assert_eq!(&b, &Braid::identity(STRANDS).compose(&b));
    }

    #[test]
    fn composing_with_its_own_inverse_is_identity(word in arb_word(12)) {
        let b = Braid::from_word(STRANDS, word);
        prop_assert!(b.compose(&b.inverse()).is_identity());
        prop_assert!(b.inverse().compose(&b).is_identity());
    }

    #[test]
    fn inverse_is_an_involution(word in arb_word(12)) {
        let b = Braid::from_word(STRANDS, word);
        prop_assert_eq!(b.clone(), b.inverse().inverse());
    }

    #[test]
    fn composition_is_associative(a in arb_word(6), b in arb_word(6), c in arb_word(6)) {
        let (a, b, c) = (Braid::from_word(STRANDS, a), Braid::from_word(STRANDS, b), Braid::from_word(STRANDS, c));
        prop_assert_eq!(a.compose(&b).compose(&c), a.compose(&b.compose(&c)));
    }

    #[test]
    fn hurwitz_action_of_identity_braid_always_fixes_the_basis(n in 2usize..6) {
        let tuple = hurwitz_action(&Braid::identity(n), n);
        let expected: Vec<Vec<i32>> = (1..=n as i32).map(|i| vec![i]).collect();
        prop_assert_eq!(tuple, expected);
    }

    #[test]
    fn hurwitz_action_of_a_braid_and_its_inverse_cancel_back_to_the_basis(word in arb_word(10)) {
        let b = Braid::from_word(STRANDS, word);
        let round_trip = b.compose(&b.inverse());
        let tuple = hurwitz_action(&round_trip, STRANDS);
        let expected: Vec<Vec<i32>> = (1..=STRANDS as i32).map(|i| vec![i]).collect();
        prop_assert_eq!(tuple, expected);
    }
}

#[test]
fn star_braid_on_two_strands_is_a_single_crossing() {
    let star = Braid::star(3, 0, 2);
    assert_eq!(Braid::generator(3, 1), star);
}
