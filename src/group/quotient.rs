//! `VKQuotient`/`DBVKQuotient` (`spec.md` §4.I) and the presentation type
//! handed to the external Tietze simplifier.

use super::{compose, hurwitz_action, inverse, FreeWord};
use crate::braid::Braid;
use std::fmt;

/// A finitely-presented group `<generators | relations>`, generators
/// numbered `1..=generators` (extra generators introduced by
/// [`db_vk_quotient`] are numbered past `n`).
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Total generator count, including any extra generators from
    /// [`db_vk_quotient`].
    pub generators: usize,
    /// Relator words, each implicitly set equal to the identity.
    pub relations: Vec<FreeWord>,
}

impl Presentation {
    /// Drop relations that are already trivial (the empty word) — a cheap
    /// pass, not a full Tietze simplification.
    #[must_use]
    pub fn without_trivial_relations(mut self) -> Self {
        self.relations.retain(|r| !r.is_empty());
        self
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gens: Vec<String> = (1..=self.generators).map(|i| format!("f{i}")).collect();
        let rels: Vec<String> = self
            .relations
            .iter()
            .map(|r| {
                r.iter()
                    .map(|g| if *g > 0 { format!("f{g}") } else { format!("f{}^-1", -g) })
                    .collect::<Vec<_>>()
                    .join("*")
            })
            .collect();
        write!(f, "< {} | {} >", gens.join(", "), rels.join(", "))
    }
}

/// Seam for the out-of-scope Tietze-style presentation simplifier
/// (`spec.md` §6). The default implementation only drops trivial
/// relations; a real simplifier (Tietze transformations, relator-length
/// reduction) is out of scope per `spec.md` §1.
pub trait PresentationSimplifier {
    fn simplify(&self, presentation: Presentation) -> Presentation;
}

/// Pass-through simplifier: only removes already-trivial relations.
pub struct IdentitySimplifier;

impl PresentationSimplifier for IdentitySimplifier {
    fn simplify(&self, presentation: Presentation) -> Presentation {
        presentation.without_trivial_relations()
    }
}

/// The Van Kampen presentation of `pi_1(C^2 - C)` for a monic curve:
/// `< f_1,...,f_n | phi_i(f_j) f_j^-1 for all i, j >`, where `phi_i` is the
/// Hurwitz action of the `i`-th loop's braid.
#[must_use]
pub fn vk_quotient(braids: &[Braid], n: usize) -> Presentation {
    let mut relations = Vec::new();
    for braid in braids {
        let tuple = hurwitz_action(braid, n);
        for (j, word) in tuple.iter().enumerate() {
            let rel = compose(word, &inverse(&vec![(j + 1) as i32]));
            relations.push(rel);
        }
    }
    Presentation { generators: n, relations }.without_trivial_relations()
}

/// The Van Kampen presentation for a non-monic curve, via a trivialising
/// horizontal line: one extra generator `g_i` per loop braid, and the
/// relations `phi_i(f_j) g_i f_j^-1 g_i^-1`, plus `f_basepoint = 1` to
/// quotient out the added line.
#[must_use]
pub fn db_vk_quotient(braids: &[Braid], n: usize, basepoint_strand: usize) -> Presentation {
    let mut relations = Vec::new();
    for (i, braid) in braids.iter().enumerate() {
        let tuple = hurwitz_action(braid, n);
        let g_i = n as i32 + 1 + i as i32;
        for (j, word) in tuple.iter().enumerate() {
            let mut rel = compose(word, &[g_i]);
            rel = compose(&rel, &inverse(&vec![(j + 1) as i32]));
            rel = compose(&rel, &[-g_i]);
            relations.push(rel);
        }
    }
    relations.push(vec![basepoint_strand as i32]);
    Presentation {
        generators: n + braids.len(),
        relations,
    }
    .without_trivial_relations()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vk_quotient_of_identity_braids_has_no_relations() {
        let braids = vec![Braid::identity(3), Braid::identity(3)];
        let p = vk_quotient(&braids, 3);
        assert!(p.relations.is_empty());
    }

    #[test]
    fn vk_quotient_of_full_twist_on_two_strands_is_free_group_on_two_generators() {
        // The curve x^2 - 1 (two parallel vertical lines) has no braiding
        // at all, so the quotient by the (trivial) braid list is F2.
        let p = vk_quotient(&[], 2);
        assert_eq!(2, p.generators);
        assert!(p.relations.is_empty());
    }

    #[test]
    fn db_vk_quotient_adds_one_generator_per_braid() {
        let braids = vec![Braid::generator(2, 1)];
        let p = db_vk_quotient(&braids, 2, 1);
        assert_eq!(3, p.generators);
    }
}
