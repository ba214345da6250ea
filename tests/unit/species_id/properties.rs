//! Property-based tests for species identifier generation
//!
//! Checks the formula shape, the alternative sequence invariants and
//! batch-level uniqueness and determinism over generated species lists.

use proptest::prelude::*;
use rustc_hash::FxHashSet;
use species_tools::algorithm::species_id::{alternative_ids, classify_batch, primary_id};
use species_tools::config::SpeciesIdConfig;

use crate::helpers::record;

/// Genus-like token
fn arb_genus() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,9}"
}

/// Epithet-like token, long enough for an id
fn arb_epithet() -> impl Strategy<Value = String> {
    "[a-z]{3,12}"
}

/// Small alphabet so collisions are frequent
fn arb_species_line() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => ("[ABD][a-c]{1,3}", "[a-c]{3,6}").prop_map(|(g, e)| format!("{} {}", g, e)),
        1 => ("[ABD][a-c]{1,3}", "[a-c]{3,6}").prop_map(|(g, e)| format!("{} (Syn) {}", g, e)),
        1 => "[ABD][a-c]{0,3}",
    ]
}

proptest! {
    #[test]
    fn primary_uses_genus_initial_and_epithet_prefix(genus in arb_genus(), epithet in arb_epithet()) {
        let id = primary_id(&record(&[genus.as_str(), epithet.as_str()])).unwrap();
        let expected = format!("{}{}", &genus[..1], &epithet[..3]);
        prop_assert_eq!(id, expected);
    }

    #[test]
    fn primary_skips_synonym_token(genus in arb_genus(), synonym in arb_genus(), epithet in arb_epithet()) {
        let marker = format!("({})", synonym);
        let with_synonym = primary_id(&record(&[genus.as_str(), marker.as_str(), epithet.as_str()])).unwrap();
        let without = primary_id(&record(&[genus.as_str(), epithet.as_str()])).unwrap();
        prop_assert_eq!(with_synonym, without);
    }

    #[test]
    fn alternatives_are_unique_and_ordered(genus in arb_genus(), epithet in arb_epithet()) {
        let alts = alternative_ids(&record(&[genus.as_str(), epithet.as_str()])).unwrap();
        let chars: Vec<char> = epithet.chars().collect();

        let unique: FxHashSet<&String> = alts.iter().collect();
        prop_assert_eq!(unique.len(), alts.len());

        // first-occurrence order of the extension characters
        let mut seen = FxHashSet::default();
        let expected: Vec<String> = chars[3..]
            .iter()
            .filter(|c| seen.insert(**c))
            .map(|c| format!("{}{}{}", &genus[..1], &epithet[..2], c))
            .collect();
        prop_assert_eq!(alts, expected);
    }

    #[test]
    fn assigned_ids_are_pairwise_distinct(lines in prop::collection::vec(arb_species_line(), 0..40)) {
        let result = classify_batch(&lines, &SpeciesIdConfig::default());
        let mut ids = FxHashSet::default();
        for assigned in &result.assigned {
            prop_assert!(ids.insert(assigned.id.clone()), "duplicate id {}", assigned.id);
        }
        prop_assert_eq!(result.total_species(), lines.len());
    }

    #[test]
    fn classification_is_deterministic(lines in prop::collection::vec(arb_species_line(), 0..40)) {
        let config = SpeciesIdConfig::default();
        prop_assert_eq!(classify_batch(&lines, &config), classify_batch(&lines, &config));
    }

    #[test]
    fn allow_duplicates_assigns_every_multiword_line(lines in prop::collection::vec(arb_species_line(), 0..40)) {
        let config = SpeciesIdConfig::default().allowing_duplicates();
        let result = classify_batch(&lines, &config);
        prop_assert!(result.duplicated.is_empty());
        prop_assert_eq!(result.assigned.len() + result.unassignable.len(), lines.len());
    }
}
