//! Fallback identifiers for species whose primary id is already taken
//!
//! An alternative keeps the genus initial and the first two epithet letters,
//! then swaps the third letter for each later epithet letter in turn:
//! `melanogaster -> Dmea, Dmen, Dmeo, Dmeg, Dmes, Dmet, Dmee, Dmer` (the
//! second `a` repeats `Dmea` and is dropped).

use rustc_hash::FxHashSet;

use super::formula::{epithet_chars, genus_initial, EPITHET_PREFIX_LEN};
use super::tokenizer::SpeciesRecord;
use crate::error::MalformedRecord;

/// Epithet letters kept verbatim in every alternative.
const KEPT_EPITHET_LEN: usize = EPITHET_PREFIX_LEN - 1;

/// Ordered, duplicate-free fallback candidates for `record`.
///
/// Empty when the epithet has no characters past the primary prefix. Fails
/// for the same malformed inputs as [`super::formula::primary_id`].
pub fn alternative_ids(record: &SpeciesRecord) -> Result<Vec<String>, MalformedRecord> {
    let initial = genus_initial(record)?;
    let epithet = epithet_chars(record)?;

    let mut seen = FxHashSet::default();
    let mut alternatives = Vec::new();
    for &extension in &epithet[EPITHET_PREFIX_LEN..] {
        let mut id = String::with_capacity(EPITHET_PREFIX_LEN + 1);
        id.push(initial);
        id.extend(&epithet[..KEPT_EPITHET_LEN]);
        id.push(extension);
        if seen.insert(id.clone()) {
            alternatives.push(id);
        }
    }
    Ok(alternatives)
}
