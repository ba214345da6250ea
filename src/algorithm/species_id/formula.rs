//! Primary species identifier
//!
//! The identifier is the first letter of the genus followed by the first three
//! letters of the epithet: `Drosophila melanogaster -> Dmel`,
//! `Tridacna squamosa -> Tsqu`. When the second token is a parenthesised
//! synonym genus (`Drosophila (Sophophora) melanogaster`) the epithet is taken
//! from the third token instead. Case is preserved.

use super::tokenizer::SpeciesRecord;
use crate::error::MalformedRecord;

/// Number of epithet characters in a primary identifier.
pub const EPITHET_PREFIX_LEN: usize = 3;

/// Prefix marking a synonym-genus token.
pub const SYNONYM_MARKER: char = '(';

/// First character of the genus token.
pub(crate) fn genus_initial(record: &SpeciesRecord) -> Result<char, MalformedRecord> {
    record.genus().chars().next().ok_or(MalformedRecord::EmptyGenus)
}

/// The token identifiers are built from: `tokens[1]`, or `tokens[2]` when
/// `tokens[1]` starts with the synonym marker.
pub fn epithet_source(record: &SpeciesRecord) -> Result<&str, MalformedRecord> {
    let second = record.token(1).ok_or(MalformedRecord::MissingEpithet)?;
    if second.starts_with(SYNONYM_MARKER) {
        record
            .token(2)
            .ok_or_else(|| MalformedRecord::MissingEpithetAfterSynonym {
                marker: second.to_string(),
            })
    } else {
        Ok(second)
    }
}

/// Epithet source as characters, checked to be long enough for a primary id.
pub(crate) fn epithet_chars(record: &SpeciesRecord) -> Result<Vec<char>, MalformedRecord> {
    let epithet = epithet_source(record)?;
    let chars: Vec<char> = epithet.chars().collect();
    if chars.len() < EPITHET_PREFIX_LEN {
        return Err(MalformedRecord::EpithetTooShort {
            epithet: epithet.to_string(),
            required: EPITHET_PREFIX_LEN,
        });
    }
    Ok(chars)
}

/// Computes the primary candidate for `record`.
pub fn primary_id(record: &SpeciesRecord) -> Result<String, MalformedRecord> {
    let initial = genus_initial(record)?;
    let epithet = epithet_chars(record)?;

    let mut id = String::with_capacity(1 + EPITHET_PREFIX_LEN);
    id.push(initial);
    id.extend(&epithet[..EPITHET_PREFIX_LEN]);
    Ok(id)
}
