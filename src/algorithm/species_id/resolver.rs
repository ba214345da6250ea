//! First-come-first-served identifier assignment
//!
//! The resolver owns the assignment table for one batch. Records must be fed
//! in input order: an identifier claimed by an earlier record is never handed
//! to a later one, and never taken back.

use rustc_hash::FxHashSet;

use super::alternatives::alternative_ids;
use super::formula::primary_id;
use super::tokenizer::SpeciesRecord;
use crate::error::MalformedRecord;

/// Outcome of resolving one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The primary id was free (or duplicates are allowed) and is now claimed.
    Assigned { id: String },
    /// The primary id collided; the first free alternative was claimed.
    ResolvedAlternative { primary: String, id: String },
    /// The primary id collided and no alternative was free.
    Unresolved { primary: String },
}

impl Resolution {
    /// Identifier claimed by this record, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Resolution::Assigned { id } | Resolution::ResolvedAlternative { id, .. } => Some(id.as_str()),
            Resolution::Unresolved { .. } => None,
        }
    }
}

/// Assignment table for one batch.
#[derive(Debug, Default)]
pub struct CollisionResolver {
    allow_duplicates: bool,
    /// (canonical name, id) in assignment order
    assignments: Vec<(String, String)>,
    claimed: FxHashSet<String>,
}

impl CollisionResolver {
    pub fn new(allow_duplicates: bool) -> Self {
        Self {
            allow_duplicates,
            ..Default::default()
        }
    }

    /// Decides the identifier for `record` and records the claim.
    ///
    /// Malformed records leave the table untouched.
    pub fn resolve(&mut self, record: &SpeciesRecord) -> Result<Resolution, MalformedRecord> {
        let primary = primary_id(record)?;

        if self.allow_duplicates || !self.claimed.contains(&primary) {
            self.claim(record, primary.clone());
            return Ok(Resolution::Assigned { id: primary });
        }

        let free = alternative_ids(record)?
            .into_iter()
            .find(|candidate| !self.claimed.contains(candidate));

        match free {
            Some(id) => {
                self.claim(record, id.clone());
                Ok(Resolution::ResolvedAlternative { primary, id })
            }
            None => Ok(Resolution::Unresolved { primary }),
        }
    }

    fn claim(&mut self, record: &SpeciesRecord, id: String) {
        self.claimed.insert(id.clone());
        self.assignments.push((record.name(), id));
    }

    pub fn assignments(&self) -> &[(String, String)] {
        &self.assignments
    }

    /// Consumes the resolver, ending the batch.
    pub fn into_assignments(self) -> Vec<(String, String)> {
        self.assignments
    }
}
