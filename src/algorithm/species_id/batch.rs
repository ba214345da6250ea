//! Batch classification of a species list
//!
//! Drives every line through the tokenizer and the resolver, in input order,
//! and sorts the outcome into buckets.

use tracing::{debug, warn};

use super::resolver::{CollisionResolver, Resolution};
use super::tokenizer::{SpeciesRecord, Tokenized};
use crate::common::InputLine;
use crate::config::SpeciesIdConfig;
use crate::error::MalformedRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedSpecies {
    pub name: String,
    pub id: String,
}

/// A species whose primary id was already claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatedSpecies {
    pub name: String,
    pub primary: String,
    /// Alternative claimed instead, `None` if every candidate was taken.
    pub alternative: Option<String>,
}

impl DuplicatedSpecies {
    pub fn is_resolved(&self) -> bool {
        self.alternative.is_some()
    }
}

/// A line that could not produce an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    /// 1-based line number in the input
    pub line_number: usize,
    pub name: String,
    pub reason: MalformedRecord,
}

/// Buckets produced by one batch, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub assigned: Vec<AssignedSpecies>,
    pub duplicated: Vec<DuplicatedSpecies>,
    /// Single-token lines.
    pub unassignable: Vec<String>,
    pub malformed: Vec<MalformedEntry>,
    /// Blank lines that never reached the tokenizer.
    pub skipped_blank: usize,
}

impl BatchResult {
    /// Number of non-blank lines seen.
    pub fn total_species(&self) -> usize {
        let resolved_duplicates = self.duplicated.iter().filter(|d| d.is_resolved()).count();
        // resolved duplicates are counted in both `assigned` and `duplicated`
        self.assigned.len() + self.duplicated.len() - resolved_duplicates
            + self.unassignable.len()
            + self.malformed.len()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &DuplicatedSpecies> {
        self.duplicated.iter().filter(|d| !d.is_resolved())
    }

    pub fn duplicated_names(&self) -> impl Iterator<Item = &str> {
        self.duplicated.iter().map(|d| d.name.as_str())
    }
}

/// Sorts lines into buckets one at a time, in input order.
struct BatchClassifier {
    config: SpeciesIdConfig,
    resolver: CollisionResolver,
    result: BatchResult,
}

impl BatchClassifier {
    fn new(config: &SpeciesIdConfig) -> Self {
        Self {
            config: *config,
            resolver: CollisionResolver::new(config.allow_duplicates),
            result: BatchResult::default(),
        }
    }

    fn push_line(&mut self, line_number: usize, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            debug!(line = line_number, "blank line skipped");
            self.result.skipped_blank += 1;
            return;
        }

        let record = match SpeciesRecord::tokenize(line, self.config.spacer) {
            Tokenized::Record(record) => record,
            Tokenized::SingleToken(name) => {
                debug!(line = line_number, %name, "single-token species, no id generated");
                self.result.unassignable.push(name);
                return;
            }
        };

        match self.resolver.resolve(&record) {
            Ok(Resolution::Assigned { id }) => {
                debug!(line = line_number, name = %record.name(), %id, "assigned");
            }
            Ok(Resolution::ResolvedAlternative { primary, id }) => {
                debug!(line = line_number, name = %record.name(), %primary, %id, "primary id taken, assigned alternative");
                self.result.duplicated.push(DuplicatedSpecies {
                    name: record.name(),
                    primary,
                    alternative: Some(id),
                });
            }
            Ok(Resolution::Unresolved { primary }) => {
                warn!(line = line_number, name = %record.name(), %primary, "primary id taken and no alternative is free");
                self.result.duplicated.push(DuplicatedSpecies {
                    name: record.name(),
                    primary,
                    alternative: None,
                });
            }
            Err(reason) => self.push_malformed(line_number, record.name(), reason),
        }
    }

    fn push_malformed(&mut self, line_number: usize, name: String, reason: MalformedRecord) {
        warn!(line = line_number, %name, %reason, "malformed species name");
        self.result.malformed.push(MalformedEntry {
            line_number,
            name,
            reason,
        });
    }

    fn finish(self) -> BatchResult {
        let mut result = self.result;
        result.assigned = self
            .resolver
            .into_assignments()
            .into_iter()
            .map(|(name, id)| AssignedSpecies { name, id })
            .collect();
        result
    }
}

/// Classifies every line of a species list.
///
/// Lines are trimmed; blank lines are skipped. Malformed records are reported
/// in [`BatchResult::malformed`] and do not stop the batch.
pub fn classify_batch<I, S>(lines: I, config: &SpeciesIdConfig) -> BatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classifier = BatchClassifier::new(config);
    for (idx, line) in lines.into_iter().enumerate() {
        classifier.push_line(idx + 1, line.as_ref());
    }
    classifier.finish()
}

/// Like [`classify_batch`], for lines read by
/// [`read_species_lines`](crate::common::read_species_lines). Lines that are
/// not valid UTF-8 are reported as malformed under their lossy decoding.
pub fn classify_input(lines: &[InputLine], config: &SpeciesIdConfig) -> BatchResult {
    let mut classifier = BatchClassifier::new(config);
    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;
        match line {
            InputLine::Text(text) => classifier.push_line(line_number, text),
            InputLine::InvalidUtf8 { lossy, valid_up_to } => classifier.push_malformed(
                line_number,
                lossy.trim().to_string(),
                MalformedRecord::InvalidUtf8 {
                    valid_up_to: *valid_up_to,
                },
            ),
        }
    }
    classifier.finish()
}
