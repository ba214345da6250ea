//! Error types for species identifier generation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single record could not produce an identifier.
///
/// These never abort a batch: the batch classifier collects them next to the
/// assigned, duplicated and unassignable buckets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("genus token is empty")]
    EmptyGenus,
    #[error("record has no epithet token")]
    MissingEpithet,
    #[error("synonym marker '{marker}' is not followed by an epithet token")]
    MissingEpithetAfterSynonym { marker: String },
    #[error("epithet token '{epithet}' has fewer than {required} characters")]
    EpithetTooShort { epithet: String, required: usize },
    #[error("line is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Failures that stop a whole species-id run.
#[derive(Debug, Error)]
pub enum SpeciesIdError {
    #[error("failed to read species list {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("species list {0} contains no species names")]
    EmptyInput(PathBuf),
    #[error("invalid spacer '{0}': expected a single character or one of space, tab, comma, underscore")]
    InvalidSpacer(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
