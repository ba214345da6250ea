use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SpeciesIdError;

/// One line of a species list, as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    Text(String),
    /// Bytes that are not valid UTF-8, decoded lossily for reporting.
    InvalidUtf8 { lossy: String, valid_up_to: usize },
}

impl InputLine {
    fn from_bytes(mut bytes: Vec<u8>) -> Self {
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        match String::from_utf8(bytes) {
            Ok(text) => InputLine::Text(text),
            Err(err) => InputLine::InvalidUtf8 {
                valid_up_to: err.utf8_error().valid_up_to(),
                lossy: String::from_utf8_lossy(err.as_bytes()).into_owned(),
            },
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            InputLine::Text(text) => text.trim().is_empty(),
            InputLine::InvalidUtf8 { .. } => false,
        }
    }
}

/// Reads a species list, one name per line. Lines are returned untrimmed so
/// line numbers stay aligned with the file. A line that is not valid UTF-8
/// does not fail the read; it comes back as [`InputLine::InvalidUtf8`].
pub fn read_species_lines(path: &Path) -> Result<Vec<InputLine>, SpeciesIdError> {
    let read_err = |source| SpeciesIdError::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let lines = BufReader::new(file)
        .split(b'\n')
        .map(|bytes| bytes.map(InputLine::from_bytes))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;

    if lines.iter().all(InputLine::is_blank) {
        return Err(SpeciesIdError::EmptyInput(path.to_path_buf()));
    }
    Ok(lines)
}

/// Creates `dir` (and parents) if it does not exist. Returns whether it was
/// created.
pub fn ensure_output_dir(dir: &Path) -> Result<bool, SpeciesIdError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}
