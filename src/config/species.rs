//! Configuration consumed by the species identifier core

use std::fmt;

use crate::error::SpeciesIdError;

/// Character used to split a species-name line into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer(pub char);

impl Spacer {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Spacer(' ')
    }
}

impl fmt::Display for Spacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ' ' => f.write_str("space"),
            '\t' => f.write_str("tab"),
            c => write!(f, "{}", c),
        }
    }
}

impl std::str::FromStr for Spacer {
    type Err = SpeciesIdError;

    /// Accepts a single literal character, or a keyword for characters that
    /// are awkward to pass on a command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "space" => return Ok(Spacer(' ')),
            "tab" | "\\t" => return Ok(Spacer('\t')),
            "comma" => return Ok(Spacer(',')),
            "underscore" => return Ok(Spacer('_')),
            _ => {}
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Spacer(c)),
            _ => Err(SpeciesIdError::InvalidSpacer(s.to_string())),
        }
    }
}

/// Settings for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpeciesIdConfig {
    /// Record every primary id as-is, even when several species share it.
    pub allow_duplicates: bool,
    pub spacer: Spacer,
}

impl SpeciesIdConfig {
    pub fn with_spacer(mut self, spacer: char) -> Self {
        self.spacer = Spacer(spacer);
        self
    }

    pub fn allowing_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }
}
