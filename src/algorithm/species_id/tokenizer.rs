//! Splitting species-name lines into tokens

use crate::config::Spacer;

/// Ordered tokens of one species-name line (genus, epithet, optional
/// synonym-genus annotation). Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpeciesRecord {
    tokens: Vec<String>,
}

/// Result of tokenizing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokenized {
    /// Two or more tokens; eligible for an identifier.
    Record(SpeciesRecord),
    /// A one-word line. Routed straight to the unassignable bucket.
    SingleToken(String),
}

impl SpeciesRecord {
    /// Builds a record from already-split tokens. `None` if `tokens` is empty.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    /// Splits `line` on `spacer`. Tokens are kept as-is, so consecutive
    /// spacers yield empty tokens; those are rejected later by the formula.
    pub fn tokenize(line: &str, spacer: Spacer) -> Tokenized {
        let tokens: Vec<String> = line.split(spacer.as_char()).map(str::to_string).collect();
        if tokens.len() == 1 {
            // split always yields at least one piece
            Tokenized::SingleToken(tokens.into_iter().next().unwrap_or_default())
        } else {
            Tokenized::Record(Self { tokens })
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn genus(&self) -> &str {
        &self.tokens[0]
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Canonical name used in reports: tokens joined by a single space,
    /// whatever the input spacer was.
    pub fn name(&self) -> String {
        self.tokens.join(" ")
    }
}
