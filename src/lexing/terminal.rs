//! Terminal (lexical category)
//!
//! A terminal pairs an upper-cased tag with a pattern. Patterns are written as
//! plain regexes and anchored on construction, so a terminal only ever matches
//! at the very start of the remaining input.

use super::LexError;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct Terminal {
    tag: String,
    source: String,
    pattern: Regex,
}

impl Terminal {
    pub fn new(tag: &str, pattern: &str) -> Result<Self, LexError> {
        let tag = tag.trim().to_uppercase();
        let anchored = format!("^(?:{pattern})");
        let compiled = Regex::new(&anchored).map_err(|e| LexError::InvalidPattern {
            tag: tag.clone(),
            message: e.to_string(),
        })?;
        Ok(Terminal {
            tag,
            source: pattern.to_string(),
            pattern: compiled,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The pattern as written, before anchoring.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// Length in bytes of the non-empty match at the start of `input`, if any.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.pattern
            .find(input)
            .map(|m| m.end())
            .filter(|&len| len > 0)
    }
}

impl PartialEq for Terminal {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.source == other.source
    }
}
