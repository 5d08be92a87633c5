//! Token record
//!
//! Tokens are produced by the lexer and end up as the payload of leaf nodes in
//! the parse tree. `line` and `column` are 0-based and point at the start of
//! the match.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub tag: String,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(
        tag: impl Into<String>,
        value: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Token {
            tag: tag.into(),
            value: value.into(),
            line,
            column,
        }
    }

    /// Token with the given tag and value at 0:0, for hand-built token streams.
    pub fn bare(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(tag, value, 0, 0)
    }
}
