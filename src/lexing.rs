//! Lexing
//!
//! Turns a text stream into a sequence of `Token`s using an ordered list of
//! `Terminal`s. Each terminal is an anchored regex tried against the remaining
//! input; terminals are tried in declaration order and the first one that
//! matches wins. Ordering the terminal list is therefore how priorities are
//! expressed (put keywords before identifiers); there is no longest-match rule.
//!
//! The `Lexer` is a cursor over the stream. `Lexer::step` produces one token
//! and persists the cursor so callers can drive tokenization one token at a
//! time; `Lexer::all` drives it to the end. A position where no terminal
//! matches is fatal: there is no recovery and `all` returns no partial result.

pub mod lexer;
pub mod terminal;
pub mod token;

pub use lexer::{Cursor, Lexer};
pub use terminal::Terminal;
pub use token::Token;

use std::fmt;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// No terminal matches the input at the cursor
    NoMatch {
        offset: usize,
        line: usize,
        column: usize,
    },
    /// A terminal pattern failed to compile
    InvalidPattern { tag: String, message: String },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::NoMatch {
                offset,
                line,
                column,
            } => write!(
                f,
                "Unable to resolve next token at {line}:{column} (offset {offset})"
            ),
            LexError::InvalidPattern { tag, message } => {
                write!(f, "Invalid pattern for terminal {tag}: {message}")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenizes a whole text with a fresh lexer.
pub fn tokenize(text: &str, terminals: &[Terminal]) -> Result<Vec<Token>, LexError> {
    Lexer::new().all(text, terminals)
}
