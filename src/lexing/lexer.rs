//! Position-tracking lexer.

use super::{LexError, Terminal, Token};
use serde::Serialize;
use tracing::{debug, trace};

/// Persisted position in the stream.
///
/// `offset` is a byte offset into the text; `line` and `column` are the
/// 0-based coordinates handed to the next token. Column accounting is
/// deliberately simple: a token containing a newline bumps `line` by one and
/// resets `column` to 0, ignoring whatever follows the newline inside that
/// token. Any other token advances `column` by its length in chars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Cursor {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    fn advance(&mut self, matched: &str) {
        if matched.contains('\n') {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += matched.chars().count();
        }
        self.offset += matched.len();
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lexer {
    cursor: Cursor,
}

impl Lexer {
    /// Lexer positioned at the start of a stream.
    pub fn new() -> Self {
        Lexer {
            cursor: Cursor::default(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn reset(&mut self) {
        self.cursor = Cursor::default();
    }

    pub fn is_at_end(&self, text: &str) -> bool {
        self.cursor.offset >= text.len()
    }

    /// Produces the next token, or `None` at end of stream.
    ///
    /// Terminals are tried in order against the remaining input and the first
    /// match wins. On failure the cursor stays where it was.
    pub fn step(&mut self, text: &str, terminals: &[Terminal]) -> Result<Option<Token>, LexError> {
        if self.is_at_end(text) {
            return Ok(None);
        }
        let remaining = text.get(self.cursor.offset..).unwrap_or_default();

        for terminal in terminals {
            if let Some(len) = terminal.match_len(remaining) {
                let value = &remaining[..len];
                let token = Token::new(terminal.tag(), value, self.cursor.line, self.cursor.column);
                self.cursor.advance(value);
                trace!(
                    tag = %token.tag,
                    value = ?token.value,
                    line = token.line,
                    column = token.column,
                    "token"
                );
                return Ok(Some(token));
            }
        }

        Err(LexError::NoMatch {
            offset: self.cursor.offset,
            line: self.cursor.line,
            column: self.cursor.column,
        })
    }

    /// Steps until end of stream. Fails as a whole on the first unmatched input.
    pub fn all(&mut self, text: &str, terminals: &[Terminal]) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.step(text, terminals)? {
            tokens.push(token);
        }
        debug!(count = tokens.len(), "lexing finished");
        Ok(tokens)
    }
}
