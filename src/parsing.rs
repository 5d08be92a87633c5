//! Parsing
//!
//! A generic shift/reduce engine. The grammar is plain data (a list of
//! `Rule`s, each a tag with alternative symbol sequences) and the engine makes
//! greedy, non-backtracking decisions with one token of lookahead. There are
//! no precomputed action tables: at each step every rule is checked for
//! whether the next token could extend one of its sequences (shift) and
//! whether the top of the stack completes one (reduce).
//!
//! Conflict policy:
//!     - nothing possible: syntax error
//!     - exactly one reduction and no shift: reduce
//!     - several reductions and no shift: reduce/reduce conflict (fatal)
//!     - any shift: shift, reporting a shift/reduce conflict if some
//!       reduction was also possible
//!
//! Two tags are reserved. A rule tagged `/` (`ROOT_TAG`) is a start rule: it
//! never takes part in conflicts and is only reduced when nothing else can
//! happen. A rule tagged with the empty string (`DISCARD_TAG`) dismisses what
//! it matches instead of building a node, which is how whitespace and comments
//! get dropped; a lone dismissal takes precedence over shifting.
//!
//! This is not an LR(1) parser. Grammars whose shift/reduce ambiguities need
//! the reduction will mis-parse; that is a known limitation of the policy.

pub mod ast;
pub mod grammar;
pub mod parser;

pub use ast::{AstContent, AstNode};
pub use grammar::{Grammar, Rule};
pub use parser::{parse, Action, ParseCursor, ParseOutcome, Parser, ShiftReduceConflict, Step};

use std::fmt;

/// Tag of the root sentinel and of start rules.
pub const ROOT_TAG: &str = "/";

/// Tag of rules whose matches are dismissed from the stack.
pub const DISCARD_TAG: &str = "";

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Neither a shift nor a reduction is possible
    Syntax {
        stack: Vec<String>,
        remaining: Vec<String>,
    },
    /// More than one rule reduces and no shift is possible
    ReduceReduce {
        stack: Vec<String>,
        candidates: Vec<String>,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { stack, remaining } => write!(
                f,
                "Syntax error: no action possible with stack [{}] and input [{}]",
                stack.join(" "),
                remaining.join(" ")
            ),
            ParseError::ReduceReduce { stack, candidates } => write!(
                f,
                "Reduce/reduce conflict on stack [{}] between rules {}",
                stack.join(" "),
                candidates.join(", ")
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while building a grammar
#[derive(Debug, Clone, PartialEq)]
pub enum GrammarError {
    /// A rule alternative has no symbols; it would reduce on any stack
    EmptySequence { tag: String },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::EmptySequence { tag } => {
                write!(f, "Rule '{tag}' has an empty sequence")
            }
        }
    }
}

impl std::error::Error for GrammarError {}
