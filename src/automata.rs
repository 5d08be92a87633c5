//! Finite automata
//!
//! A small automata-theory library: a non-deterministic automaton with epsilon
//! transitions (`Nfa`), a deterministic automaton (`Dfa`), the subset
//! construction turning the former into the latter, and Moore-style partition
//! refinement to minimize a DFA.
//!
//! States are implicit: an automaton only knows how many states it has, and
//! states are referred to by index. Edges are stored explicitly, in insertion
//! order. Adding an edge (or marking a start/accepting state) that refers to a
//! state beyond the current count grows the count instead of failing.
//!
//! This library is independent of the lexer and parser; it is consumed
//! directly by tests and by the `automaton` subcommand of the binary.

pub mod definition;
pub mod dfa;
pub mod minimize;
pub mod nfa;
pub mod subset;

pub use definition::AutomatonDefinition;
pub use dfa::Dfa;
pub use nfa::Nfa;

use serde::Serialize;
use std::fmt;

/// State index.
pub type StateId = usize;

/// A single edge: `from` to `to` on `symbol`.
///
/// In an `Nfa` the label is `Option<S>` with `None` standing for epsilon; in a
/// `Dfa` it is a plain `S`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition<L> {
    pub from: StateId,
    pub to: StateId,
    pub symbol: L,
}

impl<L> Transition<L> {
    pub fn new(from: StateId, to: StateId, symbol: L) -> Self {
        Transition { from, to, symbol }
    }
}

/// Errors raised while building automata by hand
#[derive(Debug, Clone, PartialEq)]
pub enum AutomatonError {
    /// The state already has an outgoing edge on this symbol
    Nondeterministic { state: StateId, symbol: String },
}

impl fmt::Display for AutomatonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutomatonError::Nondeterministic { state, symbol } => write!(
                f,
                "State {state} already has a transition on {symbol}; a DFA allows only one"
            ),
        }
    }
}

impl std::error::Error for AutomatonError {}
