//! Deterministic finite automaton.
//!
//! Same shape as the NFA (implicit states, explicit edges) with a stronger
//! invariant: every (state, symbol) pair has at most one outgoing edge, and
//! there are no epsilon edges. Hand-built DFAs get the invariant checked on
//! every `add_edge`; the constructors in `subset` and `minimize` produce it by
//! construction.

use super::{AutomatonError, StateId, Transition};
use crate::set::Set;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Dfa<S = char> {
    pub(crate) n_states: usize,
    pub(crate) transitions: Vec<Transition<S>>,
    pub(crate) start: StateId,
    pub(crate) accepting: Set<StateId>,
}

impl<S: Clone + PartialEq + Debug> Dfa<S> {
    pub fn new() -> Self {
        Dfa {
            n_states: 0,
            transitions: Vec::new(),
            start: 0,
            accepting: Set::new(),
        }
    }

    /// Empty automaton with `n_states` states and no edges.
    pub fn with_states(n_states: usize) -> Self {
        Dfa {
            n_states,
            ..Self::new()
        }
    }

    fn ensure_state(&mut self, state: StateId) {
        if self.n_states <= state {
            self.n_states = state + 1;
        }
    }

    /// Appends an edge, growing the state count to cover both endpoints.
    ///
    /// Fails if `from` already has an edge on `symbol`.
    pub fn add_edge(
        &mut self,
        from: StateId,
        to: StateId,
        symbol: S,
    ) -> Result<(), AutomatonError> {
        if self.transition(from, &symbol).is_some() {
            return Err(AutomatonError::Nondeterministic {
                state: from,
                symbol: format!("{symbol:?}"),
            });
        }
        self.ensure_state(from);
        self.ensure_state(to);
        self.transitions.push(Transition::new(from, to, symbol));
        Ok(())
    }

    pub fn add_edges<I>(&mut self, edges: I) -> Result<(), AutomatonError>
    where
        I: IntoIterator<Item = (StateId, StateId, S)>,
    {
        for (from, to, symbol) in edges {
            self.add_edge(from, to, symbol)?;
        }
        Ok(())
    }

    pub fn set_start(&mut self, state: StateId) {
        self.ensure_state(state);
        self.start = state;
    }

    pub fn add_accepting(&mut self, state: StateId) {
        self.ensure_state(state);
        self.accepting.add(state);
    }

    pub fn n_states(&self) -> usize {
        self.n_states
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accepting(&self) -> &Set<StateId> {
        &self.accepting
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    /// Every state index, `0..n_states`.
    pub fn states(&self) -> Set<StateId> {
        (0..self.n_states).collect()
    }

    /// All distinct symbols, in order of first appearance.
    pub fn alphabet(&self) -> Set<S> {
        self.transitions.iter().map(|t| t.symbol.clone()).collect()
    }

    pub fn edges_from(&self, state: StateId) -> impl Iterator<Item = &Transition<S>> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    /// The single destination from `state` on `symbol`, if any.
    pub fn transition(&self, state: StateId, symbol: &S) -> Option<StateId> {
        self.edges_from(state)
            .find(|t| &t.symbol == symbol)
            .map(|t| t.to)
    }

    /// Walks the transition table; a missing edge rejects.
    pub fn accepts(&self, input: &[S]) -> bool {
        if self.n_states == 0 {
            return false;
        }
        let mut state = self.start;
        for symbol in input {
            match self.transition(state, symbol) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }

    /// True if no (state, symbol) pair has two outgoing edges.
    pub fn is_deterministic(&self) -> bool {
        self.transitions.iter().enumerate().all(|(i, t)| {
            self.transitions[i + 1..]
                .iter()
                .all(|other| other.from != t.from || other.symbol != t.symbol)
        })
    }
}

impl<S: Clone + PartialEq + Debug> Default for Dfa<S> {
    fn default() -> Self {
        Self::new()
    }
}
