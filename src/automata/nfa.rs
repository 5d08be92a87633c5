//! Non-deterministic finite automaton with epsilon transitions.

use super::{StateId, Transition};
use crate::set::Set;
use std::fmt::Debug;

/// Epsilon-NFA. Edges labelled `None` are epsilon transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Nfa<S = char> {
    n_states: usize,
    transitions: Vec<Transition<Option<S>>>,
    start: StateId,
    accepting: Set<StateId>,
}

impl<S: Clone + PartialEq + Debug> Nfa<S> {
    pub fn new() -> Self {
        Nfa {
            n_states: 0,
            transitions: Vec::new(),
            start: 0,
            accepting: Set::new(),
        }
    }

    fn ensure_state(&mut self, state: StateId) {
        if self.n_states <= state {
            self.n_states = state + 1;
        }
    }

    /// Appends an edge, growing the state count to cover both endpoints.
    pub fn add_edge(&mut self, from: StateId, to: StateId, symbol: Option<S>) {
        self.ensure_state(from);
        self.ensure_state(to);
        self.transitions.push(Transition::new(from, to, symbol));
    }

    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (StateId, StateId, Option<S>)>,
    {
        for (from, to, symbol) in edges {
            self.add_edge(from, to, symbol);
        }
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

    pub fn transitions(&self) -> &[Transition<Option<S>>] {
        &self.transitions
    }

    /// All distinct non-epsilon symbols, in order of first appearance.
    pub fn alphabet(&self) -> Set<S> {
        self.transitions
            .iter()
            .filter_map(|t| t.symbol.clone())
            .collect()
    }

    /// All edges whose source is `state`.
    pub fn edges_from(&self, state: StateId) -> impl Iterator<Item = &Transition<Option<S>>> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    /// Destinations reachable from `state` by exactly `symbol`.
    ///
    /// Pass `None` to ask for epsilon destinations.
    pub fn edges_by(&self, state: StateId, symbol: Option<&S>) -> Set<StateId> {
        self.edges_from(state)
            .filter(|t| t.symbol.as_ref() == symbol)
            .map(|t| t.to)
            .collect()
    }

    /// Epsilon-closure of `states`.
    ///
    /// Worklist over the growing closure: a cursor walks the set in insertion
    /// order, and every state it reaches has its epsilon edges followed once.
    /// New states land at the end of the set and get expanded in turn.
    pub fn epsilon_closure(&self, states: &Set<StateId>) -> Set<StateId> {
        let mut closure = states.copy();
        let mut cursor = 0;
        while let Some(&state) = closure.get(cursor) {
            for dest in self.edges_by(state, None) {
                closure.add(dest);
            }
            cursor += 1;
        }
        closure
    }

    /// Union of the `symbol` destinations of every state in `states`.
    pub fn move_on(&self, states: &Set<StateId>, symbol: &S) -> Set<StateId> {
        let mut dests = Set::new();
        for &state in states {
            dests.extend(self.edges_by(state, Some(symbol)));
        }
        dests
    }

    /// Simulates the automaton on `input`.
    pub fn accepts(&self, input: &[S]) -> bool {
        let mut current = self.epsilon_closure(&Set::from([self.start]));
        for symbol in input {
            current = self.epsilon_closure(&self.move_on(&current, symbol));
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|s| self.accepting.contains(s))
    }
}

impl<S: Clone + PartialEq + Debug> Default for Nfa<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// (a|b)* followed by ac, with 1 as start and 4 accepting
    fn textbook_nfa() -> Nfa {
        let mut nfa = Nfa::new();
        nfa.add_edges([
            (1, 5, None),
            (5, 6, None),
            (5, 7, None),
            (6, 8, Some('a')),
            (7, 8, Some('b')),
            (8, 1, None),
            (1, 2, None),
            (2, 3, Some('a')),
            (3, 4, Some('c')),
        ]);
        nfa.set_start(1);
        nfa.add_accepting(4);
        nfa
    }

    #[test]
    fn test_state_count_grows_with_edges() {
        let mut nfa: Nfa = Nfa::new();
        assert_eq!(nfa.n_states(), 0);
        nfa.add_edge(2, 7, Some('x'));
        assert_eq!(nfa.n_states(), 8);
        nfa.add_edge(1, 0, None);
        assert_eq!(nfa.n_states(), 8);
        nfa.add_accepting(9);
        assert_eq!(nfa.n_states(), 10);
    }

    #[test]
    fn test_alphabet_skips_epsilon() {
        let nfa = textbook_nfa();
        assert_eq!(nfa.alphabet().to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_edges_from_and_by() {
        let nfa = textbook_nfa();
        assert_eq!(nfa.edges_from(5).count(), 2);
        assert_eq!(nfa.edges_by(5, None), Set::from([6, 7]));
        assert_eq!(nfa.edges_by(6, Some(&'a')), Set::from([8]));
        assert!(nfa.edges_by(6, Some(&'b')).is_empty());
        assert!(nfa.edges_by(6, None).is_empty());
    }

    #[test]
    fn test_epsilon_closure_of_start() {
        let nfa = textbook_nfa();
        let closure = nfa.epsilon_closure(&Set::from([1]));
        assert_eq!(closure, Set::from([1, 2, 5, 6, 7]));
    }

    #[test]
    fn test_epsilon_closure_is_idempotent() {
        let nfa = textbook_nfa();
        let once = nfa.epsilon_closure(&Set::from([8]));
        let twice = nfa.epsilon_closure(&once);
        assert_eq!(once, twice);
        assert_eq!(once, Set::from([8, 1, 2, 5, 6, 7]));
    }

    #[test]
    fn test_accepts() {
        let nfa = textbook_nfa();
        assert!(nfa.accepts(&['a', 'c']));
        assert!(nfa.accepts(&['a', 'b', 'b', 'a', 'c']));
        assert!(!nfa.accepts(&['a']));
        assert!(!nfa.accepts(&['c']));
        assert!(!nfa.accepts(&[]));
    }
}
