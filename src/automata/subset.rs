//! Subset construction: NFA to DFA.

use super::{Dfa, Nfa, StateId, Transition};
use crate::set::Set;
use std::fmt::Debug;
use tracing::{debug, trace};

impl<S: Clone + PartialEq + Debug> Dfa<S> {
    /// Builds the DFA equivalent to `nfa` by breadth-first subset construction.
    ///
    /// Returns the DFA together with its state map: entry `i` is the set of NFA
    /// states that DFA state `i` stands for. State 0 is the start state, the
    /// epsilon-closure of the NFA start state.
    pub fn from_subset_construction(nfa: &Nfa<S>) -> (Dfa<S>, Vec<Set<StateId>>) {
        let alphabet = nfa.alphabet();
        let mut state_map = vec![nfa.epsilon_closure(&Set::from([nfa.start()]))];
        let mut transitions = Vec::new();

        // state_map doubles as the worklist; the cursor chases its tail
        let mut cursor = 0;
        while cursor < state_map.len() {
            for symbol in alphabet.iter() {
                let dests = nfa.epsilon_closure(&nfa.move_on(&state_map[cursor], symbol));
                if dests.is_empty() {
                    continue;
                }
                let to = match state_map.iter().position(|known| known.equals(&dests)) {
                    Some(existing) => existing,
                    None => {
                        trace!(
                            state = state_map.len(),
                            nfa_states = ?dests,
                            "discovered DFA state"
                        );
                        state_map.push(dests);
                        state_map.len() - 1
                    }
                };
                transitions.push(Transition::new(cursor, to, symbol.clone()));
            }
            cursor += 1;
        }

        let accepting: Set<StateId> = state_map
            .iter()
            .enumerate()
            .filter(|(_, nfa_states)| !nfa_states.intersect(nfa.accepting()).is_empty())
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            nfa_states = nfa.n_states(),
            dfa_states = state_map.len(),
            "subset construction finished"
        );

        let dfa = Dfa {
            n_states: state_map.len(),
            transitions,
            start: 0,
            accepting,
        };
        (dfa, state_map)
    }
}
