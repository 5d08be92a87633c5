//! DFA minimization by partition refinement (Moore's algorithm).
//!
//! Groups of old states are refined until every group is consistent: all of
//! its members move, for every symbol of the alphabet, into the same group (or
//! all have no transition). Each refinement splits one inconsistent group by
//! row signature, appends the pieces as new groups, marks the old group empty,
//! and restarts the scan from the first group. The scan ends once a full pass
//! finds every non-empty group consistent.

use super::{Dfa, StateId, Transition};
use crate::set::Set;
use std::fmt::Debug;
use tracing::{debug, trace};

/// Per-member destination groups, one column per alphabet symbol.
type GroupTable = Vec<Vec<Option<usize>>>;

fn group_of(groups: &[Set<StateId>], state: StateId) -> Option<usize> {
    groups.iter().position(|group| group.contains(&state))
}

impl<S: Clone + PartialEq + Debug> Dfa<S> {
    fn group_table(
        &self,
        groups: &[Set<StateId>],
        group: &Set<StateId>,
        alphabet: &Set<S>,
    ) -> GroupTable {
        group
            .iter()
            .map(|&member| {
                alphabet
                    .iter()
                    .map(|symbol| {
                        self.transition(member, symbol)
                            .and_then(|dest| group_of(groups, dest))
                    })
                    .collect()
            })
            .collect()
    }

    /// Builds the minimal DFA equivalent to `dfa`.
    ///
    /// Returns the new DFA and its group map: entry `i` is the set of old states
    /// merged into new state `i`.
    pub fn from_minimization(dfa: &Dfa<S>) -> (Dfa<S>, Vec<Set<StateId>>) {
        let alphabet = dfa.alphabet();
        let accepting = dfa.accepting.copy();
        let rejecting = dfa.states().subtract(&accepting);
        let mut groups = vec![accepting, rejecting];

        let mut checking = 0;
        while checking < groups.len() {
            if groups[checking].is_empty() {
                checking += 1;
                continue;
            }

            let table = dfa.group_table(&groups, &groups[checking], &alphabet);
            let consistent = table.windows(2).all(|pair| pair[0] == pair[1]);
            if consistent {
                checking += 1;
                continue;
            }

            // one new group per distinct row, in order of first appearance
            let mut signatures: Vec<&Vec<Option<usize>>> = Vec::new();
            let mut pieces: Vec<Set<StateId>> = Vec::new();
            for (member, row) in groups[checking].iter().zip(table.iter()) {
                match signatures.iter().position(|sig| *sig == row) {
                    Some(idx) => {
                        pieces[idx].add(*member);
                    }
                    None => {
                        signatures.push(row);
                        pieces.push(Set::from([*member]));
                    }
                }
            }
            trace!(group = checking, pieces = ?pieces, "split inconsistent group");

            groups[checking] = Set::new();
            groups.extend(pieces);
            checking = 0;
        }

        let groups: Vec<Set<StateId>> = groups.into_iter().filter(|g| !g.is_empty()).collect();

        let mut transitions = Vec::new();
        for (idx, group) in groups.iter().enumerate() {
            // consistency makes any member a valid representative
            let Some(&representative) = group.get(0) else {
                continue;
            };
            for symbol in alphabet.iter() {
                if let Some(dest) = dfa.transition(representative, symbol) {
                    if let Some(to) = group_of(&groups, dest) {
                        transitions.push(Transition::new(idx, to, symbol.clone()));
                    }
                }
            }
        }

        let accepting: Set<StateId> = groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.iter().any(|s| dfa.is_accepting(*s)))
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            before = dfa.n_states(),
            after = groups.len(),
            "minimization finished"
        );

        let minimized = Dfa {
            n_states: groups.len(),
            transitions,
            start: group_of(&groups, dfa.start()).unwrap_or(0),
            accepting,
        };
        (minimized, groups)
    }
}
