//! Serializable automaton description
//!
//! Lets the command line (and tests) describe an NFA as data:
//!
//! ```yaml
//! start: 1
//! accepting: [4]
//! edges:
//!   - [1, 2, null]
//!   - [2, 3, a]
//! ```
//!
//! A `null` symbol is an epsilon edge. Symbols are strings, so the resulting
//! automaton is an `Nfa<String>`.

use super::{Nfa, StateId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutomatonDefinition {
    #[serde(default)]
    pub start: StateId,
    #[serde(default)]
    pub accepting: Vec<StateId>,
    pub edges: Vec<(StateId, StateId, Option<String>)>,
}

impl AutomatonDefinition {
    pub fn to_nfa(&self) -> Nfa<String> {
        let mut nfa = Nfa::new();
        nfa.add_edges(self.edges.iter().cloned());
        nfa.set_start(self.start);
        for &state in &self.accepting {
            nfa.add_accepting(state);
        }
        nfa
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::Set;

    #[test]
    fn test_from_yaml() {
        let source = "start: 0\naccepting: [2]\nedges:\n  - [0, 1, null]\n  - [1, 2, x]\n";
        let definition: AutomatonDefinition = serde_yaml::from_str(source).unwrap();
        let nfa = definition.to_nfa();

        assert_eq!(nfa.n_states(), 3);
        assert_eq!(nfa.epsilon_closure(&Set::from([0])), Set::from([0, 1]));
        assert!(nfa.accepts(&["x".to_string()]));
    }

    #[test]
    fn test_from_json_defaults() {
        let source = r#"{"edges": [[0, 0, "a"]]}"#;
        let definition: AutomatonDefinition = serde_json::from_str(source).unwrap();
        assert_eq!(definition.start, 0);
        assert!(definition.accepting.is_empty());
        assert!(!definition.to_nfa().accepts(&[]));
    }
}
