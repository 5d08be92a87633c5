//! Subset construction and minimization of the shipped textbook automaton

use lexparse::automata::{AutomatonDefinition, Dfa, Nfa};
use lexparse::formats::dfa_table;
use lexparse::set::Set;
use rstest::{fixture, rstest};

#[fixture]
fn textbook() -> Nfa<String> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/languages/textbook-nfa.yaml");
    AutomatonDefinition::load(path).unwrap().to_nfa()
}

fn word(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

#[rstest]
fn test_start_closure(textbook: Nfa<String>) {
    let closure = textbook.epsilon_closure(&Set::from([textbook.start()]));
    assert_eq!(closure, Set::from([1, 2, 5, 6, 7]));
}

#[rstest]
fn test_subset_construction_table(textbook: Nfa<String>) {
    let (dfa, state_map) = Dfa::from_subset_construction(&textbook);
    insta::assert_snapshot!(dfa_table(&dfa, &state_map), @r###"
    STATE  SOURCES                EDGES
    >0     {1, 5, 2, 6, 7}        a -> 1, b -> 2
    1      {3, 8, 1, 5, 2, 6, 7}  a -> 1, b -> 2, c -> 3
    2      {8, 1, 5, 2, 6, 7}     a -> 1, b -> 2
    *3     {4}
    "###);
}

#[rstest]
fn test_minimized_table(textbook: Nfa<String>) {
    let (dfa, _) = Dfa::from_subset_construction(&textbook);
    let (minimal, groups) = Dfa::from_minimization(&dfa);
    insta::assert_snapshot!(dfa_table(&minimal, &groups), @r###"
    STATE  SOURCES  EDGES
    *0     {3}
    >1     {0, 2}   a -> 2, b -> 1
    2      {1}      a -> 2, b -> 1, c -> 0
    "###);
}

#[rstest]
#[case("ac", true)]
#[case("aac", true)]
#[case("babac", true)]
#[case("", false)]
#[case("a", false)]
#[case("bc", false)]
#[case("acc", false)]
fn test_every_stage_agrees(textbook: Nfa<String>, #[case] input: &str, #[case] accepted: bool) {
    let (dfa, _) = Dfa::from_subset_construction(&textbook);
    let (minimal, _) = Dfa::from_minimization(&dfa);
    let input = word(input);

    assert_eq!(textbook.accepts(&input), accepted);
    assert_eq!(dfa.accepts(&input), accepted);
    assert_eq!(minimal.accepts(&input), accepted);
}
