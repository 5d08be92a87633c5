//! End-to-end parsing of arithmetic through the shipped language definition

use lexparse::definition::{Language, LanguageDefinition};
use lexparse::lexing::tokenize;
use lexparse::parsing::{parse, Action, Grammar, ParseError, Parser, ROOT_TAG};
use rstest::{fixture, rstest};

#[fixture]
fn arithmetic() -> Language {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/languages/arithmetic.yaml");
    LanguageDefinition::load(path).unwrap().compile().unwrap()
}

fn expression_grammar() -> Grammar {
    Grammar::from_rows([
        ("E", "E PLUS E"),
        ("E", "E TIMES E"),
        ("E", "LPAREN E RPAREN"),
        ("E", "NUM"),
    ])
    .unwrap()
}

#[test]
fn test_operator_precedence_from_shift_preference() {
    let terminals = arithmetic().terminals;
    let tokens: Vec<_> = tokenize("3+5*10", &terminals).unwrap();
    let outcome = parse(&expression_grammar(), &tokens).unwrap();

    assert_eq!(outcome.steps, 10);
    assert_eq!(outcome.conflicts.len(), 1);
    insta::assert_snapshot!(outcome.tree.to_string(), @r###"
    E:
      E:
        NUM = 3
      PLUS = +
      E:
        E:
          NUM = 5
        TIMES = *
        E:
          NUM = 10
    "###);
}

#[rstest]
#[case("42", 1)]
#[case("1 + 2", 3)]
#[case("(1 + 2) * 3", 7)]
#[case("1 -\n2 * (3 + 4)", 9)]
#[case("  7  ", 1)]
fn test_whitespace_is_dismissed(arithmetic: Language, #[case] text: &str, #[case] leaves: usize) {
    let tokens = tokenize(text, &arithmetic.terminals).unwrap();
    let outcome = parse(&arithmetic.grammar, &tokens).unwrap();

    assert_eq!(outcome.tree.tag, "E");
    assert_eq!(outcome.tree.leaves().len(), leaves);
    assert!(outcome.tree.leaves().iter().all(|token| token.tag != "WS"));
}

#[rstest]
#[case("1 + 2")]
#[case("(1 + 2) * 3")]
#[case("2 * 3 - 4 + 5")]
fn test_step_count_matches_trace(arithmetic: Language, #[case] text: &str) {
    let tokens = tokenize(text, &arithmetic.terminals).unwrap();
    let outcome = parse(&arithmetic.grammar, &tokens).unwrap();

    let counted = outcome
        .trace
        .iter()
        .filter(|step| step.action != Action::Finish)
        .count();
    assert_eq!(outcome.steps, counted);
    assert_eq!(outcome.trace.last().map(|step| &step.action), Some(&Action::Finish));

    let shifts = outcome
        .trace
        .iter()
        .filter(|step| matches!(step.action, Action::Shift { .. }))
        .count();
    assert_eq!(shifts, tokens.len());
}

#[rstest]
#[case("1 +")]
#[case("* 2")]
#[case("(1")]
#[case("1 2")]
#[case("(")]
#[case("  (  ")]
fn test_syntax_errors(arithmetic: Language, #[case] text: &str) {
    let tokens = tokenize(text, &arithmetic.terminals).unwrap();
    let err = parse(&arithmetic.grammar, &tokens).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }), "{err}");
}

#[test]
fn test_parentheses_group_first() {
    let language = arithmetic();
    let tokens = tokenize("(1+2)*3", &language.terminals).unwrap();
    let outcome = parse(&language.grammar, &tokens).unwrap();
    insta::assert_snapshot!(outcome.tree.to_string(), @r###"
    E:
      E:
        LPAREN = (
        E:
          E:
            NUM = 1
          PLUS = +
          E:
            NUM = 2
        RPAREN = )
      TIMES = *
      E:
        NUM = 3
    "###);
}

#[rstest]
#[case("+")]
#[case("1 + +")]
fn test_start_rule_must_be_reached(arithmetic: Language, #[case] text: &str) {
    let mut grammar =
        Grammar::from_rows([("/", "E"), ("E", "E PLUS E"), ("E", "NUM"), ("", "WS")]).unwrap();
    grammar.add("OP", ["PLUS"]).unwrap();
    let tokens = tokenize(text, &arithmetic.terminals).unwrap();
    let err = parse(&grammar, &tokens).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }), "{err}");
}

#[test]
fn test_start_rule_wraps_the_tree() {
    let mut grammar = expression_grammar();
    grammar.add(ROOT_TAG, ["E"]).unwrap();
    let terminals = arithmetic().terminals;
    let tokens = tokenize("1*2", &terminals).unwrap();
    let outcome = parse(&grammar, &tokens).unwrap();

    assert!(outcome.tree.is_root());
    insta::assert_snapshot!(outcome.tree.to_string(), @r###"
    /:
      E:
        E:
          NUM = 1
        TIMES = *
        E:
          NUM = 2
    "###);
}

#[test]
fn test_interactive_stepping() {
    let grammar = expression_grammar();
    let terminals = arithmetic().terminals;
    let tokens = tokenize("1+2", &terminals).unwrap();
    let mut parser = Parser::new(&grammar, &tokens);

    let mut actions = Vec::new();
    while !parser.is_finished() {
        actions.push(parser.step().unwrap().action.to_string());
    }
    assert_eq!(
        actions,
        vec![
            "Shift NUM",
            "Reduce E : NUM",
            "Shift PLUS",
            "Shift NUM",
            "Reduce E : NUM",
            "Reduce E : E PLUS E",
            "Finish",
        ]
    );
    assert_eq!(parser.cursor().offset, tokens.len());
    assert_eq!(parser.tree(), Some(&parser.working_tree()));
}
