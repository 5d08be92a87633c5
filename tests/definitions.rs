//! Loading language definitions from disk

use lexparse::definition::{DefinitionError, LanguageDefinition};
use lexparse::formats::{grammar_table, token_table};
use lexparse::lexing::tokenize;
use lexparse::parsing::parse;
use rstest::rstest;

fn language_path(name: &str) -> String {
    format!("{}/languages/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[rstest(name => ["arithmetic.yaml", "arithmetic.json"])]
fn test_shipped_definitions_parse_expressions(name: &str) {
    let language = LanguageDefinition::load(language_path(name))
        .unwrap()
        .compile()
        .unwrap();
    let tokens = tokenize("2*3+4", &language.terminals).unwrap();
    let outcome = parse(&language.grammar, &tokens).unwrap();

    assert_eq!(outcome.tree.tag, "E");
    assert_eq!(outcome.tree.count_tagged("E"), 5);
}

#[test]
fn test_yaml_and_json_agree_on_shared_rules() {
    let yaml = LanguageDefinition::load(language_path("arithmetic.yaml")).unwrap();
    let json = LanguageDefinition::load(language_path("arithmetic.json")).unwrap();
    for row in &json.rules {
        assert!(yaml.rules.contains(row), "missing {row:?}");
    }
}

#[test]
fn test_grammar_table_for_shipped_definition() {
    let language = LanguageDefinition::load(language_path("arithmetic.yaml"))
        .unwrap()
        .compile()
        .unwrap();
    insta::assert_snapshot!(grammar_table(&language.grammar), @r###"
    RULE      SEQUENCE
    E     ->  E PLUS E
          |   E MINUS E
          |   E TIMES E
          |   LPAREN E RPAREN
          |   NUM
    ""    ->  WS
    "###);
}

#[test]
fn test_token_table_for_multiline_input() {
    let language = LanguageDefinition::load(language_path("arithmetic.yaml"))
        .unwrap()
        .compile()
        .unwrap();
    let tokens = tokenize("12 *\n(3)", &language.terminals).unwrap();
    insta::assert_snapshot!(token_table(&tokens), @r###"
    LINE  COL  TAG     VALUE
    0     0    NUM     "12"
    0     2    WS      " "
    0     3    TIMES   "*"
    0     4    WS      "\n"
    1     0    LPAREN  "("
    1     1    NUM     "3"
    1     2    RPAREN  ")"
    "###);
}

#[test]
fn test_invalid_yaml_is_reported() {
    let err = LanguageDefinition::from_yaml_str("terminals: [").unwrap_err();
    assert!(matches!(err, DefinitionError::Yaml(_)));
    assert!(err.to_string().starts_with("Invalid YAML definition"));
}
