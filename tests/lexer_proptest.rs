//! Property-based tests for the lexer
//!
//! Inputs are drawn from characters every arithmetic terminal together
//! covers, so tokenizing must always succeed and give the text back.

use lexparse::lexing::{tokenize, Lexer, Terminal, Token};
use proptest::prelude::*;

fn arithmetic_terminals() -> Vec<Terminal> {
    [
        ("num", r"\d+"),
        ("plus", r"\+"),
        ("minus", r"-"),
        ("times", r"\*"),
        ("lparen", r"\("),
        ("rparen", r"\)"),
        ("ws", r"\s+"),
    ]
    .into_iter()
    .map(|(tag, pattern)| Terminal::new(tag, pattern).unwrap())
    .collect()
}

fn arithmetic_text_strategy() -> impl Strategy<Value = String> {
    "[0-9+*() \t\n-]{0,60}"
}

proptest! {
    #[test]
    fn test_values_reconstruct_the_text(text in arithmetic_text_strategy()) {
        let tokens = tokenize(&text, &arithmetic_terminals()).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_tokens_are_never_empty(text in arithmetic_text_strategy()) {
        let tokens = tokenize(&text, &arithmetic_terminals()).unwrap();
        prop_assert!(tokens.iter().all(|t| !t.value.is_empty()));
    }

    #[test]
    fn test_positions_move_forward(text in arithmetic_text_strategy()) {
        let tokens = tokenize(&text, &arithmetic_terminals()).unwrap();
        for pair in tokens.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            prop_assert!((after.line, after.column) > (before.line, before.column));
        }
    }

    #[test]
    fn test_lines_count_newline_tokens(text in arithmetic_text_strategy()) {
        let tokens = tokenize(&text, &arithmetic_terminals()).unwrap();
        let newline_tokens = tokens.iter().filter(|t| t.value.contains('\n')).count();
        let last_line = tokens.last().map(|t| t.line).unwrap_or(0);
        let trailing = usize::from(tokens.last().is_some_and(|t| t.value.contains('\n')));
        prop_assert_eq!(last_line + trailing, newline_tokens);
    }

    #[test]
    fn test_stepping_matches_all(text in arithmetic_text_strategy()) {
        let terminals = arithmetic_terminals();
        let mut lexer = Lexer::new();
        let mut stepped: Vec<Token> = Vec::new();
        while let Some(token) = lexer.step(&text, &terminals).unwrap() {
            stepped.push(token);
        }
        prop_assert_eq!(lexer.cursor().offset, text.len());
        prop_assert_eq!(stepped, tokenize(&text, &terminals).unwrap());
    }

    #[test]
    fn test_unknown_character_is_fatal(prefix in "[0-9+ ]{0,10}", suffix in "[0-9+ ]{0,10}") {
        let text = format!("{prefix}?{suffix}");
        let err = tokenize(&text, &arithmetic_terminals()).unwrap_err();
        let is_at_question_mark = matches!(
            err,
            lexparse::lexing::LexError::NoMatch { offset, .. } if offset == prefix.len()
        );
        prop_assert!(is_at_question_mark);
    }
}
