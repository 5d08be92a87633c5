//! Aligned text tables for token streams, parse traces and language
//! definitions.

use crate::automata::{Dfa, StateId};
use crate::lexing::{Terminal, Token};
use crate::parsing::{Grammar, Step};
use crate::set::Set;
use std::fmt::{Debug, Display};

/// Pads every column to its widest cell, two spaces between columns.
fn render(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    for row in std::iter::once(header).chain(rows) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// One row per token. Values are escaped so whitespace stays visible.
pub fn token_table(tokens: &[Token]) -> String {
    let rows = tokens
        .iter()
        .map(|token| {
            vec![
                token.line.to_string(),
                token.column.to_string(),
                token.tag.clone(),
                format!("{:?}", token.value),
            ]
        })
        .collect();
    render(&["LINE", "COL", "TAG", "VALUE"], rows)
}

/// One row per terminal, in the order the lexer tries them.
pub fn terminal_table(terminals: &[Terminal]) -> String {
    let rows = terminals
        .iter()
        .map(|terminal| vec![terminal.tag().to_string(), terminal.pattern().to_string()])
        .collect();
    render(&["TAG", "PATTERN"], rows)
}

/// One row per alternative, written as `TAG -> first | second`. The tag
/// only appears on a rule's first alternative; the discard tag shows as `""`.
pub fn grammar_table(grammar: &Grammar) -> String {
    let mut rows = Vec::new();
    for rule in grammar.rules() {
        let tag = if rule.is_discard() {
            "\"\"".to_string()
        } else {
            rule.tag.clone()
        };
        for (i, sequence) in rule.sequences.iter().enumerate() {
            let (tag, arrow) = if i == 0 {
                (tag.clone(), "->")
            } else {
                (String::new(), "|")
            };
            rows.push(vec![tag, arrow.to_string(), sequence.join(" ")]);
        }
    }
    render(&["RULE", "", "SEQUENCE"], rows)
}

/// One row per parse step: stack and remaining input before the action, the
/// action itself, and a marker on steps that resolved a shift/reduce conflict.
pub fn parse_trace_table(steps: &[Step]) -> String {
    let rows = steps
        .iter()
        .map(|step| {
            let mut action = step.action.to_string();
            if step.conflict.is_some() {
                action.push_str(" (shift/reduce)");
            }
            vec![
                step.number.to_string(),
                step.stack.join(" "),
                step.remaining.join(" "),
                action,
            ]
        })
        .collect();
    render(&["STEP", "STACK", "INPUT", "ACTION"], rows)
}

/// One row per DFA state. `>` marks the start state and `*` accepting ones;
/// `sources` is the state map returned by subset construction or minimization.
pub fn dfa_table<S>(dfa: &Dfa<S>, sources: &[Set<StateId>]) -> String
where
    S: Clone + PartialEq + Debug + Display,
{
    let rows = (0..dfa.n_states())
        .map(|state| {
            let mut marks = String::new();
            if state == dfa.start() {
                marks.push('>');
            }
            if dfa.is_accepting(state) {
                marks.push('*');
            }
            let edges: Vec<String> = dfa
                .edges_from(state)
                .map(|edge| format!("{} -> {}", edge.symbol, edge.to))
                .collect();
            vec![
                format!("{marks}{state}"),
                sources.get(state).map(|s| format!("{s:?}")).unwrap_or_default(),
                edges.join(", "),
            ]
        })
        .collect();
    render(&["STATE", "SOURCES", "EDGES"], rows)
}
