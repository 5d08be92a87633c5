//! Grammar rules
//!
//! A `Rule` is a nonterminal tag with one or more alternative right-hand
//! sides. Rules are usually built from a table of `(tag, sequence)` rows
//! where the sequence is a whitespace-separated list of symbol tags; rows
//! sharing a tag accumulate as alternatives of a single rule.

use super::{GrammarError, DISCARD_TAG, ROOT_TAG};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SYMBOL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub tag: String,
    pub sequences: Vec<Vec<String>>,
}

impl Rule {
    pub fn new(tag: impl Into<String>) -> Self {
        Rule {
            tag: tag.into(),
            sequences: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    pub fn is_discard(&self) -> bool {
        self.tag == DISCARD_TAG
    }

    /// Index of the first alternative that the stack plus `next` could be
    /// building: some prefix of the sequence equals the trailing window of
    /// `stack + [next]`.
    pub fn shiftable_sequence(&self, stack: &[&str], next: &str) -> Option<usize> {
        self.sequences
            .iter()
            .position(|sequence| is_sequence_shiftable(stack, next, sequence))
    }

    /// Index of the first alternative exactly matching the top of the stack.
    pub fn reducible_sequence(&self, stack: &[&str]) -> Option<usize> {
        self.sequences
            .iter()
            .position(|sequence| is_sequence_reducible(stack, sequence))
    }
}

fn is_sequence_shiftable(stack: &[&str], next: &str, sequence: &[String]) -> bool {
    (1..=sequence.len().min(stack.len() + 1)).any(|n| {
        let window = &stack[stack.len() + 1 - n..];
        sequence[n - 1] == next && window.iter().zip(&sequence[..n - 1]).all(|(s, q)| *s == q)
    })
}

fn is_sequence_reducible(stack: &[&str], sequence: &[String]) -> bool {
    stack.len() >= sequence.len()
        && stack[stack.len() - sequence.len()..]
            .iter()
            .zip(sequence)
            .all(|(s, q)| *s == q)
}

/// Splits a whitespace-delimited sequence into upper-cased symbol tags.
pub fn split_sequence(sequence: &str) -> Vec<String> {
    SYMBOL_SEPARATOR
        .split(sequence.trim())
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Ordered list of rules, at most one per tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar { rules: Vec::new() }
    }

    /// Accumulates rule-table rows. Tags and symbols are upper-cased.
    pub fn from_rows<I, T, S>(rows: I) -> Result<Self, GrammarError>
    where
        I: IntoIterator<Item = (T, S)>,
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let mut grammar = Grammar::new();
        for (tag, sequence) in rows {
            grammar.add(tag.as_ref(), split_sequence(sequence.as_ref()))?;
        }
        Ok(grammar)
    }

    /// Adds an alternative to the rule for `tag`, creating the rule if needed.
    pub fn add<S: Into<String>>(
        &mut self,
        tag: &str,
        sequence: impl IntoIterator<Item = S>,
    ) -> Result<(), GrammarError> {
        let tag = tag.trim().to_uppercase();
        let sequence: Vec<String> = sequence.into_iter().map(Into::into).collect();
        if sequence.is_empty() {
            return Err(GrammarError::EmptySequence { tag });
        }
        match self.rules.iter_mut().find(|rule| rule.tag == tag) {
            Some(rule) => rule.sequences.push(sequence),
            None => {
                let mut rule = Rule::new(tag);
                rule.sequences.push(sequence);
                self.rules.push(rule);
            }
        }
        Ok(())
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule(&self, tag: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.tag == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
