//! Shift/reduce engine
//!
//! The parser owns a working stack (the children of the implicit root
//! sentinel) and a cursor into the token sequence. `Parser::step` performs one
//! action and reports it as a `Step`; `Parser::all` steps until the parse is
//! finished. Steps can be interleaved with inspection of `working_tree()` for
//! interactive display.

use super::{AstNode, Grammar, ParseError, Rule, ROOT_TAG};
use crate::lexing::Token;
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace, warn};

/// Persisted parse position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseCursor {
    /// Index of the next token to shift
    pub offset: usize,
    /// Shifts plus reductions (dismissals included) performed so far
    pub step_count: usize,
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    Shift { tag: String },
    Reduce { tag: String, sequence: Vec<String> },
    Dismiss { sequence: Vec<String> },
    Finish,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift { tag } => write!(f, "Shift {tag}"),
            Action::Reduce { tag, sequence } => {
                write!(f, "Reduce {tag} : {}", sequence.join(" "))
            }
            Action::Dismiss { sequence } => write!(f, "Dismiss: {}", sequence.join(" ")),
            Action::Finish => write!(f, "Finish"),
        }
    }
}

/// A shift taken while reductions were also possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftReduceConflict {
    pub step: usize,
    /// Tags of the rules that could shift
    pub shifts: Vec<String>,
    /// Tags of the rules that could reduce
    pub reductions: Vec<String>,
}

/// One row of the parse trace.
///
/// `stack` and `remaining` are the symbol stack and the unconsumed token tags
/// as they were before the action was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: usize,
    pub stack: Vec<String>,
    pub remaining: Vec<String>,
    pub action: Action,
    pub conflict: Option<ShiftReduceConflict>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    pub tree: AstNode,
    pub steps: usize,
    pub conflicts: Vec<ShiftReduceConflict>,
    pub trace: Vec<Step>,
}

pub struct Parser<'a> {
    grammar: &'a Grammar,
    tokens: &'a [Token],
    stack: Vec<AstNode>,
    tree: Option<AstNode>,
    cursor: ParseCursor,
}

impl<'a> Parser<'a> {
    pub fn new(grammar: &'a Grammar, tokens: &'a [Token]) -> Self {
        Parser {
            grammar,
            tokens,
            stack: Vec::new(),
            tree: None,
            cursor: ParseCursor::default(),
        }
    }

    pub fn cursor(&self) -> ParseCursor {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.finished
    }

    /// The finished tree, once the parse is done.
    pub fn tree(&self) -> Option<&AstNode> {
        self.tree.as_ref()
    }

    /// Current state as a tree: the root sentinel over the working stack, or the
    /// finished tree.
    pub fn working_tree(&self) -> AstNode {
        match &self.tree {
            Some(tree) => tree.clone(),
            None => AstNode::branch(ROOT_TAG, self.stack.clone()),
        }
    }

    fn stack_tags(&self) -> Vec<&str> {
        self.stack.iter().map(|node| node.tag.as_str()).collect()
    }

    fn remaining_tags(&self) -> Vec<String> {
        self.tokens
            .get(self.cursor.offset..)
            .unwrap_or_default()
            .iter()
            .map(|token| token.tag.clone())
            .collect()
    }

    fn snapshot(&self, action: Action, conflict: Option<ShiftReduceConflict>) -> Step {
        Step {
            number: self.cursor.step_count,
            stack: self.stack_tags().into_iter().map(String::from).collect(),
            remaining: self.remaining_tags(),
            action,
            conflict,
        }
    }

    /// Performs a single action.
    ///
    /// Once finished, further calls change nothing and report `Action::Finish`.
    pub fn step(&mut self) -> Result<Step, ParseError> {
        if self.cursor.finished {
            return Ok(self.snapshot(Action::Finish, None));
        }

        let grammar = self.grammar;
        let tokens = self.tokens;
        let stack = self.stack_tags();
        let next = tokens.get(self.cursor.offset).map(|token| token.tag.as_str());

        let shifts: Vec<&Rule> = match next {
            Some(next) => grammar
                .rules()
                .iter()
                .filter(|rule| rule.shiftable_sequence(&stack, next).is_some())
                .collect(),
            None => Vec::new(),
        };
        let reductions: Vec<(&Rule, usize)> = grammar
            .rules()
            .iter()
            .filter_map(|rule| rule.reducible_sequence(&stack).map(|idx| (rule, idx)))
            .collect();

        // without a start rule, a lone reduced node with nothing left to reduce is the root
        let has_start_rule = grammar.rule(ROOT_TAG).is_some();
        if next.is_none()
            && stack.len() == 1
            && (stack[0] == ROOT_TAG
                || (!has_start_rule && !self.stack[0].is_leaf() && reductions.is_empty()))
        {
            return Ok(self.finish());
        }

        if let [(rule, idx)] = reductions.as_slice() {
            if rule.is_discard() {
                let (rule, idx) = (*rule, *idx);
                return Ok(self.reduce(rule, idx));
            }
        }

        let (root, effective): (Vec<_>, Vec<_>) =
            reductions.into_iter().partition(|(rule, _)| rule.is_root());

        match (shifts.len(), effective.len()) {
            (0, 0) => match root.first() {
                Some(&(rule, idx)) => Ok(self.reduce(rule, idx)),
                None => Err(ParseError::Syntax {
                    stack: stack.into_iter().map(String::from).collect(),
                    remaining: self.remaining_tags(),
                }),
            },
            (0, 1) => {
                let (rule, idx) = effective[0];
                Ok(self.reduce(rule, idx))
            }
            (0, _) => Err(ParseError::ReduceReduce {
                stack: stack.into_iter().map(String::from).collect(),
                candidates: effective.iter().map(|(rule, _)| rule.tag.clone()).collect(),
            }),
            (_, 0) => Ok(self.shift(None)),
            (_, _) => {
                let conflict = ShiftReduceConflict {
                    step: self.cursor.step_count + 1,
                    shifts: shifts.iter().map(|rule| rule.tag.clone()).collect(),
                    reductions: effective.iter().map(|(rule, _)| rule.tag.clone()).collect(),
                };
                warn!(
                    step = conflict.step,
                    shifts = ?conflict.shifts,
                    reductions = ?conflict.reductions,
                    "shift/reduce conflict resolved as shift"
                );
                Ok(self.shift(Some(conflict)))
            }
        }
    }

    fn finish(&mut self) -> Step {
        let step = self.snapshot(Action::Finish, None);
        self.tree = self.stack.pop();
        self.cursor.finished = true;
        debug!(steps = self.cursor.step_count, "parse finished");
        step
    }

    fn shift(&mut self, conflict: Option<ShiftReduceConflict>) -> Step {
        let token = self.tokens[self.cursor.offset].clone();
        self.cursor.step_count += 1;
        let step = self.snapshot(
            Action::Shift {
                tag: token.tag.clone(),
            },
            conflict,
        );
        trace!(step = step.number, tag = %token.tag, "shift");
        self.stack.push(AstNode::leaf(token));
        self.cursor.offset += 1;
        step
    }

    fn reduce(&mut self, rule: &Rule, idx: usize) -> Step {
        let sequence = rule.sequences[idx].clone();
        self.cursor.step_count += 1;
        let at = self.stack.len() - sequence.len();

        if rule.is_discard() {
            let step = self.snapshot(Action::Dismiss { sequence }, None);
            trace!(step = step.number, "dismiss");
            self.stack.truncate(at);
            return step;
        }

        let step = self.snapshot(
            Action::Reduce {
                tag: rule.tag.clone(),
                sequence,
            },
            None,
        );
        trace!(step = step.number, tag = %rule.tag, "reduce");
        let children = self.stack.split_off(at);
        self.stack.push(AstNode::branch(rule.tag.clone(), children));
        step
    }

    /// Steps until the parse is finished.
    pub fn all(&mut self) -> Result<ParseOutcome, ParseError> {
        let mut trace = Vec::new();
        while !self.cursor.finished {
            trace.push(self.step()?);
        }
        let conflicts = trace.iter().filter_map(|step| step.conflict.clone()).collect();
        Ok(ParseOutcome {
            tree: self.working_tree(),
            steps: self.cursor.step_count,
            conflicts,
            trace,
        })
    }
}

/// Parses a token sequence with a fresh parser.
pub fn parse(grammar: &Grammar, tokens: &[Token]) -> Result<ParseOutcome, ParseError> {
    Parser::new(grammar, tokens).all()
}
