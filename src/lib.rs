//! # lexparse
//!
//! Building blocks for the front end of a compiler, kept small enough to step
//! through by hand:
//!
//! - [`set`]: an insertion-ordered set value type used throughout
//! - [`automata`]: NFAs with epsilon edges, DFAs, subset construction and
//!   Moore-style minimization
//! - [`lexing`]: a regex-driven lexer with line and column tracking
//! - [`parsing`]: a table-free shift/reduce parser over a data grammar, with
//!   step-by-step traces and conflict reporting
//! - [`definition`]: loading terminal and rule tables from YAML or JSON
//! - [`formats`]: tree dumps, JSON/YAML output and text tables
//!
//! ```ignore
//! use lexparse::definition::LanguageDefinition;
//! use lexparse::{lexing, parsing};
//!
//! let language = LanguageDefinition::load("arithmetic.yaml")?.compile()?;
//! let tokens = lexing::tokenize("3 + 5 * 10", &language.terminals)?;
//! let outcome = parsing::parse(&language.grammar, &tokens)?;
//! print!("{}", outcome.tree);
//! ```

pub mod automata;
pub mod definition;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod set;
