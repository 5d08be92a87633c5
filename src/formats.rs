//! Output formats for trees, tokens and parse traces
//!
//! - trees to text (treeviz), JSON and YAML through the `FormatRegistry`
//! - token streams, parse traces, DFAs, terminals and grammars to aligned
//!   text tables

pub mod registry;
pub mod tables;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter, JsonFormatter, YamlFormatter};
pub use tables::{dfa_table, grammar_table, parse_trace_table, terminal_table, token_table};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
