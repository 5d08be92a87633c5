//! Language definition files
//!
//! A language is described declaratively as an ordered terminal table and a
//! rule table, in YAML or JSON:
//!
//! ```yaml
//! terminals:
//!   - { tag: NUM, pattern: '\d+' }
//!   - { tag: PLUS, pattern: '\+' }
//!   - { tag: WS, pattern: '\s+' }
//! rules:
//!   - { tag: E, sequence: E PLUS E }
//!   - { tag: E, sequence: NUM }
//!   - { tag: "", sequence: WS }
//! ```
//!
//! Terminal order is lexing priority. Rules sharing a tag accumulate as
//! alternatives; the empty tag marks a discard rule and `/` a start rule.

use crate::automata::AutomatonDefinition;
use crate::lexing::{LexError, Terminal};
use crate::parsing::{Grammar, GrammarError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum DefinitionError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    /// File extension is neither yaml/yml nor json
    UnknownExtension(String),
    Lex(LexError),
    Grammar(GrammarError),
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::Io(e) => write!(f, "IO error: {e}"),
            DefinitionError::Yaml(e) => write!(f, "Invalid YAML definition: {e}"),
            DefinitionError::Json(e) => write!(f, "Invalid JSON definition: {e}"),
            DefinitionError::UnknownExtension(ext) => {
                write!(f, "Unknown definition format '{ext}' (expected yaml, yml or json)")
            }
            DefinitionError::Lex(e) => write!(f, "{e}"),
            DefinitionError::Grammar(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefinitionError::Io(e) => Some(e),
            DefinitionError::Yaml(e) => Some(e),
            DefinitionError::Json(e) => Some(e),
            DefinitionError::Lex(e) => Some(e),
            DefinitionError::Grammar(e) => Some(e),
            DefinitionError::UnknownExtension(_) => None,
        }
    }
}

impl From<std::io::Error> for DefinitionError {
    fn from(e: std::io::Error) -> Self {
        DefinitionError::Io(e)
    }
}

impl From<serde_yaml::Error> for DefinitionError {
    fn from(e: serde_yaml::Error) -> Self {
        DefinitionError::Yaml(e)
    }
}

impl From<serde_json::Error> for DefinitionError {
    fn from(e: serde_json::Error) -> Self {
        DefinitionError::Json(e)
    }
}

impl From<LexError> for DefinitionError {
    fn from(e: LexError) -> Self {
        DefinitionError::Lex(e)
    }
}

impl From<GrammarError> for DefinitionError {
    fn from(e: GrammarError) -> Self {
        DefinitionError::Grammar(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalRow {
    pub tag: String,
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRow {
    pub tag: String,
    pub sequence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageDefinition {
    #[serde(default)]
    pub terminals: Vec<TerminalRow>,
    #[serde(default)]
    pub rules: Vec<RuleRow>,
}

/// A compiled language: terminals ready for the lexer and the grammar for the
/// parser.
#[derive(Debug, Clone)]
pub struct Language {
    pub terminals: Vec<Terminal>,
    pub grammar: Grammar,
}

impl LanguageDefinition {
    pub fn from_yaml_str(text: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads a definition file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        load_file(path.as_ref())
    }

    /// Compiles every terminal pattern and accumulates the rule table.
    pub fn compile(&self) -> Result<Language, DefinitionError> {
        let terminals = self
            .terminals
            .iter()
            .map(|row| Terminal::new(&row.tag, &row.pattern))
            .collect::<Result<Vec<_>, _>>()?;
        let grammar = Grammar::from_rows(self.rules.iter().map(|row| (&row.tag, &row.sequence)))?;
        debug!(
            terminals = terminals.len(),
            rules = grammar.rules().len(),
            "compiled language definition"
        );
        Ok(Language { terminals, grammar })
    }
}

impl AutomatonDefinition {
    /// Reads an automaton description, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        load_file(path.as_ref())
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, DefinitionError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();
    debug!(path = %path.display(), "loading definition");
    match extension.as_str() {
        "yaml" | "yml" => Ok(serde_yaml::from_str(&fs::read_to_string(path)?)?),
        "json" => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        other => Err(DefinitionError::UnknownExtension(other.to_string())),
    }
}
