//! Syntax tree nodes
//!
//! A node is identified by a tag (a rule tag for internal nodes, a terminal tag
//! for leaves) and holds either its children or, for leaves, the token it was
//! shifted from. Each node has exactly one owner: its parent, or the parser's
//! working stack while the parse is in progress.

use super::ROOT_TAG;
use crate::lexing::Token;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AstContent {
    Children(Vec<AstNode>),
    Token(Token),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AstNode {
    pub tag: String,
    #[serde(flatten)]
    pub content: AstContent,
}

impl AstNode {
    /// Empty root sentinel, the implicit top of the parse stack.
    pub fn root() -> Self {
        Self::branch(ROOT_TAG, Vec::new())
    }

    pub fn branch(tag: impl Into<String>, children: Vec<AstNode>) -> Self {
        AstNode {
            tag: tag.into(),
            content: AstContent::Children(children),
        }
    }

    /// Leaf tagged with the token's own tag.
    pub fn leaf(token: Token) -> Self {
        AstNode {
            tag: token.tag.clone(),
            content: AstContent::Token(token),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, AstContent::Token(_))
    }

    pub fn is_root(&self) -> bool {
        self.tag == ROOT_TAG
    }

    /// Children of an internal node; empty for leaves.
    pub fn children(&self) -> &[AstNode] {
        match &self.content {
            AstContent::Children(children) => children.as_slice(),
            AstContent::Token(_) => &[],
        }
    }

    pub fn token(&self) -> Option<&Token> {
        match &self.content {
            AstContent::Token(token) => Some(token),
            AstContent::Children(_) => None,
        }
    }

    /// True if this node's only child is tagged with the root sentinel.
    pub fn is_single_root(&self) -> bool {
        matches!(self.children(), [only] if only.is_root())
    }

    /// Tokens of all leaves, left to right.
    pub fn leaves(&self) -> Vec<&Token> {
        match &self.content {
            AstContent::Token(token) => vec![token],
            AstContent::Children(children) => children.iter().flat_map(|c| c.leaves()).collect(),
        }
    }

    /// Number of internal nodes tagged `tag` in this subtree, this node included.
    pub fn count_tagged(&self, tag: &str) -> usize {
        let own = usize::from(!self.is_leaf() && self.tag == tag);
        own + self.children().iter().map(|c| c.count_tagged(tag)).sum::<usize>()
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::formats::treeviz::to_treeviz_str(self))
    }
}
