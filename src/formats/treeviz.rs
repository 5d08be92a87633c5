//! Treeviz formatter for syntax trees
//!
//! One line per node, nesting encoded as indentation with 2 white spaces per
//! level. Internal nodes print their tag followed by a colon, leaves print
//! their tag and the matched text:
//!
//!     E:
//!       E:
//!         NUM = 3
//!       PLUS = +
//!       E:
//!         NUM = 5

use super::{FormatError, Formatter};
use crate::parsing::{AstContent, AstNode};

pub fn to_treeviz_str(node: &AstNode) -> String {
    let mut result = String::new();
    write_node(&mut result, node, 0);
    result
}

fn write_node(out: &mut String, node: &AstNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match &node.content {
        AstContent::Token(token) => {
            out.push_str(&format!("{indent}{} = {}\n", node.tag, token.value));
        }
        AstContent::Children(children) => {
            out.push_str(&format!("{indent}{}:\n", node.tag));
            for child in children {
                write_node(out, child, depth + 1);
            }
        }
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, node: &AstNode) -> Result<String, FormatError> {
        Ok(to_treeviz_str(node))
    }

    fn description(&self) -> &str {
        "Indented one-line-per-node tree"
    }
}
