//! Document building: nested blocks in, document tree out.
//!
//! Every [`Block::Nested`] becomes a child node. Lines shaped like
//! `word: value` set an attribute on the node they belong to; every other
//! line is kept verbatim as content.

use std::sync::LazyLock;

use docdiff_tree::{Document, DocumentTree, NodeId, TreeError};
use regex::Regex;
use tracing::debug;

use crate::error::ParseResult;
use crate::nest::{nest_indentation, Block};

/// Attribute lines start with a run of word characters followed by a colon.
static ATTRIBUTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+:").expect("attribute line pattern compiles"));

/// Returns `true` if `line` would be read as an attribute line.
pub fn is_attribute_line(line: &str) -> bool {
    ATTRIBUTE_LINE.is_match(line)
}

/// Split an attribute line into its key and trimmed value.
fn split_attribute(line: &str) -> Option<(&str, &str)> {
    if !is_attribute_line(line) {
        return None;
    }
    line.split_once(':')
        .map(|(key, value)| (key, value.trim()))
}

/// Parse indented `text` straight into a document tree.
pub fn parse_document(text: &str) -> ParseResult<DocumentTree> {
    let blocks = nest_indentation(text)?;
    document_from_structure(&blocks)
}

/// Build a document tree from a nested structure.
///
/// The returned tree's root corresponds to the top level of `blocks`.
pub fn document_from_structure(blocks: &[Block]) -> ParseResult<DocumentTree> {
    let mut tree = DocumentTree::new();
    let root = tree.root();
    fill(&mut tree, root, blocks)?;

    debug!(nodes = tree.node_count(), "built document tree");
    Ok(tree)
}

fn fill(tree: &mut DocumentTree, node: NodeId, blocks: &[Block]) -> ParseResult<()> {
    for block in blocks {
        match block {
            Block::Nested(inner) => {
                let child = tree.append_child(node, Document::new())?;
                fill(tree, child, inner)?;
            }
            Block::Line(line) => {
                let document = tree.get_mut(node).ok_or(TreeError::NodeNotFound(node))?;
                match split_attribute(line) {
                    Some((key, value)) => {
                        document.set_attribute(key, value);
                    }
                    None => document.add_content(line.as_str()),
                }
            }
        }
    }
    Ok(())
}
