//! Serializable views of trees and edit scripts for output.

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;

use docdiff_diff::{EditKind, EditOp, EditScript};
use docdiff_tree::{Document, DocumentTree, NodeId};

/// Human-readable name of a node.
fn node_label(tree: &DocumentTree, id: NodeId) -> String {
    match tree.get(id).and_then(Document::label) {
        Some(label) => label.to_string(),
        None if tree.parent(id).is_none() => "(root)".to_string(),
        None => format!("(node {id})"),
    }
}

#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub summary: Summary,
    pub ops: Vec<OpRecord>,
}

#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub moves: usize,
    pub modifications: usize,
    pub deletions: usize,
    pub creations: usize,
}

#[derive(Debug, Serialize)]
pub struct OpRecord {
    pub kind: EditKind,
    pub level: usize,
    pub node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

impl DiffReport {
    /// Resolve every op's node ids against the tree it points into.
    pub fn build(old: &DocumentTree, new: &DocumentTree, script: &EditScript) -> Self {
        let ops = script
            .iter()
            .map(|op| {
                let mut record = OpRecord {
                    kind: op.kind(),
                    level: op.level(),
                    node: String::new(),
                    new_parent: None,
                    attribute: None,
                    new_value: None,
                };
                match op {
                    EditOp::Move {
                        node, new_parent, ..
                    } => {
                        record.node = node_label(old, *node);
                        record.new_parent = Some(node_label(new, *new_parent));
                    }
                    EditOp::Modify {
                        node,
                        attribute,
                        new_value,
                        ..
                    } => {
                        record.node = node_label(old, *node);
                        record.attribute = Some(attribute.clone());
                        record.new_value = Some(new_value.clone());
                    }
                    EditOp::Delete { node, .. } => record.node = node_label(old, *node),
                    EditOp::Create { node, .. } => record.node = node_label(new, *node),
                }
                record
            })
            .collect();

        Self {
            summary: Summary {
                moves: script.moves(),
                modifications: script.modifications(),
                deletions: script.deletions(),
                creations: script.creations(),
            },
            ops,
        }
    }
}

impl OpRecord {
    pub fn to_text(&self) -> String {
        let tag = format!("[L{}]", self.level).dimmed();
        match self.kind {
            EditKind::Move => format!(
                "{} {} {} -> {}",
                tag,
                "moved   ".yellow(),
                self.node.bold(),
                self.new_parent.as_deref().unwrap_or("?"),
            ),
            EditKind::Modify => format!(
                "{} {} {}.{} = {}",
                tag,
                "modified".cyan(),
                self.node.bold(),
                self.attribute.as_deref().unwrap_or("?"),
                self.new_value.as_deref().unwrap_or(""),
            ),
            EditKind::Delete => format!("{} {} {}", tag, "deleted ".red(), self.node.bold()),
            EditKind::Create => format!("{} {} {}", tag, "created ".green(), self.node.bold()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TreeReport {
    pub nodes: Vec<NodeRecord>,
}

#[derive(Debug, Serialize)]
pub struct NodeRecord {
    pub level: usize,
    pub label: String,
    pub attributes: BTreeMap<String, String>,
    pub content: Vec<String>,
}

impl TreeReport {
    /// All nodes in breadth-first order.
    pub fn build(tree: &DocumentTree) -> Self {
        let nodes = tree
            .breadth_first(tree.root())
            .filter_map(|(level, id)| {
                let doc = tree.get(id)?;
                Some(NodeRecord {
                    level,
                    label: node_label(tree, id),
                    attributes: doc
                        .attributes()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                    content: doc.content().to_vec(),
                })
            })
            .collect();
        Self { nodes }
    }
}

impl NodeRecord {
    pub fn to_text(&self) -> String {
        let attrs: Vec<String> = self
            .attributes
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        let mut line = format!(
            "{}{} {}",
            "  ".repeat(self.level),
            format!("[L{}]", self.level).dimmed(),
            self.label.bold()
        );
        if !attrs.is_empty() {
            line.push_str(&format!(" {}", attrs.join(" ").dimmed()));
        }
        if !self.content.is_empty() {
            line.push_str(&format!(" ({} lines)", self.content.len()));
        }
        line
    }
}
