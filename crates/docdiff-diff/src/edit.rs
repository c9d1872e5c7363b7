//! Edit operations produced by a diff.
//!
//! Node ids inside an [`EditOp`] point into one of the two diffed trees:
//! `Move`, `Modify` and `Delete` reference the old tree (plus the new tree
//! for a move's destination parent), `Create` references the new tree.

use std::fmt;

use serde::{Deserialize, Serialize};

use docdiff_tree::NodeId;

/// A single change between two document trees.
///
/// `level` is the breadth level (distance from the root) at which the
/// affected node was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOp {
    /// An old node now lives under a different parent.
    Move {
        /// The node, in the old tree.
        node: NodeId,
        /// Its parent, in the new tree.
        new_parent: NodeId,
        level: usize,
    },
    /// One attribute of a matched node changed or appeared.
    Modify {
        /// The node, in the old tree.
        node: NodeId,
        attribute: String,
        new_value: String,
        level: usize,
    },
    /// An old node has no counterpart in the new tree.
    Delete {
        /// The node, in the old tree.
        node: NodeId,
        level: usize,
    },
    /// A new node has no counterpart in the old tree.
    Create {
        /// The node, in the new tree.
        node: NodeId,
        level: usize,
    },
}

impl EditOp {
    /// The affected node.
    pub fn node(&self) -> NodeId {
        match self {
            Self::Move { node, .. }
            | Self::Modify { node, .. }
            | Self::Delete { node, .. }
            | Self::Create { node, .. } => *node,
        }
    }

    /// The breadth level the node was found at.
    pub fn level(&self) -> usize {
        match self {
            Self::Move { level, .. }
            | Self::Modify { level, .. }
            | Self::Delete { level, .. }
            | Self::Create { level, .. } => *level,
        }
    }

    /// Which variant this is.
    pub fn kind(&self) -> EditKind {
        match self {
            Self::Move { .. } => EditKind::Move,
            Self::Modify { .. } => EditKind::Modify,
            Self::Delete { .. } => EditKind::Delete,
            Self::Create { .. } => EditKind::Create,
        }
    }
}

/// The variant of an [`EditOp`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Move,
    Modify,
    Delete,
    Create,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "move"),
            Self::Modify => write!(f, "modify"),
            Self::Delete => write!(f, "delete"),
            Self::Create => write!(f, "create"),
        }
    }
}

/// The ordered result of a diff.
///
/// Old-tree operations (moves, modifies, deletes) come first in old-tree
/// breadth-first order, followed by creates in new-tree breadth-first order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditScript {
    /// The operations, in emission order.
    pub ops: Vec<EditOp>,
}

impl EditScript {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the trees were equivalent.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Iterate over the operations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    /// Number of operations of one kind.
    pub fn count(&self, kind: EditKind) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }

    /// Number of moves.
    pub fn moves(&self) -> usize {
        self.count(EditKind::Move)
    }

    /// Number of attribute modifications.
    pub fn modifications(&self) -> usize {
        self.count(EditKind::Modify)
    }

    /// Number of deletions.
    pub fn deletions(&self) -> usize {
        self.count(EditKind::Delete)
    }

    /// Number of creations.
    pub fn creations(&self) -> usize {
        self.count(EditKind::Create)
    }
}

impl IntoIterator for EditScript {
    type Item = EditOp;
    type IntoIter = std::vec::IntoIter<EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
