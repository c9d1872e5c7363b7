//! The arena that owns every node of a parsed document.
//!
//! [`DocumentTree`] owns nodes top-down through an [`indextree::Arena`].
//! Parent links are index relations, so asking a node for its parent never
//! involves shared ownership.
//!
//! # Invariants
//!
//! - Every node except the root has exactly one parent.
//! - A node appears exactly once among its parent's children.
//! - Nodes are never removed, so every issued [`NodeId`] stays valid.

use std::collections::VecDeque;

use indextree::{Arena, NodeId};
use tracing::trace;

use crate::document::Document;
use crate::error::{TreeError, TreeResult};
use crate::traverse::{AtLevel, BreadthFirst};

/// A document tree: an arena of [`Document`] nodes plus its root.
#[derive(Clone, Debug)]
pub struct DocumentTree {
    arena: Arena<Document>,
    root: NodeId,
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTree {
    /// Create a tree holding a single empty root node.
    pub fn new() -> Self {
        Self::with_root(Document::new())
    }

    /// Create a tree whose root carries `root`.
    pub fn with_root(root: Document) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(root);
        Self { arena, root }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.count()
    }

    /// The payload of a node, or `None` if `id` is not in this tree.
    pub fn get(&self, id: NodeId) -> Option<&Document> {
        self.arena.get(id).map(|node| node.get())
    }

    /// Mutable payload of a node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Document> {
        self.arena.get_mut(id).map(|node| node.get_mut())
    }

    /// A borrowed view of `id`, or `None` if it is not in this tree.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.arena.get(id).map(|_| NodeRef { tree: self, id })
    }

    /// A borrowed view of the root.
    pub fn root_ref(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: self.root,
        }
    }

    /// The parent of `id`. The root has none.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|node| node.parent())
    }

    /// Direct children of `id` in sibling order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let valid = self.arena.get(id).is_some();
        valid
            .then(|| id.children(&self.arena))
            .into_iter()
            .flatten()
    }

    /// Number of parent hops from `id` up to its root.
    pub fn level_of(&self, id: NodeId) -> usize {
        if self.arena.get(id).is_none() {
            return 0;
        }
        id.ancestors(&self.arena).count().saturating_sub(1)
    }

    /// `id` and every descendant, breadth-first by level.
    ///
    /// Yields `(level, node)` pairs where `level` is relative to `id`: the
    /// node itself at 0, then all of its children in sibling order, then all
    /// grandchildren, and so on.
    pub fn breadth_first(&self, id: NodeId) -> BreadthFirst<'_> {
        BreadthFirst::new(self, id)
    }

    /// Descendants exactly `level` hops below `id`, in sibling order.
    /// `level == 0` yields `id` itself.
    pub fn at_level(&self, id: NodeId, level: usize) -> AtLevel<'_> {
        AtLevel::new(self, id, level)
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Append a new node carrying `document` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, document: Document) -> TreeResult<NodeId> {
        if self.arena.get(parent).is_none() {
            return Err(TreeError::NodeNotFound(parent));
        }
        let child = self.arena.new_node(document);
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|e| TreeError::Append {
                parent,
                reason: e.to_string(),
            })?;
        Ok(child)
    }

    /// Graft a copy of `other` as the last child of `parent`.
    ///
    /// Returns the id of the copied root inside this tree. The copy keeps
    /// `other`'s child order at every level.
    pub fn append_document(&mut self, parent: NodeId, other: &DocumentTree) -> TreeResult<NodeId> {
        let grafted_root = self.append_child(parent, other.arena[other.root].get().clone())?;

        let mut queue: VecDeque<(NodeId, NodeId)> = VecDeque::new();
        queue.push_back((other.root, grafted_root));

        while let Some((source, target)) = queue.pop_front() {
            for child in source.children(&other.arena) {
                let copied = self.append_child(target, other.arena[child].get().clone())?;
                queue.push_back((child, copied));
            }
        }

        trace!(
            parent = %parent,
            nodes = other.node_count(),
            "grafted document subtree"
        );
        Ok(grafted_root)
    }
}

/// A node viewed through the tree that owns it.
///
/// Identity predicates receive `NodeRef`s so they can inspect attributes,
/// content, and structure of nodes from two different trees.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    tree: &'a DocumentTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// The node's id within its tree.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this node belongs to.
    pub fn tree(&self) -> &'a DocumentTree {
        self.tree
    }

    /// The node's payload.
    pub fn document(&self) -> &'a Document {
        self.tree.arena[self.id].get()
    }

    /// Shorthand for `self.document().attribute(key)`.
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.document().attribute(key)
    }

    /// Content lines of this node.
    pub fn content(&self) -> &'a [String] {
        self.document().content()
    }

    /// The parent node, if any.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.tree.parent(self.id).map(|id| NodeRef {
            tree: self.tree,
            id,
        })
    }

    /// Distance from the tree root.
    pub fn level(&self) -> usize {
        self.tree.level_of(self.id)
    }
}
