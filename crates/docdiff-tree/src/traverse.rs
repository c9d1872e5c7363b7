//! Lazy level-ordered traversals over a [`DocumentTree`].
//!
//! The differ relies on two orders:
//!
//! - [`BreadthFirst`]: every node below a start node, strictly level by
//!   level, sibling order within a level.
//! - [`AtLevel`]: only the nodes exactly `n` levels below a start node, in
//!   sibling (document) order.

use std::collections::VecDeque;

use indextree::NodeId;

use crate::tree::DocumentTree;

/// Breadth-first iterator yielding `(level, node)` pairs.
///
/// Created by [`DocumentTree::breadth_first`].
#[derive(Clone, Debug)]
pub struct BreadthFirst<'a> {
    tree: &'a DocumentTree,
    queue: VecDeque<(usize, NodeId)>,
}

impl<'a> BreadthFirst<'a> {
    pub(crate) fn new(tree: &'a DocumentTree, start: NodeId) -> Self {
        let mut queue = VecDeque::new();
        if tree.get(start).is_some() {
            queue.push_back((0, start));
        }
        Self { tree, queue }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = (usize, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, id) = self.queue.pop_front()?;
        self.queue
            .extend(self.tree.children(id).map(|child| (level + 1, child)));
        Some((level, id))
    }
}

/// Iterator over the nodes exactly `n` levels below a start node.
///
/// Created by [`DocumentTree::at_level`]. Walks depth-first but never
/// descends past the target level, so shallow lookups in deep trees stay
/// cheap.
#[derive(Clone, Debug)]
pub struct AtLevel<'a> {
    tree: &'a DocumentTree,
    target: usize,
    stack: Vec<(usize, NodeId)>,
}

impl<'a> AtLevel<'a> {
    pub(crate) fn new(tree: &'a DocumentTree, start: NodeId, target: usize) -> Self {
        let mut stack = Vec::new();
        if tree.get(start).is_some() {
            stack.push((0, start));
        }
        Self {
            tree,
            target,
            stack,
        }
    }
}

impl Iterator for AtLevel<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, id)) = self.stack.pop() {
            if depth == self.target {
                return Some(id);
            }
            // Pushed in reverse so the first sibling is popped first.
            let children: Vec<NodeId> = self.tree.children(id).collect();
            self.stack
                .extend(children.into_iter().rev().map(|child| (depth + 1, child)));
        }
        None
    }
}
