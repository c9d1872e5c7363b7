//! Error types for the document tree.

use indextree::NodeId;

/// Errors that can occur while editing a [`DocumentTree`](crate::DocumentTree).
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// A node id does not belong to this tree's arena.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// The arena refused to link a child under a parent.
    #[error("cannot append under node {parent}: {reason}")]
    Append {
        /// The intended parent.
        parent: NodeId,
        /// Why the arena rejected the link.
        reason: String,
    },
}

/// Convenience alias for tree results.
pub type TreeResult<T> = Result<T, TreeError>;
