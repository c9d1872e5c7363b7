//! Document tree for docdiff.
//!
//! A parsed document is a tree of [`Document`] nodes stored in an
//! [`indextree`] arena. Parent and child links are index relations
//! ([`NodeId`]), so back-navigation never creates shared ownership.
//!
//! # Key Types
//!
//! - [`DocumentTree`] -- The arena plus its root node
//! - [`Document`] -- One block: attribute map and content lines
//! - [`NodeRef`] -- Borrowed view of a node inside its tree
//! - [`BreadthFirst`] / [`AtLevel`] -- Lazy level-ordered traversals

pub mod document;
pub mod error;
pub mod traverse;
pub mod tree;

pub use indextree::NodeId;

pub use document::{Document, ID_ATTRIBUTE};
pub use error::{TreeError, TreeResult};
pub use traverse::{AtLevel, BreadthFirst};
pub use tree::{DocumentTree, NodeRef};
