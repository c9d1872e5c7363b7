//! Tree diff for docdiff.
//!
//! Matches nodes of an old and a new [`DocumentTree`] by identity and
//! reports what happened to them as an ordered [`EditScript`].
//!
//! # Key Types
//!
//! - [`EditScript`] / [`EditOp`] -- Move, Modify, Delete, and Create operations
//! - [`Identity`] / [`SameAttribute`] -- Pluggable "same logical node" predicate
//! - [`DiffConfig`] -- Serializable diff settings (identity attribute)
//! - [`DocumentDiff`] -- Parsed trees plus the script that relates them
//!
//! [`DocumentTree`]: docdiff_tree::DocumentTree

pub mod config;
pub mod differ;
pub mod edit;
pub mod error;
pub mod identity;

pub use config::DiffConfig;
pub use differ::{diff_documents, diff_documents_with, diff_texts, DocumentDiff};
pub use edit::{EditKind, EditOp, EditScript};
pub use error::{DiffError, DiffResult};
pub use identity::{same_ids, Identity, SameAttribute};
