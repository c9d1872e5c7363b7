//! Parsing for docdiff.
//!
//! Turns indentation-delimited text into a [`DocumentTree`] in two steps:
//!
//! 1. [`nest_indentation`] groups lines into nested [`Block`]s by leading
//!    whitespace width.
//! 2. [`document_from_structure`] turns blocks into document nodes,
//!    splitting `key: value` attribute lines from content lines.
//!
//! [`parse_document`] runs both.
//!
//! [`DocumentTree`]: docdiff_tree::DocumentTree

pub mod builder;
pub mod error;
pub mod nest;

pub use builder::{document_from_structure, is_attribute_line, parse_document};
pub use error::{ParseError, ParseResult};
pub use nest::{nest_indentation, nest_lines, split_indent, Block};
