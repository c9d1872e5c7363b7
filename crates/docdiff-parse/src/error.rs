//! Error types for the parse crate.

use docdiff_tree::TreeError;

/// Errors that can occur while parsing a document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A dedent landed between two open block widths.
    #[error("indentation error at line {line}: width {width} matches no open block")]
    Indentation {
        /// 1-based line number of the offending line.
        line: usize,
        /// Leading whitespace width of that line.
        width: usize,
    },

    /// The document tree rejected a node while building.
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
}

/// Convenience alias for parse results.
pub type ParseResult<T> = Result<T, ParseError>;
