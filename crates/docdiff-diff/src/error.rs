//! Error types for the diff crate.

use docdiff_parse::ParseError;

/// Errors that can occur around a diff.
///
/// Diffing two trees never fails; these cover the parsing and configuration
/// steps that feed it.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// One of the two input documents failed to parse.
    #[error("failed to parse {side} document: {source}")]
    Parse {
        /// Which input failed: `"old"` or `"new"`.
        side: &'static str,
        /// The underlying parse failure.
        source: ParseError,
    },

    /// Diff configuration could not be read.
    #[error("invalid diff configuration: {0}")]
    Config(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
