//! Errors for navigation requests.
//!
//! Every navigation function is total over valid positions, so the only
//! failures are precondition violations: the caller asked about a position the
//! document does not have.

/// A navigation request addressed a position outside the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },

    #[error("column {col} is past the end of line {line} (length {len})")]
    ColumnOutOfRange { line: usize, col: usize, len: usize },

    /// The document counted the line but could not produce it.
    #[error("document has no content for line {line}")]
    MissingLine { line: usize },
}
