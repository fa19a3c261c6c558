//! The host capability the navigation core reads from.
//!
//! Anything that can hand out lines and answer "which word is at this
//! position" can be navigated. The workspace ships one implementation,
//! [`Buffer`](crate::buffer::Buffer); tests and embedders supply their own.

use crate::line::Line;
use crate::position::{Position, Range};

/// Read-only access to a line-oriented document.
pub trait TextDocument {
    /// Number of lines. Never zero for a well-formed document: an empty
    /// document has one empty line.
    fn line_count(&self) -> usize;

    /// Snapshot of line `line`, or `None` if `line >= line_count()`.
    fn line_at(&self, line: usize) -> Option<Line>;

    /// The word touching `pos`, in the host's own notion of a word.
    ///
    /// The range must lie on `pos.line` and satisfy `range.touches(pos)`.
    /// `None` when `pos` sits on whitespace or punctuation with no word ending
    /// right before it.
    fn word_range_at(&self, pos: Position) -> Option<Range>;

    /// The word touching column `col` of `line`, a snapshot this document
    /// handed out earlier.
    ///
    /// Defaults to [`word_range_at`](Self::word_range_at). Hosts that can
    /// answer from the snapshot alone override it to skip a second lookup.
    fn word_range_on(&self, line: &Line, col: usize) -> Option<Range> {
        self.word_range_at(line.at(col))
    }

    /// True if `line` is the last line of the document.
    fn is_last_line(&self, line: usize) -> bool {
        line + 1 >= self.line_count()
    }
}

impl<T: TextDocument + ?Sized> TextDocument for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }

    fn line_at(&self, line: usize) -> Option<Line> {
        (**self).line_at(line)
    }

    fn word_range_at(&self, pos: Position) -> Option<Range> {
        (**self).word_range_at(pos)
    }

    fn word_range_on(&self, line: &Line, col: usize) -> Option<Range> {
        (**self).word_range_on(line, col)
    }
}
