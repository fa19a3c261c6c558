//! Text position and range types.
//!
//! All coordinates are **0-indexed**. Line 0 is the first line, column 0 is the
//! first character. Columns count Unicode scalar values (chars), not bytes or
//! grapheme clusters, so `"naïve"` has five columns regardless of encoding.
//!
//! Display output converts to 1-indexed for humans; everything else stays
//! 0-indexed.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A position in a document: (line, column), both 0-indexed.
///
/// `col` is the char offset from the start of the line. A column equal to the
/// line's length is the position just past the last character, which is where
/// a cursor sits at the end of a line.
///
/// # Ordering
///
/// Positions are ordered lexicographically: line first, then column. Within a
/// line this is plain column order, which is all the boundary scanner needs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// The document start, line 0 column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    /// Create a new position.
    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line
            .cmp(&other.line)
            .then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed, `line:col` like an editor status line.
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A range in a document with `start <= end`.
///
/// Two containment tests are offered because callers disagree on what "in"
/// means:
///
/// - [`contains`](Self::contains) is half-open `[start, end)`, the usual
///   selection/deletion semantics.
/// - [`touches`](Self::touches) is closed `[start, end]`. Word ranges use it: a
///   cursor sitting right after the last character of a word is still "at"
///   that word.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a range. Panics in debug if `start > end`.
    #[inline]
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        debug_assert!(
            start.line < end.line || (start.line == end.line && start.col <= end.col),
            "Range::new requires start <= end"
        );
        Self { start, end }
    }

    /// Create a range from two arbitrary positions, swapping if needed so
    /// that `start <= end`. Selections use this: the anchor may sit after the
    /// head.
    #[inline]
    #[must_use]
    pub fn ordered(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A range covering columns `start..end` of a single line.
    #[inline]
    #[must_use]
    pub const fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    /// True when the range spans zero characters.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start.line == self.end.line && self.start.col == self.end.col
    }

    /// True when `pos` falls within `[start, end)`.
    #[inline]
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        pos >= self.start && pos < self.end
    }

    /// True when `pos` falls within `[start, end]`.
    #[inline]
    #[must_use]
    pub fn touches(self, pos: Position) -> bool {
        pos >= self.start && pos <= self.end
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.start.line, self.start.col, self.end.line, self.end.col
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
