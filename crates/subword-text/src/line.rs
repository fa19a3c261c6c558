//! A single line of a document, detached from its buffer.
//!
//! `Line` owns its characters as a `Vec<char>` so that column access is O(1)
//! and boundary scans can look one character to either side without walking a
//! rope. Line endings are never part of the content: the last column of a
//! line is the position just before its `\n`.

use crate::position::{Position, Range};

/// An immutable snapshot of one line's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: usize,
    chars: Vec<char>,
}

impl Line {
    /// Build line `number` from its text. A trailing `\n`, `\r\n` or `\r` is
    /// stripped.
    #[must_use]
    pub fn new(number: usize, text: &str) -> Self {
        Self::from_chars(number, text.chars())
    }

    /// Build a line from a char iterator, stripping a trailing line ending.
    #[must_use]
    pub fn from_chars(number: usize, chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        if chars.last() == Some(&'\n') {
            chars.pop();
        }
        if chars.last() == Some(&'\r') {
            chars.pop();
        }
        Self { number, chars }
    }

    /// 0-indexed line number within the document.
    #[inline]
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Number of columns (chars), excluding the line ending.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for a zero-length line.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at `col`, or `None` outside `0..len()`.
    #[inline]
    #[must_use]
    pub fn char_at(&self, col: usize) -> Option<char> {
        self.chars.get(col).copied()
    }

    /// The character before `col`. `None` at column 0.
    #[inline]
    #[must_use]
    pub fn char_before(&self, col: usize) -> Option<char> {
        col.checked_sub(1).and_then(|c| self.char_at(c))
    }

    /// The line content as chars.
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Column of the first non-whitespace character. For a blank line this is
    /// the line length, so the result is always a valid cursor column.
    #[must_use]
    pub fn first_non_whitespace(&self) -> usize {
        self.chars
            .iter()
            .position(|c| !c.is_whitespace())
            .unwrap_or(self.chars.len())
    }

    /// Position of column 0.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Position {
        Position::new(self.number, 0)
    }

    /// Position just past the last character.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Position {
        Position::new(self.number, self.chars.len())
    }

    /// The whole line, `start()..end()`.
    #[inline]
    #[must_use]
    pub fn range(&self) -> Range {
        Range::new(self.start(), self.end())
    }

    /// Position of `col` on this line.
    #[inline]
    #[must_use]
    pub const fn at(&self, col: usize) -> Position {
        Position::new(self.number, col)
    }
}
