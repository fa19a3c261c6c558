//! Text buffer, a rope-backed document the navigation core can read.
//!
//! A `Buffer` wraps a [`ropey::Rope`] with coordinate conversion between
//! `Position` (line, col) and rope char indices, loading from strings, files
//! and readers, and the one edit subword commands need: deleting a range.
//!
//! # Design choices
//!
//! - **ropey** gives O(log n) line lookup and edits. Navigation touches one
//!   or two lines per call, so a snapshot [`Line`] is copied out on demand.
//!
//! - **Columns are char offsets**, not byte offsets. Byte offsets never leak
//!   into the public API.
//!
//! - **Line endings are not content.** `\n`, `\r\n` and `\r` all terminate a
//!   line; the cursor's last column on a line is just before the terminator.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ropey::Rope;

use crate::document::TextDocument;
use crate::line::Line;
use crate::position::{Position, Range};
use crate::word::word_range_in_line;

/// A text buffer backed by a rope.
///
/// # Coordinate system
///
/// All positions are 0-indexed `(line, col)` pairs. Columns count Unicode
/// scalar values (chars). A buffer ending with `\n` has a trailing empty line,
/// matching how editors display files.
pub struct Buffer {
    rope: Rope,
    path: Option<PathBuf>,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            path: None,
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self {
            rope: Rope::from_str(&text),
            path: Some(path.to_path_buf()),
        })
    }

    /// Load a buffer from any reader (stdin, a socket, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the data is not valid UTF-8.
    pub fn from_reader<R: io::Read>(reader: R) -> io::Result<Self> {
        Ok(Self {
            rope: Rope::from_reader(reader)?,
            path: None,
        })
    }

    // -- Text access --------------------------------------------------------

    /// The file this buffer was loaded from, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Total character count (Unicode scalar values, not bytes).
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Number of chars in a line **excluding** any trailing line ending.
    /// Returns `None` if the line doesn't exist.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let rope_line = self.rope.line(line);
        let total = rope_line.len_chars();
        if total == 0 {
            return Some(0);
        }
        let last = rope_line.char(total - 1);
        let len = if last == '\n' {
            // Could be \r\n, check the char before.
            if total >= 2 && rope_line.char(total - 2) == '\r' {
                total - 2
            } else {
                total - 1
            }
        } else if last == '\r' {
            total - 1
        } else {
            total
        };
        Some(len)
    }

    /// True when `pos` addresses a cursor slot: an existing line and a column
    /// no further than the end of that line's content.
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        self.line_content_len(pos.line)
            .is_some_and(|len| pos.col <= len)
    }

    /// Collect all text into a `String`.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a `Position` to an absolute char index in the rope.
    ///
    /// Returns `None` if the line is out of bounds or the column lies past the
    /// line's content. Columns inside a line ending are rejected, so a `\r\n`
    /// pair can never be split.
    #[must_use]
    pub fn pos_to_char_idx(&self, pos: Position) -> Option<usize> {
        let len = self.line_content_len(pos.line)?;
        if pos.col > len {
            return None;
        }
        Some(self.rope.line_to_char(pos.line) + pos.col)
    }

    // -- Editing ------------------------------------------------------------

    /// Delete the text in `range` and return it.
    ///
    /// Returns `None`, leaving the buffer untouched, if either endpoint is out
    /// of bounds. An empty range deletes nothing and returns an empty string.
    pub fn delete(&mut self, range: Range) -> Option<String> {
        let start = self.pos_to_char_idx(range.start)?;
        let end = self.pos_to_char_idx(range.end)?;
        let removed = self.rope.slice(start..end).to_string();
        if start < end {
            self.rope.remove(start..end);
        }
        Some(removed)
    }
}

impl TextDocument for Buffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_at(&self, line: usize) -> Option<Line> {
        (line < self.rope.len_lines()).then(|| Line::from_chars(line, self.rope.line(line).chars()))
    }

    fn word_range_at(&self, pos: Position) -> Option<Range> {
        let line = self.line_at(pos.line)?;
        self.word_range_on(&line, pos.col)
    }

    fn word_range_on(&self, line: &Line, col: usize) -> Option<Range> {
        word_range_in_line(line, col)
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.rope.len_lines())
            .field("chars", &self.len_chars())
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
