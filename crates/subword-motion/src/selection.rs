//! Selections and the subword actions that transform them.
//!
//! A host editor binds six commands to subword navigation: move, select and
//! delete, each to the left or right. Key handling and applying edits stay in
//! the host; what lives here is the pure part, computing where each cursor
//! goes and which text a delete covers.
//!
//! # Anchor and head
//!
//! A [`Selection`] has an `anchor` that stays put and a `head` that moves.
//! When they are equal the selection is just a cursor. Navigation always
//! starts from the head:
//!
//! - **Move** collapses the selection to the boundary found from the head.
//! - **Select** moves the head and keeps the anchor, growing or shrinking the
//!   selection.
//! - **Delete** removes the selected text if there is any, otherwise the text
//!   between the head and the boundary.

use subword_text::{Position, Range, TextDocument};

use crate::boundary::{next_boundary_left, next_boundary_right};
use crate::error::NavError;

/// Which way to look for the next boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The boundary next to `pos` in this direction.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if `pos` is not a valid position in `doc`.
    pub fn boundary_from<D>(self, doc: &D, pos: Position) -> Result<Position, NavError>
    where
        D: TextDocument + ?Sized,
    {
        match self {
            Self::Left => next_boundary_left(doc, pos),
            Self::Right => next_boundary_right(doc, pos),
        }
    }
}

/// A subword command, independent of how it was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubwordAction {
    /// Move the cursor, dropping any selection.
    Move(Direction),
    /// Extend or shrink the selection.
    Select(Direction),
    /// Delete the selection, or up to the next boundary.
    Delete(Direction),
}

/// A cursor with an optional selection: an anchor and a head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    anchor: Position,
    head: Position,
}

impl Selection {
    /// A selection from `anchor` to `head`.
    #[must_use]
    pub const fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// An empty selection (a bare cursor) at `pos`.
    #[must_use]
    pub const fn cursor(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// The end that stays put.
    #[inline]
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    /// The end that moves.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> Position {
        self.head
    }

    /// True when anchor and head coincide.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The selected text as an ordered range.
    #[must_use]
    pub fn range(&self) -> Range {
        Range::ordered(self.anchor, self.head)
    }

    // -- Actions ------------------------------------------------------------

    /// The selection after a `Move` or `Select`.
    ///
    /// `Delete` leaves the cursor where the deleted range started, which is
    /// also what a host sees after applying [`delete_range`](Self::delete_range).
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if the head is not a valid position in `doc`.
    pub fn apply<D>(self, doc: &D, action: SubwordAction) -> Result<Self, NavError>
    where
        D: TextDocument + ?Sized,
    {
        let next = match action {
            SubwordAction::Move(dir) => Self::cursor(dir.boundary_from(doc, self.head)?),
            SubwordAction::Select(dir) => Self::new(self.anchor, dir.boundary_from(doc, self.head)?),
            SubwordAction::Delete(dir) => Self::cursor(self.delete_range(doc, dir)?.start),
        };
        tracing::trace!(?action, from = ?self, to = ?next, "subword action");
        Ok(next)
    }

    /// The text a delete in `direction` removes.
    ///
    /// A non-empty selection deletes itself. Otherwise the range runs from the
    /// head to the boundary in `direction`; at a document edge it is empty.
    ///
    /// # Errors
    ///
    /// Returns [`NavError`] if the head is not a valid position in `doc`.
    pub fn delete_range<D>(&self, doc: &D, direction: Direction) -> Result<Range, NavError>
    where
        D: TextDocument + ?Sized,
    {
        if !self.is_empty() {
            return Ok(self.range());
        }
        let target = direction.boundary_from(doc, self.head)?;
        Ok(Range::ordered(self.head, target))
    }
}

impl From<Position> for Selection {
    fn from(pos: Position) -> Self {
        Self::cursor(pos)
    }
}

/// Apply `action` to every selection, as for a multi-cursor editor.
///
/// # Errors
///
/// Returns the first [`NavError`] encountered; no partial result is returned.
pub fn apply_all<D>(
    doc: &D,
    selections: &[Selection],
    action: SubwordAction,
) -> Result<Vec<Selection>, NavError>
where
    D: TextDocument + ?Sized,
{
    selections
        .iter()
        .map(|sel| sel.apply(doc, action))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
