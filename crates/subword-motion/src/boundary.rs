//! Subword boundaries and the left/right scans that find them.
//!
//! A *boundary* is a column where a subword starts or ends. Given the
//! characters before (`prev`), at (`cur`) and after (`next`) a column, the
//! column is a boundary when:
//!
//! | Rule | Example (`|` = boundary) |
//! |------|--------------------------|
//! | `cur` is `_`, `prev` is not | `foo|_bar` |
//! | `prev` is `_`, `cur` is not | `foo_|bar` |
//! | `cur` is a digit, `prev` is not | `item|99` |
//! | `prev` is a digit, `cur` is not | `99|items` |
//! | `cur` is upper, `prev` is lower | `foo|Bar` |
//! | `cur` is upper, `next` is lower | `XML|Parser` |
//!
//! # Inside and outside words
//!
//! The scans only apply these rules inside the host's word range (see
//! [`TextDocument::word_range_at`]). When the cursor is not inside a word, they
//! fall back to the host editor's plain word-left/word-right behaviour: skip
//! whitespace, hop across line breaks, stop at document edges.

use subword_text::{Line, Position, TextDocument};

use crate::classify::{CharClass, classify};
use crate::error::NavError;

// ---------------------------------------------------------------------------
// Boundary rule
// ---------------------------------------------------------------------------

/// True if column `col` of `line` is a subword boundary.
///
/// Columns outside the line classify as [`CharClass::None`], so `col` may be
/// anything from 0 to `line.len()` (or beyond, harmlessly).
#[must_use]
pub fn is_boundary(line: &Line, col: usize) -> bool {
    use CharClass::{Digit, Lower, Underscore, Upper};

    let prev = classify(line.char_before(col));
    let cur = classify(line.char_at(col));
    let next = classify(col.checked_add(1).and_then(|c| line.char_at(c)));

    (cur == Underscore && prev != Underscore)
        || (prev == Underscore && cur != Underscore)
        || (cur == Digit && prev != Digit)
        || (prev == Digit && cur != Digit)
        || (cur == Upper && prev == Lower)
        || (cur == Upper && next == Lower)
}

/// Every boundary column of `line`, in order, including column 0 and the end
/// when the rules fire there.
#[must_use]
pub fn boundaries_in_line(line: &Line) -> Vec<usize> {
    (0..=line.len()).filter(|&col| is_boundary(line, col)).collect()
}

// ---------------------------------------------------------------------------
// Scans
// ---------------------------------------------------------------------------

/// The nearest subword stop strictly left of `pos`.
///
/// Inside a word this is the previous boundary, or the word start. Outside a
/// word (or at its very start) the cursor moves like a plain word-left: to
/// just after the previous token on the line, or to the end of the previous
/// line's content when at column 0. At the document start, `pos` is returned
/// unchanged.
///
/// # Errors
///
/// Returns [`NavError`] if `pos` is not a valid position in `doc`.
pub fn next_boundary_left<D>(doc: &D, pos: Position) -> Result<Position, NavError>
where
    D: TextDocument + ?Sized,
{
    let line = checked_line(doc, pos)?;
    scan_left(doc, &line, pos)
}

/// The nearest subword stop strictly right of `pos`.
///
/// Inside a word this is the next boundary, or the word end. Outside a word
/// (or at its very end) the cursor moves like a plain word-right: over
/// whitespace to the next token, or to the first non-blank column of the next
/// line when at the end of a line. At the document end, `pos` is returned
/// unchanged.
///
/// # Errors
///
/// Returns [`NavError`] if `pos` is not a valid position in `doc`.
pub fn next_boundary_right<D>(doc: &D, pos: Position) -> Result<Position, NavError>
where
    D: TextDocument + ?Sized,
{
    let line = checked_line(doc, pos)?;
    scan_right(doc, &line, pos)
}

/// Columns a cursor visits on `line_number` when moving right repeatedly
/// from column 0, until it leaves the line or stops moving.
///
/// Column 0 itself is not included; the line end is included whenever the
/// walk reaches it.
///
/// # Errors
///
/// Returns [`NavError`] if `line_number` is not a line of `doc`.
pub fn line_stops<D>(doc: &D, line_number: usize) -> Result<Vec<usize>, NavError>
where
    D: TextDocument + ?Sized,
{
    let mut stops = Vec::new();
    let mut pos = Position::new(line_number, 0);
    // One snapshot serves the whole walk.
    let line = checked_line(doc, pos)?;

    loop {
        let next = scan_right(doc, &line, pos)?;
        if next.line != line_number || next <= pos {
            break;
        }
        stops.push(next.col);
        pos = next;
    }
    Ok(stops)
}

/// Left scan from `pos`, which must be a valid column of `line`.
fn scan_left<D>(doc: &D, line: &Line, pos: Position) -> Result<Position, NavError>
where
    D: TextDocument + ?Sized,
{
    let target = match doc.word_range_on(line, pos.col) {
        Some(range) if range.start != pos => {
            debug_assert_eq!(range.start.line, pos.line, "word range left the line");
            (range.start.col + 1..pos.col)
                .rev()
                .find(|&col| is_boundary(line, col))
                .map_or(range.start, |col| line.at(col))
        }
        _ => word_left(doc, line, pos)?,
    };

    tracing::trace!(from = %pos, to = %target, "subword left");
    Ok(target)
}

/// Right scan from `pos`, which must be a valid column of `line`.
fn scan_right<D>(doc: &D, line: &Line, pos: Position) -> Result<Position, NavError>
where
    D: TextDocument + ?Sized,
{
    let target = match doc.word_range_on(line, pos.col) {
        Some(range) if range.end != pos => {
            debug_assert_eq!(range.end.line, pos.line, "word range left the line");
            (pos.col + 1..=range.end.col)
                .find(|&col| is_boundary(line, col))
                .map_or(range.end, |col| line.at(col))
        }
        _ => word_right(doc, line, pos)?,
    };

    tracing::trace!(from = %pos, to = %target, "subword right");
    Ok(target)
}

// ---------------------------------------------------------------------------
// Outside-word fallbacks
// ---------------------------------------------------------------------------

/// Plain word-left from a position that is not inside a word.
fn word_left<D>(doc: &D, line: &Line, pos: Position) -> Result<Position, NavError>
where
    D: TextDocument + ?Sized,
{
    if pos.col == 0 {
        if pos.line == 0 {
            return Ok(pos);
        }
        let prev = fetch_line(doc, pos.line - 1)?;
        // Land just after the last non-blank char of the previous line.
        let col = (1..=prev.len())
            .rev()
            .find(|&col| prev.char_at(col - 1).is_some_and(|ch| !ch.is_whitespace()))
            .unwrap_or(0);
        return Ok(prev.at(col));
    }

    // The char right before the cursor is taken as-is; anything further left
    // means whitespace was skipped, so land just after that char.
    let mut shift = 0;
    for col in (1..pos.col).rev() {
        if line.char_at(col).is_some_and(|ch| !ch.is_whitespace()) {
            return Ok(line.at(col + shift));
        }
        shift = 1;
    }
    Ok(line.start())
}

/// Plain word-right from a position that is not inside a word.
fn word_right<D>(doc: &D, line: &Line, pos: Position) -> Result<Position, NavError>
where
    D: TextDocument + ?Sized,
{
    if pos.col == line.len() {
        if doc.is_last_line(pos.line) {
            return Ok(pos);
        }
        let next = fetch_line(doc, pos.line + 1)?;
        return Ok(next.at(next.first_non_whitespace()));
    }

    // A non-blank char right at the cursor is stepped over; one found after
    // skipping whitespace is landed on.
    let mut shift = 1;
    for col in pos.col..line.len() {
        if line.char_at(col).is_some_and(|ch| !ch.is_whitespace()) {
            return Ok(line.at(col + shift));
        }
        shift = 0;
    }
    Ok(line.end())
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// The line `pos` sits on, after checking that `pos` is addressable.
fn checked_line<D>(doc: &D, pos: Position) -> Result<Line, NavError>
where
    D: TextDocument + ?Sized,
{
    let line_count = doc.line_count();
    if pos.line >= line_count {
        tracing::debug!(%pos, line_count, "rejected position: line out of range");
        return Err(NavError::LineOutOfRange {
            line: pos.line,
            line_count,
        });
    }
    let line = fetch_line(doc, pos.line)?;
    if pos.col > line.len() {
        tracing::debug!(%pos, len = line.len(), "rejected position: column out of range");
        return Err(NavError::ColumnOutOfRange {
            line: pos.line,
            col: pos.col,
            len: line.len(),
        });
    }
    Ok(line)
}

fn fetch_line<D>(doc: &D, line: usize) -> Result<Line, NavError>
where
    D: TextDocument + ?Sized,
{
    doc.line_at(line).ok_or(NavError::MissingLine { line })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
