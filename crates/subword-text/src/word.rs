//! Host word ranges: the coarse "word under the cursor" query.
//!
//! A **word** here is a maximal run of word characters: letters, digits and
//! underscore (`hello_world42` is one word, `foo.bar` is two). This is the
//! host's notion, the one subword navigation refines: the boundary scanner
//! only ever looks for subword stops *inside* the range returned here.
//!
//! # Touching, not containing
//!
//! A position counts as "at" a word when it lies anywhere in `[start, end]`,
//! end included. For `"foo bar"`, column 3 (just after `foo`) reports `foo`,
//! and column 4 reports `bar`. This lets the scanner tell "cursor at the end of
//! a word" apart from "cursor in whitespace".

use crate::line::Line;
use crate::position::Range;

/// Letters, digits, underscore.
#[inline]
#[must_use]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// The word touching column `col` of `line`.
///
/// Prefers the word starting at `col`; otherwise the word ending at `col`.
/// The two never differ in practice since adjacent word characters form a
/// single run. Returns `None` when neither side of `col` is a word character
/// or `col` is past the end of the line.
#[must_use]
pub fn word_range_in_line(line: &Line, col: usize) -> Option<Range> {
    if col > line.len() {
        return None;
    }

    let anchor = if line.char_at(col).is_some_and(is_word_char) {
        col
    } else if line.char_before(col).is_some_and(is_word_char) {
        col - 1
    } else {
        return None;
    };

    let chars = line.chars();
    let mut start = anchor;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = anchor + 1;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }

    Some(Range::on_line(line.number(), start, end))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(text: &str, col: usize) -> Option<(usize, usize)> {
        word_range_in_line(&Line::new(0, text), col).map(|r| (r.start.col, r.end.col))
    }

    #[test]
    fn word_chars() {
        for ch in ['a', 'Z', '0', '9', '_', 'é', 'ñ', '中'] {
            assert!(is_word_char(ch), "{ch:?} should be a word char");
        }
        for ch in [' ', '\t', '.', '-', '(', '$'] {
            assert!(!is_word_char(ch), "{ch:?} should not be a word char");
        }
    }

    #[test]
    fn inside_word() {
        assert_eq!(word("hello world", 2), Some((0, 5)));
        assert_eq!(word("hello world", 8), Some((6, 11)));
    }

    #[test]
    fn word_start_and_end_touch() {
        assert_eq!(word("hello world", 0), Some((0, 5)));
        assert_eq!(word("hello world", 5), Some((0, 5)));
        assert_eq!(word("hello world", 6), Some((6, 11)));
        assert_eq!(word("hello world", 11), Some((6, 11)));
    }

    #[test]
    fn underscores_and_digits_join_words() {
        assert_eq!(word("x = MAX_ITEM_99;", 7), Some((4, 15)));
    }

    #[test]
    fn punctuation_splits_words() {
        assert_eq!(word("foo.bar", 3), Some((0, 3)));
        assert_eq!(word("foo.bar", 4), Some((4, 7)));
    }

    #[test]
    fn no_word_in_whitespace_or_punctuation() {
        assert_eq!(word("a   b", 2), None);
        assert_eq!(word("x -> y", 3), None);
        assert_eq!(word("", 0), None);
        assert_eq!(word("   ", 3), None);
    }

    #[test]
    fn past_end_is_none() {
        assert_eq!(word("abc", 4), None);
    }

    #[test]
    fn range_is_on_the_lines_number() {
        let r = word_range_in_line(&Line::new(12, "  abc"), 3).unwrap();
        assert_eq!(r, Range::on_line(12, 2, 5));
    }
}
