//! Character classification for subword boundaries.
//!
//! Every character falls into exactly one [`CharClass`]. The boundary rules in
//! [`boundary`](crate::boundary) only ever compare the classes of neighbouring
//! characters, so this is the single place where "what counts as uppercase"
//! is decided.
//!
//! # Case policy
//!
//! Case is decided with Rust's default Unicode case mapping
//! ([`char::to_uppercase`] / [`char::to_lowercase`]), which does not depend on
//! the process locale. A character is uppercase when it maps to itself under
//! uppercasing and its lowercase form is different; lowercase is the mirror.
//! Consequences worth knowing:
//!
//! - `'ß'` is lowercase (uppercases to `"SS"`, lowercases to itself).
//! - Titlecase letters such as `'ǅ'` are neither, so they classify as `None`.
//! - Uncased scripts (`'中'`, `'ا'`) are `None`.
//!
//! Digits are ASCII `0`–`9` only; other decimal digits are `None`.

/// Class of a single character, or of the absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Out of line bounds, or a character with no subword role (whitespace,
    /// punctuation, uncased letters).
    None,
    /// Cased letter in its uppercase form.
    Upper,
    /// Cased letter in its lowercase form.
    Lower,
    /// ASCII decimal digit.
    Digit,
    /// `_`.
    Underscore,
}

/// Classify a character. `None` stands for a position outside the line.
#[must_use]
pub fn classify(ch: Option<char>) -> CharClass {
    let Some(ch) = ch else {
        return CharClass::None;
    };
    if ch == '_' {
        CharClass::Underscore
    } else if ch.is_ascii_digit() {
        CharClass::Digit
    } else if is_upper(ch) {
        CharClass::Upper
    } else if is_lower(ch) {
        CharClass::Lower
    } else {
        CharClass::None
    }
}

fn is_upper(ch: char) -> bool {
    ch.to_uppercase().eq([ch]) && !ch.to_lowercase().eq(ch.to_uppercase())
}

fn is_lower(ch: char) -> bool {
    ch.to_lowercase().eq([ch]) && !ch.to_uppercase().eq(ch.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_none() {
        assert_eq!(classify(None), CharClass::None);
    }

    #[test]
    fn underscore() {
        assert_eq!(classify(Some('_')), CharClass::Underscore);
    }

    #[test]
    fn ascii_digits() {
        for ch in '0'..='9' {
            assert_eq!(classify(Some(ch)), CharClass::Digit, "{ch:?}");
        }
    }

    #[test]
    fn non_ascii_digits_are_none() {
        assert_eq!(classify(Some('٣')), CharClass::None);
        assert_eq!(classify(Some('５')), CharClass::None);
    }

    #[test]
    fn ascii_letters() {
        assert_eq!(classify(Some('A')), CharClass::Upper);
        assert_eq!(classify(Some('Z')), CharClass::Upper);
        assert_eq!(classify(Some('a')), CharClass::Lower);
        assert_eq!(classify(Some('z')), CharClass::Lower);
    }

    #[test]
    fn unicode_cased_letters() {
        assert_eq!(classify(Some('É')), CharClass::Upper);
        assert_eq!(classify(Some('é')), CharClass::Lower);
        assert_eq!(classify(Some('Ω')), CharClass::Upper);
        assert_eq!(classify(Some('ω')), CharClass::Lower);
        assert_eq!(classify(Some('Ж')), CharClass::Upper);
        assert_eq!(classify(Some('ж')), CharClass::Lower);
    }

    #[test]
    fn sharp_s_is_lower() {
        assert_eq!(classify(Some('ß')), CharClass::Lower);
    }

    #[test]
    fn titlecase_is_none() {
        assert_eq!(classify(Some('ǅ')), CharClass::None);
    }

    #[test]
    fn uncased_and_symbols_are_none() {
        for ch in [' ', '\t', '.', '-', '$', '(', '中', 'ا'] {
            assert_eq!(classify(Some(ch)), CharClass::None, "{ch:?}");
        }
    }
}
