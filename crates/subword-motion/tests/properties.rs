//! Property tests for subword classification and navigation.

use proptest::prelude::*;
use subword_motion::{
    CharClass, boundaries_in_line, classify, is_boundary, line_stops, next_boundary_left,
    next_boundary_right,
};
use subword_text::{Buffer, Line, Position, TextDocument};

/// Identifiers mixing every class the boundary rule knows about.
fn identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,16}"
}

/// An identifier with some padding on either side, plus a column strictly
/// inside the identifier.
fn padded_identifier_with_col() -> impl Strategy<Value = (String, usize, usize, usize)> {
    (0usize..4, identifier(), 0usize..4).prop_flat_map(|(lead, ident, trail)| {
        let len = ident.chars().count();
        let text = format!("{}{}{}", " ".repeat(lead), ident, " ".repeat(trail));
        let start = lead;
        let end = lead + len;
        (Just(text), Just(start), Just(end), start..=end)
    })
}

proptest! {
    #[test]
    fn classify_matches_exactly_one_definition(ch in any::<char>()) {
        let class = classify(Some(ch));
        let upper = ch.to_uppercase().eq([ch]) && !ch.to_lowercase().eq(ch.to_uppercase());
        let lower = ch.to_lowercase().eq([ch]) && !ch.to_uppercase().eq(ch.to_lowercase());
        let expected = if ch == '_' {
            CharClass::Underscore
        } else if ch.is_ascii_digit() {
            CharClass::Digit
        } else if upper {
            CharClass::Upper
        } else if lower {
            CharClass::Lower
        } else {
            CharClass::None
        };
        prop_assert_eq!(class, expected);
        // A letter is never both cases.
        prop_assert!(!(upper && lower));
    }

    #[test]
    fn underscore_and_digit_rules_are_mirror_symmetric(text in "[a-z0-9_ ]{0,24}") {
        let forward = Line::new(0, &text);
        let reversed: String = text.chars().rev().collect();
        let backward = Line::new(0, &reversed);
        let len = forward.len();
        for col in 0..=len {
            prop_assert_eq!(
                is_boundary(&forward, col),
                is_boundary(&backward, len - col),
                "column {} of {:?}", col, text
            );
        }
    }

    #[test]
    fn right_then_left_never_overshoots((text, start, end, col) in padded_identifier_with_col()) {
        prop_assume!(col > start && col < end);
        let buf = Buffer::from_text(&text);
        let pos = Position::new(0, col);

        let l = next_boundary_left(&buf, pos).unwrap();
        let r = next_boundary_right(&buf, pos).unwrap();
        prop_assert!(l < pos);
        prop_assert!(r > pos);
        prop_assert!(l.col >= start);
        prop_assert!(r.col <= end);

        prop_assert!(next_boundary_right(&buf, l).unwrap() >= pos);
        prop_assert!(next_boundary_left(&buf, r).unwrap() <= pos);
    }

    #[test]
    fn walking_right_visits_every_boundary_once((text, start, end, _col) in padded_identifier_with_col()) {
        let buf = Buffer::from_text(&text);
        let line = buf.line_at(0).unwrap();

        let mut expected: Vec<usize> = boundaries_in_line(&line)
            .into_iter()
            .filter(|&c| c > start && c < end)
            .collect();
        expected.push(end);

        let mut visited = Vec::new();
        let mut pos = Position::new(0, start);
        while pos.col < end {
            pos = next_boundary_right(&buf, pos).unwrap();
            visited.push(pos.col);
        }
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn walking_left_visits_every_boundary_once((text, start, end, _col) in padded_identifier_with_col()) {
        let buf = Buffer::from_text(&text);
        let line = buf.line_at(0).unwrap();

        let mut expected: Vec<usize> = boundaries_in_line(&line)
            .into_iter()
            .filter(|&c| c > start && c < end)
            .rev()
            .collect();
        expected.push(start);

        let mut visited = Vec::new();
        let mut pos = Position::new(0, end);
        while pos.col > start {
            pos = next_boundary_left(&buf, pos).unwrap();
            visited.push(pos.col);
        }
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn navigation_is_total_on_valid_positions(text in "[ a-zA-Z0-9_.\n-]{0,40}") {
        let buf = Buffer::from_text(&text);
        for line in 0..buf.line_count() {
            let len = buf.line_at(line).unwrap().len();
            for col in 0..=len {
                let pos = Position::new(line, col);
                let l = next_boundary_left(&buf, pos).unwrap();
                let r = next_boundary_right(&buf, pos).unwrap();
                prop_assert!(l <= pos);
                prop_assert!(r >= pos);
                prop_assert!(buf.is_valid_position(l));
                prop_assert!(buf.is_valid_position(r));
            }
        }
    }

    #[test]
    fn line_stops_strictly_increase(text in "[ a-zA-Z0-9_.-]{0,40}") {
        let buf = Buffer::from_text(&text);
        let stops = line_stops(&buf, 0).unwrap();
        prop_assert!(stops.windows(2).all(|w| w[0] < w[1]));
        if let Some(&last) = stops.last() {
            prop_assert_eq!(last, text.chars().count());
        }
    }
}
