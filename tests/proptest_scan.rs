//! Property-based tests for scanning and the rich input document.
//!
//! Uses proptest to check that scanning partitions its input, that
//! hydrating and extracting are inverse, and that edit processing settles.

use emoji_kit::input::{Document, EditableSurface, EmojiInput, InputOptions, MemorySurface};
use emoji_kit::scan::{Scanner, Segment};
use emoji_kit::token::{HexVariant, hex_id};
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

// ============================================================================
// Strategies
// ============================================================================

/// Text built from pieces that exercise both emoji kinds and their edges.
fn emoji_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", " ", ":", "smile", "+1", "_", "😀", "👍🏽", "🇯🇵", "❤️", "🔥", "中", "é", "#", "1",
            "\n",
        ]),
        0..40,
    )
    .prop_map(|pieces| pieces.concat())
}

/// Arbitrary printable text.
fn any_text_strategy() -> impl Strategy<Value = String> {
    "\\PC{0,64}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![emoji_text_strategy(), any_text_strategy()]
}

// ============================================================================
// Scanner Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Concatenating the segments reproduces the input.
    #[test]
    fn scan_partitions_input(text in text_strategy()) {
        let scanner = Scanner::default();
        let joined: String = scanner.scan(&text).map(|s| s.as_str().to_string()).collect();
        prop_assert_eq!(joined, text);
    }

    /// No segment is empty and no two literals are adjacent.
    #[test]
    fn scan_segments_are_maximal(text in text_strategy()) {
        let scanner = Scanner::default();
        let segments: Vec<_> = scanner.scan(&text).collect();
        for segment in &segments {
            prop_assert!(!segment.as_str().is_empty());
        }
        for pair in segments.windows(2) {
            let both_literal =
                matches!(pair[0], Segment::Literal(_)) && matches!(pair[1], Segment::Literal(_));
            prop_assert!(!both_literal, "adjacent literals: {:?}", pair);
        }
    }

    /// Literal segments hold no emoji of their own.
    #[test]
    fn scan_literals_hold_no_emoji(text in emoji_text_strategy()) {
        let scanner = Scanner::default();
        for segment in scanner.scan(&text) {
            if let Segment::Literal(literal) = segment {
                prop_assert!(!scanner.contains_emoji(literal), "emoji left in {:?}", literal);
            }
        }
    }

    /// `find_emojis` lists each scanned emoji exactly once.
    #[test]
    fn find_emojis_dedups_scan(text in emoji_text_strategy()) {
        let scanner = Scanner::default();
        let found = scanner.find_emojis(&text);
        let mut scanned: Vec<String> = Vec::new();
        for segment in scanner.scan(&text) {
            if let Some(token) = segment.token() {
                if !scanned.iter().any(|s| s == token.as_str()) {
                    scanned.push(token.as_str().to_string());
                }
            }
        }
        let found: Vec<String> = found.iter().map(|t| t.as_str().to_string()).collect();
        prop_assert_eq!(found, scanned);
    }

    /// Hex ids without the selector never mention FE0F.
    #[test]
    fn hex_id_skip_selector(text in emoji_text_strategy()) {
        let skipped = hex_id(&text, HexVariant::SkipSelector);
        prop_assert!(!skipped.split('-').any(|part| part == "fe0f"));
        let kept = hex_id(&text, HexVariant::KeepSelector);
        if !text.is_empty() {
            prop_assert_eq!(kept.split('-').count(), text.chars().count());
        }
    }
}

// ============================================================================
// Document Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Extracting a hydrated document gives back the original text.
    #[test]
    fn hydrate_extract_roundtrip(text in text_strategy()) {
        let doc = Document::hydrate(&text, &Scanner::default());
        prop_assert_eq!(doc.extract(), text);
    }

    /// Hydrating the extracted text rebuilds the same document.
    #[test]
    fn hydrate_is_stable(text in emoji_text_strategy()) {
        let scanner = Scanner::default();
        let doc = Document::hydrate(&text, &scanner);
        prop_assert_eq!(Document::hydrate(&doc.extract(), &scanner), doc);
    }

    /// Splicing into plain text matches string insertion at a char offset.
    #[test]
    fn splice_matches_string_insert(
        base in "[a-z ]{0,20}",
        fragment in "[a-z ]{0,10}",
        at in 0usize..25,
    ) {
        let mut doc = Document::text(&base);
        let end = doc.splice(at, Document::text(&fragment));

        let at = at.min(base.chars().count());
        let mut expected: String = base.chars().take(at).collect();
        expected.push_str(&fragment);
        expected.extend(base.chars().skip(at));

        prop_assert_eq!(doc.extract(), expected);
        prop_assert_eq!(end, at + fragment.chars().count());
    }
}

// ============================================================================
// Edit Processing Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Processing an edit keeps the text and converts every emoji; a second
    /// pass changes nothing.
    #[test]
    fn process_edit_settles(text in emoji_text_strategy()) {
        let mut input = EmojiInput::new(MemorySurface::new(), InputOptions::default());
        input.focus();
        input.surface_mut().type_text(&text);

        prop_assert_eq!(input.process_edit(), text.clone());
        let settled = input.surface().content().clone();
        prop_assert_eq!(input.process_edit(), text);
        prop_assert_eq!(input.surface().content(), &settled);
    }

    /// After every edit in a typing session the surface matches a fresh
    /// hydration of its own text.
    #[test]
    fn process_edit_matches_rescan(
        pieces in prop::collection::vec(emoji_text_strategy(), 1..6),
        carets in prop::collection::vec(0usize..40, 1..6),
    ) {
        let scanner = Scanner::default();
        let mut input = EmojiInput::new(MemorySurface::new(), InputOptions::default());
        input.focus();

        for (piece, caret) in pieces.iter().zip(carets.iter().cycle()) {
            input.surface_mut().set_caret(*caret);
            input.surface_mut().type_text(piece);
            let text = input.process_edit();
            prop_assert_eq!(&Document::hydrate(&text, &scanner), input.surface().content());
        }
    }

    /// The value never exceeds a non-zero maximum length and ends on a
    /// grapheme boundary of the typed text.
    #[test]
    fn process_edit_respects_max_length(text in text_strategy(), max in 1usize..30) {
        let options = InputOptions { max_length: Some(max), ..InputOptions::default() };
        let mut input = EmojiInput::new(MemorySurface::new(), options);
        input.focus();
        input.surface_mut().type_text(&text);

        let value = input.process_edit();
        prop_assert!(value.chars().count() <= max);
        prop_assert!(text.starts_with(&value));
        prop_assert!(text.grapheme_indices(true).any(|(at, _)| at == value.len()) || value == text);
    }
}
