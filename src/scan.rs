//! Text scanning: split arbitrary text into literal and emoji segments.
//!
//! Two kinds of emoji are recognised, left to right:
//!
//! - shortcodes: `:` + `[a-zA-Z0-9_+-]+` + `:`
//! - native emoji: whole grapheme clusters accepted by a [`GraphemeClassifier`]
//!
//! Segments always partition the input; concatenating them reproduces it.
//! Shortcode delimiters never occur inside an emoji grapheme, so the two kinds
//! cannot overlap.
//!
//! # Examples
//!
//! ```
//! use emoji_kit::scan::scan;
//!
//! let parts: Vec<_> = scan("hi :smile: there 😂").map(|s| s.as_str().to_string()).collect();
//! assert_eq!(parts, ["hi ", ":smile:", " there ", "😂"]);
//! ```

use crate::token::{EmojiToken, VARIATION_SELECTOR_16};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock};
use unicode_segmentation::UnicodeSegmentation;

fn shortcode_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r":[a-zA-Z0-9_+-]+:").expect("static shortcode pattern"))
}

/// Decides whether a grapheme cluster is an emoji.
pub trait GraphemeClassifier: Send + Sync {
    fn is_emoji(&self, grapheme: &str) -> bool;
}

/// Classifier backed by the Unicode emoji table of the `emojis` crate.
///
/// Accepts every fully-qualified sequence, plus its forms without VS16 and
/// without skin-tone modifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeEmojiClassifier;

impl GraphemeClassifier for UnicodeEmojiClassifier {
    fn is_emoji(&self, grapheme: &str) -> bool {
        // Bare digits, '#' and '*' are keycap bases, not emoji.
        if grapheme.is_ascii() {
            return false;
        }
        if emojis::get(grapheme).is_some() {
            return true;
        }
        let base: String = grapheme
            .chars()
            .filter(|&c| c != VARIATION_SELECTOR_16 && !is_skin_tone_modifier(c))
            .collect();
        !base.is_empty() && base != grapheme && emojis::get(&base).is_some()
    }
}

const fn is_skin_tone_modifier(c: char) -> bool {
    matches!(c, '\u{1F3FB}'..='\u{1F3FF}')
}

/// One piece of scanned text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Emoji(EmojiToken),
}

impl Segment<'_> {
    /// The exact source text of this segment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Emoji(token) => token.as_str(),
        }
    }

    #[must_use]
    pub fn is_emoji(&self) -> bool {
        matches!(self, Self::Emoji(_))
    }

    #[must_use]
    pub fn token(&self) -> Option<&EmojiToken> {
        match self {
            Self::Literal(_) => None,
            Self::Emoji(token) => Some(token),
        }
    }
}

/// Emoji scanner with a pluggable grapheme classifier.
#[derive(Clone)]
pub struct Scanner {
    classifier: Arc<dyn GraphemeClassifier>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_classifier(UnicodeEmojiClassifier)
    }
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner").finish_non_exhaustive()
    }
}

impl Scanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner using a custom classifier for native emoji.
    #[must_use]
    pub fn with_classifier(classifier: impl GraphemeClassifier + 'static) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// Lazily split `text` into segments.
    #[must_use]
    pub fn scan<'a>(&'a self, text: &'a str) -> Segments<'a> {
        Segments {
            text,
            pos: 0,
            pending: None,
            next_shortcode: None,
            shortcodes_exhausted: false,
            classifier: self.classifier.as_ref(),
        }
    }

    /// Distinct emoji tokens in `text`, in first-occurrence order.
    #[must_use]
    pub fn find_emojis(&self, text: &str) -> Vec<EmojiToken> {
        let mut seen = HashSet::new();
        self.scan(text)
            .filter_map(|segment| match segment {
                Segment::Emoji(token) => Some(token),
                Segment::Literal(_) => None,
            })
            .filter(|token| seen.insert(token.clone()))
            .collect()
    }

    /// Check whether `text` contains at least one emoji.
    #[must_use]
    pub fn contains_emoji(&self, text: &str) -> bool {
        self.scan(text).any(|segment| segment.is_emoji())
    }

    /// Check whether `grapheme` is a native emoji for this scanner.
    #[must_use]
    pub fn is_emoji_grapheme(&self, grapheme: &str) -> bool {
        self.classifier.is_emoji(grapheme)
    }
}

/// The process-wide default scanner.
#[must_use]
pub fn default_scanner() -> &'static Scanner {
    static SCANNER: OnceLock<Scanner> = OnceLock::new();
    SCANNER.get_or_init(Scanner::default)
}

/// Scan `text` with the default scanner.
#[must_use]
pub fn scan(text: &str) -> Segments<'_> {
    default_scanner().scan(text)
}

/// Distinct emoji in `text`, using the default scanner.
#[must_use]
pub fn find_emojis(text: &str) -> Vec<EmojiToken> {
    default_scanner().find_emojis(text)
}

/// Check for emoji in `text`, using the default scanner.
#[must_use]
pub fn contains_emoji(text: &str) -> bool {
    default_scanner().contains_emoji(text)
}

/// Iterator returned by [`Scanner::scan`].
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
    /// Emoji span found while emitting the literal before it.
    pending: Option<(usize, usize)>,
    /// Next shortcode match at or after `pos`, if already searched.
    next_shortcode: Option<(usize, usize)>,
    shortcodes_exhausted: bool,
    classifier: &'a dyn GraphemeClassifier,
}

impl Segments<'_> {
    fn shortcode_from_pos(&mut self) -> Option<(usize, usize)> {
        if self.shortcodes_exhausted {
            return None;
        }
        if self.next_shortcode.is_none_or(|(start, _)| start < self.pos) {
            self.next_shortcode = shortcode_regex()
                .find_at(self.text, self.pos)
                .map(|m| (m.start(), m.end()));
            self.shortcodes_exhausted = self.next_shortcode.is_none();
        }
        self.next_shortcode
    }

    fn native_before(&self, limit: usize) -> Option<(usize, usize)> {
        self.text[self.pos..limit]
            .grapheme_indices(true)
            .find(|(_, g)| self.classifier.is_emoji(g))
            .map(|(i, g)| (self.pos + i, self.pos + i + g.len()))
    }

    fn emoji_segment(&self, (start, end): (usize, usize)) -> Segment<'static> {
        let text = &self.text[start..end];
        if text.starts_with(':') && text.len() > 2 {
            Segment::Emoji(EmojiToken::Shortcode(text.to_string()))
        } else {
            Segment::Emoji(EmojiToken::Native(text.to_string()))
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(span) = self.pending.take() {
            self.pos = span.1;
            return Some(self.emoji_segment(span));
        }
        if self.pos >= self.text.len() {
            return None;
        }

        let shortcode = self.shortcode_from_pos();
        let limit = shortcode.map_or(self.text.len(), |(start, _)| start);
        let found = self.native_before(limit).or(shortcode);

        let text = self.text;
        match found {
            None => {
                let literal = &text[self.pos..];
                self.pos = text.len();
                Some(Segment::Literal(literal))
            }
            Some((start, _)) if start > self.pos => {
                let literal = &text[self.pos..start];
                self.pending = found;
                self.pos = start;
                Some(Segment::Literal(literal))
            }
            Some(span) => {
                self.pos = span.1;
                Some(self.emoji_segment(span))
            }
        }
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
