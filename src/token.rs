//! Emoji identity: native grapheme sequences and `:shortcode:` aliases.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Code point of the emoji presentation selector (VS16).
pub const VARIATION_SELECTOR_16: char = '\u{FE0F}';

fn shortcode_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_+-]+$").expect("static shortcode id pattern"))
}

/// Check whether `s` is a bare shortcode identifier (`smile`, `+1`, `t-rex`).
#[must_use]
pub fn is_shortcode_id(s: &str) -> bool {
    shortcode_id_regex().is_match(s)
}

/// Which hex identifier to compute for a native sequence.
///
/// CDN asset naming is inconsistent about VS16, so both forms are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexVariant {
    /// Drop U+FE0F.
    SkipSelector,
    /// Keep U+FE0F.
    KeepSelector,
}

/// A unit of emoji identity.
///
/// The stored string is exactly the text the token was read from, so
/// `token.as_str()` can always be written back in place of the token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmojiToken {
    /// One grapheme of Unicode emoji, e.g. `"👍🏽"` or `"🇯🇵"`.
    Native(String),
    /// A shortcode, either delimited (`":smile:"`) or bare (`"smile"`).
    Shortcode(String),
}

impl EmojiToken {
    /// Classify `s` as a token.
    ///
    /// `:id:` and bare identifiers are shortcodes; any other non-empty text is
    /// taken as a native sequence. Returns `None` for empty input.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        if is_delimited_shortcode(s) || is_shortcode_id(s) {
            Some(Self::Shortcode(s.to_string()))
        } else {
            Some(Self::Native(s.to_string()))
        }
    }

    /// Build a native token without classification.
    #[must_use]
    pub fn native(s: impl Into<String>) -> Self {
        Self::Native(s.into())
    }

    /// Build a delimited shortcode token from its identifier.
    #[must_use]
    pub fn shortcode(id: &str) -> Self {
        Self::Shortcode(format!(":{id}:"))
    }

    /// The original text of the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Native(s) | Self::Shortcode(s) => s,
        }
    }

    #[must_use]
    pub fn is_shortcode(&self) -> bool {
        matches!(self, Self::Shortcode(_))
    }

    /// Shortcode identifier without colons. `None` for native tokens.
    #[must_use]
    pub fn shortcode_id(&self) -> Option<&str> {
        match self {
            Self::Native(_) => None,
            Self::Shortcode(s) => Some(
                s.strip_prefix(':')
                    .and_then(|rest| rest.strip_suffix(':'))
                    .unwrap_or(s),
            ),
        }
    }

    /// Key into the animated asset table: the native text, or the bare
    /// shortcode identifier.
    #[must_use]
    pub fn lookup_key(&self) -> &str {
        match self {
            Self::Native(s) => s,
            Self::Shortcode(_) => self.shortcode_id().unwrap_or_default(),
        }
    }

    /// Glyph shown while loading or after every image failed.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Native(s) => s.clone(),
            Self::Shortcode(_) => format!(":{}:", self.shortcode_id().unwrap_or_default()),
        }
    }

    /// Hyphen-joined lowercase hex code points, as used in CDN file names.
    ///
    /// Shortcodes have no hex form.
    #[must_use]
    pub fn hex_id(&self, variant: HexVariant) -> Option<String> {
        match self {
            Self::Native(s) => Some(hex_id(s, variant)),
            Self::Shortcode(_) => None,
        }
    }
}

impl fmt::Display for EmojiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hex identifier of an arbitrary code point sequence.
#[must_use]
pub fn hex_id(s: &str, variant: HexVariant) -> String {
    s.chars()
        .filter(|&c| variant == HexVariant::KeepSelector || c != VARIATION_SELECTOR_16)
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}

fn is_delimited_shortcode(s: &str) -> bool {
    s.len() > 2
        && s.starts_with(':')
        && s.ends_with(':')
        && is_shortcode_id(&s[1..s.len() - 1])
}
