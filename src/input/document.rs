//! The rich input's document model.
//!
//! A [`Document`] is a flat run of text and inline emoji nodes. Emoji nodes are
//! opaque to editing and carry the token they were created from, so
//! [`Document::extract`] always gives back the exact plain text that was
//! hydrated.
//!
//! Positions inside a document are measured in *units*: one per character of
//! text, one per emoji node.

use crate::scan::{Scanner, Segment};
use crate::token::EmojiToken;
use std::fmt::Write as _;

/// CSS class carried by inline emoji elements.
pub const EMOJI_CLASS: &str = "emoji-input-emoji";

/// One node of a [`Document`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocNode {
    Text(String),
    Emoji(EmojiToken),
}

impl DocNode {
    /// Length in document units.
    #[must_use]
    pub fn len_units(&self) -> usize {
        match self {
            Self::Text(text) => text.chars().count(),
            Self::Emoji(_) => 1,
        }
    }

    /// Plain text this node stands for.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Emoji(token) => token.as_str(),
        }
    }
}

/// Normalised sequence of nodes: no empty text nodes, no adjacent text nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<DocNode>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document of a single text run (no emoji conversion).
    #[must_use]
    pub fn text(text: &str) -> Self {
        std::iter::once(DocNode::Text(text.to_string())).collect()
    }

    /// Convert plain text into a document, turning every emoji into a node.
    #[must_use]
    pub fn hydrate(text: &str, scanner: &Scanner) -> Self {
        scanner
            .scan(text)
            .map(|segment| match segment {
                Segment::Literal(literal) => DocNode::Text(literal.to_string()),
                Segment::Emoji(token) => DocNode::Emoji(token),
            })
            .collect()
    }

    /// Plain text with every emoji node expanded to its token.
    #[must_use]
    pub fn extract(&self) -> String {
        self.nodes.iter().map(DocNode::as_str).collect()
    }

    #[must_use]
    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total length in units.
    #[must_use]
    pub fn len_units(&self) -> usize {
        self.nodes.iter().map(DocNode::len_units).sum()
    }

    /// Number of inline emoji nodes.
    #[must_use]
    pub fn emoji_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, DocNode::Emoji(_)))
            .count()
    }

    /// Insert `fragment` at unit offset `at` (clamped to the end).
    ///
    /// Returns the unit offset just past the inserted content.
    pub fn splice(&mut self, at: usize, fragment: Self) -> usize {
        let at = at.min(self.len_units());
        let end = at + fragment.len_units();
        let (left, right) = self.split_at(at);
        *self = left
            .into_iter()
            .chain(fragment.nodes)
            .chain(right)
            .collect();
        end
    }

    /// Remove the unit range `start..end`.
    pub fn remove(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let (left, rest) = self.split_at(start);
        let rest: Self = rest.into_iter().collect();
        let (_, right) = rest.split_at(end - start);
        *self = left.into_iter().chain(right).collect();
    }

    fn split_at(&self, at: usize) -> (Vec<DocNode>, Vec<DocNode>) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut remaining = at;

        for node in &self.nodes {
            let len = node.len_units();
            if remaining == 0 {
                right.push(node.clone());
            } else if len <= remaining {
                left.push(node.clone());
                remaining -= len;
            } else if let DocNode::Text(text) = node {
                let byte = text
                    .char_indices()
                    .nth(remaining)
                    .map_or(text.len(), |(i, _)| i);
                left.push(DocNode::Text(text[..byte].to_string()));
                right.push(DocNode::Text(text[byte..].to_string()));
                remaining = 0;
            }
        }
        (left, right)
    }

    /// Markup for a content-editable host surface.
    ///
    /// Emoji become non-editable spans carrying the token in `data-emoji`.
    #[must_use]
    pub fn to_html(&self, emoji_size: f32) -> String {
        let mut html = String::new();
        for node in &self.nodes {
            match node {
                DocNode::Text(text) => html.push_str(&escape_html(text)),
                DocNode::Emoji(token) => {
                    let raw = escape_html(token.as_str());
                    let id = escape_html(token.shortcode_id().unwrap_or(token.as_str()));
                    let _ = write!(
                        html,
                        "<span class=\"{EMOJI_CLASS}\" data-emoji=\"{raw}\" data-emoji-id=\"{id}\" \
                         contenteditable=\"false\" style=\"display: inline-flex; align-items: center; \
                         justify-content: center; width: {emoji_size}px; height: {emoji_size}px; \
                         vertical-align: middle; user-select: all;\">{raw}</span>"
                    );
                }
            }
        }
        html
    }
}

impl FromIterator<DocNode> for Document {
    fn from_iter<I: IntoIterator<Item = DocNode>>(iter: I) -> Self {
        let mut nodes: Vec<DocNode> = Vec::new();
        for node in iter {
            match node {
                DocNode::Text(text) if text.is_empty() => {}
                DocNode::Text(text) => {
                    if let Some(DocNode::Text(prev)) = nodes.last_mut() {
                        prev.push_str(&text);
                    } else {
                        nodes.push(DocNode::Text(text));
                    }
                }
                emoji @ DocNode::Emoji(_) => nodes.push(emoji),
            }
        }
        Self { nodes }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrate(text: &str) -> Document {
        Document::hydrate(text, &Scanner::default())
    }

    #[test]
    fn test_hydrate_extract_roundtrip() {
        let text = "hi :smile: there 😂!";
        let doc = hydrate(text);
        assert_eq!(doc.emoji_count(), 2);
        assert_eq!(doc.extract(), text);
    }

    #[test]
    fn test_hydrate_empty() {
        assert!(hydrate("").is_empty());
        assert_eq!(hydrate("").extract(), "");
    }

    #[test]
    fn test_normalisation_merges_text() {
        let doc: Document = [
            DocNode::Text("a".into()),
            DocNode::Text(String::new()),
            DocNode::Text("b".into()),
            DocNode::Emoji(EmojiToken::native("🔥")),
        ]
        .into_iter()
        .collect();
        assert_eq!(doc.nodes().len(), 2);
        assert_eq!(doc.nodes()[0], DocNode::Text("ab".into()));
    }

    #[test]
    fn test_units() {
        let doc = hydrate("añ👨‍👩‍👧:joy:");
        // 'a', 'ñ', family emoji node, shortcode node
        assert_eq!(doc.len_units(), 4);
    }

    #[test]
    fn test_splice_inside_text() {
        let mut doc = Document::text("hello world");
        let end = doc.splice(5, hydrate(" 🎉"));
        assert_eq!(end, 7);
        assert_eq!(doc.extract(), "hello 🎉 world");
    }

    #[test]
    fn test_splice_between_emoji_and_clamped() {
        let mut doc = hydrate("🔥🔥");
        doc.splice(1, Document::text("x"));
        assert_eq!(doc.extract(), "🔥x🔥");
        let end = doc.splice(99, Document::text("!"));
        assert_eq!(end, doc.len_units());
        assert_eq!(doc.extract(), "🔥x🔥!");
    }

    #[test]
    fn test_remove_range() {
        let mut doc = hydrate("ab🔥cd");
        doc.remove(1, 4);
        assert_eq!(doc.extract(), "ad");
        doc.remove(1, 1);
        assert_eq!(doc.extract(), "ad");
    }

    #[test]
    fn test_spliced_raw_emoji_differs_from_rescan() {
        let mut doc = hydrate("ok 👍");
        doc.splice(doc.len_units(), Document::text("🏽 :wave:"));
        let rescanned = hydrate(&doc.extract());
        assert_ne!(doc, rescanned);
        assert_eq!(rescanned.emoji_count(), 2);
    }

    #[test]
    fn test_to_html_escapes_and_marks_emoji() {
        let html = hydrate("<b>&:joy:").to_html(20.0);
        assert!(html.starts_with("&lt;b&gt;&amp;"));
        assert!(html.contains("class=\"emoji-input-emoji\""));
        assert!(html.contains("data-emoji=\":joy:\""));
        assert!(html.contains("data-emoji-id=\"joy\""));
        assert!(html.contains("contenteditable=\"false\""));
        assert!(html.contains("width: 20px"));
    }
}
