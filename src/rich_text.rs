//! Render arbitrary text with inline emoji.
//!
//! ```
//! use emoji_kit::{EmojiStyle, TextRenderer};
//! use emoji_kit::rich_text::RenderNode;
//!
//! let renderer = TextRenderer::default();
//! let nodes = renderer.render("ship it 🚀", EmojiStyle::Apple);
//! assert!(matches!(&nodes[0], RenderNode::Text(t) if t == "ship it "));
//! assert!(matches!(&nodes[1], RenderNode::Emoji(_)));
//! ```

use crate::renderer::{DEFAULT_SIZE, EmojiView};
use crate::resolve::Resolver;
use crate::scan::{Scanner, Segment};
use crate::style::EmojiStyle;

/// One rendered piece of text.
#[derive(Debug)]
pub enum RenderNode {
    Text(String),
    Emoji(EmojiView),
}

impl RenderNode {
    /// Source text of the node.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Emoji(view) => view.token().as_str(),
        }
    }
}

/// Scans text and resolves every emoji in it.
#[derive(Clone, Debug)]
pub struct TextRenderer<'m> {
    scanner: Scanner,
    resolver: Resolver<'m>,
    size: f32,
}

impl Default for TextRenderer<'static> {
    fn default() -> Self {
        Self::new(Scanner::default(), Resolver::default())
    }
}

impl<'m> TextRenderer<'m> {
    #[must_use]
    pub fn new(scanner: Scanner, resolver: Resolver<'m>) -> Self {
        Self {
            scanner,
            resolver,
            size: DEFAULT_SIZE,
        }
    }

    /// Set the emoji size in pixels.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[must_use]
    pub fn resolver(&self) -> &Resolver<'m> {
        &self.resolver
    }

    /// Render `text` under `style`. Empty text renders to no nodes.
    #[must_use]
    pub fn render(&self, text: &str, style: EmojiStyle) -> Vec<RenderNode> {
        self.scanner
            .scan(text)
            .map(|segment| match segment {
                Segment::Literal(literal) => RenderNode::Text(literal.to_string()),
                Segment::Emoji(token) => {
                    RenderNode::Emoji(EmojiView::resolve(token, style, &self.resolver, self.size))
                }
            })
            .collect()
    }
}

/// Reassemble the source text of rendered nodes.
#[must_use]
pub fn plain_text(nodes: &[RenderNode]) -> String {
    nodes.iter().map(RenderNode::source).collect()
}
