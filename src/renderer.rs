//! Single emoji view: lazy loading with ordered fallback to text.
//!
//! Each [`EmojiView`] is a small state machine driven by host events:
//!
//! ```text
//! Unseen --on_visible--> Visible --on_load--> Loaded
//!                          |  ^
//!                 on_error |  | more candidates
//!                          v  |
//!                        (next URL) --exhausted--> Failed
//! ```
//!
//! Nothing is fetched before the view enters the viewport. Until an image has
//! loaded a desaturated, shimmering skeleton of the glyph is shown; after the
//! last candidate fails the glyph is shown as text for good. Views resolved
//! under the native style never enter the state machine.

use crate::resolve::{CandidateUrls, Resolution, Resolver};
use crate::style::EmojiStyle;
use crate::token::EmojiToken;
use bitflags::bitflags;
use std::fmt;
use tracing::debug;

/// Default rendered size in pixels.
pub const DEFAULT_SIZE: f32 = 24.0;

/// Skeleton glyphs are drawn slightly smaller than the box they sit in.
const SKELETON_GLYPH_SCALE: f32 = 0.8;

bitflags! {
    /// Visual treatment requested for an element.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct VisualEffects: u8 {
        /// Render desaturated.
        const GRAYSCALE = 0x01;
        /// Animated shimmer sweep across the glyph.
        const SHIMMER   = 0x02;
        /// Fade from transparent when first shown.
        const FADE_IN   = 0x04;
    }
}

impl VisualEffects {
    /// Treatment of the loading placeholder.
    pub const SKELETON: Self = Self::GRAYSCALE.union(Self::SHIMMER);
}

/// Lifecycle of a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Unseen,
    Visible,
    Loaded,
    Failed,
}

/// What the host should do after an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadRequest {
    None,
    /// Start loading this URL and report back with `on_load`/`on_error`.
    Fetch(String),
}

/// Visibility observation owned by a view.
///
/// Disconnected once the view becomes visible, and when the view is dropped.
pub trait ViewportObserver {
    fn disconnect(&mut self);
}

/// What to draw for a view right now.
#[derive(Clone, Debug, PartialEq)]
pub enum EmojiElement {
    /// The glyph in the system emoji font.
    Text { glyph: String, size: f32 },
    /// Placeholder while the image is unseen or loading.
    Skeleton {
        glyph: String,
        size: f32,
        glyph_size: f32,
        effects: VisualEffects,
        /// Image being loaded invisibly underneath, if any.
        pending: Option<String>,
    },
    /// The loaded image.
    Image {
        url: String,
        alt: String,
        size: f32,
        effects: VisualEffects,
    },
}

/// One rendered emoji.
pub struct EmojiView {
    token: EmojiToken,
    candidates: CandidateUrls,
    text_only: bool,
    state: ViewState,
    index: usize,
    size: f32,
    observer: Option<Box<dyn ViewportObserver>>,
}

impl fmt::Debug for EmojiView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmojiView")
            .field("token", &self.token)
            .field("state", &self.state)
            .field("index", &self.index)
            .field("candidates", &self.candidates.len())
            .field("text_only", &self.text_only)
            .finish_non_exhaustive()
    }
}

impl EmojiView {
    /// Create a view from an already computed resolution.
    #[must_use]
    pub fn new(token: EmojiToken, resolution: Resolution, size: f32) -> Self {
        let (candidates, text_only) = match resolution {
            Resolution::Text => (CandidateUrls::new(), true),
            Resolution::Images(urls) => (urls, false),
        };
        Self {
            token,
            candidates,
            text_only,
            state: ViewState::Unseen,
            index: 0,
            size,
            observer: None,
        }
    }

    /// Resolve `token` under `style` and create a view for it.
    #[must_use]
    pub fn resolve(token: EmojiToken, style: EmojiStyle, resolver: &Resolver<'_>, size: f32) -> Self {
        let resolution = resolver.resolve(&token, style);
        Self::new(token, resolution, size)
    }

    /// Hand the view its visibility observer.
    pub fn observe(&mut self, observer: Box<dyn ViewportObserver>) {
        self.release_observer();
        if self.state == ViewState::Unseen && !self.text_only {
            self.observer = Some(observer);
        } else {
            let mut observer = observer;
            observer.disconnect();
        }
    }

    /// The view scrolled into the viewport.
    pub fn on_visible(&mut self) -> LoadRequest {
        if self.text_only || self.state != ViewState::Unseen {
            return LoadRequest::None;
        }
        self.release_observer();
        self.state = ViewState::Visible;
        self.current_url()
            .map_or(LoadRequest::None, |url| LoadRequest::Fetch(url.to_string()))
    }

    /// The current candidate finished loading.
    pub fn on_load(&mut self) {
        if self.state == ViewState::Visible {
            self.state = ViewState::Loaded;
        }
    }

    /// The current candidate failed; advance to the next one.
    pub fn on_error(&mut self) -> LoadRequest {
        if self.state != ViewState::Visible {
            return LoadRequest::None;
        }
        if self.index + 1 < self.candidates.len() {
            self.index += 1;
            self.current_url()
                .map_or(LoadRequest::None, |url| LoadRequest::Fetch(url.to_string()))
        } else {
            debug!(token = %self.token, tried = self.candidates.len(), "all emoji images failed, using text");
            self.state = ViewState::Failed;
            LoadRequest::None
        }
    }

    /// What to draw now.
    #[must_use]
    pub fn render(&self) -> EmojiElement {
        if self.is_text() {
            return EmojiElement::Text {
                glyph: self.token.as_str().to_string(),
                size: self.size,
            };
        }
        match self.state {
            ViewState::Loaded => EmojiElement::Image {
                url: self.current_url().unwrap_or_default().to_string(),
                alt: self.token.as_str().to_string(),
                size: self.size,
                effects: VisualEffects::FADE_IN,
            },
            ViewState::Unseen | ViewState::Visible | ViewState::Failed => EmojiElement::Skeleton {
                glyph: self.token.display_text(),
                size: self.size,
                glyph_size: self.size * SKELETON_GLYPH_SCALE,
                effects: VisualEffects::SKELETON,
                pending: (self.state == ViewState::Visible)
                    .then(|| self.current_url().map(str::to_string))
                    .flatten(),
            },
        }
    }

    /// Whether the view shows plain text (native style, no candidates, or
    /// every candidate failed).
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.text_only || self.state == ViewState::Failed
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn token(&self) -> &EmojiToken {
        &self.token
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[must_use]
    pub fn candidates(&self) -> &CandidateUrls {
        &self.candidates
    }

    /// URL currently being tried or shown.
    #[must_use]
    pub fn current_url(&self) -> Option<&str> {
        if self.text_only {
            None
        } else {
            self.candidates.get(self.index)
        }
    }

    /// Accessible label.
    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("emoji {}", self.token)
    }

    fn release_observer(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for EmojiView {
    fn drop(&mut self) {
        self.release_observer();
    }
}
