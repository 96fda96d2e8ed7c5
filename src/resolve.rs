//! Emoji identity resolution: token + style → ordered candidate image URLs.
//!
//! The order of a [`CandidateUrls`] list is the fallback policy. A renderer
//! tries each URL in turn and shows the text glyph once the list is exhausted.
//!
//! | style | native token | shortcode |
//! |---|---|---|
//! | platform CDN | CDN (no VS16), CDN (VS16), animated | animated |
//! | `flexhunt` | animated, CDN (no VS16), CDN (VS16) | animated |
//! | `native` | *(text)* | *(text)* |
//!
//! The CDN entries under `flexhunt` use [`ResolverConfig::animated_fallback_style`].

use crate::emoji_map::EmojiMap;
use crate::style::EmojiStyle;
use crate::token::{EmojiToken, HexVariant};
use serde::{Deserialize, Serialize};

/// URL templates and fallback policy knobs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Prefix of the CDN package name; the set name and version follow.
    pub cdn_base: String,
    /// Version of the CDN image packages.
    pub cdn_version: String,
    /// Pixel size directory of the CDN images.
    pub cdn_image_size: u32,
    /// Base URL of the animated asset repository.
    pub animated_base: String,
    /// Platform style whose CDN backs up the animated style.
    pub animated_fallback_style: EmojiStyle,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cdn_base: "https://cdn.jsdelivr.net/npm/emoji-datasource-".to_string(),
            cdn_version: "15.0.0".to_string(),
            cdn_image_size: 64,
            animated_base:
                "https://raw.githubusercontent.com/Tarikul-Islam-Anik/Telegram-Animated-Emojis/main"
                    .to_string(),
            animated_fallback_style: EmojiStyle::Apple,
        }
    }
}

impl ResolverConfig {
    /// CDN image URL for `hex` in the image set of `style`.
    ///
    /// `None` for styles without a CDN set.
    #[must_use]
    pub fn cdn_url(&self, style: EmojiStyle, hex: &str) -> Option<String> {
        let set = style.cdn_set()?;
        Some(format!(
            "{base}{set}@{version}/img/{set}/{size}/{hex}.png",
            base = self.cdn_base,
            version = self.cdn_version,
            size = self.cdn_image_size,
        ))
    }

    /// Absolute URL of an animated asset from its table path.
    #[must_use]
    pub fn animated_url(&self, path: &str) -> String {
        format!("{}/{}", self.animated_base.trim_end_matches('/'), path)
    }
}

/// Ordered, duplicate-free list of image URLs to try.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateUrls {
    urls: Vec<String>,
}

impl CandidateUrls {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `url` unless it is already present.
    pub fn push(&mut self, url: String) {
        if !self.urls.contains(&url) {
            self.urls.push(url);
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.urls
    }
}

impl<'a> IntoIterator for &'a CandidateUrls {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}

/// Outcome of resolving a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Show the token as system-font text.
    Text,
    /// Try these images in order.
    Images(CandidateUrls),
}

/// Computes candidate URLs against a config and an asset table.
#[derive(Clone, Debug)]
pub struct Resolver<'m> {
    config: ResolverConfig,
    map: &'m EmojiMap,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(ResolverConfig::default(), EmojiMap::builtin())
    }
}

impl<'m> Resolver<'m> {
    #[must_use]
    pub fn new(config: ResolverConfig, map: &'m EmojiMap) -> Self {
        Self { config, map }
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub fn map(&self) -> &'m EmojiMap {
        self.map
    }

    /// Candidate URLs for `token` under `style`, best first.
    #[must_use]
    pub fn candidates(&self, token: &EmojiToken, style: EmojiStyle) -> CandidateUrls {
        let mut urls = CandidateUrls::new();
        let animated = self
            .map
            .path_for(token)
            .map(|path| self.config.animated_url(path));

        match style {
            EmojiStyle::Native => {}
            EmojiStyle::Flexhunt => {
                urls.extend(animated);
                self.push_cdn(&mut urls, token, self.config.animated_fallback_style);
            }
            EmojiStyle::Apple | EmojiStyle::Google | EmojiStyle::Twitter | EmojiStyle::Facebook => {
                self.push_cdn(&mut urls, token, style);
                urls.extend(animated);
            }
        }
        urls
    }

    /// Resolve `token` under `style`; an empty candidate list means text.
    #[must_use]
    pub fn resolve(&self, token: &EmojiToken, style: EmojiStyle) -> Resolution {
        let urls = self.candidates(token, style);
        if urls.is_empty() {
            Resolution::Text
        } else {
            Resolution::Images(urls)
        }
    }

    fn push_cdn(&self, urls: &mut CandidateUrls, token: &EmojiToken, style: EmojiStyle) {
        for variant in [HexVariant::SkipSelector, HexVariant::KeepSelector] {
            let url = token
                .hex_id(variant)
                .and_then(|hex| self.config.cdn_url(style, &hex));
            urls.extend(url);
        }
    }
}

impl Extend<String> for CandidateUrls {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for url in iter {
            self.push(url);
        }
    }
}
