//! Static animated-asset table.
//!
//! Keys are emoji tokens, either native sequences or bare shortcode ids, and
//! values are paths relative to the animated asset repository. One asset is
//! usually reachable under both forms:
//!
//! ```text
//! "😂"  -> "Smileys/Face With Tears Of Joy.webp"
//! "joy" -> "Smileys/Face With Tears Of Joy.webp"
//! ```
//!
//! The bundled table is produced offline by the `gen_emoji_map` binary (see
//! [`generate`]); every path in it names an asset that existed when it ran.

pub mod generate;

use crate::error::{Error, Result};
use crate::resolve::ResolverConfig;
use crate::token::{EmojiToken, is_shortcode_id};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::error;

const BUILTIN_JSON: &str = include_str!("../../data/emoji-map.json");

/// Frequently used emoji worth fetching ahead of first render.
pub const POPULAR_EMOJIS: [&str; 24] = [
    "😊", "😂", "❤️", "🔥", "👍", "🎉", "🚀", "✨", "💪", "🙏", "😭", "🥺", "💀", "✅", "⭐",
    "💯", "👏", "🤝", "💔", "🎯", "💡", "🌟", "💥", "🏆",
];

/// Token → relative animated asset path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiMap {
    entries: BTreeMap<String, String>,
}

impl EmojiMap {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `token -> path`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::EmojiMap(e.to_string()))
    }

    /// The table bundled with the crate.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<EmojiMap> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_json(BUILTIN_JSON).unwrap_or_else(|err| {
                error!(%err, "bundled emoji map is corrupt, animated assets disabled");
                Self::new()
            })
        })
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, path: impl Into<String>) {
        self.entries.insert(key.into(), path.into());
    }

    /// Path for a raw key (native text or bare shortcode id).
    #[must_use]
    pub fn path(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Path for a token, looked up by exact match on its key.
    #[must_use]
    pub fn path_for(&self, token: &EmojiToken) -> Option<&str> {
        self.path(token.lookup_key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(key, path)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Native-sequence entries in key order.
    pub fn native_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(key, _)| !is_shortcode_id(key))
    }

    /// Native sequences that have an animated asset.
    pub fn native_tokens(&self) -> impl Iterator<Item = &str> {
        self.native_entries().map(|(key, _)| key)
    }

    /// Shortcode ids that have an animated asset.
    pub fn shortcodes(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(key, _)| is_shortcode_id(key))
            .map(|(key, _)| key)
    }

    /// Serialize as sorted, pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Animated-asset URLs for `tokens`, skipping unmapped ones.
    ///
    /// The host fetches these to warm its image cache.
    #[must_use]
    pub fn preload_urls<'t>(
        &self,
        tokens: impl IntoIterator<Item = &'t str>,
        config: &ResolverConfig,
    ) -> Vec<String> {
        tokens
            .into_iter()
            .filter_map(|token| self.path(token))
            .map(|path| config.animated_url(path))
            .collect()
    }

    /// [`preload_urls`](Self::preload_urls) for [`POPULAR_EMOJIS`].
    #[must_use]
    pub fn popular_preload_urls(&self, config: &ResolverConfig) -> Vec<String> {
        self.preload_urls(POPULAR_EMOJIS, config)
    }
}

impl FromIterator<(String, String)> for EmojiMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
