//! Emoji style selection and the shared style preference store.
//!
//! This module provides:
//!
//! - [`EmojiStyle`]: the visual rendering family (platform CDN set, the
//!   animated set, or the plain native glyph)
//! - [`StyleStorage`]: an injectable persisted key-value backend
//! - [`StyleStore`]: the observable store every component reads its style from
//!
//! Stores never share in-memory state directly. Two stores built over the same
//! backend converge because every [`StyleStore::set`] persists first and then
//! notifies subscribers, who re-read the persisted value.
//!
//! # Examples
//!
//! ```
//! use emoji_kit::{EmojiStyle, StyleStore};
//!
//! let store = StyleStore::in_memory(EmojiStyle::Apple);
//! assert_eq!(store.get(), EmojiStyle::Apple);
//!
//! let _sub = store.subscribe(|style| println!("style is now {style}"));
//! store.set(EmojiStyle::Flexhunt);
//! assert_eq!(store.get(), EmojiStyle::Flexhunt);
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::{debug, warn};

/// Key under which the active style is persisted.
pub const STORAGE_KEY: &str = "emoji-style";

/// Name of the change notification fired after every [`StyleStore::set`].
pub const EVENT_NAME: &str = "emoji-style-change";

/// Visual rendering family for emoji.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiStyle {
    #[default]
    Apple,
    Google,
    Twitter,
    Facebook,
    /// System emoji font, no image resolution at all.
    Native,
    /// Animated image set, falling back to a platform CDN.
    Flexhunt,
}

impl EmojiStyle {
    /// Every style, in display order.
    pub const ALL: [Self; 6] = [
        Self::Apple,
        Self::Google,
        Self::Twitter,
        Self::Facebook,
        Self::Native,
        Self::Flexhunt,
    ];

    /// Wire name used for persistence and configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Google => "google",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Native => "native",
            Self::Flexhunt => "flexhunt",
        }
    }

    /// CDN image set for platform styles.
    ///
    /// `Native` and `Flexhunt` have no set of their own.
    #[must_use]
    pub const fn cdn_set(self) -> Option<&'static str> {
        match self {
            Self::Apple | Self::Google | Self::Twitter | Self::Facebook => Some(self.name()),
            Self::Native | Self::Flexhunt => None,
        }
    }

    /// Whether this is the animated style.
    #[must_use]
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Flexhunt)
    }
}

impl fmt::Display for EmojiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EmojiStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| Error::UnknownStyle(s.to_string()))
    }
}

// ============================================================================
// Storage backends
// ============================================================================

/// Persisted key-value storage behind a [`StyleStore`].
pub trait StyleStorage: Send + Sync {
    /// Read a value. `Ok(None)` means the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write a value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage. Cloning shares the underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every key, as if the user cleared site data.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl StyleStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON object file on disk.
///
/// A missing file reads as empty; the file is created on first write.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the JSON file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl StyleStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// Storage for environments without persistence. Every call fails with
/// [`Error::StorageUnavailable`], so the store falls back to its default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStorage;

impl StyleStorage for NoStorage {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::StorageUnavailable)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::StorageUnavailable)
    }
}

// ============================================================================
// Store
// ============================================================================

type Listener = Arc<dyn Fn(EmojiStyle) + Send + Sync + 'static>;

struct StoreInner {
    storage: Arc<dyn StyleStorage>,
    default_style: EmojiStyle,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: Mutex<u64>,
}

/// Observable style preference.
///
/// Cloning yields another handle to the same store.
#[derive(Clone)]
pub struct StyleStore {
    inner: Arc<StoreInner>,
}

impl fmt::Debug for StyleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleStore")
            .field("default_style", &self.inner.default_style)
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

impl StyleStore {
    /// Create a store over `storage`, using `default_style` until a value is
    /// persisted.
    #[must_use]
    pub fn new(storage: Arc<dyn StyleStorage>, default_style: EmojiStyle) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                storage,
                default_style,
                listeners: Mutex::new(Vec::new()),
                next_id: Mutex::new(0),
            }),
        }
    }

    /// Create a store over fresh in-memory storage.
    #[must_use]
    pub fn in_memory(default_style: EmojiStyle) -> Self {
        Self::new(Arc::new(MemoryStorage::new()), default_style)
    }

    /// Style used when nothing valid is persisted.
    #[must_use]
    pub fn default_style(&self) -> EmojiStyle {
        self.inner.default_style
    }

    /// Current style: the persisted value, or the default.
    #[must_use]
    pub fn get(&self) -> EmojiStyle {
        let default_style = self.inner.default_style;
        match self.inner.storage.load(STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "ignoring unknown persisted emoji style");
                default_style
            }),
            Ok(None) => default_style,
            Err(err) => {
                debug!(%err, "style storage unreadable, using default");
                default_style
            }
        }
    }

    /// Persist `style` and notify every subscriber.
    ///
    /// Subscribers receive the re-read persisted value, so with unavailable
    /// storage they see the default.
    pub fn set(&self, style: EmojiStyle) {
        if let Err(err) = self.inner.storage.save(STORAGE_KEY, style.name()) {
            debug!(%err, %style, "style storage unwritable, change not persisted");
        }

        let current = self.get();
        debug!(event = EVENT_NAME, style = %current, "emoji style changed");

        // Snapshot so listeners may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(current);
        }
    }

    /// Register a change listener. Dropping the returned [`Subscription`]
    /// unregisters it.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(EmojiStyle) + Send + Sync + 'static,
    {
        let id = {
            let mut next = self
                .inner
                .next_id
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *next += 1;
            *next
        };
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Handle returned by [`StyleStore::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
}

impl Subscription {
    /// Unsubscribe now rather than at drop.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_style_names_roundtrip() {
        for style in EmojiStyle::ALL {
            assert_eq!(style.name().parse::<EmojiStyle>().unwrap(), style);
        }
        assert!(matches!(
            "comic-sans".parse::<EmojiStyle>(),
            Err(Error::UnknownStyle(_))
        ));
    }

    #[test]
    fn test_cdn_sets() {
        assert_eq!(EmojiStyle::Google.cdn_set(), Some("google"));
        assert_eq!(EmojiStyle::Native.cdn_set(), None);
        assert_eq!(EmojiStyle::Flexhunt.cdn_set(), None);
        assert!(EmojiStyle::Flexhunt.is_animated());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&EmojiStyle::Twitter).unwrap();
        assert_eq!(json, "\"twitter\"");
        let style: EmojiStyle = serde_json::from_str("\"flexhunt\"").unwrap();
        assert_eq!(style, EmojiStyle::Flexhunt);
    }

    #[test]
    fn test_get_defaults_until_set() {
        let store = StyleStore::in_memory(EmojiStyle::Google);
        assert_eq!(store.get(), EmojiStyle::Google);
        store.set(EmojiStyle::Facebook);
        assert_eq!(store.get(), EmojiStyle::Facebook);
    }

    #[test]
    fn test_stores_converge_through_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let a = StyleStore::new(storage.clone(), EmojiStyle::Apple);
        let b = StyleStore::new(storage, EmojiStyle::Apple);

        a.set(EmojiStyle::Native);
        assert_eq!(b.get(), EmojiStyle::Native);
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        let store = StyleStore::in_memory(EmojiStyle::Apple);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let _sub = store.subscribe(move |style| seen_clone.lock().unwrap().push(style));

        store.set(EmojiStyle::Flexhunt);
        store.set(EmojiStyle::Twitter);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![EmojiStyle::Flexhunt, EmojiStyle::Twitter]
        );
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let store = StyleStore::in_memory(EmojiStyle::Apple);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        let sub = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(store.subscriber_count(), 1);

        store.set(EmojiStyle::Google);
        drop(sub);
        assert_eq!(store.subscriber_count(), 0);
        store.set(EmojiStyle::Apple);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unavailable_storage_uses_default() {
        let store = StyleStore::new(Arc::new(NoStorage), EmojiStyle::Twitter);
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        let _sub = store.subscribe(move |style| *seen_clone.lock().unwrap() = Some(style));

        store.set(EmojiStyle::Google);
        assert_eq!(store.get(), EmojiStyle::Twitter);
        assert_eq!(*seen.lock().unwrap(), Some(EmojiStyle::Twitter));
    }

    #[test]
    fn test_unknown_persisted_value_uses_default() {
        let storage = MemoryStorage::new();
        storage.save(STORAGE_KEY, "wingdings").unwrap();
        let store = StyleStore::new(Arc::new(storage), EmojiStyle::Apple);
        assert_eq!(store.get(), EmojiStyle::Apple);
    }

    #[test]
    fn test_cleared_storage_reverts_to_default() {
        let storage = MemoryStorage::new();
        let store = StyleStore::new(Arc::new(storage.clone()), EmojiStyle::Apple);
        store.set(EmojiStyle::Google);
        storage.clear();
        assert_eq!(store.get(), EmojiStyle::Apple);
    }

    #[test]
    fn test_listener_may_subscribe_reentrantly() {
        let store = StyleStore::in_memory(EmojiStyle::Apple);
        let weak_inner = Arc::downgrade(&store.inner);
        let extra = Arc::new(Mutex::new(Vec::new()));
        let extra_clone = Arc::clone(&extra);
        let sub = store.subscribe(move |_| {
            if let Some(inner) = weak_inner.upgrade() {
                let sub = StyleStore { inner }.subscribe(|_| {});
                extra_clone.lock().unwrap().push(sub);
            }
        });
        store.set(EmojiStyle::Google);
        assert_eq!(store.subscriber_count(), 2);

        let weak = Arc::downgrade(&store.inner);
        drop(sub);
        drop(store);
        assert!(weak.upgrade().is_none(), "store outlived its last handle");
        assert_eq!(extra.lock().unwrap().len(), 1);
    }
}
