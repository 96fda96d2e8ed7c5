//! Style preference persistence across store instances.

mod common;

use common::init_logging;
use emoji_kit::style::{FileStorage, NoStorage, STORAGE_KEY, StyleStorage};
use emoji_kit::{Config, EmojiStyle, StyleStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn file_store(path: &std::path::Path, default_style: EmojiStyle) -> StyleStore {
    StyleStore::new(Arc::new(FileStorage::new(path)), default_style)
}

#[test]
fn test_choice_survives_restart() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("prefs.json");

    let first = file_store(&path, EmojiStyle::Apple);
    assert_eq!(first.get(), EmojiStyle::Apple);
    first.set(EmojiStyle::Twitter);

    let second = file_store(&path, EmojiStyle::Apple);
    assert_eq!(second.get(), EmojiStyle::Twitter);

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[STORAGE_KEY], "twitter");
}

#[test]
fn test_other_keys_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

    file_store(&path, EmojiStyle::Apple).set(EmojiStyle::Google);

    let storage = FileStorage::new(&path);
    assert_eq!(storage.load("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(storage.load(STORAGE_KEY).unwrap().as_deref(), Some("google"));
}

#[test]
fn test_corrupt_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{not json").unwrap();

    let store = file_store(&path, EmojiStyle::Facebook);
    assert_eq!(store.get(), EmojiStyle::Facebook);
}

#[test]
fn test_unknown_persisted_value_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, r#"{"emoji-style": "wingdings"}"#).unwrap();

    assert_eq!(file_store(&path, EmojiStyle::Google).get(), EmojiStyle::Google);
}

#[test]
fn test_unavailable_storage_notifies_default() {
    let store = StyleStore::new(Arc::new(NoStorage), EmojiStyle::Native);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let _subscription = store.subscribe(move |style| {
        assert_eq!(style, EmojiStyle::Native);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set(EmojiStyle::Apple);
    assert_eq!(store.get(), EmojiStyle::Native);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_config_file_drives_default_style() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("emoji.toml");
    std::fs::write(&config_path, "default_style = \"flexhunt\"\n").unwrap();

    let config = Config::load(&config_path).unwrap();
    let store = file_store(&dir.path().join("prefs.json"), config.default_style);
    assert_eq!(store.get(), EmojiStyle::Flexhunt);
}
