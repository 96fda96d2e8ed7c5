//! Offline generation of the animated-asset table.
//!
//! Animated assets are `.webp` files named after the emoji ("Face With Tears
//! Of Joy.webp") and grouped in category folders. Names are matched against
//! the Unicode emoji dataset after normalisation; when the exact name misses,
//! a handful of spelling variations are tried ("face" added or dropped,
//! "face with " / "smiling " / " emoji" stripped).
//!
//! Only emoji with an animated asset are written, under both their shortcode
//! id and their native sequence.

use super::EmojiMap;
use crate::error::Result;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// Category folders scanned for assets, in priority order.
pub const ASSET_FOLDERS: [&str; 9] = [
    "Smileys",
    "People",
    "Animals and Nature",
    "Food and Drink",
    "Activity",
    "Travel and Places",
    "Objects",
    "Symbols",
    "Flags",
];

const ASSET_EXTENSION: &str = "webp";

/// One emoji of the metadata dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmojiRecord {
    /// Shortcode id without colons.
    pub id: String,
    /// Human-readable CLDR name.
    pub name: String,
    /// Native sequence (default skin tone).
    pub native: String,
}

/// Lowercase, map `-`/`_` to spaces, drop everything but `[a-z0-9 ]`, and
/// collapse whitespace.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Alternate spellings tried when the normalised name has no asset.
#[must_use]
pub fn name_variations(normalized: &str) -> [String; 5] {
    [
        normalized.replacen(" face", "", 1),
        format!("{normalized} face"),
        normalized.replacen("face with ", "", 1),
        normalized.replacen("smiling ", "", 1),
        normalized.replacen(" emoji", "", 1),
    ]
}

/// Index the assets under `root` by normalised file stem.
///
/// Values are `folder/file` paths relative to `root`. Missing folders are
/// skipped; earlier folders win on name clashes.
pub fn scan_asset_dir(root: &Path) -> Result<BTreeMap<String, String>> {
    let mut assets = BTreeMap::new();
    for folder in ASSET_FOLDERS {
        let dir = root.join(folder);
        if !dir.is_dir() {
            debug!(folder, "asset folder missing, skipping");
            continue;
        }
        let mut files: Vec<_> = std::fs::read_dir(&dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(ASSET_EXTENSION))
            })
            .collect();
        files.sort();

        for path in files {
            let (Some(stem), Some(file)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.file_name().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            assets
                .entry(normalize_name(stem))
                .or_insert_with(|| format!("{folder}/{file}"));
        }
    }
    info!(count = assets.len(), "scanned animated assets");
    Ok(assets)
}

/// The Unicode emoji dataset bundled with the `emojis` crate.
#[must_use]
pub fn unicode_dataset() -> Vec<EmojiRecord> {
    emojis::iter()
        .filter_map(|emoji| {
            Some(EmojiRecord {
                id: emoji.shortcode()?.to_string(),
                name: emoji.name().to_string(),
                native: emoji.as_str().to_string(),
            })
        })
        .collect()
}

/// Find the asset for an emoji name, trying the exact normalised name first.
#[must_use]
pub fn match_asset<'a>(name: &str, assets: &'a BTreeMap<String, String>) -> Option<&'a str> {
    let normalized = normalize_name(name);
    if let Some(path) = assets.get(&normalized) {
        return Some(path);
    }
    name_variations(&normalized)
        .iter()
        .find_map(|variation| assets.get(variation))
        .map(String::as_str)
}

/// Cross-reference `records` against `assets`.
///
/// Returns the table and the number of emoji matched.
#[must_use]
pub fn build_map(records: &[EmojiRecord], assets: &BTreeMap<String, String>) -> (EmojiMap, usize) {
    let mut map = EmojiMap::new();
    let mut matched = 0;
    for record in records {
        if record.id.is_empty() || record.native.is_empty() || record.name.is_empty() {
            continue;
        }
        if let Some(path) = match_asset(&record.name, assets) {
            map.insert(record.id.clone(), path);
            map.insert(record.native.clone(), path);
            matched += 1;
        }
    }
    info!(matched, total = records.len(), "matched emoji to animated assets");
    (map, matched)
}
