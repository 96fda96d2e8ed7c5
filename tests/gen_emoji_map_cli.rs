//! Tests for the `gen_emoji_map` binary.
//!
//! Runs the generator against a throwaway asset tree and reads the table back.

use emoji_kit::EmojiMap;
use std::path::Path;
use std::process::Command;

fn touch(root: &Path, folder: &str, file: &str) {
    let dir = root.join(folder);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(file), b"RIFF").unwrap();
}

#[test]
fn test_generates_table_from_assets() {
    let assets = tempfile::tempdir().unwrap();
    touch(assets.path(), "Food and Drink", "Pizza.webp");
    touch(assets.path(), "Smileys", "Grinning Face.webp");
    touch(assets.path(), "Smileys", "README.md");

    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("nested").join("emoji-map.json");

    let output = Command::new(env!("CARGO_BIN_EXE_gen_emoji_map"))
        .arg("--assets")
        .arg(assets.path())
        .arg("--out")
        .arg(&out)
        .output()
        .expect("Failed to execute gen_emoji_map");

    assert!(
        output.status.success(),
        "gen_emoji_map failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let map = EmojiMap::from_json(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(map.path("pizza"), Some("Food and Drink/Pizza.webp"));
    assert_eq!(map.path("🍕"), Some("Food and Drink/Pizza.webp"));
    assert_eq!(map.path("grinning"), Some("Smileys/Grinning Face.webp"));
    assert_eq!(map.path("😀"), Some("Smileys/Grinning Face.webp"));
}

#[test]
fn test_requires_assets_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_gen_emoji_map"))
        .output()
        .expect("Failed to execute gen_emoji_map");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--assets"));
}
