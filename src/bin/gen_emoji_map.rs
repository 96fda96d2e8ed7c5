//! `gen_emoji_map` - build the animated emoji asset table
//!
//! Scans a checkout of the animated emoji asset repository and writes the
//! JSON table mapping shortcode ids and native emoji to asset paths.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen_emoji_map -- --assets ../Telegram-Animated-Emojis
//! cargo run --bin gen_emoji_map -- --assets ./assets --out map.json --verbose
//! ```

use clap::Parser;
use emoji_kit::emoji_map::generate::{build_map, scan_asset_dir, unicode_dataset};
use std::path::PathBuf;
use tracing::{Level, info, warn};

/// Build the emoji asset table from an asset checkout
#[derive(Parser, Debug)]
#[command(name = "gen_emoji_map")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root of the asset checkout (holds the category folders)
    #[arg(short = 'a', long)]
    assets: PathBuf,

    /// Output JSON file
    #[arg(short = 'o', long, default_value = "data/emoji-map.json")]
    out: PathBuf,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> emoji_kit::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();

    let assets = scan_asset_dir(&args.assets)?;
    if assets.is_empty() {
        warn!(root = %args.assets.display(), "no .webp assets found");
    }

    let records = unicode_dataset();
    let (map, matched) = build_map(&records, &assets);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&args.out, map.to_json_pretty()?)?;

    info!(
        out = %args.out.display(),
        matched,
        entries = map.len(),
        "wrote emoji map"
    );
    Ok(())
}
