//! Library configuration loaded from TOML.
//!
//! Every section is optional; missing keys take their defaults.
//!
//! ```toml
//! default_style = "google"
//!
//! [resolver]
//! cdn_version = "15.1.0"
//!
//! [input]
//! max_length = 280
//!
//! [picker]
//! columns = 10
//! theme = "light"
//! ```

use crate::error::Result;
use crate::input::InputOptions;
use crate::picker::PickerOptions;
use crate::resolve::ResolverConfig;
use crate::style::EmojiStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Style used when nothing valid is persisted.
    pub default_style: EmojiStyle,
    pub resolver: ResolverConfig,
    pub input: InputOptions,
    pub picker: PickerOptions,
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
