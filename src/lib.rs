//! `emoji_kit` - headless emoji presentation toolkit
//!
//! Finds emoji in text, resolves them to image candidates for a chosen
//! visual style (Apple, Google, Twitter, Facebook, animated, or the
//! platform's own glyphs) and drives the state of the widgets that show them:
//! a lazily loading single emoji, rendered rich text, a searchable picker
//! grid and a rich text input with inline emoji.
//!
//! The host owns drawing and I/O. It feeds events (visibility, image loads,
//! key presses, pastes) into the widget state machines and draws the view
//! models they return.
//!
//! ```
//! use emoji_kit::{EmojiStyle, StyleStore, TextRenderer};
//!
//! let store = StyleStore::in_memory(EmojiStyle::Apple);
//! store.set(EmojiStyle::Google);
//!
//! let nodes = TextRenderer::default().render("gg :fire:", store.get());
//! assert_eq!(nodes.len(), 2);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // EmojiStyle in style, EmojiInput in input
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::struct_excessive_bools)] // Option structs mirror host flags
#![allow(clippy::cast_precision_loss)] // Pixel sizes as f32
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod color;
pub mod config;
pub mod emoji_map;
pub mod error;
pub mod input;
pub mod picker;
pub mod renderer;
pub mod resolve;
pub mod rich_text;
pub mod scan;
pub mod style;
pub mod token;

// Re-export core types at crate root
pub use color::Rgba;
pub use config::Config;
pub use emoji_map::EmojiMap;
pub use error::{Error, Result};
pub use style::{EmojiStyle, StyleStore, Subscription};
pub use token::EmojiToken;

// Resolution and rendering
pub use renderer::{EmojiElement, EmojiView, LoadRequest, ViewState, VisualEffects};
pub use resolve::{CandidateUrls, Resolution, Resolver, ResolverConfig};
pub use rich_text::{RenderNode, TextRenderer};
pub use scan::{Scanner, Segment, contains_emoji, find_emojis, scan};

// Widgets
pub use input::{Document, EditableSurface, EmojiInput, InputOptions, MemorySurface};
pub use picker::{EmojiPicker, PickerOptions, SkinTone};
