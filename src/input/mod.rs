//! Rich text input with inline emoji.
//!
//! - [`document`]: the text/emoji node model and its markup
//! - [`surface`]: the editable surface a host provides
//! - [`event`]: key, paste and focus events
//! - [`sync`]: [`EmojiInput`], which keeps surface and plain text in step

pub mod document;
pub mod event;
pub mod surface;
pub mod sync;

pub use document::{DocNode, Document};
pub use event::{InputEvent, KeyCode, KeyEvent, KeyModifiers, PasteEvent};
pub use surface::{EditableSurface, MemorySurface};
pub use sync::{EmojiInput, InputOptions};
