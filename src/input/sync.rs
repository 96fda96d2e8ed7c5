//! Keeps an editable surface and its plain-text value in sync.
//!
//! The plain text is the source of truth: [`EmojiInput::extract`] always
//! returns exactly what the user typed, shortcodes included, while the
//! surface shows emoji as inline nodes. Each user edit goes through
//! [`EmojiInput::process_edit`], which converts newly typed emoji, enforces the
//! length limit and reports the new value.
//!
//! Re-hydrating a document after a conversion places the caret at the end of
//! the content rather than at its previous offset.

use super::document::Document;
use super::event::{InputEvent, KeyEvent, PasteEvent};
use super::surface::EditableSurface;
use crate::scan::Scanner;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Options for [`EmojiInput`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    /// Maximum length of the plain-text value, in characters. `Some(0)` means
    /// no limit.
    pub max_length: Option<usize>,
    /// Inline emoji size in pixels.
    pub emoji_size: f32,
    pub placeholder: String,
    pub disabled: bool,
    /// Whether the host shows a picker toggle next to the input.
    pub show_picker: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            max_length: None,
            emoji_size: 20.0,
            placeholder: "Type a message...".to_string(),
            disabled: false,
            show_picker: true,
        }
    }
}

type TextCallback = Box<dyn FnMut(&str)>;
type NotifyCallback = Box<dyn FnMut()>;

/// Rich emoji input over an [`EditableSurface`].
pub struct EmojiInput<S> {
    surface: S,
    scanner: Scanner,
    options: InputOptions,
    placeholder_visible: bool,
    picker_open: bool,
    on_change: Option<TextCallback>,
    on_submit: Option<TextCallback>,
    on_focus: Option<NotifyCallback>,
    on_blur: Option<NotifyCallback>,
}

impl<S: fmt::Debug> fmt::Debug for EmojiInput<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmojiInput")
            .field("surface", &self.surface)
            .field("options", &self.options)
            .field("placeholder_visible", &self.placeholder_visible)
            .field("picker_open", &self.picker_open)
            .finish_non_exhaustive()
    }
}

impl<S: EditableSurface> EmojiInput<S> {
    #[must_use]
    pub fn new(surface: S, options: InputOptions) -> Self {
        let placeholder_visible = surface.content().is_empty();
        Self {
            surface,
            scanner: Scanner::default(),
            options,
            placeholder_visible,
            picker_open: false,
            on_change: None,
            on_submit: None,
            on_focus: None,
            on_blur: None,
        }
    }

    #[must_use]
    pub fn with_scanner(mut self, scanner: Scanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Called with the new plain text after every edit.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Called with the plain text when Enter is pressed without Shift.
    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_focus(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for hosts applying raw user edits.
    /// Follow each edit with [`process_edit`](Self::process_edit).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    /// Convert plain text into surface content.
    #[must_use]
    pub fn hydrate(&self, text: &str) -> Document {
        Document::hydrate(text, &self.scanner)
    }

    /// Plain text currently on the surface.
    #[must_use]
    pub fn extract(&self) -> String {
        self.surface.content().extract()
    }

    /// Same as [`extract`](Self::extract).
    #[must_use]
    pub fn text(&self) -> String {
        self.extract()
    }

    /// Replace the content from an externally controlled value.
    ///
    /// Does nothing when the surface already holds `value`, so the caret
    /// survives round trips through a controlled value. Does not notify.
    pub fn set_value(&mut self, value: &str) {
        if self.extract() == value {
            return;
        }
        let content = self.hydrate(value);
        self.surface.set_content(content);
        self.placeholder_visible = value.is_empty();
    }

    /// Handle a user-driven content change and report the resulting text.
    pub fn process_edit(&mut self) -> String {
        let mut text = self.extract();
        if self.options.disabled {
            return text;
        }

        if let Some(max) = self.options.max_length.filter(|&max| max > 0) {
            if text.chars().count() > max {
                debug!(max, "truncating input to maximum length");
                text = truncate_graphemes(&text, max).to_string();
            }
        }

        let fresh = self.hydrate(&text);
        if fresh != *self.surface.content() {
            self.surface.set_content(fresh);
            self.surface.caret_to_end();
        }

        self.placeholder_visible = text.is_empty();
        if let Some(callback) = self.on_change.as_mut() {
            callback(&text);
        }
        text
    }

    /// Insert the plain-text flavour of a paste at the caret.
    ///
    /// Returns `false` when nothing was inserted.
    pub fn paste(&mut self, paste: &PasteEvent) -> bool {
        if self.options.disabled {
            return false;
        }
        if paste.html.is_some() {
            debug!("discarding rich clipboard formatting");
        }
        if !self.splice_at_caret(&paste.plain) {
            return false;
        }
        self.process_edit();
        true
    }

    /// Insert `text`, converting emoji, at the caret.
    ///
    /// Returns `false` when nothing was inserted.
    pub fn insert_at_caret(&mut self, text: &str) -> bool {
        if self.options.disabled || !self.splice_at_caret(text) {
            return false;
        }
        self.process_edit();
        true
    }

    /// Focus the surface, then insert `text` at the caret.
    pub fn insert_text(&mut self, text: &str) -> bool {
        self.focus();
        self.insert_at_caret(text)
    }

    fn splice_at_caret(&mut self, text: &str) -> bool {
        let fragment = self.hydrate(text);
        let inserted = self.surface.insert_at_caret(fragment);
        if !inserted {
            debug!("no active selection, insert skipped");
        }
        inserted
    }

    pub fn focus(&mut self) {
        self.surface.focus();
        self.placeholder_visible = false;
        if let Some(callback) = self.on_focus.as_mut() {
            callback();
        }
    }

    pub fn blur(&mut self) {
        self.surface.blur();
        self.placeholder_visible = self.surface.content().is_empty();
        if let Some(callback) = self.on_blur.as_mut() {
            callback();
        }
    }

    /// Empty the surface and report an empty value.
    pub fn clear(&mut self) {
        self.surface.set_content(Document::new());
        self.placeholder_visible = true;
        if let Some(callback) = self.on_change.as_mut() {
            callback("");
        }
    }

    /// Handle a key press. Returns whether the input consumed it.
    pub fn key_down(&mut self, key: &KeyEvent) -> bool {
        if !key.is_submit() {
            return false;
        }
        let text = self.extract();
        if !text.trim().is_empty() {
            if let Some(callback) = self.on_submit.as_mut() {
                callback(&text);
            }
        }
        true
    }

    /// Dispatch a surface event. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Input => {
                self.process_edit();
                true
            }
            InputEvent::Key(key) => self.key_down(key),
            InputEvent::Paste(paste) => {
                self.paste(paste);
                true
            }
            InputEvent::Focus => {
                self.focus();
                true
            }
            InputEvent::Blur => {
                self.blur();
                true
            }
        }
    }

    /// Whether the placeholder should be drawn.
    #[must_use]
    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.options.placeholder
    }

    /// Markup for a content-editable host.
    #[must_use]
    pub fn html(&self) -> String {
        self.surface.content().to_html(self.options.emoji_size)
    }

    pub fn toggle_picker(&mut self) {
        if self.options.show_picker && !self.options.disabled {
            self.picker_open = !self.picker_open;
        }
    }

    #[must_use]
    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    /// Insert an emoji chosen in the picker and close it.
    pub fn select_emoji(&mut self, token: &str) {
        self.insert_text(token);
        self.picker_open = false;
    }
}

/// Longest prefix of whole grapheme clusters holding at most `max` chars.
fn truncate_graphemes(text: &str, max: usize) -> &str {
    let mut chars = 0;
    let mut end = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        chars += grapheme.chars().count();
        if chars > max {
            break;
        }
        end = offset + grapheme.len();
    }
    &text[..end]
}
