//! Events a host surface forwards to the rich input.

use bitflags::bitflags;

/// An event from the editable surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// The surface content changed through typing or deletion.
    Input,
    /// Key pressed.
    Key(KeyEvent),
    /// Clipboard paste, intercepted before the surface applies it.
    Paste(PasteEvent),
    /// Focus gained.
    Focus,
    /// Focus lost.
    Blur,
}

impl InputEvent {
    /// Get the key event if this is one.
    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }

    /// Get the paste event if this is one.
    #[must_use]
    pub fn paste(&self) -> Option<&PasteEvent> {
        match self {
            Self::Paste(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<PasteEvent> for InputEvent {
    fn from(e: PasteEvent) -> Self {
        Self::Paste(e)
    }
}

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const SHIFT = 0b0001;
        const ALT = 0b0010;
        const CTRL = 0b0100;
        const META = 0b1000;
    }
}

/// Keys the input reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Submits unless Shift is held.
    Enter,
    /// Passed through for the host, which closes its picker on it.
    Escape,
    /// Passed through; the host surface applies the deletion.
    Backspace,
    Char(char),
    /// Any key the input does not handle.
    Other,
}

/// A key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Key press without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    #[must_use]
    pub const fn enter() -> Self {
        Self::plain(KeyCode::Enter)
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Plain Enter, the submit gesture. Shift+Enter inserts a line break.
    #[must_use]
    pub fn is_submit(&self) -> bool {
        self.code == KeyCode::Enter && !self.shift()
    }
}

/// Clipboard contents offered by a paste.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasteEvent {
    /// The `text/plain` flavour.
    pub plain: String,
    /// The `text/html` flavour, if the clipboard carried one. Never inserted.
    pub html: Option<String>,
}

impl PasteEvent {
    #[must_use]
    pub fn new(plain: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            html: None,
        }
    }

    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }
}
