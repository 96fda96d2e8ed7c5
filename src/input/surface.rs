//! The editable surface the rich input drives.
//!
//! A host (a DOM content-editable element, a TUI text field, a test double)
//! implements [`EditableSurface`] over its own widget. [`MemorySurface`] is the
//! in-process implementation used by tests and headless hosts.

use super::document::Document;

/// An editable region holding a [`Document`] and an optional caret.
///
/// The caret is a unit offset into the document (see [`Document::len_units`]).
/// `None` means the surface has no active selection.
pub trait EditableSurface {
    fn content(&self) -> &Document;

    fn set_content(&mut self, content: Document);

    fn caret(&self) -> Option<usize>;

    fn set_caret(&mut self, at: usize);

    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// Splice `fragment` in at the caret and move the caret after it.
    ///
    /// Returns `false`, leaving the surface untouched, when there is no caret.
    fn insert_at_caret(&mut self, fragment: Document) -> bool {
        let Some(at) = self.caret() else {
            return false;
        };
        let mut content = self.content().clone();
        let end = content.splice(at, fragment);
        self.set_content(content);
        self.set_caret(end);
        true
    }

    /// Move the caret past the last unit.
    fn caret_to_end(&mut self) {
        let end = self.content().len_units();
        self.set_caret(end);
    }
}

/// In-memory surface.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    content: Document,
    caret: Option<usize>,
    focused: bool,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface already holding `content`, without a caret.
    #[must_use]
    pub fn with_content(content: Document) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// Insert raw text at the caret the way a keyboard would, with no emoji
    /// conversion. Places the caret at the end first if there is none.
    pub fn type_text(&mut self, text: &str) {
        if self.caret.is_none() {
            self.caret_to_end();
        }
        self.insert_at_caret(Document::text(text));
    }

    /// Delete the unit before the caret.
    pub fn backspace(&mut self) {
        if let Some(at) = self.caret.filter(|&at| at > 0) {
            self.content.remove(at - 1, at);
            self.caret = Some(at - 1);
        }
    }

    /// Drop the selection, keeping focus.
    pub fn clear_selection(&mut self) {
        self.caret = None;
    }
}

impl EditableSurface for MemorySurface {
    fn content(&self) -> &Document {
        &self.content
    }

    fn set_content(&mut self, content: Document) {
        self.content = content;
        let len = self.content.len_units();
        if let Some(caret) = self.caret.as_mut() {
            *caret = (*caret).min(len);
        }
    }

    fn caret(&self) -> Option<usize> {
        self.caret
    }

    fn set_caret(&mut self, at: usize) {
        self.caret = Some(at.min(self.content.len_units()));
    }

    fn focus(&mut self) {
        self.focused = true;
        if self.caret.is_none() {
            self.caret_to_end();
        }
    }

    fn blur(&mut self) {
        self.focused = false;
        self.caret = None;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
