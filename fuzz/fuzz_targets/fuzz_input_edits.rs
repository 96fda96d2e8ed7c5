//! Fuzz target for rich input edit sequences.
//!
//! Replays arbitrary typing, caret moves, backspaces and pastes against an
//! input and checks the length limit, caret bounds and that the surface matches a
//! rescan of its own text after every step.

#![no_main]

use arbitrary::Arbitrary;
use emoji_kit::input::{
    Document, EditableSurface, EmojiInput, InputOptions, MemorySurface, PasteEvent,
};
use emoji_kit::scan::Scanner;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Type(String),
    Paste(String),
    Insert(String),
    MoveCaret(u8),
    Backspace,
    DropSelection,
    Focus,
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Script {
    max_length: Option<u8>,
    ops: Vec<Op>,
}

fuzz_target!(|script: Script| {
    let options = InputOptions {
        max_length: script.max_length.map(usize::from),
        ..InputOptions::default()
    };
    let mut input = EmojiInput::new(MemorySurface::new(), options);

    for op in script.ops.into_iter().take(64) {
        match op {
            Op::Type(text) => {
                input.surface_mut().type_text(&text);
                input.process_edit();
            }
            Op::Paste(text) => {
                input.paste(&PasteEvent::new(text));
            }
            Op::Insert(text) => {
                input.insert_text(&text);
            }
            Op::MoveCaret(at) => input.surface_mut().set_caret(usize::from(at)),
            Op::Backspace => {
                input.surface_mut().backspace();
                input.process_edit();
            }
            Op::DropSelection => input.surface_mut().clear_selection(),
            Op::Focus => input.focus(),
            Op::Clear => input.clear(),
        }

        if let Some(max) = script.max_length.filter(|&max| max > 0) {
            assert!(input.text().chars().count() <= usize::from(max));
        }
        if let Some(caret) = input.surface().caret() {
            assert!(caret <= input.surface().content().len_units());
        }
        assert_eq!(
            &Document::hydrate(&input.text(), &Scanner::default()),
            input.surface().content()
        );
    }
});
