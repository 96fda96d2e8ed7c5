//! Fuzz target for the emoji scanner.
//!
//! Segments must partition arbitrary text exactly, and hydrating the text into
//! a document must extract back to the same string.

#![no_main]

use emoji_kit::input::Document;
use emoji_kit::scan::Scanner;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let scanner = Scanner::default();

    let mut joined = String::with_capacity(data.len());
    for segment in scanner.scan(data) {
        assert!(!segment.as_str().is_empty(), "empty segment");
        joined.push_str(segment.as_str());
    }
    assert_eq!(joined, data);

    let doc = Document::hydrate(data, &scanner);
    assert_eq!(doc.extract(), data);
    let _ = doc.to_html(20.0);
});
