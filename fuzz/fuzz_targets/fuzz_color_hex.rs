//! Fuzz target for theme colour parsing.
//!
//! `Rgba::from_hex` must never panic, and any colour it accepts must format
//! back to a hex string that parses to the same colour.

#![no_main]

use emoji_kit::color::Rgba;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Some(color) = Rgba::from_hex(data) else {
        return;
    };
    let formatted = color.to_string();
    assert_eq!(Rgba::from_hex(&formatted), Some(color));
    let _ = color.to_css();
});
