//! Fuzz target for highlight color parsing.
//!
//! Tests that color parsing handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use selectable_text::color::Rgba;

fuzz_target!(|data: &str| {
    let _ = Rgba::from_hex(data);
    let _ = Rgba::from_name(data);

    // Parsed colors must format back to something that parses to the same color
    if let Ok(color) = data.parse::<Rgba>() {
        assert_eq!(color.to_string().parse::<Rgba>(), Ok(color));
    }
});
