//! Fuzz target for the document loader and line parsers.
//!
//! The loader must never panic, whatever the bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use recsift::{Sifter, parse_class_line, parse_record_line};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for line in text.lines() {
        let _ = parse_record_line(line);
        let _ = parse_class_line(line);
    }
    let _ = Sifter::new().sift(text);
});
