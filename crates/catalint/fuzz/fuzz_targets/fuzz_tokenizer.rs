//! Fuzz target for the sheet tokenizer.
//!
//! The tokenizer must never panic, and every row it returns must have at
//! least one field.

#![no_main]

use catalint::input::tokenize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(rows) = tokenize(text) {
            assert!(rows.iter().all(|row| !row.is_empty()));
        }
    }
});
