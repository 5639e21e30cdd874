//! Fuzz target for whole-sheet validation.

#![no_main]

use catalint::{Catalint, LanguageTags, Lookups, Sheet, SpdxLicenses};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let catalint = Catalint::new(Lookups::new(
        SpdxLicenses::from_ids(["MIT"]),
        LanguageTags::well_formed(),
    ));

    for sheet in Sheet::ALL {
        let _ = catalint.report(sheet.name(), text);
    }
});
