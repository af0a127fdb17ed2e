#![no_main]

use certgraph_fingerprint::Fingerprint;
use libfuzzer_sys::fuzz_target;

// Hex parsing should never panic, and anything it accepts must re-encode to a parseable value
fuzz_target!(|data: &[u8]| {
    let data_string = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };
    if let Ok(fingerprint) = Fingerprint::from_hex(data_string) {
        assert_eq!(Fingerprint::from_hex_exact(&fingerprint.to_hex()), Ok(fingerprint));
    }
});
