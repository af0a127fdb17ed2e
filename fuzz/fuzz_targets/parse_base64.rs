#![no_main]

use certgraph_fingerprint::Fingerprint;
use libfuzzer_sys::fuzz_target;

// Base64 parsing should never panic
fuzz_target!(|data: &[u8]| {
    let data_string = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };
    let _ = Fingerprint::from_base64(data_string);
    let _ = Fingerprint::from_base64_exact(data_string);
});
