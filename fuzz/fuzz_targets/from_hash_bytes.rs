#![no_main]

use certgraph_fingerprint::{Fingerprint, FINGERPRINT_LENGTH};
use libfuzzer_sys::fuzz_target;

// The lenient constructor keeps the common prefix and zero-fills the rest
fuzz_target!(|data: &[u8]| {
    let fingerprint = Fingerprint::from_hash_bytes(data);
    let len = data.len().min(FINGERPRINT_LENGTH);
    assert_eq!(&fingerprint.as_bytes()[..len], &data[..len]);
    assert!(fingerprint.as_bytes()[len..].iter().all(|b| *b == 0));
    assert_eq!(
        Fingerprint::try_from_hash_bytes(data).is_ok(),
        data.len() == FINGERPRINT_LENGTH
    );
});
