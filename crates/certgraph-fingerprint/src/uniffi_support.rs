use crate::{Fingerprint, FingerprintError};

uniffi::custom_type!(Fingerprint, String, {
    try_lift: |val| {
        Fingerprint::from_hex_exact(val.as_str()).map_err(|e: FingerprintError| e.into())
    },
    lower: |obj| obj.to_hex(),
});
