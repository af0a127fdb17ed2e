#![doc = include_str!("../README.md")]

mod error;
pub use error::{DecodeError, FingerprintError, InvalidLengthError};
mod fingerprint;
pub use fingerprint::{
    fingerprint_from_base64, fingerprint_from_bytes, fingerprint_from_hash_bytes,
    fingerprint_from_hex, Fingerprint, FINGERPRINT_LENGTH,
};
mod serde;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

#[cfg(feature = "uniffi")]
mod uniffi_support;
