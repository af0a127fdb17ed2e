use thiserror::Error;

use crate::FINGERPRINT_LENGTH;

/// The supplied text could not be decoded into bytes.
#[derive(Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Non-hex characters or an odd number of digits.
    #[error("Invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Not standard, padded base64.
    #[error("Invalid base64 encoding: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// The supplied hash was not exactly [`FINGERPRINT_LENGTH`] bytes long.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error(
    "Invalid hash length: expected {expected} bytes, got {actual}",
    expected = FINGERPRINT_LENGTH
)]
pub struct InvalidLengthError {
    /// Number of bytes that were supplied.
    pub actual: usize,
}

#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq)]
pub enum FingerprintError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    InvalidLength(#[from] InvalidLengthError),
}
