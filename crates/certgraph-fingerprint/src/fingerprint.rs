//! The [`Fingerprint`] type identifies a certificate by the SHA-256 digest of its raw bytes.
//!
//! A fingerprint can also be rebuilt from a digest that was computed elsewhere, for instance a
//! base64 hash reported by a certificate transparency log, or an uppercase hex node id read back
//! from a serialized graph.

use std::{fmt, str::FromStr};

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::{
    error::{DecodeError, FingerprintError, InvalidLengthError},
    serde::FromStrVisitor,
};

/// Fingerprints are the full output width of SHA-256.
pub const FINGERPRINT_LENGTH: usize = 32;

/// A 256-bit content-addressed identifier for a certificate or any other entity.
///
/// Two fingerprints are equal iff their bytes are equal. Ordering is lexicographic over the
/// bytes, which gives a stable iteration order when fingerprints are used as map keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; FINGERPRINT_LENGTH]);

impl Fingerprint {
    /// Fingerprints an entity by hashing its raw bytes with SHA-256.
    pub fn from_raw_bytes(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    /// Builds a fingerprint from an already computed hash.
    ///
    /// At most [`FINGERPRINT_LENGTH`] bytes are copied from the front of `data`. Longer input is
    /// truncated and shorter input leaves the trailing bytes zeroed. Use
    /// [`Fingerprint::try_from_hash_bytes`] when the input must be a complete digest.
    pub fn from_hash_bytes(data: &[u8]) -> Self {
        if data.len() != FINGERPRINT_LENGTH {
            debug!(
                expected = FINGERPRINT_LENGTH,
                actual = data.len(),
                "Hash length mismatch, fingerprint is truncated or zero-padded"
            );
        }

        let mut fingerprint = [0u8; FINGERPRINT_LENGTH];
        let len = data.len().min(FINGERPRINT_LENGTH);
        fingerprint[..len].copy_from_slice(&data[..len]);
        Self(fingerprint)
    }

    /// Builds a fingerprint from a hash that must be exactly [`FINGERPRINT_LENGTH`] bytes long.
    pub fn try_from_hash_bytes(data: &[u8]) -> Result<Self, InvalidLengthError> {
        let bytes: [u8; FINGERPRINT_LENGTH] = data
            .try_into()
            .map_err(|_| InvalidLengthError { actual: data.len() })?;
        Ok(Self(bytes))
    }

    /// Decodes a standard, padded base64 hash. The decoded bytes are truncated or padded like
    /// [`Fingerprint::from_hash_bytes`].
    pub fn from_base64(hash: &str) -> Result<Self, DecodeError> {
        let data = STANDARD.decode(hash)?;
        Ok(Self::from_hash_bytes(&data))
    }

    /// Decodes a hex hash, in either case. The decoded bytes are truncated or padded like
    /// [`Fingerprint::from_hash_bytes`].
    pub fn from_hex(hash: &str) -> Result<Self, DecodeError> {
        let data = hex::decode(hash)?;
        Ok(Self::from_hash_bytes(&data))
    }

    /// Decodes a standard, padded base64 hash that must contain exactly
    /// [`FINGERPRINT_LENGTH`] bytes.
    pub fn from_base64_exact(hash: &str) -> Result<Self, FingerprintError> {
        let data = STANDARD.decode(hash).map_err(DecodeError::from)?;
        Ok(Self::try_from_hash_bytes(&data)?)
    }

    /// Decodes a hex hash that must contain exactly [`FINGERPRINT_LENGTH`] bytes.
    pub fn from_hex_exact(hash: &str) -> Result<Self, FingerprintError> {
        let data = hex::decode(hash).map_err(DecodeError::from)?;
        Ok(Self::try_from_hash_bytes(&data)?)
    }

    /// Uppercase hex, 64 characters. This is the canonical text form.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Standard base64 with padding.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Uppercase hex of the first `bytes` bytes, for compact labels.
    pub fn short_hex(&self, bytes: usize) -> String {
        hex::encode_upper(&self.0[..bytes.min(FINGERPRINT_LENGTH)])
    }

    #[allow(missing_docs)]
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LENGTH] {
        &self.0
    }
}

/// See [`Fingerprint::from_raw_bytes`].
pub fn fingerprint_from_bytes(raw: &[u8]) -> Fingerprint {
    Fingerprint::from_raw_bytes(raw)
}

/// See [`Fingerprint::from_hash_bytes`].
pub fn fingerprint_from_hash_bytes(data: &[u8]) -> Fingerprint {
    Fingerprint::from_hash_bytes(data)
}

/// See [`Fingerprint::from_base64`].
pub fn fingerprint_from_base64(hash: &str) -> Result<Fingerprint, DecodeError> {
    Fingerprint::from_base64(hash)
}

/// See [`Fingerprint::from_hex`].
pub fn fingerprint_from_hex(hash: &str) -> Result<Fingerprint, DecodeError> {
    Fingerprint::from_hex(hash)
}

impl TryFrom<&[u8]> for Fingerprint {
    type Error = InvalidLengthError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_hash_bytes(value)
    }
}

impl From<[u8; FINGERPRINT_LENGTH]> for Fingerprint {
    fn from(bytes: [u8; FINGERPRINT_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Fingerprint> for [u8; FINGERPRINT_LENGTH] {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

/// Parses the canonical text form. Unlike [`Fingerprint::from_hex`], the hex must decode to
/// exactly [`FINGERPRINT_LENGTH`] bytes, so a truncated node id never names a different node.
impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_exact(s)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(FromStrVisitor::new())
    }
}
