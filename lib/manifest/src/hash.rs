//! SHA-1 content digests.
//!
//! The hosting API keys stored file content by the SHA-1 of its raw bytes, so
//! unlike most content-addressed storage the algorithm here is part of the
//! wire contract and cannot be swapped out.

use std::fmt;
use std::str::FromStr;

use serde::de::Visitor;
use serde::{Deserialize, Serialize, de};
use sha1::{Digest, Sha1};
use thiserror::Error;

/// Length of a hex encoded SHA-1 digest.
pub const HASH_HEX_LEN: usize = 40;

pub struct Hasher(Sha1);

impl Hasher {
    pub fn new() -> Self {
        Self(Sha1::new())
    }

    pub fn update(&mut self, input: &[u8]) -> &mut Self {
        self.0.update(input);
        self
    }

    pub fn finalize(&mut self) -> Hash {
        Hash(self.0.finalize_reset().into())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Hasher::new()
    }
}

/// A SHA-1 hash value, computed over an input of bytes.
///
/// Displays and serializes as 40 lowercase hex characters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Hash([u8; 20]);

impl Hash {
    /// Creates and returns a new [Hash] value, computed from an input of bytes.
    #[must_use]
    pub fn new(input: &[u8]) -> Self {
        Self(Sha1::digest(input).into())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Hash::new("".as_bytes())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct HashVisitor;

impl<'de> Visitor<'de> for HashVisitor {
    type Value = Hash;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sha1 hash hex string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Hash::from_str(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(HashVisitor)
    }
}

/// An error when parsing a String representation of a [`Hash`].
#[derive(Debug, Error)]
pub enum HashParseError {
    #[error("failed to parse hash hex string")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("expected {HASH_HEX_LEN} hex characters, got {0}")]
    InvalidLength(usize),
}

impl FromStr for Hash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != HASH_HEX_LEN {
            return Err(HashParseError::InvalidLength(s.len()));
        }
        let bytes = hex::decode(s)?;
        let mut digest = [0u8; 20];
        digest.copy_from_slice(&bytes);
        Ok(Self(digest))
    }
}

#[cfg(test)]
mod tests {
    use serde::de::{self, Deserializer, IntoDeserializer};

    use super::*;

    #[test]
    fn known_digest() {
        // sha1("hello world")
        let hash = Hash::new(b"hello world");
        assert_eq!(
            hash.to_string(),
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
        );
    }

    #[test]
    fn incremental_matches_oneshot() {
        let mut hasher = Hasher::new();
        hasher.update(b"hello ").update(b"world");
        assert_eq!(hasher.finalize(), Hash::new(b"hello world"));
    }

    #[test]
    fn parse_round_trip() {
        let hash = Hash::new(b"index.html contents");
        let parsed = Hash::from_str(&hash.to_string()).expect("able to parse");
        assert_eq!(hash, parsed);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            Hash::from_str("abc123"),
            Err(HashParseError::InvalidLength(6))
        ));
    }

    #[test]
    fn test_deserialize() {
        let hash = Hash::new(b"netlify deploy");
        let hash_string = hash.to_string();
        let deserializer: de::value::StrDeserializer<de::value::Error> =
            hash_string.as_str().into_deserializer();
        let hash_deserialized: Hash = deserializer
            .deserialize_any(HashVisitor)
            .expect("able to deserialize");

        assert_eq!(hash, hash_deserialized);
    }
}
