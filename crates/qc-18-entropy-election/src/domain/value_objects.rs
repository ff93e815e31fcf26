//! Value objects for Entropy Election

use serde::{Deserialize, Serialize};
use shared_crypto::{sha256_hex, to_hex, HASH_SIZE};
use std::fmt;

use super::errors::ElectionError;

/// Raw digest length in bytes.
pub const DIGEST_SIZE: usize = HASH_SIZE;

/// Hex-encoded digest length in characters.
pub const HEX_DIGEST_LEN: usize = 2 * DIGEST_SIZE;

/// Number of starting point characters probed in the primary phase.
pub const PROBE_ROUNDS: usize = DIGEST_SIZE;

/// Character index inspected in every candidate digest.
///
/// Derived from the digest's byte length, not its hex length, so this is the
/// 32nd of 64 characters. Deployed participants agree on this offset; changing
/// it changes every ordering.
pub const PROBE_POSITION: usize = DIGEST_SIZE - 1;

/// Probe characters for the fallback phase, in order.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Participant public key, treated as an uninterpreted byte string.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantKey(Vec<u8>);

impl ParticipantKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// SHA-256 digest of the key bytes.
    pub fn digest(&self) -> HexDigest {
        HexDigest::of(&self.0)
    }
}

impl From<Vec<u8>> for ParticipantKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ParticipantKey {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for ParticipantKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ParticipantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex(&self.0))
    }
}

impl fmt::Debug for ParticipantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticipantKey({})", self)
    }
}

/// Digest rendered as 64 lowercase hex characters.
///
/// Ordering is byte-wise over the ASCII text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexDigest(String);

impl HexDigest {
    /// Hash `bytes` with SHA-256.
    pub fn of(bytes: &[u8]) -> Self {
        Self(sha256_hex(bytes))
    }

    /// Wrap an already-rendered digest, validating its shape.
    pub fn parse(text: &str) -> Result<Self, ElectionError> {
        let well_formed = text.len() == HEX_DIGEST_LEN
            && text
                .bytes()
                .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c));
        if !well_formed {
            return Err(ElectionError::InvalidDigest(text.to_string()));
        }
        Ok(Self(text.to_string()))
    }

    /// Render raw digest bytes.
    pub fn from_bytes(bytes: &[u8; DIGEST_SIZE]) -> Self {
        Self(to_hex(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ASCII hex character at `position`.
    pub fn char_at(&self, position: usize) -> u8 {
        self.0.as_bytes()[position]
    }

    /// The character every candidate is bucketed by.
    pub fn probed_char(&self) -> u8 {
        self.char_at(PROBE_POSITION)
    }
}

impl TryFrom<String> for HexDigest {
    type Error = ElectionError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<HexDigest> for String {
    fn from(digest: HexDigest) -> Self {
        digest.0
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexDigest({})", self.0)
    }
}

/// Per-transaction seed anchoring the ordering. Never a participant itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StartingPoint(HexDigest);

impl StartingPoint {
    pub fn new(digest: HexDigest) -> Self {
        Self(digest)
    }

    pub fn digest(&self) -> &HexDigest {
        &self.0
    }

    /// Character probed in primary round `round`.
    pub fn probe(&self, round: usize) -> u8 {
        self.0.char_at(round)
    }
}

impl fmt::Display for StartingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
