//! # SHA-256 Hashing
//!
//! Fixed-output digests over arbitrary payloads, with canonical lowercase
//! hex rendering for comparison and storage.

use sha2::{Digest, Sha256};

/// Digest length in bytes.
pub const HASH_SIZE: usize = 32;

/// SHA-256 output (256-bit).
pub type Hash = [u8; HASH_SIZE];

/// Stateful SHA-256 hasher.
pub struct Sha256Hasher {
    inner: Sha256,
}

impl Sha256Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(self) -> Hash {
        self.inner.finalize().into()
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hash data with SHA-256 and render it as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    to_hex(&sha256(data))
}

/// Lowercase hex rendering.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
