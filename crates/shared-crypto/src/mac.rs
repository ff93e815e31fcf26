//! # HMAC-SHA256
//!
//! Keyed message authentication digests. Any key length is accepted.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::hashing::{to_hex, Hash};
use crate::CryptoError;

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 of `data` keyed by `key`.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Hash, CryptoError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| CryptoError::MacFailed(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

/// Compute HMAC-SHA256 and render it as lowercase hex.
pub fn hmac_sha256_hex(key: &[u8], data: &[u8]) -> Result<String, CryptoError> {
    hmac_sha256(key, data).map(|tag| to_hex(&tag))
}
