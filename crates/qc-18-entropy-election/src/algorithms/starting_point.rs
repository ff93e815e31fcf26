//! Starting point derivation
//!
//! The seed is HMAC-SHA256(shared_secret, transaction_id) rendered as
//! lowercase hex. The shared secret cannot be recovered from it.

use crate::domain::errors::ElectionError;
use crate::domain::value_objects::{HexDigest, StartingPoint};
use shared_crypto::hmac_sha256;

/// Derive the per-transaction starting point.
pub fn build_starting_point(
    shared_secret: &[u8],
    transaction_id: &[u8],
) -> Result<StartingPoint, ElectionError> {
    let tag = hmac_sha256(shared_secret, transaction_id)?;
    Ok(StartingPoint::new(HexDigest::from_bytes(&tag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_hmac_sha256() {
        let start = build_starting_point(b"Jefe", b"what do ya want for nothing?").unwrap();
        assert_eq!(
            start.to_string(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_deterministic() {
        let s1 = build_starting_point(b"seed-A", b"tx-1").unwrap();
        let s2 = build_starting_point(b"seed-A", b"tx-1").unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_sensitive_to_both_inputs() {
        let base = build_starting_point(b"seed-A", b"tx-1").unwrap();
        assert_ne!(base, build_starting_point(b"seed-B", b"tx-1").unwrap());
        assert_ne!(base, build_starting_point(b"seed-A", b"tx-2").unwrap());
    }
}
