//! secp256k1 key provider
//!
//! Generates fresh node identities and hands out their compressed public
//! keys. Each key pair is dropped right away; `SigningKey` wipes its secret
//! scalar on drop.

use crate::domain::value_objects::ParticipantKey;
use crate::ports::outbound::KeyPairProvider;
use shared_crypto::Secp256k1KeyPair;

/// Random secp256k1 identities, 33-byte compressed public keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1KeyProvider;

impl Secp256k1KeyProvider {
    pub fn new() -> Self {
        Self
    }
}

impl KeyPairProvider for Secp256k1KeyProvider {
    fn public_keys(&self, count: usize) -> Vec<ParticipantKey> {
        (0..count)
            .map(|_| ParticipantKey::from(Secp256k1KeyPair::generate().public_key().to_vec()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count() {
        let keys = Secp256k1KeyProvider::new().public_keys(16);

        assert_eq!(keys.len(), 16);
        assert!(keys.iter().all(|k| k.as_bytes().len() == 33));
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_zero_count() {
        assert!(Secp256k1KeyProvider::new().public_keys(0).is_empty());
    }
}
