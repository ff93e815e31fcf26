//! # secp256k1 Identity Keys
//!
//! Node identity key pairs. Public keys are exposed in SEC1 compressed form
//! (33 bytes, leading 0x02 or 0x03). The secret scalar is wiped when the
//! wrapped `SigningKey` is dropped.

use crate::CryptoError;
use k256::ecdsa::{SigningKey, VerifyingKey};

/// Compressed public key length in bytes.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; COMPRESSED_PUBLIC_KEY_SIZE]);

impl Secp256k1PublicKey {
    /// Create from compressed bytes (33 bytes, starting with 0x02 or 0x03).
    pub fn from_bytes(bytes: [u8; COMPRESSED_PUBLIC_KEY_SIZE]) -> Result<Self, CryptoError> {
        // Validate it's a valid compressed point
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Get raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Copy out the compressed encoding.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// secp256k1 keypair.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Get public key (compressed, 33 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        let sec1_bytes = self.signing_key.verifying_key().to_sec1_bytes();
        // SEC1 compressed encoding is always 33 bytes
        let mut bytes = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(&sec1_bytes[..COMPRESSED_PUBLIC_KEY_SIZE]);
        Secp256k1PublicKey(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_is_compressed() {
        let keypair = Secp256k1KeyPair::generate();
        let pubkey = keypair.public_key();

        assert_eq!(pubkey.as_bytes().len(), COMPRESSED_PUBLIC_KEY_SIZE);
        assert!(matches!(pubkey.as_bytes()[0], 0x02 | 0x03));
    }

    #[test]
    fn test_deterministic_public_key() {
        let k1 = Secp256k1KeyPair::from_bytes([0xABu8; 32]).unwrap();
        let k2 = Secp256k1KeyPair::from_bytes([0xABu8; 32]).unwrap();

        assert_eq!(k1.public_key(), k2.public_key());
    }

    #[test]
    fn test_public_key_roundtrip_validation() {
        let pubkey = Secp256k1KeyPair::generate().public_key();
        let restored = Secp256k1PublicKey::from_bytes(*pubkey.as_bytes()).unwrap();

        assert_eq!(pubkey, restored);
    }

    #[test]
    fn test_invalid_public_key_rejected() {
        let result = Secp256k1PublicKey::from_bytes([0x05u8; COMPRESSED_PUBLIC_KEY_SIZE]);
        assert!(matches!(result, Err(CryptoError::InvalidPublicKey)));
    }

    #[test]
    fn test_secret_wiped_on_drop() {
        use k256::elliptic_curve::zeroize::ZeroizeOnDrop;

        fn wipes_on_drop<T: ZeroizeOnDrop>() {}
        wipes_on_drop::<SigningKey>();
    }

    #[test]
    fn test_zero_secret_rejected() {
        assert!(matches!(
            Secp256k1KeyPair::from_bytes([0u8; 32]),
            Err(CryptoError::InvalidPrivateKey)
        ));
    }
}
