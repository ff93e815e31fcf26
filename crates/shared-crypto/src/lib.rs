//! # Shared Crypto - Cryptographic Primitives
//!
//! **Status:** Phase 1 Implementation
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Candidate key digests |
//! | `mac` | HMAC-SHA256 | Election starting points |
//! | `ecdsa` | secp256k1 | Node identity keys |
//!
//! ## Security Properties
//!
//! - **SHA-256**: collision resistant, 32-byte output rendered as lowercase hex
//! - **HMAC-SHA256**: the key cannot be recovered from the tag
//! - **secp256k1**: SEC1 compressed public keys (33 bytes)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod mac;

// Re-exports
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey};
pub use errors::CryptoError;
pub use hashing::{sha256, sha256_hex, to_hex, Hash, Sha256Hasher, HASH_SIZE};
pub use mac::{hmac_sha256, hmac_sha256_hex};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
