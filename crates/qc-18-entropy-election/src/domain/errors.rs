//! Error types for Entropy Election

use shared_crypto::CryptoError;
use thiserror::Error;

/// All errors that can occur during an election
#[derive(Debug, Error)]
pub enum ElectionError {
    /// The keyed digest primitive failed while deriving the starting point
    #[error("Cryptographic primitive failed: {0}")]
    PrimitiveFailure(#[from] CryptoError),

    /// Text is not a 64-character lowercase hex digest
    #[error("Invalid hex digest: {0:?}")]
    InvalidDigest(String),

    /// Candidate set exceeded the configured limit
    #[error("Too many candidates: {count} > {max}")]
    TooManyCandidates { count: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ElectionError::TooManyCandidates {
            count: 20_000,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "Too many candidates: 20000 > 10000");
    }

    #[test]
    fn test_primitive_failure_from_crypto_error() {
        let err: ElectionError = CryptoError::MacFailed("boom".into()).into();
        assert_eq!(
            err.to_string(),
            "Cryptographic primitive failed: MAC computation failed: boom"
        );
    }
}
