//! Outbound Ports (Driven Ports / SPI)
//!
//! Collaborators that feed the election. Key formats and transaction id
//! contents are opaque to the election itself.

use crate::domain::value_objects::ParticipantKey;

/// Source of participant public keys.
pub trait KeyPairProvider: Send + Sync {
    /// Produce `count` public keys as raw byte encodings.
    fn public_keys(&self, count: usize) -> Vec<ParticipantKey>;
}

/// Source of transaction identifiers.
pub trait TransactionIdSource: Send + Sync {
    /// Next transaction id, as an uninterpreted byte string.
    fn next_transaction_id(&self) -> Vec<u8>;
}

/// Mock implementations for testing
#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Mock key provider returning `[0x02, i, i, ...]` style keys
    pub struct SequentialKeyProvider;

    impl KeyPairProvider for SequentialKeyProvider {
        fn public_keys(&self, count: usize) -> Vec<ParticipantKey> {
            (0..count)
                .map(|i| {
                    let mut bytes = vec![(i % 256) as u8; 33];
                    bytes[0] = 0x02;
                    bytes[1] = (i / 256) as u8;
                    ParticipantKey::from(bytes)
                })
                .collect()
        }
    }

    /// Mock transaction source returning an incrementing counter
    #[derive(Default)]
    pub struct CounterTransactionIdSource {
        next: AtomicU64,
    }

    impl TransactionIdSource for CounterTransactionIdSource {
        fn next_transaction_id(&self) -> Vec<u8> {
            self.next.fetch_add(1, Ordering::Relaxed).to_be_bytes().to_vec()
        }
    }

    #[test]
    fn test_sequential_keys_are_distinct() {
        let keys = SequentialKeyProvider.public_keys(300);
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), 300);
    }
}
