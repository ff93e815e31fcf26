//! Transaction id sources
//!
//! Ids are SHA-256 digests: of the Unix time for the clock source, of a
//! caller label for the fixed source.

use crate::ports::outbound::TransactionIdSource;
use shared_crypto::sha256;
use std::time::{SystemTime, UNIX_EPOCH};

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// SHA-256 of the current Unix time in seconds, as 8 little-endian bytes.
///
/// Calls within the same second return the same id.
#[derive(Clone, Copy, Debug)]
pub struct ClockTransactionIdSource {
    clock: fn() -> u64,
}

impl ClockTransactionIdSource {
    pub fn new() -> Self {
        Self {
            clock: unix_seconds,
        }
    }

    /// Use a custom seconds clock.
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self { clock }
    }

    /// Transaction id for a given Unix timestamp.
    pub fn id_at(seconds: u64) -> Vec<u8> {
        sha256(&seconds.to_le_bytes()).to_vec()
    }
}

impl Default for ClockTransactionIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionIdSource for ClockTransactionIdSource {
    fn next_transaction_id(&self) -> Vec<u8> {
        Self::id_at((self.clock)())
    }
}

/// SHA-256 of a fixed label. Always returns the same id.
#[derive(Clone, Debug)]
pub struct FixedTransactionIdSource {
    id: Vec<u8>,
}

impl FixedTransactionIdSource {
    pub fn from_label(label: impl AsRef<[u8]>) -> Self {
        Self {
            id: sha256(label.as_ref()).to_vec(),
        }
    }
}

impl TransactionIdSource for FixedTransactionIdSource {
    fn next_transaction_id(&self) -> Vec<u8> {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_source_hashes_little_endian_seconds() {
        let source = ClockTransactionIdSource::with_clock(|| 1_700_000_000);
        let expected = sha256(&1_700_000_000u64.to_le_bytes()).to_vec();

        assert_eq!(source.next_transaction_id(), expected);
        assert_eq!(source.next_transaction_id().len(), 32);
    }

    #[test]
    fn test_clock_source_changes_with_time() {
        assert_ne!(
            ClockTransactionIdSource::id_at(1),
            ClockTransactionIdSource::id_at(2)
        );
    }

    #[test]
    fn test_fixed_source() {
        let source = FixedTransactionIdSource::from_label("2024-01-01");
        assert_eq!(
            hex::encode(source.next_transaction_id()),
            "41b62fb4518505d36dcd35c683efe1310d24ea22d6d146a0804c818070531814"
        );
    }
}
