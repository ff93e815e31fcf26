//! Adapters for Entropy Election
//!
//! Concrete outbound collaborators.

pub mod key_provider;
pub mod transaction_ids;

pub use key_provider::Secp256k1KeyProvider;
pub use transaction_ids::{ClockTransactionIdSource, FixedTransactionIdSource};
