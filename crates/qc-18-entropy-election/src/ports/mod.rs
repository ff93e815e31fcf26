//! Ports module for Entropy Election
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::EntropyElectionApi;
pub use outbound::{KeyPairProvider, TransactionIdSource};
