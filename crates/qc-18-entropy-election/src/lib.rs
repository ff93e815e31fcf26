//! # QC-18: Entropy Election Subsystem
//!
//! Deterministic ordering of participant public keys, seeded per transaction.
//! Every participant holding the same shared secret, transaction id and key
//! set computes the identical order without exchanging messages.
//!
//! ## Architecture
//!
//! - **Domain**: Value objects (ParticipantKey, HexDigest, StartingPoint) and
//!   entities (KeyRegistry, CandidateSet, ElectionOrder)
//! - **Algorithms**: Starting point derivation, entropy sort
//! - **Ports**: Inbound (EntropyElectionApi) and Outbound (KeyPairProvider, TransactionIdSource)
//! - **Adapters**: secp256k1 key generation, clock and label transaction ids
//! - **Application**: Service orchestration
//!
//! ## Quick Start
//!
//! ```
//! use qc_18_entropy_election::{entropy_sort, ParticipantKey};
//!
//! let keys: Vec<ParticipantKey> = vec![vec![0x02; 33].into(), vec![0x03; 33].into()];
//! let order = entropy_sort(b"shared-secret", b"tx-id", &keys).unwrap();
//! assert_eq!(order.len(), 2);
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{ClockTransactionIdSource, FixedTransactionIdSource, Secp256k1KeyProvider};
pub use algorithms::{build_starting_point, entropy_sort, probe_sequence, rank_candidates};
pub use application::service::EntropyElectionService;
pub use config::ElectionConfig;
pub use domain::entities::*;
pub use domain::errors::ElectionError;
pub use domain::value_objects::*;
pub use ports::inbound::EntropyElectionApi;
pub use ports::outbound::{KeyPairProvider, TransactionIdSource};
