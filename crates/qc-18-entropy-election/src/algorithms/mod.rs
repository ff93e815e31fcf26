//! Algorithms module for Entropy Election
//!
//! Contains:
//! - Starting point derivation (HMAC-SHA256 over the transaction id)
//! - Entropy sort (bucketed, rotated ranking of candidate digests)

pub mod entropy_sort;
pub mod starting_point;

pub use entropy_sort::{entropy_sort, probe_sequence, rank_candidates};
pub use starting_point::build_starting_point;
