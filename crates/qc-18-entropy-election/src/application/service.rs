//! Entropy Election Service
//!
//! Main service implementing EntropyElectionApi.

use crate::algorithms::{build_starting_point, rank_candidates};
use crate::config::ElectionConfig;
use crate::domain::entities::{ElectionOrder, KeyRegistry};
use crate::domain::errors::ElectionError;
use crate::domain::invariants::{
    invariant_completeness, invariant_excludes_starting_point, invariant_unique,
};
use crate::domain::value_objects::{HexDigest, ParticipantKey, StartingPoint};
use crate::ports::inbound::EntropyElectionApi;

use tracing::{debug, warn};

/// Entropy Election Service
///
/// Orchestrates one election:
/// 1. Derive the starting point
/// 2. Register candidate digests, reporting collisions
/// 3. Check the optional cap on distinct candidates
/// 4. Rank candidates
/// 5. Return the order
pub struct EntropyElectionService {
    config: ElectionConfig,
}

impl EntropyElectionService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: ElectionConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: ElectionConfig) -> Self {
        Self { config }
    }

    fn validate_registry(&self, registry: &KeyRegistry) -> Result<(), ElectionError> {
        let Some(max) = self.config.max_candidates else {
            return Ok(());
        };
        if registry.len() > max {
            return Err(ElectionError::TooManyCandidates {
                count: registry.len(),
                max,
            });
        }
        Ok(())
    }

    fn build_registry(&self, candidates: &[ParticipantKey]) -> KeyRegistry {
        let mut registry = KeyRegistry::new();
        for key in candidates {
            self.register_candidate(&mut registry, key.digest(), key);
        }
        registry
    }

    /// Register `key` under `digest`. Returns true if a collision was reported.
    fn register_candidate(
        &self,
        registry: &mut KeyRegistry,
        digest: HexDigest,
        key: &ParticipantKey,
    ) -> bool {
        let Some(displaced) = registry.insert_digest(digest.clone(), key.clone()) else {
            return false;
        };
        // Identical bytes re-registered are not a collision
        if !self.config.warn_on_collision || displaced == *key {
            return false;
        }
        warn!(
            digest = %digest,
            dropped = %displaced,
            kept = %key,
            "Candidate digest collision, keeping last registered key"
        );
        true
    }
}

impl Default for EntropyElectionService {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropyElectionApi for EntropyElectionService {
    fn order_candidates(
        &self,
        shared_secret: &[u8],
        transaction_id: &[u8],
        candidates: &[ParticipantKey],
    ) -> Result<ElectionOrder, ElectionError> {
        // 1. Derive starting point
        let starting_point = build_starting_point(shared_secret, transaction_id)?;

        // 2. Register candidates
        let registry = self.build_registry(candidates);

        // 3. Validate distinct candidate count
        self.validate_registry(&registry)?;

        // 4. Rank
        let order = rank_candidates(&starting_point, &registry);

        debug_assert!(invariant_completeness(&order, &registry));
        debug_assert!(invariant_unique(&order));
        debug_assert!(invariant_excludes_starting_point(
            &order,
            &registry,
            &starting_point
        ));

        debug!(
            candidates = candidates.len(),
            distinct = registry.len(),
            starting_point = %starting_point,
            leader = ?order.leader().map(ToString::to_string),
            "Entropy election complete"
        );

        Ok(order)
    }

    fn starting_point(
        &self,
        shared_secret: &[u8],
        transaction_id: &[u8],
    ) -> Result<StartingPoint, ElectionError> {
        build_starting_point(shared_secret, transaction_id)
    }
}
