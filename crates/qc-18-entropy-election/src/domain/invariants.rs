//! Domain invariants for Entropy Election

use super::entities::{ElectionOrder, KeyRegistry};
use super::value_objects::{ParticipantKey, StartingPoint};
use std::collections::HashSet;

/// INVARIANT-1: Completeness
/// Every registered key is placed, and nothing else is.
pub fn invariant_completeness(order: &ElectionOrder, registry: &KeyRegistry) -> bool {
    if order.len() != registry.len() {
        return false;
    }

    let registered: HashSet<&ParticipantKey> = registry.iter().map(|(_, key)| key).collect();
    order.iter().all(|key| registered.contains(key))
}

/// INVARIANT-2: Uniqueness
/// No key appears twice.
pub fn invariant_unique(order: &ElectionOrder) -> bool {
    let mut seen = HashSet::with_capacity(order.len());
    order.iter().all(|key| seen.insert(key))
}

/// INVARIANT-3: Starting Point Exclusion
/// The starting point is never placed unless a registered key hashes to it.
pub fn invariant_excludes_starting_point(
    order: &ElectionOrder,
    registry: &KeyRegistry,
    starting_point: &StartingPoint,
) -> bool {
    match registry.get(starting_point.digest()) {
        // A candidate that collides with the seed is still placed exactly once
        Some(key) => order.iter().filter(|k| *k == key).count() == 1,
        None => order
            .iter()
            .all(|key| key.digest() != *starting_point.digest()),
    }
}
