//! Entropy Sort
//!
//! Orders candidate keys by bucketing their digests on one fixed hex
//! character ([`PROBE_POSITION`]) and probing buckets in a sequence drawn from
//! the starting point:
//!
//! 1. **Primary phase**: the starting point's characters `0..PROBE_ROUNDS`.
//! 2. **Fallback phase**: every hex digit `0..f`, so that candidates whose
//!    probed character never appeared in step 1 are still placed.
//!
//! Inside a bucket, candidates sorted after the starting point come first,
//! then those sorted before it, each half ascending. A key is placed the
//! first time its bucket is probed; later matches are skipped. Probing stops
//! as soon as every registered key is placed, which does not change the
//! result.
//!
//! Cost: at most `PROBE_ROUNDS + 16` rotations of O(n) each.

use crate::algorithms::starting_point::build_starting_point;
use crate::domain::entities::{CandidateSet, ElectionOrder, KeyRegistry};
use crate::domain::errors::ElectionError;
use crate::domain::value_objects::{
    ParticipantKey, StartingPoint, HEX_ALPHABET, PROBE_POSITION, PROBE_ROUNDS,
};

/// Order `candidates` for the given shared secret and transaction.
///
/// Duplicate keys, and distinct keys with equal digests, collapse to one
/// entry (the last registered). An empty candidate set yields an empty order.
pub fn entropy_sort(
    shared_secret: &[u8],
    transaction_id: &[u8],
    candidates: &[ParticipantKey],
) -> Result<ElectionOrder, ElectionError> {
    let starting_point = build_starting_point(shared_secret, transaction_id)?;
    let registry = KeyRegistry::from_keys(candidates);
    Ok(rank_candidates(&starting_point, &registry))
}

/// Rank every registered key against `starting_point`.
pub fn rank_candidates(starting_point: &StartingPoint, registry: &KeyRegistry) -> ElectionOrder {
    let candidates = CandidateSet::new(starting_point, registry);
    let target = registry.len();
    let mut order = ElectionOrder::with_capacity(target);

    for probe in probe_sequence(starting_point) {
        if order.len() >= target {
            break;
        }
        fill_bucket(&mut order, &candidates, registry, probe);
    }

    order
}

/// Probe characters in order: starting point characters, then `0..f`.
pub fn probe_sequence(starting_point: &StartingPoint) -> impl Iterator<Item = u8> + '_ {
    (0..PROBE_ROUNDS)
        .map(move |round| starting_point.probe(round))
        .chain(HEX_ALPHABET.iter().copied())
}

/// Place every unplaced candidate whose probed character equals `probe`.
fn fill_bucket(
    order: &mut ElectionOrder,
    candidates: &CandidateSet,
    registry: &KeyRegistry,
    probe: u8,
) {
    for digest in candidates.rotation() {
        if digest.char_at(PROBE_POSITION) != probe {
            continue;
        }
        let Some(key) = registry.get(digest) else {
            continue;
        };
        order.push_if_absent(key);
    }
}
