//! Core entities for Entropy Election
//!
//! All entities are built fresh for one ordering request and dropped after it.

use super::value_objects::{HexDigest, ParticipantKey, StartingPoint};
use std::collections::{BTreeMap, HashSet};

/// Digest → key mapping for one request.
///
/// Insertion overwrites: when two keys share a digest, the one registered
/// last wins.
#[derive(Clone, Debug, Default)]
pub struct KeyRegistry {
    entries: BTreeMap<HexDigest, ParticipantKey>,
}

impl KeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from candidate keys in input order.
    pub fn from_keys<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a ParticipantKey>,
    {
        let mut registry = Self::new();
        for key in keys {
            registry.register(key.clone());
        }
        registry
    }

    /// Hash and insert a key. Returns the key it displaced, if any.
    pub fn register(&mut self, key: ParticipantKey) -> Option<ParticipantKey> {
        let digest = key.digest();
        self.insert_digest(digest, key)
    }

    /// Insert a key under an explicit digest. Returns the displaced key.
    pub fn insert_digest(
        &mut self,
        digest: HexDigest,
        key: ParticipantKey,
    ) -> Option<ParticipantKey> {
        self.entries.insert(digest, key)
    }

    pub fn get(&self, digest: &HexDigest) -> Option<&ParticipantKey> {
        self.entries.get(digest)
    }

    /// Number of distinct digests.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digests in ascending order.
    pub fn digests(&self) -> impl Iterator<Item = &HexDigest> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HexDigest, &ParticipantKey)> {
        self.entries.iter()
    }
}

/// Sorted candidate digests with the starting point inserted.
#[derive(Clone, Debug)]
pub struct CandidateSet {
    digests: Vec<HexDigest>,
    start_index: usize,
}

impl CandidateSet {
    /// Sort the registry digests together with the starting point.
    ///
    /// If a candidate digest equals the starting point, the starting point
    /// takes the first of the equal positions.
    pub fn new(starting_point: &StartingPoint, registry: &KeyRegistry) -> Self {
        let mut digests: Vec<HexDigest> = Vec::with_capacity(registry.len() + 1);
        digests.extend(registry.digests().cloned());

        let anchor = starting_point.digest();
        let start_index = digests.partition_point(|d| d < anchor);
        digests.insert(start_index, anchor.clone());

        Self {
            digests,
            start_index,
        }
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Total entries, starting point included.
    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    /// Entries sorted after the starting point, ascending.
    pub fn after_start(&self) -> &[HexDigest] {
        &self.digests[self.start_index + 1..]
    }

    /// Entries sorted before the starting point, ascending.
    pub fn before_start(&self) -> &[HexDigest] {
        &self.digests[..self.start_index]
    }

    /// Scan order for one bucket: after the starting point, then before it.
    pub fn rotation(&self) -> impl Iterator<Item = &HexDigest> {
        self.after_start().iter().chain(self.before_start())
    }
}

/// The elected order. Each key appears at most once, in first-insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElectionOrder {
    keys: Vec<ParticipantKey>,
    members: HashSet<ParticipantKey>,
}

impl ElectionOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Append `key` unless an equal key is already placed.
    pub fn push_if_absent(&mut self, key: &ParticipantKey) -> bool {
        if self.members.contains(key) {
            return false;
        }
        self.members.insert(key.clone());
        self.keys.push(key.clone());
        true
    }

    pub fn contains(&self, key: &ParticipantKey) -> bool {
        self.members.contains(key)
    }

    /// First-ranked key.
    pub fn leader(&self) -> Option<&ParticipantKey> {
        self.keys.first()
    }

    /// Rank of `key`, zero-based.
    pub fn position(&self, key: &ParticipantKey) -> Option<usize> {
        if !self.contains(key) {
            return None;
        }
        self.keys.iter().position(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParticipantKey> {
        self.keys.iter()
    }

    pub fn as_slice(&self) -> &[ParticipantKey] {
        &self.keys
    }

    pub fn into_keys(self) -> Vec<ParticipantKey> {
        self.keys
    }
}

impl<'a> IntoIterator for &'a ElectionOrder {
    type Item = &'a ParticipantKey;
    type IntoIter = std::slice::Iter<'a, ParticipantKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
