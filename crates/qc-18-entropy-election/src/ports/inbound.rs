//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::ElectionOrder;
use crate::domain::errors::ElectionError;
use crate::domain::value_objects::{ParticipantKey, StartingPoint};

/// Primary Entropy Election API
///
/// All operations are pure: identical inputs give identical outputs on every
/// participant, and calls on different inputs need no coordination.
pub trait EntropyElectionApi: Send + Sync {
    /// Order candidate keys for one transaction.
    ///
    /// This is the main entry point. It:
    /// 1. Derives the starting point from the shared secret
    /// 2. Registers candidate digests
    /// 3. Ranks candidates by the entropy sort
    fn order_candidates(
        &self,
        shared_secret: &[u8],
        transaction_id: &[u8],
        candidates: &[ParticipantKey],
    ) -> Result<ElectionOrder, ElectionError>;

    /// The first-ranked candidate, or `None` for an empty candidate set.
    fn elect_leader(
        &self,
        shared_secret: &[u8],
        transaction_id: &[u8],
        candidates: &[ParticipantKey],
    ) -> Result<Option<ParticipantKey>, ElectionError> {
        let order = self.order_candidates(shared_secret, transaction_id, candidates)?;
        Ok(order.into_keys().into_iter().next())
    }

    /// Seed that anchors the ordering for this transaction.
    fn starting_point(
        &self,
        shared_secret: &[u8],
        transaction_id: &[u8],
    ) -> Result<StartingPoint, ElectionError>;
}
