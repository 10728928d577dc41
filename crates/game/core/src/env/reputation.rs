use crate::state::{Candidate, EntityId, FactionId, ReputationRank};

/// Reputation lookups for player-owned casters.
pub trait ReputationOracle: Send + Sync {
    /// Resolves the reputation-bearing faction behind a candidate's faction
    /// template. `None` means the candidate carries no reputation association.
    fn faction_for_entity(&self, candidate: &Candidate) -> Option<FactionId>;

    /// Returns true if `player` is flagged at war with `faction`.
    fn is_at_war(&self, player: EntityId, faction: FactionId) -> bool;

    /// Returns the standing of `player` with `faction`.
    fn reputation_rank(&self, player: EntityId, faction: FactionId) -> ReputationRank;
}
