use crate::state::{EntityId, GroupId};

/// Party membership of players.
pub trait GroupOracle: Send + Sync {
    /// Returns the party `player` belongs to, if any.
    fn group_of(&self, player: EntityId) -> Option<GroupId>;

    /// Returns true if both players share a party or a sub-group.
    fn is_same_group_or_subgroup(&self, a: EntityId, b: EntityId) -> bool;
}
