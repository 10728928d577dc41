use crate::state::EntityId;

/// General combat eligibility and visibility rules of the host.
pub trait CombatOracle: Send + Sync {
    /// Returns true if `attacker` may attack `target` under the host's rules.
    fn is_valid_attack_target(&self, attacker: EntityId, target: EntityId) -> bool;

    /// Returns true if nothing obstructs the view from `from` to `to`.
    fn has_line_of_sight(&self, from: EntityId, to: EntityId) -> bool;
}
