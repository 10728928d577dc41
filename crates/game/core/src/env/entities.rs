use crate::definition::FocusAura;
use crate::state::{Candidate, CasterView, EntityId};

/// Lookup of live host entities by identity.
pub trait EntityOracle: Send + Sync {
    /// Returns the caster view, or `None` once the caster is no longer
    /// resolvable (logged out, despawned, removed from the map).
    fn caster(&self, id: EntityId) -> Option<CasterView>;

    /// Returns a candidate view of any entity.
    fn candidate(&self, id: EntityId) -> Option<Candidate>;

    /// Returns the instrument focus auras currently held by `caster`.
    fn focus_auras(&self, caster: EntityId) -> Vec<FocusAura> {
        let _ = caster;
        Vec::new()
    }
}
