//! In-memory world implementing every oracle.
//!
//! `WorldSnapshot` captures the host state a resolution needs: entity views,
//! sight blockers, attack eligibility, reputation tables, parties and focus
//! auras. Hosts can build one per tick from their own state; tests use it as
//! a fixture.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{CombatOracle, EntityOracle, GroupOracle, ReputationOracle, SpatialOracle};
use crate::definition::FocusAura;
use crate::state::{
    Candidate, CasterView, EntityId, FactionId, GroupId, Position, ReputationRank,
};

/// Snapshot of host world state backing all oracle traits.
///
/// Entities are kept in id order so spatial queries are stable. Attack
/// eligibility is opt-in: two entities may only fight once
/// [`allow_attack`](Self::allow_attack) or [`hostile_pair`](Self::hostile_pair)
/// was called for them. Sight is open unless [`block_sight`](Self::block_sight)
/// was called.
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshot {
    casters: HashMap<EntityId, CasterView>,
    entities: BTreeMap<EntityId, Candidate>,
    attackable: HashSet<(EntityId, EntityId)>,
    blocked_sight: HashSet<(EntityId, EntityId)>,
    reputation_factions: HashMap<FactionId, FactionId>,
    at_war: HashSet<(EntityId, FactionId)>,
    ranks: HashMap<(EntityId, FactionId), ReputationRank>,
    groups: HashMap<EntityId, GroupId>,
    focus_auras: HashMap<EntityId, Vec<FocusAura>>,
}

impl WorldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a caster. Casters are also visible as candidates.
    pub fn with_caster(mut self, caster: CasterView) -> Self {
        self.insert_caster(caster);
        self
    }

    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.entities.insert(candidate.id, candidate);
        self
    }

    pub fn insert_caster(&mut self, caster: CasterView) {
        self.entities.insert(caster.id, caster.as_candidate());
        self.casters.insert(caster.id, caster);
    }

    /// Removes an entity entirely, as on logout or despawn.
    pub fn remove(&mut self, id: EntityId) {
        self.casters.remove(&id);
        self.entities.remove(&id);
    }

    /// Marks an entity dead in both its caster and candidate views.
    pub fn kill(&mut self, id: EntityId) {
        if let Some(caster) = self.casters.get_mut(&id) {
            caster.alive = false;
        }
        if let Some(candidate) = self.entities.get_mut(&id) {
            candidate.alive = false;
        }
    }

    pub fn move_to(&mut self, id: EntityId, position: Position) {
        if let Some(caster) = self.casters.get_mut(&id) {
            caster.position = position;
        }
        if let Some(candidate) = self.entities.get_mut(&id) {
            candidate.position = position;
        }
    }

    pub fn select(&mut self, caster: EntityId, target: Option<EntityId>) {
        if let Some(view) = self.casters.get_mut(&caster) {
            view.selected = target;
        }
    }

    /// Allows `attacker` to attack `target` (one direction).
    pub fn allow_attack(mut self, attacker: EntityId, target: EntityId) -> Self {
        self.attackable.insert((attacker, target));
        self
    }

    /// Allows both entities to attack each other.
    pub fn hostile_pair(self, a: EntityId, b: EntityId) -> Self {
        self.allow_attack(a, b).allow_attack(b, a)
    }

    /// Blocks sight between two entities in both directions.
    pub fn block_sight(mut self, a: EntityId, b: EntityId) -> Self {
        self.blocked_sight.insert((a, b));
        self.blocked_sight.insert((b, a));
        self
    }

    /// Associates a faction template with a reputation-bearing faction.
    pub fn map_reputation(mut self, template: FactionId, faction: FactionId) -> Self {
        self.reputation_factions.insert(template, faction);
        self
    }

    pub fn at_war(mut self, player: EntityId, faction: FactionId) -> Self {
        self.at_war.insert((player, faction));
        self
    }

    pub fn rank(mut self, player: EntityId, faction: FactionId, rank: ReputationRank) -> Self {
        self.ranks.insert((player, faction), rank);
        self
    }

    pub fn join_group(mut self, player: EntityId, group: GroupId) -> Self {
        self.groups.insert(player, group);
        self
    }

    pub fn with_focus_aura(mut self, caster: EntityId, aura: FocusAura) -> Self {
        self.focus_auras.entry(caster).or_default().push(aura);
        self
    }
}

impl SpatialOracle for WorldSnapshot {
    fn candidates_within(&self, center: Position, radius: f32) -> Vec<Candidate> {
        self.entities
            .values()
            .filter(|candidate| center.is_within(&candidate.position, radius))
            .copied()
            .collect()
    }
}

impl CombatOracle for WorldSnapshot {
    fn is_valid_attack_target(&self, attacker: EntityId, target: EntityId) -> bool {
        self.attackable.contains(&(attacker, target))
    }

    fn has_line_of_sight(&self, from: EntityId, to: EntityId) -> bool {
        !self.blocked_sight.contains(&(from, to))
    }
}

impl ReputationOracle for WorldSnapshot {
    fn faction_for_entity(&self, candidate: &Candidate) -> Option<FactionId> {
        self.reputation_factions.get(&candidate.faction).copied()
    }

    fn is_at_war(&self, player: EntityId, faction: FactionId) -> bool {
        self.at_war.contains(&(player, faction))
    }

    fn reputation_rank(&self, player: EntityId, faction: FactionId) -> ReputationRank {
        self.ranks
            .get(&(player, faction))
            .copied()
            .unwrap_or_default()
    }
}

impl GroupOracle for WorldSnapshot {
    fn group_of(&self, player: EntityId) -> Option<GroupId> {
        self.groups.get(&player).copied()
    }

    fn is_same_group_or_subgroup(&self, a: EntityId, b: EntityId) -> bool {
        match (self.groups.get(&a), self.groups.get(&b)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

impl EntityOracle for WorldSnapshot {
    fn caster(&self, id: EntityId) -> Option<CasterView> {
        self.casters.get(&id).copied()
    }

    fn candidate(&self, id: EntityId) -> Option<Candidate> {
        self.entities.get(&id).copied()
    }

    fn focus_auras(&self, caster: EntityId) -> Vec<FocusAura> {
        self.focus_auras.get(&caster).cloned().unwrap_or_default()
    }
}
