use super::TargetMode;
use crate::env::{OracleError, WorldEnv};
use crate::state::{Candidate, CasterView, ReputationRank};

/// Resolves the target set of a channeled effect against the host world.
///
/// The resolver holds no state of its own; it may be shared freely and called
/// for different casters in any order.
pub struct TargetResolver<'a> {
    env: WorldEnv<'a>,
    hostile_threshold: ReputationRank,
}

impl<'a> TargetResolver<'a> {
    pub fn new(env: WorldEnv<'a>, hostile_threshold: ReputationRank) -> Self {
        Self {
            env,
            hostile_threshold,
        }
    }

    /// Returns the current targets of `caster` under `mode`.
    ///
    /// An empty set is a normal result (nothing selected, nothing in range,
    /// wrong classification). Each target appears exactly once; area and
    /// party results follow the spatial oracle's ordering.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` only when a required oracle is missing.
    pub fn resolve(
        &self,
        caster: &CasterView,
        mode: &TargetMode,
    ) -> Result<Vec<Candidate>, OracleError> {
        if mode.requires_player_caster() && !caster.is_player() {
            return Ok(Vec::new());
        }

        match *mode {
            TargetMode::SelfOnly => Ok(vec![caster.as_candidate()]),
            TargetMode::EnemySingle => self.resolve_selected(caster, |target| {
                self.is_enemy_in_los(caster, target)
            }),
            TargetMode::FriendlySingle => self.resolve_selected(caster, |target| {
                self.is_friendly_in_los(caster, target)
            }),
            TargetMode::Any => self.resolve_selected(caster, |target| {
                if target.id == caster.id {
                    return Ok(true);
                }
                Ok(self.is_enemy_in_los(caster, target)?
                    || self.is_friendly_in_los(caster, target)?)
            }),
            TargetMode::EnemyArea { radius } => self.resolve_enemy_area(caster, radius),
            TargetMode::FriendlyParty { radius } => self.resolve_friendly_party(caster, radius),
        }
    }

    /// Checks that every oracle `mode` may consult is present.
    ///
    /// Conservative: enemy modes demand reputation even though non-player
    /// casters never read it.
    ///
    /// # Errors
    ///
    /// Returns the `OracleError` of the first missing oracle.
    pub fn require_oracles(&self, mode: &TargetMode) -> Result<(), OracleError> {
        match mode {
            TargetMode::SelfOnly => {}
            TargetMode::FriendlySingle => {
                self.env.entities()?;
                self.env.combat()?;
            }
            TargetMode::EnemySingle | TargetMode::Any => {
                self.env.entities()?;
                self.env.combat()?;
                self.env.reputation()?;
            }
            TargetMode::EnemyArea { .. } => {
                self.env.spatial()?;
                self.env.combat()?;
                self.env.reputation()?;
            }
            TargetMode::FriendlyParty { .. } => {
                self.env.groups()?;
                self.env.spatial()?;
                self.env.combat()?;
            }
        }
        Ok(())
    }

    /// Enemy classification: live, visible, attackable, and hostile by
    /// reputation where reputation applies.
    ///
    /// A caster that cannot query reputation (not player-owned), or a
    /// candidate whose faction has no reputation association, falls back to
    /// the combat rule alone.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` only when a required oracle is missing.
    pub fn is_enemy_in_los(
        &self,
        caster: &CasterView,
        target: &Candidate,
    ) -> Result<bool, OracleError> {
        if !target.alive || target.id == caster.id {
            return Ok(false);
        }

        let combat = self.env.combat()?;
        if !combat.has_line_of_sight(caster.id, target.id)
            || !combat.is_valid_attack_target(caster.id, target.id)
        {
            return Ok(false);
        }

        if !caster.is_player() {
            return Ok(true);
        }

        let reputation = self.env.reputation()?;
        let Some(faction) = reputation.faction_for_entity(target) else {
            return Ok(true);
        };

        Ok(reputation.is_at_war(caster.id, faction)
            || reputation.reputation_rank(caster.id, faction) <= self.hostile_threshold)
    }

    /// Friendly classification: the caster itself, or a live visible
    /// candidate the caster is not allowed to attack.
    ///
    /// Reputation plays no part here; the combat rule alone decides.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` only when a required oracle is missing.
    pub fn is_friendly_in_los(
        &self,
        caster: &CasterView,
        target: &Candidate,
    ) -> Result<bool, OracleError> {
        if target.id == caster.id {
            return Ok(true);
        }
        if !target.alive {
            return Ok(false);
        }

        let combat = self.env.combat()?;
        Ok(combat.has_line_of_sight(caster.id, target.id)
            && !combat.is_valid_attack_target(caster.id, target.id))
    }

    fn resolve_selected<F>(
        &self,
        caster: &CasterView,
        accept: F,
    ) -> Result<Vec<Candidate>, OracleError>
    where
        F: Fn(&Candidate) -> Result<bool, OracleError>,
    {
        let Some(selected) = caster.selected else {
            return Ok(Vec::new());
        };

        let target = if selected == caster.id {
            caster.as_candidate()
        } else {
            match self.env.entities()?.candidate(selected) {
                Some(candidate) => candidate,
                None => return Ok(Vec::new()),
            }
        };

        if accept(&target)? {
            Ok(vec![target])
        } else {
            Ok(Vec::new())
        }
    }

    fn resolve_enemy_area(
        &self,
        caster: &CasterView,
        radius: f32,
    ) -> Result<Vec<Candidate>, OracleError> {
        let candidates = self
            .env
            .spatial()?
            .candidates_within(caster.position, radius);

        let mut targets = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if self.is_enemy_in_los(caster, &candidate)? {
                targets.push(candidate);
            }
        }
        Ok(targets)
    }

    fn resolve_friendly_party(
        &self,
        caster: &CasterView,
        radius: f32,
    ) -> Result<Vec<Candidate>, OracleError> {
        let mut targets = Vec::new();
        if caster.alive {
            targets.push(caster.as_candidate());
        }

        let groups = self.env.groups()?;
        if groups.group_of(caster.id).is_none() {
            return Ok(targets);
        }

        let combat = self.env.combat()?;
        let candidates = self
            .env
            .spatial()?
            .candidates_within(caster.position, radius);

        for candidate in candidates {
            if !candidate.is_player()
                || !candidate.alive
                || candidate.id == caster.id
                || !combat.has_line_of_sight(caster.id, candidate.id)
            {
                continue;
            }
            if groups.is_same_group_or_subgroup(caster.id, candidate.id) {
                targets.push(candidate);
            }
        }
        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::WorldSnapshot;
    use crate::state::{EntityId, EntityKind, FactionId, GroupId, Position};

    const BARD: EntityId = EntityId(1);
    const ORC: EntityId = EntityId(2);
    const GUARD: EntityId = EntityId(3);
    const ALLY: EntityId = EntityId(4);
    const STRANGER: EntityId = EntityId(5);

    const ORC_TEMPLATE: FactionId = FactionId(100);
    const ORC_REPUTATION: FactionId = FactionId(900);

    fn bard() -> CasterView {
        CasterView::player(BARD, Position::ORIGIN).with_level(30)
    }

    fn creature(id: EntityId, x: f32) -> Candidate {
        Candidate::new(id, Position::new(x, 0.0, 0.0), EntityKind::Creature)
    }

    fn player(id: EntityId, x: f32) -> Candidate {
        Candidate::new(id, Position::new(x, 0.0, 0.0), EntityKind::Player)
    }

    fn resolve(world: &WorldSnapshot, caster: &CasterView, mode: TargetMode) -> Vec<EntityId> {
        let resolver = TargetResolver::new(WorldEnv::from_world(world), ReputationRank::Hostile);
        resolver
            .resolve(caster, &mode)
            .unwrap()
            .into_iter()
            .map(|candidate| candidate.id)
            .collect()
    }

    #[test]
    fn self_mode_ignores_surroundings_and_liveness() {
        let mut caster = bard();
        caster.alive = false;
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0))
            .hostile_pair(BARD, ORC);

        assert_eq!(resolve(&world, &caster, TargetMode::SelfOnly), vec![BARD]);
    }

    #[test]
    fn self_mode_works_for_non_player_casters() {
        let caster = bard().with_kind(EntityKind::Creature);
        let world = WorldSnapshot::new().with_caster(caster);
        assert_eq!(resolve(&world, &caster, TargetMode::SelfOnly), vec![BARD]);
    }

    #[test]
    fn enemy_single_requires_a_selection() {
        let caster = bard();
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0))
            .hostile_pair(BARD, ORC);

        assert!(resolve(&world, &caster, TargetMode::EnemySingle).is_empty());
    }

    #[test]
    fn enemy_single_accepts_live_visible_enemy() {
        let caster = bard().selecting(ORC);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0))
            .hostile_pair(BARD, ORC);

        assert_eq!(resolve(&world, &caster, TargetMode::EnemySingle), vec![ORC]);
    }

    #[test]
    fn enemy_single_never_substitutes_a_dead_selection() {
        let caster = bard().selecting(ORC);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0).dead())
            .with_candidate(Candidate::new(
                GUARD,
                Position::new(2.0, 0.0, 0.0),
                EntityKind::Creature,
            ))
            .hostile_pair(BARD, ORC)
            .hostile_pair(BARD, GUARD);

        assert!(resolve(&world, &caster, TargetMode::EnemySingle).is_empty());
    }

    #[test]
    fn enemy_single_rejects_target_out_of_sight() {
        let caster = bard().selecting(ORC);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0))
            .hostile_pair(BARD, ORC)
            .block_sight(BARD, ORC);

        assert!(resolve(&world, &caster, TargetMode::EnemySingle).is_empty());
    }

    #[test]
    fn single_target_modes_require_player_caster() {
        let caster = bard().selecting(ORC).with_kind(EntityKind::Creature);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0))
            .hostile_pair(BARD, ORC);

        assert!(resolve(&world, &caster, TargetMode::EnemySingle).is_empty());
        assert!(resolve(&world, &caster, TargetMode::Any).is_empty());
    }

    #[test]
    fn reputation_decides_attackable_candidates_with_a_faction() {
        let caster = bard();
        let world = |rank: ReputationRank| {
            WorldSnapshot::new()
                .with_caster(caster)
                .with_candidate(creature(ORC, 3.0).with_faction(ORC_TEMPLATE))
                .hostile_pair(BARD, ORC)
                .map_reputation(ORC_TEMPLATE, ORC_REPUTATION)
                .rank(BARD, ORC_REPUTATION, rank)
        };
        let area = TargetMode::EnemyArea { radius: 10.0 };

        assert_eq!(resolve(&world(ReputationRank::Hated), &caster, area), vec![ORC]);
        assert_eq!(
            resolve(&world(ReputationRank::Hostile), &caster, area),
            vec![ORC]
        );
        assert!(resolve(&world(ReputationRank::Unfriendly), &caster, area).is_empty());
        assert!(resolve(&world(ReputationRank::Friendly), &caster, area).is_empty());
    }

    #[test]
    fn war_flag_overrides_reputation_rank() {
        let caster = bard();
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0).with_faction(ORC_TEMPLATE))
            .hostile_pair(BARD, ORC)
            .map_reputation(ORC_TEMPLATE, ORC_REPUTATION)
            .rank(BARD, ORC_REPUTATION, ReputationRank::Honored)
            .at_war(BARD, ORC_REPUTATION);

        assert_eq!(
            resolve(&world, &caster, TargetMode::EnemyArea { radius: 10.0 }),
            vec![ORC]
        );
    }

    #[test]
    fn threshold_is_configurable() {
        let caster = bard();
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0).with_faction(ORC_TEMPLATE))
            .hostile_pair(BARD, ORC)
            .map_reputation(ORC_TEMPLATE, ORC_REPUTATION)
            .rank(BARD, ORC_REPUTATION, ReputationRank::Unfriendly);
        let resolver =
            TargetResolver::new(WorldEnv::from_world(&world), ReputationRank::Unfriendly);

        let targets = resolver
            .resolve(&caster, &TargetMode::EnemyArea { radius: 10.0 })
            .unwrap();
        assert_eq!(targets.len(), 1);
    }

    #[test]
    fn non_player_caster_treats_attackable_as_enemy() {
        let caster = bard().with_kind(EntityKind::Creature);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0).with_faction(ORC_TEMPLATE))
            .hostile_pair(BARD, ORC)
            .map_reputation(ORC_TEMPLATE, ORC_REPUTATION)
            .rank(BARD, ORC_REPUTATION, ReputationRank::Exalted);

        assert_eq!(
            resolve(&world, &caster, TargetMode::EnemyArea { radius: 10.0 }),
            vec![ORC]
        );
    }

    #[test]
    fn enemy_area_filters_self_dead_hidden_friendly_and_far() {
        let caster = bard();
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0))
            .with_candidate(creature(GUARD, 4.0))
            .with_candidate(creature(EntityId(10), 5.0).dead())
            .with_candidate(creature(EntityId(11), 6.0))
            .with_candidate(creature(EntityId(12), 50.0))
            .hostile_pair(BARD, ORC)
            .hostile_pair(BARD, EntityId(10))
            .hostile_pair(BARD, EntityId(11))
            .hostile_pair(BARD, EntityId(12))
            .allow_attack(BARD, BARD)
            .block_sight(BARD, EntityId(11));

        assert_eq!(
            resolve(&world, &caster, TargetMode::EnemyArea { radius: 20.0 }),
            vec![ORC]
        );
    }

    #[test]
    fn friendly_single_accepts_non_attackable_and_self() {
        let caster = bard().selecting(GUARD);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(GUARD, 3.0));
        assert_eq!(
            resolve(&world, &caster, TargetMode::FriendlySingle),
            vec![GUARD]
        );

        let caster = bard().selecting(BARD);
        let world = WorldSnapshot::new().with_caster(caster);
        assert_eq!(
            resolve(&world, &caster, TargetMode::FriendlySingle),
            vec![BARD]
        );
    }

    #[test]
    fn friendly_single_ignores_reputation_for_attackable_targets() {
        let caster = bard().selecting(ORC);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(ORC, 3.0).with_faction(ORC_TEMPLATE))
            .hostile_pair(BARD, ORC)
            .map_reputation(ORC_TEMPLATE, ORC_REPUTATION)
            .rank(BARD, ORC_REPUTATION, ReputationRank::Exalted);

        assert!(resolve(&world, &caster, TargetMode::FriendlySingle).is_empty());
    }

    #[test]
    fn friendly_single_rejects_dead_or_hidden_targets() {
        let caster = bard().selecting(GUARD);
        let dead = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(GUARD, 3.0).dead());
        assert!(resolve(&dead, &caster, TargetMode::FriendlySingle).is_empty());

        let hidden = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(creature(GUARD, 3.0))
            .block_sight(BARD, GUARD);
        assert!(resolve(&hidden, &caster, TargetMode::FriendlySingle).is_empty());
    }

    #[test]
    fn any_mode_accepts_self_enemy_or_friend() {
        let world = WorldSnapshot::new()
            .with_caster(bard())
            .with_candidate(creature(ORC, 3.0))
            .with_candidate(creature(GUARD, 3.0))
            .with_candidate(creature(STRANGER, 3.0).dead())
            .hostile_pair(BARD, ORC);

        assert_eq!(resolve(&world, &bard().selecting(BARD), TargetMode::Any), vec![BARD]);
        assert_eq!(resolve(&world, &bard().selecting(ORC), TargetMode::Any), vec![ORC]);
        assert_eq!(resolve(&world, &bard().selecting(GUARD), TargetMode::Any), vec![GUARD]);
        assert!(resolve(&world, &bard().selecting(STRANGER), TargetMode::Any).is_empty());
        assert!(resolve(&world, &bard(), TargetMode::Any).is_empty());
    }

    #[test]
    fn party_without_group_is_caster_alone() {
        let caster = bard();
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(player(ALLY, 3.0));

        for radius in [0.0, 10.0, 1000.0] {
            assert_eq!(
                resolve(&world, &caster, TargetMode::FriendlyParty { radius }),
                vec![BARD]
            );
        }
    }

    #[test]
    fn party_without_group_and_dead_caster_is_empty() {
        let mut caster = bard();
        caster.alive = false;
        let world = WorldSnapshot::new().with_caster(caster);

        for radius in [0.0, 10.0, 1000.0] {
            assert!(resolve(&world, &caster, TargetMode::FriendlyParty { radius }).is_empty());
        }
    }

    #[test]
    fn party_collects_visible_live_members_in_range() {
        let caster = bard();
        let party = GroupId(7);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(player(ALLY, 3.0))
            .with_candidate(player(EntityId(20), 4.0).dead())
            .with_candidate(player(EntityId(21), 5.0))
            .with_candidate(player(EntityId(22), 80.0))
            .with_candidate(player(STRANGER, 3.0))
            .with_candidate(creature(EntityId(23), 3.0))
            .join_group(BARD, party)
            .join_group(ALLY, party)
            .join_group(EntityId(20), party)
            .join_group(EntityId(21), party)
            .join_group(EntityId(22), party)
            .join_group(EntityId(23), party)
            .join_group(STRANGER, GroupId(8))
            .block_sight(BARD, EntityId(21));

        assert_eq!(
            resolve(&world, &caster, TargetMode::FriendlyParty { radius: 30.0 }),
            vec![BARD, ALLY]
        );
    }

    #[test]
    fn party_with_dead_caster_still_reaches_members() {
        let mut caster = bard();
        caster.alive = false;
        let party = GroupId(7);
        let world = WorldSnapshot::new()
            .with_caster(caster)
            .with_candidate(player(ALLY, 3.0))
            .join_group(BARD, party)
            .join_group(ALLY, party);

        assert_eq!(
            resolve(&world, &caster, TargetMode::FriendlyParty { radius: 30.0 }),
            vec![ALLY]
        );
    }

    #[test]
    fn missing_oracle_is_reported() {
        let resolver = TargetResolver::new(WorldEnv::empty(), ReputationRank::Hostile);
        let err = resolver
            .resolve(&bard(), &TargetMode::EnemyArea { radius: 5.0 })
            .unwrap_err();
        assert_eq!(err, OracleError::SpatialNotAvailable);
    }

    #[test]
    fn required_oracles_follow_the_mode() {
        let resolver = TargetResolver::new(WorldEnv::empty(), ReputationRank::Hostile);
        assert!(resolver.require_oracles(&TargetMode::SelfOnly).is_ok());
        assert_eq!(
            resolver.require_oracles(&TargetMode::FriendlyParty { radius: 5.0 }),
            Err(OracleError::GroupsNotAvailable)
        );

        let world = WorldSnapshot::new();
        let resolver = TargetResolver::new(WorldEnv::from_world(&world), ReputationRank::Hostile);
        for mode in [
            TargetMode::EnemySingle,
            TargetMode::FriendlySingle,
            TargetMode::Any,
            TargetMode::EnemyArea { radius: 5.0 },
            TargetMode::FriendlyParty { radius: 5.0 },
        ] {
            assert!(resolver.require_oracles(&mode).is_ok());
        }
    }
}
