use super::{ChanneledInstance, EffectSink, EndReason, TriggerApplication};
use crate::definition::{DefinitionTable, ReapplyPolicy, focus_boost_percent};
use crate::env::{OracleError, WorldEnv};
use crate::state::{EffectId, EntityId, ReputationRank};
use crate::targeting::TargetResolver;

/// Result of one resolve-and-trigger cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The trigger action was applied to every listed target. The list may
    /// be empty.
    Triggered {
        targets: Vec<EntityId>,
        boost_percent: u32,
    },
    /// No definition exists for the instance's effect. Nothing happened.
    MissingDefinition,
    /// The caster could not be resolved; the instance was ended.
    CasterLost,
    /// The instance had already ended. Nothing happened.
    Inactive,
}

impl CycleOutcome {
    /// Number of targets the action was applied to.
    pub fn target_count(&self) -> usize {
        match self {
            Self::Triggered { targets, .. } => targets.len(),
            _ => 0,
        }
    }
}

/// Runs the resolve-and-trigger cycle of channeled instances.
///
/// Borrowed per call from the owning context; it keeps no state between
/// cycles.
pub struct PeriodicDispatcher<'a> {
    env: WorldEnv<'a>,
    definitions: &'a DefinitionTable,
    hostile_threshold: ReputationRank,
}

impl<'a> PeriodicDispatcher<'a> {
    pub fn new(
        env: WorldEnv<'a>,
        definitions: &'a DefinitionTable,
        hostile_threshold: ReputationRank,
    ) -> Self {
        Self {
            env,
            definitions,
            hostile_threshold,
        }
    }

    /// Apply-time tick: moves the instance to `Active` and runs one cycle.
    ///
    /// An instance that is already active (a refreshed effect) just runs the
    /// cycle again.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` only when a required oracle is missing.
    pub fn begin(
        &self,
        instance: &mut ChanneledInstance,
        sink: &mut dyn EffectSink,
    ) -> Result<CycleOutcome, OracleError> {
        self.ensure_oracles(instance.effect)?;
        instance.activate();
        self.run_cycle(instance, sink)
    }

    /// Checks that a cycle of `effect` cannot fail on a missing oracle.
    ///
    /// Effects without a definition need nothing.
    ///
    /// # Errors
    ///
    /// Returns the `OracleError` of the first missing oracle.
    pub fn ensure_oracles(&self, effect: EffectId) -> Result<(), OracleError> {
        let Some(definition) = self.definitions.get(effect) else {
            return Ok(());
        };
        self.env.entities()?;
        TargetResolver::new(self.env, self.hostile_threshold).require_oracles(&definition.mode)
    }

    /// Periodic tick: resolves the current targets and applies the trigger
    /// action to each of them.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` only when a required oracle is missing.
    pub fn run_cycle(
        &self,
        instance: &mut ChanneledInstance,
        sink: &mut dyn EffectSink,
    ) -> Result<CycleOutcome, OracleError> {
        if instance.is_ended() {
            return Ok(CycleOutcome::Inactive);
        }

        let Some(definition) = self.definitions.get(instance.effect) else {
            return Ok(CycleOutcome::MissingDefinition);
        };

        let entities = self.env.entities()?;
        let Some(caster) = entities.caster(instance.caster) else {
            instance.end();
            sink.end_effect_instance(instance, EndReason::CasterLost);
            return Ok(CycleOutcome::CasterLost);
        };

        // Dead casters keep their instance but reach nobody in player modes.
        let targets = if !caster.alive && definition.mode.requires_player_caster() {
            Vec::new()
        } else {
            TargetResolver::new(self.env, self.hostile_threshold)
                .resolve(&caster, &definition.mode)?
        };

        let boost_percent = match definition.focus {
            Some(family) => focus_boost_percent(family, &entities.focus_auras(caster.id)),
            None => 0,
        };

        let mut applied = Vec::with_capacity(targets.len());
        for target in targets {
            if definition.reapply == ReapplyPolicy::ClearThenApply {
                sink.remove_trigger_action(definition.trigger_action, caster.id, target.id);
            }
            sink.apply_trigger_action(&TriggerApplication {
                action: definition.trigger_action,
                caster: caster.id,
                target: target.id,
                boost_percent,
            });
            applied.push(target.id);
        }

        Ok(CycleOutcome::Triggered {
            targets: applied,
            boost_percent,
        })
    }
}
