//! Scheduler context for channeled effects.
//!
//! The [`ChannelEngine`] owns the definition table, the configuration, the
//! per-caster slot queues and the live instance records. Hosts keep one
//! engine and call into it from their effect and caster callbacks; every call
//! receives the world oracles and the effect sink by reference and completes
//! synchronously.

use std::collections::HashMap;

use crate::config::ChorusConfig;
use crate::definition::DefinitionTable;
use crate::dispatch::{ChanneledInstance, CycleOutcome, EffectSink, EndReason, PeriodicDispatcher};
use crate::env::{OracleError, WorldEnv};
use crate::slots::{Admission, SlotManager};
use crate::state::{EffectId, EntityId, InstanceId};

/// Outcome of starting (or restarting) an effect on a caster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartReport {
    /// The instance after its apply-time cycle.
    pub instance: ChanneledInstance,
    pub admission: Admission,
    pub cycle: CycleOutcome,
}

/// Owns all scheduling state for channeled effects.
#[derive(Debug)]
pub struct ChannelEngine {
    config: ChorusConfig,
    definitions: DefinitionTable,
    slots: SlotManager,
    instances: HashMap<(EntityId, EffectId), ChanneledInstance>,
    next_instance: u64,
}

impl ChannelEngine {
    pub fn new(config: ChorusConfig, definitions: DefinitionTable) -> Self {
        let slots = SlotManager::new(config.slot_capacity());
        Self {
            config,
            definitions,
            slots,
            instances: HashMap::new(),
            next_instance: 1,
        }
    }

    pub fn config(&self) -> &ChorusConfig {
        &self.config
    }

    pub fn definitions(&self) -> &DefinitionTable {
        &self.definitions
    }

    pub fn slots(&self) -> &SlotManager {
        &self.slots
    }

    /// Returns true if `effect` is scheduled by this engine.
    pub fn is_governed(&self, effect: EffectId) -> bool {
        self.definitions.contains(effect)
    }

    pub fn instance(&self, caster: EntityId, effect: EffectId) -> Option<&ChanneledInstance> {
        self.instances.get(&(caster, effect))
    }

    /// Active effects of `caster`, oldest first.
    pub fn active_effects(&self, caster: EntityId) -> Vec<EffectId> {
        self.slots.active_effects(caster)
    }

    /// Handles an effect being applied to `caster`.
    ///
    /// Effects without a definition are not scheduled: nothing is recorded
    /// and `None` is returned. Otherwise the effect is admitted to the
    /// caster's slot queue; anything evicted to make room is ended through
    /// `sink` before the new instance runs its apply-time cycle. Restarting
    /// an effect that is already active keeps its instance, refreshes its
    /// slot position and runs the cycle again.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` when an oracle the effect needs is missing. The
    /// check happens before any state changes.
    pub fn effect_started(
        &mut self,
        env: WorldEnv<'_>,
        caster: EntityId,
        effect: EffectId,
        sink: &mut dyn EffectSink,
    ) -> Result<Option<StartReport>, OracleError> {
        if !self.is_governed(effect) {
            return Ok(None);
        }
        self.dispatcher(env).ensure_oracles(effect)?;

        let admission = self.slots.on_effect_started(caster, effect);
        for &evicted in &admission.evicted {
            self.end_evicted(caster, evicted, sink);
        }

        let (cycle, instance) = self.run_instance(env, caster, effect, sink, true)?;

        Ok(Some(StartReport {
            instance,
            admission,
            cycle,
        }))
    }

    /// Runs one periodic cycle for the instance of `effect` on `caster`.
    ///
    /// Ticks for unknown or ended instances are ignored.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` only when a required oracle is missing.
    pub fn tick(
        &mut self,
        env: WorldEnv<'_>,
        caster: EntityId,
        effect: EffectId,
        sink: &mut dyn EffectSink,
    ) -> Result<CycleOutcome, OracleError> {
        if !self.instances.contains_key(&(caster, effect)) {
            return Ok(CycleOutcome::Inactive);
        }
        let (outcome, _) = self.run_instance(env, caster, effect, sink, false)?;
        Ok(outcome)
    }

    /// Handles the host reporting that an effect ended on its own (expiry,
    /// dispel, or a removal this engine requested earlier).
    ///
    /// Idempotent: returns the ended instance the first time, `None` after.
    pub fn effect_ended(
        &mut self,
        caster: EntityId,
        effect: EffectId,
    ) -> Option<ChanneledInstance> {
        self.slots.on_effect_ended(caster, effect);
        let mut instance = self.instances.remove(&(caster, effect))?;
        instance.end();
        Some(instance)
    }

    /// Cancels a running effect and asks the host to end it.
    ///
    /// Returns false if the effect was not running.
    pub fn cancel(
        &mut self,
        caster: EntityId,
        effect: EffectId,
        sink: &mut dyn EffectSink,
    ) -> bool {
        match self.effect_ended(caster, effect) {
            Some(instance) => {
                sink.end_effect_instance(&instance, EndReason::Cancelled);
                true
            }
            None => false,
        }
    }

    /// Forgets everything about `caster` without ending its effects; the host
    /// cleans those up itself on logout or despawn.
    ///
    /// Returns the number of slot entries dropped.
    pub fn caster_departed(&mut self, caster: EntityId) -> usize {
        self.instances.retain(|(owner, _), _| *owner != caster);
        self.slots.on_caster_departed(caster)
    }

    /// Rebuilds a caster's state from the effects the host reports as
    /// already running, oldest first.
    ///
    /// Effects without a definition are skipped. Restored instances start
    /// out active without an apply-time cycle; the host's next tick drives
    /// them. Effects that do not fit the capacity are ended through `sink`
    /// and returned.
    pub fn rehydrate(
        &mut self,
        caster: EntityId,
        effects: &[EffectId],
        sink: &mut dyn EffectSink,
    ) -> Vec<EffectId> {
        self.instances.retain(|(owner, _), _| *owner != caster);
        let governed = effects
            .iter()
            .copied()
            .filter(|&effect| self.definitions.contains(effect));
        let evicted = self.slots.rehydrate(caster, governed);

        for effect in self.slots.active_effects(caster) {
            let id = self.allocate_instance_id();
            self.instances.insert(
                (caster, effect),
                ChanneledInstance::restored(id, caster, effect),
            );
        }
        for &effect in &evicted {
            self.end_evicted(caster, effect, sink);
        }
        evicted
    }

    /// Level-scaled maximum duration of `effect` for `caster`.
    ///
    /// `None` when the effect has no scaling, the scaling defers to the host,
    /// or the caster cannot be resolved.
    ///
    /// # Errors
    ///
    /// Returns `OracleError` only when a required oracle is missing.
    pub fn max_duration_ms(
        &self,
        env: WorldEnv<'_>,
        caster: EntityId,
        effect: EffectId,
    ) -> Result<Option<u32>, OracleError> {
        let Some(scaling) = self.definitions.get(effect).and_then(|d| d.duration) else {
            return Ok(None);
        };
        Ok(env
            .entities()?
            .caster(caster)
            .and_then(|view| scaling.max_duration_ms(view.level)))
    }

    /// Runs a cycle on the instance of `effect`, creating it if needed, and
    /// returns the instance as it stands afterwards.
    fn run_instance(
        &mut self,
        env: WorldEnv<'_>,
        caster: EntityId,
        effect: EffectId,
        sink: &mut dyn EffectSink,
        begin: bool,
    ) -> Result<(CycleOutcome, ChanneledInstance), OracleError> {
        let key = (caster, effect);
        let next_instance = &mut self.next_instance;
        let instance = self.instances.entry(key).or_insert_with(|| {
            let id = InstanceId(*next_instance);
            *next_instance += 1;
            ChanneledInstance::new(id, caster, effect)
        });

        let dispatcher = PeriodicDispatcher::new(
            env,
            &self.definitions,
            self.config.hostile_rank_threshold,
        );
        let outcome = if begin {
            dispatcher.begin(instance, sink)?
        } else {
            dispatcher.run_cycle(instance, sink)?
        };

        let snapshot = *instance;

        if outcome == CycleOutcome::CasterLost {
            self.instances.remove(&key);
            self.slots.on_effect_ended(caster, effect);
        }
        Ok((outcome, snapshot))
    }

    fn dispatcher<'a>(&'a self, env: WorldEnv<'a>) -> PeriodicDispatcher<'a> {
        PeriodicDispatcher::new(env, &self.definitions, self.config.hostile_rank_threshold)
    }

    fn end_evicted(&mut self, caster: EntityId, effect: EffectId, sink: &mut dyn EffectSink) {
        let mut instance = match self.instances.remove(&(caster, effect)) {
            Some(instance) => instance,
            None => {
                let id = self.allocate_instance_id();
                ChanneledInstance::restored(id, caster, effect)
            }
        };
        if instance.end() {
            sink.end_effect_instance(&instance, EndReason::Evicted);
        }
    }

    fn allocate_instance_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }
}
