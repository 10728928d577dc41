//! High-level runtime orchestrator.
//!
//! The runtime owns the scheduling engine, the host services and the event
//! bus, and exposes a builder-based API for hosts to drive the scheduler
//! from their callbacks.

use tokio::sync::broadcast;

use chorus_core::{
    ChannelEngine, ChorusConfig, DefinitionTable, EffectId, EffectSink, EntityId, WorldEnv,
};

use crate::api::{HostEvent, Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::oracle::ServiceManager;

/// Runtime configuration shared across the orchestrator and handlers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub chorus: ChorusConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            chorus: ChorusConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// Main runtime that schedules channeled effects for a host.
///
/// Every call runs synchronously to completion. Side effects on the host
/// world go through the [`EffectSink`] passed to each call.
pub struct Runtime {
    pub(crate) engine: ChannelEngine,
    pub(crate) services: ServiceManager,
    pub(crate) events: EventBus,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &ChorusConfig {
        self.engine.config()
    }

    pub fn engine(&self) -> &ChannelEngine {
        &self.engine
    }

    /// Get a cloneable handle to the event bus
    pub fn events(&self) -> EventBus {
        self.events.clone()
    }

    /// Subscribe to runtime events on one topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Handles a host event against the configured services.
    pub fn handle(&mut self, event: HostEvent, sink: &mut dyn EffectSink) -> Result<()> {
        let services = self.services.clone();
        self.handle_in(services.as_world_env(), event, sink)
    }

    /// Handles a host event against an explicit world view.
    ///
    /// Hosts that rebuild a world snapshot per tick pass it here instead of
    /// going through the configured services.
    pub fn handle_in(
        &mut self,
        env: WorldEnv<'_>,
        event: HostEvent,
        sink: &mut dyn EffectSink,
    ) -> Result<()> {
        if !self.engine.config().enabled {
            tracing::debug!(caster = %event.caster(), "Scheduler disabled, ignoring {:?}", event);
            return Ok(());
        }

        match event {
            HostEvent::EffectApplied { caster, effect } => {
                self.on_effect_applied(env, caster, effect, sink)
            }
            HostEvent::PeriodicTick { caster, effect } => {
                self.on_periodic_tick(env, caster, effect, sink)
            }
            HostEvent::EffectRemoved {
                caster,
                effect,
                reason,
            } => {
                self.on_effect_removed(caster, effect, reason);
                Ok(())
            }
            HostEvent::CasterConnected {
                caster,
                active_effects,
            } => {
                self.on_caster_connected(caster, &active_effects, sink);
                Ok(())
            }
            HostEvent::CasterDeparted { caster } => {
                self.on_caster_departed(caster);
                Ok(())
            }
        }
    }

    /// Cancels a running effect on behalf of the caster or a game rule.
    ///
    /// Returns false if the effect was not running.
    pub fn cancel(&mut self, caster: EntityId, effect: EffectId, sink: &mut dyn EffectSink) -> bool {
        self.cancel_effect(caster, effect, sink)
    }

    /// Level-scaled maximum duration of `effect` for `caster`, if the
    /// definition overrides the host's own duration.
    pub fn max_duration_ms(&self, caster: EntityId, effect: EffectId) -> Result<Option<u32>> {
        let duration = self
            .engine
            .max_duration_ms(self.services.as_world_env(), caster, effect)?;
        Ok(duration)
    }

    /// Active effects of `caster`, oldest first.
    pub fn active_effects(&self, caster: EntityId) -> Vec<EffectId> {
        self.engine.active_effects(caster)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    definitions: Option<DefinitionTable>,
    services: Option<ServiceManager>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            definitions: None,
            services: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override scheduler configuration only
    pub fn chorus_config(mut self, chorus: ChorusConfig) -> Self {
        self.config.chorus = chorus;
        self
    }

    /// Set required effect definitions
    pub fn definitions(mut self, definitions: DefinitionTable) -> Self {
        self.definitions = Some(definitions);
        self
    }

    /// Set required host services
    pub fn services(mut self, services: ServiceManager) -> Self {
        self.services = Some(services);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let services = self.services.ok_or(RuntimeError::MissingServices)?;
        let definitions = self.definitions.ok_or(RuntimeError::MissingDefinitions)?;
        if self.config.event_buffer_size == 0 {
            return Err(RuntimeError::InvalidEventBuffer);
        }

        tracing::info!(
            enabled = self.config.chorus.enabled,
            max_concurrent_slots = self.config.chorus.max_concurrent_slots,
            hostile_rank_threshold = %self.config.chorus.hostile_rank_threshold,
            definitions = definitions.len(),
            "Channel runtime ready"
        );

        Ok(Runtime {
            engine: ChannelEngine::new(self.config.chorus, definitions),
            services,
            events: EventBus::with_capacity(self.config.event_buffer_size),
        })
    }
}
