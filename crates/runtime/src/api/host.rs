//! Host callbacks delivered to the runtime.

use serde::{Deserialize, Serialize};

use chorus_core::{EffectId, EndReason, EntityId};

/// Discrete notification from the host simulation.
///
/// Events for one caster must be delivered in the order they happened. There
/// is no ordering requirement across casters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// An effect was applied to (or reapplied on) its caster.
    EffectApplied { caster: EntityId, effect: EffectId },

    /// The host's periodic timer fired for a running effect.
    PeriodicTick { caster: EntityId, effect: EffectId },

    /// An effect went away on the host side, for any reason.
    ///
    /// This includes the echo of an eviction the runtime itself requested;
    /// such repeats are absorbed.
    EffectRemoved {
        caster: EntityId,
        effect: EffectId,
        reason: EndReason,
    },

    /// A caster (re)connected with these effects still running, oldest first.
    CasterConnected {
        caster: EntityId,
        active_effects: Vec<EffectId>,
    },

    /// A caster logged out or despawned.
    CasterDeparted { caster: EntityId },
}

impl HostEvent {
    /// Caster the event is about.
    pub fn caster(&self) -> EntityId {
        match self {
            HostEvent::EffectApplied { caster, .. }
            | HostEvent::PeriodicTick { caster, .. }
            | HostEvent::EffectRemoved { caster, .. }
            | HostEvent::CasterConnected { caster, .. }
            | HostEvent::CasterDeparted { caster } => *caster,
        }
    }
}
