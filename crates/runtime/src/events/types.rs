//! Event types for different topics.

use chorus_core::{EffectId, EndReason, EntityId};
use serde::{Deserialize, Serialize};

/// Events about a caster's slot queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotEvent {
    /// An effect entered the queue, or moved to its newest position when
    /// `refreshed` is set.
    Admitted {
        caster: EntityId,
        effect: EffectId,
        refreshed: bool,
    },

    /// An effect was pushed out to respect capacity.
    Evicted { caster: EntityId, effect: EffectId },

    /// An effect left the queue after it ended.
    Released {
        caster: EntityId,
        effect: EffectId,
        reason: EndReason,
    },

    /// The caster departed and its queue was dropped.
    Cleared { caster: EntityId, dropped: usize },

    /// The queue was rebuilt after a (re)connect.
    Rehydrated {
        caster: EntityId,
        active: Vec<EffectId>,
        evicted: Vec<EffectId>,
    },
}

/// Events about resolve-and-trigger cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchEvent {
    /// The trigger action was applied to these targets.
    Triggered {
        caster: EntityId,
        effect: EffectId,
        targets: Vec<EntityId>,
        boost_percent: u32,
    },

    /// The caster could not be resolved at tick time.
    CasterLost { caster: EntityId, effect: EffectId },

    /// An instance ended.
    Ended {
        caster: EntityId,
        effect: EffectId,
        reason: EndReason,
    },
}
