use std::collections::HashMap;

use super::{SlotCapacity, SlotQueue};
use crate::state::{EffectId, EntityId};

/// Result of recording an effect start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Admission {
    /// The effect holds a slot afterwards. Always true for a start.
    pub admitted: bool,
    /// The effect was already active and moved to the newest position.
    pub refreshed: bool,
    /// Effects removed to make room, oldest first. Never contains the
    /// admitted effect.
    pub evicted: Vec<EffectId>,
}

/// Tracks active effects of every caster and enforces the slot capacity.
///
/// Casters are independent: nothing done for one caster touches another's
/// queue. Empty queues are dropped.
#[derive(Clone, Debug, Default)]
pub struct SlotManager {
    capacity: SlotCapacity,
    queues: HashMap<EntityId, SlotQueue>,
}

impl SlotManager {
    pub fn new(capacity: SlotCapacity) -> Self {
        Self {
            capacity,
            queues: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> SlotCapacity {
        self.capacity
    }

    /// Records that `effect` started on `caster`.
    ///
    /// A repeated start refreshes the effect's position instead of adding a
    /// second entry. Afterwards the queue is within capacity; the effects
    /// evicted to get there are returned for the caller to end.
    pub fn on_effect_started(&mut self, caster: EntityId, effect: EffectId) -> Admission {
        let queue = self.queues.entry(caster).or_default();
        let refreshed = !queue.touch_or_push(effect);

        let mut evicted = Vec::new();
        while !self.capacity.allows(queue.len()) {
            // The newest entry is `effect`, so a bounded capacity of at least
            // one never pops it.
            match queue.pop_oldest() {
                Some(oldest) => evicted.push(oldest),
                None => break,
            }
        }

        Admission {
            admitted: true,
            refreshed,
            evicted,
        }
    }

    /// Records that `effect` ended on `caster`.
    ///
    /// Unknown casters and effects are ignored. Returns true if an entry was
    /// removed.
    pub fn on_effect_ended(&mut self, caster: EntityId, effect: EffectId) -> bool {
        let Some(queue) = self.queues.get_mut(&caster) else {
            return false;
        };
        let removed = queue.remove(effect);
        if queue.is_empty() {
            self.queues.remove(&caster);
        }
        removed
    }

    /// Forgets everything recorded for `caster`. Returns the number of
    /// entries dropped.
    pub fn on_caster_departed(&mut self, caster: EntityId) -> usize {
        self.queues
            .remove(&caster)
            .map(|queue| queue.len())
            .unwrap_or(0)
    }

    /// Rebuilds a caster's queue from effects the host reports as active,
    /// listed oldest first.
    ///
    /// Anything previously recorded for the caster is discarded. Returns the
    /// effects evicted to respect capacity.
    pub fn rehydrate(
        &mut self,
        caster: EntityId,
        effects: impl IntoIterator<Item = EffectId>,
    ) -> Vec<EffectId> {
        self.queues.remove(&caster);

        let mut evicted = Vec::new();
        for effect in effects {
            let admission = self.on_effect_started(caster, effect);
            evicted.extend(admission.evicted);
        }
        evicted
    }

    /// Active effects of `caster`, oldest first.
    pub fn active_effects(&self, caster: EntityId) -> Vec<EffectId> {
        self.queues
            .get(&caster)
            .map(|queue| queue.iter().collect())
            .unwrap_or_default()
    }

    pub fn queue(&self, caster: EntityId) -> Option<&SlotQueue> {
        self.queues.get(&caster)
    }

    pub fn is_active(&self, caster: EntityId, effect: EffectId) -> bool {
        self.queues
            .get(&caster)
            .is_some_and(|queue| queue.contains(effect))
    }

    /// Number of casters with at least one active effect.
    pub fn caster_count(&self) -> usize {
        self.queues.len()
    }
}
