use std::collections::{BTreeMap, HashMap};

use crate::state::EffectId;

/// Start-ordered set of one caster's active effects.
///
/// Every effect appears at most once. Re-inserting an effect moves it to the
/// newest position.
#[derive(Clone, Debug, Default)]
pub struct SlotQueue {
    next_seq: u64,
    by_seq: BTreeMap<u64, EffectId>,
    by_effect: HashMap<EffectId, u64>,
}

impl SlotQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `effect` to the newest position, inserting it if absent.
    ///
    /// Returns true if the effect was not queued before.
    pub fn touch_or_push(&mut self, effect: EffectId) -> bool {
        let seq = self.next_seq;
        self.next_seq += 1;

        let previous = self.by_effect.insert(effect, seq);
        if let Some(old) = previous {
            self.by_seq.remove(&old);
        }
        self.by_seq.insert(seq, effect);
        previous.is_none()
    }

    /// Removes `effect`. Returns true if it was queued.
    pub fn remove(&mut self, effect: EffectId) -> bool {
        match self.by_effect.remove(&effect) {
            Some(seq) => {
                self.by_seq.remove(&seq);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the oldest effect.
    pub fn pop_oldest(&mut self) -> Option<EffectId> {
        let (_, effect) = self.by_seq.pop_first()?;
        self.by_effect.remove(&effect);
        Some(effect)
    }

    /// Effects from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = EffectId> + '_ {
        self.by_seq.values().copied()
    }

    pub fn contains(&self, effect: EffectId) -> bool {
        self.by_effect.contains_key(&effect)
    }

    pub fn len(&self) -> usize {
        self.by_seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_seq.is_empty()
    }
}
