use super::{ChanneledInstance, EndReason};
use crate::state::{ActionId, EntityId};

/// One trigger action to apply to one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerApplication {
    pub action: ActionId,
    pub caster: EntityId,
    pub target: EntityId,
    /// Instrument focus boost in percent. The host scales the action's
    /// amounts with [`apply_focus_boost`](crate::definition::apply_focus_boost).
    pub boost_percent: u32,
}

/// Host primitives that start and stop effects.
///
/// The scheduler never mutates the world itself; every side effect goes
/// through this trait. Calls are made synchronously from within the
/// scheduling operation that needs them.
pub trait EffectSink {
    fn apply_trigger_action(&mut self, application: &TriggerApplication);

    /// Removes a previous application of `action` by `caster` from `target`.
    /// Removing something not present must be harmless.
    fn remove_trigger_action(&mut self, action: ActionId, caster: EntityId, target: EntityId);

    /// Ends the host-side effect backing `instance`.
    fn end_effect_instance(&mut self, instance: &ChanneledInstance, reason: EndReason);
}

/// Sink that records every call, for tests and dry runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub applied: Vec<TriggerApplication>,
    pub removed: Vec<(ActionId, EntityId, EntityId)>,
    pub ended: Vec<(ChanneledInstance, EndReason)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets of every applied action, in call order.
    pub fn applied_targets(&self) -> Vec<EntityId> {
        self.applied.iter().map(|a| a.target).collect()
    }

    pub fn clear(&mut self) {
        self.applied.clear();
        self.removed.clear();
        self.ended.clear();
    }
}

impl EffectSink for RecordingSink {
    fn apply_trigger_action(&mut self, application: &TriggerApplication) {
        self.applied.push(*application);
    }

    fn remove_trigger_action(&mut self, action: ActionId, caster: EntityId, target: EntityId) {
        self.removed.push((action, caster, target));
    }

    fn end_effect_instance(&mut self, instance: &ChanneledInstance, reason: EndReason) {
        self.ended.push((*instance, reason));
    }
}
