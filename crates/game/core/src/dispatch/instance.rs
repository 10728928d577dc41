use crate::state::{EffectId, EntityId, InstanceId};

/// Lifecycle phase of a channeled effect instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstancePhase {
    #[default]
    Applying,
    Active,
    Ended,
}

/// Why an instance stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndReason {
    /// The host's duration ran out.
    Expired,
    /// The caster or the host cancelled it.
    Cancelled,
    /// Pushed out by a newer effect when the caster hit capacity.
    Evicted,
    /// The caster could no longer be resolved at tick time.
    CasterLost,
    /// The caster logged out or despawned.
    CasterDeparted,
}

/// Scheduling record of one running channeled effect on a caster.
///
/// This is not the host's aura object; it only tracks the phase and creation
/// order the dispatcher needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChanneledInstance {
    pub id: InstanceId,
    pub caster: EntityId,
    pub effect: EffectId,
    phase: InstancePhase,
}

impl ChanneledInstance {
    pub fn new(id: InstanceId, caster: EntityId, effect: EffectId) -> Self {
        Self {
            id,
            caster,
            effect,
            phase: InstancePhase::Applying,
        }
    }

    /// Instance restored for an effect that was already running on the host.
    pub fn restored(id: InstanceId, caster: EntityId, effect: EffectId) -> Self {
        Self {
            phase: InstancePhase::Active,
            ..Self::new(id, caster, effect)
        }
    }

    pub fn phase(&self) -> InstancePhase {
        self.phase
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.phase == InstancePhase::Ended
    }

    /// `Applying → Active`. No effect in other phases.
    pub fn activate(&mut self) -> bool {
        if self.phase == InstancePhase::Applying {
            self.phase = InstancePhase::Active;
            true
        } else {
            false
        }
    }

    /// Moves to `Ended`. Returns false if the instance had already ended.
    pub fn end(&mut self) -> bool {
        if self.is_ended() {
            return false;
        }
        self.phase = InstancePhase::Ended;
        true
    }
}
