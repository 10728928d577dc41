//! Deterministic scheduling rules for channeled performance effects.
//!
//! `chorus-core` defines how a caster's repeating effects find their targets,
//! how each effect instance ticks, and how many effects one caster may sustain
//! at once. It never performs I/O: the host world is reached through the
//! read-only oracles in [`env`], and every side effect is requested through an
//! [`EffectSink`]. All scheduling state lives in [`engine::ChannelEngine`].
pub mod config;
pub mod definition;
pub mod dispatch;
pub mod engine;
pub mod env;
pub mod error;
pub mod slots;
pub mod state;
pub mod targeting;

pub use config::{ChorusConfig, ConfigError};
pub use definition::{
    DefinitionError, DefinitionTable, DurationScaling, EffectDefinition, FocusAura, FocusAuraKind,
    FocusFamily, ReapplyPolicy, apply_focus_boost, focus_boost_percent,
};
pub use dispatch::{
    ChanneledInstance, CycleOutcome, EffectSink, EndReason, InstancePhase, PeriodicDispatcher,
    RecordingSink, TriggerApplication,
};
pub use engine::{ChannelEngine, StartReport};
pub use env::{
    CombatOracle, EntityOracle, Env, GroupOracle, OracleError, ReputationOracle, SpatialOracle,
    WorldEnv, WorldSnapshot,
};
pub use error::{ErrorSeverity, GameError};
pub use slots::{Admission, SlotCapacity, SlotManager, SlotQueue};
pub use state::{
    ActionId, Candidate, CasterView, EffectId, EntityId, EntityKind, FactionId, GroupId,
    InstanceId, Position, ReputationRank,
};
pub use targeting::{TargetMode, TargetResolver};
