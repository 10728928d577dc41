//! Periodic effect dispatch.
//!
//! Each running effect is a [`ChanneledInstance`] moving through
//! `Applying → Active → Ended`. The [`PeriodicDispatcher`] runs one
//! resolve-and-trigger cycle on apply and on every host tick, pushing the
//! results into an [`EffectSink`].
mod cycle;
mod instance;
mod sink;

pub use cycle::{CycleOutcome, PeriodicDispatcher};
pub use instance::{ChanneledInstance, EndReason, InstancePhase};
pub use sink::{EffectSink, RecordingSink, TriggerApplication};
