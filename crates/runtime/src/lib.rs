//! Host-facing orchestration for the channel scheduler.
//!
//! This crate wraps [`chorus_core::ChannelEngine`] with the host services,
//! an event bus and structured logging. Hosts build a [`Runtime`] once at
//! startup and forward their effect and caster callbacks as [`HostEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types hosts interact with
//! - [`events`] provides topic-based event bus for observers
//! - [`oracle`] bundles the host services into a [`chorus_core::WorldEnv`]
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod handlers;

pub use api::{HostEvent, Result, RuntimeError};
pub use events::{DispatchEvent, Event, EventBus, SlotEvent, Topic};
pub use oracle::ServiceManager;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
