//! Public runtime API surface.
//!
//! This module gathers the types exposed to hosts so the orchestration code
//! can stay focused on routing.

pub mod errors;
pub mod host;

pub use errors::{Result, RuntimeError};
pub use host::HostEvent;
