//! Data-driven content for the channel scheduler.
//!
//! This crate loads static configuration from RON/TOML data files:
//! - Effect definitions (RON), one entry per channeled effect type
//! - Scheduler configuration (TOML): master switch, slot capacity, hostile rank
//!
//! Content is loaded once at startup and handed to the runtime; it never
//! changes while the scheduler runs.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, DefinitionLoader, LoadResult};
