//! Identifiers and read-only entity views.
//!
//! The host simulation owns every entity. This module only describes the
//! slices of host state the scheduler reads: who an entity is, where it is,
//! whether it is alive, and which faction and kind it belongs to.
mod ids;
mod view;

pub use ids::{
    ActionId, EffectId, EntityId, EntityKind, FactionId, GroupId, InstanceId, Position,
    ReputationRank,
};
pub use view::{Candidate, CasterView};
