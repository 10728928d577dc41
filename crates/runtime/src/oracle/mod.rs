//! Host service bundle.
//!
//! The host implements the `chorus-core` oracle traits over its own world
//! and hands them to the runtime wrapped in a [`ServiceManager`], which
//! builds [`WorldEnv`] views on demand. Services are shared and read-only;
//! the runtime never mutates the host world through them.
use std::sync::Arc;

use chorus_core::{
    CombatOracle, EntityOracle, GroupOracle, ReputationOracle, SpatialOracle, WorldEnv,
};

/// Manages all host service implementations and provides unified access
#[derive(Clone)]
pub struct ServiceManager {
    pub(crate) spatial: Arc<dyn SpatialOracle>,
    pub(crate) combat: Arc<dyn CombatOracle>,
    pub(crate) reputation: Arc<dyn ReputationOracle>,
    pub(crate) groups: Arc<dyn GroupOracle>,
    pub(crate) entities: Arc<dyn EntityOracle>,
}

impl ServiceManager {
    /// Creates a new service manager
    pub fn new(
        spatial: Arc<dyn SpatialOracle>,
        combat: Arc<dyn CombatOracle>,
        reputation: Arc<dyn ReputationOracle>,
        groups: Arc<dyn GroupOracle>,
        entities: Arc<dyn EntityOracle>,
    ) -> Self {
        Self {
            spatial,
            combat,
            reputation,
            groups,
            entities,
        }
    }

    /// Uses one object for every service.
    pub fn from_world<W>(world: Arc<W>) -> Self
    where
        W: SpatialOracle + CombatOracle + ReputationOracle + GroupOracle + EntityOracle + 'static,
    {
        Self::new(
            world.clone(),
            world.clone(),
            world.clone(),
            world.clone(),
            world,
        )
    }

    /// Converts the service manager into a WorldEnv for chorus-core
    pub fn as_world_env(&self) -> WorldEnv<'_> {
        WorldEnv::with_all(
            self.spatial.as_ref(),
            self.combat.as_ref(),
            self.reputation.as_ref(),
            self.groups.as_ref(),
            self.entities.as_ref(),
        )
    }
}

impl std::fmt::Debug for ServiceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceManager").finish_non_exhaustive()
    }
}
