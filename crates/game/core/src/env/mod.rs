//! Traits describing the host world the scheduler reads.
//!
//! Oracles expose spatial queries, combat eligibility, reputation, party
//! membership and entity lookup. The [`Env`] aggregate bundles them so target
//! resolution can reach everything it needs without hard coupling to concrete
//! host implementations. Oracles are read-only; side effects go through
//! [`EffectSink`](crate::dispatch::EffectSink).
mod combat;
mod entities;
mod error;
mod group;
mod reputation;
mod snapshot;
mod spatial;

pub use combat::CombatOracle;
pub use entities::EntityOracle;
pub use error::OracleError;
pub use group::GroupOracle;
pub use reputation::ReputationOracle;
pub use snapshot::WorldSnapshot;
pub use spatial::SpatialOracle;

/// Aggregates the read-only oracles required by target resolution.
pub struct Env<'a, S, C, R, G, E>
where
    S: SpatialOracle + ?Sized,
    C: CombatOracle + ?Sized,
    R: ReputationOracle + ?Sized,
    G: GroupOracle + ?Sized,
    E: EntityOracle + ?Sized,
{
    spatial: Option<&'a S>,
    combat: Option<&'a C>,
    reputation: Option<&'a R>,
    groups: Option<&'a G>,
    entities: Option<&'a E>,
}

pub type WorldEnv<'a> = Env<
    'a,
    dyn SpatialOracle + 'a,
    dyn CombatOracle + 'a,
    dyn ReputationOracle + 'a,
    dyn GroupOracle + 'a,
    dyn EntityOracle + 'a,
>;

// Derives would require `S: Clone`.
impl<S, C, R, G, E> Clone for Env<'_, S, C, R, G, E>
where
    S: SpatialOracle + ?Sized,
    C: CombatOracle + ?Sized,
    R: ReputationOracle + ?Sized,
    G: GroupOracle + ?Sized,
    E: EntityOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, C, R, G, E> Copy for Env<'_, S, C, R, G, E>
where
    S: SpatialOracle + ?Sized,
    C: CombatOracle + ?Sized,
    R: ReputationOracle + ?Sized,
    G: GroupOracle + ?Sized,
    E: EntityOracle + ?Sized,
{
}

impl<'a, S, C, R, G, E> Env<'a, S, C, R, G, E>
where
    S: SpatialOracle + ?Sized,
    C: CombatOracle + ?Sized,
    R: ReputationOracle + ?Sized,
    G: GroupOracle + ?Sized,
    E: EntityOracle + ?Sized,
{
    pub fn new(
        spatial: Option<&'a S>,
        combat: Option<&'a C>,
        reputation: Option<&'a R>,
        groups: Option<&'a G>,
        entities: Option<&'a E>,
    ) -> Self {
        Self {
            spatial,
            combat,
            reputation,
            groups,
            entities,
        }
    }

    pub fn with_all(
        spatial: &'a S,
        combat: &'a C,
        reputation: &'a R,
        groups: &'a G,
        entities: &'a E,
    ) -> Self {
        Self::new(
            Some(spatial),
            Some(combat),
            Some(reputation),
            Some(groups),
            Some(entities),
        )
    }

    pub fn empty() -> Self {
        Self {
            spatial: None,
            combat: None,
            reputation: None,
            groups: None,
            entities: None,
        }
    }

    /// Returns the SpatialOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SpatialNotAvailable` if no spatial oracle was provided.
    pub fn spatial(&self) -> Result<&'a S, OracleError> {
        self.spatial.ok_or(OracleError::SpatialNotAvailable)
    }

    /// Returns the CombatOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CombatNotAvailable` if no combat oracle was provided.
    pub fn combat(&self) -> Result<&'a C, OracleError> {
        self.combat.ok_or(OracleError::CombatNotAvailable)
    }

    /// Returns the ReputationOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ReputationNotAvailable` if no reputation oracle was provided.
    pub fn reputation(&self) -> Result<&'a R, OracleError> {
        self.reputation.ok_or(OracleError::ReputationNotAvailable)
    }

    /// Returns the GroupOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::GroupsNotAvailable` if no group oracle was provided.
    pub fn groups(&self) -> Result<&'a G, OracleError> {
        self.groups.ok_or(OracleError::GroupsNotAvailable)
    }

    /// Returns the EntityOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EntitiesNotAvailable` if no entity oracle was provided.
    pub fn entities(&self) -> Result<&'a E, OracleError> {
        self.entities.ok_or(OracleError::EntitiesNotAvailable)
    }
}

impl<'a, S, C, R, G, E> Env<'a, S, C, R, G, E>
where
    S: SpatialOracle + 'a,
    C: CombatOracle + 'a,
    R: ReputationOracle + 'a,
    G: GroupOracle + 'a,
    E: EntityOracle + 'a,
{
    /// Converts this environment into a trait-object based `WorldEnv`.
    pub fn into_world_env(self) -> WorldEnv<'a> {
        let spatial: Option<&'a dyn SpatialOracle> = self.spatial.map(|s| s as _);
        let combat: Option<&'a dyn CombatOracle> = self.combat.map(|c| c as _);
        let reputation: Option<&'a dyn ReputationOracle> = self.reputation.map(|r| r as _);
        let groups: Option<&'a dyn GroupOracle> = self.groups.map(|g| g as _);
        let entities: Option<&'a dyn EntityOracle> = self.entities.map(|e| e as _);
        Env::new(spatial, combat, reputation, groups, entities)
    }
}

impl<'a> WorldEnv<'a> {
    /// Builds a complete environment from one object serving every oracle.
    pub fn from_world<W>(world: &'a W) -> Self
    where
        W: SpatialOracle + CombatOracle + ReputationOracle + GroupOracle + EntityOracle + 'a,
    {
        Env::with_all(world, world, world, world, world).into_world_env()
    }
}
