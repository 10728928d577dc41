use crate::state::{Candidate, Position};

/// Spatial query over the host world.
pub trait SpatialOracle: Send + Sync {
    /// Returns every entity within `radius` of `center`.
    ///
    /// The result may include dead entities and the querying caster itself;
    /// callers filter both. Ordering must be stable for a given world state.
    fn candidates_within(&self, center: Position, radius: f32) -> Vec<Candidate>;
}
