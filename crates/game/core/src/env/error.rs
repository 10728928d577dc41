//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required host service was not wired in.
///
/// These are always fatal: the scheduler cannot resolve targets without the
/// host world. They never result from gameplay edge cases.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// SpatialOracle is not available in the environment.
    #[error("SpatialOracle not available")]
    SpatialNotAvailable,

    /// CombatOracle is not available in the environment.
    #[error("CombatOracle not available")]
    CombatNotAvailable,

    /// ReputationOracle is not available in the environment.
    #[error("ReputationOracle not available")]
    ReputationNotAvailable,

    /// GroupOracle is not available in the environment.
    #[error("GroupOracle not available")]
    GroupsNotAvailable,

    /// EntityOracle is not available in the environment.
    #[error("EntityOracle not available")]
    EntitiesNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SpatialNotAvailable => "ORACLE_SPATIAL_NOT_AVAILABLE",
            CombatNotAvailable => "ORACLE_COMBAT_NOT_AVAILABLE",
            ReputationNotAvailable => "ORACLE_REPUTATION_NOT_AVAILABLE",
            GroupsNotAvailable => "ORACLE_GROUPS_NOT_AVAILABLE",
            EntitiesNotAvailable => "ORACLE_ENTITIES_NOT_AVAILABLE",
        }
    }
}
