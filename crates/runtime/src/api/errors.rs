//! Unified error types surfaced by the runtime API.
//!
//! Gameplay edge cases (missing targets, stale casters, repeated removals)
//! never show up here; they are absorbed and logged. Only wiring mistakes do.
use thiserror::Error;

use chorus_core::{ErrorSeverity, GameError, OracleError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires host services to be configured before building")]
    MissingServices,

    #[error("runtime requires effect definitions to be configured before building")]
    MissingDefinitions,

    #[error("event buffer size must be at least 1")]
    InvalidEventBuffer,

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingServices | Self::MissingDefinitions | Self::InvalidEventBuffer => {
                ErrorSeverity::Fatal
            }
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingServices => "RUNTIME_MISSING_SERVICES",
            Self::MissingDefinitions => "RUNTIME_MISSING_DEFINITIONS",
            Self::InvalidEventBuffer => "RUNTIME_INVALID_EVENT_BUFFER",
            Self::Oracle(err) => err.error_code(),
        }
    }
}
