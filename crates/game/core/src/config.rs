use crate::error::{ErrorSeverity, GameError};
use crate::slots::SlotCapacity;
use crate::state::ReputationRank;

/// Scheduler configuration, loaded once at startup and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChorusConfig {
    /// Master switch. When false the runtime ignores every host event.
    pub enabled: bool,

    /// Maximum concurrently sustained channeled effects per caster.
    /// Zero disables the cap entirely.
    pub max_concurrent_slots: u32,

    /// Reputation rank at or below which a faction counts as an enemy.
    pub hostile_rank_threshold: ReputationRank,
}

impl ChorusConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_CONCURRENT_SLOTS: u32 = 4;
    pub const DEFAULT_HOSTILE_RANK_THRESHOLD: ReputationRank = ReputationRank::Hostile;

    pub fn new() -> Self {
        Self {
            enabled: true,
            max_concurrent_slots: Self::DEFAULT_MAX_CONCURRENT_SLOTS,
            hostile_rank_threshold: Self::DEFAULT_HOSTILE_RANK_THRESHOLD,
        }
    }

    /// Builds a configuration from an untrusted, signed capacity value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NegativeCapacity` for values below zero and
    /// `ConfigError::CapacityOverflow` for values that do not fit a `u32`.
    pub fn try_new(
        enabled: bool,
        max_concurrent_slots: i64,
        hostile_rank_threshold: ReputationRank,
    ) -> Result<Self, ConfigError> {
        if max_concurrent_slots < 0 {
            return Err(ConfigError::NegativeCapacity(max_concurrent_slots));
        }
        let max_concurrent_slots = u32::try_from(max_concurrent_slots)
            .map_err(|_| ConfigError::CapacityOverflow(max_concurrent_slots))?;

        Ok(Self {
            enabled,
            max_concurrent_slots,
            hostile_rank_threshold,
        })
    }

    pub fn with_max_concurrent_slots(mut self, max_concurrent_slots: u32) -> Self {
        self.max_concurrent_slots = max_concurrent_slots;
        self
    }

    pub fn with_hostile_rank_threshold(mut self, threshold: ReputationRank) -> Self {
        self.hostile_rank_threshold = threshold;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Capacity as enforced by the slot manager.
    pub fn slot_capacity(&self) -> SlotCapacity {
        SlotCapacity::from_limit(self.max_concurrent_slots)
    }
}

impl Default for ChorusConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invariant violations detected while loading configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_concurrent_slots must not be negative (got {0})")]
    NegativeCapacity(i64),

    #[error("max_concurrent_slots {0} does not fit in 32 bits")]
    CapacityOverflow(i64),

    #[error("unknown reputation rank '{0}'")]
    UnknownRank(String),
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NegativeCapacity(_) | Self::CapacityOverflow(_) => ErrorSeverity::Fatal,
            Self::UnknownRank(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeCapacity(_) => "CONFIG_NEGATIVE_CAPACITY",
            Self::CapacityOverflow(_) => "CONFIG_CAPACITY_OVERFLOW",
            Self::UnknownRank(_) => "CONFIG_UNKNOWN_RANK",
        }
    }
}
