//! Scheduler configuration loader.

use std::path::Path;
use std::str::FromStr;

use chorus_core::{ChorusConfig, ConfigError, ReputationRank};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// On-disk shape of `config.toml`.
///
/// The capacity is signed and the rank is free text so that bad values reach
/// [`ChorusConfig::try_new`] and fail with a precise error instead of a
/// generic parse failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default = "default_max_concurrent_slots")]
    max_concurrent_slots: i64,
    #[serde(default)]
    hostile_rank_threshold: Option<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_max_concurrent_slots() -> i64 {
    i64::from(ChorusConfig::DEFAULT_MAX_CONCURRENT_SLOTS)
}

/// Loader for scheduler configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ChorusConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    ///
    /// Missing keys take their defaults.
    pub fn parse(content: &str) -> LoadResult<ChorusConfig> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let threshold = match file.hostile_rank_threshold {
            Some(name) => ReputationRank::from_str(&name)
                .map_err(|_| ConfigError::UnknownRank(name))?,
            None => ChorusConfig::DEFAULT_HOSTILE_RANK_THRESHOLD,
        };

        let config = ChorusConfig::try_new(file.enabled, file.max_concurrent_slots, threshold)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::SlotCapacity;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, ChorusConfig::default());
    }

    #[test]
    fn parses_every_field() {
        let config = ConfigLoader::parse(
            r#"
            enabled = false
            max_concurrent_slots = 0
            hostile_rank_threshold = "Unfriendly"
            "#,
        )
        .unwrap();

        assert!(!config.enabled);
        assert_eq!(config.slot_capacity(), SlotCapacity::Unlimited);
        assert_eq!(config.hostile_rank_threshold, ReputationRank::Unfriendly);
    }

    #[test]
    fn negative_capacity_fails_at_load() {
        let err = ConfigLoader::parse("max_concurrent_slots = -2").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::NegativeCapacity(-2))
        );
    }

    #[test]
    fn unknown_rank_fails_at_load() {
        let err = ConfigLoader::parse(r#"hostile_rank_threshold = "loathed""#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::UnknownRank(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigLoader::parse("max_slots = 3").is_err());
    }
}
