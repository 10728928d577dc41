//! Effect definition loader.

use std::path::Path;

use chorus_core::{DefinitionTable, EffectDefinition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Definition catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionCatalog {
    pub effects: Vec<EffectDefinition>,
}

/// Loader for effect definitions from RON files.
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Load and validate a definition table from a RON file.
    pub fn load(path: &Path) -> LoadResult<DefinitionTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid definitions {}: {}", path.display(), e))
    }

    /// Parse and validate a definition table from RON text.
    pub fn parse(content: &str) -> LoadResult<DefinitionTable> {
        let catalog: DefinitionCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse definition catalog RON: {}", e))?;

        let table = DefinitionTable::from_definitions(catalog.effects)?;
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::{
        ActionId, DefinitionError, EffectId, FocusFamily, ReapplyPolicy, TargetMode,
    };

    #[test]
    fn parses_modes_and_optional_fields() {
        let table = DefinitionLoader::parse(
            r#"(
                effects: [
                    (
                        effect: 1,
                        mode: EnemyArea(radius: 20.0),
                        trigger_action: 101,
                        focus: Some(Percussion),
                    ),
                    (
                        effect: 2,
                        mode: SelfOnly,
                        trigger_action: 102,
                        reapply: ApplyOnTop,
                    ),
                ],
            )"#,
        )
        .unwrap();

        let drums = table.get(EffectId(1)).unwrap();
        assert_eq!(drums.mode, TargetMode::EnemyArea { radius: 20.0 });
        assert_eq!(drums.trigger_action, ActionId(101));
        assert_eq!(drums.reapply, ReapplyPolicy::ClearThenApply);
        assert_eq!(drums.focus, Some(FocusFamily::Percussion));

        let hymn = table.get(EffectId(2)).unwrap();
        assert_eq!(hymn.reapply, ReapplyPolicy::ApplyOnTop);
        assert_eq!(hymn.duration, None);
    }

    #[test]
    fn duplicate_definitions_fail_at_load() {
        let err = DefinitionLoader::parse(
            r#"(effects: [
                (effect: 5, mode: SelfOnly, trigger_action: 1),
                (effect: 5, mode: Any, trigger_action: 2),
            ])"#,
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<DefinitionError>(),
            Some(&DefinitionError::Duplicate(EffectId(5)))
        );
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        assert!(DefinitionLoader::parse(
            r#"(effects: [(effect: 5, mode: Everyone, trigger_action: 1)])"#
        )
        .is_err());
    }
}
