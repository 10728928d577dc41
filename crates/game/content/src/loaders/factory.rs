//! Content factory for loading scheduler content from data files.

use std::path::{Path, PathBuf};

use chorus_core::{ChorusConfig, DefinitionTable};

use crate::loaders::{ConfigLoader, DefinitionLoader, LoadResult};

const EMBEDDED_CONFIG: &str = include_str!("../../data/config.toml");
const EMBEDDED_DEFINITIONS: &str = include_str!("../../data/definitions.ron");

/// Content factory that loads all scheduler content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── definitions.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load scheduler configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<ChorusConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load effect definitions from `definitions.ron`.
    pub fn load_definitions(&self) -> LoadResult<DefinitionTable> {
        let path = self.data_dir.join("definitions.ron");
        DefinitionLoader::load(&path)
    }

    /// Load both configuration and definitions.
    pub fn load_all(&self) -> LoadResult<(ChorusConfig, DefinitionTable)> {
        Ok((self.load_config()?, self.load_definitions()?))
    }

    /// Content shipped with the crate (the default song book).
    pub fn embedded() -> LoadResult<(ChorusConfig, DefinitionTable)> {
        let config = ConfigLoader::parse(EMBEDDED_CONFIG)?;
        let definitions = DefinitionLoader::parse(EMBEDDED_DEFINITIONS)?;
        Ok((config, definitions))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
