//! Content factory for loading a complete alchemy data directory.

use std::path::{Path, PathBuf};

use alchemy_core::{AlchemyConfig, PredefinedOutcomes};

use crate::loaders::{
    ActorFixture, ActorLoader, ConfigLoader, ItemCatalog, ItemCatalogLoader, LoadResult,
    OutcomeTableLoader,
};

/// Everything a data directory describes.
#[derive(Debug, Clone)]
pub struct ContentBundle {
    pub config: AlchemyConfig,
    pub items: ItemCatalog,
    pub outcomes: PredefinedOutcomes,
    pub actors: Vec<ActorFixture>,
}

/// Content factory that loads alchemy content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── alchemy.toml   (optional, defaults otherwise)
/// ├── items.ron
/// ├── outcomes.ron   (optional, empty table otherwise)
/// └── actors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load crafting configuration from `alchemy.toml`.
    pub fn load_config(&self) -> LoadResult<AlchemyConfig> {
        let path = self.data_dir.join("alchemy.toml");
        if !path.exists() {
            return Ok(AlchemyConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the world item catalog from `items.ron`.
    pub fn load_items(&self, config: &AlchemyConfig) -> LoadResult<ItemCatalog> {
        ItemCatalogLoader::load(&self.data_dir.join("items.ron"), &config.ip_limits)
    }

    /// Load the predefined outcomes table from `outcomes.ron`.
    pub fn load_outcomes(&self) -> LoadResult<PredefinedOutcomes> {
        let path = self.data_dir.join("outcomes.ron");
        if !path.exists() {
            return Ok(PredefinedOutcomes::default());
        }
        OutcomeTableLoader::load(&path)
    }

    /// Load actor fixtures from `actors.ron`.
    pub fn load_actors(&self, config: &AlchemyConfig) -> LoadResult<Vec<ActorFixture>> {
        ActorLoader::load(&self.data_dir.join("actors.ron"), &config.ip_limits)
    }

    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let config = self.load_config()?;
        let items = self.load_items(&config)?;
        let outcomes = self.load_outcomes()?;
        let actors = self.load_actors(&config)?;
        Ok(ContentBundle {
            config,
            items,
            outcomes,
            actors,
        })
    }
}
