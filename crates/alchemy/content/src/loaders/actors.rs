//! Actor fixture loader.
//!
//! Fixtures seed in-memory actor stores for the demo binary and tests.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use alchemy_core::{ActorId, InventoryItem, KnownOutcomes, RarityTable};
use serde::{Deserialize, Serialize};

use crate::loaders::items::validate_reagent;
use crate::loaders::{LoadResult, read_file};

/// Starting state of one actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorFixture {
    pub id: ActorId,
    pub name: String,
    /// Gold pieces.
    #[serde(default)]
    pub currency: u64,
    /// Check modifier per tool key the actor is proficient with.
    #[serde(default)]
    pub tool_bonuses: BTreeMap<String, i32>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub known_outcomes: KnownOutcomes,
}

/// Loader for actor fixtures from RON files.
///
/// RON format: `Vec<ActorFixture>`.
pub struct ActorLoader;

impl ActorLoader {
    pub fn load(path: &Path, ip_limits: &RarityTable<u32>) -> LoadResult<Vec<ActorFixture>> {
        let content = read_file(path)?;
        Self::parse(&content, ip_limits)
    }

    pub fn parse(content: &str, ip_limits: &RarityTable<u32>) -> LoadResult<Vec<ActorFixture>> {
        let actors: Vec<ActorFixture> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor fixtures RON: {}", e))?;

        let mut actor_ids = HashSet::new();
        for actor in &actors {
            if !actor_ids.insert(actor.id) {
                anyhow::bail!("Duplicate actor id {} in fixtures", actor.id);
            }

            let mut item_ids = HashSet::new();
            for item in &actor.inventory {
                if !item_ids.insert(item.id) {
                    anyhow::bail!("Duplicate item id {} in inventory of '{}'", item.id, actor.name);
                }
                validate_reagent(item.id, &item.data, ip_limits)
                    .map_err(|e| anyhow::anyhow!("Actor '{}': {}", actor.name, e))?;
            }
        }

        Ok(actors)
    }
}
