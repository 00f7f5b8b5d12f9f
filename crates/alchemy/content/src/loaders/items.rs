//! World item catalog loader.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use alchemy_core::{ItemData, ItemId, RarityTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// An item in the world directory, addressable by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldItem {
    pub id: ItemId,
    pub item: ItemData,
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<WorldItem>,
}

impl ItemCatalog {
    pub fn get(&self, id: ItemId) -> Option<&ItemData> {
        self.items.iter().find(|w| w.id == id).map(|w| &w.item)
    }

    pub fn into_map(self) -> BTreeMap<ItemId, ItemData> {
        self.items.into_iter().map(|w| (w.id, w.item)).collect()
    }
}

/// Loader for the world item catalog.
///
/// Rejects duplicate ids and reagents whose IP exceeds the per-rarity limit.
pub struct ItemCatalogLoader;

impl ItemCatalogLoader {
    pub fn load(path: &Path, ip_limits: &RarityTable<u32>) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, ip_limits)
    }

    pub fn parse(content: &str, ip_limits: &RarityTable<u32>) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for world in &catalog.items {
            if !seen.insert(world.id) {
                anyhow::bail!("Duplicate item id {} in item catalog", world.id);
            }
            validate_reagent(world.id, &world.item, ip_limits)?;
        }

        Ok(catalog)
    }
}

/// Checks reagent flags on an item against the IP limits of its rarity.
pub(crate) fn validate_reagent(id: ItemId, item: &ItemData, ip_limits: &RarityTable<u32>) -> LoadResult<()> {
    if let Some(props) = item.reagent {
        props
            .validate(item.rarity.unwrap_or_default(), ip_limits)
            .map_err(|e| anyhow::anyhow!("Invalid reagent {} ({}): {}", item.name, id, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alchemy_core::{AlchemyConfig, Essence, IpVector, ItemKind, Rarity};

    use super::*;
    use crate::loaders::test_support::write_temp;

    const CATALOG: &str = r#"
(
    items: [
        (
            id: ItemId(101),
            item: (
                name: "Ember Draught",
                kind: consumable,
                rarity: Some(common),
                img: Some("icons/ember.webp"),
            ),
        ),
        (
            id: ItemId(201),
            item: (
                name: "Fire Moss",
                kind: loot,
                rarity: Some(uncommon),
                reagent: Some((ip: (combat: 7, utility: 1), essence: primal)),
            ),
        ),
    ],
)
"#;

    #[test]
    fn loads_catalog_from_file() {
        let file = write_temp(CATALOG);
        let catalog = ItemCatalogLoader::load(file.path(), &AlchemyConfig::default().ip_limits).unwrap();

        assert_eq!(catalog.items.len(), 2);
        let ember = catalog.get(ItemId(101)).unwrap();
        assert_eq!(ember.kind, ItemKind::Consumable);
        assert_eq!(ember.quantity, 0);
        assert_eq!(ember.img.as_deref(), Some("icons/ember.webp"));

        let moss = catalog.get(ItemId(201)).unwrap();
        let props = moss.reagent.unwrap();
        assert_eq!(props.ip, IpVector::new(7, 1, 0));
        assert_eq!(props.essence, Essence::Primal);
        assert_eq!(moss.rarity, Some(Rarity::Uncommon));
    }

    #[test]
    fn rejects_reagent_over_ip_limit() {
        let over = CATALOG.replace("rarity: Some(uncommon)", "rarity: Some(common)");
        let err = ItemCatalogLoader::parse(&over, &AlchemyConfig::default().ip_limits).unwrap_err();
        assert!(err.to_string().contains("Fire Moss"), "{err}");
    }

    #[test]
    fn unrecognized_rarity_loads_as_unknown() {
        let odd = CATALOG.replace("rarity: Some(uncommon)", "rarity: Some(artifact)");
        let catalog = ItemCatalogLoader::parse(&odd, &AlchemyConfig::default().ip_limits).unwrap();

        let moss = catalog.get(ItemId(201)).unwrap();
        assert_eq!(moss.rarity, Some(Rarity::Unknown));
        assert_eq!(moss.reagent.unwrap().ip, IpVector::new(7, 1, 0));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let dup = CATALOG.replace("ItemId(201)", "ItemId(101)");
        let err = ItemCatalogLoader::parse(&dup, &AlchemyConfig::default().ip_limits).unwrap_err();
        assert!(err.to_string().contains("Duplicate item id"));
    }
}
