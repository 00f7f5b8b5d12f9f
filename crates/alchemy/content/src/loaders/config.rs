//! Crafting configuration loader.

use std::path::Path;

use alchemy_core::AlchemyConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`AlchemyConfig`] from TOML files.
///
/// Keys left out of the file keep their default values.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<AlchemyConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AlchemyConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse alchemy config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use alchemy_core::{Rarity, RarityTable};

    use super::*;
    use crate::loaders::test_support::write_temp;

    #[test]
    fn empty_file_yields_defaults() {
        let file = write_temp("");
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config, AlchemyConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
tool_key = "herbalism"
minimum_cost_percent = 20

[difficulty]
common = 8
uncommon = 13
rare = 18
veryRare = 23
legendary = 28
"#,
        )
        .unwrap();

        assert_eq!(config.tool_key, "herbalism");
        assert_eq!(config.minimum_cost_percent, 20);
        assert_eq!(config.difficulty, RarityTable::new(8, 13, 18, 23, 28));
        assert_eq!(config.base_cost.get(Rarity::Rare), Some(2_000));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = ConfigLoader::parse("tool_key = [").unwrap_err();
        assert!(err.to_string().contains("alchemy config"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = ConfigLoader::load(Path::new("/nonexistent/alchemy.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
