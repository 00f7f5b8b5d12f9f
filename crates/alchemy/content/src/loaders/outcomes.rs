//! Predefined outcomes table loader.

use std::path::Path;

use alchemy_core::PredefinedOutcomes;

use crate::loaders::{LoadResult, read_file};

/// Loader for the GM-authored `(category, sum) -> item` table.
///
/// RON format: `(combat: {12: ItemId(101)}, utility: {}, entropy: {})`.
/// Sums outside `1..=31` are rejected.
pub struct OutcomeTableLoader;

impl OutcomeTableLoader {
    pub fn load(path: &Path) -> LoadResult<PredefinedOutcomes> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PredefinedOutcomes> {
        let table: PredefinedOutcomes = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse outcome table RON: {}", e))?;
        table
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid outcome table: {}", e))?;
        Ok(table)
    }
}
