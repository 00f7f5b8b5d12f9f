//! Data-driven alchemy content and loaders.
//!
//! Loaders read RON/TOML data files into `alchemy-core` types:
//! - Crafting configuration (TOML)
//! - World item catalog (RON)
//! - Predefined outcomes table (RON)
//! - Actor fixtures for demos and tests (RON)
//!
//! Content feeds the runtime's oracles and repositories; the rules never
//! read files themselves.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorFixture, ActorLoader, ConfigLoader, ContentBundle, ContentFactory, ItemCatalog,
    ItemCatalogLoader, LoadResult, OutcomeTableLoader, WorldItem,
};
