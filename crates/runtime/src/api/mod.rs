//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the engine and infrastructure modules can stay focused on orchestration.

pub mod errors;
pub mod providers;

pub use errors::{CommitStage, Result, RuntimeError};
pub use providers::{RollProvider, ToolCheck};
