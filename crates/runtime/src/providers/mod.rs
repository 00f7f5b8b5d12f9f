//! Roll provider implementations.

pub mod rng;
pub mod scripted;

pub use rng::RngRollProvider;
pub use scripted::ScriptedRollProvider;
