//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use alchemy_core::ActorId;

/// Where content comes from, how the session is labelled, and how dice roll.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub content_dir: PathBuf,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    /// Fixed seed for reproducible dice; entropy otherwise.
    pub seed: Option<u64>,
    pub actor: ActorId,
    pub event_buffer: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../../alchemy/content/data")),
            session_id: None,
            log_dir: None,
            seed: None,
            actor: ActorId(1),
            event_buffer: 100,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ALCHEMY_CONTENT_DIR` - Data directory with items, outcomes and actors (default: bundled demo data)
    /// - `ALCHEMY_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    /// - `ALCHEMY_LOG_DIR` - Log root (default: platform cache directory)
    /// - `ALCHEMY_SEED` - Dice seed (default: entropy)
    /// - `ALCHEMY_ACTOR` - Actor id to craft as (default: 1)
    /// - `ALCHEMY_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ALCHEMY_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        config.session_id = env::var("ALCHEMY_SESSION_ID").ok();
        config.log_dir = env::var("ALCHEMY_LOG_DIR").ok().map(PathBuf::from);
        config.seed = read_env::<u64>("ALCHEMY_SEED");

        if let Some(actor) = read_env::<u32>("ALCHEMY_ACTOR") {
            config.actor = ActorId(actor);
        }
        if let Some(capacity) = read_env::<usize>("ALCHEMY_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
