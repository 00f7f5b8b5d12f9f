//! Per-actor reentrancy guard.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use alchemy_core::ActorId;

use crate::api::{Result, RuntimeError};

/// Set of actors with a craft in flight.
#[derive(Clone, Default)]
pub(crate) struct CraftLocks {
    busy: Arc<Mutex<HashSet<ActorId>>>,
}

impl CraftLocks {
    /// Marks `actor` busy until the returned guard is dropped.
    pub(crate) fn acquire(&self, actor: ActorId) -> Result<CraftGuard> {
        if !lock(&self.busy).insert(actor) {
            return Err(RuntimeError::CraftInProgress { actor });
        }
        Ok(CraftGuard {
            busy: Arc::clone(&self.busy),
            actor,
        })
    }

    pub(crate) fn is_busy(&self, actor: ActorId) -> bool {
        lock(&self.busy).contains(&actor)
    }
}

/// Releases the actor on drop, on every exit path.
pub(crate) struct CraftGuard {
    busy: Arc<Mutex<HashSet<ActorId>>>,
    actor: ActorId,
}

impl Drop for CraftGuard {
    fn drop(&mut self) {
        lock(&self.busy).remove(&self.actor);
    }
}

// The set stays consistent even if a holder panicked, so poison is ignored.
fn lock(busy: &Mutex<HashSet<ActorId>>) -> MutexGuard<'_, HashSet<ActorId>> {
    busy.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
