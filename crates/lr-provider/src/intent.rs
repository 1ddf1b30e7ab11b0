//! Pending intents and the table they are buffered in between ticks.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lr_core::{AgentId, Direction};

#[cfg(feature = "fx-hash")]
type IntentMap = rustc_hash::FxHashMap<AgentId, Direction>;
#[cfg(not(feature = "fx-hash"))]
type IntentMap = std::collections::HashMap<AgentId, Direction>;

/// A requested heading for one rider, valid for the next tick only.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingIntent {
    pub agent:     AgentId,
    pub direction: Direction,
}

impl PendingIntent {
    #[inline]
    pub fn new(agent: AgentId, direction: Direction) -> Self {
        Self { agent, direction }
    }
}

/// One slot per rider, shared between input sources and the tick loop.
///
/// Cloning is cheap and every clone refers to the same slots, so an input
/// thread can hold its own handle.  Writes overwrite the rider's slot
/// (last write wins); the tick loop empties the whole table with
/// [`drain`](Self::drain) exactly once per tick.
///
/// Ids are not validated here: the table has no view of the roster, so
/// unknown or dead riders are filtered out when the intents are arbitrated.
#[derive(Clone, Default)]
pub struct IntentTable {
    slots: Arc<Mutex<IntentMap>>,
}

impl IntentTable {
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking writer cannot leave a half-written slot behind, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, IntentMap> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `direction` as `agent`'s intent for the next tick.
    pub fn submit(&self, agent: AgentId, direction: Direction) {
        let _ = self.lock().insert(agent, direction);
    }

    /// Take every buffered intent, ascending by agent id, leaving the table
    /// empty.
    pub fn drain(&self) -> Vec<PendingIntent> {
        let mut intents: Vec<PendingIntent> = self
            .lock()
            .drain()
            .map(|(agent, direction)| PendingIntent { agent, direction })
            .collect();
        intents.sort_unstable_by_key(|i| i.agent);
        intents
    }

    /// Drop everything buffered so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// The intent currently buffered for `agent`, without consuming it.
    pub fn peek(&self, agent: AgentId) -> Option<Direction> {
        self.lock().get(&agent).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
