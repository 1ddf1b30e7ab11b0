//! A round shared between a tick thread and input threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lr_core::{AgentId, Direction};
use lr_provider::MoveProvider;

use crate::{RoundController, RoundSnapshot, RoundState, SimResult};

/// `Arc<Mutex<RoundController>>` with the common calls forwarded.
///
/// Every clone refers to the same round.  Ticks and setup calls are
/// serialised by the mutex; intents submitted from any thread land in the
/// round's intent table and are picked up by the next tick.
pub struct SharedRound<P: MoveProvider> {
    inner: Arc<Mutex<RoundController<P>>>,
}

impl<P: MoveProvider> Clone for SharedRound<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: MoveProvider> SharedRound<P> {
    pub fn new(round: RoundController<P>) -> Self {
        Self { inner: Arc::new(Mutex::new(round)) }
    }

    /// Lock the round.  A thread that panicked mid-tick leaves the round in
    /// whatever state it reached; the lock is still handed out.
    pub fn lock(&self) -> MutexGuard<'_, RoundController<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the round.
    pub fn with<R>(&self, f: impl FnOnce(&mut RoundController<P>) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn start(&self) -> SimResult<RoundState> {
        self.lock().start()
    }

    pub fn tick(&self) -> RoundSnapshot {
        self.lock().tick()
    }

    pub fn submit_intent(&self, agent: AgentId, direction: Direction) {
        self.lock().submit_intent(agent, direction);
    }

    pub fn state(&self) -> RoundState {
        self.lock().state()
    }
}
