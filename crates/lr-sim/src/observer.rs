//! Round observer trait for logging, rendering and data collection.

use lr_core::{AgentId, Tick};

use crate::{Death, ProviderFailure, RoundSnapshot};

/// Callbacks invoked by [`RoundController::tick_with`][crate::RoundController::tick_with]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  `tick` arguments are the index of the tick
/// being processed (the first tick of a round is `T0`).
///
/// # Example: crash counter
///
/// ```rust,ignore
/// struct CrashCounter(usize);
///
/// impl RoundObserver for CrashCounter {
///     fn on_rider_died(&mut self, _tick: Tick, _death: &Death) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait RoundObserver {
    /// Called at the very start of each tick, before intents are drained.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per automated rider whose provider failed this tick.
    fn on_provider_failure(&mut self, _tick: Tick, _failure: &ProviderFailure) {}

    /// Called once per crash, ascending by agent id.
    fn on_rider_died(&mut self, _tick: Tick, _death: &Death) {}

    /// Called at the end of each tick with the snapshot that is about to be
    /// returned.
    fn on_tick_end(&mut self, _snapshot: &RoundSnapshot) {}

    /// Called once when the round reaches `GameOver`.  `winner` is `None` on
    /// a draw.
    fn on_round_end(&mut self, _tick: Tick, _winner: Option<AgentId>) {}
}

/// A [`RoundObserver`] that does nothing.
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// Reports crashes and round results through `tracing`.
///
/// Provider failures are always logged by the controller itself, so they are
/// not repeated here.
pub struct TracingObserver;

impl RoundObserver for TracingObserver {
    fn on_rider_died(&mut self, tick: Tick, death: &Death) {
        tracing::info!(
            tick  = tick.0,
            agent = death.agent.0,
            cause = %death.cause,
            x     = death.cell.x,
            y     = death.cell.y,
            "rider crashed"
        );
    }

    fn on_tick_end(&mut self, snapshot: &RoundSnapshot) {
        tracing::trace!(
            tick  = snapshot.tick.0,
            alive = snapshot.live_count(),
            "tick complete"
        );
    }

    fn on_round_end(&mut self, tick: Tick, winner: Option<AgentId>) {
        match winner {
            Some(id) => tracing::info!(tick = tick.0, winner = id.0, "round won"),
            None     => tracing::info!(tick = tick.0, "round drawn"),
        }
    }
}
