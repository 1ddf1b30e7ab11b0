//! The `RoundController` struct and its tick loop.

use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use lr_board::Board;
use lr_core::{start_positions, AgentId, Direction, GridPos, RiderRng, RoundConfig, Tick};
use lr_provider::{IntentTable, MoveProvider, PendingIntent, ProviderError, ProviderView};
use lr_roster::{InputBinding, Rider, RiderKind, RiderRngs, Roster};

use crate::{
    arbiter, resolver, Death, NoopObserver, ProviderFailure, RoundObserver, RoundSnapshot,
    RoundState, SimError, SimResult,
};

// ── Per-rider inputs assembled before the provider phase ──────────────────────

/// What one automated rider's provider is asked about.  Collected up front so
/// the (possibly parallel) provider phase only reads the board.
struct ProviderJob {
    agent:    AgentId,
    self_pos: GridPos,
    opponent: Option<GridPos>,
}

// ── RoundController ───────────────────────────────────────────────────────────

/// Owns one board, one roster and the round state machine.
///
/// `RoundController<P>` drives the five-step tick (see the crate docs).  All
/// roster and board edits are rejected with [`SimError::InvalidState`] while a
/// round is `Playing`.  Intents can be submitted at any time through
/// [`submit_intent`](Self::submit_intent) or a cloned
/// [`intent_table`](Self::intent_table); they are buffered until the next tick.
///
/// Create via [`RoundBuilder`][crate::RoundBuilder].
pub struct RoundController<P: MoveProvider> {
    pub(crate) config:   RoundConfig,
    pub(crate) board:    Board,
    pub(crate) roster:   Roster,
    /// Per-rider RNGs, separated from the roster for the split-borrow pattern.
    pub(crate) rngs:     RiderRngs,
    pub(crate) provider: P,
    pub(crate) intents:  IntentTable,
    pub(crate) state:    RoundState,
    pub(crate) winner:   Option<AgentId>,
    /// Ticks elapsed in the current round.
    pub(crate) clock:    Tick,
}

impl<P: MoveProvider> RoundController<P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Every rider, ascending by id.
    pub fn riders(&self) -> &[Rider] {
        self.roster.as_slice()
    }

    pub fn rider(&self, id: AgentId) -> SimResult<&Rider> {
        self.roster.get(id).ok_or(SimError::UnknownAgent(id))
    }

    pub fn rider_for_binding(&self, binding: &str) -> Option<AgentId> {
        self.roster.find_by_binding(binding)
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn winner(&self) -> Option<AgentId> {
        self.winner
    }

    pub fn current_tick(&self) -> Tick {
        self.clock
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// A handle onto this round's intent slots, for input threads.
    pub fn intent_table(&self) -> IntentTable {
        self.intents.clone()
    }

    // ── Intents ───────────────────────────────────────────────────────────

    /// Buffer `direction` for `agent`'s next tick.  Last write wins.
    ///
    /// Never fails: intents for unknown, crashed or automated riders are
    /// dropped during arbitration.
    pub fn submit_intent(&self, agent: AgentId, direction: Direction) {
        self.intents.submit(agent, direction);
    }

    /// Route `direction` to whichever rider holds `binding`.
    pub fn submit_for_binding(&self, binding: &str, direction: Direction) -> Option<AgentId> {
        let agent = self.roster.find_by_binding(binding)?;
        self.intents.submit(agent, direction);
        Some(agent)
    }

    // ── Setup (Waiting / GameOver only) ───────────────────────────────────

    fn ensure_idle(&self, op: &'static str) -> SimResult<()> {
        match self.state {
            RoundState::Playing => Err(SimError::InvalidState { op, state: self.state }),
            _ => Ok(()),
        }
    }

    /// Replace the board with an empty `width × height` one and re-place
    /// every rider.
    pub fn set_board_size(&mut self, width: u32, height: u32) -> SimResult<()> {
        self.ensure_idle("resize the board")?;
        self.board = Board::new(width as usize, height as usize)?;
        self.config.board_width  = width;
        self.config.board_height = height;
        self.place_riders();
        tracing::debug!(width, height, "board resized");
        Ok(())
    }

    /// Add a rider and re-place everyone.  Bindings must be unique.
    pub fn add_rider(
        &mut self,
        kind:    RiderKind,
        binding: Option<InputBinding>,
    ) -> SimResult<AgentId> {
        self.ensure_idle("add a rider")?;
        if let Some(taken) = binding
            .as_ref()
            .filter(|b| self.roster.find_by_binding(b.as_str()).is_some())
        {
            return Err(SimError::DuplicateBinding(taken.as_str().to_owned()));
        }
        let id = self.roster.add(kind, binding);
        self.rngs.insert(id);
        self.place_riders();
        tracing::debug!(agent = id.0, ?kind, "rider added");
        Ok(id)
    }

    /// Remove a rider and re-place everyone who is left.
    pub fn remove_rider(&mut self, id: AgentId) -> SimResult<Rider> {
        self.ensure_idle("remove a rider")?;
        let rider = self.roster.remove(id).ok_or(SimError::UnknownAgent(id))?;
        self.rngs.remove(id);
        self.place_riders();
        tracing::debug!(agent = id.0, "rider removed");
        Ok(rider)
    }

    /// Recompute every rider's start cell and heading for the current board.
    pub fn reposition(&mut self) -> SimResult<()> {
        self.ensure_idle("reposition riders")?;
        self.place_riders();
        Ok(())
    }

    pub fn reset_scores(&mut self) -> SimResult<()> {
        self.ensure_idle("reset scores")?;
        self.roster.reset_scores();
        Ok(())
    }

    /// Return to `Waiting`: empty board, riders revived at their start cells,
    /// winner cleared.  Scores are kept.
    pub fn reset_to_waiting(&mut self) -> SimResult<()> {
        self.ensure_idle("reset the round")?;
        self.board.clear();
        self.roster.revive_all();
        self.place_riders();
        self.intents.clear();
        self.clock  = Tick::ZERO;
        self.winner = None;
        self.state  = RoundState::Waiting;
        Ok(())
    }

    fn place_riders(&mut self) {
        let (width, height) = (self.board.width(), self.board.height());
        let poses = start_positions(self.roster.len(), width, height);
        self.roster.place(&poses);
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Begin a round from `Waiting` or `GameOver`.
    ///
    /// Clears the board, revives and re-places every rider, writes each start
    /// cell, and discards intents buffered before the round.  Fails without
    /// changing anything if the roster is empty or two riders would share a
    /// start cell.
    pub fn start(&mut self) -> SimResult<RoundState> {
        self.ensure_idle("start")?;
        if self.roster.is_empty() {
            return Err(SimError::EmptyRoster);
        }

        let poses = start_positions(self.roster.len(), self.board.width(), self.board.height());
        let mut seen = HashSet::with_capacity(poses.len());
        if let Some(crowded) = poses.iter().map(|p| p.pos).find(|&pos| !seen.insert(pos)) {
            return Err(SimError::CrowdedStart(crowded));
        }

        self.board.clear();
        self.roster.place(&poses);
        self.roster.revive_all();
        for rider in self.roster.iter() {
            self.board.set(rider.position, rider.id)?;
        }
        self.intents.clear();
        self.clock  = Tick::ZERO;
        self.winner = None;
        self.state  = RoundState::Playing;

        tracing::info!(
            riders = self.roster.len(),
            width  = self.board.width(),
            height = self.board.height(),
            "round started"
        );
        Ok(self.state)
    }

    /// Run one tick without observer callbacks.
    pub fn tick(&mut self) -> RoundSnapshot {
        self.tick_with(&mut NoopObserver)
    }

    /// Run one tick, reporting to `observer`.
    ///
    /// Outside `Playing` this changes nothing and returns the current state.
    pub fn tick_with<O: RoundObserver>(&mut self, observer: &mut O) -> RoundSnapshot {
        if self.state != RoundState::Playing {
            tracing::trace!(state = %self.state, "tick ignored outside a round");
            return self.snapshot(Vec::new(), Vec::new());
        }

        let now = self.clock;
        observer.on_tick_start(now);

        // ── ① Drain external intents ──────────────────────────────────────
        let external = self.intents.drain();

        // ── ② Provider phase (read-only board) ────────────────────────────
        let (provided, failures) = self.query_providers();
        for failure in &failures {
            tracing::warn!(
                tick  = now.0,
                agent = failure.agent.0,
                "move provider failed: {}",
                failure.error
            );
            observer.on_provider_failure(now, failure);
        }

        // ── ③ Arbitration ─────────────────────────────────────────────────
        for decision in arbiter::arbitrate(&mut self.roster, external, provided) {
            tracing::trace!(
                tick      = now.0,
                agent     = decision.agent.0,
                direction = %decision.direction,
                outcome   = ?decision.outcome,
                "intent arbitrated"
            );
        }

        // ── ④ Movement and collisions ─────────────────────────────────────
        let deaths = resolver::advance(&mut self.board, &mut self.roster);
        for death in &deaths {
            tracing::debug!(
                tick  = now.0,
                agent = death.agent.0,
                cause = %death.cause,
                "rider crashed"
            );
            observer.on_rider_died(now, death);
        }

        // ── ⑤ Termination ─────────────────────────────────────────────────
        self.clock = now.next();
        self.evaluate(now, observer);

        let snapshot = self.snapshot(deaths, failures);
        observer.on_tick_end(&snapshot);
        snapshot
    }

    /// Tick until the round ends or `max_ticks` ticks have run, whichever is
    /// first, and return the last snapshot.
    pub fn run<O: RoundObserver>(&mut self, max_ticks: u64, observer: &mut O) -> RoundSnapshot {
        let mut last = self.snapshot(Vec::new(), Vec::new());
        for _ in 0..max_ticks {
            if self.state != RoundState::Playing {
                break;
            }
            last = self.tick_with(observer);
        }
        last
    }

    /// Tick until the round ends, sleeping `game_speed` between ticks.
    ///
    /// A round always ends: every tick either fills a free cell per live rider
    /// or kills it.
    pub fn run_paced<O: RoundObserver>(&mut self, observer: &mut O) -> RoundSnapshot {
        let pause = self.config.game_speed();
        loop {
            let snapshot = self.tick_with(observer);
            if snapshot.state != RoundState::Playing {
                return snapshot;
            }
            std::thread::sleep(pause);
        }
    }

    // ── Tick internals ────────────────────────────────────────────────────

    fn evaluate<O: RoundObserver>(&mut self, now: Tick, observer: &mut O) {
        let survivors = self.roster.live_ids();
        let winner = match survivors.as_slice() {
            []     => None,
            [sole] => Some(*sole),
            _      => return,
        };

        if let Some(rider) = winner.and_then(|id| self.roster.get_mut(id)) {
            rider.score += 1;
        }
        self.winner = winner;
        self.state  = RoundState::GameOver;
        tracing::debug!(tick = now.0, winner = ?winner.map(|id| id.0), "round over");
        observer.on_round_end(now, winner);
    }

    /// Ask the provider about every live automated rider.
    ///
    /// With the `parallel` Cargo feature the calls run on Rayon's thread pool.
    /// Results come back ascending by agent id either way.
    fn query_providers(&mut self) -> (Vec<PendingIntent>, Vec<ProviderFailure>) {
        let jobs: Vec<ProviderJob> = self
            .roster
            .iter()
            .filter(|r| r.alive && r.kind.is_automated())
            .map(|r| ProviderJob {
                agent:    r.id,
                self_pos: r.position,
                opponent: opponent_of(&self.roster, r.id),
            })
            .collect();
        if jobs.is_empty() {
            return (Vec::new(), Vec::new());
        }

        // Explicit field borrows so the borrow checker sees disjoint access.
        let board    = &self.board;
        let provider = &self.provider;
        let budget   = self.config.provider_budget();

        // Both sides are ascending by id; riders without an RNG are skipped.
        let jobs = jobs.as_slice();
        let paired: Vec<(&ProviderJob, &mut RiderRng)> = self
            .rngs
            .iter_mut()
            .filter_map(move |(id, rng)| {
                jobs.binary_search_by_key(&id, |j| j.agent)
                    .ok()
                    .map(|i| (&jobs[i], rng))
            })
            .collect();

        #[cfg(not(feature = "parallel"))]
        let answers: Vec<Result<PendingIntent, ProviderFailure>> = paired
            .into_iter()
            .map(|(job, rng)| ask(provider, board, budget, job, rng))
            .collect();

        #[cfg(feature = "parallel")]
        let answers: Vec<Result<PendingIntent, ProviderFailure>> = {
            use rayon::prelude::*;

            paired
                .into_par_iter()
                .map(|(job, rng)| ask(provider, board, budget, job, rng))
                .collect()
        };

        let mut provided = Vec::with_capacity(answers.len());
        let mut failures = Vec::new();
        for answer in answers {
            match answer {
                Ok(intent)   => provided.push(intent),
                Err(failure) => failures.push(failure),
            }
        }
        (provided, failures)
    }

    fn snapshot(&self, deaths: Vec<Death>, diagnostics: Vec<ProviderFailure>) -> RoundSnapshot {
        RoundSnapshot {
            tick:   self.clock,
            board:  self.board.clone(),
            riders: self.roster.as_slice().to_vec(),
            state:  self.state,
            winner: self.winner,
            deaths,
            diagnostics,
        }
    }
}

// ── Provider helpers ──────────────────────────────────────────────────────────

/// The single opponent shown to `agent`'s provider: the first other live
/// rider, else the first other rider, else `None`.
pub(crate) fn opponent_of(roster: &Roster, agent: AgentId) -> Option<GridPos> {
    roster
        .iter()
        .find(|r| r.id != agent && r.alive)
        .or_else(|| roster.iter().find(|r| r.id != agent))
        .map(|r| r.position)
}

/// Call the provider once and turn its answer into an intent.
///
/// An error, a non-unit offset, or an answer slower than `budget` all count
/// as failures.
/// Best-effort text of a caught panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {msg}")
    } else {
        "panicked".to_owned()
    }
}

fn ask<P: MoveProvider>(
    provider: &P,
    board:    &Board,
    budget:   Option<Duration>,
    job:      &ProviderJob,
    rng:      &mut RiderRng,
) -> Result<PendingIntent, ProviderFailure> {
    let view    = ProviderView::new(board, job.self_pos, job.opponent);
    let started = Instant::now();
    let answer  = panic::catch_unwind(AssertUnwindSafe(|| provider.next_step(job.agent, &view, rng)))
        .unwrap_or_else(|payload| Err(ProviderError::Failed(panic_message(payload.as_ref()))));
    let elapsed = started.elapsed();

    let failed = |error| ProviderFailure { agent: job.agent, error };

    if let Some(budget) = budget.filter(|&b| elapsed > b) {
        return Err(failed(ProviderError::Timeout {
            elapsed_ms: elapsed.as_millis() as u64,
            budget_ms:  budget.as_millis() as u64,
        }));
    }

    let offset = answer.map_err(failed)?;
    match Direction::from_offset(offset) {
        Some(direction) => Ok(PendingIntent::new(job.agent, direction)),
        None => Err(failed(ProviderError::InvalidOffset { row: offset.row, col: offset.col })),
    }
}
