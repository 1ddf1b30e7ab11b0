//! duel: one scripted human against two automated riders.
//!
//! Usage: `duel [config.json]`
//!
//! The optional JSON file overrides any `RoundConfig` field, e.g.
//! `{"board_width": 60, "game_speed_ms": 40}`.  A background thread plays the
//! human's key presses into the round's intent table while the main thread
//! runs the paced tick loop.

use std::fs::File;
use std::io::BufReader;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use lr_core::{AgentId, Direction, RoundConfig, Tick};
use lr_provider::{IntentTable, RandomSafeProvider};
use lr_roster::RosterBuilder;
use lr_sim::{
    Death, ProviderFailure, RoundBuilder, RoundObserver, RoundSnapshot, TracingObserver,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const BOARD_WIDTH:   u32 = 40;
const BOARD_HEIGHT:  u32 = 20;
const GAME_SPEED_MS: u64 = 30;

/// The human's key presses: wait this many ticks, then press.
const SCRIPT: &[(u64, Direction)] = &[
    (4, Direction::Up),
    (5, Direction::Left),
    (8, Direction::Down),
    (6, Direction::Right),
    (3, Direction::Down),
    (9, Direction::Left),
];

// ── Observer wrapper to count events ──────────────────────────────────────────

struct CountingObserver {
    inner:    TracingObserver,
    deaths:   Vec<Death>,
    failures: usize,
}

impl CountingObserver {
    fn new() -> Self {
        Self { inner: TracingObserver, deaths: Vec::new(), failures: 0 }
    }
}

impl RoundObserver for CountingObserver {
    fn on_provider_failure(&mut self, tick: Tick, failure: &ProviderFailure) {
        self.failures += 1;
        self.inner.on_provider_failure(tick, failure);
    }

    fn on_rider_died(&mut self, tick: Tick, death: &Death) {
        self.deaths.push(*death);
        self.inner.on_rider_died(tick, death);
    }

    fn on_tick_end(&mut self, snapshot: &RoundSnapshot) {
        self.inner.on_tick_end(snapshot);
    }

    fn on_round_end(&mut self, tick: Tick, winner: Option<AgentId>) {
        self.inner.on_round_end(tick, winner);
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary<'a> {
    ticks:             Tick,
    winner:            Option<AgentId>,
    scores:            Vec<(AgentId, u32)>,
    deaths:            &'a [Death],
    provider_failures: usize,
    elapsed_ms:        u128,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<String>) -> Result<RoundConfig> {
    let Some(path) = path else {
        return Ok(RoundConfig {
            board_width:   BOARD_WIDTH,
            board_height:  BOARD_HEIGHT,
            game_speed_ms: GAME_SPEED_MS,
            seed:          SEED,
            ..RoundConfig::default()
        });
    };
    let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

/// Play `SCRIPT` into `table` on behalf of `agent`, one press per slot.
/// Stops early once `stop` is raised.
fn spawn_input(
    table:  IntentTable,
    agent:  AgentId,
    config: &RoundConfig,
    stop:   Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    let speed = config.game_speed();
    thread::spawn(move || {
        for &(wait, direction) in SCRIPT {
            for _ in 0..wait {
                if stop.load(Ordering::Relaxed) {
                    return;
                }
                thread::sleep(speed);
            }
            table.submit(agent, direction);
            tracing::debug!(agent = agent.0, %direction, "key pressed");
        }
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = load_config(std::env::args().nth(1))?;
    println!("=== duel: light riders ===");
    println!(
        "Board: {}×{}  |  Speed: {} ms  |  Seed: {}",
        config.board_width, config.board_height, config.game_speed_ms, config.seed
    );
    println!();

    // 1. Roster: one human on the arrow keys, two automated riders.
    let (roster, rngs) = RosterBuilder::new(config.seed)
        .human("arrows")
        .automated()
        .automated()
        .build();

    // 2. Round.
    let mut round = RoundBuilder::new(config.clone(), roster, rngs, RandomSafeProvider).build()?;
    let human = round
        .rider_for_binding("arrows")
        .context("human rider missing from roster")?;

    // 3. Start, then feed input from a separate thread.
    round.start()?;
    let stop  = Arc::new(AtomicBool::new(false));
    let input = spawn_input(round.intent_table(), human, &config, Arc::clone(&stop));

    // 4. Run.
    let mut observer = CountingObserver::new();
    let t0 = Instant::now();
    let last = round.run_paced(&mut observer);
    let elapsed = t0.elapsed();

    stop.store(true, Ordering::Relaxed);
    if input.join().is_err() {
        tracing::warn!("input thread panicked");
    }

    // 5. Final board and summary.
    println!("{}", last.board);
    let summary = Summary {
        ticks:             last.tick,
        winner:            last.winner,
        scores:            last.riders.iter().map(|r| (r.id, r.score)).collect(),
        deaths:            &observer.deaths,
        provider_failures: observer.failures,
        elapsed_ms:        elapsed.as_millis(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
