//! Round time and configuration.
//!
//! A round is measured in whole ticks.  Wall-clock pacing (`game_speed_ms`)
//! only matters to whoever owns the timer; the simulation itself never
//! sleeps inside a tick.

use std::fmt;
use std::time::Duration;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of ticks processed since the round started.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RoundConfig ───────────────────────────────────────────────────────────────

/// Top-level round configuration.
///
/// Typically built in code or loaded from JSON by the application crate
/// (with the `serde` feature) and handed to the round builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundConfig {
    /// Board columns.
    pub board_width: u32,

    /// Board rows.
    pub board_height: u32,

    /// Delay between ticks when the round is paced, in milliseconds.
    pub game_speed_ms: u64,

    /// Longest a move provider may take to answer before its answer is
    /// discarded, in milliseconds.  `0` disables the check.
    pub provider_budget_ms: u64,

    /// Master RNG seed for per-rider RNGs.
    pub seed: u64,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            board_width:        50,
            board_height:       50,
            game_speed_ms:      100,
            provider_budget_ms: 20,
            seed:               0,
        }
    }
}

impl RoundConfig {
    /// Check the values a round cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(CoreError::Config(format!(
                "board must be at least 1x1, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        if self.game_speed_ms == 0 {
            return Err(CoreError::Config("game_speed_ms must be positive".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn game_speed(&self) -> Duration {
        Duration::from_millis(self.game_speed_ms)
    }

    /// `None` when providers may take as long as they like.
    #[inline]
    pub fn provider_budget(&self) -> Option<Duration> {
        (self.provider_budget_ms > 0).then(|| Duration::from_millis(self.provider_budget_ms))
    }

    /// Board dimensions as `(width, height)` in cells.
    #[inline]
    pub fn board_dims(&self) -> (usize, usize) {
        (self.board_width as usize, self.board_height as usize)
    }
}
