//! Round lifecycle states.

use std::fmt;

/// Where a round is in its lifecycle.
///
/// ```text
/// Waiting ──start()──▶ Playing ──(≤ 1 alive)──▶ GameOver
///    ▲                                              │
///    └──────────── reset_to_waiting() ──────────────┤
///                  start() ◀────────────────────────┘
/// ```
///
/// Only [`RoundController`][crate::RoundController] changes it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundState {
    /// Roster and board may be edited; no ticks run.
    #[default]
    Waiting,
    /// Ticks advance riders; roster and board are frozen.
    Playing,
    /// Zero or one rider left; frozen until restarted or reset.
    GameOver,
}

impl RoundState {
    pub fn as_str(self) -> &'static str {
        match self {
            RoundState::Waiting  => "waiting",
            RoundState::Playing  => "playing",
            RoundState::GameOver => "game over",
        }
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
