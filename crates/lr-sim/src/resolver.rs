//! Simultaneous movement and collision resolution for one tick.
//!
//! Every live rider steps one cell along its heading.  Resolution happens in
//! three passes so that the outcome never depends on which rider is processed
//! first:
//!
//! 1. **Check** each candidate cell against the board as it was *before* the
//!    tick.  Outside the board is a wall death, an occupied cell a trail death.
//! 2. **Write** every surviving mover's id into its new cell, ascending by id,
//!    and move its head there.
//! 3. **Head-on**: any cell claimed by two or more movers kills all of them.
//!    The cell keeps the id written last (the highest claimant id).

use std::fmt;

use lr_board::Board;
use lr_core::{AgentId, GridPos};
use lr_roster::Roster;

#[cfg(feature = "fx-hash")]
type ClaimMap = rustc_hash::FxHashMap<GridPos, u32>;
#[cfg(not(feature = "fx-hash"))]
type ClaimMap = std::collections::HashMap<GridPos, u32>;

/// Why a rider crashed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeathCause {
    /// Stepped off the board.
    Wall,
    /// Stepped onto a cell already occupied before the tick.
    Trail,
    /// Stepped onto the same free cell as another rider in the same tick.
    HeadOn,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeathCause::Wall   => "wall",
            DeathCause::Trail  => "trail",
            DeathCause::HeadOn => "head-on",
        })
    }
}

/// A rider that crashed this tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Death {
    pub agent: AgentId,
    pub cause: DeathCause,
    /// The cell the rider tried to enter.  May lie outside the board.
    pub cell:  GridPos,
}

/// Advance every live rider by one cell and return the tick's deaths,
/// ascending by agent id.
///
/// Riders killed by a wall or trail do not move.  Head-on riders do move into
/// the contested cell before dying.
pub fn advance(board: &mut Board, roster: &mut Roster) -> Vec<Death> {
    let mut deaths = Vec::new();
    let mut movers: Vec<(AgentId, GridPos)> = Vec::new();

    // ── Pass 1: check against the pre-tick board ──────────────────────────
    for rider in roster.iter_mut().filter(|r| r.alive) {
        let cell = rider.position.step(rider.heading);
        let cause = match board.get(cell) {
            None    => Some(DeathCause::Wall),
            Some(0) => None,
            Some(_) => Some(DeathCause::Trail),
        };
        match cause {
            Some(cause) => {
                rider.alive = false;
                deaths.push(Death { agent: rider.id, cause, cell });
            }
            None => movers.push((rider.id, cell)),
        }
    }

    // ── Pass 2: write trails, ascending id ────────────────────────────────
    let mut claims = ClaimMap::default();
    for &(agent, cell) in &movers {
        // In bounds (pass 1) and a valid id (roster-issued), so this cannot fail.
        let written = board.set(cell, agent);
        debug_assert!(written.is_ok(), "{agent} could not be written at {cell}");
        if let Some(rider) = roster.get_mut(agent) {
            rider.position = cell;
        }
        *claims.entry(cell).or_insert(0) += 1;
    }

    // ── Pass 3: head-on collisions ────────────────────────────────────────
    for &(agent, cell) in &movers {
        if claims.get(&cell).copied().unwrap_or(0) < 2 {
            continue;
        }
        if let Some(rider) = roster.get_mut(agent) {
            rider.alive = false;
        }
        deaths.push(Death { agent, cause: DeathCause::HeadOn, cell });
    }

    deaths.sort_by_key(|d| d.agent);
    deaths
}
