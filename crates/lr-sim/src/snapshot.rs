//! What a tick hands back to its caller.

use lr_board::Board;
use lr_core::{AgentId, Tick};
use lr_provider::ProviderError;
use lr_roster::Rider;

use crate::{Death, RoundState};

/// A move provider that did not produce a usable answer for `agent`.
///
/// The rider keeps its previous heading for that tick.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProviderFailure {
    pub agent: AgentId,
    pub error: ProviderError,
}

/// An owned copy of the round after a tick.
///
/// Owned rather than borrowed so it can be sent to a renderer on another
/// thread while the next tick is computed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSnapshot {
    /// Ticks elapsed in the round when the snapshot was taken.
    pub tick:        Tick,
    pub board:       Board,
    /// Ascending by id.
    pub riders:      Vec<Rider>,
    pub state:       RoundState,
    /// Set only when the round ended with a single survivor.
    pub winner:      Option<AgentId>,
    /// Riders that crashed during this tick.
    pub deaths:      Vec<Death>,
    /// Provider failures during this tick.
    pub diagnostics: Vec<ProviderFailure>,
}

impl RoundSnapshot {
    pub fn rider(&self, id: AgentId) -> Option<&Rider> {
        self.riders.iter().find(|r| r.id == id)
    }

    pub fn live_count(&self) -> usize {
        self.riders.iter().filter(|r| r.alive).count()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state == RoundState::GameOver
    }
}
