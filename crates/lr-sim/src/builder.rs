//! Fluent builder for constructing a [`RoundController`].

use std::collections::HashSet;

use lr_board::Board;
use lr_core::{start_positions, RoundConfig, Tick};
use lr_provider::{IntentTable, MoveProvider};
use lr_roster::{RiderRngs, Roster};

use crate::{RoundController, RoundState, SimError, SimResult};

/// Fluent builder for [`RoundController<P>`].
///
/// # Required inputs
///
/// - [`RoundConfig`]: board size, game speed, provider budget, seed
/// - [`Roster`] + [`RiderRngs`]: from [`lr_roster::RosterBuilder`]
/// - `P: MoveProvider`: steers automated riders
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                         |
/// |----------------------|---------------------------------|
/// | `.board_size(w, h)`  | `config.board_width × height`   |
/// | `.intents(t)`        | A fresh, empty `IntentTable`    |
///
/// # Example
///
/// ```rust,ignore
/// let (roster, rngs) = RosterBuilder::new(seed).human("wasd").automated().build();
/// let mut round = RoundBuilder::new(config, roster, rngs, RandomSafeProvider)
///     .board_size(30, 20)
///     .build()?;
/// round.start()?;
/// ```
pub struct RoundBuilder<P: MoveProvider> {
    config:     RoundConfig,
    roster:     Roster,
    rngs:       RiderRngs,
    provider:   P,
    board_size: Option<(u32, u32)>,
    intents:    Option<IntentTable>,
}

impl<P: MoveProvider> RoundBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: RoundConfig, roster: Roster, rngs: RiderRngs, provider: P) -> Self {
        Self {
            config,
            roster,
            rngs,
            provider,
            board_size: None,
            intents:    None,
        }
    }

    /// Override the board dimensions from the config.
    pub fn board_size(mut self, width: u32, height: u32) -> Self {
        self.board_size = Some((width, height));
        self
    }

    /// Share an intent table that input threads already hold handles to.
    pub fn intents(mut self, table: IntentTable) -> Self {
        self.intents = Some(table);
        self
    }

    /// Validate inputs, allocate the board, place every rider at its start
    /// cell, and return a controller in `Waiting`.
    pub fn build(mut self) -> SimResult<RoundController<P>> {
        if let Some((width, height)) = self.board_size {
            self.config.board_width  = width;
            self.config.board_height = height;
        }
        self.config.validate()?;

        // ── Bindings must be unique ───────────────────────────────────────
        let mut seen = HashSet::new();
        for binding in self.roster.iter().filter_map(|r| r.binding.as_ref()) {
            if !seen.insert(binding.as_str()) {
                return Err(SimError::DuplicateBinding(binding.as_str().to_owned()));
            }
        }

        // ── Board and placement ───────────────────────────────────────────
        let (width, height) = self.config.board_dims();
        let board = Board::new(width, height)?;

        // Rider streams always derive from the round's seed.
        if self.rngs.seed() != self.config.seed {
            tracing::debug!(
                given = self.rngs.seed(),
                seed  = self.config.seed,
                "reseeding rider rngs from config"
            );
            self.rngs = RiderRngs::for_roster(self.config.seed, &self.roster);
        }
        for id in self.roster.ids() {
            self.rngs.insert(id);
        }
        self.roster.place(&start_positions(self.roster.len(), width, height));

        tracing::debug!(
            riders = self.roster.len(),
            width,
            height,
            seed = self.rngs.seed(),
            "round built"
        );

        Ok(RoundController {
            config:   self.config,
            board,
            roster:   self.roster,
            rngs:     self.rngs,
            provider: self.provider,
            intents:  self.intents.unwrap_or_default(),
            state:    RoundState::Waiting,
            winner:   None,
            clock:    Tick::ZERO,
        })
    }
}

/// Build a `Waiting` round on a `width × height` board with default timing.
///
/// Shorthand for [`RoundBuilder`] when only the roster and board size matter.
pub fn init_round<P: MoveProvider>(
    roster:   Roster,
    width:    u32,
    height:   u32,
    provider: P,
) -> SimResult<RoundController<P>> {
    let config = RoundConfig::default();
    let rngs = RiderRngs::for_roster(config.seed, &roster);
    RoundBuilder::new(config, roster, rngs, provider)
        .board_size(width, height)
        .build()
}
