//! A minimal automated opponent.

use lr_core::{AgentId, Direction, RiderRng, StepOffset};

use crate::{MoveProvider, ProviderResult, ProviderView};

/// Picks uniformly among the neighbouring cells that are on the board and
/// still empty; if there are none it picks any direction and crashes.
///
/// The rider's own previous cell is always occupied, so this never asks for
/// a reversal.
#[derive(Default)]
pub struct RandomSafeProvider;

impl MoveProvider for RandomSafeProvider {
    fn next_step(
        &self,
        _agent: AgentId,
        view:   &ProviderView<'_>,
        rng:    &mut RiderRng,
    ) -> ProviderResult<StepOffset> {
        let free: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| view.board.is_free(view.self_pos.step(d)))
            .collect();

        let pick = match rng.choose(&free) {
            Some(&d) => d,
            None     => Direction::ALL[rng.gen_range(0..Direction::ALL.len())],
        };
        Ok(pick.offset())
    }
}
