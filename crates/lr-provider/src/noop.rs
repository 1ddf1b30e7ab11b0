//! A provider for rounds with no automated riders.

use lr_core::{AgentId, RiderRng, StepOffset};

use crate::{MoveProvider, ProviderError, ProviderResult, ProviderView};

/// A [`MoveProvider`] that never answers.
///
/// Use it when every rider is human.  If an automated rider is added anyway,
/// each of its ticks is logged as [`ProviderError::Unavailable`] and it rides
/// straight on.
pub struct NoopProvider;

impl MoveProvider for NoopProvider {
    fn next_step(
        &self,
        _agent: AgentId,
        _view:  &ProviderView<'_>,
        _rng:   &mut RiderRng,
    ) -> ProviderResult<StepOffset> {
        Err(ProviderError::Unavailable)
    }
}
