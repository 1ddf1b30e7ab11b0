//! The `MoveProvider` trait: the extension point for automated riders.

use lr_core::{AgentId, RiderRng, StepOffset};

use crate::{ProviderResult, ProviderView};

/// Pluggable steering for automated riders.
///
/// Called once per tick for every live automated rider.  Return the unit
/// step the rider should take next as a `(row, col)` offset: one of
/// `(-1, 0)`, `(1, 0)`, `(0, -1)`, `(0, 1)`.
///
/// Anything else (an `Err`, a non-unit offset, or an answer that arrives
/// after the round's provider budget) is recorded as a provider failure and
/// the rider simply keeps its current heading for that tick.
///
/// # Thread safety
///
/// With the `parallel` feature of `lr-sim` the round may ask for several
/// riders at once, so implementations must be `Send + Sync`.  Per-rider
/// randomness should come from the supplied [`RiderRng`] so results do not
/// depend on call order.
///
/// # Example
///
/// ```rust
/// use lr_core::{AgentId, RiderRng, StepOffset};
/// use lr_provider::{MoveProvider, ProviderResult, ProviderView};
///
/// /// Always heads for the top wall.
/// struct Climber;
///
/// impl MoveProvider for Climber {
///     fn next_step(&self, _: AgentId, _: &ProviderView<'_>, _: &mut RiderRng) -> ProviderResult<StepOffset> {
///         Ok(StepOffset::new(-1, 0))
///     }
/// }
/// ```
pub trait MoveProvider: Send + Sync + 'static {
    fn next_step(
        &self,
        agent: AgentId,
        view:  &ProviderView<'_>,
        rng:   &mut RiderRng,
    ) -> ProviderResult<StepOffset>;
}

impl<P: MoveProvider + ?Sized> MoveProvider for Box<P> {
    fn next_step(
        &self,
        agent: AgentId,
        view:  &ProviderView<'_>,
        rng:   &mut RiderRng,
    ) -> ProviderResult<StepOffset> {
        (**self).next_step(agent, view, rng)
    }
}
