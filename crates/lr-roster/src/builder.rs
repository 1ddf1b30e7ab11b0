//! Fluent builder for constructing `Roster` + `RiderRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use lr_roster::RosterBuilder;
//!
//! let (roster, rngs) = RosterBuilder::new(/*seed=*/ 42)
//!     .human("arrows")
//!     .automated()
//!     .build();
//!
//! assert_eq!(roster.len(), 2);
//! assert_eq!(rngs.len(),   2);
//! ```

use crate::{InputBinding, RiderKind, RiderRngs, Roster};

/// Fluent builder for [`Roster`] + [`RiderRngs`].
///
/// Riders get ids 1, 2, 3, … in the order they are declared, which is also
/// the order start positions are handed out in.
pub struct RosterBuilder {
    seed:    u64,
    entries: Vec<(RiderKind, Option<InputBinding>)>,
}

impl RosterBuilder {
    /// Create a builder using `seed` as the global RNG seed.
    pub fn new(seed: u64) -> Self {
        Self { seed, entries: Vec::new() }
    }

    /// Declare a human rider fed by the key set named `binding`.
    pub fn human(mut self, binding: impl Into<String>) -> Self {
        self.entries
            .push((RiderKind::Human, Some(InputBinding::new(binding))));
        self
    }

    /// Declare a human rider with no input binding (intents are submitted
    /// by id only).
    pub fn unbound_human(mut self) -> Self {
        self.entries.push((RiderKind::Human, None));
        self
    }

    /// Declare a rider steered by the round's move provider.
    pub fn automated(mut self) -> Self {
        self.entries.push((RiderKind::Automated, None));
        self
    }

    /// Construct `Roster` and `RiderRngs`.
    pub fn build(self) -> (Roster, RiderRngs) {
        let mut roster = Roster::new();
        for (kind, binding) in self.entries {
            roster.add(kind, binding);
        }
        let rngs = RiderRngs::for_roster(self.seed, &roster);
        (roster, rngs)
    }
}
