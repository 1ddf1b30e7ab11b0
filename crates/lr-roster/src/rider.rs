//! A single rider's state.

use lr_core::{AgentId, Direction, GridPos};

/// Who decides where a rider goes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiderKind {
    /// Steered by intents submitted from an input source.
    Human,
    /// Steered by the round's move provider.
    Automated,
}

impl RiderKind {
    #[inline]
    pub fn is_automated(self) -> bool {
        matches!(self, RiderKind::Automated)
    }
}

/// Identifier of the key/control set feeding a human rider (e.g. `"wasd"`).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputBinding(String);

impl InputBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InputBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One participant in a round.
///
/// `position` and `heading` are owned by the round: the geometry placement
/// writes them before a round, the arbiter and resolver during it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rider {
    pub id:       AgentId,
    pub kind:     RiderKind,
    pub position: GridPos,
    pub heading:  Direction,
    pub alive:    bool,
    /// Rounds won.  Survives round resets.
    pub score:    u32,
    pub binding:  Option<InputBinding>,
}

impl Rider {
    /// A fresh rider, alive, unplaced, facing up.
    pub fn new(id: AgentId, kind: RiderKind, binding: Option<InputBinding>) -> Self {
        Self {
            id,
            kind,
            position: GridPos::default(),
            heading:  Direction::Up,
            alive:    true,
            score:    0,
            binding,
        }
    }
}
