//! Cardinal headings and the unit step offsets exchanged with move providers.
//!
//! Rows grow downward: `Up` is `(-1, 0)` in `(row, col)` terms.

/// The four headings a rider can travel in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A `(row, col)` displacement as returned by a move provider.
///
/// Only the four unit cardinal steps are legal; anything else (including
/// `(0, 0)`) maps to `None` in [`Direction::from_offset`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOffset {
    pub row: i32,
    pub col: i32,
}

impl StepOffset {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for StepOffset {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl Direction {
    /// All headings, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The 180° reverse.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// `true` for `Left`/`Right`.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Unit step for this heading.
    #[inline]
    pub fn offset(self) -> StepOffset {
        match self {
            Direction::Up    => StepOffset::new(-1, 0),
            Direction::Down  => StepOffset::new(1, 0),
            Direction::Left  => StepOffset::new(0, -1),
            Direction::Right => StepOffset::new(0, 1),
        }
    }

    /// Map a provider answer back to a heading.
    pub fn from_offset(offset: StepOffset) -> Option<Direction> {
        match (offset.row, offset.col) {
            (-1, 0) => Some(Direction::Up),
            (1, 0)  => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1)  => Some(Direction::Right),
            _       => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up    => "up",
            Direction::Down  => "down",
            Direction::Left  => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
