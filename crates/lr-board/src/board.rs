//! The occupancy matrix.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec<u32>`:
//!
//! ```text
//! cells[ y * width + x ]
//! ```
//!
//! `0` means empty; any other value is the `AgentId` of the rider whose head
//! or trail occupies the cell.  Nothing in this crate ever writes `0` back
//! into an occupied cell; only [`Board::clear`] (between rounds) empties
//! cells.

use lr_core::{AgentId, GridPos};

use crate::{BoardError, BoardResult};

/// A `height × width` grid of occupancy values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width:  usize,
    height: usize,
    cells:  Vec<u32>,
}

impl Board {
    /// Allocate an empty board.  Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> BoardResult<Self> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.within(self.width, self.height)
    }

    #[inline]
    fn index(&self, pos: GridPos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Raw occupancy value, or `None` if `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: GridPos) -> Option<u32> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// The rider occupying `pos`, if any.
    #[inline]
    pub fn occupant(&self, pos: GridPos) -> Option<AgentId> {
        self.get(pos).and_then(AgentId::from_raw)
    }

    /// `true` if `pos` is on the board and nobody has been there this round.
    #[inline]
    pub fn is_free(&self, pos: GridPos) -> bool {
        self.get(pos) == Some(0)
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Row-major slice of every cell.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Owned `height × width` copy, for consumers that want nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Mark `pos` as occupied by `agent`.
    ///
    /// Overwrites whatever was there; callers that must respect trails check
    /// occupancy first.
    pub fn set(&mut self, pos: GridPos, agent: AgentId) -> BoardResult<()> {
        if !agent.is_valid() {
            return Err(BoardError::ReservedId);
        }
        let i = self.index(pos).ok_or(BoardError::OutOfBounds(pos))?;
        self.cells[i] = agent.raw();
        Ok(())
    }

    /// Empty every cell.  Only used between rounds.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl std::fmt::Display for Board {
    /// One line per row; `.` for empty cells, the rider id otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &cell in row {
                if cell == 0 {
                    f.write_str(".")?;
                } else {
                    write!(f, "{}", cell % 10)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
