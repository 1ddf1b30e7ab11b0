//! Grid coordinates and symmetric start-position placement.
//!
//! `start_positions` is pure: it never stores anything, so the caller decides
//! when recomputation is allowed (the round controller refuses while a round
//! is being played).

use std::f64::consts::TAU;

use crate::Direction;

/// A cell coordinate.  `x` is the column, `y` the row.
///
/// Signed so that candidate cells one step past the edge are representable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn row(self) -> i32 {
        self.y
    }

    #[inline]
    pub fn col(self) -> i32 {
        self.x
    }

    /// The neighbouring cell one step along `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> GridPos {
        let off = dir.offset();
        GridPos { x: self.x + off.col, y: self.y + off.row }
    }

    /// `true` if the cell lies inside a `width × height` board.
    #[inline]
    pub fn within(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Where a rider begins a round and which way it initially faces.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartPose {
    pub pos:     GridPos,
    pub heading: Direction,
}

/// Fraction of the smaller board side kept clear between the circle and the wall.
const INSET_FRACTION: f64 = 0.2;

/// Compute `n` start poses spread evenly on a circle around the board centre.
///
/// Pose `i` sits at angle `2π·i/n`.  The radius is half the smaller side
/// minus an inset of 20% of that side (at least one cell).  Each rider faces
/// the centre along its dominant axis; ties go vertical.
///
/// Returns an empty list for `n == 0` or a degenerate board.
pub fn start_positions(n: usize, width: usize, height: usize) -> Vec<StartPose> {
    if n == 0 || width == 0 || height == 0 {
        return Vec::new();
    }

    let short = width.min(height) as f64;
    let inset = (short * INSET_FRACTION).floor().max(1.0);
    let radius = (short / 2.0 - inset).max(0.0);

    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;

    (0..n)
        .map(|i| {
            let theta = TAU * i as f64 / n as f64;
            let dx = radius * theta.cos();
            let dy = radius * theta.sin();

            // f64::round rounds half away from zero.
            let x = ((cx + dx).round() as i32).clamp(0, width as i32 - 1);
            let y = ((cy + dy).round() as i32).clamp(0, height as i32 - 1);

            let heading = if dx.abs() > dy.abs() {
                if dx > 0.0 { Direction::Left } else { Direction::Right }
            } else if dy > 0.0 {
                Direction::Up
            } else {
                Direction::Down
            };

            StartPose { pos: GridPos::new(x, y), heading }
        })
        .collect()
}
