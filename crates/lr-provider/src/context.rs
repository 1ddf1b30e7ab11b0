//! Read-only state handed to a move provider.

use lr_board::Board;
use lr_core::GridPos;

/// What a [`MoveProvider`][crate::MoveProvider] gets to see for one rider.
///
/// Built fresh for each automated rider each tick.  The board is borrowed
/// immutably for the whole provider phase; no board or roster writes happen
/// until every provider has answered.
///
/// # Opponent
///
/// Only a single opponent position is exposed even when more than two riders
/// are on the board: the first other rider (ascending id) that is still
/// alive, or the first other rider at all if everyone else has crashed.
/// `None` only when the rider is alone.
pub struct ProviderView<'a> {
    /// Occupancy snapshot: `0` empty, otherwise the id of the rider whose
    /// head or trail is there.
    pub board: &'a Board,

    /// Board rows.
    pub height: usize,

    /// Board columns.
    pub width: usize,

    /// The asking rider's head.
    pub self_pos: GridPos,

    /// One opponent's head (see above).
    pub opponent: Option<GridPos>,
}

impl<'a> ProviderView<'a> {
    #[inline]
    pub fn new(board: &'a Board, self_pos: GridPos, opponent: Option<GridPos>) -> Self {
        Self {
            board,
            height: board.height(),
            width: board.width(),
            self_pos,
            opponent,
        }
    }
}
