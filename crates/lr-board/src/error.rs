//! Board error type.

use thiserror::Error;

use lr_core::GridPos;

/// Errors produced by `lr-board`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("cell {0} is outside the board")]
    OutOfBounds(GridPos),

    #[error("the empty-cell value cannot be written as an occupant")]
    ReservedId,
}

pub type BoardResult<T> = Result<T, BoardError>;
