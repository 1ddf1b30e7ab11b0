use lr_board::BoardError;
use lr_core::{AgentId, CoreError, GridPos};
use thiserror::Error;

use crate::RoundState;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot {op} while the round is {state}")]
    InvalidState {
        op:    &'static str,
        state: RoundState,
    },

    #[error("unknown rider {0}")]
    UnknownAgent(AgentId),

    #[error("a round needs at least one rider")]
    EmptyRoster,

    #[error("start cell {0} would be shared by two riders; the board is too small for the roster")]
    CrowdedStart(GridPos),

    #[error("input binding {0:?} is already assigned to another rider")]
    DuplicateBinding(String),

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

pub type SimResult<T> = Result<T, SimError>;
