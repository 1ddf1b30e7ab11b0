use thiserror::Error;

/// Why a provider produced no usable move this tick.
///
/// None of these are fatal: the rider keeps its heading and the round goes on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProviderError {
    #[error("provider failed: {0}")]
    Failed(String),

    #[error("provider returned ({row}, {col}), which is not a unit cardinal step")]
    InvalidOffset { row: i32, col: i32 },

    #[error("provider took {elapsed_ms} ms, budget is {budget_ms} ms")]
    Timeout { elapsed_ms: u64, budget_ms: u64 },

    #[error("no provider is available for automated riders")]
    Unavailable,
}

pub type ProviderResult<T> = Result<T, ProviderError>;
