//! `lr-board`: the occupancy grid riders leave their trails on.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`board`]   | `Board`, a row-major `u32` occupancy matrix                 |
//! | [`error`]   | `BoardError`, `BoardResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Board`.                |

pub mod board;
pub mod error;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use error::{BoardError, BoardResult};
