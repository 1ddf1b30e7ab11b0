//! `lr-core`: foundational types for the light-rider grid simulation.
//!
//! This crate is a dependency of every other `lr-*` crate.  It has no `lr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`direction`]   | `Direction`, `StepOffset`                             |
//! | [`geometry`]    | `GridPos`, `StartPose`, `start_positions`             |
//! | [`time`]        | `Tick`, `RoundConfig`                                 |
//! | [`rng`]         | `RiderRng` (per-rider deterministic RNG)              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, StepOffset};
pub use error::{CoreError, CoreResult};
pub use geometry::{start_positions, GridPos, StartPose};
pub use ids::AgentId;
pub use rng::RiderRng;
pub use time::{RoundConfig, Tick};
