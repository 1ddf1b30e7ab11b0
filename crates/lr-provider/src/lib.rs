//! `lr-provider`: the boundary through which riders are steered.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                           |
//! |-------------|--------------------------------------------------------------------|
//! | [`intent`]  | `PendingIntent`, `IntentTable`: cross-thread last-write-wins slots |
//! | [`context`] | `ProviderView<'a>`: read-only board view handed to providers      |
//! | [`model`]   | `MoveProvider` trait                                               |
//! | [`noop`]    | `NoopProvider`: for rounds without automated riders               |
//! | [`random`]  | `RandomSafeProvider`: picks a random free neighbouring cell       |
//! | [`error`]   | `ProviderError`, `ProviderResult<T>`                               |
//!
//! # Design notes
//!
//! Two sources feed headings into a round:
//!
//! 1. **Input adapters** (keyboards, UIs, network glue) write into a cloned
//!    [`IntentTable`] whenever they like, from any thread.
//! 2. **Move providers** are asked once per tick for every live automated
//!    rider.  Their answer is converted into a [`PendingIntent`] and goes
//!    through the same arbitration as a human's key press.
//!
//! Providers only ever see `&Board`; they cannot write to the board or the
//! roster.

pub mod context;
pub mod error;
pub mod intent;
pub mod model;
pub mod noop;
pub mod random;


pub use context::ProviderView;
pub use error::{ProviderError, ProviderResult};
pub use intent::{IntentTable, PendingIntent};
pub use model::MoveProvider;
pub use noop::NoopProvider;
pub use random::RandomSafeProvider;
