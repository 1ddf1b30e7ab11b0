//! `lr-sim`: round controller for the light-rider grid simulation.
//!
//! # Tick loop
//!
//! ```text
//! while state == Playing:
//!   ① Drain      : take every buffered external intent (once per tick).
//!   ② Providers  : ask MoveProvider::next_step for each live automated
//!                  rider (parallel with the `parallel` feature); failures
//!                  are logged and reported, never fatal.
//!   ③ Arbitrate  : reversals dropped, other turns adopted as headings.
//!   ④ Resolve    : every live rider steps one cell; wall / trail deaths
//!                  against the pre-tick board, then head-on deaths for
//!                  cells claimed by two or more riders.
//!   ⑤ Evaluate   : 0 alive → draw, 1 alive → winner (+1 score).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the provider phase on Rayon's thread pool.        |
//! | `fx-hash`  | FxHash for the cell-claim index and the intent table.  |
//! | `serde`    | `Serialize`/`Deserialize` on snapshots.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lr_core::RoundConfig;
//! use lr_provider::RandomSafeProvider;
//! use lr_roster::RosterBuilder;
//! use lr_sim::{NoopObserver, RoundBuilder};
//!
//! let (roster, rngs) = RosterBuilder::new(42).human("arrows").automated().build();
//! let mut round = RoundBuilder::new(RoundConfig::default(), roster, rngs, RandomSafeProvider)
//!     .board_size(40, 30)
//!     .build()?;
//! round.start()?;
//! let last = round.run(10_000, &mut NoopObserver);
//! println!("winner: {:?}", last.winner);
//! ```

pub mod arbiter;
pub mod builder;
pub mod error;
pub mod observer;
pub mod resolver;
pub mod round;
pub mod shared;
pub mod snapshot;
pub mod state;


pub use arbiter::{Arbitration, Decision};
pub use builder::{init_round, RoundBuilder};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RoundObserver, TracingObserver};
pub use resolver::{Death, DeathCause};
pub use round::RoundController;
pub use shared::SharedRound;
pub use snapshot::{ProviderFailure, RoundSnapshot};
pub use state::RoundState;
