//! `lr-roster`: rider records and the roster that owns them.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`rider`]       | `Rider`, `RiderKind`, `InputBinding`                      |
//! | [`roster`]      | `Roster` (id allocation + lookup), `RiderRngs`            |
//! | [`builder`]     | `RosterBuilder` (fluent construction)                     |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Rider` and friends.  |

pub mod builder;
pub mod rider;
pub mod roster;


pub use builder::RosterBuilder;
pub use rider::{InputBinding, Rider, RiderKind};
pub use roster::{RiderRngs, Roster};
