//! Strongly typed rider identifier.
//!
//! Rider ids double as board occupancy values, so `0` is reserved for
//! "empty cell" and real ids start at 1.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The reserved "nobody" value; never handed out to a rider.
            pub const NONE: $name = $name(0);

            /// Raw value as written into the board.
            #[inline(always)]
            pub fn raw(self) -> $inner {
                self.0
            }

            /// `true` for every id except the reserved zero.
            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self.0 != 0
            }

            /// Inverse of [`raw`](Self::raw); `None` for the empty-cell value.
            #[inline]
            pub fn from_raw(raw: $inner) -> Option<$name> {
                (raw != 0).then_some($name(raw))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identifier of a rider.  Unique and never reused within a controller.
    pub struct AgentId(u32);
}
