//! Movement generation counter.
//!
//! Every accepted `move_to` bumps the executor's generation.  Anything that
//! captured an older generation (a pending waypoint completion, a caller's
//! ticket) compares against the current value and treats a mismatch as
//! "superseded".  The counter only ever grows.

use std::fmt;

/// Monotonically increasing walk counter.  `Generation::ZERO` means no walk
/// has been issued yet.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generation(pub u64);

impl Generation {
    pub const ZERO: Generation = Generation(0);

    /// The generation that follows `self`.
    #[inline]
    pub fn next(self) -> Generation {
        Generation(self.0 + 1)
    }

    /// `true` if `self` is no longer the current generation.
    #[inline]
    pub fn is_stale(self, current: Generation) -> bool {
        self != current
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}
