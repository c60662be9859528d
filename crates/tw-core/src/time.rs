//! Frame time model.
//!
//! The host drives the core once per rendered frame.  `Tick` counts frames;
//! `FrameClock` additionally accumulates the per-frame `delta` so observers
//! can report elapsed logical time.  There is no mapping to wall-clock time:
//! `delta` is whatever unit the host chooses (1.0 per frame by default).

use std::fmt;

// ── Tick ──────────────────────────────────────────────────────────────────────

/// Index of a frame since the session started.  Frame `0` is the first one
/// [`FrameClock`] hands out.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The frame right after this one.
    #[inline]
    pub fn next(self) -> Tick {
        self.offset(1)
    }

    /// The frame `frames` after this one.
    #[inline]
    pub fn offset(self, frames: u64) -> Tick {
        Tick(self.0.saturating_add(frames))
    }

    /// How many frames separate `earlier` from `self`; zero if `earlier` is
    /// actually later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Counts frames and the total delta handed out so far.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// The current frame, advanced by `FrameClock::advance()`.
    pub current_tick: Tick,
    /// Sum of every delta passed to `advance`.
    pub elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, which lasted `delta`.
    #[inline]
    pub fn advance(&mut self, delta: f64) {
        self.current_tick = self.current_tick.next();
        self.elapsed += delta;
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (elapsed {:.2})", self.current_tick, self.elapsed)
    }
}
