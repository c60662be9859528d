//! Session observer trait for tracing and data collection.

use tw_core::{Tick, TilePos, Vec3};

/// Callbacks invoked by [`Session`][crate::Session] as frames run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: arrival logger
///
/// ```rust,ignore
/// struct Arrivals(Vec<(Tick, TilePos)>);
///
/// impl WalkObserver for Arrivals {
///     fn on_arrival(&mut self, tick: Tick, tile: TilePos) {
///         self.0.push((tick, tile));
///     }
/// }
/// ```
pub trait WalkObserver {
    /// Called at the start of every frame, before the agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every frame in which the agent moved.  `tile` is the last
    /// tile the agent stood on exactly.
    fn on_position(&mut self, _tick: Tick, _position: Vec3, _tile: TilePos) {}

    /// Called when the agent snaps onto an intermediate waypoint.
    fn on_waypoint(&mut self, _tick: Tick, _tile: TilePos, _index: usize) {}

    /// Called when the agent snaps onto the last waypoint of its walk.
    fn on_arrival(&mut self, _tick: Tick, _tile: TilePos) {}

    /// Called once when `run_ticks` or `run_until_idle` returns.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`WalkObserver`] that does nothing.
pub struct NoopObserver;

impl WalkObserver for NoopObserver {}
