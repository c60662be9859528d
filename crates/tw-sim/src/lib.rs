//! `tw-sim` — the frame loop that drives one walking agent.
//!
//! # Frame loop
//!
//! ```text
//! per frame:
//!   ① on_tick_start(tick)
//!   ② MovementExecutor::advance(config.frame_delta)
//!   ③ on_position / on_waypoint / on_arrival, as the step reports
//!   ④ FrameClock::advance
//! ```
//!
//! Commands (`command`, `swap_grid`, obstacle edits followed by `resettle`)
//! are issued between frames, never during one.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tw_core::{NavConfig, TilePos};
//! use tw_sim::{NoopObserver, SessionBuilder};
//! use tw_spatial::HeightGrid;
//!
//! let mut session = SessionBuilder::new(NavConfig::default(), HeightGrid::flat(8, 8, 0))
//!     .build()?;
//! session.command(TilePos::new(7, 7, 0));
//! let arrived_at = session.run_until_idle(10_000, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, WalkObserver};
pub use sim::Session;
