//! The `Session` struct and its frame loop.

use tracing::info;
use tw_core::{FrameClock, NavConfig, Tick, TilePos, UnreachablePolicy};
use tw_motion::{MoveTicket, MovementExecutor, StepEvent};
use tw_spatial::{HeightGrid, ObstacleMap, Pathfinder};

use crate::{SimError, SimResult, WalkObserver};

/// One agent in one room, driven frame by frame.
///
/// `Session<P>` owns the height grid, the obstacle map and the movement
/// executor, and hands the grid and obstacles to the executor on every
/// command.  Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<P: Pathfinder> {
    /// Frame counter and accumulated delta.
    pub clock: FrameClock,

    /// The executor that owns the agent's position.
    pub walker: MovementExecutor<P>,

    grid:      HeightGrid,
    obstacles: ObstacleMap,
}

impl<P: Pathfinder> Session<P> {
    pub(crate) fn new(
        grid:      HeightGrid,
        obstacles: ObstacleMap,
        walker:    MovementExecutor<P>,
    ) -> Self {
        Self { clock: FrameClock::new(), walker, grid, obstacles }
    }

    // ── World access ──────────────────────────────────────────────────────

    /// The walker's settings.  Fixed once the session is built.
    pub fn config(&self) -> &NavConfig {
        self.walker.config()
    }

    pub fn grid(&self) -> &HeightGrid {
        &self.grid
    }

    pub fn obstacles(&self) -> &ObstacleMap {
        &self.obstacles
    }

    /// Edit the obstacles.  Call [`resettle`][Self::resettle] afterwards so
    /// the agent is not left standing inside something.
    pub fn obstacles_mut(&mut self) -> &mut ObstacleMap {
        &mut self.obstacles
    }

    /// The frame the next `step` will run.
    #[inline]
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Send the agent towards `goal`.  `None` if there is nothing to walk.
    pub fn command(&mut self, goal: TilePos) -> Option<MoveTicket> {
        self.walker.move_to(goal, &self.grid, &self.obstacles)
    }

    /// Like [`command`][Self::command] with an explicit unreachable policy.
    pub fn command_with(&mut self, goal: TilePos, policy: UnreachablePolicy) -> Option<MoveTicket> {
        self.walker.move_to_with(goal, &self.grid, &self.obstacles, policy)
    }

    /// Replace the grid wholesale and re-snap the agent onto it.
    pub fn swap_grid(&mut self, grid: HeightGrid) -> SimResult<TilePos> {
        info!(
            tick = %self.now(),
            rows = grid.width(),
            tiles = grid.tile_count(),
            "swapping height grid"
        );
        self.grid = grid;
        self.resettle()
    }

    /// Re-snap the agent after the grid or the obstacles changed.
    pub fn resettle(&mut self) -> SimResult<TilePos> {
        Ok(self.walker.resettle(&self.grid, &self.obstacles)?)
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Run one frame.
    pub fn step<O: WalkObserver>(&mut self, observer: &mut O) -> StepEvent {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let delta = self.walker.config().frame_delta;
        let event = self.walker.advance(delta);
        if event != StepEvent::Idle {
            observer.on_position(now, self.walker.position(), self.walker.current_tile());
        }
        match event {
            StepEvent::WaypointReached { tile, index, .. } => observer.on_waypoint(now, tile, index),
            StepEvent::Arrived { tile, .. } => observer.on_arrival(now, tile),
            StepEvent::Idle | StepEvent::Moving => {}
        }

        self.clock.advance(delta);
        event
    }

    /// Run exactly `n` frames, walking or not.
    pub fn run_ticks<O: WalkObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
        observer.on_run_end(self.clock.current_tick);
    }

    /// Run frames until the agent stops walking.
    ///
    /// Returns the frame on which it arrived, or the current frame if it was
    /// already idle.  Fails with [`SimError::Timeout`] if it is still walking
    /// after `max_ticks` frames.
    pub fn run_until_idle<O: WalkObserver>(&mut self, max_ticks: u64, observer: &mut O) -> SimResult<Tick> {
        let mut settled = None;
        if !self.walker.is_moving() {
            settled = Some(self.now());
        }
        let mut ran = 0;
        while settled.is_none() && ran < max_ticks {
            let now = self.now();
            self.step(observer);
            ran += 1;
            if !self.walker.is_moving() {
                settled = Some(now);
            }
        }
        observer.on_run_end(self.clock.current_tick);
        settled.ok_or(SimError::Timeout { ticks: max_ticks })
    }
}
