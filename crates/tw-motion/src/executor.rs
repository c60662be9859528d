//! The movement executor: turns routes into per-frame position updates.

use tracing::{debug, trace, warn};
use tw_core::{Generation, NavConfig, TilePos, UnreachablePolicy, Vec3};
use tw_spatial::{
    HeightGrid, ObstacleQuery, Pathfinder, find_initial_tile, find_suitable_tile, is_valid_tile,
};

use crate::speed::step_speed;
use crate::state::{MoveTicket, MovementState, StepEvent, WalkStatus, WalkStep};
use crate::{MotionError, MotionResult};

/// Owns the agent's continuous position and walks it along routes computed
/// by `P`.
///
/// The executor is the only writer of the agent's position; the host reads
/// it through [`position`][Self::position] and [`current_tile`][Self::current_tile].
/// Grid and obstacles are passed into each command and never retained.
///
/// # Type parameter
///
/// `P` is any [`Pathfinder`], usually [`tw_spatial::AStarPathfinder`].
pub struct MovementExecutor<P: Pathfinder> {
    /// The routing algorithm.
    pub pathfinder: P,

    config:       NavConfig,
    position:     Vec3,
    current_tile: TilePos,
    state:        MovementState,
    generation:   Generation,
}

impl<P: Pathfinder> MovementExecutor<P> {
    /// An idle executor with the agent standing on `tile`.
    pub fn new(pathfinder: P, config: NavConfig, tile: TilePos, obstacles: &dyn ObstacleQuery) -> Self {
        let mut exec = Self {
            pathfinder,
            config,
            position:     Vec3::ZERO,
            current_tile: tile,
            state:        MovementState::Idle,
            generation:   Generation::ZERO,
        };
        exec.position = exec.standing_point(tile, obstacles);
        exec
    }

    /// Validate `config` and put the agent on the grid: on `door` if it can
    /// stand there, otherwise on the nearest tile that can hold it.
    pub fn spawn(
        pathfinder: P,
        config: NavConfig,
        grid: &HeightGrid,
        obstacles: &dyn ObstacleQuery,
        door: Option<TilePos>,
    ) -> MotionResult<Self> {
        config.validate()?;
        let Some(tile) = find_initial_tile(grid, obstacles, door, config.agent) else {
            warn!(tiles = grid.tile_count(), "no tile to spawn the agent on");
            return Err(MotionError::NoStandingTile);
        };
        debug!(%tile, "agent spawned");
        Ok(Self::new(pathfinder, config, tile, obstacles))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The agent's continuous world position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The last tile the agent stood on exactly.
    #[inline]
    pub fn current_tile(&self) -> TilePos {
        self.current_tile
    }

    /// The waypoint being walked towards, if a walk is in progress.
    pub fn target_tile(&self) -> Option<TilePos> {
        self.state.active_step().map(|s| s.tile)
    }

    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        !self.state.is_idle()
    }

    /// Waypoints not yet reached, the active one first.
    pub fn remaining_waypoints(&self) -> Vec<TilePos> {
        self.state.remaining().iter().map(|s| s.tile).collect()
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Where the agent stands when on `tile`: the projected tile plus the
    /// draw offset, lifted to the top of the tallest obstacle if there is one.
    pub fn standing_point(&self, tile: TilePos, obstacles: &dyn ObstacleQuery) -> Vec3 {
        let mut point = self.config.tile.agent_anchor(tile, self.config.agent);
        if let Some(top) = obstacles.tallest_at(tile) {
            point.z = top.top_height;
        }
        point
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Teleport the agent onto `tile` without routing.  Bumps the generation,
    /// so any walk in flight is superseded.
    pub fn place(&mut self, tile: TilePos, obstacles: &dyn ObstacleQuery) {
        self.supersede();
        self.generation = self.generation.next();
        self.current_tile = tile;
        self.position = self.standing_point(tile, obstacles);
    }

    /// Walk to `goal` using the pathfinder's own unreachable policy.
    pub fn move_to(
        &mut self,
        goal: TilePos,
        grid: &HeightGrid,
        obstacles: &dyn ObstacleQuery,
    ) -> Option<MoveTicket> {
        let policy = self.pathfinder.unreachable_policy();
        self.move_to_with(goal, grid, obstacles, policy)
    }

    /// Walk to `goal`, choosing what happens if it cannot be reached.
    ///
    /// Routing starts from the tile being walked towards when a walk is in
    /// flight, otherwise from the current tile.  Returns `None` and leaves
    /// any current walk untouched if there is no route (or an empty one).
    pub fn move_to_with(
        &mut self,
        goal: TilePos,
        grid: &HeightGrid,
        obstacles: &dyn ObstacleQuery,
        policy: UnreachablePolicy,
    ) -> Option<MoveTicket> {
        let start = self.target_tile().unwrap_or(self.current_tile);
        let route = self.pathfinder.find_path_with(start, goal, grid, obstacles, policy)?;

        let mut waypoints = route.waypoints;
        if waypoints.first() == Some(&start) {
            waypoints.remove(0);
        }
        let destination = *waypoints.last()?;

        self.supersede();
        self.generation = self.generation.next();
        let steps: Vec<WalkStep> = waypoints
            .iter()
            .map(|&tile| WalkStep { tile, point: self.standing_point(tile, obstacles) })
            .collect();
        let ticket = MoveTicket {
            generation:   self.generation,
            goal,
            destination,
            waypoints:    steps.len(),
            reached_goal: route.reached_goal,
        };
        debug!(
            generation = %self.generation,
            %start,
            %goal,
            %destination,
            waypoints = steps.len(),
            reached_goal = route.reached_goal,
            "walk started"
        );
        self.state = MovementState::Following { steps, index: 0, generation: self.generation };
        Some(ticket)
    }

    /// Re-snap the agent after the grid or the obstacles changed: onto the
    /// suitable tile nearest its current tile, with its position recomputed.
    /// Any walk in flight is superseded.
    pub fn resettle(&mut self, grid: &HeightGrid, obstacles: &dyn ObstacleQuery) -> MotionResult<TilePos> {
        let from = self.current_tile;
        let tile = find_suitable_tile(grid, obstacles, from, from, self.config.agent);
        if !is_valid_tile(grid, tile) {
            warn!(%from, "no tile to resettle the agent on");
            return Err(MotionError::NoStandingTile);
        }
        self.place(tile, obstacles);
        debug!(%from, to = %tile, generation = %self.generation, "agent resettled");
        Ok(tile)
    }

    /// How the walk behind `ticket` is doing.
    pub fn status(&self, ticket: &MoveTicket) -> WalkStatus {
        if ticket.generation.is_stale(self.generation) {
            WalkStatus::Superseded
        } else if self.is_moving() {
            WalkStatus::Walking
        } else {
            WalkStatus::Arrived
        }
    }

    // ── Frame step ────────────────────────────────────────────────────────

    /// Move the agent by one frame of length `delta`.
    ///
    /// Snaps exactly onto the active waypoint when it is within
    /// `speed × delta`; otherwise moves that far straight towards it.  A
    /// negative or non-finite `delta` counts as zero.
    pub fn advance(&mut self, delta: f64) -> StepEvent {
        let MovementState::Following { steps, index, generation } = &mut self.state else {
            return StepEvent::Idle;
        };
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let step = steps[*index];
        let generation = *generation;

        let offset = step.point - self.position;
        let speed = step_speed(
            &self.config.movement,
            offset,
            self.position.z - step.point.z,
            self.config.tile.height,
        );
        let reach = speed * delta;

        if offset.magnitude() > reach {
            self.position = self.position + offset.normalize().scale(reach);
            return StepEvent::Moving;
        }

        self.position = step.point;
        self.current_tile = step.tile;
        let reached = *index;
        if reached + 1 < steps.len() {
            *index += 1;
            trace!(%generation, tile = %step.tile, index = reached, "waypoint reached");
            return StepEvent::WaypointReached { tile: step.tile, index: reached, generation };
        }

        self.state = MovementState::Idle;
        debug!(%generation, tile = %step.tile, "walk arrived");
        StepEvent::Arrived { tile: step.tile, generation }
    }

    /// Drop the walk in flight, if any.
    fn supersede(&mut self) {
        if let MovementState::Following { generation, .. } = &self.state {
            debug!(generation = %generation, at = %self.current_tile, "walk superseded");
            self.state = MovementState::Idle;
        }
    }
}
