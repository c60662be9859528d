//! Pathfinding trait and the default A* implementation.
//!
//! # Pluggability
//!
//! The movement executor calls routing through the [`Pathfinder`] trait, so a
//! host can substitute another search (jump-point, flow fields, a scripted
//! test double) without touching the executor.  [`AStarPathfinder`] is the
//! default.
//!
//! # Search rules
//!
//! - 8-connected: neighbours are visited in the order W, E, N, S, NW, SE,
//!   SW, NE (`(-1,0) (1,0) (0,-1) (0,1) (-1,-1) (1,1) (-1,1) (1,-1)`).
//! - Step cost is `1` orthogonally and `√2` diagonally; height never adds
//!   cost.  The heuristic is the 3-D Euclidean distance in grid units.
//! - A neighbour is rejected when the tallest obstacle on it is narrower than
//!   the agent, when its resolved height exceeds the current node's by more
//!   than [`AgentDims::climb_limit`], or when a diagonal step would cut a
//!   corner whose two flanking cells are both blocked.
//! - When the goal cannot be reached the [`UnreachablePolicy`] decides whether
//!   a partial route is returned.

use tracing::{debug, trace};
use tw_core::{AgentDims, NavConfig, TileGeometry, TilePos, UnreachablePolicy};

use crate::grid::HeightGrid;
use crate::node::{Frontier, NodeIdx, PathNode};
use crate::obstacle::ObstacleQuery;
use crate::placement::is_valid_tile;

/// Neighbour offsets, in visiting order.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Where the search started.  Not part of `waypoints`.
    pub start: TilePos,
    /// Cells to walk through in order, ending at the goal (or at the best
    /// node the policy chose when the goal was unreachable).
    pub waypoints: Vec<TilePos>,
    /// Step-cost total along `waypoints`.
    pub total_cost: f64,
    /// `false` if this is a partial route towards an unreachable goal.
    pub reached_goal: bool,
    /// Number of nodes expanded by the search.
    pub expanded: usize,
}

impl Route {
    /// `true` if there is nothing to walk.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Last waypoint, or the start for an empty route.
    pub fn destination(&self) -> TilePos {
        self.waypoints.last().copied().unwrap_or(self.start)
    }
}

// ── Cost helpers ──────────────────────────────────────────────────────────────

/// Cost of one step between adjacent columns: `√2` for a diagonal, `1`
/// otherwise.
#[inline]
pub fn step_cost(from: TilePos, to: TilePos) -> f64 {
    if from.is_diagonal_to(to) { std::f64::consts::SQRT_2 } else { 1.0 }
}

/// Step-cost total of walking from `start` through every waypoint in order.
pub fn route_cost(start: TilePos, waypoints: &[TilePos]) -> f64 {
    let mut prev = start;
    let mut total = 0.0;
    for &wp in waypoints {
        total += step_cost(prev, wp);
        prev = wp;
    }
    total
}

/// Effective standing height at `tile` in world units: the tile's walking
/// surface or the top of the tallest obstacle there, whichever is higher.
pub fn resolved_height(tile: TilePos, obstacles: &dyn ObstacleQuery, geometry: &TileGeometry) -> f64 {
    let surface = geometry.tile_surface(tile.z);
    match obstacles.tallest_at(tile) {
        Some(o) => surface.max(o.top_height),
        None => surface,
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable path search.
pub trait Pathfinder {
    /// Policy used by [`find_path`][Self::find_path].
    fn unreachable_policy(&self) -> UnreachablePolicy {
        UnreachablePolicy::default()
    }

    /// Search from `start` to `goal`, applying `policy` if the goal turns out
    /// to be unreachable.
    ///
    /// Returns `None` if either endpoint is not a tile of `grid` at its
    /// stored height, if `start == goal`, or if the goal is unreachable and
    /// `policy` is [`UnreachablePolicy::Fail`].
    fn find_path_with(
        &self,
        start: TilePos,
        goal: TilePos,
        grid: &HeightGrid,
        obstacles: &dyn ObstacleQuery,
        policy: UnreachablePolicy,
    ) -> Option<Route>;

    /// Search using the pathfinder's own unreachable policy.
    fn find_path(
        &self,
        start: TilePos,
        goal: TilePos,
        grid: &HeightGrid,
        obstacles: &dyn ObstacleQuery,
    ) -> Option<Route> {
        self.find_path_with(start, goal, grid, obstacles, self.unreachable_policy())
    }
}

/// Search with the default agent, tile geometry and policy.
pub fn find_path(
    start: TilePos,
    goal: TilePos,
    grid: &HeightGrid,
    obstacles: &dyn ObstacleQuery,
) -> Option<Route> {
    AStarPathfinder::default().find_path(start, goal, grid, obstacles)
}

// ── AStarPathfinder ───────────────────────────────────────────────────────────

/// A* over the height grid for an agent of fixed size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AStarPathfinder {
    pub agent: AgentDims,
    pub tile: TileGeometry,
    pub policy: UnreachablePolicy,
}

impl AStarPathfinder {
    pub fn new(agent: AgentDims, tile: TileGeometry, policy: UnreachablePolicy) -> Self {
        Self { agent, tile, policy }
    }

    pub fn from_config(config: &NavConfig) -> Self {
        Self::new(config.agent, config.tile, config.unreachable)
    }

    pub fn with_policy(mut self, policy: UnreachablePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// `true` if the agent standing at height `from_height` may not step onto
    /// `to` (whose resolved height is `to_height`).
    fn is_occluded(
        &self,
        to: TilePos,
        from_height: f64,
        to_height: f64,
        obstacles: &dyn ObstacleQuery,
    ) -> bool {
        let too_narrow = obstacles
            .tallest_at(to)
            .is_some_and(|o| o.is_narrower_than(self.agent.width));
        too_narrow || to_height > from_height + self.agent.climb_limit()
    }

    /// Route the search's result through the policy and log a summary.
    fn finish(
        &self,
        frontier: &Frontier,
        end: Option<NodeIdx>,
        reached_goal: bool,
        start: TilePos,
        goal: TilePos,
    ) -> Option<Route> {
        let expanded = frontier.expanded();
        let Some(end) = end else {
            debug!(%start, %goal, expanded, "goal unreachable, no partial route");
            return None;
        };
        let mut waypoints = frontier.trace_back(end);
        waypoints.remove(0);
        let route = Route {
            start,
            total_cost: frontier.node(end).g_cost,
            waypoints,
            reached_goal,
            expanded,
        };
        debug!(
            %start,
            %goal,
            end = %route.destination(),
            expanded,
            created = frontier.created(),
            reached_goal,
            cost = route.total_cost,
            "path search finished"
        );
        Some(route)
    }
}

impl Pathfinder for AStarPathfinder {
    fn unreachable_policy(&self) -> UnreachablePolicy {
        self.policy
    }

    fn find_path_with(
        &self,
        start: TilePos,
        goal: TilePos,
        grid: &HeightGrid,
        obstacles: &dyn ObstacleQuery,
        policy: UnreachablePolicy,
    ) -> Option<Route> {
        if !is_valid_tile(grid, start) || !is_valid_tile(grid, goal) {
            trace!(%start, %goal, "rejected path request: endpoint is not a tile");
            return None;
        }
        if start == goal {
            trace!(%start, "rejected path request: start equals goal");
            return None;
        }

        let mut frontier = Frontier::new();
        let origin = frontier.push(PathNode::new(
            start,
            0.0,
            start.distance_to(goal),
            None,
            resolved_height(start, obstacles, &self.tile),
        ));

        // Lowest f-cost and lowest h-cost among expanded nodes.
        let mut lowest_f = origin;
        let mut lowest_h = origin;

        while let Some(idx) = frontier.pop() {
            let current = *frontier.node(idx);
            if current.f_cost < frontier.node(lowest_f).f_cost {
                lowest_f = idx;
            }
            if current.h_cost < frontier.node(lowest_h).h_cost {
                lowest_h = idx;
            }
            if current.position == goal {
                return self.finish(&frontier, Some(idx), true, start, goal);
            }

            for neighbour in neighbours(grid, current.position) {
                if frontier.is_closed(neighbour) {
                    continue;
                }
                let height = resolved_height(neighbour, obstacles, &self.tile);
                if self.is_occluded(neighbour, current.resolved_height, height, obstacles)
                    || cuts_corner(current.position, neighbour, grid, obstacles)
                {
                    continue;
                }
                let g = current.g_cost + step_cost(current.position, neighbour);
                let h = neighbour.distance_to(goal);
                if !frontier.improves(neighbour, g + h) {
                    continue;
                }
                frontier.push(PathNode::new(neighbour, g, h, Some(idx), height));
            }
        }

        let fallback = match policy {
            UnreachablePolicy::Fail => None,
            UnreachablePolicy::ClosestExplored => Some(lowest_f),
            UnreachablePolicy::NearestToGoal => Some(lowest_h),
        };
        // The start node alone is not a route.
        let fallback = fallback.filter(|&idx| idx != origin);
        self.finish(&frontier, fallback, false, start, goal)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Tiles adjacent to `pos` that exist in `grid`, at their stored heights.
fn neighbours(grid: &HeightGrid, pos: TilePos) -> impl Iterator<Item = TilePos> + '_ {
    NEIGHBOUR_OFFSETS
        .iter()
        .filter_map(move |&(dx, dy)| grid.tile_at(pos.x + dx, pos.y + dy))
}

/// `true` if a diagonal step `from → to` squeezes between two blocked cells.
/// A cell is blocked if it has no tile or holds any obstacle.
pub(crate) fn cuts_corner(
    from: TilePos,
    to: TilePos,
    grid: &HeightGrid,
    obstacles: &dyn ObstacleQuery,
) -> bool {
    if !from.is_diagonal_to(to) {
        return false;
    }
    let blocked = |x: i32, y: i32| match grid.tile_at(x, y) {
        Some(tile) => obstacles.is_occupied(tile),
        None => true,
    };
    blocked(to.x, from.y) && blocked(from.x, to.y)
}
