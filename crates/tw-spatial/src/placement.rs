//! Tile validity and agent placement scans.
//!
//! All scans here are plain linear passes over the grid.  They run when an
//! agent is spawned or re-settled after the world changes, never inside a
//! search loop.

use tracing::trace;
use tw_core::{AgentDims, TilePos};

use crate::grid::HeightGrid;
use crate::obstacle::ObstacleQuery;

/// `true` if `tile` names a present cell of `grid` at exactly its stored
/// height.
#[inline]
pub fn is_valid_tile(grid: &HeightGrid, tile: TilePos) -> bool {
    let h = grid.height_at(tile.x, tile.y);
    h != HeightGrid::ABSENT && h == tile.z
}

/// The tile of `grid` nearest to `position`, excluding `position` itself.
///
/// A tile in the same `(x, y)` column always wins (it differs only in
/// height); otherwise the 3-D Euclidean distance decides, with the first
/// tile in scan order winning ties.  `None` if the grid has no other tile.
pub fn closest_valid(position: TilePos, grid: &HeightGrid) -> Option<TilePos> {
    let mut best: Option<(f64, TilePos)> = None;
    for tile in grid.tiles() {
        if tile == position {
            continue;
        }
        let priority = if tile.same_column(position) { 0.0 } else { position.distance_to(tile) };
        if best.is_none_or(|(p, _)| priority < p) {
            best = Some((priority, tile));
        }
    }
    best.map(|(_, tile)| tile)
}

/// `true` if the agent can stand on `tile`: it is valid and not topped by an
/// obstacle narrower than the agent.
pub fn is_suitable_tile(
    grid: &HeightGrid,
    obstacles: &dyn ObstacleQuery,
    tile: TilePos,
    agent: AgentDims,
) -> bool {
    is_valid_tile(grid, tile)
        && !obstacles
            .tallest_at(tile)
            .is_some_and(|o| o.is_narrower_than(agent.width))
}

/// The suitable tile nearest `preferred`, or `fallback` if none is.
pub fn find_suitable_tile(
    grid: &HeightGrid,
    obstacles: &dyn ObstacleQuery,
    fallback: TilePos,
    preferred: TilePos,
    agent: AgentDims,
) -> TilePos {
    let mut best: Option<(f64, TilePos)> = None;
    for tile in grid.tiles() {
        if !is_suitable_tile(grid, obstacles, tile, agent) {
            continue;
        }
        let d = preferred.distance_to(tile);
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, tile));
        }
    }
    best.map_or(fallback, |(_, tile)| tile)
}

/// Where to put a freshly spawned agent.
///
/// Uses `door` (default `(0, 0, 0)`) when the agent can stand there;
/// otherwise snaps to the closest valid tile and then to the nearest
/// suitable one.  `None` if the grid has no tile at all.
pub fn find_initial_tile(
    grid: &HeightGrid,
    obstacles: &dyn ObstacleQuery,
    door: Option<TilePos>,
    agent: AgentDims,
) -> Option<TilePos> {
    let door = door.unwrap_or_default();
    if is_suitable_tile(grid, obstacles, door, agent) {
        return Some(door);
    }
    let snapped = closest_valid(door, grid)
        .or_else(|| is_valid_tile(grid, door).then_some(door))?;
    let tile = find_suitable_tile(grid, obstacles, snapped, door, agent);
    trace!(%door, %snapped, %tile, "door tile unusable, placed elsewhere");
    Some(tile)
}
