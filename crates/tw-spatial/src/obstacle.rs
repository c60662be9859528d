//! Stacked obstacles and the query contract the pathfinder consumes.
//!
//! An obstacle is anything stacked on a tile with its own footprint and top
//! surface (a crate, a cube, a piece of furniture).  Only the tallest one in
//! a column matters for navigation: its top decides how high the agent
//! stands there, its footprint decides whether the agent fits on it at all.

use rustc_hash::FxHashMap;
use tw_core::TilePos;

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// One stacked object, in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    /// World-space height of the obstacle's top surface.
    pub top_height: f64,
    /// Edge length of the obstacle's footprint.
    pub footprint: f64,
}

impl Obstacle {
    pub fn new(top_height: f64, footprint: f64) -> Self {
        Self { top_height, footprint }
    }

    /// A cube of edge `size` resting on a surface at world height `base`.
    pub fn cube(base: f64, size: f64) -> Self {
        Self { top_height: base + size, footprint: size }
    }

    /// `true` if an agent of footprint `width` cannot stand on this obstacle.
    #[inline]
    pub fn is_narrower_than(&self, width: f64) -> bool {
        self.footprint < width
    }
}

// ── ObstacleQuery ─────────────────────────────────────────────────────────────

/// Read-only obstacle provider, keyed by a tile's `(x, y)` column.
///
/// Implement this over whatever the host keeps its scene objects in; the
/// pathfinder and the movement executor only ever ask for the tallest one.
pub trait ObstacleQuery {
    /// The obstacle with the highest top surface in `tile`'s column, if any.
    fn tallest_at(&self, tile: TilePos) -> Option<Obstacle>;

    /// `true` if any obstacle occupies `tile`'s column.
    fn is_occupied(&self, tile: TilePos) -> bool {
        self.tallest_at(tile).is_some()
    }
}

impl<T: ObstacleQuery + ?Sized> ObstacleQuery for &T {
    fn tallest_at(&self, tile: TilePos) -> Option<Obstacle> {
        (**self).tallest_at(tile)
    }
}

/// A provider with no obstacles anywhere.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObstacles;

impl ObstacleQuery for NoObstacles {
    #[inline]
    fn tallest_at(&self, _tile: TilePos) -> Option<Obstacle> {
        None
    }
}

// ── ObstacleMap ───────────────────────────────────────────────────────────────

/// In-memory obstacle store: one stack per `(x, y)` column, bottom first.
#[derive(Clone, Debug, Default)]
pub struct ObstacleMap {
    columns: FxHashMap<(i32, i32), Vec<Obstacle>>,
}

impl ObstacleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack a cube of edge `size` on column `(x, y)` whose bottom rests at
    /// world height `base`.  Returns the cube that was placed.
    pub fn stack(&mut self, x: i32, y: i32, base: f64, size: f64) -> Obstacle {
        let cube = Obstacle::cube(base, size);
        self.place(x, y, cube);
        cube
    }

    /// Push an arbitrary obstacle onto column `(x, y)`.
    pub fn place(&mut self, x: i32, y: i32, obstacle: Obstacle) {
        self.columns.entry((x, y)).or_default().push(obstacle);
    }

    /// Remove the most recently placed obstacle in column `(x, y)`.
    pub fn remove_top(&mut self, x: i32, y: i32) -> Option<Obstacle> {
        let stack = self.columns.get_mut(&(x, y))?;
        let removed = stack.pop();
        if stack.is_empty() {
            self.columns.remove(&(x, y));
        }
        removed
    }

    /// Remove every obstacle in column `(x, y)`, returning how many there were.
    pub fn clear_column(&mut self, x: i32, y: i32) -> usize {
        self.columns.remove(&(x, y)).map_or(0, |s| s.len())
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Obstacles in column `(x, y)`, bottom first.
    pub fn column(&self, x: i32, y: i32) -> &[Obstacle] {
        self.columns.get(&(x, y)).map_or(&[], Vec::as_slice)
    }

    /// Top surface of the highest obstacle in column `(x, y)`.
    pub fn top_of(&self, x: i32, y: i32) -> Option<f64> {
        self.tallest_at(TilePos::new(x, y, 0)).map(|o| o.top_height)
    }

    /// Total number of obstacles across all columns.
    pub fn len(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl ObstacleQuery for ObstacleMap {
    fn tallest_at(&self, tile: TilePos) -> Option<Obstacle> {
        self.columns
            .get(&tile.column())?
            .iter()
            .copied()
            .max_by(|a, b| a.top_height.total_cmp(&b.top_height))
    }
}
