//! Fluent builder for constructing a [`Session`].

use std::path::Path;

use tracing::info;
use tw_core::{NavConfig, TilePos, UnreachablePolicy};
use tw_motion::MovementExecutor;
use tw_spatial::{AStarPathfinder, HeightGrid, ObstacleMap, Pathfinder, load_grid_csv};

use crate::{Session, SimResult};

/// Fluent builder for [`Session<P>`].
///
/// # Required inputs
///
/// - [`NavConfig`] — tile geometry, agent size, speeds, policy, frame delta
/// - [`HeightGrid`] — the room to walk in
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                   |
/// |-------------------|-------------------------------------------|
/// | `.obstacles(m)`   | Empty `ObstacleMap`                       |
/// | `.door(tile)`     | `(0, 0, 0)`                               |
/// | `.policy(p)`      | `config.unreachable`                      |
/// | `.pathfinder(p)`  | `AStarPathfinder::from_config(&config)`   |
///
/// The unreachable policy lives on the pathfinder; `config.unreachable` only
/// seeds the default one and is kept in step by `.policy` and `.pathfinder`.
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(config, grid)
///     .obstacles(obstacles)
///     .door(TilePos::new(3, 0, 0))
///     .build()?;
/// ```
pub struct SessionBuilder<P: Pathfinder = AStarPathfinder> {
    config:     NavConfig,
    grid:       HeightGrid,
    obstacles:  ObstacleMap,
    door:       Option<TilePos>,
    pathfinder: P,
}

impl SessionBuilder<AStarPathfinder> {
    /// Create a builder using the default A* pathfinder.
    pub fn new(config: NavConfig, grid: HeightGrid) -> Self {
        let pathfinder = AStarPathfinder::from_config(&config);
        Self { config, grid, obstacles: ObstacleMap::new(), door: None, pathfinder }
    }

    /// Load the grid from a CSV file and the config from an optional TOML
    /// file (defaults otherwise).
    pub fn from_files(config: Option<&Path>, grid: &Path) -> SimResult<Self> {
        let config = match config {
            Some(path) => NavConfig::load(path)?,
            None => NavConfig::default(),
        };
        let grid = load_grid_csv(grid)?;
        Ok(Self::new(config, grid))
    }

    /// Override the unreachable-goal policy for both the config and the
    /// default pathfinder.
    pub fn policy(mut self, policy: UnreachablePolicy) -> Self {
        self.config.unreachable = policy;
        self.pathfinder = self.pathfinder.with_policy(policy);
        self
    }
}

impl<P: Pathfinder> SessionBuilder<P> {
    /// Start with these obstacles instead of an empty map.
    pub fn obstacles(mut self, obstacles: ObstacleMap) -> Self {
        self.obstacles = obstacles;
        self
    }

    /// Preferred spawn tile.  The agent is placed elsewhere if it cannot
    /// stand there.
    pub fn door(mut self, door: TilePos) -> Self {
        self.door = Some(door);
        self
    }

    /// Replace the pathfinder.  Its own unreachable policy becomes the
    /// session's policy.
    pub fn pathfinder<Q: Pathfinder>(mut self, pathfinder: Q) -> SessionBuilder<Q> {
        self.config.unreachable = pathfinder.unreachable_policy();
        SessionBuilder {
            config:    self.config,
            grid:      self.grid,
            obstacles: self.obstacles,
            door:      self.door,
            pathfinder,
        }
    }

    /// Validate the config, spawn the agent and return a ready-to-run
    /// [`Session`].
    pub fn build(self) -> SimResult<Session<P>> {
        self.config.validate()?;
        let walker = MovementExecutor::spawn(
            self.pathfinder,
            self.config,
            &self.grid,
            &self.obstacles,
            self.door,
        )?;
        info!(
            tiles = self.grid.tile_count(),
            obstacles = self.obstacles.len(),
            spawn = %walker.current_tile(),
            policy = %walker.config().unreachable,
            "session ready"
        );
        Ok(Session::new(self.grid, self.obstacles, walker))
    }
}
