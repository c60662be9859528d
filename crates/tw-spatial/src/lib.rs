//! `tw-spatial` — height grid, obstacles, pathfinding, and placement.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`grid`]       | `HeightGrid` — jagged per-column tile heights (`-1` = absent) |
//! | [`obstacle`]   | `Obstacle`, `ObstacleQuery` trait, `ObstacleMap`, `NoObstacles` |
//! | [`node`]       | `PathNode` and the decrease-key-free search frontier          |
//! | [`pathfinder`] | `Pathfinder` trait, `AStarPathfinder`, `Route`, `find_path`   |
//! | [`placement`]  | `closest_valid`, tile validity and agent placement scans      |
//! | [`loader`]     | `load_grid_csv` / `load_grid_reader`                          |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Inputs are explicit
//!
//! Nothing in this crate holds a grid or an obstacle provider between calls.
//! Every search and scan takes `&HeightGrid` and `&dyn ObstacleQuery` as
//! arguments, so the host may swap either wholesale between commands.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod loader;
pub mod node;
pub mod obstacle;
pub mod pathfinder;
pub mod placement;


pub use error::{SpatialError, SpatialResult};
pub use grid::HeightGrid;
pub use loader::{load_grid_csv, load_grid_reader};
pub use obstacle::{NoObstacles, Obstacle, ObstacleMap, ObstacleQuery};
pub use pathfinder::{
    AStarPathfinder, Pathfinder, Route, find_path, resolved_height, route_cost, step_cost,
};
pub use placement::{
    closest_valid, find_initial_tile, find_suitable_tile, is_suitable_tile, is_valid_tile,
};
pub use tw_core::UnreachablePolicy;
