//! Isometric projection between grid space and world space.
//!
//! ```text
//!   world.x = (grid.x − grid.y) · width / 2
//!   world.y = (grid.x + grid.y) · height / 2
//!   world.z =  grid.z · height
//! ```
//!
//! The inverse is exact for integer grid inputs: each world coordinate is an
//! exact multiple of a half tile and IEEE division of an exact multiple yields
//! the exact quotient, so `world_to_grid(grid_to_world(p)) == p` holds
//! without rounding.

use crate::{AgentDims, TilePos, Vec3};

/// Fixed tile geometry in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileGeometry {
    /// Rhombus width of one tile on screen.
    pub width: f64,
    /// Rhombus height of one tile; also the world height of one grid level.
    pub height: f64,
    /// Slab thickness added on top of a tile's level to get its walking surface.
    pub thickness: f64,
}

impl Default for TileGeometry {
    fn default() -> Self {
        Self { width: 64.0, height: 32.0, thickness: 8.0 }
    }
}

impl TileGeometry {
    #[inline]
    fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    #[inline]
    fn half_height(&self) -> f64 {
        self.height / 2.0
    }

    /// Project a (possibly fractional) grid point into world space.
    pub fn project(&self, grid: Vec3) -> Vec3 {
        Vec3::new(
            (grid.x - grid.y) * self.half_width(),
            (grid.x + grid.y) * self.half_height(),
            grid.z * self.height,
        )
    }

    /// Inverse of [`project`][Self::project].
    pub fn unproject(&self, world: Vec3) -> Vec3 {
        let x = world.x / self.half_width();
        let y = world.y / self.half_height();
        Vec3::new((x + y) / 2.0, (y - x) / 2.0, world.z / self.height)
    }

    #[inline]
    pub fn grid_to_world(&self, tile: TilePos) -> Vec3 {
        self.project(tile.as_vec3())
    }

    #[inline]
    pub fn world_to_grid(&self, world: Vec3) -> Vec3 {
        self.unproject(world)
    }

    /// The tile whose projected origin is nearest to `world`.
    pub fn world_to_tile(&self, world: Vec3) -> TilePos {
        let g = self.unproject(world);
        TilePos::new(g.x.round() as i32, g.y.round() as i32, g.z.round() as i32)
    }

    /// World-space height of the walking surface of a tile at level `z`.
    #[inline]
    pub fn tile_surface(&self, z: i32) -> f64 {
        z as f64 * self.height + self.thickness
    }

    /// Draw-anchor offset of an agent standing on a tile: centred horizontally
    /// on the rhombus and pushed half a tile down.
    #[inline]
    pub fn agent_offset(&self, agent: AgentDims) -> Vec3 {
        Vec3::new(self.half_width() - agent.width, self.half_height(), 0.0)
    }

    /// The agent's world position when standing on `tile` with no obstacle.
    pub fn agent_anchor(&self, tile: TilePos, agent: AgentDims) -> Vec3 {
        self.grid_to_world(tile) + self.agent_offset(agent)
    }
}
