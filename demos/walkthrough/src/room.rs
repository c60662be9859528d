//! The built-in room used when no grid file is given.

use rand::Rng;
use rand::rngs::SmallRng;
use tw_core::{TileGeometry, TilePos};
use tw_spatial::{HeightGrid, ObstacleMap};

pub const ROOM_SIZE: usize = 12;

/// A 12 × 12 room: a two-step dais in the middle, a trench cutting off the
/// south-east corner and a missing tile by the door.
pub fn build_grid() -> HeightGrid {
    let mut rows = vec![vec![0; ROOM_SIZE]; ROOM_SIZE];
    for (x, row) in rows.iter_mut().enumerate() {
        for (y, h) in row.iter_mut().enumerate() {
            let dais = (4..=7).contains(&x) && (4..=7).contains(&y);
            let top = (5..=6).contains(&x) && (5..=6).contains(&y);
            if top {
                *h = 2;
            } else if dais {
                *h = 1;
            }
            if x == 9 || (y == 9 && x > 9) {
                *h = -1;
            }
        }
    }
    rows[1][0] = -1;
    HeightGrid::new(rows)
}

/// Scatter `count` crates over the floor, avoiding `keep_clear`.  About one
/// in four is too narrow to stand on.
pub fn scatter_crates(
    grid: &HeightGrid,
    geometry: &TileGeometry,
    rng: &mut SmallRng,
    count: usize,
    keep_clear: &[TilePos],
) -> ObstacleMap {
    let tiles: Vec<TilePos> = grid
        .tiles()
        .filter(|t| !keep_clear.iter().any(|k| k.same_column(*t)))
        .collect();
    let mut map = ObstacleMap::new();
    if tiles.is_empty() {
        return map;
    }
    for _ in 0..count {
        let t = tiles[rng.gen_range(0..tiles.len())];
        let size = if rng.gen_ratio(1, 4) { 12.0 } else { 32.0 };
        let base = map.top_of(t.x, t.y).unwrap_or_else(|| geometry.tile_surface(t.z));
        map.stack(t.x, t.y, base, size);
    }
    map
}
