//! The height grid.
//!
//! # Layout
//!
//! Heights are stored as `rows[x][y]`: the outer index is the grid `x`
//! coordinate and each row lists the heights along `y`.  Rows may differ in
//! length.  Any cell that is out of range or holds a negative value has no
//! tile; [`HeightGrid::height_at`] reports it as [`HeightGrid::ABSENT`].
//!
//! A grid is never edited in place while a search or a walk uses it; the
//! host builds a new `HeightGrid` and swaps it in between commands.

use tw_core::TilePos;

/// Integer tile heights per `(x, y)` column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightGrid {
    rows: Vec<Vec<i32>>,
}

impl HeightGrid {
    /// Height reported for cells with no tile.
    pub const ABSENT: i32 = -1;

    /// Wrap `rows[x][y]` heights.  Negative values mark absent tiles.
    pub fn new(rows: Vec<Vec<i32>>) -> Self {
        Self { rows }
    }

    /// A grid with no cells at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A rectangular `width × depth` grid with every tile at `height`.
    pub fn flat(width: usize, depth: usize, height: i32) -> Self {
        Self { rows: vec![vec![height; depth]; width] }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of rows (extent along `x`).
    pub fn width(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row (extent along `y`).
    pub fn depth(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// `true` if the grid holds no tile.
    pub fn is_empty(&self) -> bool {
        self.tiles().next().is_none()
    }

    /// Number of cells holding a tile.
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `(x, y)` lies inside the bounding rectangle of the grid
    /// (`width × depth`), whether or not a tile is present there.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.depth()
    }

    /// Tile height at `(x, y)`, or [`Self::ABSENT`] for out-of-range or
    /// absent cells.
    pub fn height_at(&self, x: i32, y: i32) -> i32 {
        if x < 0 || y < 0 {
            return Self::ABSENT;
        }
        match self.rows.get(x as usize).and_then(|row| row.get(y as usize)) {
            Some(&h) if h >= 0 => h,
            _ => Self::ABSENT,
        }
    }

    /// The tile standing at column `(x, y)`, if any.
    #[inline]
    pub fn tile_at(&self, x: i32, y: i32) -> Option<TilePos> {
        let z = self.height_at(x, y);
        (z != Self::ABSENT).then_some(TilePos::new(x, y, z))
    }

    /// Every tile in the grid, in `x`-major then `y` order.
    pub fn tiles(&self) -> impl Iterator<Item = TilePos> + '_ {
        self.rows.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &z)| z >= 0)
                .map(move |(y, &z)| TilePos::new(x as i32, y as i32, z))
        })
    }
}
