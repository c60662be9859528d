//! CSV height-grid loader.
//!
//! # CSV format
//!
//! No header.  One line per grid row `x`; each field is the height of the
//! tile at `(x, y)` with `y` counting from zero.  `-1` marks a missing tile
//! and lines may differ in length.
//!
//! ```csv
//! 0,0,0,0
//! 0,1,1,0
//! 0,1,-1
//! ```

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::grid::HeightGrid;
use crate::SpatialError;

/// Load a [`HeightGrid`] from a CSV file.
pub fn load_grid_csv(path: &Path) -> Result<HeightGrid, SpatialError> {
    let file = std::fs::File::open(path)?;
    let grid = load_grid_reader(file)?;
    debug!(path = %path.display(), rows = grid.width(), tiles = grid.tile_count(), "loaded height grid");
    Ok(grid)
}

/// Like [`load_grid_csv`] but accepts any `Read` source.
pub fn load_grid_reader<R: Read>(reader: R) -> Result<HeightGrid, SpatialError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut heights = Vec::with_capacity(record.len());
        for (col, field) in record.iter().enumerate() {
            let h: i32 = field.parse().map_err(|_| SpatialError::Parse {
                row,
                msg: format!("column {col}: {field:?} is not an integer height"),
            })?;
            if h < HeightGrid::ABSENT {
                return Err(SpatialError::Parse {
                    row,
                    msg: format!("column {col}: height {h} is below -1"),
                });
            }
            heights.push(h);
        }
        rows.push(heights);
    }
    Ok(HeightGrid::new(rows))
}
