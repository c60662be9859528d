//! CSV trace backend.
//!
//! Creates `trace.csv` in the configured output directory.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::debug;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

/// Column names, in write order.
pub const TRACE_HEADER: [&str; 8] = ["tick", "x", "y", "z", "tile_x", "tile_y", "tile_z", "event"];

/// Writes a walk trace to `trace.csv`.
pub struct CsvTraceWriter {
    rows:     Writer<File>,
    path:     PathBuf,
    written:  u64,
    finished: bool,
}

impl CsvTraceWriter {
    /// Create (or truncate) `trace.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join("trace.csv");
        let mut rows = Writer::from_path(&path)?;
        rows.write_record(TRACE_HEADER)?;
        debug!(path = %path.display(), "opened trace file");
        Ok(Self { rows, path, written: 0, finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rows written so far, header excluded.
    pub fn rows_written(&self) -> u64 {
        self.written
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.rows.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.x),
            format!("{:.3}", row.y),
            format!("{:.3}", row.z),
            row.tile_x.to_string(),
            row.tile_y.to_string(),
            row.tile_z.to_string(),
            row.event.as_str().to_string(),
        ])?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.rows.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        debug!(path = %self.path.display(), rows = self.written, "closed trace file");
        Ok(())
    }
}
