//! `TraceObserver<W>` — bridges `WalkObserver` to a `TraceWriter`.

use tw_core::{Tick, TilePos, Vec3};
use tw_sim::WalkObserver;

use crate::row::{TraceEvent, TraceRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`WalkObserver`] that writes one row per moving frame plus one per
/// waypoint and arrival to any [`TraceWriter`].
///
/// Errors from the writer are stored internally because `WalkObserver`
/// methods have no return value.  Check them with
/// [`take_error`][Self::take_error] or [`finish`][Self::finish].
pub struct TraceObserver<W: TraceWriter> {
    writer:        W,
    /// Write a `move` row only every this many frames.  Waypoint and arrival
    /// rows are always written.
    move_interval: u64,
    last_position: Vec3,
    last_error:    Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            move_interval: 1,
            last_position: Vec3::ZERO,
            last_error:    None,
        }
    }

    /// Thin out `move` rows to one every `n` frames (`0` is treated as `1`).
    pub fn with_move_interval(mut self, n: u64) -> Self {
        self.move_interval = n.max(1);
        self
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Report the first stored error, otherwise close the writer.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn write(&mut self, row: TraceRow) {
        let result = self.writer.write_row(&row);
        self.store_err(result);
    }
}

impl<W: TraceWriter> WalkObserver for TraceObserver<W> {
    fn on_position(&mut self, tick: Tick, position: Vec3, tile: TilePos) {
        self.last_position = position;
        if tick.0.is_multiple_of(self.move_interval) {
            self.write(TraceRow::new(tick, position, tile, TraceEvent::Move));
        }
    }

    fn on_waypoint(&mut self, tick: Tick, tile: TilePos, _index: usize) {
        self.write(TraceRow::new(tick, self.last_position, tile, TraceEvent::Waypoint));
    }

    fn on_arrival(&mut self, tick: Tick, tile: TilePos) {
        self.write(TraceRow::new(tick, self.last_position, tile, TraceEvent::Arrive));
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
