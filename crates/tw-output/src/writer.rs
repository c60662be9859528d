//! The `TraceWriter` trait implemented by trace backends.

use crate::{OutputResult, TraceRow};

/// Sink for trace rows.
///
/// The observer never sees these errors directly; they are stored and
/// retrieved with [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Append one row.
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Push buffered rows to the underlying sink.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
