//! `tw-output` — walk trace writers for tilewalk sessions.
//!
//! | Backend | Files created |
//! |---------|---------------|
//! | CSV     | `trace.csv`   |
//!
//! Writers implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `tw_sim::WalkObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tw_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./out"))?;
//! let mut obs = TraceObserver::new(writer);
//! session.run_until_idle(10_000, &mut obs)?;
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{TraceEvent, TraceRow};
pub use writer::TraceWriter;
