//! `flock-output` — simulation output writers for the rust_flock simulation.
//!
//! The CSV backend creates two files in the configured directory:
//!
//! | File                  | One row per                                   |
//! |-----------------------|-----------------------------------------------|
//! | `agent_snapshots.csv` | live agent (prey and predator) per snapshot   |
//! | `removals.csv`        | prey eaten                                    |
//!
//! The backend implements [`OutputWriter`] and is driven by
//! [`SimOutputObserver`], which implements `flock_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_ticks(600, &mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, RemovalRow};
pub use writer::OutputWriter;
