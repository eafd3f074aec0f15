//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `removals.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, RemovalRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    removals:  Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["tick", "species", "agent_id", "x", "y", "radius"])?;

        let mut removals = Writer::from_path(dir.join("removals.csv"))?;
        removals.write_record(["tick", "prey_id", "predator_id", "x", "y"])?;

        Ok(Self {
            snapshots,
            removals,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.species.to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.radius.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_removal(&mut self, row: &RemovalRow) -> OutputResult<()> {
        self.removals.write_record(&[
            row.tick.to_string(),
            row.prey_id.to_string(),
            row.predator_id.to_string(),
            row.x.to_string(),
            row.y.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.removals.flush()?;
        Ok(())
    }
}
