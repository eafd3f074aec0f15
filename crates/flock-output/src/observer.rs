//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use flock_agent::Species;
use flock_core::{PredatorId, PreyId, Tick, Vec2};
use flock_sim::{Flock, PredatorGroup, SimObserver};

use crate::row::{AgentSnapshotRow, RemovalRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes agent snapshots and predation removals to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, call [`finish`][Self::finish] and
/// then check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Flush the underlying writer.  The run has no terminal tick, so the
    /// driver decides when output is complete.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_prey_eaten(&mut self, tick: Tick, prey: PreyId, position: Vec2, by: PredatorId) {
        let row = RemovalRow {
            tick:        tick.0,
            prey_id:     prey.0,
            predator_id: by.0,
            x:           position.x,
            y:           position.y,
        };
        let result = self.writer.write_removal(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, flock: &Flock, predators: &PredatorGroup) {
        let rows: Vec<AgentSnapshotRow> = flock
            .iter()
            .map(|(id, body)| AgentSnapshotRow {
                tick:     tick.0,
                species:  Species::Prey,
                agent_id: id.0,
                x:        body.position.x,
                y:        body.position.y,
                radius:   body.radius,
            })
            .chain(predators.iter().map(|(id, body)| AgentSnapshotRow {
                tick:     tick.0,
                species:  Species::Predator,
                agent_id: id.0,
                x:        body.position.x,
                y:        body.position.y,
                radius:   body.radius,
            }))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }
}
