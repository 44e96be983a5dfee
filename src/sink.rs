//! The event interface between the search core and a presentation layer.
//!
//! The engine calls a [VisualizationSink] synchronously at every cell-state
//! transition, always after the grid has been mutated, so the sink never
//! observes a stale state. Events are never buffered or batched.

use crate::cell::{Cell, CellState, Coord};

/// Step-event callbacks implemented by the presentation layer.
pub trait VisualizationSink {
    /// A cell changed state; `cell.state` is the state it now holds.
    fn on_cell_changed(&mut self, cell: Cell);

    /// The run finished normally; `found` tells whether a path exists.
    /// Not called when a run is cancelled.
    fn on_run_complete(&mut self, found: bool);
}

/// Discards all events; useful for headless runs and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl VisualizationSink for NullSink {
    fn on_cell_changed(&mut self, _cell: Cell) {}

    fn on_run_complete(&mut self, _found: bool) {}
}

/// Records every event in order, mainly for asserting exploration order and
/// event counts in tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Cell>,
    pub completions: Vec<bool>,
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    /// Number of recorded transitions into `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.events.iter().filter(|c| c.state == state).count()
    }

    /// Coordinates that transitioned into `state`, in event order.
    pub fn coords_in(&self, state: CellState) -> Vec<Coord> {
        self.events
            .iter()
            .filter(|c| c.state == state)
            .map(|c| c.coord)
            .collect()
    }
}

impl VisualizationSink for RecordingSink {
    fn on_cell_changed(&mut self, cell: Cell) {
        self.events.push(cell);
    }

    fn on_run_complete(&mut self, found: bool) {
        self.completions.push(found);
    }
}
