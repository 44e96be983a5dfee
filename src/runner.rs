//! The orchestration layer a frontend drives: grid editing, run lifecycle
//! and result reporting, with every visual side effect routed through one
//! [VisualizationSink].

use log::debug;

use crate::cancel::StepPace;
use crate::cell::{CellState, Coord};
use crate::engine::{self, Algorithm, SearchOutcome};
use crate::error::SearchError;
use crate::grid::Grid;
use crate::path;
use crate::sink::VisualizationSink;

/// Outcome of one completed [SearchRunner::run_search] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    /// A path exists; carries its interior, endpoints trimmed.
    Found(Vec<Coord>),
    /// The reachable region was exhausted without touching the finish.
    NotFound,
    /// The run was cancelled mid-flight; the grid keeps whatever marks were
    /// applied before the stop.
    Cancelled,
}

/// Owns a [Grid] and runs searches over it.
///
/// Endpoint placement alternates: the first placement sets the start, the
/// next the finish, and so on, mirroring click-to-place editing.
#[derive(Clone, Debug)]
pub struct SearchRunner {
    grid: Grid,
    place_start_next: bool,
}

impl Default for SearchRunner {
    fn default() -> SearchRunner {
        SearchRunner::from_grid(Grid::default())
    }
}

impl SearchRunner {
    pub fn new(rows: usize, cols: usize) -> Result<SearchRunner, SearchError> {
        Ok(SearchRunner::from_grid(Grid::build(rows, cols)?))
    }

    /// Clamps out-of-range dimensions instead of failing.
    pub fn new_clamped(rows: usize, cols: usize) -> SearchRunner {
        SearchRunner::from_grid(Grid::build_clamped(rows, cols))
    }

    fn from_grid(grid: Grid) -> SearchRunner {
        SearchRunner {
            grid,
            place_start_next: true,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Places the next endpoint in the alternation at `coord`, returning the
    /// coordinate of a displaced previous endpoint, if any. Out-of-bounds
    /// placements are ignored and do not advance the alternation.
    pub fn place_endpoint(&mut self, coord: Coord) -> Option<Coord> {
        if !self.grid.in_bounds(coord) {
            return None;
        }
        let displaced = if self.place_start_next {
            self.grid.set_start(coord)
        } else {
            self.grid.set_finish(coord)
        };
        self.place_start_next = !self.place_start_next;
        displaced
    }

    /// Direct start placement, bypassing the alternation.
    pub fn set_start(&mut self, coord: Coord) -> Option<Coord> {
        self.grid.set_start(coord)
    }

    /// Direct finish placement, bypassing the alternation.
    pub fn set_finish(&mut self, coord: Coord) -> Option<Coord> {
        self.grid.set_finish(coord)
    }

    pub fn draw_wall(&mut self, coord: Coord) -> bool {
        self.grid.set_wall(coord)
    }

    pub fn erase_wall(&mut self, coord: Coord) -> bool {
        self.grid.clear_wall(coord)
    }

    /// Clears the marks of a previous run, reporting each reopened cell to
    /// the sink. Walls and endpoints stay.
    pub fn clear_run<S>(&mut self, sink: &mut S)
    where
        S: VisualizationSink + ?Sized,
    {
        for coord in self.grid.soft_reset() {
            if let Some(cell) = self.grid.cell(coord) {
                sink.on_cell_changed(cell);
            }
        }
    }

    /// Replaces the grid with a fresh one, clamping out-of-range dimensions
    /// into bounds, and restarts the endpoint alternation.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.grid = Grid::build_clamped(rows, cols);
        self.place_start_next = true;
    }

    /// Runs `algorithm` over the current grid: clears the previous run's
    /// marks, floods, then traces the found path cell by cell at the same
    /// pace.
    ///
    /// `on_run_complete` fires exactly once per non-cancelled run; a
    /// cancelled run ends silently with [SearchResult::Cancelled].
    pub fn run_search<S>(
        &mut self,
        algorithm: Algorithm,
        sink: &mut S,
        pace: &StepPace,
    ) -> Result<SearchResult, SearchError>
    where
        S: VisualizationSink + ?Sized,
    {
        let (start, finish) = self.grid.endpoints().ok_or(SearchError::MissingEndpoints)?;
        self.clear_run(sink);
        debug!("running {algorithm} from {start} to {finish}");
        match engine::run(algorithm, &mut self.grid, sink, pace)? {
            SearchOutcome::Cancelled => Ok(SearchResult::Cancelled),
            SearchOutcome::NotFound => {
                sink.on_run_complete(false);
                Ok(SearchResult::NotFound)
            }
            SearchOutcome::Found(parents) => {
                let interior = path::reconstruct(&parents, start, finish);
                for &coord in &interior {
                    if !pace.pause() {
                        return Ok(SearchResult::Cancelled);
                    }
                    if let Some(cell) = self.grid.apply_state(coord, CellState::Path) {
                        sink.on_cell_changed(cell);
                    }
                }
                sink.on_run_complete(true);
                Ok(SearchResult::Found(interior))
            }
        }
    }

    /// [run_search](SearchRunner::run_search) keyed by the UI-facing
    /// algorithm name.
    pub fn run_search_named<S>(
        &mut self,
        name: &str,
        sink: &mut S,
        pace: &StepPace,
    ) -> Result<SearchResult, SearchError>
    where
        S: VisualizationSink + ?Sized,
    {
        self.run_search(name.parse()?, sink, pace)
    }
}
