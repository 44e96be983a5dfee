//! # grid_search_viz
//!
//! The search core of an interactive grid pathfinding visualizer. A user
//! paints [Wall](CellState::Wall) cells and two endpoints on a rectangular
//! grid; one of four frontier-expansion algorithms (depth-first,
//! breadth-first / unit-cost Dijkstra, greedy best-first or
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)) then floods the
//! grid, reporting every cell-state transition to a [VisualizationSink] so a
//! presentation layer can animate the exploration and the reconstructed path.
//!
//! The grid is 4-connected with unit edge cost. Exploration order is fully
//! deterministic: neighbours are enumerated west, east, north, south, and
//! priority-queue ties are broken by ascending `(col, row)` coordinate order.
pub mod cancel;
pub mod cell;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod path;
pub mod runner;
pub mod sink;

use std::time::Duration;

pub use cancel::{CancelToken, StepPace};
pub use cell::{Cell, CellState, Coord};
pub use engine::{Algorithm, ParentMap, SearchOutcome};
pub use error::SearchError;
pub use grid::Grid;
pub use runner::{SearchResult, SearchRunner};
pub use sink::{NullSink, RecordingSink, VisualizationSink};

/// Smallest accepted grid side length.
pub const MIN_DIM: usize = 3;
/// Largest accepted grid side length.
pub const MAX_DIM: usize = 100;
/// Side length used when no dimensions are given.
pub const DEFAULT_DIM: usize = 5;
/// Pause applied between search steps unless overridden.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// A cell has at most this many passable neighbours on a 4-connected grid.
pub const N_NEIGHBOURS: usize = 4;
