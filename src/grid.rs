use core::fmt;

use smallvec::SmallVec;

use crate::cell::{Cell, CellState, Coord};
use crate::error::SearchError;
use crate::{DEFAULT_DIM, MAX_DIM, MIN_DIM, N_NEIGHBOURS};

/// A rectangular field of cells with at most one start and one finish.
///
/// The grid owns all cell state; the search engine mutates it through
/// [apply](Grid::apply_state)-style transitions that respect the essential-cell
/// invariant, and the presentation layer edits it through the named mutators.
/// Adjacency is 4-connected, enumerated west, east, north, south, with
/// [Wall](CellState::Wall) cells filtered out.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    start: Option<Coord>,
    finish: Option<Coord>,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::with_dimensions(DEFAULT_DIM, DEFAULT_DIM)
    }
}

impl Grid {
    /// Builds an all-[Open](CellState::Open) grid, rejecting dimensions
    /// outside `[MIN_DIM, MAX_DIM]`.
    pub fn build(rows: usize, cols: usize) -> Result<Grid, SearchError> {
        if !(MIN_DIM..=MAX_DIM).contains(&rows) || !(MIN_DIM..=MAX_DIM).contains(&cols) {
            return Err(SearchError::InvalidDimension { rows, cols });
        }
        Ok(Grid::with_dimensions(rows, cols))
    }

    /// Builds a grid after clamping both sides into bounds, the recovery an
    /// interactive boundary applies instead of surfacing
    /// [InvalidDimension](SearchError::InvalidDimension).
    pub fn build_clamped(rows: usize, cols: usize) -> Grid {
        Grid::with_dimensions(rows.clamp(MIN_DIM, MAX_DIM), cols.clamp(MIN_DIM, MAX_DIM))
    }

    fn with_dimensions(rows: usize, cols: usize) -> Grid {
        Grid {
            rows,
            cols,
            cells: vec![CellState::Open; rows * cols],
            start: None,
            finish: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.col >= 0
            && coord.row >= 0
            && (coord.col as usize) < self.cols
            && (coord.row as usize) < self.rows
    }

    fn ix(&self, coord: Coord) -> usize {
        debug_assert!(self.in_bounds(coord));
        coord.row as usize * self.cols + coord.col as usize
    }

    pub fn state(&self, coord: Coord) -> Option<CellState> {
        self.in_bounds(coord).then(|| self.cells[self.ix(coord)])
    }

    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.state(coord).map(|state| Cell::new(coord, state))
    }

    /// All cells in row-major order, for rendering.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(ix, &state)| {
            let coord = Coord::new((ix % self.cols) as i32, (ix / self.cols) as i32);
            Cell::new(coord, state)
        })
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn finish(&self) -> Option<Coord> {
        self.finish
    }

    /// Both endpoints, if both are placed.
    pub fn endpoints(&self) -> Option<(Coord, Coord)> {
        self.start.zip(self.finish)
    }

    /// Passable adjacent cells in the fixed west, east, north, south order.
    /// Out-of-bounds and [Wall](CellState::Wall) coordinates are omitted.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; N_NEIGHBOURS]> {
        let Coord { col, row } = coord;
        [
            Coord::new(col - 1, row),
            Coord::new(col + 1, row),
            Coord::new(col, row - 1),
            Coord::new(col, row + 1),
        ]
        .into_iter()
        .filter(|&c| self.in_bounds(c) && self.cells[self.ix(c)] != CellState::Wall)
        .collect()
    }

    /// Applies a transient state transition, returning the updated cell when
    /// it took effect. Transitions of `Frontier`, `Explored` or `Path` onto a
    /// `Start` or `Finish` cell are a no-op, as is re-applying the current
    /// state.
    pub(crate) fn apply_state(&mut self, coord: Coord, state: CellState) -> Option<Cell> {
        let ix = self.ix(coord);
        let current = self.cells[ix];
        let protects = matches!(current, CellState::Start | CellState::Finish);
        let transient = matches!(
            state,
            CellState::Frontier | CellState::Explored | CellState::Path
        );
        if (protects && transient) || current == state {
            return None;
        }
        self.cells[ix] = state;
        Some(Cell::new(coord, state))
    }

    /// Makes `coord` the start cell, demoting any previous start to
    /// [Open](CellState::Open). Returns the displaced coordinate so the
    /// caller can re-render it. Out-of-bounds coordinates are ignored.
    pub fn set_start(&mut self, coord: Coord) -> Option<Coord> {
        self.set_endpoint(coord, CellState::Start)
    }

    /// Counterpart of [set_start](Grid::set_start) for the finish cell.
    pub fn set_finish(&mut self, coord: Coord) -> Option<Coord> {
        self.set_endpoint(coord, CellState::Finish)
    }

    fn set_endpoint(&mut self, coord: Coord, role: CellState) -> Option<Coord> {
        if !self.in_bounds(coord) {
            return None;
        }
        let (own, other) = match role {
            CellState::Start => (&mut self.start, &mut self.finish),
            _ => (&mut self.finish, &mut self.start),
        };
        let previous = own.take();
        if *other == Some(coord) {
            *other = None;
        }
        if let Some(prev) = previous {
            let ix = self.ix(prev);
            self.cells[ix] = CellState::Open;
        }
        let ix = self.ix(coord);
        self.cells[ix] = role;
        match role {
            CellState::Start => self.start = Some(coord),
            _ => self.finish = Some(coord),
        }
        previous.filter(|&p| p != coord)
    }

    /// Turns `coord` into a wall. A wall painted over an endpoint removes
    /// that endpoint. Returns whether the cell changed.
    pub fn set_wall(&mut self, coord: Coord) -> bool {
        if !self.in_bounds(coord) {
            return false;
        }
        if self.start == Some(coord) {
            self.start = None;
        }
        if self.finish == Some(coord) {
            self.finish = None;
        }
        let ix = self.ix(coord);
        let changed = self.cells[ix] != CellState::Wall;
        self.cells[ix] = CellState::Wall;
        changed
    }

    /// Reopens a wall cell. Cells in any other state are left alone.
    pub fn clear_wall(&mut self, coord: Coord) -> bool {
        if !self.in_bounds(coord) {
            return false;
        }
        let ix = self.ix(coord);
        if self.cells[ix] != CellState::Wall {
            return false;
        }
        self.cells[ix] = CellState::Open;
        true
    }

    /// Resets every non-essential cell to [Open](CellState::Open), keeping
    /// walls and endpoints. Returns the coordinates that changed so the
    /// caller can re-render them.
    pub fn soft_reset(&mut self) -> Vec<Coord> {
        let mut changed = Vec::new();
        for ix in 0..self.cells.len() {
            let state = self.cells[ix];
            if !state.essential() && state != CellState::Open {
                self.cells[ix] = CellState::Open;
                changed.push(Coord::new(
                    (ix % self.cols) as i32,
                    (ix / self.cols) as i32,
                ));
            }
        }
        changed
    }

    /// Rebuilds the grid from scratch with new dimensions, clearing walls and
    /// endpoints.
    pub fn hard_reset(&mut self, rows: usize, cols: usize) -> Result<(), SearchError> {
        *self = Grid::build(rows, cols)?;
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let coord = Coord::new(col as i32, row as i32);
                write!(f, "{}", self.cells[self.ix(coord)].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
