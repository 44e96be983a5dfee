use core::fmt;

/// A grid coordinate in `(col, row)` form.
///
/// The derived [Ord] orders by `col` first and `row` second. This ordering is
/// load-bearing: it is the tie-break rule used by the best-first frontier, so
/// exploration order is reproducible across runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub fn new(col: i32, row: i32) -> Coord {
        Coord { col, row }
    }

    /// `|Δcol| + |Δrow|`, the heuristic used by greedy best-first and A*.
    pub fn manhattan_distance(&self, other: Coord) -> i32 {
        (self.col - other.col).abs() + (self.row - other.row).abs()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The closed set of states a cell can be in.
///
/// The first four are placed by the user; [Frontier](CellState::Frontier),
/// [Explored](CellState::Explored) and [Path](CellState::Path) are transient
/// markings applied during a run and wiped by a soft reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Open,
    Start,
    Finish,
    Wall,
    Frontier,
    Explored,
    Path,
}

impl CellState {
    /// Essential cells hold a user-placed role that transient search markings
    /// must never overwrite.
    pub fn essential(&self) -> bool {
        matches!(self, CellState::Start | CellState::Finish | CellState::Wall)
    }

    /// Single-character rendering used by the ASCII [Grid](crate::Grid) display.
    pub fn glyph(&self) -> char {
        match self {
            CellState::Open => '.',
            CellState::Start => 'S',
            CellState::Finish => 'F',
            CellState::Wall => '#',
            CellState::Frontier => '+',
            CellState::Explored => 'o',
            CellState::Path => '*',
        }
    }
}

/// One grid unit: a coordinate plus its current state.
///
/// Equality, hashing and ordering consider the coordinate only, so a cell can
/// be tracked across state changes.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub coord: Coord,
    pub state: CellState,
}

impl Cell {
    pub fn new(coord: Coord, state: CellState) -> Cell {
        Cell { coord, state }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl std::hash::Hash for Cell {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.coord.cmp(&other.coord)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?}", self.coord, self.state)
    }
}
