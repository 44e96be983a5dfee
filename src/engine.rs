//! The shared frontier-expansion routine and the four algorithm variants.
//!
//! All four algorithms run the same skeleton: pop one cell per the frontier's
//! discipline, mark it [Explored](CellState::Explored), then discover its
//! unvisited passable neighbours in the fixed west/east/north/south order,
//! marking each [Frontier](CellState::Frontier) and recording its parent.
//! The variants differ only in the container discipline and the priority
//! function, as listed on [Algorithm].

use core::fmt;
use std::str::FromStr;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use log::info;
use num_traits::{One, Zero};

use crate::cancel::StepPace;
use crate::cell::{CellState, Coord};
use crate::error::SearchError;
use crate::frontier::{BestFirstFrontier, FifoFrontier, Frontier, FrontierNode, LifoFrontier};
use crate::grid::Grid;
use crate::sink::VisualizationSink;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Marks the root entry of a [ParentMap], which has no parent.
const NO_PARENT: usize = usize::MAX;

/// The four supported traversal algorithms, in the order a frontend's
/// selection dropdown lists them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Priority queue keyed `g + h`: optimal on this unit-cost grid since
    /// the Manhattan heuristic is admissible.
    AStar,
    /// Stack discipline; finds a path if one exists, not necessarily the
    /// shortest.
    DepthFirst,
    /// Queue discipline; equivalent to breadth-first search on a unit-weight
    /// grid, so path length is optimal.
    Dijkstra,
    /// Priority queue keyed `h` alone; ignores accumulated cost and may
    /// return a suboptimal path.
    GreedyBestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::AStar,
        Algorithm::DepthFirst,
        Algorithm::Dijkstra,
        Algorithm::GreedyBestFirst,
    ];

    /// The UI-facing name used for string dispatch at the boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::DepthFirst => "Depth First Search",
            Algorithm::Dijkstra => "Dijkstra's",
            Algorithm::GreedyBestFirst => "Greedy Breadth First Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| SearchError::UnknownAlgorithm(s.to_string()))
    }
}

/// Insertion-ordered map from each discovered cell to its parent's entry
/// index and its depth from the start. The start is seeded as the root, so
/// map membership doubles as the explored set.
#[derive(Clone, Debug)]
pub struct ParentMap<C = i32> {
    map: FxIndexMap<Coord, (usize, C)>,
}

impl<C: Copy> ParentMap<C> {
    fn new(root: Coord) -> ParentMap<C>
    where
        C: Zero,
    {
        let mut map = FxIndexMap::default();
        map.insert(root, (NO_PARENT, C::zero()));
        ParentMap { map }
    }

    fn insert(&mut self, coord: Coord, parent: usize, depth: C) -> usize {
        let (index, _) = self.map.insert_full(coord, (parent, depth));
        index
    }

    /// Number of discovered cells, the start included.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.map.contains_key(coord)
    }

    /// Depth from the start, if the cell was discovered.
    pub fn depth(&self, coord: &Coord) -> Option<C> {
        self.map.get(coord).map(|&(_, depth)| depth)
    }

    pub(crate) fn index_of(&self, coord: &Coord) -> Option<usize> {
        self.map.get_index_of(coord)
    }

    pub(crate) fn entry_at(&self, index: usize) -> Option<(Coord, usize, C)> {
        self.map
            .get_index(index)
            .map(|(coord, &(parent, depth))| (*coord, parent, depth))
    }
}

/// Terminal outcome of one engine run.
#[derive(Clone, Debug)]
pub enum SearchOutcome<C = i32> {
    /// The finish cell was assigned a parent; the map reaches from start to
    /// finish.
    Found(ParentMap<C>),
    /// The frontier emptied first. A normal outcome, not an error.
    NotFound,
    /// The cancel token tripped between steps. Already-applied markings are
    /// left as-is.
    Cancelled,
}

/// Runs one algorithm over the grid, driving cell-state transitions and sink
/// events until termination.
///
/// Fails with [MissingEndpoints](SearchError::MissingEndpoints), before any
/// mutation, unless both endpoints are set.
pub fn run<S>(
    algorithm: Algorithm,
    grid: &mut Grid,
    sink: &mut S,
    pace: &StepPace,
) -> Result<SearchOutcome, SearchError>
where
    S: VisualizationSink + ?Sized,
{
    let (start, finish) = grid.endpoints().ok_or(SearchError::MissingEndpoints)?;
    let outcome = match algorithm {
        Algorithm::DepthFirst => flood(
            grid,
            start,
            finish,
            sink,
            pace,
            LifoFrontier::default(),
            |_, _| 0,
        ),
        Algorithm::Dijkstra => flood(
            grid,
            start,
            finish,
            sink,
            pace,
            FifoFrontier::default(),
            |_, _| 0,
        ),
        Algorithm::GreedyBestFirst => flood(
            grid,
            start,
            finish,
            sink,
            pace,
            BestFirstFrontier::default(),
            |coord: &Coord, _| coord.manhattan_distance(finish),
        ),
        Algorithm::AStar => flood(
            grid,
            start,
            finish,
            sink,
            pace,
            BestFirstFrontier::default(),
            |coord: &Coord, depth| depth + coord.manhattan_distance(finish),
        ),
    };
    Ok(outcome)
}

/// The expansion skeleton shared by all four algorithms.
///
/// Each mutation is applied to the grid before the matching sink event is
/// emitted. A discovered cell is never re-discovered: there is no
/// decrease-key, matching the visualizer's one-pass semantics.
fn flood<C, F, P, S>(
    grid: &mut Grid,
    start: Coord,
    finish: Coord,
    sink: &mut S,
    pace: &StepPace,
    mut frontier: F,
    mut priority: P,
) -> SearchOutcome<C>
where
    C: Zero + One + Ord + Copy,
    F: Frontier<C>,
    P: FnMut(&Coord, C) -> C,
    S: VisualizationSink + ?Sized,
{
    let mut parents = ParentMap::new(start);
    let seed_priority = priority(&start, C::zero());
    frontier.push(
        FrontierNode {
            coord: start,
            index: 0,
            depth: C::zero(),
        },
        seed_priority,
    );
    let mut finish_found = false;
    while !frontier.is_empty() && !finish_found {
        if !pace.pause() {
            return SearchOutcome::Cancelled;
        }
        let Some(node) = frontier.pop() else {
            break;
        };
        if let Some(cell) = grid.apply_state(node.coord, CellState::Explored) {
            sink.on_cell_changed(cell);
        }
        for neighbour in grid.neighbours(node.coord) {
            if parents.contains(&neighbour) {
                continue;
            }
            if let Some(cell) = grid.apply_state(neighbour, CellState::Frontier) {
                sink.on_cell_changed(cell);
            }
            let depth = node.depth + C::one();
            let index = parents.insert(neighbour, node.index, depth);
            if neighbour == finish {
                finish_found = true;
            }
            let neighbour_priority = priority(&neighbour, depth);
            frontier.push(
                FrontierNode {
                    coord: neighbour,
                    index,
                    depth,
                },
                neighbour_priority,
            );
        }
    }
    if finish_found {
        SearchOutcome::Found(parents)
    } else {
        info!("frontier exhausted before reaching {finish}");
        SearchOutcome::NotFound
    }
}
