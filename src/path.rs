//! Path reconstruction over a finished [ParentMap].

use crate::cell::Coord;
use crate::engine::ParentMap;

/// Walks parent links back from `finish` and returns the interior of the
/// path in start-to-finish order, with both endpoints trimmed off.
///
/// Returns an empty vector when `finish` was never discovered, or when the
/// endpoints are adjacent and the path has no interior.
pub fn reconstruct<C: Copy>(parents: &ParentMap<C>, start: Coord, finish: Coord) -> Vec<Coord> {
    let Some(finish_index) = parents.index_of(&finish) else {
        return Vec::new();
    };
    // The root entry carries a sentinel parent index, so the walk ends one
    // step past the start.
    let chain = itertools::unfold(finish_index, |current| {
        parents.entry_at(*current).map(|(coord, parent, _)| {
            *current = parent;
            coord
        })
    })
    .collect::<Vec<Coord>>();
    chain
        .into_iter()
        .rev()
        .filter(|&coord| coord != start && coord != finish)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::StepPace;
    use crate::cell::CellState;
    use crate::engine::{run, Algorithm, SearchOutcome};
    use crate::grid::Grid;
    use crate::sink::NullSink;

    fn solved_parents(grid: &mut Grid) -> ParentMap {
        let outcome = run(Algorithm::Dijkstra, grid, &mut NullSink, &StepPace::instant()).unwrap();
        match outcome {
            SearchOutcome::Found(parents) => parents,
            _ => panic!("expected a path"),
        }
    }

    #[test]
    fn missing_finish_yields_an_empty_path() {
        let mut grid = Grid::build(3, 3).unwrap();
        grid.set_start(Coord::new(0, 0));
        grid.set_finish(Coord::new(2, 2));
        let parents = solved_parents(&mut grid);
        let path = reconstruct(&parents, Coord::new(0, 0), Coord::new(99, 99));
        assert!(path.is_empty());
    }

    #[test]
    fn endpoints_are_trimmed() {
        let mut grid = Grid::build(3, 3).unwrap();
        grid.set_start(Coord::new(0, 0));
        grid.set_finish(Coord::new(2, 2));
        let parents = solved_parents(&mut grid);
        let path = reconstruct(&parents, Coord::new(0, 0), Coord::new(2, 2));
        assert!(!path.contains(&Coord::new(0, 0)));
        assert!(!path.contains(&Coord::new(2, 2)));
        assert_eq!(path.len(), 3);
        // Consecutive interior cells are four-connected.
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }
    }

    #[test]
    fn adjacent_endpoints_yield_an_empty_interior() {
        let mut grid = Grid::build(3, 3).unwrap();
        grid.set_start(Coord::new(0, 0));
        grid.set_finish(Coord::new(1, 0));
        let parents = solved_parents(&mut grid);
        let path = reconstruct(&parents, Coord::new(0, 0), Coord::new(1, 0));
        assert!(path.is_empty());
    }

    #[test]
    fn walls_shape_the_reconstructed_path() {
        let mut grid = Grid::build(3, 3).unwrap();
        grid.set_start(Coord::new(0, 0));
        grid.set_finish(Coord::new(2, 0));
        grid.set_wall(Coord::new(1, 0));
        grid.set_wall(Coord::new(1, 1));
        let parents = solved_parents(&mut grid);
        let path = reconstruct(&parents, Coord::new(0, 0), Coord::new(2, 0));
        assert_eq!(
            path,
            vec![
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
                Coord::new(2, 1),
            ]
        );
        assert!(path.iter().all(|&c| grid.state(c) != Some(CellState::Wall)));
    }
}
