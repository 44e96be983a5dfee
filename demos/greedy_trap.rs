//! A corridor layout where greedy best-first overshoots while Dijkstra and
//! A* keep the detour minimal.

use grid_search_viz::{Algorithm, Coord, NullSink, SearchResult, SearchRunner, StepPace};

fn main() {
    let mut runner = SearchRunner::new(4, 9).unwrap();
    for (col, row) in [
        (2, 0),
        (6, 0),
        (0, 1),
        (2, 1),
        (4, 1),
        (6, 1),
        (8, 1),
        (0, 2),
        (4, 2),
        (8, 2),
        (0, 3),
        (8, 3),
    ] {
        runner.draw_wall(Coord::new(col, row));
    }
    runner.place_endpoint(Coord::new(0, 0));
    runner.place_endpoint(Coord::new(8, 0));

    for algorithm in [
        Algorithm::GreedyBestFirst,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ] {
        let result = runner
            .run_search(algorithm, &mut NullSink, &StepPace::instant())
            .unwrap();
        let SearchResult::Found(interior) = result else {
            unreachable!("the trap grid is connected");
        };
        println!("{algorithm}: {} interior cells", interior.len());
        println!("{}", runner.grid());
    }
}
