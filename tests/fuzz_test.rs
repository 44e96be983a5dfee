//! Randomized cross-checks between the four algorithms on small grids.

use grid_search_viz::{
    Algorithm, CellState, Coord, RecordingSink, SearchResult, SearchRunner, StepPace,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRIALS: usize = 200;
const DIM: usize = 8;
const WALL_RATE: f64 = 0.35;

fn random_runner(rng: &mut StdRng) -> SearchRunner {
    let mut runner = SearchRunner::new(DIM, DIM).unwrap();
    let start = Coord::new(0, 0);
    let finish = Coord::new(DIM as i32 - 1, DIM as i32 - 1);
    for row in 0..DIM as i32 {
        for col in 0..DIM as i32 {
            let coord = Coord::new(col, row);
            if coord != start && coord != finish && rng.gen_bool(WALL_RATE) {
                runner.draw_wall(coord);
            }
        }
    }
    runner.place_endpoint(start);
    runner.place_endpoint(finish);
    runner
}

fn run(
    runner: &mut SearchRunner,
    algorithm: Algorithm,
) -> (Option<usize>, usize) {
    let mut sink = RecordingSink::new();
    let result = runner
        .run_search(algorithm, &mut sink, &StepPace::instant())
        .unwrap();
    let interior = match result {
        SearchResult::Found(interior) => Some(interior.len()),
        SearchResult::NotFound => None,
        SearchResult::Cancelled => panic!("no cancellation in this test"),
    };
    (interior, sink.count(CellState::Explored))
}

#[test]
fn algorithms_agree_on_random_grids() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for trial in 0..TRIALS {
        let mut runner = random_runner(&mut rng);
        let layout = runner.grid().to_string();

        let (astar, astar_explored) = run(&mut runner, Algorithm::AStar);
        let (bfs, bfs_explored) = run(&mut runner, Algorithm::Dijkstra);
        let (dfs, _) = run(&mut runner, Algorithm::DepthFirst);
        let (greedy, _) = run(&mut runner, Algorithm::GreedyBestFirst);

        // Reachability is a property of the grid, not the algorithm.
        assert_eq!(
            astar.is_some(),
            bfs.is_some(),
            "trial {trial}\n{layout}"
        );
        assert_eq!(bfs.is_some(), dfs.is_some(), "trial {trial}\n{layout}");
        assert_eq!(bfs.is_some(), greedy.is_some(), "trial {trial}\n{layout}");

        if let (Some(astar), Some(bfs)) = (astar, bfs) {
            assert_eq!(astar, bfs, "trial {trial}\n{layout}");
        }
        if let (Some(dfs), Some(bfs)) = (dfs, bfs) {
            assert!(dfs >= bfs, "trial {trial}\n{layout}");
        }
        if let (Some(greedy), Some(bfs)) = (greedy, bfs) {
            assert!(greedy >= bfs, "trial {trial}\n{layout}");
        }
        assert!(
            astar_explored <= bfs_explored,
            "trial {trial}: {astar_explored} > {bfs_explored}\n{layout}"
        );
    }
}

#[test]
fn optimal_lengths_match_manhattan_on_open_grids() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    for _ in 0..20 {
        let rows = rng.gen_range(3..=12);
        let cols = rng.gen_range(3..=12);
        let mut runner = SearchRunner::new(rows, cols).unwrap();
        let start = Coord::new(
            rng.gen_range(0..cols as i32),
            rng.gen_range(0..rows as i32),
        );
        let finish = Coord::new(
            rng.gen_range(0..cols as i32),
            rng.gen_range(0..rows as i32),
        );
        if start == finish {
            continue;
        }
        runner.place_endpoint(start);
        runner.place_endpoint(finish);
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let (interior, _) = run(&mut runner, algorithm);
            assert_eq!(
                interior.map(|len| len as i32 + 1),
                Some(start.manhattan_distance(finish)),
                "{algorithm} on {rows}x{cols} {start}->{finish}"
            );
        }
    }
}
