//! Runs A* over a small walled grid and prints the marked result.

use grid_search_viz::{Algorithm, Coord, NullSink, SearchResult, SearchRunner, StepPace};

fn main() {
    let mut runner = SearchRunner::new(8, 12).unwrap();
    for col in 3..10 {
        runner.draw_wall(Coord::new(col, 3));
    }
    for row in 3..7 {
        runner.draw_wall(Coord::new(3, row));
    }
    runner.place_endpoint(Coord::new(1, 6));
    runner.place_endpoint(Coord::new(10, 1));

    let result = runner
        .run_search(Algorithm::AStar, &mut NullSink, &StepPace::instant())
        .unwrap();
    println!("{}", runner.grid());
    match result {
        SearchResult::Found(interior) => println!("path interior: {} cells", interior.len()),
        SearchResult::NotFound => println!("no path"),
        SearchResult::Cancelled => println!("cancelled"),
    }
}
