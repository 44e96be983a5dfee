//! Streams every cell-state change of a breadth-first run to stdout with a
//! short delay between steps, the terminal cousin of the animated canvas.

use std::time::Duration;

use grid_search_viz::{
    Algorithm, CancelToken, Cell, Coord, SearchRunner, StepPace, VisualizationSink,
};

struct StdoutSink;

impl VisualizationSink for StdoutSink {
    fn on_cell_changed(&mut self, cell: Cell) {
        println!("{} -> {}", cell.coord, cell.state.glyph());
    }

    fn on_run_complete(&mut self, found: bool) {
        println!("done, path found: {found}");
    }
}

fn main() {
    let mut runner = SearchRunner::new(6, 6).unwrap();
    runner.draw_wall(Coord::new(2, 2));
    runner.draw_wall(Coord::new(3, 2));
    runner.draw_wall(Coord::new(2, 3));
    runner.place_endpoint(Coord::new(0, 0));
    runner.place_endpoint(Coord::new(5, 5));

    let pace = StepPace::new(Duration::from_millis(40), CancelToken::new());
    runner
        .run_search(Algorithm::Dijkstra, &mut StdoutSink, &pace)
        .unwrap();
    println!("{}", runner.grid());
}
