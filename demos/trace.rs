use astar_trace::{CancelToken, CellGrid, Point, SearchEngine, SearchOutcome};

// In this demo a path is traced around a wall on a grid with shape
// ............
// .....#......
// .....#......
// .S...#....E.
// .....#......
// ............
// S marks the start, E the end; every few frames the exploration state is
// printed the way a graphical shell would redraw it.
fn main() {
    env_logger::init();

    let mut grid = CellGrid::new(12, 12, 480);
    for y in 2..=9 {
        grid.cell_at_mut(Point::new(5, y)).unwrap().mark_barrier();
    }
    let start = Point::new(1, 6);
    let end = Point::new(10, 6);
    grid.cell_at_mut(start).unwrap().mark_start();
    grid.cell_at_mut(end).unwrap().mark_end();
    grid.recompute_neighbors();

    let mut frames = 0u32;
    let outcome = SearchEngine::new()
        .run(
            &mut grid,
            start,
            end,
            |g| {
                frames += 1;
                if frames % 20 == 0 {
                    println!("frame {frames}:\n{g}");
                }
            },
            &CancelToken::new(),
        )
        .expect("endpoints are painted on the grid");

    println!("final ({frames} frames):\n{grid}");
    match outcome {
        SearchOutcome::PathFound(path) => println!("shortest path takes {} steps", path.len() - 1),
        SearchOutcome::NoPath => println!("there is no path"),
        SearchOutcome::Interrupted => println!("search was interrupted"),
    }
}
