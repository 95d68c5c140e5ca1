use astar_trace::{CancelToken, CellGrid, Point, SearchEngine};

// Two runs that do not end in a path, and how they differ:
// a sealed end cell exhausts the open set (NoPath), while a cancellation
// raised from inside the render callback interrupts the run (Interrupted).
fn main() {
    env_logger::init();

    let start = Point::new(0, 0);
    let end = Point::new(8, 4);
    let mut grid = CellGrid::new(10, 10, 400);
    grid.cell_at_mut(start).unwrap().mark_start();
    grid.cell_at_mut(end).unwrap().mark_end();
    for p in [
        Point::new(7, 4),
        Point::new(9, 4),
        Point::new(8, 3),
        Point::new(8, 5),
    ] {
        grid.cell_at_mut(p).unwrap().mark_barrier();
    }
    grid.recompute_neighbors();
    println!("painting:\n{grid}");

    let engine = SearchEngine::new();
    let outcome = engine
        .run(&mut grid, start, end, |_| {}, &CancelToken::new())
        .expect("valid endpoints");
    println!("sealed end: {outcome:?}\n{grid}");

    // Same painting, but the callback pulls the plug after five frames.
    grid.clear_trace();
    let cancel = CancelToken::new();
    let signal = cancel.clone();
    let mut frames = 0;
    let outcome = engine
        .run(
            &mut grid,
            start,
            end,
            |_| {
                frames += 1;
                if frames == 5 {
                    signal.cancel();
                }
            },
            &cancel,
        )
        .expect("valid endpoints");
    println!("cancelled after {frames} frames: {outcome:?}");
}
