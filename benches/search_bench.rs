use astar_trace::{CancelToken, CellGrid, Point, SearchEngine};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

const N: usize = 64;

fn painted_grid(start: Point, end: Point) -> CellGrid {
    let mut grid = CellGrid::new(N, N, 640);
    grid.cell_at_mut(start).unwrap().mark_start();
    grid.cell_at_mut(end).unwrap().mark_end();
    grid
}

/// Serpentine maze: every other column is a wall with an alternating gap,
/// forcing the longest possible detours.
fn serpentine_grid(start: Point, end: Point) -> CellGrid {
    let mut grid = painted_grid(start, end);
    for x in (1..N as i32).step_by(2) {
        let gap = if (x / 2) % 2 == 0 { N as i32 - 1 } else { 0 };
        for y in 0..N as i32 {
            let p = Point::new(x, y);
            if y != gap && p != start && p != end {
                grid.cell_at_mut(p).unwrap().mark_barrier();
            }
        }
    }
    grid
}

fn search_benches(c: &mut Criterion) {
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    let engine = SearchEngine::new();

    let mut open = painted_grid(start, end);
    open.recompute_neighbors();
    c.bench_function(format!("open {N}x{N}").as_str(), |b| {
        b.iter_batched(
            || open.clone(),
            |mut grid| {
                black_box(engine.run(&mut grid, start, end, |_| {}, &CancelToken::new()))
            },
            BatchSize::SmallInput,
        )
    });

    let mut maze = serpentine_grid(start, end);
    maze.recompute_neighbors();
    c.bench_function(format!("serpentine {N}x{N}").as_str(), |b| {
        b.iter_batched(
            || maze.clone(),
            |mut grid| {
                black_box(engine.run(&mut grid, start, end, |_| {}, &CancelToken::new()))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, search_benches);
criterion_main!(benches);
