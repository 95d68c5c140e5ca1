//! Fuzzes the engine on random grids: the outcome must agree with the
//! connected-component oracle, and every found path must be as short as a
//! plain breadth-first search says it can be.

use astar_trace::{CancelToken, CellGrid, Point, SearchEngine, SearchOutcome};
use rand::prelude::*;
use std::collections::VecDeque;

const N: usize = 10;
const N_GRIDS: usize = 500;
const BARRIER_DENSITY: f64 = 0.35;

fn random_grid(rng: &mut StdRng, start: Point, end: Point) -> CellGrid {
    let mut grid = CellGrid::new(N, N, 400);
    for y in 0..N as i32 {
        for x in 0..N as i32 {
            if rng.gen_bool(BARRIER_DENSITY) {
                grid.cell_at_mut(Point::new(x, y)).unwrap().mark_barrier();
            }
        }
    }
    grid.cell_at_mut(start).unwrap().reset();
    grid.cell_at_mut(end).unwrap().reset();
    grid.cell_at_mut(start).unwrap().mark_start();
    grid.cell_at_mut(end).unwrap().mark_end();
    grid.recompute_neighbors();
    grid
}

/// Unweighted shortest distance over the same cached adjacency the engine
/// searches, as an independent optimality reference.
fn bfs_distance(grid: &CellGrid, start: Point, end: Point) -> Option<usize> {
    let ix = |p: Point| p.y as usize * grid.width() + p.x as usize;
    let mut dist = vec![usize::MAX; grid.width() * grid.height()];
    let mut queue = VecDeque::new();
    dist[ix(start)] = 0;
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        if p == end {
            return Some(dist[ix(p)]);
        }
        for &n in grid.neighbors(p) {
            if dist[ix(n)] == usize::MAX {
                dist[ix(n)] = dist[ix(p)] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

#[test]
fn fuzz_against_bfs_and_components() {
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    let engine = SearchEngine::new();

    for _ in 0..N_GRIDS {
        let mut grid = random_grid(&mut rng, start, end);
        let reachable = grid.reachable(start, end);
        let reference = bfs_distance(&grid, start, end);
        assert_eq!(reference.is_some(), reachable);

        let outcome = engine
            .run(&mut grid, start, end, |_| {}, &CancelToken::new())
            .unwrap();
        // Show the grid if the engine disagrees with the oracle
        if outcome.path_found() != reachable {
            println!("{grid}");
        }
        assert_eq!(outcome.path_found(), reachable);

        if let SearchOutcome::PathFound(path) = outcome {
            let expected = reference.unwrap();
            if path.len() - 1 != expected {
                println!("{grid}");
            }
            assert_eq!(path.len() - 1, expected);
        }
    }
}

#[test]
fn fuzz_interior_endpoints() {
    let mut rng = StdRng::seed_from_u64(7);
    let engine = SearchEngine::new();

    for _ in 0..N_GRIDS / 5 {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if start == end {
            continue;
        }
        let mut grid = random_grid(&mut rng, start, end);
        let reference = bfs_distance(&grid, start, end);
        let outcome = engine
            .run(&mut grid, start, end, |_| {}, &CancelToken::new())
            .unwrap();
        match outcome {
            SearchOutcome::PathFound(path) => assert_eq!(Some(path.len() - 1), reference),
            SearchOutcome::NoPath => assert_eq!(reference, None),
            SearchOutcome::Interrupted => unreachable!("no cancellation requested"),
        }
    }
}
