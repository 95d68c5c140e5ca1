//! The search engine: A* over a [CellGrid] with a render callback and
//! cooperative cancellation.

use grid_util::point::Point;
use log::info;
use smallvec::SmallVec;
use std::rc::Rc;

use crate::astar::{astar_observed, SearchEvent, SearchRun};
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::grid::CellGrid;

/// Cooperative cancellation flag shared between the caller and a running
/// search.
///
/// The whole system runs on one logical thread (the grid, the engine and the
/// render callback), so the flag is a plain shared cell rather than an
/// atomic. Clone the token, hand one copy to [SearchEngine::run], and call
/// [cancel](Self::cancel) from inside the render callback; the engine polls
/// it once per iteration.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Rc<std::cell::Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// Requests that the running search stop at its next iteration.
    pub fn cancel(&self) {
        self.flag.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.get()
    }
}

/// How a search run ended.
///
/// Cancellation is a distinct outcome: an interrupted run never claims
/// "no path found", and a true negative is not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest route exists. Holds the full start-to-end point sequence;
    /// the cells between the endpoints are left marked as path.
    PathFound(Vec<Point>),
    /// The open set was exhausted without reaching the end cell. Explored
    /// cells keep their frontier/visited marks; no cell is marked as path.
    NoPath,
    /// The caller raised the cancellation token mid-search. The grid keeps
    /// whatever exploration marks were made so far; endpoints are intact.
    Interrupted,
}

impl SearchOutcome {
    pub fn path_found(&self) -> bool {
        matches!(self, SearchOutcome::PathFound(_))
    }
}

/// A* driver over a [CellGrid].
///
/// The engine is stateless: score maps, open set and parent links are all
/// scoped to a single [run](Self::run) call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchEngine;

impl SearchEngine {
    pub fn new() -> SearchEngine {
        SearchEngine
    }

    /// Searches a shortest unit-cost route from `start` to `end` over the
    /// grid's cached adjacency, mutating cell states as it explores and
    /// invoking `on_step` after every expansion and after every path cell
    /// marked during reconstruction.
    ///
    /// The caller must have called
    /// [recompute_neighbors](CellGrid::recompute_neighbors) after the last
    /// barrier edit; the adjacency is snapshotted on entry and stale lists
    /// are a caller bug. Endpoint preconditions are validated first and
    /// reported as [SearchError]s, never as a negative search result.
    ///
    /// The Manhattan heuristic with the `(f, enqueue serial)` priority key
    /// makes the expansion order, the final painting and the number of
    /// `on_step` invocations fully deterministic for a given grid.
    pub fn run<F>(
        &self,
        grid: &mut CellGrid,
        start: Point,
        end: Point,
        mut on_step: F,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&CellGrid),
    {
        for endpoint in [start, end] {
            if !grid.in_bounds(endpoint) {
                return Err(SearchError::EndpointOffGrid(
                    endpoint,
                    grid.width(),
                    grid.height(),
                ));
            }
        }
        if start == end {
            return Err(SearchError::IdenticalEndpoints(start));
        }
        for endpoint in [start, end] {
            if grid.cell(endpoint).is_barrier() {
                return Err(SearchError::EndpointBlocked(endpoint));
            }
        }

        // Pin the adjacency the caller prepared; the observer below needs
        // the exclusive borrow of the grid for cell marking.
        let adjacency = grid.neighbor_snapshot();
        let width = grid.width();
        let ix = move |p: &Point| p.y as usize * width + p.x as usize;

        let run = astar_observed(
            &start,
            |node| {
                adjacency[ix(node)]
                    .iter()
                    .map(|&p| (p, 1))
                    .collect::<SmallVec<[(Point, i32); 4]>>()
            },
            |node| manhattan(node, &end),
            |node| *node == end,
            |event| match event {
                SearchEvent::Queued(&p) => {
                    // The end cell keeps its end state while queued; the
                    // start cell can never be re-queued (its score is 0).
                    if p != end {
                        grid.cell_mut(p).mark_frontier();
                    }
                }
                SearchEvent::Expanded(&p) => {
                    on_step(grid);
                    // Closed after the redraw, so the new color shows up on
                    // the next frame. The start cell keeps its state.
                    if p != start {
                        grid.cell_mut(p).mark_visited();
                    }
                }
            },
            || cancel.is_cancelled(),
        );

        match run {
            SearchRun::Found(path, cost) => {
                debug_assert_eq!(path.len() as i32, cost + 1);
                info!("found a {} step path from {} to {}", cost, start, end);
                // Walk back from the end, overdrawing the exploration marks
                // one cell per redraw.
                for &p in path[1..path.len() - 1].iter().rev() {
                    grid.cell_mut(p).mark_path();
                    on_step(grid);
                }
                Ok(SearchOutcome::PathFound(path))
            }
            SearchRun::Exhausted => {
                info!("open set exhausted: {} cannot be reached from {}", end, start);
                Ok(SearchOutcome::NoPath)
            }
            SearchRun::Interrupted => {
                info!("search from {} to {} interrupted by caller", start, end);
                Ok(SearchOutcome::Interrupted)
            }
        }
    }
}
