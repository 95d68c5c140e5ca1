//! # astar_trace
//!
//! The search core of an interactive grid pathfinding visualizer. A user
//! paints start, end and barrier cells on a [CellGrid]; [SearchEngine::run]
//! then computes a shortest route with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over unit-cost
//! 4-directional movement, mutating cell states as it explores and invoking
//! a caller-supplied render callback after every expansion step, so the
//! search can be drawn frame by frame.
//!
//! The [Manhattan](https://en.wikipedia.org/wiki/Taxicab_geometry) heuristic
//! is admissible and consistent for this movement model, and the open set is
//! ordered by `(f score, enqueue serial)`, which makes every run fully
//! deterministic. Searches are cooperatively cancellable through a
//! [CancelToken] polled once per iteration; cancellation is reported as
//! [SearchOutcome::Interrupted], distinct from [SearchOutcome::NoPath].
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! when adjacency is rebuilt, so shells and tests can answer reachability
//! questions without running a search.

pub mod astar;
pub mod cell;
pub mod distance;
pub mod engine;
pub mod error;
pub mod grid;

pub use cell::{Cell, CellState};
pub use engine::{CancelToken, SearchEngine, SearchOutcome};
pub use error::{GridError, SearchError};
pub use grid::CellGrid;

pub use grid_util::point::Point;
