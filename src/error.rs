//! Error types for the grid and the search engine.
//!
//! Precondition failures are kept apart from negative search results: a
//! search that finds no route reports [`SearchOutcome::NoPath`]
//! (crate::SearchOutcome::NoPath), never an error.

use grid_util::point::Point;
use thiserror::Error;

/// Errors raised by coordinate queries on a [`CellGrid`](crate::CellGrid).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The queried position lies outside the grid bounds. Caller bug,
    /// surfaced immediately rather than clamped.
    #[error("position {0} is outside the {1}x{2} grid")]
    OutOfRange(Point, usize, usize),
}

/// Precondition failures of [`SearchEngine::run`](crate::SearchEngine::run).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Start and end refer to the same cell.
    #[error("start and end must be distinct cells (both are {0})")]
    IdenticalEndpoints(Point),

    /// An endpoint does not lie on the grid.
    #[error("endpoint {0} is outside the {1}x{2} grid")]
    EndpointOffGrid(Point, usize, usize),

    /// An endpoint is a barrier cell.
    #[error("endpoint {0} is a barrier cell")]
    EndpointBlocked(Point),
}
