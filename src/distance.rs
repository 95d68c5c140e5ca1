//! Grid distance metric.

use grid_util::point::Point;

/// Manhattan (taxicab) distance between two grid positions.
///
/// This is the heuristic used by the search engine: for unit-cost
/// 4-directional movement it is admissible and consistent, so the first time
/// the end cell is popped its g score is already optimal.
pub fn manhattan(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
