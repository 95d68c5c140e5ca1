//! [CellGrid] owns the cells, their cached adjacency and the connected
//! components used for reachability queries.

use core::fmt;

use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, CellState};
use crate::error::GridError;

/// Cached passable neighbors of one cell; 4-way adjacency fits inline.
pub(crate) type NeighborList = SmallVec<[Point; 4]>;

/// The four orthogonal directions, in the order neighbors are visited:
/// up, down, left, right.
const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A `width`×`height` grid of [Cell]s with cached 4-way adjacency.
///
/// Adjacency is index-based: each cell's neighbor list holds [Point]s that
/// are resolved through the grid at traversal time, so no cell ever
/// references another. The lists are rebuilt only by
/// [recompute_neighbors](Self::recompute_neighbors) — after editing barriers
/// the caller must invoke it before starting a search; the grid does not
/// self-heal stale adjacency.
///
/// A [UnionFind] over the passable cells is regenerated in the same pass and
/// answers [reachable](Self::reachable) queries without running a search.
#[derive(Clone, Debug)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cell_size: u32,
    cells: Vec<Cell>,
    adjacency: Vec<NeighborList>,
    components: UnionFind<usize>,
}

impl CellGrid {
    /// Allocates a `width`×`height` grid of empty cells. `pixel_width` is the
    /// window width in pixels; each cell gets an edge of
    /// `pixel_width / width` for shells that draw the grid.
    pub fn new(width: usize, height: usize, pixel_width: u32) -> CellGrid {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let cells = (0..width * height)
            .map(|i| Cell::new(Point::new((i % width) as i32, (i / width) as i32)))
            .collect();
        CellGrid {
            width,
            height,
            cell_size: pixel_width / width as u32,
            cells,
            adjacency: vec![NeighborList::new(); width * height],
            components: UnionFind::new(width * height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel edge length of one cell.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Top-left pixel of the cell at `p`, for shells that draw.
    pub fn pixel_origin(&self, p: Point) -> (u32, u32) {
        (p.x as u32 * self.cell_size, p.y as u32 * self.cell_size)
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn ix(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// The cell at `p`, or [GridError::OutOfRange] for positions outside the
    /// grid.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, GridError> {
        if self.in_bounds(p) {
            Ok(&self.cells[self.ix(p)])
        } else {
            Err(GridError::OutOfRange(p, self.width, self.height))
        }
    }

    /// Mutable access to the cell at `p`, for painting. After flipping
    /// barriers, call [recompute_neighbors](Self::recompute_neighbors) before
    /// searching.
    pub fn cell_at_mut(&mut self, p: Point) -> Result<&mut Cell, GridError> {
        if self.in_bounds(p) {
            let ix = self.ix(p);
            Ok(&mut self.cells[ix])
        } else {
            Err(GridError::OutOfRange(p, self.width, self.height))
        }
    }

    pub(crate) fn cell(&self, p: Point) -> &Cell {
        debug_assert!(self.in_bounds(p));
        &self.cells[self.ix(p)]
    }

    pub(crate) fn cell_mut(&mut self, p: Point) -> &mut Cell {
        debug_assert!(self.in_bounds(p));
        let ix = self.ix(p);
        &mut self.cells[ix]
    }

    /// The cached passable neighbors of `p`. Empty for out-of-bounds
    /// positions and for grids whose adjacency has not been computed yet.
    pub fn neighbors(&self, p: Point) -> &[Point] {
        if self.in_bounds(p) {
            &self.adjacency[self.ix(p)]
        } else {
            &[]
        }
    }

    pub(crate) fn neighbor_snapshot(&self) -> Vec<NeighborList> {
        self.adjacency.clone()
    }

    /// Rebuilds every cell's neighbor list from the four orthogonal
    /// directions, excluding out-of-bounds positions and barrier cells, and
    /// regenerates the connected components in the same pass.
    ///
    /// Idempotent as long as no cell state changes in between.
    pub fn recompute_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos();
            let list = ORTHOGONAL
                .iter()
                .map(|&(dx, dy)| Point::new(p.x + dx, p.y + dy))
                .filter(|&n| self.in_bounds(n) && self.cell(n).passable())
                .collect::<NeighborList>();
            self.adjacency[i] = list;
        }
        self.generate_components();
        info!(
            "recomputed adjacency and components for {}x{} grid",
            self.width, self.height
        );
    }

    /// Links passable orthogonal neighbors into the same component. Unioning
    /// each cell with its right and down neighbor covers every edge once.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let p = Point::new(x, y);
                if !self.cell(p).passable() {
                    continue;
                }
                let p_ix = self.ix(p);
                for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.in_bounds(n) && self.cell(n).passable() {
                        self.components.union(p_ix, self.ix(n));
                    }
                }
            }
        }
    }

    /// Checks whether `a` and `b` lie on the same connected component.
    /// Only valid after [recompute_neighbors](Self::recompute_neighbors);
    /// out-of-bounds positions are never reachable.
    pub fn reachable(&self, a: Point, b: Point) -> bool {
        !self.unreachable(a, b)
    }

    /// Checks whether `a` and `b` lie on different connected components.
    pub fn unreachable(&self, a: Point, b: Point) -> bool {
        if self.in_bounds(a) && self.in_bounds(b) {
            !self.components.equiv(self.ix(a), self.ix(b))
        } else {
            true
        }
    }

    /// Clears the exploration states (frontier/visited/path) left behind by a
    /// search, keeping start, end and barriers, so another run can start from
    /// the same painting.
    pub fn clear_trace(&mut self) {
        for cell in &mut self.cells {
            if matches!(
                cell.state(),
                CellState::Frontier | CellState::Visited | CellState::Path
            ) {
                cell.reset();
            }
        }
    }

    /// Returns every cell to empty and drops the cached adjacency. Exclusive
    /// ownership means no outside reference can observe the old cells.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
        self.adjacency = vec![NeighborList::new(); self.width * self.height];
        self.components = UnionFind::new(self.width * self.height);
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                write!(f, "{}", self.cell(Point::new(x, y)).state().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
