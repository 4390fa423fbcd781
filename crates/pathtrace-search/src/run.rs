//! State shared by every search: resolved endpoints and result assembly.

use pathtrace_core::{Cell, Grid, Point};

use crate::algorithm::Algorithm;
use crate::reconstruct::{PredecessorMap, reconstruct};
use crate::trace::{ExplorationStep, SearchResult};

/// Sentinel distance for cells not reached yet.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// One search invocation over a grid snapshot, with its endpoints resolved to
/// flat indices.
pub(crate) struct Run<'g> {
    pub(crate) grid: &'g Grid,
    pub(crate) algorithm: Algorithm,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<'g> Run<'g> {
    /// Resolve `start` and `end`. Returns `None` if either lies outside the
    /// grid's stored cells.
    pub(crate) fn new(grid: &'g Grid, algorithm: Algorithm, start: Point, end: Point) -> Option<Self> {
        let resolve = |p: Point| grid.index(p).filter(|&i| i < grid.len());
        let (Some(start), Some(end)) = (resolve(start), resolve(end)) else {
            log::trace!("{algorithm}: endpoint outside the grid ({start} -> {end})");
            return None;
        };
        Some(Self {
            grid,
            algorithm,
            start,
            end,
        })
    }

    /// Number of cells; the size of every per-search table.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    pub(crate) fn cell(&self, i: usize) -> Cell {
        self.grid.cells()[i]
    }

    #[inline]
    pub(crate) fn point(&self, i: usize) -> Point {
        self.grid.point(i)
    }

    /// Walkable neighbours of the cell at `i`, as flat indices, in the fixed
    /// up, down, left, right order.
    pub(crate) fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.grid.neighbor_indices(self.point(i))
    }

    /// Whether the cell at `i` is kept out of exploration steps.
    #[inline]
    pub(crate) fn is_endpoint(&self, i: usize) -> bool {
        i == self.start || i == self.end || self.cell(i).status.is_endpoint()
    }

    /// Assemble the result once End has been dequeued.
    pub(crate) fn found(self, steps: Vec<ExplorationStep>, preds: &PredecessorMap) -> SearchResult {
        let path = reconstruct(self.grid, preds, self.end);
        let result = SearchResult {
            exploration_steps: steps,
            path,
        };
        log::debug!(
            "{}: path of {} moves after exploring {} cells in {} steps",
            self.algorithm,
            result.path_len().unwrap_or(0),
            result.explored(),
            result.exploration_steps.len(),
        );
        result
    }

    /// Assemble the result when the reachable region is exhausted.
    pub(crate) fn exhausted(self, steps: Vec<ExplorationStep>) -> SearchResult {
        let result = SearchResult {
            exploration_steps: steps,
            path: Vec::new(),
        };
        log::debug!(
            "{}: no path, explored {} cells in {} steps",
            self.algorithm,
            result.explored(),
            result.exploration_steps.len(),
        );
        result
    }
}

/// Look up Start and End in `grid` and hand them to `search`, or return the
/// empty result when either is missing.
pub(crate) fn with_endpoints(
    grid: &Grid,
    algorithm: Algorithm,
    search: fn(&Grid, Point, Point) -> SearchResult,
) -> SearchResult {
    match grid.find_endpoints().both() {
        Some((start, end)) => search(grid, start.pos, end.pos),
        None => {
            log::trace!("{algorithm}: grid has no start or no end cell");
            SearchResult::empty()
        }
    }
}
