use pathtrace_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::reconstruct::PredecessorMap;
use crate::run::{Run, with_endpoints};
use crate::trace::SearchResult;

/// Depth-first search from the grid's Start cell to its End cell.
///
/// Returns the empty result if either endpoint is missing.
pub fn dfs(grid: &Grid) -> SearchResult {
    with_endpoints(grid, Algorithm::Dfs, dfs_between)
}

/// Depth-first search from `start` to `end` with an explicit stack.
///
/// Every pop is one exploration step. Neighbours are marked visited when
/// pushed, in up, down, left, right order, so the right neighbour is
/// expanded first. The path only proves reachability; it is usually far
/// from shortest.
pub fn dfs_between(grid: &Grid, start: Point, end: Point) -> SearchResult {
    let Some(run) = Run::new(grid, Algorithm::Dfs, start, end) else {
        return SearchResult::empty();
    };

    let mut visited = vec![false; run.len()];
    let mut preds = PredecessorMap::new(run.len());
    let mut steps = Vec::new();
    let mut stack = vec![run.start];
    visited[run.start] = true;

    while let Some(ci) = stack.pop() {
        if ci == run.end {
            return run.found(steps, &preds);
        }
        if !run.is_endpoint(ci) {
            steps.push(vec![run.cell(ci)]);
        }

        for ni in run.neighbors(ci) {
            if visited[ni] {
                continue;
            }
            visited[ni] = true;
            preds.set(ni, ci);
            stack.push(ni);
        }
    }

    run.exhausted(steps)
}
