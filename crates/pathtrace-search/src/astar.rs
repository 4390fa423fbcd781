use pathtrace_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::queue::PriorityQueue;
use crate::reconstruct::PredecessorMap;
use crate::run::{Run, UNREACHABLE, with_endpoints};
use crate::trace::SearchResult;

/// A* from the grid's Start cell to its End cell.
///
/// Returns the empty result if either endpoint is missing.
pub fn astar(grid: &Grid) -> SearchResult {
    with_endpoints(grid, Algorithm::AStar, astar_between)
}

/// A* search from `start` to `end` guided by the Manhattan distance.
///
/// Structured like [`dijkstra_between`](crate::dijkstra_between) but the queue
/// is ordered by `f = g + h`, where `g` is the cost from `start` and `h` the
/// Manhattan distance to `end`. Relaxation compares `g` only.
pub fn astar_between(grid: &Grid, start: Point, end: Point) -> SearchResult {
    let Some(run) = Run::new(grid, Algorithm::AStar, start, end) else {
        return SearchResult::empty();
    };
    let grid = run.grid;
    let goal = grid.point(run.end);
    let h = move |i: usize| manhattan(grid.point(i), goal);

    let mut g = vec![UNREACHABLE; run.len()];
    let mut done = vec![false; run.len()];
    let mut preds = PredecessorMap::new(run.len());
    let mut steps = Vec::new();
    let mut open = PriorityQueue::new();

    g[run.start] = 0;
    open.enqueue(run.start, h(run.start));

    while let Some(ci) = open.dequeue() {
        // Skip stale entries.
        if done[ci] {
            continue;
        }
        done[ci] = true;

        if ci == run.end {
            return run.found(steps, &preds);
        }
        if !run.is_endpoint(ci) {
            steps.push(vec![run.cell(ci)]);
        }

        let tentative = g[ci] + 1;
        for ni in run.neighbors(ci) {
            if done[ni] || tentative >= g[ni] {
                continue;
            }
            g[ni] = tentative;
            preds.set(ni, ci);
            open.enqueue(ni, tentative + h(ni));
        }
    }

    run.exhausted(steps)
}
