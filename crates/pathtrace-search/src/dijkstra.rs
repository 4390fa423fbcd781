use pathtrace_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::queue::PriorityQueue;
use crate::reconstruct::PredecessorMap;
use crate::run::{Run, UNREACHABLE, with_endpoints};
use crate::trace::SearchResult;

/// Dijkstra's algorithm from the grid's Start cell to its End cell.
///
/// Returns the empty result if either endpoint is missing.
pub fn dijkstra(grid: &Grid) -> SearchResult {
    with_endpoints(grid, Algorithm::Dijkstra, dijkstra_between)
}

/// Uniform-cost search from `start` to `end`, every move costing 1.
///
/// One exploration step per finalized cell. Improved distances are
/// re-enqueued and stale queue entries are skipped when dequeued.
pub fn dijkstra_between(grid: &Grid, start: Point, end: Point) -> SearchResult {
    let Some(run) = Run::new(grid, Algorithm::Dijkstra, start, end) else {
        return SearchResult::empty();
    };

    let mut dist = vec![UNREACHABLE; run.len()];
    let mut done = vec![false; run.len()];
    let mut preds = PredecessorMap::new(run.len());
    let mut steps = Vec::new();
    let mut open = PriorityQueue::new();

    dist[run.start] = 0;
    open.enqueue(run.start, 0);

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

        let nd = dist[ci] + 1;
        for ni in run.neighbors(ci) {
            if done[ni] || nd >= dist[ni] {
                continue;
            }
            dist[ni] = nd;
            preds.set(ni, ci);
            open.enqueue(ni, nd);
        }
    }

    run.exhausted(steps)
}
