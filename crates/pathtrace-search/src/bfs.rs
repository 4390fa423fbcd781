use std::collections::VecDeque;

use pathtrace_core::{Grid, Point};

use crate::algorithm::Algorithm;
use crate::reconstruct::PredecessorMap;
use crate::run::{Run, with_endpoints};
use crate::trace::SearchResult;

/// Breadth-first search from the grid's Start cell to its End cell.
///
/// Returns the empty result if either endpoint is missing.
pub fn bfs(grid: &Grid) -> SearchResult {
    with_endpoints(grid, Algorithm::Bfs, bfs_between)
}

/// Breadth-first search from `start` to `end`.
///
/// The frontier is expanded one whole level at a time and each level yields
/// one exploration step holding the cells it discovered. Cells are marked
/// visited when discovered, so each is queued at most once. The path is
/// shortest in number of moves.
pub fn bfs_between(grid: &Grid, start: Point, end: Point) -> SearchResult {
    let Some(run) = Run::new(grid, Algorithm::Bfs, start, end) else {
        return SearchResult::empty();
    };

    let mut visited = vec![false; run.len()];
    let mut preds = PredecessorMap::new(run.len());
    let mut steps = Vec::new();
    let mut queue = VecDeque::new();

    visited[run.start] = true;
    queue.push_back(run.start);

    while !queue.is_empty() {
        let level = queue.len();
        let mut step = Vec::new();

        for _ in 0..level {
            let Some(ci) = queue.pop_front() else {
                break;
            };
            if ci == run.end {
                return run.found(steps, &preds);
            }

            for ni in run.neighbors(ci) {
                if visited[ni] {
                    continue;
                }
                visited[ni] = true;
                preds.set(ni, ci);
                queue.push_back(ni);
                if !run.is_endpoint(ni) {
                    step.push(run.cell(ni));
                }
            }
        }

        if !step.is_empty() {
            steps.push(step);
        }
    }

    run.exhausted(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(cells: &[pathtrace_core::Cell]) -> Vec<(i32, i32)> {
        cells.iter().map(|c| (c.x(), c.y())).collect()
    }

    #[test]
    fn open_three_by_three() {
        let g = Grid::parse("S..\n...\n..E").unwrap();
        let r = bfs(&g);
        assert_eq!(positions(&r.path), vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
        let steps: Vec<_> = r.exploration_steps.iter().map(|s| positions(s)).collect();
        assert_eq!(
            steps,
            vec![
                vec![(0, 1), (1, 0)],
                vec![(0, 2), (1, 1), (2, 0)],
                vec![(1, 2), (2, 1)],
            ]
        );
    }

    #[test]
    fn routes_around_a_wall() {
        let g = Grid::parse(
            "
            S#...
            .#.#.
            .#.#.
            .#.#.
            ...#E",
        )
        .unwrap();
        let r = bfs(&g);
        assert_eq!(r.path_len(), Some(16));
        assert_eq!(r.path.first().unwrap().pos, Point::new(0, 0));
        assert_eq!(r.path.last().unwrap().pos, Point::new(4, 4));
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let g = Grid::parse("S..\n###\n..E").unwrap();
        let r = bfs(&g);
        assert!(r.path.is_empty());
        // Both reachable cells were still explored.
        assert_eq!(r.explored(), 2);
    }

    #[test]
    fn missing_endpoint_is_empty() {
        let g = Grid::parse("S..\n...\n...").unwrap();
        assert_eq!(bfs(&g), SearchResult::empty());
    }

    #[test]
    fn start_equals_end() {
        let g = Grid::new(3);
        let r = bfs_between(&g, Point::new(1, 1), Point::new(1, 1));
        assert_eq!(r.path.len(), 1);
        assert_eq!(r.path[0].pos, Point::new(1, 1));
        assert!(r.exploration_steps.is_empty());
    }

    #[test]
    fn out_of_bounds_endpoint_is_empty() {
        let g = Grid::new(3);
        assert_eq!(
            bfs_between(&g, Point::new(0, 0), Point::new(3, 0)),
            SearchResult::empty()
        );
    }
}
