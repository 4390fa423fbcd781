//! Algorithm selection and dispatch.

use std::fmt;
use std::str::FromStr;

use pathtrace_core::{Grid, GridError, Point};

use crate::astar::{astar, astar_between};
use crate::bfs::{bfs, bfs_between};
use crate::dfs::{dfs, dfs_between};
use crate::dijkstra::{dijkstra, dijkstra_between};
use crate::trace::SearchResult;

/// The available search strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 4] = [Self::Dijkstra, Self::Bfs, Self::Dfs, Self::AStar];

    /// Short machine name, accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-First Search",
            Self::Dfs => "Depth-First Search",
            Self::Dijkstra => "Dijkstra's Algorithm",
            Self::AStar => "A* Search",
        }
    }

    /// Whether found paths are guaranteed shortest.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Search from the grid's Start cell to its End cell.
    pub fn search(self, grid: &Grid) -> SearchResult {
        match self {
            Self::Bfs => bfs(grid),
            Self::Dfs => dfs(grid),
            Self::Dijkstra => dijkstra(grid),
            Self::AStar => astar(grid),
        }
    }

    /// Search between explicit endpoints, ignoring Start/End statuses.
    pub fn search_between(self, grid: &Grid, start: Point, end: Point) -> SearchResult {
        match self {
            Self::Bfs => bfs_between(grid, start, end),
            Self::Dfs => dfs_between(grid, start, end),
            Self::Dijkstra => dijkstra_between(grid, start, end),
            Self::AStar => astar_between(grid, start, end),
        }
    }

    /// Like [`search`](Self::search), but reject grids that break the
    /// snapshot invariants instead of quietly returning no path.
    pub fn search_checked(self, grid: &Grid) -> Result<SearchResult, GridError> {
        if let Err(e) = grid.validate() {
            log::warn!("{self}: rejecting grid: {e}");
            return Err(e);
        }
        Ok(self.search(grid))
    }
}

/// Run `algorithm` on `grid`.
#[inline]
pub fn search(algorithm: Algorithm, grid: &Grid) -> SearchResult {
    algorithm.search(grid)
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.to_string(), a.name());
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(" BFS ".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(UnknownAlgorithm("greedy".to_string()))
        );
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let g = Grid::with_layout(10);
        assert_eq!(Algorithm::Bfs.search(&g), bfs(&g));
        assert_eq!(Algorithm::Dfs.search(&g), dfs(&g));
        assert_eq!(search(Algorithm::Dijkstra, &g), dijkstra(&g));
        assert_eq!(Algorithm::AStar.search(&g), astar(&g));
    }

    #[test]
    fn checked_search_rejects_malformed_grids() {
        let no_end = Grid::parse("S..\n...\n...").unwrap();
        assert_eq!(
            Algorithm::Bfs.search_checked(&no_end),
            Err(GridError::EndCount(0))
        );
        // The unchecked form quietly reports no path instead.
        assert!(!Algorithm::Bfs.search(&no_end).is_found());

        let ok = Grid::with_layout(10);
        assert!(Algorithm::AStar.search_checked(&ok).unwrap().is_found());
    }

    #[test]
    fn only_dfs_is_not_optimal() {
        let optimal: Vec<_> = Algorithm::ALL.iter().filter(|a| a.is_optimal()).collect();
        assert_eq!(optimal.len(), 3);
        assert!(!Algorithm::Dfs.is_optimal());
        assert_eq!(Algorithm::default(), Algorithm::Bfs);
    }
}
