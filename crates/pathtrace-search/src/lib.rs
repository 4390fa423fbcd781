//! Grid search algorithms that record how they explore.
//!
//! Four strategies run over a [`Grid`](pathtrace_core::Grid) snapshot and
//! return the same [`SearchResult`] shape: the ordered exploration steps and
//! the Start → End route.
//!
//! - **BFS** ([`bfs`]): one exploration step per frontier level, shortest path
//! - **DFS** ([`dfs`]): one step per popped cell, any path
//! - **Dijkstra** ([`dijkstra`]): one step per finalized cell, shortest path
//! - **A\*** ([`astar`]): Dijkstra ordered by `g + manhattan`, shortest path
//!
//! Every search is a pure function of the snapshot: it allocates its own
//! tables, never mutates the grid, and returns identical results for
//! identical input. A missing endpoint or an unreachable End is reported as
//! an empty `path`, never as an error; use [`Algorithm::search_checked`] to
//! reject malformed grids up front.
//!
//! [`Replay`] turns a result into the annotation frames a visualizer plays
//! back, paced by a [`PlaybackConfig`].

mod algorithm;
mod astar;
mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod distance;
mod queue;
mod reconstruct;
mod replay;
mod run;
mod trace;

pub use algorithm::{Algorithm, UnknownAlgorithm, search};
pub use astar::{astar, astar_between};
pub use bfs::{bfs, bfs_between};
pub use config::PlaybackConfig;
pub use dfs::{dfs, dfs_between};
pub use dijkstra::{dijkstra, dijkstra_between};
pub use distance::manhattan;
pub use queue::PriorityQueue;
pub use reconstruct::{PredecessorMap, reconstruct};
pub use replay::{Frame, Mark, Replay};
pub use trace::{ExplorationStep, SearchResult};
