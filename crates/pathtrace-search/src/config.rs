//! Playback timing handed to the front-end that animates a search.
//!
//! The engine itself never sleeps; these values only tell a caller how fast
//! to step through a [`Replay`](crate::Replay).

use std::time::Duration;

use crate::algorithm::Algorithm;
use crate::trace::SearchResult;

/// Delays between animation frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackConfig {
    /// Delay between exploration frames.
    pub exploration_interval: Duration,
    /// Delay between path frames.
    pub path_interval: Duration,
    /// Pause between the last exploration frame and the first path frame.
    pub path_delay: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::for_algorithm(Algorithm::default())
    }
}

impl PlaybackConfig {
    /// Tuned per algorithm: BFS levels are few and large, DFS steps are many
    /// and tiny.
    pub const fn for_algorithm(algorithm: Algorithm) -> Self {
        let ms = match algorithm {
            Algorithm::Bfs => 50,
            Algorithm::Dfs => 5,
            Algorithm::Dijkstra | Algorithm::AStar => 25,
        };
        Self {
            exploration_interval: Duration::from_millis(ms),
            path_interval: Duration::from_millis(15),
            path_delay: Duration::from_millis(200),
        }
    }

    /// Wall-clock length of a full playback of `result`.
    pub fn total_duration(&self, result: &SearchResult) -> Duration {
        let exploring = self.exploration_interval * result.exploration_steps.len() as u32;
        if !result.is_found() {
            return exploring;
        }
        exploring + self.path_delay + self.path_interval * result.path.len() as u32
    }
}
