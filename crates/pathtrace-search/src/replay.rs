//! Frame-by-frame annotation of a search, for visualization.
//!
//! [`Replay`] turns a [`SearchResult`] into the sequence of [`Frame`]s a
//! front-end shows: first each exploration step lights up as
//! [`Mark::Exploring`] while the previous step fades to [`Mark::Visited`];
//! then, if a path was found, the board is cleared and the path is drawn one
//! cell per frame. Timing is up to the caller (see
//! [`PlaybackConfig`](crate::PlaybackConfig)).

use pathtrace_core::{Cell, Grid};

use crate::trace::SearchResult;

/// Visual state layered over a cell's status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mark {
    #[default]
    Clear,
    Exploring,
    Visited,
    Path,
}

impl Mark {
    /// ASCII glyph, or `None` for [`Mark::Clear`].
    pub const fn glyph(self) -> Option<char> {
        match self {
            Self::Clear => None,
            Self::Exploring => Some('o'),
            Self::Visited => Some('x'),
            Self::Path => Some('*'),
        }
    }
}

/// One [`Mark`] per grid cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    marks: Vec<Mark>,
}

impl Frame {
    /// An all-clear frame for `grid`.
    pub fn clear(grid: &Grid) -> Self {
        Self {
            marks: vec![Mark::Clear; grid.len()],
        }
    }

    #[inline]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Mark of the cell at flat index `i`.
    #[inline]
    pub fn mark(&self, i: usize) -> Mark {
        self.marks.get(i).copied().unwrap_or_default()
    }

    /// Number of cells carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Draw the frame over `grid`: endpoints and blocked cells keep their
    /// status glyph, everything else shows its mark.
    pub fn render(&self, grid: &Grid) -> String {
        let w = grid.size().max(1) as usize;
        let mut out = String::with_capacity(grid.len() + grid.len() / w);
        for (i, c) in grid.iter().enumerate() {
            if i > 0 && i % w == 0 {
                out.push('\n');
            }
            let ch = match self.mark(i).glyph() {
                Some(g) if !c.status.is_endpoint() && !c.is_blocked() => g,
                _ => c.status.glyph(),
            };
            out.push(ch);
        }
        out
    }

    fn set(&mut self, grid: &Grid, cell: &Cell, mark: Mark) {
        if let Some(slot) = grid.index(cell.pos).and_then(|i| self.marks.get_mut(i)) {
            *slot = mark;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Exploring(usize),
    Path(usize),
    Done,
}

/// Iterator over the annotation frames of one search.
///
/// Yields one frame per exploration step; then, when a path exists, one
/// cleared frame followed by one frame per path cell. Start and End are never
/// annotated, so the frames for the first and last path cells repeat the
/// previous state.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    grid: &'a Grid,
    result: &'a SearchResult,
    frame: Frame,
    phase: Phase,
}

impl<'a> Replay<'a> {
    pub fn new(grid: &'a Grid, result: &'a SearchResult) -> Self {
        Self {
            grid,
            result,
            frame: Frame::clear(grid),
            phase: Phase::Exploring(0),
        }
    }

    /// Total number of frames the replay yields from the beginning.
    pub fn frame_count(&self) -> usize {
        let path_frames = if self.result.is_found() {
            1 + self.result.path.len()
        } else {
            0
        };
        self.result.exploration_steps.len() + path_frames
    }

    /// The last frame, i.e. the board once playback has finished.
    pub fn final_frame(self) -> Frame {
        let blank = Frame::clear(self.grid);
        self.last().unwrap_or(blank)
    }

    fn is_route_end(&self, cell: &Cell) -> bool {
        let path = &self.result.path;
        cell.status.is_endpoint()
            || path.first().is_some_and(|c| c.pos == cell.pos)
            || path.last().is_some_and(|c| c.pos == cell.pos)
    }
}

impl Iterator for Replay<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        match self.phase {
            Phase::Exploring(k) => {
                if let Some(step) = self.result.exploration_steps.get(k) {
                    for m in self.frame.marks.iter_mut() {
                        if *m == Mark::Exploring {
                            *m = Mark::Visited;
                        }
                    }
                    for cell in step {
                        if !cell.status.is_endpoint() {
                            self.frame.set(self.grid, cell, Mark::Exploring);
                        }
                    }
                    self.phase = Phase::Exploring(k + 1);
                    return Some(self.frame.clone());
                }
                if !self.result.is_found() {
                    self.phase = Phase::Done;
                    return None;
                }
                self.frame = Frame::clear(self.grid);
                self.phase = Phase::Path(0);
                Some(self.frame.clone())
            }
            Phase::Path(k) => {
                let Some(cell) = self.result.path.get(k) else {
                    self.phase = Phase::Done;
                    return None;
                };
                if !self.is_route_end(cell) {
                    self.frame.set(self.grid, cell, Mark::Path);
                }
                self.phase = Phase::Path(k + 1);
                Some(self.frame.clone())
            }
            Phase::Done => None,
        }
    }
}
