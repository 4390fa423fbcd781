//! Predecessor bookkeeping and path reconstruction.

use pathtrace_core::{Cell, Grid};

/// For each cell index, the index of the cell it was reached from.
///
/// Indexed by the grid's flat row-major index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredecessorMap {
    parent: Vec<Option<usize>>,
}

impl PredecessorMap {
    /// A map with room for `len` cells and no entries.
    pub fn new(len: usize) -> Self {
        Self {
            parent: vec![None; len],
        }
    }

    /// Record that `child` was reached from `parent`, replacing any earlier
    /// entry. Out-of-range children are ignored.
    #[inline]
    pub fn set(&mut self, child: usize, parent: usize) {
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = Some(parent);
        }
    }

    #[inline]
    pub fn get(&self, child: usize) -> Option<usize> {
        self.parent.get(child).copied().flatten()
    }

    /// Number of cells with a recorded predecessor.
    pub fn count(&self) -> usize {
        self.parent.iter().filter(|p| p.is_some()).count()
    }

    /// Capacity in cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

/// Rebuild the route ending at `end` by walking predecessors backwards,
/// returned in start → end order (both inclusive).
///
/// `preds` and `end` must come from the same completed search over `grid`;
/// mismatched inputs give a meaningless route rather than an error. The walk
/// stops after `preds.len()` hops, so a corrupted map cannot loop forever.
pub fn reconstruct(grid: &Grid, preds: &PredecessorMap, end: usize) -> Vec<Cell> {
    let cells = grid.cells();
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(i) = cur {
        let Some(&c) = cells.get(i) else {
            break;
        };
        path.push(c);
        if path.len() > preds.len() {
            break;
        }
        cur = preds.get(i);
    }
    path.reverse();
    path
}
