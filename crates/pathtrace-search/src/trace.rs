//! The uniform output of every search: exploration trace plus route.

use pathtrace_core::Cell;

/// Cells examined together at one tick of a search. How cells are grouped
/// depends on the algorithm: BFS emits one step per frontier level, the
/// others one step per expanded cell.
pub type ExplorationStep = Vec<Cell>;

/// Result of a search.
///
/// Start and End never appear in `exploration_steps`; a found `path` runs
/// from Start to End inclusive and is empty when End is unreachable or an
/// endpoint is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchResult {
    pub exploration_steps: Vec<ExplorationStep>,
    pub path: Vec<Cell>,
}

impl SearchResult {
    /// No steps, no path.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether a route to End was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the route, or `None` if there is no route.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Total number of cells across all exploration steps.
    pub fn explored(&self) -> usize {
        self.exploration_steps.iter().map(Vec::len).sum()
    }

    /// Every explored cell, in the order the search examined them.
    pub fn explored_cells(&self) -> impl Iterator<Item = &Cell> {
        self.exploration_steps.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathtrace_core::{CellStatus, Point};

    fn cell(x: i32, y: i32) -> Cell {
        Cell::new(Point::new(x, y), CellStatus::Empty)
    }

    #[test]
    fn empty_result() {
        let r = SearchResult::empty();
        assert!(!r.is_found());
        assert_eq!(r.path_len(), None);
        assert_eq!(r.explored(), 0);
    }

    #[test]
    fn counts() {
        let r = SearchResult {
            exploration_steps: vec![vec![cell(1, 0), cell(0, 1)], vec![cell(2, 0)]],
            path: vec![cell(0, 0), cell(1, 0), cell(2, 0)],
        };
        assert!(r.is_found());
        assert_eq!(r.path_len(), Some(2));
        assert_eq!(r.explored(), 3);
        let order: Vec<_> = r.explored_cells().map(|c| c.pos).collect();
        assert_eq!(order, vec![Point::new(1, 0), Point::new(0, 1), Point::new(2, 0)]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use pathtrace_core::{CellStatus, Point};

    #[test]
    fn result_uses_camel_case_keys() {
        let r = SearchResult {
            exploration_steps: vec![],
            path: vec![Cell::new(Point::new(0, 0), CellStatus::Start)],
        };
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.starts_with(r#"{"explorationSteps":[],"path":[{"#));
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
