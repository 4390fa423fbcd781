//! The [`Grid`] type: a square, row-major snapshot of [`Cell`]s.
//!
//! A `Grid` shares its backing buffer between clones and copies it on the
//! first edit (`Arc::make_mut`), so every snapshot handed to a search stays
//! exactly as it was when the search started.

use std::fmt;
use std::sync::Arc;

use crate::cell::{Cell, CellStatus};
use crate::geom::{CARDINALS, Point, Range};

/// Side lengths offered to users picking a grid size.
pub const GRID_SIZES: [i32; 4] = [10, 20, 30, 50];

/// Side length of a freshly created grid.
pub const DEFAULT_GRID_SIZE: i32 = 30;

/// The Start and End cells of a grid, if present.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    pub start: Option<Cell>,
    pub end: Option<Cell>,
}

impl Endpoints {
    /// Both endpoints, or `None` if either is missing.
    #[inline]
    pub fn both(self) -> Option<(Cell, Cell)> {
        Some((self.start?, self.end?))
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `size × size` grid of [`Cell`]s forming a 4-connected lattice.
///
/// Cells are stored row-major: the cell at `(x, y)` lives at index
/// `y * size + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Arc<Vec<Cell>>,
    size: i32,
}

impl Grid {
    /// Create a grid of the given side length with every cell Empty.
    pub fn new(size: i32) -> Self {
        let cells = Range::square(size)
            .iter()
            .map(|p| Cell::new(p, CellStatus::Empty))
            .collect();
        Self {
            cells: Arc::new(cells),
            size: size.max(0),
        }
    }

    /// Create a grid with the default endpoint layout: Start near the
    /// bottom-left corner at `(size/5, 4*size/5)` and End near the top-right
    /// corner at `(4*size/5, size/5)`.
    ///
    /// When both positions coincide (`size <= 1`) only Start is placed.
    pub fn with_layout(size: i32) -> Self {
        let mut grid = Self::new(size);
        let start = Point::new(size / 5, size * 4 / 5);
        let end = Point::new(size * 4 / 5, size / 5);
        grid.set_status(end, CellStatus::End);
        grid.set_status(start, CellStatus::Start);
        grid
    }

    /// Wrap an existing row-major cell collection.
    ///
    /// Nothing is checked; see [`validate`](Self::validate).
    pub fn from_cells(size: i32, cells: Vec<Cell>) -> Self {
        Self {
            cells: Arc::new(cells),
            size: size.max(0),
        }
    }

    /// Parse a square ASCII picture: `.` Empty, `#` Blocked, `S` Start,
    /// `E` End. Surrounding whitespace is trimmed from the whole string and
    /// from each line.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let size = lines.len() as i32;
        let mut cells = Vec::with_capacity(lines.len() * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count() as i32;
            if width != size {
                return Err(GridError::NotSquare {
                    line: y,
                    width,
                    height: size,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let status = CellStatus::from_glyph(ch).ok_or(GridError::InvalidChar { ch, pos })?;
                cells.push(Cell::new(pos, status));
            }
        }
        Ok(Self::from_cells(size, cells))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of stored cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The `[0, size)²` rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.size as usize + p.x as usize)
    }

    /// Point at flat index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        let w = self.size.max(1) as usize;
        Point::new((i % w) as i32, (i / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).and_then(|i| self.cells.get(i)).copied()
    }

    /// Walkable cardinal neighbours of `p` in the fixed order up, down,
    /// left, right. Out-of-bounds and Blocked cells are skipped.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Cell> + '_ {
        self.neighbor_indices(p).map(|i| self.cells[i])
    }

    /// Flat indices of [`neighbors`](Self::neighbors), same order.
    pub fn neighbor_indices(&self, p: Point) -> impl Iterator<Item = usize> + '_ {
        CARDINALS
            .into_iter()
            .filter_map(move |d| self.index(p + d))
            .filter(|&i| self.cells.get(i).is_some_and(|c| !c.is_blocked()))
    }

    /// First Start and first End cell in row-major order.
    pub fn find_endpoints(&self) -> Endpoints {
        let mut ep = Endpoints::default();
        for &c in self.cells.iter() {
            match c.status {
                CellStatus::Start if ep.start.is_none() => ep.start = Some(c),
                CellStatus::End if ep.end.is_none() => ep.end = Some(c),
                _ => {}
            }
            if ep.start.is_some() && ep.end.is_some() {
                break;
            }
        }
        ep
    }

    /// Number of Blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_blocked()).count()
    }

    /// Check the snapshot invariants: `size²` cells, each stored at its own
    /// row-major position (so coordinates are in range and ids are unique),
    /// exactly one Start and exactly one End.
    pub fn validate(&self) -> Result<(), GridError> {
        let expected = self.bounds().len();
        if self.cells.len() != expected {
            return Err(GridError::WrongLength {
                expected,
                found: self.cells.len(),
            });
        }
        let (mut starts, mut ends) = (0, 0);
        for (i, c) in self.cells.iter().enumerate() {
            if c.pos != self.point(i) {
                return Err(GridError::Misplaced { index: i, pos: c.pos });
            }
            match c.status {
                CellStatus::Start => starts += 1,
                CellStatus::End => ends += 1,
                _ => {}
            }
        }
        if starts != 1 {
            return Err(GridError::StartCount(starts));
        }
        if ends != 1 {
            return Err(GridError::EndCount(ends));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Overwrite the status at `p`. Returns `false` if `p` is out of bounds.
    ///
    /// Other clones of this grid are unaffected.
    pub fn set_status(&mut self, p: Point, status: CellStatus) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        match Arc::make_mut(&mut self.cells).get_mut(i) {
            Some(c) => {
                *c = c.with_status(status);
                true
            }
            None => false,
        }
    }

    /// Flip Empty ↔ Blocked at `p`. Start and End are left alone.
    /// Returns whether the cell changed.
    pub fn toggle_blocked(&mut self, p: Point) -> bool {
        match self.at(p).map(|c| c.status) {
            Some(CellStatus::Empty) => self.set_status(p, CellStatus::Blocked),
            Some(CellStatus::Blocked) => self.set_status(p, CellStatus::Empty),
            _ => false,
        }
    }

    /// Block `p` if it is Empty. Used while dragging across cells, where
    /// already-blocked cells must stay blocked.
    pub fn paint_blocked(&mut self, p: Point) -> bool {
        match self.at(p).map(|c| c.status) {
            Some(CellStatus::Empty) => self.set_status(p, CellStatus::Blocked),
            _ => false,
        }
    }

    /// Move the Start or End cell at `from` to `to`, leaving an Empty cell
    /// behind. `to` may be Empty or Blocked but not an endpoint.
    pub fn move_endpoint(&mut self, from: Point, to: Point) -> bool {
        let (Some(src), Some(dst)) = (self.at(from), self.at(to)) else {
            return false;
        };
        if !src.status.is_endpoint() || dst.status.is_endpoint() {
            return false;
        }
        self.set_status(from, CellStatus::Empty);
        self.set_status(to, src.status)
    }

    /// Turn every Blocked cell back into Empty.
    pub fn clear_blocked(&mut self) {
        if self.blocked_count() == 0 {
            return;
        }
        for c in Arc::make_mut(&mut self.cells).iter_mut() {
            if c.is_blocked() {
                *c = c.with_status(CellStatus::Empty);
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.size.max(1) as usize;
        for (i, row) in self.cells.chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.status.glyph())?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors reported by [`Grid::parse`] and [`Grid::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The cell count is not `size²`.
    WrongLength { expected: usize, found: usize },
    /// The cell stored at `index` claims a different position.
    Misplaced { index: usize, pos: Point },
    /// There must be exactly one Start cell.
    StartCount(usize),
    /// There must be exactly one End cell.
    EndCount(usize),
    /// A parsed line's width differs from the number of lines.
    NotSquare { line: usize, width: i32, height: i32 },
    /// A character outside `.#SE` was found.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, found } => {
                write!(f, "grid: expected {expected} cells, found {found}")
            }
            Self::Misplaced { index, pos } => {
                write!(f, "grid: cell at index {index} has position {pos}")
            }
            Self::StartCount(n) => write!(f, "grid: expected one start cell, found {n}"),
            Self::EndCount(n) => write!(f, "grid: expected one end cell, found {n}"),
            Self::NotSquare {
                line,
                width,
                height,
            } => write!(
                f,
                "grid: line {line} has width {width} but the grid has {height} lines"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..
.#.
..E";

    #[test]
    fn snapshots_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }

    fn pts(cells: impl Iterator<Item = Cell>) -> Vec<Point> {
        cells.map(|c| c.pos).collect()
    }

    #[test]
    fn new_grid_is_row_major() {
        let g = Grid::new(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.len(), 16);
        assert_eq!(g.cells()[5].pos, Point::new(1, 1));
        assert_eq!(g.index(Point::new(3, 2)), Some(11));
        assert_eq!(g.point(11), Point::new(3, 2));
        assert_eq!(g.index(Point::new(4, 0)), None);
        assert!(g.iter().all(|c| c.status == CellStatus::Empty));
    }

    #[test]
    fn parse_and_display() {
        let g = Grid::parse(ROOM).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.at(Point::new(1, 1)).unwrap().status, CellStatus::Blocked);
        assert_eq!(g.to_string(), ROOM);
        assert_eq!(g.blocked_count(), 1);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Grid::parse("S.\n.E."),
            Err(GridError::NotSquare {
                line: 1,
                width: 3,
                height: 2
            })
        );
        assert_eq!(
            Grid::parse("S.\n.x"),
            Err(GridError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            })
        );
    }

    #[test]
    fn neighbors_order_and_filtering() {
        let g = Grid::parse(ROOM).unwrap();
        // Centre is blocked, so every edge-middle cell only sees corners.
        assert_eq!(
            pts(g.neighbors(Point::new(1, 0))),
            vec![Point::new(0, 0), Point::new(2, 0)]
        );
        let open = Grid::new(3);
        assert_eq!(
            pts(open.neighbors(Point::new(1, 1))),
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
        assert_eq!(
            pts(open.neighbors(Point::new(0, 0))),
            vec![Point::new(0, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn endpoints_found_or_absent() {
        let g = Grid::parse(ROOM).unwrap();
        let ep = g.find_endpoints();
        assert_eq!(ep.start.unwrap().pos, Point::new(0, 0));
        assert_eq!(ep.end.unwrap().pos, Point::new(2, 2));
        assert!(ep.both().is_some());

        let none = Grid::new(3).find_endpoints();
        assert_eq!(none, Endpoints::default());
        assert!(none.both().is_none());
    }

    #[test]
    fn default_layout_positions() {
        let g = Grid::with_layout(DEFAULT_GRID_SIZE);
        let (s, e) = g.find_endpoints().both().unwrap();
        assert_eq!(s.pos, Point::new(6, 24));
        assert_eq!(e.pos, Point::new(24, 6));
        assert!(g.validate().is_ok());
        for size in GRID_SIZES {
            assert!(Grid::with_layout(size).validate().is_ok(), "size {size}");
        }
    }

    #[test]
    fn validate_reports_each_violation() {
        let g = Grid::parse(ROOM).unwrap();
        let short = Grid::from_cells(3, g.cells()[..8].to_vec());
        assert_eq!(
            short.validate(),
            Err(GridError::WrongLength {
                expected: 9,
                found: 8
            })
        );

        let mut swapped = g.cells().to_vec();
        swapped.swap(0, 1);
        assert_eq!(
            Grid::from_cells(3, swapped).validate(),
            Err(GridError::Misplaced {
                index: 0,
                pos: Point::new(1, 0)
            })
        );

        assert_eq!(
            Grid::parse("S.S\n...\n..E").unwrap().validate(),
            Err(GridError::StartCount(2))
        );
        assert_eq!(
            Grid::parse("S..\n...\n...").unwrap().validate(),
            Err(GridError::EndCount(0))
        );
    }

    #[test]
    fn edits_are_copy_on_write() {
        let original = Grid::parse(ROOM).unwrap();
        let mut edited = original.clone();
        assert!(edited.toggle_blocked(Point::new(1, 0)));
        assert_eq!(edited.at(Point::new(1, 0)).unwrap().status, CellStatus::Blocked);
        assert_eq!(original.at(Point::new(1, 0)).unwrap().status, CellStatus::Empty);
    }

    #[test]
    fn toggle_and_paint_respect_endpoints() {
        let mut g = Grid::parse(ROOM).unwrap();
        assert!(!g.toggle_blocked(Point::new(0, 0)));
        assert!(!g.paint_blocked(Point::new(2, 2)));
        assert!(g.toggle_blocked(Point::new(1, 1)));
        assert_eq!(g.at(Point::new(1, 1)).unwrap().status, CellStatus::Empty);
        assert!(g.paint_blocked(Point::new(1, 1)));
        assert!(!g.paint_blocked(Point::new(1, 1)));
        assert!(!g.toggle_blocked(Point::new(9, 9)));
    }

    #[test]
    fn move_endpoint_rules() {
        let mut g = Grid::parse(ROOM).unwrap();
        assert!(!g.move_endpoint(Point::new(0, 0), Point::new(2, 2)));
        assert!(!g.move_endpoint(Point::new(1, 0), Point::new(2, 0)));
        assert!(g.move_endpoint(Point::new(0, 0), Point::new(1, 1)));
        assert_eq!(g.to_string(), "...\n.S.\n..E");
        assert!(g.validate().is_ok());
    }

    #[test]
    fn clear_blocked_resets_obstacles() {
        let mut g = Grid::parse("S##\n###\n##E").unwrap();
        g.clear_blocked();
        assert_eq!(g.blocked_count(), 0);
        assert_eq!(g.to_string(), "S..\n...\n..E");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GridError::StartCount(0).to_string(),
            "grid: expected one start cell, found 0"
        );
        assert!(
            GridError::InvalidChar {
                ch: 'q',
                pos: Point::new(1, 2)
            }
            .to_string()
            .contains("(1, 2)")
        );
    }
}
