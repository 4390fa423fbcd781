//! The [`Cell`] type, a grid position with its search-relevant status.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// What occupies a cell, as far as the search is concerned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellStatus {
    #[default]
    Empty,
    Blocked,
    Start,
    End,
}

impl CellStatus {
    /// Whether the status marks the start or the end of the route.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// ASCII glyph used by [`Grid`](crate::Grid) parsing and formatting.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Blocked => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Blocked),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

/// A single grid cell. Cells are values: changing a status means building a
/// new cell, never mutating one shared by another snapshot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub status: CellStatus,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Point, status: CellStatus) -> Self {
        Self { pos, status }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.pos.y
    }

    /// Coordinate-derived identity, displayed as `"x-y"`.
    #[inline]
    pub const fn id(self) -> CellId {
        CellId(self.pos)
    }

    /// Set the status (builder).
    #[inline]
    pub const fn with_status(mut self, status: CellStatus) -> Self {
        self.status = status;
        self
    }

    #[inline]
    pub const fn is_blocked(self) -> bool {
        matches!(self.status, CellStatus::Blocked)
    }
}

/// Textual cell identity (`"x-y"`), unique within a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub Point);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0.x, self.0.y)
    }
}

impl FromStr for CellId {
    type Err = ParseCellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCellIdError(s.to_string());
        let (x, y) = s.split_once('-').ok_or_else(err)?;
        let x: u32 = x.parse().map_err(|_| err())?;
        let y: u32 = y.parse().map_err(|_| err())?;
        let x = i32::try_from(x).map_err(|_| err())?;
        let y = i32::try_from(y).map_err(|_| err())?;
        Ok(CellId(Point::new(x, y)))
    }
}

/// Error returned when a string is not of the form `"x-y"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCellIdError(String);

impl fmt::Display for ParseCellIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell id \u{201c}{}\u{201d}, expected \u{201c}x-y\u{201d}", self.0)
    }
}

impl std::error::Error for ParseCellIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_formats_as_x_dash_y() {
        let c = Cell::new(Point::new(3, 12), CellStatus::Empty);
        assert_eq!(c.id().to_string(), "3-12");
        assert_eq!((c.x(), c.y()), (3, 12));
    }

    #[test]
    fn id_parses_back() {
        let id: CellId = "7-0".parse().unwrap();
        assert_eq!(id, CellId(Point::new(7, 0)));
    }

    #[test]
    fn id_rejects_malformed() {
        for s in ["", "7", "7-", "-3", "a-b", "1-2-3", "-1-2"] {
            assert!(s.parse::<CellId>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn with_status_builds_new_value() {
        let c = Cell::new(Point::new(1, 1), CellStatus::Empty);
        let b = c.with_status(CellStatus::Blocked);
        assert!(b.is_blocked());
        assert!(!c.is_blocked());
        assert_eq!(b.id(), c.id());
    }

    #[test]
    fn glyphs_round_trip() {
        for s in [
            CellStatus::Empty,
            CellStatus::Blocked,
            CellStatus::Start,
            CellStatus::End,
        ] {
            assert_eq!(CellStatus::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellStatus::from_glyph('x'), None);
        assert!(CellStatus::Start.is_endpoint());
        assert!(!CellStatus::Blocked.is_endpoint());
    }
}
