//! **pathtrace-core**: grid model for the pathtrace search engine.
//!
//! This crate provides the value types every search consumes: geometry
//! primitives, cells with their search status, the copy-on-write [`Grid`]
//! snapshot with neighbour lookup and endpoint discovery, and a seeded
//! obstacle scatterer for demos and randomized tests.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod scatter;

pub use cell::{Cell, CellId, CellStatus, ParseCellIdError};
pub use geom::{CARDINALS, Point, Range};
pub use grid::{DEFAULT_GRID_SIZE, Endpoints, GRID_SIZES, Grid, GridError};
pub use scatter::scatter_obstacles;
