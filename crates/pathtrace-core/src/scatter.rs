//! Random obstacle placement.

use rand::Rng;

use crate::cell::CellStatus;
use crate::grid::Grid;

/// Block each Empty cell of `grid` with probability `density` (clamped to
/// `0.0..=1.0`). Start and End are never touched, nor are cells that are
/// already Blocked.
///
/// Returns the number of cells newly blocked.
pub fn scatter_obstacles<R: Rng>(grid: &mut Grid, density: f64, rng: &mut R) -> usize {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let targets: Vec<_> = grid
        .iter()
        .filter(|c| c.status == CellStatus::Empty)
        .map(|c| c.pos)
        .collect();

    let mut blocked = 0;
    for p in targets {
        if rng.random_bool(density) && grid.set_status(p, CellStatus::Blocked) {
            blocked += 1;
        }
    }
    log::trace!("scattered {blocked} obstacles at density {density:.2}");
    blocked
}
