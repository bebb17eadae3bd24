//! Shortest-path search over 2-D occupancy grids.
//!
//! The grid is a caller-owned, row-major byte slice. A cell is walkable when
//! its byte matches the marker found under the start cell: `'1'` for grids
//! written in ASCII digits, `1` otherwise. Paths are reported as linear cell
//! indices (`y * width + x`) written into a caller-provided buffer whose
//! length also bounds how far the search may go.
//!
//! ```
//! let grid: [u8; 16] = [
//!     1, 1, 0, 1,
//!     1, 0, 1, 0,
//!     1, 0, 1, 0,
//!     1, 1, 1, 1,
//! ];
//! let mut out = [0; 20];
//! let steps = grid_pathfinder::find_path(0, 0, 3, 3, &grid, 4, 4, &mut out);
//! assert_eq!(steps, 6);
//! assert_eq!(&out[..6], &[4, 8, 12, 13, 14, 15]);
//! ```

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod node;
pub mod runner;
pub mod scenarios;
pub mod search;
pub mod statistics;
pub mod verify;

pub use algorithms::Strategy;
pub use error::{PathViolation, Rejection};
pub use grid::{Grid, Position};
pub use search::{Pathfinder, Query, SearchOutcome, SearchReport};
pub use statistics::SearchStats;

/// Returned in place of a step count when no path fits in the buffer.
pub const NO_PATH_EXISTS: i32 = -1;

/// Breadth-first search from start to target.
///
/// Returns the number of steps written to `out`, `0` when start and target
/// coincide, or [`NO_PATH_EXISTS`]. Malformed input (bad dimensions, a grid
/// slice of the wrong length, coordinates off the grid) also yields
/// [`NO_PATH_EXISTS`].
#[allow(clippy::too_many_arguments)]
pub fn find_path(
    start_x: i32,
    start_y: i32,
    target_x: i32,
    target_y: i32,
    grid: &[u8],
    width: i32,
    height: i32,
    out: &mut [i32],
) -> i32 {
    find_path_with(
        Strategy::BreadthFirst,
        start_x,
        start_y,
        target_x,
        target_y,
        grid,
        width,
        height,
        out,
    )
}

/// [`find_path`] with an explicit frontier strategy.
#[allow(clippy::too_many_arguments)]
pub fn find_path_with(
    strategy: Strategy,
    start_x: i32,
    start_y: i32,
    target_x: i32,
    target_y: i32,
    grid: &[u8],
    width: i32,
    height: i32,
    out: &mut [i32],
) -> i32 {
    let query = Query {
        start: Position::new(start_x, start_y),
        target: Position::new(target_x, target_y),
        cells: grid,
        width,
        height,
    };
    Pathfinder::new(strategy).search(&query, out).step_count()
}
