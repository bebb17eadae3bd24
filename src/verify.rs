use pathfinding::prelude::bfs;
use rustc_hash::FxHashSet;

use crate::error::PathViolation;
use crate::grid::{Grid, Position};

/// Replays the first `steps` entries of `buffer` from `start` and checks the
/// walk is a simple path of walkable, orthogonally adjacent cells ending on
/// `target`.
pub fn replay_path(
    grid: &Grid<'_>,
    start: Position,
    target: Position,
    buffer: &[i32],
    steps: usize,
) -> Result<(), PathViolation> {
    if steps > buffer.len() {
        return Err(PathViolation::Truncated {
            steps,
            capacity: buffer.len(),
        });
    }

    let mut seen = FxHashSet::default();
    seen.insert(start);
    let mut at = start;
    for (step, &index) in buffer[..steps].iter().enumerate() {
        if index < 0 || index as usize >= grid.cell_count() {
            return Err(PathViolation::IndexOutOfRange { step, index });
        }
        let next = grid.to_position(index as usize);
        if !grid.is_walkable(next) {
            return Err(PathViolation::Blocked {
                step,
                position: next,
            });
        }
        if at.manhattan_distance(next) != 1 {
            return Err(PathViolation::NotAdjacent {
                step,
                from: at,
                to: next,
            });
        }
        if !seen.insert(next) {
            return Err(PathViolation::Revisited {
                step,
                position: next,
            });
        }
        at = next;
    }

    if at != target {
        return Err(PathViolation::WrongEnd {
            expected: target,
            actual: at,
        });
    }
    Ok(())
}

/// Length of a shortest walkable path, ignoring any buffer capacity.
///
/// Used as an independent reference for the engine's own answers.
pub fn shortest_path_len(grid: &Grid<'_>, start: Position, target: Position) -> Option<usize> {
    if !grid.is_walkable(start) || !grid.is_walkable(target) {
        return None;
    }
    bfs(&start, |p| grid.neighbors(*p).collect::<Vec<_>>(), |p| *p == target)
        .map(|path| path.len() - 1)
}
