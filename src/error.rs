use thiserror::Error;

use crate::grid::Position;

/// Why a query was refused before any search ran.
///
/// None of these are failures of the engine; the public entry points report
/// every one of them as [`crate::NO_PATH_EXISTS`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("grid dimensions {width}x{height} are not positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// Cell indices must fit the `i32` output buffer.
    #[error("grid {width}x{height} has more than i32::MAX cells")]
    GridTooLarge { width: i32, height: i32 },

    #[error("grid holds {actual} cells but {expected} were declared")]
    GridSizeMismatch { expected: usize, actual: usize },

    #[error("start {0:?} lies outside the grid")]
    StartOutOfBounds(Position),

    #[error("target {0:?} lies outside the grid")]
    TargetOutOfBounds(Position),

    /// Even a straight path would not fit in the caller's buffer.
    #[error("manhattan distance {distance} exceeds buffer capacity {capacity}")]
    BeyondCapacity { distance: i32, capacity: usize },

    #[error("start {0:?} is not walkable")]
    StartBlocked(Position),

    #[error("target {0:?} is not walkable")]
    TargetBlocked(Position),

    #[error("target {0:?} has no walkable neighbours")]
    TargetIsolated(Position),

    #[error("start {0:?} has no walkable neighbours")]
    StartIsolated(Position),
}

/// Why a reported path does not replay from start to target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathViolation {
    #[error("step {step} index {index} is outside the grid")]
    IndexOutOfRange { step: usize, index: i32 },

    #[error("step {step} lands on blocked cell {position:?}")]
    Blocked { step: usize, position: Position },

    #[error("step {step} jumps from {from:?} to {to:?}")]
    NotAdjacent {
        step: usize,
        from: Position,
        to: Position,
    },

    #[error("step {step} revisits {position:?}")]
    Revisited { step: usize, position: Position },

    #[error("path ends at {actual:?} instead of {expected:?}")]
    WrongEnd { expected: Position, actual: Position },

    #[error("{steps} steps reported but the buffer only holds {capacity}")]
    Truncated { steps: usize, capacity: usize },
}
