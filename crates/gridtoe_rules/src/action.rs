//! Moves and the errors raised when a move cannot be applied.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, 0-indexed from the top-left corner.
///
/// A `Move` is only a coordinate. Whether it is legal depends on the board it
/// is applied to, so validation happens in [`crate::apply_move`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({}, {})", row, col)]
pub struct Move {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Move {
    /// Creates a move at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Error returned when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The coordinate lies outside `[0, size)` on either axis.
    #[display("({}, {}) is outside the {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already holds a mark.
    #[display("cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(1, 2).to_string(), "(1, 2)");
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::OutOfBounds {
            row: 3,
            col: 0,
            size: 3,
        };
        assert_eq!(err.to_string(), "(3, 0) is outside the 3x3 board");

        let err = MoveError::CellOccupied { row: 1, col: 1 };
        assert!(err.to_string().contains("occupied"));
    }
}
