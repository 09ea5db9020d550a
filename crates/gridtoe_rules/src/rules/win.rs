//! Win detection for N×N tic-tac-toe.

use crate::action::Move;
use crate::outcome::WinningLine;
use crate::types::{Board, Square};

/// Checks whether the mark at `last` completed a line.
///
/// Only the row, the column, and any diagonal through `last` are inspected,
/// in that order. A line can only be completed by the move just played, so
/// this is O(N) instead of a full-board scan.
///
/// Returns `None` if `last` is off the board or empty.
pub fn check_win(board: &Board, last: Move) -> Option<WinningLine> {
    let Some(Square::Occupied(player)) = board.get(last) else {
        return None;
    };
    let n = board.size();

    let mut lines: Vec<Vec<Move>> = vec![
        (0..n).map(|col| Move::new(last.row, col)).collect(),
        (0..n).map(|row| Move::new(row, last.col)).collect(),
    ];
    if last.row == last.col {
        lines.push((0..n).map(|i| Move::new(i, i)).collect());
    }
    if last.row + last.col == n - 1 {
        lines.push((0..n).map(|i| Move::new(i, n - 1 - i)).collect());
    }

    lines
        .into_iter()
        .find(|cells| {
            cells
                .iter()
                .all(|&mv| board.get(mv) == Some(Square::Occupied(player)))
        })
        .map(|cells| WinningLine { player, cells })
}
