//! Draw detection for N×N tic-tac-toe.

use super::win::check_win;
use crate::action::Move;
use crate::types::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board on which `last` completed no line.
pub fn is_draw(board: &Board, last: Move) -> bool {
    is_full(board) && check_win(board, last).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardSize;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(BoardSize::CLASSIC);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board: Board = "XOX/XOO/OX.".parse().unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board, Move::new(2, 1)));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board, Move::new(2, 2)));
    }

    #[test]
    fn test_not_draw_if_last_move_wins() {
        // Full board where X's last move at (2, 2) completes the diagonal.
        let board: Board = "XOO/OXX/OXX".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board, Move::new(2, 2)));
    }
}
