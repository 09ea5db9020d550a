//! Exhaustive minimax search with alpha-beta pruning.
//!
//! Every recursive call works on its own [`Board`] value, so the search never
//! mutates a shared board and needs no undo step.

use crate::action::Move;
use crate::rules::{check_win, empty_cells, is_full};
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Base score of a win; the search depth is subtracted from it.
const WIN_SCORE: i32 = 10;

/// Returns a provably optimal move for `player`, or `None` if the board is
/// full.
///
/// Each candidate is placed for `player` and then scored with the opponent to
/// move. Wins score `10 - depth` and losses `depth - 10`, so faster wins and
/// slower losses are preferred. Ties keep the earliest cell in row-major
/// order, which makes the result deterministic.
///
/// Cost grows with the factorial of the empty cell count; callers restrict it
/// to 3×3 boards.
#[instrument(skip(board), fields(size = board.size()))]
pub fn minimax_move(board: &Board, player: Player) -> Option<Move> {
    let search = Search { player };
    let mut best: Option<(i32, Move)> = None;

    for mv in empty_cells(board) {
        let Ok(child) = board.with_mark(mv, player) else {
            continue;
        };
        let score = search.score(&child, mv, 0, false, i32::MIN, i32::MAX);
        if best.is_none_or(|(top, _)| score > top) {
            best = Some((score, mv));
        }
    }

    if let Some((score, mv)) = best {
        debug!(%mv, score, "Search complete");
    }
    best.map(|(_, mv)| mv)
}

/// Search context for one root player.
struct Search {
    player: Player,
}

impl Search {
    /// Scores `board`, reached by playing `last`, from the root player's view.
    fn score(
        &self,
        board: &Board,
        last: Move,
        depth: i32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if let Some(line) = check_win(board, last) {
            return if line.player == self.player {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }
        if is_full(board) {
            return 0;
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in empty_cells(board) {
            let Ok(child) = board.with_mark(mv, mover) else {
                continue;
            };
            let score = self.score(&child, mv, depth + 1, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardSize;

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(minimax_move(&board, Player::X), Some(Move::new(0, 2)));
        assert_eq!(minimax_move(&board, Player::O), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_blocks_threat() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(minimax_move(&board, Player::O), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_only_non_losing_move() {
        // O threatens the middle column; every other X move loses next turn.
        let board: Board = "XO./.O./..X".parse().unwrap();
        assert_eq!(minimax_move(&board, Player::X), Some(Move::new(2, 1)));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(minimax_move(&board, Player::X), None);
    }

    #[test]
    fn test_deterministic() {
        let board = Board::new(BoardSize::CLASSIC);
        let first = minimax_move(&board, Player::X);
        assert_eq!(first, minimax_move(&board, Player::X));
        let mv = first.unwrap();
        let is_corner = (mv.row == 0 || mv.row == 2) && (mv.col == 0 || mv.col == 2);
        assert!(is_corner || mv == Move::new(1, 1));
    }
}
