//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Rules are kept apart from board
//! storage so the move selector can reuse them on hypothetical boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_win;

use crate::action::{Move, MoveError};
use crate::outcome::GameResult;
use crate::types::{Board, BoardSize, Player, Square};
use tracing::{instrument, trace};

/// Creates an empty board of the given size.
#[instrument]
pub fn new_board(size: BoardSize) -> Board {
    Board::new(size)
}

/// Places `player`'s mark at `mv`, returning the updated board.
///
/// The input board is never modified.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if either coordinate is outside `[0, N)`
/// - [`MoveError::CellOccupied`] if the cell is not empty
#[instrument(skip(board), fields(size = board.size()))]
pub fn apply_move(board: &Board, mv: Move, player: Player) -> Result<Board, MoveError> {
    let next = board.with_mark(mv, player)?;
    trace!(%mv, %player, "Mark placed");
    Ok(next)
}

/// Enumerates empty cells in row-major order.
pub fn empty_cells(board: &Board) -> impl Iterator<Item = Move> + '_ {
    let size = board.size();
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .map(move |(i, _)| Move::new(i / size, i % size))
}

/// Classifies the board after `last` was played.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, last: Move) -> GameResult {
    if let Some(line) = check_win(board, last) {
        GameResult::Win(line)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
