//! Explicit game state owned by whichever component drives the turns.

use crate::action::{Move, MoveError};
use crate::outcome::GameResult;
use crate::rules::{apply_move, evaluate};
use crate::types::{Board, BoardSize, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Error that can occur when playing a move in a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The board rejected the move.
    #[display("{_0}")]
    Move(MoveError),

    /// A restored game disagrees with its own move history.
    #[display("saved {} does not match the move history", field)]
    Inconsistent {
        /// Which stored field differs from the replay.
        field: &'static str,
    },
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

/// Complete game state: board, player to move, result and history.
///
/// X always moves first. The player to move only changes while the game is
/// in progress, so after a win it still names the winner.
///
/// Deserializing replays the history on an empty board and rejects the value
/// unless board, player to move and result all agree with that replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState", into = "RawGameState")]
pub struct GameState {
    board: Board,
    to_move: Player,
    result: GameResult,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Player::X,
            result: GameResult::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current result.
    pub fn result(&self) -> &GameResult {
        &self.result
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    /// Cells of the winning line, empty unless the game was won.
    pub fn winning_cells(&self) -> &[Move] {
        self.result.winning_cells()
    }

    /// Plays `mv` for the player to move.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game is finished
    /// - [`GameError::Move`] if the board rejects the move
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, mv: Move) -> Result<&GameResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let player = self.to_move;
        self.board = apply_move(&self.board, mv, player)?;
        self.history.push(mv);
        self.result = evaluate(&self.board, mv);

        if self.is_over() {
            info!(result = %self.result, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = player.opponent();
            debug!(next = %self.to_move, "Turn passed");
        }

        Ok(&self.result)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardSize::CLASSIC)
    }
}

/// Wire shape of a game; checked against its history on the way back in.
#[derive(Serialize, Deserialize)]
struct RawGameState {
    board: Board,
    to_move: Player,
    result: GameResult,
    history: Vec<Move>,
}

impl From<GameState> for RawGameState {
    fn from(game: GameState) -> Self {
        Self {
            board: game.board,
            to_move: game.to_move,
            result: game.result,
            history: game.history,
        }
    }
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    #[instrument(skip(raw), fields(moves = raw.history.len()))]
    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let mut game = Self::new(raw.board.board_size());
        for mv in &raw.history {
            game.play(*mv)?;
        }

        if game.board != raw.board {
            return Err(GameError::Inconsistent { field: "board" });
        }
        if game.to_move != raw.to_move {
            return Err(GameError::Inconsistent { field: "player to move" });
        }
        if game.result != raw.result {
            return Err(GameError::Inconsistent { field: "result" });
        }
        debug!("Restored game matches its history");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_players() {
        let mut game = GameState::default();
        assert_eq!(game.to_move(), Player::X);
        game.play(Move::new(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[Move::new(1, 1)]);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = GameState::default();
        game.play(Move::new(0, 0)).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play(Move::new(0, 0)),
            Err(GameError::Move(MoveError::CellOccupied { row: 0, col: 0 }))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = GameState::default();
        for mv in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(mv.into()).unwrap();
        }
        assert_eq!(game.winner(), Some(Player::X));
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.winning_cells().len(), 3);
        assert_eq!(game.play(Move::new(2, 2)), Err(GameError::GameOver));
    }

    #[test]
    fn test_draw_ends_game() {
        let mut game = GameState::default();
        // X O X / X O O / O X X
        for mv in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ] {
            game.play(mv.into()).unwrap();
        }
        assert_eq!(game.result(), &GameResult::Draw);
        assert!(game.is_over());
    }

    #[test]
    fn test_restore_replays_history() {
        let mut game = GameState::default();
        for mv in [(0, 0), (1, 1), (2, 2)] {
            game.play(mv.into()).unwrap();
        }
        let raw = RawGameState::from(game.clone());
        assert_eq!(GameState::try_from(raw).unwrap(), game);
    }

    #[test]
    fn test_restore_rejects_wrong_side_to_move() {
        let mut game = GameState::default();
        game.play(Move::new(0, 0)).unwrap();
        let mut raw = RawGameState::from(game);
        raw.to_move = Player::X;
        assert_eq!(
            GameState::try_from(raw),
            Err(GameError::Inconsistent {
                field: "player to move"
            })
        );
    }
}
