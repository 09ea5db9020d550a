//! Terminal and non-terminal game results.

use crate::action::Move;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A completed row, column, or diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of every cell in the line.
    pub player: Player,
    /// The N cells of the line, in order along it.
    pub cells: Vec<Move>,
}

/// Status of a game after the latest move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and nobody has completed a line.
    #[default]
    InProgress,
    /// A player completed a line.
    Win(WinningLine),
    /// The board is full with no winner.
    Draw,
}

impl GameResult {
    /// Returns true unless the game is still in progress.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Win(line) => Some(line.player),
            _ => None,
        }
    }

    /// Cells of the winning line, empty unless the game was won.
    pub fn winning_cells(&self) -> &[Move] {
        match self {
            GameResult::Win(line) => &line.cells,
            _ => &[],
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(line) => write!(f, "Player {} wins", line.player),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}
