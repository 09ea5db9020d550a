//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, InputLines, input_lines, parse_move};

use anyhow::Result;
use derive_more::{Display, Error};
use gridtoe_rules::{GameState, Move};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player for the position in `game`.
    async fn get_move(&mut self, game: &GameState) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for players that take time to compute a move.
    fn is_computer(&self) -> bool {
        false
    }
}

/// Returned by a player who leaves mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Player quit")]
pub struct Quit;
