//! Computer player backed by the move selector.

use super::Player;
use anyhow::Result;
use gridtoe_rules::{Difficulty, GameState, Move, MoveSelector};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent at a fixed difficulty.
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    delay: Duration,
    selector: MoveSelector,
}

impl ComputerPlayer {
    /// Creates a computer player seeded from the operating system.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, difficulty: Difficulty, delay: Duration) -> Self {
        Self {
            name: name.as_ref().to_string(),
            difficulty,
            delay,
            selector: MoveSelector::from_entropy(),
        }
    }

    /// Replaces the random source with a seeded one.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.selector = MoveSelector::seeded(seed);
        self
    }

    /// Difficulty this player uses.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, game: &GameState) -> Result<Move> {
        debug!(ai = %self.name, difficulty = %self.difficulty, "AI making move");

        // Pause so a human opponent can follow along.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mv = self
            .selector
            .select(game.board(), game.to_move(), self.difficulty)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        debug!(ai = %self.name, %mv, "AI chose position");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}
