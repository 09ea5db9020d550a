//! Human player that reads moves from lines of text.

use super::{Player, Quit};
use crate::orchestrator::GameEvent;
use anyhow::Result;
use gridtoe_rules::{GameState, Move};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

/// Parses `"row col"` or `"row,col"` with 1-based coordinates.
///
/// Bounds are not checked here; the board reports out-of-range moves.
pub fn parse_move(input: &str) -> Option<Move> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(row.checked_sub(1)?, col.checked_sub(1)?))
}

/// Lines of input shared by every human at the same terminal.
pub type InputLines = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Wraps a line receiver so several players can read from it in turn.
pub fn input_lines(rx: mpsc::UnboundedReceiver<String>) -> InputLines {
    Arc::new(Mutex::new(rx))
}

/// Human player fed by a channel of input lines.
pub struct HumanPlayer {
    name: String,
    input: InputLines,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(
        name: impl Into<String>,
        input: InputLines,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            input,
            event_tx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &GameState) -> Result<Move> {
        let mut input = self.input.lock().await;
        while let Some(line) = input.recv().await {
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                debug!(player = %self.name, "Player quit");
                return Err(Quit.into());
            }
            if let Some(mv) = parse_move(line) {
                return Ok(mv);
            }

            warn!(player = %self.name, input = line, "Unparsable move");
            self.event_tx.send(GameEvent::InvalidInput {
                player: self.name.clone(),
                input: line.to_string(),
            })?;
        }

        debug!(player = %self.name, "Input channel closed");
        Err(Quit.into())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
