//! Game orchestration between players.
//!
//! The orchestrator is the single owner of the [`GameState`]. Players only
//! ever see a shared reference to it and return the move they want; the
//! orchestrator validates and applies it.

use crate::players::Player;
use anyhow::Result;
use gridtoe_rules::{Board, GameResult, GameState, Move, Player as Mark};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player is on the move.
    TurnStarted {
        /// Display name.
        player: String,
        /// Mark being played.
        mark: Mark,
        /// True when the mover is a computer and no input is expected.
        is_computer: bool,
    },
    /// A computer player is thinking.
    AgentThinking {
        /// Display name.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Display name.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Where it was placed.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// The board refused a move; the same player is asked again.
    MoveRejected {
        /// Display name.
        player: String,
        /// Refused move.
        mv: Move,
        /// Why it was refused.
        reason: String,
    },
    /// A line of input could not be read as a move.
    InvalidInput {
        /// Display name.
        player: String,
        /// Raw input.
        input: String,
    },
    /// Game ended.
    GameOver {
        /// Final result.
        result: GameResult,
        /// Name of the winner, if any.
        winner: Option<String>,
        /// Final board.
        board: Board,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh or resumed game.
    pub fn new(
        game: GameState,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game,
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the current game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Consumes the orchestrator, returning the game state.
    pub fn into_game(self) -> GameState {
        self.game
    }

    fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Runs the game loop until the game is won or drawn.
    ///
    /// # Errors
    ///
    /// Propagates player errors (including [`crate::players::Quit`]) and a
    /// closed event channel. The game state is left as it was before the
    /// failing turn, so it can still be saved.
    #[instrument(skip(self), fields(size = self.game.board().size()))]
    pub async fn run(&mut self) -> Result<GameResult> {
        info!("Starting game orchestration");

        while !self.game.is_over() {
            let mark = self.game.to_move();
            let name = self.name_of(mark).to_string();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let is_computer = player.is_computer();

            self.event_tx.send(GameEvent::TurnStarted {
                player: name.clone(),
                mark,
                is_computer,
            })?;

            if is_computer {
                self.event_tx.send(GameEvent::AgentThinking {
                    player: name.clone(),
                })?;
            }

            debug!(player = %name, %mark, "Waiting for move");
            let mv = player.get_move(&self.game).await?;

            match self.game.play(mv).map(|_| ()) {
                Ok(()) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: name,
                        mark,
                        mv,
                        board: self.game.board().clone(),
                    })?;
                }
                Err(e) => {
                    warn!(player = %name, %mv, error = %e, "Move rejected");
                    self.event_tx.send(GameEvent::MoveRejected {
                        player: name,
                        mv,
                        reason: e.to_string(),
                    })?;
                }
            }
        }

        let result = self.game.result().clone();
        let winner = result.winner().map(|mark| self.name_of(mark).to_string());
        info!(%result, "Game over");

        self.event_tx.send(GameEvent::GameOver {
            result: result.clone(),
            winner,
            board: self.game.board().clone(),
        })?;
        Ok(result)
    }
}
