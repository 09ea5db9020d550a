//! Gridtoe - terminal tic-tac-toe on N×N boards.
//!
//! The game logic lives in [`gridtoe_rules`]; this crate adds everything
//! around it:
//!
//! - [`settings`]: TOML settings (board size, mode, computer strength)
//! - [`scores`] and [`store`]: the running tally and a resumable game, kept as JSON
//! - [`players`]: humans reading lines of input and computers using the move selector
//! - [`orchestrator`]: the turn loop that owns the game state
//! - [`terminal`]: plain-text rendering of boards and events

#![warn(missing_docs)]

pub mod orchestrator;
pub mod players;
pub mod scores;
pub mod settings;
pub mod store;
pub mod terminal;

pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{
    ComputerPlayer, HumanPlayer, InputLines, Player, Quit, input_lines, parse_move,
};
pub use scores::Scoreboard;
pub use settings::{
    CONFIG_ENV, ConfigError, DEFAULT_CONFIG_PATH, GameMode, Settings, SettingsOverrides, config_path,
};
pub use store::{DEFAULT_STORE_PATH, SavedState, Store, StoreError};
pub use terminal::{describe, render_board};
