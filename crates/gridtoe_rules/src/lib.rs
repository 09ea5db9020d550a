//! Pure game logic for tic-tac-toe on N×N boards.
//!
//! This crate has no I/O. It owns the board, the rules that decide when a
//! game is over, and the computer opponent.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`BoardSize`]
//! - **Rules**: [`apply_move`], [`check_win`], [`is_draw`], [`empty_cells`]
//! - **AI**: [`select_move`] and [`MoveSelector`] across three [`Difficulty`] tiers
//! - **Game**: [`GameState`], an explicit value owned by whoever drives the turns
//!
//! # Example
//!
//! ```
//! use gridtoe_rules::{BoardSize, Difficulty, GameState, MoveSelector};
//!
//! let mut game = GameState::new(BoardSize::CLASSIC);
//! let mut ai = MoveSelector::seeded(7);
//!
//! while !game.is_over() {
//!     let mv = ai
//!         .select(game.board(), game.to_move(), Difficulty::Hard)
//!         .expect("board is not full");
//!     game.play(mv).expect("selector proposes legal moves");
//! }
//! assert!(game.winner().is_none(), "perfect play draws");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod game;
mod outcome;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use ai::{
    AnyCell, BlockOpponent, CompleteLine, Difficulty, MoveRule, MoveSelector, RulePolicy,
    TakeCenter, TakeCorner, minimax_move, select_move,
};
pub use game::{GameError, GameState};
pub use outcome::{GameResult, WinningLine};
pub use rules::{apply_move, check_win, empty_cells, evaluate, is_draw, is_full, new_board};
pub use types::{
    Board, BoardError, BoardSize, BoardSizeError, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Player, Square,
};
