//! Computer opponent.
//!
//! Three tiers, picked per call:
//! - **Easy** plays a uniformly random empty cell
//! - **Medium** runs the ordered rules of [`RulePolicy::medium`]
//! - **Hard** searches exhaustively on 3×3 and falls back to Medium elsewhere

mod heuristic;
mod minimax;

pub use heuristic::{
    AnyCell, BlockOpponent, CompleteLine, MoveRule, RulePolicy, TakeCenter, TakeCorner,
};
pub use minimax::minimax_move;

use crate::action::Move;
use crate::rules::{empty_cells, is_full};
use crate::types::{Board, Player};
use rand::seq::IteratorRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length on which Hard runs the exhaustive search.
const SEARCHABLE_SIZE: usize = 3;

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random empty cell.
    Easy,
    /// Win, block, center, corner, anything.
    #[default]
    Medium,
    /// Perfect play on 3×3.
    Hard,
}

/// Move selector with its own random source.
///
/// Seed it with [`MoveSelector::seeded`] to make Easy and Medium reproducible.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    rng: ChaCha8Rng,
    medium: RulePolicy,
}

impl MoveSelector {
    /// Creates a selector with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            medium: RulePolicy::medium(),
        }
    }

    /// Creates a selector seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            medium: RulePolicy::medium(),
        }
    }

    /// Proposes a move for `player`, or `None` if the board is full.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn select(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Option<Move> {
        choose(board, player, difficulty, &self.medium, &mut self.rng)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Proposes a move for `player` using thread-local randomness.
///
/// Returns `None` if the board is full.
#[instrument(skip(board), fields(size = board.size()))]
pub fn select_move(board: &Board, player: Player, difficulty: Difficulty) -> Option<Move> {
    choose(
        board,
        player,
        difficulty,
        &RulePolicy::medium(),
        &mut rand::thread_rng(),
    )
}

fn choose(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    medium: &RulePolicy,
    rng: &mut dyn RngCore,
) -> Option<Move> {
    if is_full(board) {
        return None;
    }

    let mv = match difficulty {
        Difficulty::Easy => empty_cells(board).choose(rng),
        Difficulty::Medium => medium.propose(board, player, rng),
        Difficulty::Hard if board.size() == SEARCHABLE_SIZE => minimax_move(board, player),
        Difficulty::Hard => {
            debug!(
                size = board.size(),
                "Exhaustive search only runs on 3x3, using medium rules"
            );
            medium.propose(board, player, rng)
        }
    };

    debug!(?mv, %player, %difficulty, "Move selected");
    mv
}
