//! Rule-based move selection.
//!
//! A [`RulePolicy`] is an ordered list of [`MoveRule`]s. Each rule either
//! proposes a move or declines, and the first proposal wins.

use crate::action::Move;
use crate::rules::{check_win, empty_cells};
use crate::types::{Board, Player};
use rand::RngCore;
use rand::seq::{IteratorRandom, SliceRandom};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::trace;

/// One step in a rule-based policy.
pub trait MoveRule: Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Proposes a move for `player`, or `None` to defer to the next rule.
    fn propose(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> Option<Move>;
}

/// Returns true if `player` marking `mv` completes a line.
fn wins_at(board: &Board, mv: Move, player: Player) -> bool {
    board
        .with_mark(mv, player)
        .is_ok_and(|next| check_win(&next, mv).is_some())
}

/// Take a cell that wins immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteLine;

impl MoveRule for CompleteLine {
    fn name(&self) -> &'static str {
        "complete-line"
    }

    fn propose(&self, board: &Board, player: Player, _rng: &mut dyn RngCore) -> Option<Move> {
        empty_cells(board).find(|&mv| wins_at(board, mv, player))
    }
}

/// Take a cell the opponent would win with on their next turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockOpponent;

impl MoveRule for BlockOpponent {
    fn name(&self) -> &'static str {
        "block-opponent"
    }

    fn propose(&self, board: &Board, player: Player, _rng: &mut dyn RngCore) -> Option<Move> {
        let opponent = player.opponent();
        empty_cells(board).find(|&mv| wins_at(board, mv, opponent))
    }
}

/// Take the center cell `(N/2, N/2)` if it is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeCenter;

impl MoveRule for TakeCenter {
    fn name(&self) -> &'static str {
        "take-center"
    }

    fn propose(&self, board: &Board, _player: Player, _rng: &mut dyn RngCore) -> Option<Move> {
        let center = board.size() / 2;
        let mv = Move::new(center, center);
        board.is_empty_at(mv).then_some(mv)
    }
}

/// Take a random free corner.
#[derive(Debug, Clone, Copy, Default)]
pub struct TakeCorner;

impl MoveRule for TakeCorner {
    fn name(&self) -> &'static str {
        "take-corner"
    }

    fn propose(&self, board: &Board, _player: Player, rng: &mut dyn RngCore) -> Option<Move> {
        let last = board.size() - 1;
        let free: Vec<Move> = [(0, 0), (0, last), (last, 0), (last, last)]
            .into_iter()
            .map(Move::from)
            .filter(|&mv| board.is_empty_at(mv))
            .collect();
        free.choose(rng).copied()
    }
}

/// Take any free cell at random.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCell;

impl MoveRule for AnyCell {
    fn name(&self) -> &'static str {
        "any-cell"
    }

    fn propose(&self, board: &Board, _player: Player, rng: &mut dyn RngCore) -> Option<Move> {
        empty_cells(board).choose(rng)
    }
}

/// Ordered list of rules evaluated until one proposes a move.
#[derive(Debug, Clone, Default)]
pub struct RulePolicy {
    rules: Vec<Arc<dyn MoveRule>>,
}

impl RulePolicy {
    /// Creates an empty policy that never proposes anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Medium tier: win, block, center, corner, anything.
    pub fn medium() -> Self {
        Self::new()
            .with_rule(CompleteLine)
            .with_rule(BlockOpponent)
            .with_rule(TakeCenter)
            .with_rule(TakeCorner)
            .with_rule(AnyCell)
    }

    /// Appends a rule at the lowest priority.
    #[must_use]
    pub fn with_rule(mut self, rule: impl MoveRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the rules in priority order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Runs the rules in order and returns the first proposal.
    pub fn propose(&self, board: &Board, player: Player, rng: &mut dyn RngCore) -> Option<Move> {
        self.rules.iter().find_map(|rule| {
            let mv = rule.propose(board, player, &mut *rng)?;
            trace!(rule = rule.name(), %mv, "Rule decided");
            Some(mv)
        })
    }
}
