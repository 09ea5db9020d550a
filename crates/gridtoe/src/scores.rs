//! Running tally of finished games.

use derive_getters::Getters;
use gridtoe_rules::{GameResult, Player as Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per mark and draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Games still in progress are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::Win(line) => match line.player {
                Mark::X => self.x_wins += 1,
                Mark::O => self.o_wins += 1,
            },
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => debug!("Ignoring unfinished game"),
        }
    }

    /// Wins for one mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Clears every count.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtoe_rules::{Move, WinningLine};

    fn win(player: Mark) -> GameResult {
        GameResult::Win(WinningLine {
            player,
            cells: vec![Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
        })
    }

    #[test]
    fn test_record_and_reset() {
        let mut scores = Scoreboard::new();
        scores.record(&win(Mark::X));
        scores.record(&win(Mark::X));
        scores.record(&win(Mark::O));
        scores.record(&GameResult::Draw);
        scores.record(&GameResult::InProgress);

        assert_eq!(scores.wins(Mark::X), 2);
        assert_eq!(*scores.o_wins(), 1);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.games(), 4);
        assert_eq!(scores.to_string(), "X: 2  O: 1  Draws: 1");

        scores.reset();
        assert_eq!(scores, Scoreboard::default());
    }
}
