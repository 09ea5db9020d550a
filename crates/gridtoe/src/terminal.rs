//! Plain-text rendering of boards and game events.

use crate::orchestrator::GameEvent;
use gridtoe_rules::{Board, GameResult, Move};

/// Draws the board with 1-based row and column labels.
///
/// Cells in `highlight` are wrapped in brackets.
pub fn render_board(board: &Board, highlight: &[Move]) -> String {
    let n = board.size();
    let mut out = String::from("   ");
    for col in 1..=n {
        out.push_str(&format!("{:^3}", col));
    }

    for (r, row) in board.rows().enumerate() {
        out.push_str(&format!("\n{:>2} ", r + 1));
        for (c, square) in row.iter().enumerate() {
            let symbol = square.symbol();
            if highlight.contains(&Move::new(r, c)) {
                out.push_str(&format!("[{}]", symbol));
            } else {
                out.push_str(&format!(" {} ", symbol));
            }
        }
    }
    out
}

/// Turns an event into the text shown to the user.
pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::TurnStarted {
            player,
            mark,
            is_computer: true,
        } => format!("{} ({}) to move.", player, mark),
        GameEvent::TurnStarted { player, mark, .. } => format!(
            "{} ({}) to move. Enter row and column, or q to quit:",
            player, mark
        ),
        GameEvent::AgentThinking { player } => format!("{} is thinking...", player),
        GameEvent::MoveMade {
            player,
            mark,
            mv,
            board,
        } => format!(
            "{} plays {} at row {}, column {}\n{}",
            player,
            mark,
            mv.row + 1,
            mv.col + 1,
            render_board(board, &[])
        ),
        GameEvent::MoveRejected { player, reason, .. } => {
            format!("{} cannot play there: {}", player, reason)
        }
        GameEvent::InvalidInput { input, .. } => format!(
            "Could not read {:?} as a move. Try \"2 3\" for row 2, column 3.",
            input
        ),
        GameEvent::GameOver {
            result,
            winner,
            board,
        } => {
            let headline = match (result, winner) {
                (GameResult::Win(line), Some(name)) => format!("{} ({}) wins!", name, line.player),
                (GameResult::Draw, _) => "It's a draw.".to_string(),
                (other, _) => other.to_string(),
            };
            format!(
                "{}\n{}",
                render_board(board, result.winning_cells()),
                headline
            )
        }
    }
}
