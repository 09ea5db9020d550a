//! Whole-game tests for the computer opponent.

use gridtoe_rules::{
    Board, BoardSize, Difficulty, GameState, Move, MoveSelector, Player, minimax_move,
};

/// Plays a full game between two tiers and returns the winner, if any.
fn play_out(size: BoardSize, x: Difficulty, o: Difficulty, seed: u64) -> Option<Player> {
    let mut game = GameState::new(size);
    let mut selector = MoveSelector::seeded(seed);

    while !game.is_over() {
        let difficulty = match game.to_move() {
            Player::X => x,
            Player::O => o,
        };
        let mv = selector
            .select(game.board(), game.to_move(), difficulty)
            .expect("unfinished game has an empty cell");
        game.play(mv).expect("selector only proposes empty cells");
    }
    game.winner()
}

#[test]
fn test_hard_vs_hard_draws() {
    assert_eq!(
        play_out(BoardSize::CLASSIC, Difficulty::Hard, Difficulty::Hard, 0),
        None
    );
}

#[test]
fn test_hard_never_loses_as_x() {
    for seed in 0..25 {
        for opponent in [Difficulty::Easy, Difficulty::Medium] {
            let winner = play_out(BoardSize::CLASSIC, Difficulty::Hard, opponent, seed);
            assert_ne!(winner, Some(Player::O), "lost to {opponent} with seed {seed}");
        }
    }
}

#[test]
fn test_hard_never_loses_as_o() {
    for seed in 0..25 {
        for opponent in [Difficulty::Easy, Difficulty::Medium] {
            let winner = play_out(BoardSize::CLASSIC, opponent, Difficulty::Hard, seed);
            assert_ne!(winner, Some(Player::X), "lost to {opponent} with seed {seed}");
        }
    }
}

#[test]
fn test_hard_first_move_is_not_losing() {
    let board = Board::new(BoardSize::CLASSIC);
    let opening = minimax_move(&board, Player::X).unwrap();
    let after = board.with_mark(opening, Player::X).unwrap();

    // Whatever O replies, X can still hold at least a draw.
    for row in 0..3 {
        for col in 0..3 {
            let reply = Move::new(row, col);
            let Ok(board) = after.with_mark(reply, Player::O) else {
                continue;
            };
            let mut game_board = board;
            let mut player = Player::X;
            let mut last = reply;
            loop {
                if let Some(line) = gridtoe_rules::check_win(&game_board, last) {
                    assert_eq!(line.player, Player::X, "opening {opening} lost to {reply}");
                    break;
                }
                let Some(mv) = minimax_move(&game_board, player) else {
                    break;
                };
                game_board = game_board.with_mark(mv, player).unwrap();
                last = mv;
                player = player.opponent();
            }
        }
    }
}

#[test]
fn test_hard_falls_back_to_medium_on_larger_boards() {
    let boards = [
        "XXX./O.../O.../....",
        "..../.X../..../....",
        "OO../XX../..../....",
    ];
    for text in boards {
        let board: Board = text.parse().unwrap();
        for seed in 0..5 {
            let hard = MoveSelector::seeded(seed).select(&board, Player::O, Difficulty::Hard);
            let medium = MoveSelector::seeded(seed).select(&board, Player::O, Difficulty::Medium);
            assert_eq!(hard, medium, "board {text} seed {seed}");
        }
    }
}

#[test]
fn test_medium_blocks_on_larger_board() {
    let board: Board = "XXX./O.../O.../....".parse().unwrap();
    assert_eq!(
        MoveSelector::seeded(1).select(&board, Player::O, Difficulty::Medium),
        Some(Move::new(0, 3))
    );
}

#[test]
fn test_larger_boards_finish() {
    for n in [4, 5, 7] {
        let size = BoardSize::new(n).unwrap();
        for seed in 0..3 {
            // Reaching a result without panicking is the assertion.
            play_out(size, Difficulty::Hard, Difficulty::Easy, seed);
        }
    }
}
