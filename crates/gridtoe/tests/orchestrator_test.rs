//! Integration tests for the turn loop.

use gridtoe::{ComputerPlayer, GameEvent, HumanPlayer, Orchestrator, Quit, input_lines};
use gridtoe_rules::{BoardSize, Difficulty, GameResult, GameState, Move, Player as Mark};
use std::time::Duration;
use tokio::sync::mpsc;

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_hard_computers_play_to_a_draw() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        GameState::new(BoardSize::CLASSIC),
        Box::new(ComputerPlayer::new("Alpha", Difficulty::Hard, Duration::ZERO).with_seed(1)),
        Box::new(ComputerPlayer::new("Beta", Difficulty::Hard, Duration::ZERO).with_seed(2)),
        event_tx,
    );

    let result = orchestrator.run().await.expect("Game failed");
    assert_eq!(result, GameResult::Draw);
    assert_eq!(orchestrator.game().history().len(), 9);

    let events = drain(&mut event_rx);
    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 9);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::AgentThinking { player } if player == "Beta"))
    );
    assert!(events.iter().all(|e| match e {
        GameEvent::TurnStarted { is_computer, .. } => *is_computer,
        _ => true,
    }));
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver { winner: None, result: GameResult::Draw, .. })
    ));
}

#[tokio::test]
async fn test_mixed_strengths_finish_on_larger_board() {
    let (event_tx, _event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        GameState::new(BoardSize::new(5).unwrap()),
        Box::new(ComputerPlayer::new("Easy", Difficulty::Easy, Duration::ZERO).with_seed(7)),
        Box::new(ComputerPlayer::new("Hard", Difficulty::Hard, Duration::ZERO).with_seed(8)),
        event_tx,
    );

    let result = orchestrator.run().await.expect("Game failed");
    assert!(result.is_over());
    assert!(orchestrator.game().is_over());
}

#[tokio::test]
async fn test_illegal_human_moves_are_asked_again() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    let human = HumanPlayer::new("Human", input_lines(input_rx), event_tx.clone());
    let computer = ComputerPlayer::new("Computer", Difficulty::Medium, Duration::ZERO).with_seed(3);
    let mut orchestrator =
        Orchestrator::new(GameState::default(), Box::new(human), Box::new(computer), event_tx);

    // Legal, then occupied, then off the board, then quit.
    for line in ["1 1", "1 1", "4 4", "q"] {
        input_tx.send(line.to_string()).unwrap();
    }

    let err = orchestrator.run().await.unwrap_err();
    assert!(err.downcast_ref::<Quit>().is_some());

    let game = orchestrator.into_game();
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.history()[0], Move::new(0, 0));
    assert_eq!(game.to_move(), Mark::X);
    assert!(!game.is_over());

    let rejected: Vec<Move> = drain(&mut event_rx)
        .into_iter()
        .filter_map(|e| match e {
            GameEvent::MoveRejected { mv, .. } => Some(mv),
            _ => None,
        })
        .collect();
    assert_eq!(rejected, vec![Move::new(0, 0), Move::new(3, 3)]);
}

#[tokio::test]
async fn test_resumed_game_continues_with_the_right_mark() {
    let mut game = GameState::default();
    game.play(Move::new(1, 1)).unwrap();

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let human = HumanPlayer::new("Human", input_lines(input_rx), event_tx.clone());
    let computer = ComputerPlayer::new("Computer", Difficulty::Hard, Duration::ZERO);
    let mut orchestrator = Orchestrator::new(game, Box::new(computer), Box::new(human), event_tx);

    input_tx.send("quit".to_string()).unwrap();
    assert!(orchestrator.run().await.is_err());

    let events = drain(&mut event_rx);
    assert!(matches!(
        events.first(),
        Some(GameEvent::TurnStarted { player, mark: Mark::O, is_computer: false }) if player == "Human"
    ));
}
