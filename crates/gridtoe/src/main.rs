//! Gridtoe - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use gridtoe::{
    ComputerPlayer, GameEvent, GameMode, HumanPlayer, InputLines, Orchestrator, Player, Quit,
    Scoreboard, Settings, SettingsOverrides, Store, config_path, describe, input_lines,
};
use gridtoe_rules::{BoardSize, Difficulty, GameState, Player as Mark};
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config_path(cli.config);
    let store = Store::new(cli.store);

    match cli.command {
        Command::Play {
            settings,
            save,
            resume,
        } => {
            let overrides = settings.overrides()?;
            let settings = if save {
                Settings::update_file(&config, &overrides)?
            } else {
                Settings::load_or_default(&config)?.apply(&overrides)
            };
            run_play(settings, store, resume).await
        }
        Command::Selfplay {
            games,
            size,
            x_difficulty,
            o_difficulty,
            seed,
        } => run_selfplay(games, BoardSize::new(size)?, x_difficulty, o_difficulty, seed).await,
        Command::Scores { reset } => run_scores(store, reset),
        Command::Config { settings, reset } => run_config(config, settings.overrides()?, reset),
    }
}

/// Reads stdin on a plain thread so a pending read never holds up shutdown.
fn spawn_stdin_reader() -> InputLines {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
        debug!("Stdin closed");
    });
    input_lines(rx)
}

/// Builds the two seats for a mode, X first.
fn seat_players(
    settings: &Settings,
    event_tx: &mpsc::UnboundedSender<GameEvent>,
) -> (Box<dyn Player>, Box<dyn Player>) {
    let delay = settings.ai_delay();
    let difficulty = *settings.ai_difficulty();

    match settings.mode() {
        GameMode::HumanVsAi => {
            let human: Box<dyn Player> =
                Box::new(HumanPlayer::new("You", spawn_stdin_reader(), event_tx.clone()));
            let computer: Box<dyn Player> =
                Box::new(ComputerPlayer::new("Computer", difficulty, delay));
            match settings.ai_plays_as() {
                Mark::X => (computer, human),
                Mark::O => (human, computer),
            }
        }
        GameMode::HumanVsHuman => {
            let input = spawn_stdin_reader();
            (
                Box::new(HumanPlayer::new("Player X", input.clone(), event_tx.clone())),
                Box::new(HumanPlayer::new("Player O", input, event_tx.clone())),
            )
        }
        GameMode::AiVsAi => (
            Box::new(ComputerPlayer::new("Computer X", difficulty, delay)),
            Box::new(ComputerPlayer::new("Computer O", difficulty, delay)),
        ),
    }
}

/// Play one interactive game, then update the store.
#[instrument(skip(settings, store), fields(store = %store.path().display()))]
async fn run_play(settings: Settings, store: Store, resume: bool) -> Result<()> {
    let mut saved = store.load()?;

    let game = match (resume, saved.game.take()) {
        (true, Some(game)) => {
            info!(moves = game.history().len(), "Resuming saved game");
            println!("Resuming your saved game.");
            game
        }
        (true, None) => {
            println!("No saved game, starting a new one.");
            GameState::new(*settings.board_size())
        }
        (false, _) => GameState::new(*settings.board_size()),
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            println!("{}", describe(&event));
        }
    });

    println!(
        "{}x{} board, {} ({})",
        game.board().size(),
        game.board().size(),
        settings.mode(),
        settings.ai_difficulty()
    );

    let (player_x, player_o) = seat_players(&settings, &event_tx);
    let mut orchestrator = Orchestrator::new(game, player_x, player_o, event_tx);
    let outcome = orchestrator.run().await;

    // Dropping the orchestrator closes the event channel and ends the printer.
    let game = orchestrator.into_game();
    printer.await?;

    match outcome {
        Ok(result) => {
            saved.scores.record(&result);
            saved.game = None;
            store.save(&saved)?;
            println!("Score  {}", saved.scores);
            Ok(())
        }
        Err(e) if e.downcast_ref::<Quit>().is_some() => {
            saved.game = Some(game);
            store.save(&saved)?;
            println!("Game saved. Continue with `gridtoe play --resume`.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Play computer against computer and print the tally.
#[instrument(skip(size), fields(size = size.get()))]
async fn run_selfplay(
    games: u32,
    size: BoardSize,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    seed: Option<u64>,
) -> Result<()> {
    let mut tally = Scoreboard::new();

    for i in 0..games {
        let mut player_x = ComputerPlayer::new("X", x_difficulty, Duration::ZERO);
        let mut player_o = ComputerPlayer::new("O", o_difficulty, Duration::ZERO);
        if let Some(seed) = seed {
            let base = seed.wrapping_add(u64::from(i) * 2);
            player_x = player_x.with_seed(base);
            player_o = player_o.with_seed(base.wrapping_add(1));
        }

        // Events are not shown, but the receiver must stay open.
        let (event_tx, _event_rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(
            GameState::new(size),
            Box::new(player_x),
            Box::new(player_o),
            event_tx,
        );
        let result = orchestrator.run().await?;
        debug!(game = i, %result, "Self-play game finished");
        tally.record(&result);
    }

    println!(
        "{} games on {}x{}, X {} vs O {}",
        tally.games(),
        size,
        size,
        x_difficulty,
        o_difficulty
    );
    println!("{}", tally);
    Ok(())
}

/// Show or reset the running score.
#[instrument(skip(store), fields(store = %store.path().display()))]
fn run_scores(store: Store, reset: bool) -> Result<()> {
    let mut saved = store.load()?;
    if reset {
        saved.scores.reset();
        saved.game = None;
        store.save(&saved)?;
        println!("Scores reset.");
    }
    println!("{} ({} games)", saved.scores, saved.scores.games());
    if saved.game.is_some() {
        println!("A saved game is waiting: `gridtoe play --resume`.");
    }
    Ok(())
}

/// Apply changes to the settings file and print what it now holds.
#[instrument(skip(path, overrides), fields(path = %path.display()))]
fn run_config(path: PathBuf, overrides: SettingsOverrides, reset: bool) -> Result<()> {
    let settings = if reset {
        let settings = Settings::default().apply(&overrides);
        settings.save(&path)?;
        settings
    } else {
        Settings::update_file(&path, &overrides)?
    };
    info!(changed = !overrides.is_empty(), "Settings written");

    println!("Settings in {}:", path.display());
    println!("  board size   {}", settings.board_size());
    println!("  mode         {}", settings.mode());
    println!("  ai plays as  {}", settings.ai_plays_as());
    println!("  difficulty   {}", settings.ai_difficulty());
    println!("  ai delay     {} ms", settings.ai_delay_ms());
    Ok(())
}
