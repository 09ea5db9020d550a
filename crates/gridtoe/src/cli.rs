//! Command-line interface for gridtoe.

use clap::{Args, Parser, Subcommand};
use gridtoe::{GameMode, SettingsOverrides};
use gridtoe_rules::{BoardSize, BoardSizeError, Difficulty, Player as Mark};
use std::path::PathBuf;

/// Gridtoe - tic-tac-toe on boards from 3×3 to 10×10
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Tic-tac-toe in the terminal against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to $GRIDTOE_CONFIG, then gridtoe.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Scores and saved-game file
    #[arg(long, global = true, default_value = gridtoe::DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Settings for this game
        #[command(flatten)]
        settings: SettingsArgs,

        /// Also write these settings to the settings file
        #[arg(long)]
        save: bool,

        /// Continue the game saved when you last quit
        #[arg(long)]
        resume: bool,
    },

    /// Let the computer play itself and print the tally
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Board side length (3-10)
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Strength of X
        #[arg(long, default_value = "hard")]
        x_difficulty: Difficulty,

        /// Strength of O
        #[arg(long, default_value = "medium")]
        o_difficulty: Difficulty,

        /// Seed for repeatable runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the running score
    Scores {
        /// Clear the score and any saved game
        #[arg(long)]
        reset: bool,
    },

    /// Change the settings file and print the result
    Config {
        /// Values to change
        #[command(flatten)]
        settings: SettingsArgs,

        /// Start from the defaults instead of the current file
        #[arg(long)]
        reset: bool,
    },
}

/// Settings that can be given on the command line.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Board side length (3-10)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Computer strength: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Mark the computer plays in human-vs-ai mode (x or o)
    #[arg(long)]
    pub ai_plays_as: Option<Mark>,

    /// human-vs-ai, human-vs-human or ai-vs-ai
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl SettingsArgs {
    /// Converts the flags into settings overrides.
    pub fn overrides(&self) -> Result<SettingsOverrides, BoardSizeError> {
        Ok(SettingsOverrides {
            board_size: self.size.map(BoardSize::new).transpose()?,
            mode: self.mode,
            ai_plays_as: self.ai_plays_as,
            ai_difficulty: self.difficulty,
            ai_delay_ms: self.delay_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_overrides() {
        let cli = Cli::try_parse_from([
            "gridtoe",
            "play",
            "--size",
            "4",
            "--difficulty",
            "hard",
            "--ai-plays-as",
            "x",
            "--mode",
            "ai-vs-ai",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                settings,
                save,
                resume,
            } => {
                let overrides = settings.overrides().unwrap();
                assert_eq!(overrides.board_size.map(|s| s.get()), Some(4));
                assert_eq!(overrides.ai_difficulty, Some(Difficulty::Hard));
                assert_eq!(overrides.ai_plays_as, Some(Mark::X));
                assert_eq!(overrides.mode, Some(GameMode::AiVsAi));
                assert_eq!(overrides.ai_delay_ms, None);
                assert!(!save);
                assert!(!resume);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_config_takes_the_same_flags() {
        let cli = Cli::try_parse_from(["gridtoe", "config", "--difficulty", "easy", "--delay-ms", "0"])
            .unwrap();
        match cli.command {
            Command::Config { settings, reset } => {
                let overrides = settings.overrides().unwrap();
                assert_eq!(overrides.ai_difficulty, Some(Difficulty::Easy));
                assert_eq!(overrides.ai_delay_ms, Some(0));
                assert!(!reset);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_size_is_an_error() {
        let args = SettingsArgs {
            size: Some(12),
            ..SettingsArgs::default()
        };
        assert!(args.overrides().is_err());
    }

    #[test]
    fn test_global_paths() {
        let cli = Cli::try_parse_from(["gridtoe", "scores", "--store", "s.json", "--reset"]).unwrap();
        assert_eq!(cli.store, PathBuf::from("s.json"));
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Command::Scores { reset: true }));
    }

    #[test]
    fn test_selfplay_defaults() {
        let cli = Cli::try_parse_from(["gridtoe", "selfplay"]).unwrap();
        match cli.command {
            Command::Selfplay {
                games,
                size,
                x_difficulty,
                o_difficulty,
                seed,
            } => {
                assert_eq!(games, 100);
                assert_eq!(size, 3);
                assert_eq!(x_difficulty, Difficulty::Hard);
                assert_eq!(o_difficulty, Difficulty::Medium);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
