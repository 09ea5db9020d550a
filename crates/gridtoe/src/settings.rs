//! User-configurable settings, loaded from and saved to TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use gridtoe_rules::{BoardSize, Difficulty, Player as Mark};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Environment variable that overrides the default settings path.
pub const CONFIG_ENV: &str = "GRIDTOE_CONFIG";

/// Settings file used when neither `--config` nor [`CONFIG_ENV`] is given.
pub const DEFAULT_CONFIG_PATH: &str = "gridtoe.toml";

/// Who sits at the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// One human against the computer.
    #[default]
    HumanVsAi,
    /// Two humans sharing the terminal.
    HumanVsHuman,
    /// The computer plays both sides.
    AiVsAi,
}

/// User-configurable settings for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Settings {
    /// Side length of the board.
    board_size: BoardSize,

    /// Who plays.
    mode: GameMode,

    /// Mark used by the computer in [`GameMode::HumanVsAi`].
    ai_plays_as: Mark,

    /// Strength of the computer.
    ai_difficulty: Difficulty,

    /// Pause before the computer moves, in milliseconds.
    ai_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BoardSize::CLASSIC,
            mode: GameMode::HumanVsAi,
            ai_plays_as: Mark::O,
            ai_difficulty: Difficulty::Medium,
            ai_delay_ms: 500,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(size = %settings.board_size, mode = %settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings, or returns the defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Writes settings as TOML.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::new(format!("Failed to write settings file: {}", e)))?;
        info!("Settings saved");
        Ok(())
    }

    /// Think delay as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Returns these settings with every value present in `overrides` replaced.
    #[must_use]
    pub fn apply(self, overrides: &SettingsOverrides) -> Self {
        Self {
            board_size: overrides.board_size.unwrap_or(self.board_size),
            mode: overrides.mode.unwrap_or(self.mode),
            ai_plays_as: overrides.ai_plays_as.unwrap_or(self.ai_plays_as),
            ai_difficulty: overrides.ai_difficulty.unwrap_or(self.ai_difficulty),
            ai_delay_ms: overrides.ai_delay_ms.unwrap_or(self.ai_delay_ms),
        }
    }

    /// Loads the file (or the defaults), applies `overrides` and writes the
    /// result back.
    #[instrument(skip(path, overrides), fields(path = %path.as_ref().display()))]
    pub fn update_file(
        path: impl AsRef<Path>,
        overrides: &SettingsOverrides,
    ) -> Result<Self, ConfigError> {
        let settings = Self::load_or_default(path.as_ref())?.apply(overrides);
        settings.save(path)?;
        Ok(settings)
    }
}

/// Values chosen for one change of settings; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct SettingsOverrides {
    /// New side length.
    pub board_size: Option<BoardSize>,
    /// New mode.
    pub mode: Option<GameMode>,
    /// New mark for the computer.
    pub ai_plays_as: Option<Mark>,
    /// New computer strength.
    pub ai_difficulty: Option<Difficulty>,
    /// New think delay in milliseconds.
    pub ai_delay_ms: Option<u64>,
}

impl SettingsOverrides {
    /// True when no value would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolves the settings path from an explicit flag, the environment, or the default.
pub fn config_path(explicit: Option<std::path::PathBuf>) -> std::path::PathBuf {
    explicit
        .or_else(|| std::env::var_os(CONFIG_ENV).map(Into::into))
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.into())
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
