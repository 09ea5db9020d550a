//! JSON persistence for scores and an unfinished game.

use crate::scores::Scoreboard;
use derive_more::{Display, Error};
use gridtoe_rules::GameState;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Store file used when `--store` is not given.
pub const DEFAULT_STORE_PATH: &str = "gridtoe_state.json";

/// Everything kept between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    /// Running tally.
    pub scores: Scoreboard,
    /// Game left unfinished when the player quit.
    pub game: Option<GameState>,
}

/// File-backed [`SavedState`].
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store at `path`. Nothing is read until [`Store::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved state. A missing file yields the defaults.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<SavedState, StoreError> {
        if !self.path.exists() {
            debug!("No store file, starting fresh");
            return Ok(SavedState::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::new(format!("Failed to read store: {}", e)))?;
        let state: SavedState = serde_json::from_str(&content)
            .map_err(|e| StoreError::new(format!("Failed to parse store: {}", e)))?;

        debug!(games = state.scores.games(), resumable = state.game.is_some(), "Store loaded");
        Ok(state)
    }

    /// Writes the saved state, replacing the file.
    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    pub fn save(&self, state: &SavedState) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::new(format!("Failed to serialize store: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| StoreError::new(format!("Failed to write store: {}", e)))?;
        info!("Store saved");
        Ok(())
    }
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
