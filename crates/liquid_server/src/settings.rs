//! Game settings: mode, marks and start order.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use liquid_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who the player faces.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Against the computer.
    #[default]
    Ai,
    /// Two people sharing the board.
    TwoPlayer,
}

/// Who moves first against the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum StartOrder {
    /// The player opens.
    #[default]
    Player,
    /// The computer opens.
    Computer,
}

/// Settings for a game session.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// mode = "ai"
/// player_mark = "O"
/// start_order = "computer"
/// ai_delay_ms = 0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameSettings {
    /// Against the computer or two players.
    mode: GameMode,

    /// The human player's mark; the computer plays the other one.
    player_mark: Mark,

    /// Who opens against the computer. Ignored in two-player mode.
    start_order: StartOrder,

    /// Pause before the computer's reply in the interactive game.
    ai_delay_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Ai,
            player_mark: Mark::X,
            start_order: StartOrder::Player,
            ai_delay_ms: 260,
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(mode = %settings.mode, player_mark = %settings.player_mark, "Settings loaded");
        Ok(settings)
    }

    /// The computer's mark.
    pub fn computer_mark(&self) -> Mark {
        self.player_mark.opponent()
    }

    /// The mark that opens a new game.
    pub fn first_mark(&self) -> Mark {
        match (self.mode, self.start_order) {
            (GameMode::Ai, StartOrder::Computer) => self.computer_mark(),
            _ => self.player_mark,
        }
    }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
