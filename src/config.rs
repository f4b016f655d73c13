use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{GameState, Player, DEFAULT_SIZE};

/// Largest board side the terminal view lays out.
pub const MAX_BOARD_SIZE: usize = 26;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

/// Board shape and opening player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            first_player: Player::First,
        }
    }
}

impl GameConfig {
    /// Fresh game with this configuration
    pub fn new_game(&self) -> GameState {
        GameState::new(self.rows, self.cols).with_first_player(self.first_player)
    }
}

/// Presentation settings for the terminal view.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Display name for the first player
    pub first_name: String,
    /// Display name for the second player
    pub second_name: String,
    /// Number of message log lines kept
    pub log_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            first_name: "sly".to_string(),
            second_name: "puffin".to_string(),
            log_capacity: 6,
        }
    }
}

impl UiConfig {
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::First => &self.first_name,
            Player::Second => &self.second_name,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.rows == 0 || self.game.rows > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.rows must be in [1, {MAX_BOARD_SIZE}]"
            )));
        }
        if self.game.cols == 0 || self.game.cols > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "game.cols must be in [1, {MAX_BOARD_SIZE}]"
            )));
        }
        if self.ui.first_name.trim().is_empty() || self.ui.second_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ui player names must not be empty".into(),
            ));
        }
        if self.ui.first_name == self.ui.second_name {
            return Err(ConfigError::Validation(
                "ui.first_name and ui.second_name must differ".into(),
            ));
        }
        if self.ui.log_capacity == 0 {
            return Err(ConfigError::Validation(
                "ui.log_capacity must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
