use std::path::{Path, PathBuf};

use tracing::warn;

use crate::board::Mark;
use crate::error::ConfigError;

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Environment variable overriding [`DEFAULT_CONFIG_FILE`]
pub const CONFIG_ENV_VAR: &str = "TICTACTOE_CONFIG";

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub game: GameConfig,
    pub log: LogConfig,
}

/// Initial window size in logical pixels.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 900.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mark the computer plays in vs-computer games, "X" or "O"
    pub computer_mark: String,
    /// Name used when X's name field is left empty
    pub default_player_x: String,
    /// Name used when O's name field is left empty
    pub default_player_o: String,
    pub computer_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            computer_mark: "O".to_string(),
            default_player_x: "Player X".to_string(),
            default_player_o: "Player O".to_string(),
            computer_name: "Computer".to_string(),
        }
    }
}

impl GameConfig {
    /// Parsed [`GameConfig::computer_mark`]. Falls back to O when invalid;
    /// [`AppConfig::validate`] rejects such configs up front.
    pub fn computer_mark(&self) -> Mark {
        Mark::from_symbol(&self.computer_mark).unwrap_or(Mark::O)
    }

    /// Fallback name for the human playing `mark`
    pub fn default_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.default_player_x,
            Mark::O => &self.default_player_o,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Config path from the environment, or the default file name.
    pub fn resolve_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.window.width) || !positive(self.window.height) {
            return Err(ConfigError::Validation(
                "window.width and window.height must be > 0".into(),
            ));
        }
        if Mark::from_symbol(&self.game.computer_mark).is_none() {
            return Err(ConfigError::Validation(format!(
                "game.computer_mark must be \"X\" or \"O\", got {:?}",
                self.game.computer_mark
            )));
        }
        if self.game.default_player_x.trim().is_empty()
            || self.game.default_player_o.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "game.default_player_x and game.default_player_o must not be empty".into(),
            ));
        }
        if self.game.computer_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.computer_name must not be empty".into(),
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Validation("log.filter must not be empty".into()));
        }

        Ok(())
    }
}
