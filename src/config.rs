use crate::game::Grid;
use crate::settings::{Settings, SettingsError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay parameters
    #[serde(default)]
    pub(crate) game: GameConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("rocksnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the settings therein are invalid.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        Config::parse(&content)
    }

    fn parse(content: &str) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(Into::into)
    }

    /// Read the configuration file at `path`, or at the default path if
    /// `path` is `None`.  Only a missing file at the default path is
    /// tolerated.
    pub(crate) fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Config::load(p, false),
            None => Config::load(&Config::default_path()?, true),
        }
    }

    pub(crate) fn settings(&self) -> Settings {
        self.game.0
    }
}

/// The `[game]` table of the configuration file, already validated
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig(Settings);

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawGameConfig {
    width: u16,
    height: u16,
    initial_interval_ms: u64,
    min_interval_ms: u64,
    interval_step_ms: u64,
    food: usize,
    obstacles: usize,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        let settings = Settings::default();
        RawGameConfig {
            width: settings.grid.width,
            height: settings.grid.height,
            initial_interval_ms: millis(settings.initial_interval),
            min_interval_ms: millis(settings.min_interval),
            interval_step_ms: millis(settings.interval_step),
            food: settings.food,
            obstacles: settings.obstacles,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = SettingsError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, SettingsError> {
        Settings {
            grid: Grid::new(value.width, value.height),
            initial_interval: Duration::from_millis(value.initial_interval_ms),
            min_interval: Duration::from_millis(value.min_interval_ms),
            interval_step: Duration::from_millis(value.interval_step_ms),
            food: value.food,
            obstacles: value.obstacles,
        }
        .validate()
        .map(GameConfig)
    }
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
