use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use common::epoch::DEFAULT_EPOCH_DURATION;

use crate::service_config::DEFAULT_API_PORT;

pub const APP_NAME: &str = "epochlock";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Port for the API HTTP server
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// Seconds per epoch
    #[serde(default = "default_epoch_duration")]
    pub epoch_duration: u64,
    /// Default log level (overridden by RUST_LOG)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for rolling log files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

fn default_api_port() -> u16 {
    DEFAULT_API_PORT
}

fn default_epoch_duration() -> u64 {
    DEFAULT_EPOCH_DURATION
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), StateError> {
        if self.epoch_duration == 0 {
            return Err(StateError::InvalidConfig(
                "epoch_duration must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            epoch_duration: default_epoch_duration(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

/// Where the daemon keeps its configuration, and what it found there
#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the epochlock directory (~/.epochlock)
    pub epochlock_dir: PathBuf,
    /// Path to config.toml
    pub config_path: PathBuf,
    /// Loaded configuration, defaults when no file exists
    pub config: AppConfig,
}

impl AppState {
    /// Resolve the epochlock directory: the custom path if given, else
    /// `~/.epochlock`
    pub fn state_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }
        let home = dirs::home_dir().ok_or(StateError::HomeDirNotFound)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Load state from the epochlock directory.
    ///
    /// A missing directory or config file is not an error; defaults are used.
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let epochlock_dir = Self::state_dir(custom_path)?;
        let config_path = epochlock_dir.join(CONFIG_FILE_NAME);

        let config = if config_path.exists() {
            Self::read_config(&config_path)?
        } else {
            AppConfig::default()
        };

        Ok(Self {
            epochlock_dir,
            config_path,
            config,
        })
    }

    fn read_config(path: &Path) -> Result<AppConfig, StateError> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Create the epochlock directory and write `config.toml`.
    ///
    /// Refuses to overwrite an existing config file.
    pub fn init(custom_path: Option<PathBuf>, config: AppConfig) -> Result<Self, StateError> {
        config.validate()?;
        let epochlock_dir = Self::state_dir(custom_path)?;
        let config_path = epochlock_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Err(StateError::AlreadyInitialized(config_path));
        }

        fs::create_dir_all(&epochlock_dir)?;
        let contents = toml::to_string_pretty(&config)?;
        fs::write(&config_path, contents)?;

        Ok(Self {
            epochlock_dir,
            config_path,
            config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to determine home directory")]
    HomeDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    SerializeConfig(#[from] toml::ser::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("config already exists at {0}")]
    AlreadyInitialized(PathBuf),
}
