use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use common::epoch::DEFAULT_EPOCH_DURATION;

/// Port the API listens on when nothing else is configured
pub const DEFAULT_API_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    // http server configuration
    /// address the API server binds to
    pub listen_addr: SocketAddr,

    // epoch configuration
    /// seconds per epoch, fixed for the lifetime of the process
    pub epoch_duration: u64,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_API_PORT)),
            epoch_duration: DEFAULT_EPOCH_DURATION,
            log_level: tracing::Level::INFO,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.epoch_duration == 0 {
            return Err(ConfigError::InvalidEpochDuration);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("epoch duration must be a positive number of seconds")]
    InvalidEpochDuration,
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// Parse a log level name such as `info` or `DEBUG`
pub fn parse_log_level(level: &str) -> Result<tracing::Level, ConfigError> {
    level
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}
