use std::path::PathBuf;

use clap::Args;

use common::epoch::DEFAULT_EPOCH_DURATION;
use epochlock_daemon::service_config::{parse_log_level, ConfigError, DEFAULT_API_PORT};
use epochlock_daemon::state::{AppConfig, AppState, StateError};

/// Write a config.toml for the daemon
#[derive(Args, Debug, Clone)]
pub struct Init {
    /// API server port
    #[arg(long, default_value_t = DEFAULT_API_PORT)]
    pub api_port: u16,

    /// Seconds per epoch
    #[arg(long, default_value_t = DEFAULT_EPOCH_DURATION)]
    pub epoch_duration: u64,

    /// Default log level
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Directory for rolling log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] StateError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl Init {
    fn config(&self) -> Result<AppConfig, InitError> {
        parse_log_level(&self.log_level)?;
        Ok(AppConfig {
            api_port: self.api_port,
            epoch_duration: self.epoch_duration,
            log_level: self.log_level.to_lowercase(),
            log_dir: self.log_dir.clone(),
        })
    }
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::init(ctx.config_path.clone(), self.config()?)?;

        let log_dir = match &state.config.log_dir {
            Some(dir) => dir.display().to_string(),
            None => "stdout only".to_string(),
        };

        Ok(format!(
            "Initialized epochlock directory at: {}\n\
             - Config: {}\n\
             - API port: {}\n\
             - Epoch duration: {}s\n\
             - Log level: {}\n\
             - Logs: {}",
            state.epochlock_dir.display(),
            state.config_path.display(),
            state.config.api_port,
            state.config.epoch_duration,
            state.config.log_level,
            log_dir
        ))
    }
}
