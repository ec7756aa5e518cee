use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Args;

use epochlock_daemon::service_config::{parse_log_level, ConfigError};
use epochlock_daemon::state::AppState;
use epochlock_daemon::{spawn_service, ServiceConfig};

#[derive(Args, Debug, Clone)]
pub struct Daemon {
    /// Override API server port (default from config)
    #[arg(long, env = "PORT")]
    pub api_port: Option<u16>,

    /// Override the epoch duration in seconds (default from config)
    #[arg(long, env = "EPOCH_DURATION")]
    pub epoch_duration: Option<u64>,

    /// Directory for log files (logs to stdout only if not set)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Default log level, overridden by RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("state error: {0}")]
    StateError(#[from] epochlock_daemon::state::StateError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl Daemon {
    /// Merge flags over the config file
    pub fn service_config(&self, state: &AppState) -> Result<ServiceConfig, ConfigError> {
        let api_port = self.api_port.unwrap_or(state.config.api_port);
        let epoch_duration = self.epoch_duration.unwrap_or(state.config.epoch_duration);
        let log_level = parse_log_level(
            self.log_level
                .as_deref()
                .unwrap_or(state.config.log_level.as_str()),
        )?;

        let config = ServiceConfig {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, api_port)),
            epoch_duration,
            log_level,
            log_dir: self.log_dir.clone().or_else(|| state.config.log_dir.clone()),
        };
        config.validate()?;
        Ok(config)
    }
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Daemon {
    type Error = DaemonError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        // Load state from config path (or default ~/.epochlock)
        let state = AppState::load(ctx.config_path.clone())?;
        let config = self.service_config(&state)?;

        spawn_service(&config).await?;
        Ok("daemon ended".to_string())
    }
}
