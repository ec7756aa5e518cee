use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::Args;

use common::epoch::{ClockError, EpochClock, SystemTimeSource};
use epochlock_daemon::state::{AppState, StateError};

/// Compute an epoch index locally, without talking to a daemon
#[derive(Args, Debug, Clone)]
pub struct Epoch {
    /// Unix timestamp in seconds (defaults to now)
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<i64>,

    /// Epoch duration in seconds (default from config)
    #[arg(long)]
    pub epoch_duration: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum EpochError {
    #[error("state error: {0}")]
    State(#[from] StateError),
    #[error("clock error: {0}")]
    Clock(#[from] ClockError),
}

impl Epoch {
    fn describe(&self, epoch_duration: u64) -> Result<String, EpochError> {
        let clock = EpochClock::new(epoch_duration, Arc::new(SystemTimeSource))?;
        let at_millis = match self.at {
            Some(secs) => secs.saturating_mul(1_000),
            None => clock.now_millis(),
        };

        let epoch = clock.epoch_at(at_millis);
        let remaining = clock.seconds_until_epoch_end_at(epoch, at_millis);
        let start = i64::try_from(epoch.saturating_mul(epoch_duration))
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

        let mut lines = vec![format!("epoch:    {}", epoch)];
        if let Some(start) = start {
            lines.push(format!("starts:   {}", start.to_rfc3339()));
        }
        lines.push(format!("ends in:  {}s", remaining));
        lines.push(format!("duration: {}s", epoch_duration));
        Ok(lines.join("\n"))
    }
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Epoch {
    type Error = EpochError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let epoch_duration = match self.epoch_duration {
            Some(duration) => duration,
            None => AppState::load(ctx.config_path.clone())?.config.epoch_duration,
        };
        self.describe(epoch_duration)
    }
}
