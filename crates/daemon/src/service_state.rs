use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use common::crypto::{EonKey, KeyError};
use common::epoch::{ClockError, EpochClock};
use common::release::KeyRelease;

use crate::http_server::health::{DataSource, DataSourceError};
use crate::ServiceConfig;

/// Shared state handed to every request handler
///
/// Cloning is cheap; clones share the same eon key and shutdown flag.
#[derive(Debug, Clone)]
pub struct State {
    release: KeyRelease,
    shutting_down: Arc<AtomicBool>,
}

impl State {
    /// Generate a fresh eon key and build the release service around a
    /// system clock.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, StateSetupError> {
        let eon = EonKey::generate()?;
        let clock = EpochClock::system(config.epoch_duration)?;

        tracing::info!(
            eon_public_key = %eon.public(),
            epoch_duration = config.epoch_duration,
            current_epoch = clock.current_epoch(),
            "generated eon key"
        );

        Ok(Self::new(KeyRelease::new(Arc::new(eon), clock)))
    }

    pub fn new(release: KeyRelease) -> Self {
        Self {
            release,
            shutting_down: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn release(&self) -> &KeyRelease {
        &self.release
    }

    /// Flag the service as draining; readiness starts failing
    pub fn mark_shutting_down(&self) {
        self.shutting_down.store(true, Ordering::SeqCst);
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DataSource for State {
    async fn is_ready(&self) -> Result<(), DataSourceError> {
        if self.is_shutting_down() {
            return Err(DataSourceError::ShuttingDown);
        }
        let current = self.release.clock().current_epoch();
        self.release.epoch_public_key(current).map_err(|e| {
            tracing::error!("eon key cannot derive epoch keys: {}", e);
            DataSourceError::DependencyFailure
        })?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("failed to generate eon key: {0}")]
    EonKey(#[from] KeyError),
    #[error("invalid epoch clock: {0}")]
    Clock(#[from] ClockError),
}
