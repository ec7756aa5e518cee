use std::fmt;
use std::sync::Arc;

/// Seconds per epoch when nothing else is configured
pub const DEFAULT_EPOCH_DURATION: u64 = 10;

const MILLIS_PER_SEC: i128 = 1_000;

#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("epoch duration must be at least one second")]
    ZeroDuration,
}

/// Source of wall-clock time, in milliseconds since the Unix epoch (UTC)
pub trait TimeSource: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// The real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Maps wall-clock time onto epoch indices
///
/// The epoch duration is fixed when the clock is built and never changes for
/// the lifetime of the process. Cloning is cheap; clones share the same time
/// source.
#[derive(Clone)]
pub struct EpochClock {
    epoch_duration: u64,
    source: Arc<dyn TimeSource>,
}

impl fmt::Debug for EpochClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EpochClock")
            .field("epoch_duration", &self.epoch_duration)
            .finish_non_exhaustive()
    }
}

impl EpochClock {
    pub fn new(epoch_duration: u64, source: Arc<dyn TimeSource>) -> Result<Self, ClockError> {
        if epoch_duration == 0 {
            return Err(ClockError::ZeroDuration);
        }
        Ok(Self {
            epoch_duration,
            source,
        })
    }

    /// A clock driven by the system's UTC time
    pub fn system(epoch_duration: u64) -> Result<Self, ClockError> {
        Self::new(epoch_duration, Arc::new(SystemTimeSource))
    }

    /// Seconds per epoch
    pub fn epoch_duration(&self) -> u64 {
        self.epoch_duration
    }

    pub fn now_millis(&self) -> i64 {
        self.source.now_millis()
    }

    /// Epoch index containing the instant `unix_millis`.
    ///
    /// Instants before 1970 map to epoch 0.
    pub fn epoch_at(&self, unix_millis: i64) -> u64 {
        if unix_millis <= 0 {
            return 0;
        }
        let window = self.epoch_duration as u128 * MILLIS_PER_SEC as u128;
        // never exceeds unix_millis, so it fits back into a u64
        (unix_millis as u128 / window) as u64
    }

    pub fn current_epoch(&self) -> u64 {
        self.epoch_at(self.now_millis())
    }

    /// Whole seconds from now until `epoch` ends, truncated toward zero.
    ///
    /// Zero or negative once the epoch is over.
    pub fn seconds_until_epoch_end(&self, epoch: u64) -> i64 {
        self.seconds_until_epoch_end_at(epoch, self.now_millis())
    }

    /// Same as [`seconds_until_epoch_end`](Self::seconds_until_epoch_end) observed
    /// at `unix_millis`.
    pub fn seconds_until_epoch_end_at(&self, epoch: u64, unix_millis: i64) -> i64 {
        let end_millis = (epoch as i128 + 1)
            .checked_mul(self.epoch_duration as i128)
            .and_then(|secs| secs.checked_mul(MILLIS_PER_SEC))
            .unwrap_or(i128::MAX);
        let remaining = end_millis.saturating_sub(unix_millis as i128) / MILLIS_PER_SEC;
        i64::try_from(remaining).unwrap_or(if remaining > 0 { i64::MAX } else { i64::MIN })
    }
}
