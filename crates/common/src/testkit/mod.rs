//! Deterministic building blocks for tests
//!
//! Epoch behaviour is a function of wall-clock time, so tests that want to
//! watch an epoch unlock drive a [`ManualTimeSource`] forward instead of
//! sleeping.
//!
//! # Example
//!
//! ```rust,ignore
//! use common::testkit::{fixed_eon_key, manual_clock};
//!
//! let (clock, time) = manual_clock(10, 1_700_000_000);
//! let release = KeyRelease::new(Arc::new(fixed_eon_key()), clock);
//!
//! let epoch = release.eon_info().current_epoch + 1;
//! assert!(release.decryption_key(epoch, &ephemeral).is_err());
//!
//! time.advance_secs(20);
//! assert!(release.decryption_key(epoch, &ephemeral).is_ok());
//! ```
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::crypto::{EonKey, PRIVATE_KEY_SIZE};
use crate::epoch::{EpochClock, TimeSource};

/// Secret bytes behind [`fixed_eon_key`]: `00 01 02 .. 1f`
pub const FIXED_EON_SECRET: [u8; PRIVATE_KEY_SIZE] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31,
];

/// A time source that only moves when told to
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    millis: AtomicI64,
}

impl ManualTimeSource {
    pub fn from_millis(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn from_secs(secs: i64) -> Self {
        Self::from_millis(secs * 1_000)
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn set_secs(&self, secs: i64) {
        self.set_millis(secs * 1_000);
    }

    pub fn advance(&self, by: Duration) {
        let by = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis.fetch_add(by, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl TimeSource for ManualTimeSource {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// An epoch clock pinned at `unix_secs`, plus the handle that moves it
pub fn manual_clock(epoch_duration: u64, unix_secs: i64) -> (EpochClock, Arc<ManualTimeSource>) {
    let source = Arc::new(ManualTimeSource::from_secs(unix_secs));
    let clock = match EpochClock::new(epoch_duration, source.clone()) {
        Ok(clock) => clock,
        Err(e) => panic!("invalid test clock: {}", e),
    };
    (clock, source)
}

/// An eon key built from [`FIXED_EON_SECRET`]
pub fn fixed_eon_key() -> EonKey {
    EonKey::from_secret_bytes(FIXED_EON_SECRET)
}
