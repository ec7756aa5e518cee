//! Shared test utilities for release integration tests
#![allow(dead_code)]

use std::sync::Arc;

use common::crypto::SecretKey;
use common::release::KeyRelease;
use common::testkit::{fixed_eon_key, manual_clock, ManualTimeSource};

/// Epoch duration used across the integration tests
pub const EPOCH_DURATION: u64 = 10;

/// 2023-11-14T22:13:20Z, the start of epoch 170_000_000
pub const START_SECS: i64 = 1_700_000_000;

/// A release service over the fixed eon key, with time frozen at `START_SECS`
pub fn setup_release() -> (KeyRelease, Arc<ManualTimeSource>) {
    let (clock, time) = manual_clock(EPOCH_DURATION, START_SECS);
    (KeyRelease::new(Arc::new(fixed_eon_key()), clock), time)
}

/// A fresh client-side ephemeral keypair
pub fn ephemeral() -> SecretKey {
    SecretKey::generate().unwrap()
}
