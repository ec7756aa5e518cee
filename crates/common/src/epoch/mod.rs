//! Epochs: fixed-length windows of wall-clock time
//!
//! An epoch index is `floor(unix_seconds / epoch_duration)`. The [`EpochClock`]
//! computes it from a [`TimeSource`], and the [`ReleaseGate`] uses the clock to
//! decide whether an epoch's private key may be disclosed yet.

mod clock;
mod gate;

pub use clock::{ClockError, EpochClock, SystemTimeSource, TimeSource, DEFAULT_EPOCH_DURATION};
pub use gate::{Release, ReleaseGate};
