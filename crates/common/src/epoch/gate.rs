use super::clock::EpochClock;

/// Outcome of asking the gate about an epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The epoch is over; its private key may be disclosed. Terminal.
    Unlocked,
    /// The epoch is current or in the future.
    Locked { seconds_remaining: u64 },
}

impl Release {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Release::Unlocked)
    }
}

/// Decides whether an epoch's private key may be disclosed
///
/// The gate holds no state of its own: every answer is recomputed from the
/// epoch index and the clock. An epoch unlocks purely by time passing the end
/// of its window and never locks again. There is no expiry for old epochs.
#[derive(Debug, Clone)]
pub struct ReleaseGate {
    clock: EpochClock,
}

impl ReleaseGate {
    pub fn new(clock: EpochClock) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &EpochClock {
        &self.clock
    }

    /// Check `epoch` against the current time
    pub fn authorize(&self, epoch: u64) -> Release {
        self.authorize_at(epoch, self.clock.now_millis())
    }

    /// Check `epoch` as observed at `unix_millis`
    pub fn authorize_at(&self, epoch: u64, unix_millis: i64) -> Release {
        if epoch < self.clock.epoch_at(unix_millis) {
            return Release::Unlocked;
        }
        let remaining = self.clock.seconds_until_epoch_end_at(epoch, unix_millis);
        Release::Locked {
            seconds_remaining: remaining.max(0) as u64,
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::testkit::ManualTimeSource;

    const DURATION: u64 = 10;

    fn gate() -> (ReleaseGate, Arc<ManualTimeSource>) {
        let source = Arc::new(ManualTimeSource::from_secs(0));
        let clock = EpochClock::new(DURATION, source.clone()).unwrap();
        (ReleaseGate::new(clock), source)
    }

    #[test]
    fn test_boundary_at_window_start() {
        let (gate, source) = gate();
        let e = 170_000_000u64;
        source.set_secs((DURATION * e) as i64);

        assert_eq!(gate.authorize(e - 1), Release::Unlocked);
        assert_eq!(
            gate.authorize(e),
            Release::Locked {
                seconds_remaining: 10
            }
        );
    }

    #[test]
    fn test_boundary_one_second_before() {
        let (gate, source) = gate();
        let e = 170_000_000u64;
        source.set_secs((DURATION * e) as i64 - 1);

        assert_eq!(
            gate.authorize(e - 1),
            Release::Locked {
                seconds_remaining: 1
            }
        );
    }

    #[test]
    fn test_far_future_is_locked() {
        let (gate, source) = gate();
        source.set_secs(1_700_000_000);

        let current = gate.clock().current_epoch();
        assert_eq!(
            gate.authorize(current + 5),
            Release::Locked {
                seconds_remaining: 60
            }
        );
        assert!(matches!(
            gate.authorize(u64::MAX),
            Release::Locked {
                seconds_remaining
            } if seconds_remaining == i64::MAX as u64
        ));
    }

    #[test]
    fn test_past_epochs_stay_unlocked() {
        let (gate, source) = gate();
        source.set_secs(1_700_000_000);
        assert!(gate.authorize(0).is_unlocked());
        assert!(gate.authorize(169_999_999).is_unlocked());

        source.advance_secs(1_000_000);
        assert!(gate.authorize(0).is_unlocked());
        assert!(gate.authorize(169_999_999).is_unlocked());
    }

    #[test]
    fn test_unlocks_as_time_passes() {
        let (gate, source) = gate();
        source.set_secs(1_000);
        let epoch = 100;
        assert!(!gate.authorize(epoch).is_unlocked());

        source.set_millis(1_009_999);
        assert_eq!(
            gate.authorize(epoch),
            Release::Locked {
                seconds_remaining: 0
            }
        );

        source.set_secs(1_010);
        assert!(gate.authorize(epoch).is_unlocked());
    }

    #[test]
    fn test_authorize_at_ignores_clock() {
        let (gate, _) = gate();
        assert!(gate.authorize_at(4, 50_000).is_unlocked());
        assert_eq!(
            gate.authorize_at(5, 50_000),
            Release::Locked {
                seconds_remaining: 10
            }
        );
    }
}
