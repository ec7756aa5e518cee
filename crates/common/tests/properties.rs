//! Property tests for derivation and the epoch clock

use std::sync::Arc;

use common::crypto::{derive_epoch_keypair, derive_epoch_secret, EonKey};
use common::epoch::{EpochClock, Release, ReleaseGate};
use common::testkit::ManualTimeSource;
use proptest::prelude::*;

const MAX_MILLIS: i64 = 32_503_680_000_000; // year 3000

fn clock(duration: u64, millis: i64) -> (EpochClock, Arc<ManualTimeSource>) {
    let source = Arc::new(ManualTimeSource::from_millis(millis));
    (EpochClock::new(duration, source.clone()).unwrap(), source)
}

proptest! {
    #[test]
    fn derivation_is_deterministic(eon in any::<[u8; 32]>(), epoch in any::<u64>()) {
        let a = derive_epoch_keypair(&eon, epoch).unwrap();
        let b = derive_epoch_keypair(&eon, epoch).unwrap();
        prop_assert_eq!(a.secret().to_bytes(), b.secret().to_bytes());
        prop_assert_eq!(a.public(), b.public());
    }

    #[test]
    fn distinct_epochs_have_distinct_keys(eon in any::<[u8; 32]>(), a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        let ka = derive_epoch_secret(&eon, a).unwrap();
        let kb = derive_epoch_secret(&eon, b).unwrap();
        prop_assert_ne!(ka.to_bytes(), kb.to_bytes());
    }

    #[test]
    fn epoch_key_never_equals_eon_key(eon in any::<[u8; 32]>(), epoch in any::<u64>()) {
        let key = EonKey::from_secret_bytes(eon);
        prop_assert_ne!(key.derive(epoch).unwrap().public(), key.public());
    }

    #[test]
    fn epoch_is_floor_division(duration in 1u64..100_000, millis in 0i64..MAX_MILLIS) {
        let (clock, _) = clock(duration, millis);
        prop_assert_eq!(clock.current_epoch(), (millis / 1_000) as u64 / duration);
    }

    #[test]
    fn epoch_is_monotonic(duration in 1u64..100_000, start in 0i64..MAX_MILLIS, step in 0u64..10_000_000) {
        let (clock, source) = clock(duration, start);
        let before = clock.current_epoch();
        source.advance(std::time::Duration::from_millis(step));
        prop_assert!(clock.current_epoch() >= before);
    }

    #[test]
    fn gate_unlocks_exactly_past_epochs(duration in 1u64..1_000, millis in 0i64..MAX_MILLIS, epoch in 0u64..u64::MAX) {
        let (clock, _) = clock(duration, millis);
        let current = clock.current_epoch();
        let gate = ReleaseGate::new(clock);
        match gate.authorize(epoch) {
            Release::Unlocked => prop_assert!(epoch < current),
            Release::Locked { seconds_remaining } => {
                prop_assert!(epoch >= current);
                if epoch == current {
                    prop_assert!(seconds_remaining <= duration);
                }
            }
        }
    }
}
