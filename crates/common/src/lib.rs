/**
 * Cryptographic types and operations.
 *  - X25519 public and private key wrappers
 *  - The long-lived eon key
 *  - Per-epoch key derivation
 *  - Diffie-Hellman key agreement
 */
pub mod crypto;
/**
 * Wall-clock to epoch mapping and the
 *  release gate that decides when an
 *  epoch's private key may be disclosed.
 */
pub mod epoch;
/**
 * The query contract exposed to transports:
 *  eon info, epoch public keys and
 *  gated decryption keys, plus the error
 *  taxonomy and its status mapping.
 */
pub mod release;
/**
 * Deterministic clocks and keys for tests.
 *  Only built for this crate's tests or
 *  with the `testkit` feature.
 */
#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
/**
 * Helper for setting build version information
 *  at compile time.
 */
pub mod version;

pub mod prelude {
    pub use crate::crypto::{EonKey, EpochKeypair, PublicKey, SecretKey};
    pub use crate::epoch::{EpochClock, Release, ReleaseGate, DEFAULT_EPOCH_DURATION};
    pub use crate::release::{ErrorKind, KeyRelease, ReleaseError};
    pub use crate::version::BuildInfo;
}
