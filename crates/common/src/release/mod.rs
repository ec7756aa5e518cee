use std::sync::Arc;

use serde::Serialize;

use crate::crypto::{diffie_hellman, EonKey, PublicKey, SecretKey};
use crate::epoch::{EpochClock, Release, ReleaseGate};

mod error;
mod input;

pub use error::{ErrorKind, InputError, ReleaseError, INTERNAL_ERROR_MESSAGE};
pub use input::{parse_epoch, parse_ephemeral_key};

/// Public parameters of the running eon
#[derive(Debug, Clone, Serialize)]
pub struct EonInfo {
    pub eon_public_key: PublicKey,
    pub epoch_duration: u64,
    pub current_epoch: u64,
}

/// An epoch's public key. Available for any epoch, past or future.
#[derive(Debug, Clone, Serialize)]
pub struct EpochPublicKey {
    pub epoch: u64,
    pub epoch_public_key: PublicKey,
}

/// An epoch's private key, released once the epoch is over
#[derive(Debug)]
pub struct DecryptionKey {
    pub epoch: u64,
    pub secret: SecretKey,
}

impl DecryptionKey {
    pub fn to_hex(&self) -> String {
        self.secret.to_hex()
    }
}

/// The three queries the service answers
///
/// Holds the eon key and the release gate; every answer is recomputed on
/// demand, nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct KeyRelease {
    eon: Arc<EonKey>,
    gate: ReleaseGate,
}

impl KeyRelease {
    pub fn new(eon: Arc<EonKey>, clock: EpochClock) -> Self {
        Self {
            eon,
            gate: ReleaseGate::new(clock),
        }
    }

    pub fn eon(&self) -> &EonKey {
        &self.eon
    }

    pub fn clock(&self) -> &EpochClock {
        self.gate.clock()
    }

    pub fn gate(&self) -> &ReleaseGate {
        &self.gate
    }

    pub fn eon_info(&self) -> EonInfo {
        let clock = self.gate.clock();
        EonInfo {
            eon_public_key: self.eon.public(),
            epoch_duration: clock.epoch_duration(),
            current_epoch: clock.current_epoch(),
        }
    }

    pub fn epoch_public_key(&self, epoch: u64) -> Result<EpochPublicKey, ReleaseError> {
        let keypair = self.eon.derive(epoch)?;
        Ok(EpochPublicKey {
            epoch,
            epoch_public_key: keypair.public(),
        })
    }

    /// Release the private key for `epoch` if the epoch is over.
    ///
    /// The ephemeral key is checked by running the agreement against the epoch
    /// secret; low-order points are refused. The shared secret itself is
    /// dropped and never leaves this function.
    pub fn decryption_key(
        &self,
        epoch: u64,
        ephemeral: &PublicKey,
    ) -> Result<DecryptionKey, ReleaseError> {
        if let Release::Locked { seconds_remaining } = self.gate.authorize(epoch) {
            tracing::debug!(
                epoch,
                seconds_remaining,
                "decryption key requested before epoch end"
            );
            return Err(ReleaseError::NotYetAvailable {
                epoch,
                seconds_until_available: seconds_remaining,
            });
        }

        let keypair = self.eon.derive(epoch)?;
        diffie_hellman(keypair.secret(), ephemeral)?;

        tracing::info!(epoch, "released epoch decryption key");
        Ok(DecryptionKey {
            epoch,
            secret: keypair.secret().clone(),
        })
    }
}
