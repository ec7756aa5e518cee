use std::fmt;

use super::derivation::{derive_epoch_keypair, DerivationError, EpochKeypair};
use super::keys::{KeyError, PublicKey, SecretKey, PRIVATE_KEY_SIZE};

/// The long-lived master ("eon") keypair
///
/// Generated once when the service starts and shared read-only for the lifetime
/// of the process (typically behind an `Arc`). There is deliberately no accessor
/// for the private scalar: the only things that leave an `EonKey` are its public
/// key and the keypairs derived from it.
///
/// A restart generates a new, unrelated eon key, so every epoch key handed out
/// by a previous process becomes unreachable.
pub struct EonKey {
    secret: SecretKey,
    public: PublicKey,
}

impl fmt::Debug for EonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EonKey")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl EonKey {
    /// Generate a fresh eon key from the operating system's CSPRNG
    pub fn generate() -> Result<Self, KeyError> {
        SecretKey::generate().map(Self::from_secret)
    }

    /// Build an eon key from known secret bytes
    ///
    /// Used by tests and fixtures that need reproducible epoch keys.
    pub fn from_secret_bytes(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self::from_secret(SecretKey::from(bytes))
    }

    fn from_secret(secret: SecretKey) -> Self {
        let public = secret.public();
        Self { secret, public }
    }

    pub fn public(&self) -> PublicKey {
        self.public
    }

    pub fn public_hex(&self) -> String {
        self.public.to_hex()
    }

    /// Derive the keypair for `epoch`
    pub fn derive(&self, epoch: u64) -> Result<EpochKeypair, DerivationError> {
        let secret = zeroize::Zeroizing::new(self.secret.to_bytes());
        derive_epoch_keypair(&secret, epoch)
    }
}
