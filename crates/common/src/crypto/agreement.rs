//! X25519 Diffie-Hellman between an epoch key and a client's ephemeral key

use super::keys::{PublicKey, SecretKey, PUBLIC_KEY_SIZE};

/// Size of an X25519 shared secret in bytes
pub const SHARED_SECRET_SIZE: usize = 32;

/// Errors that can occur during key agreement
///
/// Both variants describe bad client input.
#[derive(Debug, thiserror::Error)]
pub enum KeyAgreementError {
    #[error("ephemeral public key must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("ephemeral public key is a low-order point")]
    NonContributory,
}

/// Result of an X25519 exchange. Zeroized on drop.
pub struct SharedSecret(x25519_dalek::SharedSecret);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        self.0.as_bytes()
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for SharedSecret {}

/// Compute `X25519(secret, ephemeral_public)`.
///
/// `ephemeral_public` is taken as raw bytes and only checked for length; every
/// 32-byte string is a valid Montgomery u-coordinate. Points of small order
/// collapse the result to zero and are rejected the same way libsodium's
/// `crypto_scalarmult` rejects them.
pub fn shared_secret(
    secret: &SecretKey,
    ephemeral_public: &[u8],
) -> Result<SharedSecret, KeyAgreementError> {
    let peer: [u8; PUBLIC_KEY_SIZE] =
        ephemeral_public
            .try_into()
            .map_err(|_| KeyAgreementError::InvalidLength {
                expected: PUBLIC_KEY_SIZE,
                actual: ephemeral_public.len(),
            })?;
    diffie_hellman(secret, &PublicKey::from(peer))
}

/// Same as [`shared_secret`] for an already parsed public key.
pub fn diffie_hellman(
    secret: &SecretKey,
    peer: &PublicKey,
) -> Result<SharedSecret, KeyAgreementError> {
    let shared = secret.as_static().diffie_hellman(peer);
    if !shared.was_contributory() {
        return Err(KeyAgreementError::NonContributory);
    }
    Ok(SharedSecret(shared))
}
