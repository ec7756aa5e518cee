//! Per-epoch key derivation
//!
//! An epoch secret is `SHA-512(eon_secret || epoch_be_u64)[..32]`, used as a raw
//! X25519 scalar. X25519 clamps the scalar when it is multiplied, so hashing,
//! truncating and constructing the key happen in one place:
//! [`derive_epoch_secret`].
//!
//! Recovering the eon secret from a disclosed epoch secret requires a SHA-512
//! preimage, and distinct epochs hash distinct inputs, so disclosed epoch keys
//! say nothing about each other or about future epochs.

use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use super::keys::{PublicKey, SecretKey, PRIVATE_KEY_SIZE};

/// Size of the big-endian epoch index mixed into the hash
pub const EPOCH_INDEX_SIZE: usize = 8;

/// Errors that can occur while deriving epoch keys
///
/// These are internal faults. Transports must not expose their detail.
#[derive(Debug, thiserror::Error)]
pub enum DerivationError {
    #[error("derived key material too short: expected at least {expected} bytes, got {actual}")]
    KeyMaterial { expected: usize, actual: usize },
}

/// The keypair belonging to a single epoch
#[derive(Debug, Clone)]
pub struct EpochKeypair {
    epoch: u64,
    secret: SecretKey,
    public: PublicKey,
}

impl EpochKeypair {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }

    pub fn public(&self) -> PublicKey {
        self.public
    }
}

/// Derive the secret scalar for `epoch` from the eon secret bytes.
pub fn derive_epoch_secret(
    eon_secret: &[u8; PRIVATE_KEY_SIZE],
    epoch: u64,
) -> Result<SecretKey, DerivationError> {
    let mut hasher = Sha512::new();
    hasher.update(eon_secret);
    hasher.update(epoch.to_be_bytes());
    let digest = hasher.finalize();

    let material = digest
        .get(..PRIVATE_KEY_SIZE)
        .ok_or(DerivationError::KeyMaterial {
            expected: PRIVATE_KEY_SIZE,
            actual: digest.len(),
        })?;

    let mut scalar = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
    scalar.copy_from_slice(material);
    Ok(SecretKey::from(*scalar))
}

/// Derive the full keypair for `epoch`.
pub fn derive_epoch_keypair(
    eon_secret: &[u8; PRIVATE_KEY_SIZE],
    epoch: u64,
) -> Result<EpochKeypair, DerivationError> {
    let secret = derive_epoch_secret(eon_secret, epoch)?;
    let public = secret.public();
    Ok(EpochKeypair {
        epoch,
        secret,
        public,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn eon_bytes() -> [u8; PRIVATE_KEY_SIZE] {
        let mut bytes = [0u8; PRIVATE_KEY_SIZE];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        bytes
    }

    #[test]
    fn test_known_vectors() {
        let eon = eon_bytes();

        let zero = derive_epoch_keypair(&eon, 0).unwrap();
        assert_eq!(
            zero.secret().to_hex(),
            "809e2156c04480e8e20186926998cae41d2da6ea8ba7b4c6b5dd12f79e1c0b9a"
        );
        assert_eq!(
            zero.public().to_hex(),
            "fe2bf54736eff10e68fc49038fd12ab8d68947e07b48c37d85e5966e3cb2d852"
        );

        let one = derive_epoch_keypair(&eon, 1).unwrap();
        assert_eq!(
            one.secret().to_hex(),
            "6c524e41be3850b42b19cb7935f034abb0474837bb3a3fb55d330d4924721f61"
        );
        assert_eq!(
            one.public().to_hex(),
            "e7a22d439f265a161d76b990424389d710037d3a1b65fedaa15fd34777d44014"
        );

        let later = derive_epoch_secret(&eon, 172_800_000).unwrap();
        assert_eq!(
            later.to_hex(),
            "d07bd63e86342bc0bf8c89660a3d6897709d1c101012e3c147a94043c3d5e910"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let eon = eon_bytes();
        let a = derive_epoch_keypair(&eon, 42).unwrap();
        let b = derive_epoch_keypair(&eon, 42).unwrap();
        assert_eq!(a.secret().to_bytes(), b.secret().to_bytes());
        assert_eq!(a.public(), b.public());
        assert_eq!(a.epoch(), 42);
    }

    #[test]
    fn test_epoch_is_big_endian_suffix() {
        let eon = eon_bytes();
        let mut input = eon.to_vec();
        input.extend_from_slice(&7u64.to_be_bytes());
        let expected = Sha512::digest(&input);

        let secret = derive_epoch_secret(&eon, 7).unwrap();
        assert_eq!(&secret.to_bytes()[..], &expected[..PRIVATE_KEY_SIZE]);
    }

    #[test]
    fn test_different_eon_keys_diverge() {
        let a = derive_epoch_secret(&[1u8; PRIVATE_KEY_SIZE], 5).unwrap();
        let b = derive_epoch_secret(&[2u8; PRIVATE_KEY_SIZE], 5).unwrap();
        assert_ne!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn test_extreme_epochs_derive() {
        let eon = eon_bytes();
        let max = derive_epoch_keypair(&eon, u64::MAX).unwrap();
        let min = derive_epoch_keypair(&eon, 0).unwrap();
        assert_ne!(max.public(), min.public());
    }
}
