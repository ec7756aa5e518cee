//! Cryptographic primitives for epochlock
//!
//! Everything in this module operates on X25519 (Curve25519 in Montgomery form):
//!
//! - **Eon key**: one long-lived keypair generated at process start. Its private
//!   scalar never leaves [`EonKey`].
//! - **Epoch keys**: a keypair per time window, derived deterministically from the
//!   eon private scalar and the epoch index (see [`derive_epoch_secret`]).
//! - **Key agreement**: plain X25519 Diffie-Hellman between an epoch private key
//!   and a client's ephemeral public key.
//!
//! # Time-lock protocol
//!
//! An encryptor:
//! 1. Fetches the public key of a future epoch
//! 2. Generates an ephemeral keypair
//! 3. Computes `DH(ephemeral_secret, epoch_public)` and encrypts with it
//!
//! Once the epoch has elapsed the service discloses the epoch private key, and the
//! decryptor recomputes the same secret as `DH(epoch_secret, ephemeral_public)`.

mod agreement;
mod derivation;
mod eon;
mod keys;

pub use agreement::{diffie_hellman, shared_secret, KeyAgreementError, SharedSecret, SHARED_SECRET_SIZE};
pub use derivation::{derive_epoch_keypair, derive_epoch_secret, DerivationError, EpochKeypair};
pub use eon::EonKey;
pub use keys::{KeyError, PublicKey, SecretKey, PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
