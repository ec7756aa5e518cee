//! The key endpoints: eon public key, epoch public keys and gated epoch
//! private keys

pub mod decryption_key;
pub mod eon_key;
pub mod epoch_public_key;
mod error;

pub use decryption_key::{DecryptionKeyQuery, DecryptionKeyRequest, DecryptionKeyResponse};
pub use eon_key::{EonKeyRequest, EonKeyResponse};
pub use epoch_public_key::{EpochPublicKeyQuery, EpochPublicKeyRequest, EpochPublicKeyResponse};
pub use error::{ErrorBody, KeyApiError};
