use http::StatusCode;

use crate::crypto::{DerivationError, KeyAgreementError, KeyError};

/// Message returned for every internal fault; details stay in the logs
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Problems with the parameters a caller supplied
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Epoch parameter is required.")]
    MissingEpoch,
    #[error("Epoch must be a non-negative integer, got {0:?}.")]
    InvalidEpoch(String),
    #[error("Ephemeral public key parameter is required.")]
    MissingEphemeralKey,
    #[error("Invalid ephemeral public key: {0}.")]
    InvalidEphemeralKey(#[source] KeyError),
}

/// Coarse classification of a [`ReleaseError`], and the status a transport
/// reports for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something unusable
    BadRequest,
    /// The epoch has not elapsed; retry after `seconds_until_available`
    NotYetAvailable,
    /// Something went wrong on our side
    Internal,
}

impl ErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            // clients poll on 404 until the epoch ends
            ErrorKind::NotYetAvailable => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Decryption key not available yet.")]
    NotYetAvailable {
        epoch: u64,
        seconds_until_available: u64,
    },
    #[error("Invalid ephemeral public key: {0}.")]
    KeyAgreement(#[from] KeyAgreementError),
    #[error("epoch key derivation failed: {0}")]
    Derivation(#[from] DerivationError),
}

impl ReleaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReleaseError::Input(_) | ReleaseError::KeyAgreement(_) => ErrorKind::BadRequest,
            ReleaseError::NotYetAvailable { .. } => ErrorKind::NotYetAvailable,
            ReleaseError::Derivation(_) => ErrorKind::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind().status()
    }

    /// The message safe to show a caller. Internal faults are opaque.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }

    /// Seconds to wait before retrying, for gate-locked errors
    pub fn seconds_until_available(&self) -> Option<u64> {
        match self {
            ReleaseError::NotYetAvailable {
                seconds_until_available,
                ..
            } => Some(*seconds_until_available),
            _ => None,
        }
    }
}
