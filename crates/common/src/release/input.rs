use crate::crypto::PublicKey;

use super::error::InputError;

/// Parse an epoch index supplied as text.
///
/// Surrounding whitespace is ignored. Negative, fractional and out of range
/// values are rejected.
pub fn parse_epoch(raw: Option<&str>) -> Result<u64, InputError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(InputError::MissingEpoch);
    };
    raw.parse::<u64>()
        .map_err(|_| InputError::InvalidEpoch(raw.to_string()))
}

/// Parse a hex encoded X25519 public key supplied by a client.
pub fn parse_ephemeral_key(raw: Option<&str>) -> Result<PublicKey, InputError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(InputError::MissingEphemeralKey);
    };
    PublicKey::from_hex(raw).map_err(InputError::InvalidEphemeralKey)
}
