use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use x25519_dalek::{PublicKey as XPublicKey, StaticSecret};

/// Size of an X25519 private key in bytes
pub const PRIVATE_KEY_SIZE: usize = 32;
/// Size of an X25519 public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Errors that can occur during key operations
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("invalid key size, expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("key hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("failed to gather randomness: {0}")]
    Rng(String),
}

fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x").unwrap_or(hex)
}

fn decode_fixed<const N: usize>(hex: &str) -> Result<[u8; N], KeyError> {
    let bytes = hex::decode(strip_hex_prefix(hex))?;
    if bytes.len() != N {
        return Err(KeyError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut buff = [0u8; N];
    buff.copy_from_slice(&bytes);
    Ok(buff)
}

/// X25519 public key
///
/// A thin wrapper around `x25519_dalek::PublicKey`. Used for the eon public key,
/// epoch public keys and the ephemeral keys clients send along with a
/// decryption-key request.
///
/// Serializes as a lowercase hex string.
///
/// # Examples
///
/// ```ignore
/// let secret_key = SecretKey::generate()?;
/// let public_key = secret_key.public();
///
/// let hex = public_key.to_hex();
/// let recovered = PublicKey::from_hex(&hex)?;
/// assert_eq!(public_key, recovered);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(XPublicKey);

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_hex()).finish()
    }
}

impl Deref for PublicKey {
    type Target = XPublicKey;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<XPublicKey> for PublicKey {
    fn from(key: XPublicKey) -> Self {
        PublicKey(key)
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        PublicKey(XPublicKey::from(bytes))
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = KeyError;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let buff: [u8; PUBLIC_KEY_SIZE] =
            bytes.try_into().map_err(|_| KeyError::InvalidLength {
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            })?;
        Ok(buff.into())
    }
}

impl PublicKey {
    /// Parse a public key from a hexadecimal string
    ///
    /// Accepts both plain hex and "0x"-prefixed hex strings.
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        decode_fixed::<PUBLIC_KEY_SIZE>(hex).map(Self::from)
    }

    /// Convert public key to raw bytes
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        *self.0.as_bytes()
    }

    /// Convert public key to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        PublicKey::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// X25519 private key
///
/// A thin wrapper around `x25519_dalek::StaticSecret`. The wrapped bytes are the
/// raw 32-byte scalar; clamping happens inside the X25519 scalar multiplication,
/// so the bytes returned by [`SecretKey::to_bytes`] are exactly what libsodium's
/// `crypto_scalarmult` expects on the client side.
///
/// The inner secret is zeroized on drop and never shows up in `Debug` output.
#[derive(Clone)]
pub struct SecretKey(StaticSecret);

impl From<[u8; PRIVATE_KEY_SIZE]> for SecretKey {
    fn from(secret: [u8; PRIVATE_KEY_SIZE]) -> Self {
        Self(StaticSecret::from(secret))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("public", &self.public())
            .finish_non_exhaustive()
    }
}

impl SecretKey {
    /// Parse a secret key from a hexadecimal string
    ///
    /// Accepts both plain hex and "0x"-prefixed hex strings.
    pub fn from_hex(hex: &str) -> Result<Self, KeyError> {
        decode_fixed::<PRIVATE_KEY_SIZE>(hex).map(Self::from)
    }

    /// Generate a new random secret key using the operating system's CSPRNG
    pub fn generate() -> Result<Self, KeyError> {
        let mut bytes = zeroize::Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        getrandom::getrandom(&mut bytes[..]).map_err(|e| KeyError::Rng(e.to_string()))?;
        Ok(Self::from(*bytes))
    }

    /// Derive the public key from this secret key
    pub fn public(&self) -> PublicKey {
        PublicKey(XPublicKey::from(&self.0))
    }

    /// Convert secret key to raw bytes
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_SIZE] {
        self.0.to_bytes()
    }

    /// Convert secret key to hexadecimal string
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub(crate) fn as_static(&self) -> &StaticSecret {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keypair_generation() {
        let private_key = SecretKey::generate().unwrap();
        let public_key = private_key.public();

        let private_hex = private_key.to_hex();
        let recovered_private = SecretKey::from_hex(&private_hex).unwrap();
        assert_eq!(private_key.to_bytes(), recovered_private.to_bytes());

        let public_hex = public_key.to_hex();
        let recovered_public = PublicKey::from_hex(&public_hex).unwrap();
        assert_eq!(public_key, recovered_public);
    }

    #[test]
    fn test_hex_prefix_accepted() {
        let public_key = SecretKey::generate().unwrap().public();
        let prefixed = format!("0x{}", public_key.to_hex());
        assert_eq!(PublicKey::from_hex(&prefixed).unwrap(), public_key);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = PublicKey::from_hex("abcd").unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidLength {
                expected: PUBLIC_KEY_SIZE,
                actual: 2
            }
        ));

        let err = PublicKey::try_from(&[0u8; 31][..]).unwrap_err();
        assert!(matches!(err, KeyError::InvalidLength { actual: 31, .. }));
    }

    #[test]
    fn test_non_hex_rejected() {
        let err = PublicKey::from_hex(&"zz".repeat(PUBLIC_KEY_SIZE)).unwrap_err();
        assert!(matches!(err, KeyError::Hex(_)));
    }

    #[test]
    fn test_secret_bytes_are_not_clamped() {
        // clamping is deferred to the scalar multiplication
        let raw = [0xffu8; PRIVATE_KEY_SIZE];
        let secret = SecretKey::from(raw);
        assert_eq!(secret.to_bytes(), raw);
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let secret = SecretKey::from([7u8; PRIVATE_KEY_SIZE]);
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains(&secret.to_hex()));
    }

    #[test]
    fn test_public_key_serde_as_hex() {
        let public_key = SecretKey::from([1u8; PRIVATE_KEY_SIZE]).public();
        let json = serde_json::to_string(&public_key).unwrap();
        assert_eq!(json, format!("\"{}\"", public_key.to_hex()));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, public_key);
    }
}
