//! X25519 public keys.

use crate::{Error, Result};

/// X25519 public key carried by an `id-X25519` SubjectPublicKeyInfo
/// ([RFC8410 § 4]): the 32-byte Montgomery u-coordinate.
///
/// Every 32-byte string is a valid X25519 public key, so only the length is
/// checked. These keys are for key agreement and have no verifying key.
///
/// [RFC8410 § 4]: https://datatracker.ietf.org/doc/html/rfc8410#section-4
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct X25519PublicKey(pub [u8; Self::BYTE_SIZE]);

impl X25519PublicKey {
    /// Size of an X25519 public key in bytes.
    pub const BYTE_SIZE: usize = 32;

    /// Borrow the key bytes.
    pub fn as_bytes(&self) -> &[u8; Self::BYTE_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for X25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for X25519PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Ok(Self(bytes.try_into()?))
    }
}
