//! Ed25519 public keys.

use crate::{Error, Result};

/// Ed25519 public key carried by an `id-Ed25519` SubjectPublicKeyInfo
/// ([RFC8410 § 4]): the 32-byte compressed Edwards point.
///
/// [RFC8410 § 4]: https://datatracker.ietf.org/doc/html/rfc8410#section-4
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Ed25519PublicKey(pub [u8; Self::BYTE_SIZE]);

impl Ed25519PublicKey {
    /// Size of an Ed25519 public key in bytes.
    pub const BYTE_SIZE: usize = 32;

    /// Borrow the key bytes.
    pub fn as_bytes(&self) -> &[u8; Self::BYTE_SIZE] {
        &self.0
    }

    /// Check that the key decompresses to a curve point.
    ///
    /// Without the `ed25519` feature only the length has been checked.
    pub(crate) fn check_point(&self) -> Result<()> {
        #[cfg(feature = "ed25519")]
        ed25519_dalek::VerifyingKey::try_from(self)?;

        Ok(())
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Ed25519PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Ok(Self(bytes.try_into()?))
    }
}

#[cfg(feature = "ed25519")]
impl TryFrom<&Ed25519PublicKey> for ed25519_dalek::VerifyingKey {
    type Error = Error;

    fn try_from(key: &Ed25519PublicKey) -> Result<Self> {
        Self::from_bytes(key.as_bytes()).map_err(|_| Error::Crypto)
    }
}

#[cfg(feature = "ed25519")]
impl TryFrom<Ed25519PublicKey> for ed25519_dalek::VerifyingKey {
    type Error = Error;

    fn try_from(key: Ed25519PublicKey) -> Result<Self> {
        Self::try_from(&key)
    }
}

#[cfg(feature = "ed25519")]
impl From<&ed25519_dalek::VerifyingKey> for Ed25519PublicKey {
    fn from(key: &ed25519_dalek::VerifyingKey) -> Self {
        Self(key.to_bytes())
    }
}
