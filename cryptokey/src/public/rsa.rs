//! Rivest–Shamir–Adleman (RSA) public keys.

use crate::{Error, Result};
use alloc::vec::Vec;
use spki::der::Decode;

#[cfg(feature = "rsa")]
use ::rsa::{BigUint, traits::PublicKeyParts};

/// RSA public key.
///
/// Carried as a PKCS#1 `RSAPublicKey` inside the `subjectPublicKey` of an
/// `rsaEncryption` SubjectPublicKeyInfo ([RFC8017 § A.1.1]). Both integers
/// are stored as unsigned big-endian bytes without leading zeroes.
///
/// [RFC8017 § A.1.1]: https://datatracker.ietf.org/doc/html/rfc8017#appendix-A.1.1
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RsaPublicKey {
    /// RSA public exponent.
    e: Vec<u8>,

    /// RSA modulus.
    n: Vec<u8>,

    /// Length of this key in bits.
    bits: u32,
}

impl RsaPublicKey {
    /// Create a new [`RsaPublicKey`] with the given components:
    ///
    /// - `e`: RSA public exponent.
    /// - `n`: RSA modulus.
    ///
    /// Leading zero bytes are stripped. Both components must be non-zero.
    pub fn new(e: &[u8], n: &[u8]) -> Result<Self> {
        let e = strip_leading_zeroes(e);
        let n = strip_leading_zeroes(n);

        let first = match (e.is_empty(), n.first()) {
            (false, Some(&first)) => first,
            _ => return Err(spki::Error::KeyMalformed.into()),
        };

        let bits = n
            .len()
            .checked_mul(8)
            .and_then(|bits| u32::try_from(bits).ok())
            .and_then(|bits| bits.checked_sub(first.leading_zeros()))
            .ok_or(encoding::Error::Length)?;

        Ok(Self {
            e: e.to_vec(),
            n: n.to_vec(),
            bits,
        })
    }

    /// Parse a DER-encoded PKCS#1 `RSAPublicKey`.
    pub fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        let key = pkcs1::RsaPublicKey::from_der(der)?;
        Self::new(key.public_exponent.as_bytes(), key.modulus.as_bytes())
    }

    /// Get the RSA public exponent.
    pub fn e(&self) -> &[u8] {
        &self.e
    }

    /// Get the RSA modulus.
    pub fn n(&self) -> &[u8] {
        &self.n
    }

    /// Get the size of the RSA modulus in bits.
    pub fn key_size(&self) -> u32 {
        self.bits
    }
}

fn strip_leading_zeroes(mut bytes: &[u8]) -> &[u8] {
    while let [0, rest @ ..] = bytes {
        bytes = rest;
    }
    bytes
}

#[cfg(feature = "rsa")]
impl TryFrom<RsaPublicKey> for ::rsa::RsaPublicKey {
    type Error = Error;

    fn try_from(key: RsaPublicKey) -> Result<::rsa::RsaPublicKey> {
        ::rsa::RsaPublicKey::try_from(&key)
    }
}

#[cfg(feature = "rsa")]
impl TryFrom<&RsaPublicKey> for ::rsa::RsaPublicKey {
    type Error = Error;

    fn try_from(key: &RsaPublicKey) -> Result<::rsa::RsaPublicKey> {
        Ok(::rsa::RsaPublicKey::new(
            BigUint::from_bytes_be(&key.n),
            BigUint::from_bytes_be(&key.e),
        )?)
    }
}

#[cfg(feature = "rsa")]
impl TryFrom<::rsa::RsaPublicKey> for RsaPublicKey {
    type Error = Error;

    fn try_from(key: ::rsa::RsaPublicKey) -> Result<RsaPublicKey> {
        RsaPublicKey::try_from(&key)
    }
}

#[cfg(feature = "rsa")]
impl TryFrom<&::rsa::RsaPublicKey> for RsaPublicKey {
    type Error = Error;

    fn try_from(key: &::rsa::RsaPublicKey) -> Result<RsaPublicKey> {
        RsaPublicKey::new(&key.e().to_bytes_be(), &key.n().to_bytes_be())
    }
}
