//! Elliptic Curve Digital Signature Algorithm (ECDSA) public keys.

use crate::{Algorithm, EcdsaCurve, Result};
use sec1::consts::{U32, U48, U66};

#[cfg(any(feature = "p256", feature = "p384", feature = "p521"))]
use crate::Error;

/// SEC1-encoded NIST P-256 point.
pub type EcdsaNistP256PublicKey = sec1::EncodedPoint<U32>;

/// SEC1-encoded NIST P-384 point.
pub type EcdsaNistP384PublicKey = sec1::EncodedPoint<U48>;

/// SEC1-encoded NIST P-521 point.
pub type EcdsaNistP521PublicKey = sec1::EncodedPoint<U66>;

/// ECDSA public key carried by an `id-ecPublicKey` SubjectPublicKeyInfo
/// ([RFC5480 § 2]).
///
/// The `subjectPublicKey` holds a SEC1 point, compressed or uncompressed,
/// on the named curve given by the algorithm parameters.
///
/// [RFC5480 § 2]: https://datatracker.ietf.org/doc/html/rfc5480#section-2
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EcdsaPublicKey {
    /// Point on NIST P-256.
    NistP256(EcdsaNistP256PublicKey),

    /// Point on NIST P-384.
    NistP384(EcdsaNistP384PublicKey),

    /// Point on NIST P-521.
    NistP521(EcdsaNistP521PublicKey),
}

impl EcdsaPublicKey {
    /// Decode a SEC1 point on the given named curve.
    ///
    /// Fails if the tag byte is not a point encoding or the length does not
    /// match the curve's field size. The point is not checked to lie on the
    /// curve.
    pub fn from_sec1_bytes(curve: EcdsaCurve, bytes: &[u8]) -> Result<Self> {
        Ok(match curve {
            EcdsaCurve::NistP256 => Self::NistP256(EcdsaNistP256PublicKey::from_bytes(bytes)?),
            EcdsaCurve::NistP384 => Self::NistP384(EcdsaNistP384PublicKey::from_bytes(bytes)?),
            EcdsaCurve::NistP521 => Self::NistP521(EcdsaNistP521PublicKey::from_bytes(bytes)?),
        })
    }

    /// Borrow the SEC1-encoded point.
    pub fn as_sec1_bytes(&self) -> &[u8] {
        match self {
            Self::NistP256(point) => point.as_bytes(),
            Self::NistP384(point) => point.as_bytes(),
            Self::NistP521(point) => point.as_bytes(),
        }
    }

    /// Is the point in compressed form?
    pub fn is_compressed(&self) -> bool {
        match self {
            Self::NistP256(point) => point.is_compressed(),
            Self::NistP384(point) => point.is_compressed(),
            Self::NistP521(point) => point.is_compressed(),
        }
    }

    /// Get the [`Algorithm`] for this key.
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::Ecdsa {
            curve: self.curve(),
        }
    }

    /// Get the curve this key lies on.
    pub fn curve(&self) -> EcdsaCurve {
        match self {
            Self::NistP256(_) => EcdsaCurve::NistP256,
            Self::NistP384(_) => EcdsaCurve::NistP384,
            Self::NistP521(_) => EcdsaCurve::NistP521,
        }
    }

    /// Check that the point lies on its curve.
    ///
    /// Only curves whose crate feature is enabled are checked.
    pub(crate) fn check_on_curve(&self) -> Result<()> {
        match self {
            #[cfg(feature = "p256")]
            Self::NistP256(_) => p256::ecdsa::VerifyingKey::try_from(self).map(drop),
            #[cfg(feature = "p384")]
            Self::NistP384(_) => p384::ecdsa::VerifyingKey::try_from(self).map(drop),
            #[cfg(feature = "p521")]
            Self::NistP521(_) => p521::ecdsa::VerifyingKey::try_from(self).map(drop),
            #[allow(unreachable_patterns)]
            _ => Ok(()),
        }
    }
}

impl AsRef<[u8]> for EcdsaPublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_sec1_bytes()
    }
}

/// Conversions between [`EcdsaPublicKey`] and a curve crate's verifying key.
macro_rules! impl_verifying_key {
    ($krate:ident, $feature:expr, $variant:ident) => {
        #[cfg(feature = $feature)]
        impl TryFrom<&EcdsaPublicKey> for $krate::ecdsa::VerifyingKey {
            type Error = Error;

            fn try_from(public_key: &EcdsaPublicKey) -> Result<Self> {
                let EcdsaPublicKey::$variant(point) = public_key else {
                    return Err(Error::AlgorithmUnsupported {
                        oid: public_key.curve().oid(),
                    });
                };

                Self::from_encoded_point(point).map_err(|_| Error::Crypto)
            }
        }

        #[cfg(feature = $feature)]
        impl TryFrom<EcdsaPublicKey> for $krate::ecdsa::VerifyingKey {
            type Error = Error;

            fn try_from(public_key: EcdsaPublicKey) -> Result<Self> {
                Self::try_from(&public_key)
            }
        }

        #[cfg(feature = $feature)]
        impl From<&$krate::ecdsa::VerifyingKey> for EcdsaPublicKey {
            fn from(key: &$krate::ecdsa::VerifyingKey) -> Self {
                Self::$variant(key.to_encoded_point(false))
            }
        }
    };
}

impl_verifying_key!(p256, "p256", NistP256);
impl_verifying_key!(p384, "p384", NistP384);
impl_verifying_key!(p521, "p521", NistP521);
