//! Public keys decoded from SubjectPublicKeyInfo structures.

mod ecdsa;
mod ed25519;
mod rsa;
mod x25519;

pub use self::{
    ecdsa::{EcdsaNistP256PublicKey, EcdsaNistP384PublicKey, EcdsaNistP521PublicKey, EcdsaPublicKey},
    ed25519::Ed25519PublicKey,
    rsa::RsaPublicKey,
    x25519::X25519PublicKey,
};

use crate::{Algorithm, Error, Result};
use spki::{SubjectPublicKeyInfoRef, der::Decode};

/// Public key.
///
/// This is what a [`KeyValue`][`crate::KeyValue`] exposes once its encoded
/// form has been parsed. Conversions into the RustCrypto verifying key types
/// are available when the corresponding crate features are enabled.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum PublicKey {
    /// Elliptic Curve Digital Signature Algorithm (ECDSA) public key.
    Ecdsa(EcdsaPublicKey),

    /// Ed25519 public key.
    Ed25519(Ed25519PublicKey),

    /// RSA public key.
    Rsa(RsaPublicKey),

    /// X25519 public key.
    X25519(X25519PublicKey),
}

impl PublicKey {
    /// Parse a DER-encoded SubjectPublicKeyInfo structure as described in
    /// [RFC5280 § 4.1.2.7].
    ///
    /// # Supported algorithms
    /// - `id-ecPublicKey` on NIST P-256, P-384 and P-521
    /// - `id-Ed25519`
    /// - `rsaEncryption`, with `NULL` parameters
    /// - `id-X25519`
    ///
    /// [RFC5280 § 4.1.2.7]: https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.7
    pub fn from_spki_der(der: &[u8]) -> Result<Self> {
        let spki = SubjectPublicKeyInfoRef::from_der(der)?;

        let parameters = spki.algorithm.parameters;
        let curve = match parameters {
            Some(any) if !any.is_null() => Some(spki.algorithm.parameters_oid()?),
            _ => None,
        };

        let algorithm = Algorithm::from_oid(spki.algorithm.oid, curve)?;
        algorithm.check_parameters(parameters)?;

        // Unused bits are not permitted in any supported key encoding.
        let key = spki
            .subject_public_key
            .as_bytes()
            .ok_or(spki::Error::KeyMalformed)?;

        match algorithm {
            Algorithm::Ecdsa { curve } => {
                let public_key = EcdsaPublicKey::from_sec1_bytes(curve, key)?;
                public_key.check_on_curve()?;
                Ok(PublicKey::Ecdsa(public_key))
            }
            Algorithm::Ed25519 => {
                let public_key = Ed25519PublicKey::try_from(key)?;
                public_key.check_point()?;
                Ok(PublicKey::Ed25519(public_key))
            }
            Algorithm::Rsa => Ok(PublicKey::Rsa(RsaPublicKey::from_pkcs1_der(key)?)),
            Algorithm::X25519 => Ok(PublicKey::X25519(X25519PublicKey::try_from(key)?)),
        }
    }

    /// Get the [`Algorithm`] for this public key.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Ecdsa(key) => key.algorithm(),
            Self::Ed25519(_) => Algorithm::Ed25519,
            Self::Rsa(_) => Algorithm::Rsa,
            Self::X25519(_) => Algorithm::X25519,
        }
    }

    /// Get ECDSA public key if this key is the correct type.
    pub fn ecdsa(&self) -> Option<&EcdsaPublicKey> {
        match self {
            Self::Ecdsa(key) => Some(key),
            _ => None,
        }
    }

    /// Get Ed25519 public key if this key is the correct type.
    pub fn ed25519(&self) -> Option<&Ed25519PublicKey> {
        match self {
            Self::Ed25519(key) => Some(key),
            _ => None,
        }
    }

    /// Get RSA public key if this key is the correct type.
    pub fn rsa(&self) -> Option<&RsaPublicKey> {
        match self {
            Self::Rsa(key) => Some(key),
            _ => None,
        }
    }

    /// Get X25519 public key if this key is the correct type.
    pub fn x25519(&self) -> Option<&X25519PublicKey> {
        match self {
            Self::X25519(key) => Some(key),
            _ => None,
        }
    }

    /// Is this key an ECDSA key?
    pub fn is_ecdsa(&self) -> bool {
        matches!(self, Self::Ecdsa(_))
    }

    /// Is this key an Ed25519 key?
    pub fn is_ed25519(&self) -> bool {
        matches!(self, Self::Ed25519(_))
    }

    /// Is this key an RSA key?
    pub fn is_rsa(&self) -> bool {
        matches!(self, Self::Rsa(_))
    }

    /// Is this key an X25519 key?
    pub fn is_x25519(&self) -> bool {
        matches!(self, Self::X25519(_))
    }
}

impl From<EcdsaPublicKey> for PublicKey {
    fn from(public_key: EcdsaPublicKey) -> PublicKey {
        Self::Ecdsa(public_key)
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(public_key: Ed25519PublicKey) -> PublicKey {
        Self::Ed25519(public_key)
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(public_key: RsaPublicKey) -> PublicKey {
        Self::Rsa(public_key)
    }
}

impl From<X25519PublicKey> for PublicKey {
    fn from(public_key: X25519PublicKey) -> PublicKey {
        Self::X25519(public_key)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(der: &[u8]) -> Result<Self> {
        Self::from_spki_der(der)
    }
}

macro_rules! impl_verifying_key_for_public_key {
    ($key:ty, $feature:expr, $variant:ident) => {
        #[cfg(feature = $feature)]
        impl TryFrom<&PublicKey> for $key {
            type Error = Error;

            fn try_from(public_key: &PublicKey) -> Result<$key> {
                match public_key {
                    PublicKey::$variant(key) => <$key>::try_from(key),
                    _ => Err(Error::AlgorithmUnsupported {
                        oid: public_key.algorithm().oid(),
                    }),
                }
            }
        }

        #[cfg(feature = $feature)]
        impl TryFrom<PublicKey> for $key {
            type Error = Error;

            fn try_from(public_key: PublicKey) -> Result<$key> {
                <$key>::try_from(&public_key)
            }
        }
    };
}

impl_verifying_key_for_public_key!(p256::ecdsa::VerifyingKey, "p256", Ecdsa);
impl_verifying_key_for_public_key!(p384::ecdsa::VerifyingKey, "p384", Ecdsa);
impl_verifying_key_for_public_key!(p521::ecdsa::VerifyingKey, "p521", Ecdsa);
impl_verifying_key_for_public_key!(ed25519_dalek::VerifyingKey, "ed25519", Ed25519);
impl_verifying_key_for_public_key!(::rsa::RsaPublicKey, "rsa", Rsa);
