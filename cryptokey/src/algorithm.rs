//! Public key algorithm support.

use crate::{Error, Result};
use core::fmt;
use spki::{ObjectIdentifier, der::AnyRef};

/// `id-ecPublicKey` as described in RFC5480 § 2.1.1
const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// `id-Ed25519` as described in RFC8410 § 3
const ID_ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

/// `id-X25519` as described in RFC8410 § 3
const ID_X25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.110");

/// `rsaEncryption` as described in RFC3279 § 2.3.1
const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// `secp256r1` named curve
const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// `secp384r1` named curve
const SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// `secp521r1` named curve
const SECP521R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// Public key algorithms.
///
/// This type provides a registry of the SubjectPublicKeyInfo algorithms this
/// crate knows how to decode.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Algorithm {
    /// Elliptic Curve Digital Signature Algorithm
    Ecdsa {
        /// Elliptic curve the key lives on.
        curve: EcdsaCurve,
    },

    /// Ed25519
    Ed25519,

    /// RSA
    Rsa,

    /// X25519 (key agreement only)
    X25519,
}

impl Algorithm {
    /// Identify the algorithm from a SubjectPublicKeyInfo `AlgorithmIdentifier`.
    ///
    /// ECDSA keys must carry the named curve OID as their parameters.
    pub fn from_oid(oid: ObjectIdentifier, parameters: Option<ObjectIdentifier>) -> Result<Self> {
        if oid == ID_EC_PUBLIC_KEY {
            let curve = parameters.ok_or(spki::Error::AlgorithmParametersMissing)?;
            Ok(Algorithm::Ecdsa {
                curve: EcdsaCurve::from_oid(curve)?,
            })
        } else if oid == ID_ED25519 {
            Ok(Algorithm::Ed25519)
        } else if oid == RSA_ENCRYPTION {
            Ok(Algorithm::Rsa)
        } else if oid == ID_X25519 {
            Ok(Algorithm::X25519)
        } else {
            Err(Error::AlgorithmUnsupported { oid })
        }
    }

    /// Get the `AlgorithmIdentifier` OID for this algorithm.
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            Algorithm::Ecdsa { .. } => ID_EC_PUBLIC_KEY,
            Algorithm::Ed25519 => ID_ED25519,
            Algorithm::Rsa => RSA_ENCRYPTION,
            Algorithm::X25519 => ID_X25519,
        }
    }

    /// Check the `AlgorithmIdentifier` parameters are the ones this algorithm
    /// requires.
    ///
    /// RSA keys carry an explicit `NULL` and Edwards/Montgomery keys carry
    /// none. ECDSA parameters are the named curve, which is resolved by
    /// [`Algorithm::from_oid`].
    pub(crate) fn check_parameters(self, parameters: Option<AnyRef<'_>>) -> Result<()> {
        let valid = match self {
            Algorithm::Ecdsa { .. } => true,
            Algorithm::Ed25519 | Algorithm::X25519 => parameters.is_none(),
            Algorithm::Rsa => parameters.is_some_and(AnyRef::is_null),
        };

        if valid {
            Ok(())
        } else {
            Err(Error::AlgorithmParametersInvalid { oid: self.oid() })
        }
    }

    /// Short name of the algorithm family, e.g. `ecdsa`.
    pub fn family(self) -> &'static str {
        match self {
            Algorithm::Ecdsa { .. } => "ecdsa",
            Algorithm::Ed25519 => "ed25519",
            Algorithm::Rsa => "rsa",
            Algorithm::X25519 => "x25519",
        }
    }

    /// Is the algorithm ECDSA?
    pub fn is_ecdsa(self) -> bool {
        matches!(self, Algorithm::Ecdsa { .. })
    }

    /// Is the algorithm Ed25519?
    pub fn is_ed25519(self) -> bool {
        matches!(self, Algorithm::Ed25519)
    }

    /// Is the algorithm RSA?
    pub fn is_rsa(self) -> bool {
        matches!(self, Algorithm::Rsa)
    }

    /// Is the algorithm X25519?
    pub fn is_x25519(self) -> bool {
        matches!(self, Algorithm::X25519)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Ecdsa { curve } => write!(f, "ecdsa ({curve})"),
            other => f.write_str(other.family()),
        }
    }
}

/// Named curves accepted in `id-ecPublicKey` parameters.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum EcdsaCurve {
    /// NIST P-256, `secp256r1`
    NistP256,

    /// NIST P-384, `secp384r1`
    NistP384,

    /// NIST P-521, `secp521r1`
    NistP521,
}

impl EcdsaCurve {
    /// Identify the curve from its named-curve OID.
    pub fn from_oid(oid: ObjectIdentifier) -> Result<Self> {
        [EcdsaCurve::NistP256, EcdsaCurve::NistP384, EcdsaCurve::NistP521]
            .into_iter()
            .find(|curve| curve.oid() == oid)
            .ok_or(Error::AlgorithmUnsupported { oid })
    }

    /// Get the named-curve OID for this curve.
    pub fn oid(self) -> ObjectIdentifier {
        match self {
            EcdsaCurve::NistP256 => SECP256R1,
            EcdsaCurve::NistP384 => SECP384R1,
            EcdsaCurve::NistP521 => SECP521R1,
        }
    }

    /// NIST name of the curve, e.g. `P-256`.
    pub fn as_str(self) -> &'static str {
        match self {
            EcdsaCurve::NistP256 => "P-256",
            EcdsaCurve::NistP384 => "P-384",
            EcdsaCurve::NistP521 => "P-521",
        }
    }
}

impl fmt::Display for EcdsaCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
