//! Error types

use crate::{Discriminator, TypeName};
use alloc::boxed::Box;
use core::fmt;
use spki::ObjectIdentifier;

/// Result type with `cryptokey`'s [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Unsupported public key algorithm.
    ///
    /// This is returned when a SubjectPublicKeyInfo names an algorithm (or
    /// elliptic curve) which this crate does not know how to decode.
    AlgorithmUnsupported {
        /// Algorithm or curve object identifier.
        oid: ObjectIdentifier,
    },

    /// The `AlgorithmIdentifier` parameters do not match what the algorithm
    /// requires, e.g. an RSA key without `NULL` parameters.
    AlgorithmParametersInvalid {
        /// Algorithm object identifier.
        oid: ObjectIdentifier,
    },

    /// ASN.1 DER errors.
    Asn1(spki::der::Error),

    /// Cryptographic errors, e.g. a curve point which is not on the curve.
    Crypto,

    /// A key type is already registered under the given name or tag.
    DuplicateType(Discriminator),

    /// ECDSA key encoding errors.
    Ecdsa(sec1::Error),

    /// Operation attempted on a [`CryptoKey`][`crate::CryptoKey`] which holds no value.
    EmptyContainer,

    /// Encoding errors.
    Encoding(encoding::Error),

    /// A constructor rejected its input.
    InvalidValue {
        /// Name of the key type whose constructor failed.
        type_name: TypeName,

        /// Underlying constructor error.
        cause: Box<Error>,
    },

    /// The key value is empty.
    KeyNotSet,

    /// The key value could not be parsed as a public key.
    MalformedKey(Box<Error>),

    /// The encoded key carries no type discriminator.
    MissingType,

    /// The key representation does not carry a public key.
    PublicKeyUnavailable,

    /// SubjectPublicKeyInfo errors.
    Spki(spki::Error),

    /// No key type is registered for the given discriminator.
    UnknownType(Discriminator),

    /// A constructor (or the container) was handed a payload shape it does
    /// not accept.
    UnsupportedInputShape {
        /// Name of the payload shape, e.g. `"bytes"`.
        shape: &'static str,
    },
}

impl Error {
    /// Get the innermost cause of an error, looking through
    /// [`Error::InvalidValue`] and [`Error::MalformedKey`] wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::InvalidValue { cause, .. } | Error::MalformedKey(cause) => cause.root_cause(),
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AlgorithmUnsupported { oid } => write!(f, "unsupported algorithm: {oid}"),
            Error::AlgorithmParametersInvalid { oid } => {
                write!(f, "invalid algorithm parameters for {oid}")
            }
            Error::Asn1(err) => write!(f, "ASN.1 error: {err}"),
            Error::Crypto => write!(f, "cryptographic error"),
            Error::DuplicateType(discriminator) => {
                write!(f, "key type already registered: {discriminator}")
            }
            Error::Ecdsa(err) => write!(f, "ECDSA encoding error: {err}"),
            Error::EmptyContainer => write!(f, "no key value set"),
            Error::Encoding(err) => write!(f, "{err}"),
            Error::InvalidValue { type_name, cause } => {
                write!(f, "invalid value for key type {type_name}: {cause}")
            }
            Error::KeyNotSet => write!(f, "key value not set"),
            Error::MalformedKey(cause) => write!(f, "unable to parse public key: {cause}"),
            Error::MissingType => write!(f, "key type not set"),
            Error::PublicKeyUnavailable => write!(f, "key value does not carry a public key"),
            Error::Spki(err) => write!(f, "{err}"),
            Error::UnknownType(discriminator) => write!(f, "unknown key type: {discriminator}"),
            Error::UnsupportedInputShape { shape } => {
                write!(f, "unsupported key value shape: {shape}")
            }
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Encoding(err) => Some(err),
            Self::InvalidValue { cause, .. } | Self::MalformedKey(cause) => Some(cause.as_ref()),
            #[cfg(feature = "std")]
            Self::Asn1(err) => Some(err),
            #[cfg(feature = "std")]
            Self::Ecdsa(err) => Some(err),
            #[cfg(feature = "std")]
            Self::Spki(err) => Some(err),
            _ => None,
        }
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::Encoding(encoding::Error::Length)
    }
}

impl From<encoding::Error> for Error {
    fn from(err: encoding::Error) -> Error {
        match err {
            encoding::Error::MissingTag => Error::MissingType,
            encoding::Error::UnexpectedShape { shape } => Error::UnsupportedInputShape { shape },
            other => Error::Encoding(other),
        }
    }
}

impl From<encoding::LabelError> for Error {
    fn from(err: encoding::LabelError) -> Error {
        Error::Encoding(err.into())
    }
}

impl From<encoding::base64::Error> for Error {
    fn from(err: encoding::base64::Error) -> Error {
        Error::Encoding(err.into())
    }
}

impl From<sec1::Error> for Error {
    fn from(err: sec1::Error) -> Error {
        Error::Ecdsa(err)
    }
}

impl From<spki::der::Error> for Error {
    fn from(err: spki::der::Error) -> Error {
        Error::Asn1(err)
    }
}

impl From<spki::Error> for Error {
    fn from(err: spki::Error) -> Error {
        match err {
            spki::Error::OidUnknown { oid } => Error::AlgorithmUnsupported { oid },
            other => Error::Spki(other),
        }
    }
}

#[cfg(feature = "rsa")]
impl From<rsa::errors::Error> for Error {
    fn from(_: rsa::errors::Error) -> Error {
        Error::Crypto
    }
}
