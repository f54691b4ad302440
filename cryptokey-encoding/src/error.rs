//! Error types.

use crate::LabelError;
use core::fmt;

#[cfg(any(feature = "cbor", feature = "json"))]
use alloc::string::String;

#[cfg(feature = "json")]
use alloc::string::ToString;

/// Result type with `cryptokey-encoding` crate's [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Base64-related errors.
    Base64(base64ct::Error),

    /// CBOR serialization or deserialization errors.
    #[cfg(feature = "cbor")]
    Cbor(String),

    /// Character encoding-related errors.
    CharacterEncoding,

    /// JSON serialization or deserialization errors.
    #[cfg(feature = "json")]
    Json(String),

    /// Invalid label.
    Label(LabelError),

    /// Invalid length.
    Length,

    /// A binary-encoded item was not wrapped in a tag.
    MissingTag,

    /// PEM encoding errors.
    #[cfg(feature = "pem")]
    Pem(pem_rfc7468::Error),

    /// Unexpected trailing data at end of message.
    TrailingData {
        /// Number of bytes of remaining data at end of message.
        remaining: usize,
    },

    /// The payload has a shape that cannot be expressed as a [`RawInput`][`crate::RawInput`].
    UnexpectedShape {
        /// Name of the shape which was encountered, e.g. `"number"`.
        shape: &'static str,
    },
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            Self::Base64(err) => Some(err),
            Self::Label(err) => Some(err),
            #[cfg(all(feature = "pem", feature = "std"))]
            Self::Pem(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Base64(err) => write!(f, "Base64 encoding error: {err}"),
            #[cfg(feature = "cbor")]
            Error::Cbor(msg) => write!(f, "CBOR encoding error: {msg}"),
            Error::CharacterEncoding => write!(f, "character encoding invalid"),
            #[cfg(feature = "json")]
            Error::Json(msg) => write!(f, "JSON encoding error: {msg}"),
            Error::Label(err) => write!(f, "{err}"),
            Error::Length => write!(f, "length invalid"),
            Error::MissingTag => write!(f, "binary item carries no tag"),
            #[cfg(feature = "pem")]
            Error::Pem(err) => write!(f, "{err}"),
            Error::TrailingData { remaining } => write!(
                f,
                "unexpected trailing data at end of message ({remaining} bytes)",
            ),
            Error::UnexpectedShape { shape } => write!(f, "unexpected payload shape: {shape}"),
        }
    }
}

impl From<LabelError> for Error {
    fn from(err: LabelError) -> Error {
        Error::Label(err)
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Error {
        Error::CharacterEncoding
    }
}

impl From<alloc::string::FromUtf8Error> for Error {
    fn from(_: alloc::string::FromUtf8Error) -> Error {
        Error::CharacterEncoding
    }
}

impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Error {
        Error::Base64(err)
    }
}

impl From<base64ct::InvalidLengthError> for Error {
    fn from(_: base64ct::InvalidLengthError) -> Error {
        Error::Length
    }
}

#[cfg(feature = "pem")]
impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Error {
        Error::Pem(err)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err.to_string())
    }
}
