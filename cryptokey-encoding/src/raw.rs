//! Raw payload shapes handed to key constructors.

use crate::{Result, base64};
use alloc::{string::String, vec::Vec};
use base64ct::Encoding;

/// Raw value payload extracted from an encoded key.
///
/// Text encodings carry the value as a string, binary encodings carry raw
/// bytes, and either may omit the value altogether. Constructors receive
/// exactly one of these shapes and decide for themselves which ones they
/// accept.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum RawInput {
    /// Raw bytes, passed through unchanged from a binary encoding.
    Bytes(Vec<u8>),

    /// Text, e.g. Base64 or PEM carried in a JSON string.
    Text(String),

    /// No value was present.
    #[default]
    Empty,
}

impl RawInput {
    /// Name of this payload shape, for use in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            RawInput::Bytes(_) => "bytes",
            RawInput::Text(_) => "text",
            RawInput::Empty => "empty",
        }
    }

    /// Is this the [`RawInput::Empty`] sentinel?
    pub fn is_empty(&self) -> bool {
        matches!(self, RawInput::Empty)
    }

    /// Convert this payload into bytes, decoding [`RawInput::Text`] as
    /// standard (padded) Base64.
    ///
    /// [`RawInput::Empty`] yields a zero-length byte vector.
    pub fn into_bytes_base64(self) -> Result<Vec<u8>> {
        match self {
            RawInput::Bytes(bytes) => Ok(bytes),
            RawInput::Text(text) => Ok(base64::Base64::decode_vec(&text)?),
            RawInput::Empty => Ok(Vec::new()),
        }
    }
}

impl From<Vec<u8>> for RawInput {
    fn from(bytes: Vec<u8>) -> RawInput {
        RawInput::Bytes(bytes)
    }
}

impl From<&[u8]> for RawInput {
    fn from(bytes: &[u8]) -> RawInput {
        RawInput::Bytes(bytes.to_vec())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> RawInput {
        RawInput::Text(text)
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> RawInput {
        RawInput::Text(text.into())
    }
}

impl<T> From<Option<T>> for RawInput
where
    T: Into<RawInput>,
{
    fn from(value: Option<T>) -> RawInput {
        value.map(Into::into).unwrap_or_default()
    }
}
