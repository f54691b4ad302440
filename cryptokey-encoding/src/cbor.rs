//! Binary (CBOR) envelope.
//!
//! A key is carried as a single CBOR tagged item whose tag is the numeric
//! discriminator of the key representation and whose content is the raw
//! payload:
//!
//! | payload              | CBOR content      |
//! |----------------------|-------------------|
//! | [`RawInput::Bytes`]  | byte string       |
//! | [`RawInput::Text`]   | text string       |
//! | [`RawInput::Empty`]  | `null`            |
//!
//! Byte payloads travel as-is, without the Base64 layer used by text
//! encodings.

use crate::{Error, RawInput, Result};
use alloc::{boxed::Box, string::ToString, vec::Vec};
use ciborium::{Value, tag::Captured};

/// Tagged CBOR form of an encoded key.
///
/// The content is kept as a generic CBOR item until [`TaggedValue::payload`]
/// maps it onto a payload shape, so the tag can be resolved first.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedValue {
    /// Numeric type discriminator.
    pub tag: u64,

    /// Tagged content.
    pub content: Value,
}

impl TaggedValue {
    /// Create a new tagged value carrying the given payload.
    pub fn new(tag: u64, payload: RawInput) -> Self {
        let content = match payload {
            RawInput::Bytes(bytes) => Value::Bytes(bytes),
            RawInput::Text(text) => Value::Text(text),
            RawInput::Empty => Value::Null,
        };

        Self { tag, content }
    }

    /// Decode a tagged value from a CBOR-encoded item.
    ///
    /// The input must contain exactly one item. The outermost tag is read
    /// as-is, including tags such as 2 and 3 which a generic CBOR decoder
    /// would interpret as bignums.
    pub fn from_cbor(mut bytes: &[u8]) -> Result<Self> {
        let Captured(tag, content) = ciborium::de::from_reader::<Captured<Value>, _>(&mut bytes)
            .map_err(|err| Error::Cbor(err.to_string()))?;

        if !bytes.is_empty() {
            return Err(Error::TrailingData {
                remaining: bytes.len(),
            });
        }

        Ok(Self {
            tag: tag.ok_or(Error::MissingTag)?,
            content,
        })
    }

    /// Encode this tagged value as a CBOR item.
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        ciborium::ser::into_writer(&self.to_value(), &mut out)
            .map_err(|err| Error::Cbor(err.to_string()))?;
        Ok(out)
    }

    /// Convert an already-decoded CBOR item into a tagged value.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Tag(tag, content) => Ok(Self {
                tag,
                content: *content,
            }),
            _ => Err(Error::MissingTag),
        }
    }

    /// Convert this tagged value into a CBOR item.
    pub fn to_value(&self) -> Value {
        Value::Tag(self.tag, Box::new(self.content.clone()))
    }

    /// Map the tagged content onto a payload shape.
    ///
    /// Byte strings, text strings and `null` are accepted. Any other item
    /// fails with [`Error::UnexpectedShape`].
    pub fn payload(&self) -> Result<RawInput> {
        match &self.content {
            Value::Bytes(bytes) => Ok(RawInput::Bytes(bytes.clone())),
            Value::Text(text) => Ok(RawInput::Text(text.clone())),
            Value::Null => Ok(RawInput::Empty),
            other => Err(Error::UnexpectedShape {
                shape: cbor_shape(other),
            }),
        }
    }
}

/// Name of a CBOR item's major type.
fn cbor_shape(value: &Value) -> &'static str {
    match value {
        Value::Integer(_) => "integer",
        Value::Bytes(_) => "bytes",
        Value::Float(_) => "float",
        Value::Text(_) => "text",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
        Value::Tag(..) => "tag",
        Value::Array(_) => "array",
        Value::Map(_) => "map",
        _ => "unknown",
    }
}
