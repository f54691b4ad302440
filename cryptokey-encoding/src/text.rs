//! Text (JSON) envelope.
//!
//! A key is carried as a JSON object with two recognized fields:
//!
//! ```text
//! {"type": "pkix-der-key", "value": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAE..."}
//! ```
//!
//! `type` is the discriminator naming the key representation and `value` is
//! an optional string payload. Unrecognized fields are ignored when decoding
//! and never emitted when encoding.

use crate::{Error, Label, RawInput, Result};
use alloc::string::String;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON object form of an encoded key.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TextEnvelope {
    /// Type discriminator.
    ///
    /// Untyped for the same reason as `value`: a `type` which is not a
    /// string is a missing discriminator, not a malformed document.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<Value>,

    /// Value payload.
    ///
    /// Kept as an untyped JSON value so shapes other than strings can be
    /// reported precisely rather than failing inside the JSON parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl TextEnvelope {
    /// Create an envelope carrying the given discriminator and string value.
    pub fn new(type_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_name: Some(Value::String(type_name.into())),
            value: Some(Value::String(value.into())),
        }
    }

    /// Parse an envelope from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this envelope as a JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Get the discriminator, if `type` is a non-empty string.
    pub fn name(&self) -> Option<&str> {
        match &self.type_name {
            Some(Value::String(name)) if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }

    /// Parse the discriminator, if present.
    pub fn discriminator<L: Label>(&self) -> core::result::Result<Option<L>, L::Error> {
        self.name().map(L::parse_label).transpose()
    }

    /// Extract the value payload.
    ///
    /// An absent or `null` value yields [`RawInput::Empty`] and a string
    /// yields [`RawInput::Text`]. Any other JSON type is rejected.
    pub fn raw_value(&self) -> Result<RawInput> {
        match &self.value {
            None | Some(Value::Null) => Ok(RawInput::Empty),
            Some(Value::String(text)) => Ok(RawInput::Text(text.clone())),
            Some(other) => Err(Error::UnexpectedShape {
                shape: json_shape(other),
            }),
        }
    }
}

/// Name of a JSON value's type.
fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
