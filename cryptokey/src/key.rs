//! Polymorphic key container.

use crate::{Discriminator, Error, KeyType, KeyValue, PublicKey, Registry, Result};
use alloc::boxed::Box;
use core::fmt;
use encoding::RawInput;

#[cfg(feature = "cbor")]
use {alloc::vec::Vec, encoding::TaggedValue};

#[cfg(feature = "json")]
use {crate::TypeName, alloc::string::String, encoding::TextEnvelope};

#[cfg(feature = "json")]
use serde::{Serialize, ser};

#[cfg(all(feature = "json", feature = "std"))]
use serde::{Deserialize, de};

/// Container holding exactly one key value of any registered representation.
///
/// Decoding reads the type discriminator from the encoded form, resolves the
/// registered [`Constructor`][`crate::Constructor`] through a [`Registry`]
/// and stores whatever [`KeyValue`] it produced. Encoding reads the
/// discriminator back from the stored value, so a decoded key re-encodes
/// under the type it was decoded as.
///
/// # Encodings
///
/// - text (`json` feature): `{"type": "<name>", "value": "<text>"}`
/// - binary (`cbor` feature): CBOR tagged item whose tag is the registered
///   numeric tag and whose content is the raw value
///
/// # `serde` support
///
/// When the `json` feature of this crate is enabled, this type receives an
/// impl of [`Serialize`][`serde::Serialize`] producing the text envelope.
/// With `std` also enabled it receives an impl of
/// [`Deserialize`][`serde::Deserialize`] which decodes against the
/// process-wide [`registry`][`crate::registry()`].
#[derive(Debug, Default)]
pub struct CryptoKey {
    value: Option<Box<dyn KeyValue>>,
}

impl CryptoKey {
    /// Wrap a key value.
    pub fn new(value: impl KeyValue + 'static) -> Self {
        Self::from(Box::new(value) as Box<dyn KeyValue>)
    }

    /// Construct a key by type name, as a host building keys
    /// programmatically would.
    pub fn from_name(registry: &Registry, name: &str, input: impl Into<RawInput>) -> Result<Self> {
        let value = registry.construct(&Discriminator::from(name), input.into())?;
        Ok(Self::from(value))
    }

    /// Decode a key from a text envelope.
    ///
    /// Fails with [`Error::MissingType`] if the envelope has no `type` or
    /// its `type` is not a non-empty string,
    /// [`Error::UnknownType`] if it names an unregistered type,
    /// [`Error::UnsupportedInputShape`] if `value` is neither a string nor
    /// absent, and [`Error::InvalidValue`] if the constructor rejects it.
    #[cfg(feature = "json")]
    pub fn from_text(registry: &Registry, envelope: &TextEnvelope) -> Result<Self> {
        // Names which are not valid labels can never have been registered.
        let name = envelope
            .discriminator::<TypeName>()
            .map_err(|err| Error::UnknownType(Discriminator::from(err.label())))?
            .ok_or(Error::MissingType)?;

        if !registry.contains_name(name.as_str()) {
            return Err(Error::UnknownType(Discriminator::from(name.as_str())));
        }

        let input = envelope.raw_value()?;
        Self::from_name(registry, name.as_str(), input)
    }

    /// Decode a key from a JSON document.
    #[cfg(feature = "json")]
    pub fn from_json(registry: &Registry, json: &str) -> Result<Self> {
        Self::from_text(registry, &TextEnvelope::from_json(json)?)
    }

    /// Decode a key from a CBOR tagged item.
    ///
    /// Untagged items fail with [`Error::MissingType`] and unregistered tags
    /// with [`Error::UnknownType`], whatever their content. Content other
    /// than a byte string, text string or `null` then fails with
    /// [`Error::UnsupportedInputShape`].
    #[cfg(feature = "cbor")]
    pub fn from_cbor(registry: &Registry, bytes: &[u8]) -> Result<Self> {
        let tagged = TaggedValue::from_cbor(bytes)?;
        let discriminator = Discriminator::Tag(tagged.tag);

        if !registry.contains_tag(tagged.tag) {
            return Err(Error::UnknownType(discriminator));
        }

        let value = registry.construct(&discriminator, tagged.payload()?)?;
        Ok(Self::from(value))
    }

    /// Encode this key as a text envelope.
    #[cfg(feature = "json")]
    pub fn to_text_envelope(&self) -> Result<TextEnvelope> {
        let value = self.value()?;
        Ok(TextEnvelope::new(value.key_type().as_str(), value.to_text()))
    }

    /// Encode this key as a JSON document.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(self.to_text_envelope()?.to_json()?)
    }

    /// Encode this key as a CBOR tagged item.
    #[cfg(feature = "cbor")]
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        let value = self.value()?;
        Ok(TaggedValue::new(value.key_type().tag(), value.to_raw()).to_cbor()?)
    }

    /// Is this container empty?
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the stored key value.
    pub fn value(&self) -> Result<&dyn KeyValue> {
        self.value.as_deref().ok_or(Error::EmptyContainer)
    }

    /// Take the stored key value, leaving the container empty.
    pub fn take(&mut self) -> Option<Box<dyn KeyValue>> {
        self.value.take()
    }

    /// Type identifier of the stored key value.
    pub fn key_type(&self) -> Result<&KeyType> {
        Ok(self.value()?.key_type())
    }

    /// Check the stored key value is well-formed.
    pub fn validate(&self) -> Result<()> {
        self.value()?.validate()
    }

    /// Parse the public key carried by the stored key value.
    pub fn public_key(&self) -> Result<PublicKey> {
        self.value()?.public_key()
    }
}

impl From<Box<dyn KeyValue>> for CryptoKey {
    fn from(value: Box<dyn KeyValue>) -> CryptoKey {
        Self { value: Some(value) }
    }
}

impl PartialEq for CryptoKey {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => a.key_type() == b.key_type() && a.to_text() == b.to_text(),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for CryptoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.write_str(&value.to_text()),
            None => Ok(()),
        }
    }
}

#[cfg(all(feature = "json", feature = "std"))]
impl<'de> Deserialize<'de> for CryptoKey {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let envelope = TextEnvelope::deserialize(deserializer)?;
        Self::from_text(&crate::registry(), &envelope).map_err(de::Error::custom)
    }
}

#[cfg(feature = "json")]
impl Serialize for CryptoKey {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.to_text_envelope()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}
