//! DER-encoded SubjectPublicKeyInfo keys.

use crate::{KeyType, KeyValue, PublicKey, Registry, Result};
use alloc::{boxed::Box, string::String, vec::Vec};
use encoding::{
    RawInput,
    base64::{Base64, Encoding},
};

/// Public key carried as a DER-encoded SubjectPublicKeyInfo structure.
///
/// Text encodings carry the DER bytes as standard (padded) Base64; binary
/// encodings carry them as-is.
///
/// Construction never inspects the bytes: an empty or malformed key is
/// accepted and reported by [`KeyValue::validate`] /
/// [`KeyValue::public_key`] instead.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PkixDerKey {
    key_type: KeyType,
    der: Vec<u8>,
}

impl PkixDerKey {
    /// Default type name.
    pub const TYPE_NAME: &'static str = "pkix-der-key";

    /// Default numeric tag.
    pub const DEFAULT_TAG: u64 = 9999;

    /// Register under [`PkixDerKey::TYPE_NAME`] and [`PkixDerKey::DEFAULT_TAG`].
    pub fn register(registry: &mut Registry) -> Result<()> {
        Self::register_as(registry, Self::TYPE_NAME, Self::DEFAULT_TAG)
    }

    /// Register under a caller-chosen name and tag.
    pub fn register_as(registry: &mut Registry, name: &str, tag: u64) -> Result<()> {
        registry.register(name, tag, Self::construct)
    }

    /// [`Constructor`][`crate::Constructor`] for this representation.
    ///
    /// Accepts raw bytes, Base64 text, or no value at all (an empty key).
    pub fn construct(key_type: &KeyType, input: RawInput) -> Result<Box<dyn KeyValue>> {
        Ok(Box::new(Self::new(key_type.clone(), input)?))
    }

    /// Create a new key from a raw payload.
    pub fn new(key_type: KeyType, input: RawInput) -> Result<Self> {
        Ok(Self {
            key_type,
            der: input.into_bytes_base64()?,
        })
    }

    /// Borrow the DER-encoded key.
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

impl KeyValue for PkixDerKey {
    fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    fn to_text(&self) -> String {
        Base64::encode_string(&self.der)
    }

    fn to_raw(&self) -> RawInput {
        RawInput::Bytes(self.der.clone())
    }

    fn public_key(&self) -> Result<PublicKey> {
        super::parse_spki(&self.der)
    }
}

impl AsRef<[u8]> for PkixDerKey {
    fn as_ref(&self) -> &[u8] {
        self.as_der()
    }
}
