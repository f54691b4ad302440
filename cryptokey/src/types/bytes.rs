//! Opaque key bytes.

use crate::{Error, KeyType, KeyValue, PublicKey, Registry, Result};
use alloc::{boxed::Box, string::String, vec::Vec};
use encoding::{
    RawInput,
    base64::{Base64, Encoding},
};

/// Opaque key material with no further structure, e.g. a symmetric key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawBytesKey {
    key_type: KeyType,
    bytes: Vec<u8>,
}

impl RawBytesKey {
    /// Default type name.
    pub const TYPE_NAME: &'static str = "bytes";

    /// Default numeric tag.
    pub const DEFAULT_TAG: u64 = 560;

    /// Register under [`RawBytesKey::TYPE_NAME`] and [`RawBytesKey::DEFAULT_TAG`].
    pub fn register(registry: &mut Registry) -> Result<()> {
        registry.register(Self::TYPE_NAME, Self::DEFAULT_TAG, Self::construct)
    }

    /// [`Constructor`][`crate::Constructor`] for this representation.
    pub fn construct(key_type: &KeyType, input: RawInput) -> Result<Box<dyn KeyValue>> {
        Ok(Box::new(Self {
            key_type: key_type.clone(),
            bytes: input.into_bytes_base64()?,
        }))
    }

    /// Borrow the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl KeyValue for RawBytesKey {
    fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    fn to_text(&self) -> String {
        Base64::encode_string(&self.bytes)
    }

    fn to_raw(&self) -> RawInput {
        RawInput::Bytes(self.bytes.clone())
    }

    fn validate(&self) -> Result<()> {
        if self.bytes.is_empty() {
            Err(Error::KeyNotSet)
        } else {
            Ok(())
        }
    }

    fn public_key(&self) -> Result<PublicKey> {
        Err(Error::PublicKeyUnavailable)
    }
}

impl AsRef<[u8]> for RawBytesKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
