//! PEM-encoded SubjectPublicKeyInfo keys.

use crate::{Error, KeyType, KeyValue, PublicKey, Registry, Result};
use alloc::{boxed::Box, string::String};
use encoding::{RawInput, pem};

/// Public key carried as a PEM-encoded SubjectPublicKeyInfo document with
/// the `PUBLIC KEY` type label.
///
/// The document is stored as given and only decoded on validation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PkixBase64Key {
    key_type: KeyType,
    pem: String,
}

impl PkixBase64Key {
    /// Default type name.
    pub const TYPE_NAME: &'static str = "pkix-base64-key";

    /// Default numeric tag.
    pub const DEFAULT_TAG: u64 = 554;

    /// Register under [`PkixBase64Key::TYPE_NAME`] and [`PkixBase64Key::DEFAULT_TAG`].
    pub fn register(registry: &mut Registry) -> Result<()> {
        registry.register(Self::TYPE_NAME, Self::DEFAULT_TAG, Self::construct)
    }

    /// [`Constructor`][`crate::Constructor`] for this representation.
    ///
    /// Only text payloads (or no payload) are accepted.
    pub fn construct(key_type: &KeyType, input: RawInput) -> Result<Box<dyn KeyValue>> {
        Ok(Box::new(Self::new(key_type.clone(), input)?))
    }

    /// Create a new key from a raw payload.
    pub fn new(key_type: KeyType, input: RawInput) -> Result<Self> {
        let pem = match input {
            RawInput::Text(text) => text,
            RawInput::Empty => String::new(),
            other => {
                return Err(Error::UnsupportedInputShape {
                    shape: other.shape(),
                });
            }
        };

        Ok(Self { key_type, pem })
    }

    /// Encode a DER SubjectPublicKeyInfo as a new PEM key.
    pub fn from_der(key_type: KeyType, der: &[u8]) -> Result<Self> {
        let pem = pem::encode_labeled(pem::PUBLIC_KEY_LABEL, pem::LineEnding::LF, der)?;
        Ok(Self { key_type, pem })
    }

    /// Borrow the PEM document.
    pub fn as_pem(&self) -> &str {
        &self.pem
    }
}

impl KeyValue for PkixBase64Key {
    fn key_type(&self) -> &KeyType {
        &self.key_type
    }

    fn to_text(&self) -> String {
        self.pem.clone()
    }

    fn public_key(&self) -> Result<PublicKey> {
        if self.pem.is_empty() {
            return Err(Error::KeyNotSet);
        }

        let der = pem::decode_labeled(&self.pem, pem::PUBLIC_KEY_LABEL)
            .map_err(|err| Error::MalformedKey(Box::new(err.into())))?;

        super::parse_spki(&der)
    }
}
