//! Capability set shared by every key representation.

use crate::{KeyType, PublicKey, Result};
use alloc::string::String;
use core::fmt;
use encoding::RawInput;

/// A decoded key representation.
///
/// Values are produced by the [`Constructor`][`crate::Constructor`] a
/// representation registered, and are immutable afterwards. A
/// [`CryptoKey`][`crate::CryptoKey`] container holds exactly one of them
/// behind a trait object and delegates to it for everything besides
/// discriminator dispatch.
///
/// Implementors only need to provide [`KeyValue::key_type`],
/// [`KeyValue::to_text`] and [`KeyValue::public_key`].
pub trait KeyValue: fmt::Debug + Send + Sync {
    /// Type identifier this value was constructed under.
    ///
    /// The container emits this identifier's name (text encodings) or tag
    /// (binary encodings) as the discriminator.
    fn key_type(&self) -> &KeyType;

    /// Serialize the value for text encodings.
    ///
    /// Must be total: a value which was successfully constructed can always
    /// be stringified, even if it does not validate.
    fn to_text(&self) -> String;

    /// Serialize the value for binary encodings.
    ///
    /// Defaults to the text form. Representations backed by raw bytes should
    /// return [`RawInput::Bytes`] so binary encodings skip the text layer.
    fn to_raw(&self) -> RawInput {
        RawInput::Text(self.to_text())
    }

    /// Check the value is well-formed.
    ///
    /// Defaults to checking that [`KeyValue::public_key`] succeeds.
    fn validate(&self) -> Result<()> {
        self.public_key().map(drop)
    }

    /// Parse the public key carried by this value.
    fn public_key(&self) -> Result<PublicKey>;
}
