//! Key type identifiers.

use crate::Result;
use alloc::string::String;
use core::{borrow::Borrow, fmt, str::FromStr};
use encoding::{Label, LabelError};

/// Human-readable name of a key representation, used as the discriminator in
/// text encodings, e.g. `pkix-der-key`.
///
/// Type names must be non-empty printable ASCII strings (no whitespace) no
/// longer than 64 characters.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct TypeName {
    /// The string identifier which corresponds to this key type.
    id: String,
}

impl TypeName {
    /// Create a new type name.
    pub fn new(id: impl Into<String>) -> core::result::Result<Self, LabelError> {
        let id = id.into();
        LabelError::check(&id)?;
        Ok(Self { id })
    }

    /// Get the string identifier which corresponds to this type name.
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Label for TypeName {
    type Error = LabelError;
}

impl FromStr for TypeName {
    type Err = LabelError;

    fn from_str(id: &str) -> core::result::Result<Self, LabelError> {
        Self::new(id)
    }
}

impl TryFrom<&str> for TypeName {
    type Error = LabelError;

    fn try_from(id: &str) -> core::result::Result<Self, LabelError> {
        Self::new(id)
    }
}

impl TryFrom<String> for TypeName {
    type Error = LabelError;

    fn try_from(id: String) -> core::result::Result<Self, LabelError> {
        Self::new(id)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Key type identifier: the pair of a [`TypeName`] (text discriminator) and
/// a numeric tag (binary discriminator).
///
/// Within a [`Registry`][`crate::Registry`] both halves are unique.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct KeyType {
    name: TypeName,
    tag: u64,
}

impl KeyType {
    /// Create a new key type identifier, validating `name`.
    pub fn new(name: &str, tag: u64) -> Result<Self> {
        Ok(Self::from_parts(name.parse()?, tag))
    }

    /// Create a new key type identifier from an already-validated name.
    pub fn from_parts(name: TypeName, tag: u64) -> Self {
        Self { name, tag }
    }

    /// Get the type name.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Get the numeric tag.
    pub fn tag(&self) -> u64 {
        self.tag
    }

    /// Get the text discriminator of this key type.
    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (tag {})", self.name, self.tag)
    }
}

/// Discriminator read from (or about to be written to) an encoded key.
///
/// Text encodings discriminate by name, binary encodings by tag.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Discriminator {
    /// Text discriminator.
    Name(String),

    /// Binary discriminator.
    Tag(u64),
}

impl From<&KeyType> for Discriminator {
    fn from(key_type: &KeyType) -> Discriminator {
        Discriminator::Name(key_type.as_str().into())
    }
}

impl From<&str> for Discriminator {
    fn from(name: &str) -> Discriminator {
        Discriminator::Name(name.into())
    }
}

impl From<u64> for Discriminator {
    fn from(tag: u64) -> Discriminator {
        Discriminator::Tag(tag)
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminator::Name(name) => write!(f, "{name}"),
            Discriminator::Tag(tag) => write!(f, "tag {tag}"),
        }
    }
}
