//! Registry of key representations.
//!
//! A [`Registry`] maps a [`KeyType`] (name and numeric tag) to the
//! [`Constructor`] which turns a raw payload into a [`KeyValue`]. The
//! [`CryptoKey`][`crate::CryptoKey`] container consults it on decode, by
//! name for text encodings and by tag for binary encodings.
//!
//! Registries are populated once, by each representation's registration
//! code, and only read afterwards. Registering a name or tag which is
//! already present is rejected.

#[cfg(feature = "std")]
pub(crate) mod global;

use crate::{Discriminator, Error, KeyType, KeyValue, Result, TypeName, types};
use alloc::{boxed::Box, collections::BTreeMap};
use encoding::RawInput;

/// Builtin registration error message.
const BUILTINS_ERR_MSG: &str = "builtin key types have distinct names and tags";

/// Constructor of a key representation.
///
/// Receives the [`KeyType`] it was registered under along with the raw
/// payload, and owns validation of the payload's shape. Constructors are
/// plain functions and cannot capture registry state.
pub type Constructor = fn(&KeyType, RawInput) -> Result<Box<dyn KeyValue>>;

/// Registered key type.
#[derive(Clone, Debug)]
struct Entry {
    key_type: KeyType,
    constructor: Constructor,
}

/// Registry of key representations.
///
/// Both the name and the tag of every registered [`KeyType`] are unique.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    /// Entries indexed by type name.
    by_name: BTreeMap<TypeName, Entry>,

    /// Tag index into `by_name`.
    by_tag: BTreeMap<u64, TypeName>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry populated with the builtin key types:
    ///
    /// - `bytes` (tag 560): [`RawBytesKey`][`crate::RawBytesKey`]
    /// - `pkix-base64-key` (tag 554): [`PkixBase64Key`][`crate::PkixBase64Key`]
    ///   (requires the `pem` feature)
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        types::register_builtins(&mut registry).expect(BUILTINS_ERR_MSG);
        registry
    }

    /// Register a constructor under the given name and tag.
    ///
    /// Fails with [`Error::DuplicateType`] if either the name or the tag is
    /// already registered, in which case the registry is left unchanged.
    pub fn register(&mut self, name: &str, tag: u64, constructor: Constructor) -> Result<()> {
        self.register_key_type(KeyType::new(name, tag)?, constructor)
    }

    /// Register a constructor under the given [`KeyType`].
    pub fn register_key_type(&mut self, key_type: KeyType, constructor: Constructor) -> Result<()> {
        let collision = if self.contains_name(key_type.as_str()) {
            Some(Discriminator::from(&key_type))
        } else if self.contains_tag(key_type.tag()) {
            Some(Discriminator::Tag(key_type.tag()))
        } else {
            None
        };

        if let Some(discriminator) = collision {
            tracing::warn!(
                name = key_type.as_str(),
                tag = key_type.tag(),
                "rejected duplicate key type registration"
            );
            return Err(Error::DuplicateType(discriminator));
        }

        tracing::debug!(
            name = key_type.as_str(),
            tag = key_type.tag(),
            "registered key type"
        );

        self.by_tag.insert(key_type.tag(), key_type.name().clone());
        self.by_name.insert(
            key_type.name().clone(),
            Entry {
                key_type,
                constructor,
            },
        );

        Ok(())
    }

    /// Look up a constructor by type name.
    pub fn lookup_by_name(&self, name: &str) -> Option<Constructor> {
        self.by_name.get(name).map(|entry| entry.constructor)
    }

    /// Look up a constructor by numeric tag.
    pub fn lookup_by_tag(&self, tag: u64) -> Option<Constructor> {
        self.entry_by_tag(tag).map(|entry| entry.constructor)
    }

    /// Look up the registered [`KeyType`] by type name.
    pub fn key_type_by_name(&self, name: &str) -> Option<&KeyType> {
        self.by_name.get(name).map(|entry| &entry.key_type)
    }

    /// Look up the registered [`KeyType`] by numeric tag.
    pub fn key_type_by_tag(&self, tag: u64) -> Option<&KeyType> {
        self.entry_by_tag(tag).map(|entry| &entry.key_type)
    }

    /// Is the given type name registered?
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Is the given tag registered?
    pub fn contains_tag(&self, tag: u64) -> bool {
        self.by_tag.contains_key(&tag)
    }

    /// Number of registered key types.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterate over the registered key types in name order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyType> {
        self.by_name.values().map(|entry| &entry.key_type)
    }

    /// Resolve `discriminator` and invoke its constructor on `input`.
    ///
    /// Constructor failures are wrapped in [`Error::InvalidValue`].
    pub fn construct(
        &self,
        discriminator: &Discriminator,
        input: RawInput,
    ) -> Result<Box<dyn KeyValue>> {
        let entry = match discriminator {
            Discriminator::Name(name) => self.by_name.get(name.as_str()),
            Discriminator::Tag(tag) => self.entry_by_tag(*tag),
        }
        .ok_or_else(|| Error::UnknownType(discriminator.clone()))?;

        tracing::debug!(
            name = entry.key_type.as_str(),
            shape = input.shape(),
            "constructing key value"
        );

        (entry.constructor)(&entry.key_type, input).map_err(|cause| Error::InvalidValue {
            type_name: entry.key_type.name().clone(),
            cause: Box::new(cause),
        })
    }

    fn entry_by_tag(&self, tag: u64) -> Option<&Entry> {
        self.by_tag
            .get(&tag)
            .and_then(|name| self.by_name.get(name))
    }
}
