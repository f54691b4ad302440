#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::alloc_instead_of_core,
    clippy::arithmetic_side_effects,
    clippy::mod_module_files,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! Register a key representation, then decode a key through the container:
//!
#![cfg_attr(all(feature = "json", feature = "p256"), doc = " ```")]
#![cfg_attr(not(all(feature = "json", feature = "p256")), doc = " ```ignore")]
//! # fn main() -> cryptokey::Result<()> {
//! use cryptokey::{CryptoKey, PkixDerKey, Registry};
//! use cryptokey::encoding::TextEnvelope;
//!
//! let mut registry = Registry::new();
//! PkixDerKey::register(&mut registry)?;
//!
//! let envelope = TextEnvelope::from_json(r#"{
//!     "type": "pkix-der-key",
//!     "value": "MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEW1BvqF+/ry8BWa7ZEMU1xYYHEQ8BlLT4MFHOaO+ICTtIvrEeEpr/sfTAP66H2hCHdb5HEXKtRKod6QLcOLPA1Q=="
//! }"#)?;
//!
//! let key = CryptoKey::from_text(&registry, &envelope)?;
//! key.validate()?;
//!
//! let verifying_key = p256::ecdsa::VerifyingKey::try_from(&key.public_key()?)?;
//! # let _ = verifying_key;
//! # Ok(())
//! # }
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod public;
pub mod registry;
pub mod types;

mod algorithm;
mod error;
mod key;
mod key_type;
mod key_value;

pub use crate::{
    algorithm::{Algorithm, EcdsaCurve},
    error::{Error, Result},
    key::CryptoKey,
    key_type::{Discriminator, KeyType, TypeName},
    key_value::KeyValue,
    public::PublicKey,
    registry::{Constructor, Registry},
    types::{PkixDerKey, RawBytesKey},
};
pub use encoding::{self, RawInput};
pub use spki::{self, ObjectIdentifier};

#[cfg(feature = "std")]
pub use crate::registry::global::{register, registry};

#[cfg(feature = "pem")]
pub use crate::types::PkixBase64Key;
