#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::arithmetic_side_effects,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod base64;
#[cfg(feature = "cbor")]
pub mod cbor;
#[cfg(feature = "pem")]
pub mod pem;
#[cfg(feature = "json")]
pub mod text;

mod error;
mod label;
mod raw;

pub use crate::{
    error::{Error, Result},
    label::{Label, LabelError, MAX_LABEL_SIZE},
    raw::RawInput,
};

#[cfg(feature = "cbor")]
pub use crate::cbor::TaggedValue;

#[cfg(feature = "json")]
pub use crate::text::TextEnvelope;
