//! Base64 support.
//!
//! Key payloads carried in text encodings use the standard alphabet with
//! padding. All encoding and decoding is constant-time.

pub use base64ct::{Base64, Base64Unpadded, Encoding, Error};
