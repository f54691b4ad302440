//! PEM encoding support.

use crate::{Error, Result};
use alloc::{string::String, vec::Vec};

pub use pem_rfc7468::{Error as PemError, LineEnding, PemLabel};

/// Type label of a PEM-encoded SubjectPublicKeyInfo document.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Decode a PEM document, checking that its type label matches `label`.
pub fn decode_labeled(pem: &str, label: &'static str) -> Result<Vec<u8>> {
    let (actual, der) = pem_rfc7468::decode_vec(pem.as_bytes())?;

    if actual != label {
        return Err(PemError::UnexpectedTypeLabel { expected: label }.into());
    }

    Ok(der)
}

/// Encode DER bytes as a PEM document with the given type label.
pub fn encode_labeled(label: &str, line_ending: LineEnding, der: &[u8]) -> Result<String> {
    pem_rfc7468::encode_string(label, line_ending, der).map_err(Error::from)
}
