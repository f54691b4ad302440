//! Key representations shipped with this crate.
//!
//! Each representation registers itself through the same public
//! [`Registry::register`] call third-party representations use.

mod bytes;
#[cfg(feature = "pem")]
mod pkix_base64;
mod pkix_der;

pub use self::{bytes::RawBytesKey, pkix_der::PkixDerKey};

#[cfg(feature = "pem")]
pub use self::pkix_base64::PkixBase64Key;

use crate::{Error, PublicKey, Registry, Result};
use alloc::boxed::Box;

/// Register the builtin key types.
pub(crate) fn register_builtins(registry: &mut Registry) -> Result<()> {
    RawBytesKey::register(registry)?;

    #[cfg(feature = "pem")]
    PkixBase64Key::register(registry)?;

    Ok(())
}

/// Parse a DER-encoded SubjectPublicKeyInfo held by a key representation.
fn parse_spki(der: &[u8]) -> Result<PublicKey> {
    if der.is_empty() {
        return Err(Error::KeyNotSet);
    }

    PublicKey::from_spki_der(der).map_err(|cause| Error::MalformedKey(Box::new(cause)))
}
