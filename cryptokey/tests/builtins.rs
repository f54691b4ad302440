//! Builtin key representation tests.

use cryptokey::{CryptoKey, Error, KeyType, KeyValue, RawBytesKey, RawInput, Registry};

#[cfg(feature = "pem")]
use cryptokey::PkixBase64Key;

/// Ed25519 SubjectPublicKeyInfo, PEM-encoded.
#[cfg(feature = "pem")]
const ED25519_PEM: &str = include_str!("examples/ed25519.pem");

/// Ed25519 SubjectPublicKeyInfo, Base64-encoded.
#[cfg(feature = "pem")]
const ED25519_SPKI: &str = include_str!("examples/ed25519.b64");

#[test]
fn bytes_key() {
    let registry = Registry::with_builtins();

    for input in [
        RawInput::Bytes(vec![1, 2, 3]),
        RawInput::Text("AQID".into()),
    ] {
        let key = CryptoKey::from_name(&registry, "bytes", input).unwrap();
        assert_eq!(key.to_string(), "AQID");
        key.validate().unwrap();
        assert_eq!(key.public_key().unwrap_err(), Error::PublicKeyUnavailable);
    }
}

#[test]
fn empty_bytes_key() {
    let key = CryptoKey::from_name(&Registry::with_builtins(), "bytes", RawInput::Empty).unwrap();
    assert_eq!(key.validate(), Err(Error::KeyNotSet));
}

#[test]
fn bytes_key_value() {
    let key_type = KeyType::new(RawBytesKey::TYPE_NAME, RawBytesKey::DEFAULT_TAG).unwrap();
    let value = RawBytesKey::construct(&key_type, RawInput::Bytes(vec![0xde, 0xad])).unwrap();
    assert_eq!(value.key_type(), &key_type);
    assert_eq!(value.to_raw(), RawInput::Bytes(vec![0xde, 0xad]));

    let key = CryptoKey::from(value);
    assert!(!key.is_empty());
}

#[cfg(feature = "pem")]
#[test]
fn pem_key() {
    let registry = Registry::with_builtins();
    let key = CryptoKey::from_name(&registry, "pkix-base64-key", ED25519_PEM).unwrap();

    assert_eq!(key.key_type().unwrap().tag(), 554);
    assert_eq!(key.to_string(), ED25519_PEM);
    key.validate().unwrap();
    assert!(key.public_key().unwrap().is_ed25519());
}

#[cfg(feature = "pem")]
#[test]
fn pem_key_from_der() {
    let key_type = KeyType::new(PkixBase64Key::TYPE_NAME, PkixBase64Key::DEFAULT_TAG).unwrap();
    let der = cryptokey::encoding::pem::decode_labeled(ED25519_PEM, "PUBLIC KEY").unwrap();
    let key = PkixBase64Key::from_der(key_type, &der).unwrap();
    assert_eq!(key.as_pem(), ED25519_PEM);
    assert_eq!(
        key.public_key().unwrap(),
        cryptokey::PublicKey::from_spki_der(&der).unwrap()
    );
}

#[cfg(feature = "pem")]
#[test]
fn pem_key_rejects_bytes() {
    let registry = Registry::with_builtins();
    let err = CryptoKey::from_name(&registry, "pkix-base64-key", vec![1u8, 2, 3]).unwrap_err();
    assert_eq!(err.root_cause(), &Error::UnsupportedInputShape { shape: "bytes" });
}

#[cfg(feature = "pem")]
#[test]
fn pem_key_validation() {
    let registry = Registry::with_builtins();

    let empty = CryptoKey::from_name(&registry, "pkix-base64-key", RawInput::Empty).unwrap();
    assert_eq!(empty.validate(), Err(Error::KeyNotSet));

    let wrong_label = ED25519_PEM.replace("PUBLIC KEY", "CERTIFICATE");
    let key = CryptoKey::from_name(&registry, "pkix-base64-key", wrong_label).unwrap();
    assert!(matches!(key.validate(), Err(Error::MalformedKey(_))));

    let key = CryptoKey::from_name(&registry, "pkix-base64-key", ED25519_SPKI).unwrap();
    assert!(matches!(key.validate(), Err(Error::MalformedKey(_))));
}
