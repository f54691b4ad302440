//! CBOR tagged item tests for the key container.

#![cfg(feature = "cbor")]

use cryptokey::{
    CryptoKey, Discriminator, Error, PkixDerKey, RawBytesKey, Registry,
    encoding::base64::{Base64, Encoding},
};
use hex_literal::hex;

/// ECDSA/P-256 SubjectPublicKeyInfo, Base64-encoded.
const ECDSA_P256_SPKI: &str = include_str!("examples/ecdsa_p256.b64");

fn registry() -> Registry {
    let mut registry = Registry::with_builtins();
    PkixDerKey::register(&mut registry).unwrap();
    registry
}

#[test]
fn encode_pkix_der_key() {
    let registry = registry();
    let key = CryptoKey::from_name(&registry, "pkix-der-key", ECDSA_P256_SPKI).unwrap();
    let cbor = key.to_cbor().unwrap();

    // tag(9999), byte string of 91 bytes
    assert_eq!(&cbor[..5], &hex!("d9270f585b"));
    assert_eq!(cbor.len(), 5 + 91);
    assert_eq!(cbor[5..], Base64::decode_vec(ECDSA_P256_SPKI).unwrap());
}

#[test]
fn round_trip() {
    let registry = registry();
    let key = CryptoKey::from_name(&registry, "pkix-der-key", ECDSA_P256_SPKI).unwrap();

    let decoded = CryptoKey::from_cbor(&registry, &key.to_cbor().unwrap()).unwrap();
    assert_eq!(decoded, key);
    assert_eq!(decoded.key_type().unwrap().tag(), 9999);
    decoded.validate().unwrap();
}

#[test]
fn decode_bytes_key() {
    let key = CryptoKey::from_cbor(&registry(), &hex!("d90230 43 010203")).unwrap();
    assert_eq!(key.key_type().unwrap().as_str(), RawBytesKey::TYPE_NAME);
    assert_eq!(key.to_string(), "AQID");
    key.validate().unwrap();
}

#[test]
fn decode_text_payload() {
    // tag(9999), text string "AQID"
    let key = CryptoKey::from_cbor(&registry(), &hex!("d9270f 64 41514944")).unwrap();
    assert_eq!(key.to_string(), "AQID");
    assert_eq!(key.to_cbor().unwrap(), hex!("d9270f 43 010203"));
}

#[test]
fn decode_null_payload() {
    let key = CryptoKey::from_cbor(&registry(), &hex!("d9270f f6")).unwrap();
    assert_eq!(key.validate(), Err(Error::KeyNotSet));
}

#[test]
fn reject_untagged_item() {
    assert_eq!(
        CryptoKey::from_cbor(&registry(), &hex!("43 010203")).unwrap_err(),
        Error::MissingType
    );
}

#[test]
fn reject_unknown_tag() {
    assert_eq!(
        CryptoKey::from_cbor(&registry(), &hex!("d90400 43 010203")).unwrap_err(),
        Error::UnknownType(Discriminator::Tag(1024))
    );
}

#[test]
fn reject_unknown_tag_before_payload_shape() {
    // tag(77777), unsigned integer 5
    assert_eq!(
        CryptoKey::from_cbor(&Registry::new(), &hex!("da00012fd1 05")).unwrap_err(),
        Error::UnknownType(Discriminator::Tag(77777))
    );
}

#[test]
fn round_trip_bignum_tags() {
    for tag in [2, 3] {
        let mut registry = Registry::new();
        PkixDerKey::register_as(&mut registry, "k", tag).unwrap();

        let key = CryptoKey::from_name(&registry, "k", vec![1u8, 2, 3]).unwrap();
        let cbor = key.to_cbor().unwrap();
        assert_eq!(cbor[1..], hex!("43 010203"));

        let decoded = CryptoKey::from_cbor(&registry, &cbor).unwrap();
        assert_eq!(decoded, key);
        assert_eq!(decoded.key_type().unwrap().tag(), tag);
    }
}

#[test]
fn reject_unsupported_payload_shape() {
    assert_eq!(
        CryptoKey::from_cbor(&registry(), &hex!("d9270f 01")).unwrap_err(),
        Error::UnsupportedInputShape { shape: "integer" }
    );
}

#[test]
fn reject_trailing_data() {
    assert!(matches!(
        CryptoKey::from_cbor(&registry(), &hex!("d9270f 43 010203 00")),
        Err(Error::Encoding(_))
    ));
}

#[test]
fn encode_empty_container() {
    assert_eq!(
        CryptoKey::default().to_cbor().unwrap_err(),
        Error::EmptyContainer
    );
}
