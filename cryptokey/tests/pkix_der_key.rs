//! DER SubjectPublicKeyInfo key tests.

use cryptokey::{
    Algorithm, Discriminator, EcdsaCurve, Error, KeyType, KeyValue, ObjectIdentifier, PkixDerKey,
    PublicKey, RawInput, Registry,
};
use hex_literal::hex;

/// ECDSA/P-256 SubjectPublicKeyInfo, Base64-encoded.
const ECDSA_P256_SPKI: &str = include_str!("examples/ecdsa_p256.b64");

/// ECDSA/P-384 SubjectPublicKeyInfo, Base64-encoded.
const ECDSA_P384_SPKI: &str = include_str!("examples/ecdsa_p384.b64");

/// Ed25519 SubjectPublicKeyInfo, Base64-encoded.
const ED25519_SPKI: &str = include_str!("examples/ed25519.b64");

/// RSA (2048-bit) SubjectPublicKeyInfo, Base64-encoded.
const RSA_2048_SPKI: &str = include_str!("examples/rsa_2048.b64");

/// X25519 SubjectPublicKeyInfo, Base64-encoded.
const X25519_SPKI: &str = include_str!("examples/x25519.b64");

/// SEC1 point of [`ECDSA_P256_SPKI`].
const ECDSA_P256_POINT: [u8; 65] = hex!(
    "045b506fa85fbfaf2f0159aed910c535c58607110f0194b4f83051ce68ef8809"
    "3b48beb11e129affb1f4c03fae87da108775be471172ad44aa1de902dc38b3c0"
    "d5"
);

/// Raw key of [`ED25519_SPKI`].
const ED25519_KEY: [u8; 32] =
    hex!("7e4b810ce8e4abbd3ac4be95522ffbf648d78a8ccb38a507b56034ea0df94a33");

/// Raw key of [`X25519_SPKI`].
const X25519_KEY: [u8; 32] =
    hex!("18a921fc4a5f616e005c69e9b7012ef967aebe5c7dd4f9e370f8b774aa20e676");

fn key_type() -> KeyType {
    KeyType::new(PkixDerKey::TYPE_NAME, PkixDerKey::DEFAULT_TAG).unwrap()
}

fn key(input: impl Into<RawInput>) -> PkixDerKey {
    PkixDerKey::new(key_type(), input.into()).unwrap()
}

#[test]
fn empty_key_is_not_set() {
    for input in [RawInput::Empty, RawInput::Bytes(vec![]), RawInput::Text("".into())] {
        let key = key(input);
        assert!(key.as_der().is_empty());
        assert_eq!(key.to_text(), "");
        assert_eq!(key.validate(), Err(Error::KeyNotSet));
        assert_eq!(key.public_key(), Err(Error::KeyNotSet));
    }
}

#[test]
fn malformed_key() {
    let key = key(&b"not a key"[..]);
    assert!(matches!(key.validate(), Err(Error::MalformedKey(_))));
    assert!(matches!(
        key.public_key().unwrap_err().root_cause(),
        Error::Asn1(_)
    ));
}

#[test]
fn invalid_base64_is_rejected() {
    let err = PkixDerKey::new(key_type(), RawInput::Text("not base64!".into())).unwrap_err();
    assert!(matches!(err, Error::Encoding(_)));
}

#[test]
fn decode_ecdsa_p256() {
    let key = key(ECDSA_P256_SPKI);
    assert_eq!(key.as_der().len(), 91);
    assert_eq!(key.to_text(), ECDSA_P256_SPKI);
    assert_eq!(key.to_raw(), RawInput::Bytes(key.as_der().to_vec()));
    key.validate().unwrap();

    let public_key = key.public_key().unwrap();
    assert_eq!(
        public_key.algorithm(),
        Algorithm::Ecdsa {
            curve: EcdsaCurve::NistP256
        }
    );

    assert_eq!(public_key.algorithm().to_string(), "ecdsa (P-256)");

    let ecdsa = public_key.ecdsa().unwrap();
    assert_eq!(ecdsa.curve(), EcdsaCurve::NistP256);
    assert_eq!(ecdsa.as_sec1_bytes(), &ECDSA_P256_POINT);
}

#[cfg(feature = "p256")]
#[test]
fn convert_ecdsa_p256_to_verifying_key() {
    let public_key = key(ECDSA_P256_SPKI).public_key().unwrap();
    let verifying_key = p256::ecdsa::VerifyingKey::try_from(&public_key).unwrap();
    assert_eq!(
        verifying_key.to_encoded_point(false).as_bytes(),
        &ECDSA_P256_POINT
    );

    let ed25519 = key(ED25519_SPKI).public_key().unwrap();
    assert!(p256::ecdsa::VerifyingKey::try_from(&ed25519).is_err());
}

#[cfg(feature = "p256")]
#[test]
fn reject_point_off_curve() {
    let mut der = key(ECDSA_P256_SPKI).as_der().to_vec();
    let last = der.len() - 1;
    der[last] ^= 1;

    let key = key(der);
    assert!(matches!(key.validate(), Err(Error::MalformedKey(_))));
}

#[test]
fn decode_ecdsa_p384() {
    let public_key = key(ECDSA_P384_SPKI).public_key().unwrap();
    assert_eq!(
        public_key.algorithm(),
        Algorithm::Ecdsa {
            curve: EcdsaCurve::NistP384
        }
    );
    assert_eq!(public_key.ecdsa().unwrap().as_sec1_bytes().len(), 97);
}

#[test]
fn decode_ed25519() {
    let public_key = key(ED25519_SPKI).public_key().unwrap();
    assert_eq!(public_key.algorithm(), Algorithm::Ed25519);
    assert_eq!(public_key.ed25519().unwrap().0, ED25519_KEY);
}

#[test]
fn decode_rsa() {
    let public_key = key(RSA_2048_SPKI).public_key().unwrap();
    assert_eq!(public_key.algorithm(), Algorithm::Rsa);

    let rsa = public_key.rsa().unwrap();
    assert_eq!(rsa.e(), &hex!("010001"));
    assert_eq!(rsa.n().len(), 256);
    assert_eq!(rsa.n()[0], 0xef);
    assert_eq!(rsa.key_size(), 2048);
}

#[cfg(feature = "rsa")]
#[test]
fn convert_rsa_to_rsa_crate() {
    use rsa::traits::PublicKeyParts;

    let public_key = key(RSA_2048_SPKI).public_key().unwrap();
    let rsa_key = rsa::RsaPublicKey::try_from(&public_key).unwrap();
    assert_eq!(rsa_key.size(), 256);
}

#[test]
fn reject_rsa_without_null_parameters() {
    let der = key(RSA_2048_SPKI).as_der().to_vec();
    assert_eq!(der[..6], hex!("30820122 300d"));
    assert_eq!(der[17..19], hex!("0500"));

    let mut stripped = hex!("30820120 300b").to_vec();
    stripped.extend_from_slice(&der[6..17]);
    stripped.extend_from_slice(&der[19..]);

    assert_eq!(
        key(stripped).validate(),
        Err(Error::MalformedKey(Box::new(
            Error::AlgorithmParametersInvalid {
                oid: Algorithm::Rsa.oid()
            }
        )))
    );
}

#[test]
fn reject_ed25519_with_parameters() {
    let der = key(ED25519_SPKI).as_der().to_vec();
    assert_eq!(der[..4], hex!("302a 3005"));

    let mut with_null = hex!("302c 3007").to_vec();
    with_null.extend_from_slice(&der[4..9]);
    with_null.extend_from_slice(&hex!("0500"));
    with_null.extend_from_slice(&der[9..]);

    assert_eq!(
        key(with_null).validate(),
        Err(Error::MalformedKey(Box::new(
            Error::AlgorithmParametersInvalid {
                oid: Algorithm::Ed25519.oid()
            }
        )))
    );
}

#[test]
fn decode_x25519() {
    let key = key(X25519_SPKI);
    key.validate().unwrap();

    let public_key = key.public_key().unwrap();
    assert_eq!(public_key.algorithm(), Algorithm::X25519);
    assert_eq!(public_key.algorithm().to_string(), "x25519");
    assert_eq!(public_key.x25519().unwrap().0, X25519_KEY);

    #[cfg(feature = "ed25519")]
    assert!(ed25519_dalek::VerifyingKey::try_from(&public_key).is_err());
}

#[test]
fn reject_unsupported_algorithm() {
    // id-Ed448 with a 57-byte key
    let mut der = hex!("3043 3005 0603 2b6571 033a 00").to_vec();
    der.extend_from_slice(&[0x42; 57]);

    assert_eq!(
        key(der).validate(),
        Err(Error::MalformedKey(Box::new(Error::AlgorithmUnsupported {
            oid: ObjectIdentifier::new_unwrap("1.3.101.113")
        })))
    );
}

#[test]
fn public_key_from_der() {
    let der = key(ED25519_SPKI).as_der().to_vec();
    assert_eq!(
        PublicKey::try_from(der.as_slice()).unwrap(),
        key(ED25519_SPKI).public_key().unwrap()
    );
}

#[test]
fn register_under_custom_identifier() {
    let mut registry = Registry::new();
    PkixDerKey::register_as(&mut registry, "spki", 42).unwrap();

    let value = registry
        .construct(&Discriminator::Tag(42), RawInput::from(ED25519_SPKI))
        .unwrap();
    assert_eq!(value.key_type().as_str(), "spki");
    assert_eq!(value.key_type().tag(), 42);
    assert!(registry.key_type_by_name(PkixDerKey::TYPE_NAME).is_none());
}
