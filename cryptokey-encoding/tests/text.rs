//! Tests for the JSON text envelope.

#![cfg(feature = "json")]

use cryptokey_encoding::{Error, RawInput, TextEnvelope};

#[test]
fn decode_envelope() {
    let envelope = TextEnvelope::from_json(r#"{"type":"bytes","value":"AQID"}"#).unwrap();
    assert_eq!(envelope.name(), Some("bytes"));
    assert_eq!(envelope.raw_value().unwrap(), RawInput::Text("AQID".into()));
}

#[test]
fn unknown_fields_are_ignored() {
    let envelope =
        TextEnvelope::from_json(r#"{"type":"bytes","value":"AQID","comment":"ignored"}"#)
            .unwrap();
    assert_eq!(envelope, TextEnvelope::new("bytes", "AQID"));
    assert_eq!(envelope.to_json().unwrap(), r#"{"type":"bytes","value":"AQID"}"#);
}

#[test]
fn absent_or_null_value_is_empty() {
    let absent = TextEnvelope::from_json(r#"{"type":"bytes"}"#).unwrap();
    assert_eq!(absent.raw_value().unwrap(), RawInput::Empty);

    let null = TextEnvelope::from_json(r#"{"type":"bytes","value":null}"#).unwrap();
    assert_eq!(null.raw_value().unwrap(), RawInput::Empty);
}

#[test]
fn absent_type_is_none() {
    let envelope = TextEnvelope::from_json(r#"{"value":"AQID"}"#).unwrap();
    assert_eq!(envelope.type_name, None);
    assert_eq!(envelope.name(), None);
}

#[test]
fn non_string_type_is_none() {
    for json in [
        r#"{"type":5,"value":"AQID"}"#,
        r#"{"type":null,"value":"AQID"}"#,
        r#"{"type":["bytes"],"value":"AQID"}"#,
        r#"{"type":"","value":"AQID"}"#,
    ] {
        assert_eq!(TextEnvelope::from_json(json).unwrap().name(), None);
    }
}

#[test]
fn reject_non_string_value() {
    for (json, shape) in [
        (r#"{"type":"bytes","value":42}"#, "number"),
        (r#"{"type":"bytes","value":[1,2]}"#, "array"),
        (r#"{"type":"bytes","value":{"a":1}}"#, "object"),
        (r#"{"type":"bytes","value":true}"#, "boolean"),
    ] {
        let envelope = TextEnvelope::from_json(json).unwrap();
        assert_eq!(envelope.raw_value(), Err(Error::UnexpectedShape { shape }));
    }
}

#[test]
fn reject_malformed_json() {
    let err = TextEnvelope::from_json(r#"{"type":"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
