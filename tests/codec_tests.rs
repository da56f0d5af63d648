//! Tests for the `{"__complex__": [re, im]}` JSON convention.

use glossy_atoms::codec::decode_object;
use glossy_atoms::{
    decode, encode, from_json_str, parse_literal, to_json_string, Complex, Error, RawData,
    Structured, StructuredMap, Value,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Excitation {
    label: String,
    energy: f64,
    amplitude: Complex,
    components: Vec<Complex>,
}

fn excitation() -> Excitation {
    Excitation {
        label: "S1".to_string(),
        energy: 3.25,
        amplitude: Complex::new(0.6, -0.8),
        components: vec![Complex::imaginary(1.0), Complex::new(2.0, 0.0)],
    }
}

#[test]
fn test_typed_struct_encodes_tagged_fields() {
    let json = encode(&excitation()).unwrap();
    assert_eq!(
        json,
        json!({
            "label": "S1",
            "energy": 3.25,
            "amplitude": {"__complex__": [0.6, -0.8]},
            "components": [
                {"__complex__": [0.0, 1.0]},
                {"__complex__": [2.0, 0.0]}
            ]
        })
    );
}

#[test]
fn test_typed_struct_roundtrip() {
    let text = to_json_string(&excitation()).unwrap();
    let back: Excitation = serde_json::from_str(&text).unwrap();
    assert_eq!(back, excitation());
}

#[test]
fn test_struct_decodes_to_structured_tree() {
    let decoded = decode(encode(&excitation()).unwrap()).unwrap();
    let obj = decoded.as_object().unwrap();
    assert_eq!(obj.get("label").and_then(Structured::as_str), Some("S1"));
    assert_eq!(
        obj.get("amplitude").and_then(Structured::as_complex),
        Some(Complex::new(0.6, -0.8))
    );
    let components = obj.get("components").and_then(Structured::as_array).unwrap();
    assert!(components.iter().all(Structured::is_complex));
}

#[test]
fn test_object_order_is_preserved() {
    let decoded = from_json_str(r#"{"z": 1, "a": {"__complex__": [1, 1]}, "m": 2}"#).unwrap();
    let keys: Vec<&String> = decoded.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn test_plain_json_passes_through() {
    let original = json!({
        "method": "B3LYP",
        "charge": 0,
        "thresholds": [1e-6, 1e-8],
        "restricted": true,
        "guess": null
    });
    let decoded = decode(original.clone()).unwrap();
    assert_eq!(serde_json::to_value(&decoded).unwrap(), original);
}

#[test]
fn test_object_hook() {
    let mut obj = serde_json::Map::new();
    obj.insert("__complex__".to_string(), json!([1.5, 2.5]));
    assert_eq!(
        decode_object(obj).unwrap(),
        Structured::Complex(Complex::new(1.5, 2.5))
    );

    let mut plain = serde_json::Map::new();
    plain.insert("re".to_string(), json!(1.5));
    let mut expected = StructuredMap::new();
    expected.insert("re".to_string(), Structured::from(1.5));
    assert_eq!(decode_object(plain).unwrap(), Structured::Object(expected));
}

#[test]
fn test_malformed_payload_is_reported() {
    match from_json_str(r#"{"data": {"__complex__": [1, 2, 3]}}"#) {
        Err(Error::MalformedComplex(msg)) => assert!(msg.contains('3')),
        other => panic!("Expected MalformedComplex, got {:?}", other),
    }
}

#[test]
fn test_tag_collision_takes_precedence() {
    // An unrelated object that happens to use the reserved key
    let decoded = from_json_str(r#"{"__complex__": [0, 0], "owner": "someone"}"#).unwrap();
    assert_eq!(decoded, Structured::Complex(Complex::default()));
}

#[test]
fn test_parsed_literals_encode() {
    let values: Vec<Value> = ["yes", "7", "2.5", "1 -1*j", "'text'", "$blk 1 2 $end"]
        .iter()
        .map(|s| parse_literal(s).unwrap())
        .collect();
    assert_eq!(
        encode(&values).unwrap(),
        json!([
            true,
            7,
            2.5,
            {"__complex__": [1.0, -1.0]},
            "text",
            ["blk", " 1 2 "]
        ])
    );
}

#[test]
fn test_bigint_encodes_as_decimal_string() {
    let big = parse_literal("123456789012345678901234567890").unwrap();
    assert_eq!(encode(&big).unwrap(), json!("123456789012345678901234567890"));
}

#[test]
fn test_raw_data_encodes_as_pair() {
    let data = RawData::new("coords", "\nH 0 0 0\n");
    assert_eq!(
        to_json_string(&data).unwrap(),
        r#"["coords","\nH 0 0 0\n"]"#
    );
}

#[test]
fn test_complex_deserializes_from_pair() {
    let z: Complex = serde_json::from_str("[1.0, -2.0]").unwrap();
    assert_eq!(z, Complex::new(1.0, -2.0));
    assert!(serde_json::from_str::<Complex>(r#"{"re": 1.0}"#).is_err());
}
