//! Property-based tests for the recognizers and the complex codec.

use glossy_atoms::{
    decode, encode, parse_bool, parse_complex, parse_int, parse_numeric, parse_raw_data,
    parse_str, Complex, Structured, Value,
};
use num_bigint::BigInt;
use proptest::prelude::*;

/// Flips the case of each letter according to `mask`.
fn mixed_case(literal: &str, mask: &[bool]) -> String {
    literal
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_integer_text_roundtrip(n in any::<i64>()) {
        prop_assert_eq!(parse_int(&n.to_string()).unwrap(), Value::Integer(n));
        prop_assert_eq!(parse_numeric(&n.to_string()).unwrap(), Value::Integer(n));
    }

    #[test]
    fn prop_large_integers_are_exact(digits in "[1-9][0-9]{19,40}") {
        let expected: BigInt = digits.parse().unwrap();
        prop_assert_eq!(parse_int(&digits).unwrap(), Value::BigInt(expected));
    }

    #[test]
    fn prop_truthy_any_case(
        literal in prop::sample::select(vec!["TRUE", "ON", "YES", "Y"]),
        mask in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        prop_assert!(parse_bool(&mixed_case(literal, &mask)).unwrap());
    }

    #[test]
    fn prop_falsey_any_case(
        literal in prop::sample::select(vec!["FALSE", "OFF", "NO", "N"]),
        mask in prop::collection::vec(any::<bool>(), 1..6),
    ) {
        prop_assert!(!parse_bool(&mixed_case(literal, &mask)).unwrap());
    }

    #[test]
    fn prop_complex_codec_roundtrip(re in -1e300f64..1e300, im in -1e300f64..1e300) {
        let z = Complex::new(re, im);
        prop_assert_eq!(decode(encode(&z).unwrap()).unwrap(), Structured::Complex(z));
    }

    #[test]
    fn prop_complex_literal(re in -1000i32..1000, im in -1000i32..1000) {
        let text = format!("{} {}*j", re, im);
        prop_assert_eq!(
            parse_complex(&text).unwrap(),
            Complex::new(f64::from(re), f64::from(im))
        );
    }

    #[test]
    fn prop_quoted_text_roundtrip(s in "[a-zA-Z0-9 ,.;:=]{0,30}") {
        prop_assert_eq!(parse_str(&format!("\"{}\"", s)).unwrap(), s);
    }

    #[test]
    fn prop_bare_words(s in "[a-zA-Z0-9]{1,30}") {
        prop_assert_eq!(parse_str(&s).unwrap(), s);
    }

    #[test]
    fn prop_raw_data_body_is_exact(
        name in "[a-zA-Z_][a-zA-Z0-9_]{0,10}",
        body in "\n[a-zA-Z0-9 .\n-]{0,60}",
    ) {
        let block = parse_raw_data(&format!("${}{}$end", name, body)).unwrap();
        prop_assert_eq!(block.name, name);
        prop_assert_eq!(block.body, body);
    }
}
