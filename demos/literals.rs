//! Recognizing the literal atoms of an input file.
//!
//! Run with: cargo run --example literals

use glossy_atoms::{Grammar, Recognizer, StringRecognizer, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let grammar = Grammar::default();

    let inputs = [
        "yes",
        "Off",
        "42",
        "123456789012345678901234567890",
        "1.5e-3",
        "12.",
        "3*j",
        "1 -2*J",
        "\"def2-TZVP\"",
        "B3LYP",
        "$geometry\nO 0.000 0.000 0.000\nH 0.000 0.757 0.587\n$end",
    ];

    for input in inputs {
        let value = grammar.parse_all(input)?;
        let kind = match &value {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::BigInt(_) => "big integer",
            Value::Float(_) => "float",
            Value::Complex(_) => "complex",
            Value::Text(_) => "string",
            Value::RawData(_) => "raw data",
        };
        println!("{:<12} {:?} -> {}", kind, input, value);
    }

    // A `key value` entry built from the atoms
    let entry = StringRecognizer::new().then(&grammar);
    let (key, value) = entry.parse_all("multiplicity 3")?;
    println!("\n{} = {}", key, value);

    // Errors carry a position
    match grammar.parse_all("$basis\nsto-3g\n") {
        Ok(_) => unreachable!(),
        Err(e) => println!("\n✓ Expected error: {}", e),
    }

    Ok(())
}
