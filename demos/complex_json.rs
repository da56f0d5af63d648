//! Storing complex numbers in JSON.
//!
//! Run with: cargo run --example complex_json

use glossy_atoms::{from_json_str, parse_complex, to_json_string, Complex, Structured};
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Mode {
    index: u32,
    frequency: f64,
    eigenvalue: Complex,
}

fn main() -> Result<(), Box<dyn Error>> {
    let modes = vec![
        Mode {
            index: 1,
            frequency: 1595.3,
            eigenvalue: parse_complex("0.12 -0.03*j")?,
        },
        Mode {
            index: 2,
            frequency: 3657.1,
            eigenvalue: Complex::imaginary(0.5),
        },
    ];

    let json = to_json_string(&modes)?;
    println!("JSON output:\n{}\n", json);

    // Typed round-trip
    let modes_back: Vec<Mode> = serde_json::from_str(&json)?;
    assert_eq!(modes, modes_back);
    println!("✓ Round-trip successful");

    // Untyped decoding still finds the complex numbers
    let tree = from_json_str(&json)?;
    if let Some(items) = tree.as_array() {
        for item in items {
            if let Some(z) = item
                .as_object()
                .and_then(|obj| obj.get("eigenvalue"))
                .and_then(Structured::as_complex)
            {
                println!("eigenvalue: {}", z);
            }
        }
    }

    Ok(())
}
