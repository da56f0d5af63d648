//! Replacing the boolean vocabulary.
//!
//! Run with: cargo run --example custom_vocabulary

use glossy_atoms::{Error, Grammar, GrammarOptions, Recognizer};

fn main() -> Result<(), Error> {
    let options = GrammarOptions::new()
        .with_truthy(["ENABLED", "YES"])
        .with_falsey(["DISABLED", "NO"])
        .with_escapes(false);
    let grammar = Grammar::new(options)?;

    for input in ["enabled", "Disabled", "yes", "on", r#""C:\scratch""#] {
        println!("{:?} -> {}", input, grammar.parse_all(input)?);
    }

    // Overlapping vocabularies are rejected before any parsing happens
    let ambiguous = GrammarOptions::new()
        .with_truthy(["ON"])
        .with_falsey(["OFF", "on"]);
    match Grammar::new(ambiguous) {
        Ok(_) => unreachable!(),
        Err(e) => println!("\n✓ Expected error: {}", e),
    }

    Ok(())
}
