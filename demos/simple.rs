//! Validating relaxed JSON documents.
//!
//! Run with: cargo run --example simple

use relaxed_json::{is_valid, validate};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = r#"{
        "name": "John",
        "age": 30,
        "married": True,
        "children": ("Ann", "Billy"),
        "pets": None,
        "cars": [
            {"model": "BMW 230", "mpg": 27.5},
            {"model": "Ford Edge", "mpg": 24.1},
        ],
    }"#;

    validate(doc)?;
    println!("✓ Document is valid");

    for candidate in ["{5: 'b'}", "{\"flag\": true}", "{\"a\": 1,,}"] {
        println!("{:<20} valid: {}", candidate, is_valid(candidate));
    }

    Ok(())
}
