//! Reporting where a document went wrong.
//!
//! Run with: cargo run --example error_locations

use relaxed_json::{check_document, ValidatorOptions};

fn main() {
    let text = "{\n  \"response\": ,\n  \"answerId\": 530\n}";
    let report = check_document(text, &ValidatorOptions::new());

    match (report.error, report.location) {
        (Some(error), Some(location)) => {
            println!("line {}, column {}: {}", location.line, location.column, error);
            if let Some(line) = text.lines().nth(location.line - 1) {
                println!("{}", line);
                println!("{}^", " ".repeat(location.column - 1));
            }
        }
        _ => println!("✓ Document is valid"),
    }
}
