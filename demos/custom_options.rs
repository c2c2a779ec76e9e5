//! Tuning the validator: root kind, depth limit and whitespace handling.
//!
//! Run with: cargo run --example custom_options

use relaxed_json::{validate_with_options, RootKind, ValidatorOptions};

fn main() {
    let lenient = ValidatorOptions::lenient();
    println!(
        "bare tuple, any root:   {:?}",
        validate_with_options("(1, 'two', None)", &lenient)
    );

    let shallow = ValidatorOptions::new().with_max_depth(2);
    println!(
        "three levels, limit 2:  {:?}",
        validate_with_options("{\"a\": [[1]]}", &shallow)
    );

    let exact = ValidatorOptions::new()
        .with_whitespace_normalization(false)
        .with_root(RootKind::Object);
    println!(
        "spaces kept:            {:?}",
        validate_with_options("{\"a\": 1}", &exact)
    );
}
