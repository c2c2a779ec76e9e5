//! Property-based tests over generated dialect documents
//!
//! Documents are generated from the grammar itself, so every generated document must
//! validate. Mutations of them must never panic, whatever the verdict.

use proptest::prelude::*;
use relaxed_json::{validate, validate_with_options, RootKind, ValidatorOptions};

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}",
        "[0-9]{1,4}\\.[0-9]{0,4}",
        Just("True".to_string()),
        Just("False".to_string()),
        Just("None".to_string()),
        "\"[a-zA-Z0-9 _'-]{0,8}\"",
        "'[a-zA-Z0-9 _\"-]{0,8}'",
    ]
}

fn join(items: &[String], trailing: bool) -> String {
    let mut body = items.join(", ");
    if trailing && !items.is_empty() {
        body.push(',');
    }
    body
}

fn value() -> impl Strategy<Value = String> {
    atom().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            (prop::collection::vec(inner.clone(), 0..5), any::<bool>())
                .prop_map(|(items, trailing)| format!("[{}]", join(&items, trailing))),
            (prop::collection::vec(inner.clone(), 0..5), any::<bool>())
                .prop_map(|(items, trailing)| format!("({})", join(&items, trailing))),
            (
                prop::collection::vec((inner.clone(), inner), 0..4),
                any::<bool>()
            )
                .prop_map(|(pairs, trailing)| {
                    let members: Vec<String> =
                        pairs.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                    format!("{{{}}}", join(&members, trailing))
                }),
        ]
    })
}

fn document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(("\"[a-z]{1,6}\"", value()), 0..6),
        any::<bool>(),
    )
        .prop_map(|(pairs, trailing)| {
            let members: Vec<String> = pairs
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            format!("{{{}}}", join(&members, trailing))
        })
}

proptest! {
    #[test]
    fn prop_generated_documents_are_valid(doc in document()) {
        prop_assert!(validate(&doc).is_ok(), "rejected: {}", doc);
    }

    #[test]
    fn prop_validation_is_idempotent(doc in document()) {
        prop_assert_eq!(validate(&doc), validate(&doc));
    }

    #[test]
    fn prop_any_value_is_a_valid_root(v in value()) {
        let options = ValidatorOptions::new().with_root(RootKind::Any);
        prop_assert!(validate_with_options(&v, &options).is_ok(), "rejected: {}", v);
    }

    #[test]
    fn prop_deleting_a_char_never_panics(doc in document(), pick in any::<prop::sample::Index>()) {
        let chars: Vec<char> = doc.chars().collect();
        let cut = pick.index(chars.len());
        let mutated: String = chars
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != cut)
            .map(|(_, c)| *c)
            .collect();
        if let Err(err) = validate(&mutated) {
            let compact_len = relaxed_json::normalize(&mutated).as_str().len();
            prop_assert!(err.index().unwrap_or(0) <= compact_len);
        }
    }

    #[test]
    fn prop_lowercase_literals_are_rejected(word in prop_oneof![Just("true"), Just("false"), Just("null")]) {
        let doc = format!("{{\"k\": {}}}", word);
        prop_assert!(validate(&doc).is_err());
    }
}
