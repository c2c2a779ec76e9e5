//! Relaxed JSON Dialect
//!
//! This module documents the grammar accepted by this library.
//!
//! # Overview
//!
//! The dialect is a superset of JSON aimed at text produced by Python's `repr` and by
//! hand. A document is a single object; everything a JSON parser accepts is accepted
//! here, except the lowercase literals `true`/`false`/`null`, signed numbers and
//! exponents (see [Limitations](#limitations)).
//!
//! # Core Syntax
//!
//! ## Objects
//!
//! ```text
//! { key : value , key : value , }
//! ```
//!
//! **Rules**:
//! - Keys may be any value: strings, numbers, literals, even containers
//! - Pairs are separated by `,`; a single trailing `,` before `}` is allowed
//! - `{}` is the empty object
//! - A value may not start with `:`, `,` or `.`
//!
//! ## Sequences
//!
//! Lists use `[` `]`, tuples use `(` `)`. Both follow the object comma rules:
//!
//! ```text
//! [1, 2, 3,]
//! ("Ann", "Billy")
//! ()
//! ```
//!
//! ## Primitives
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Null | `None` | `"pets": None` |
//! | Boolean | `True` or `False` | `"married": True` |
//! | Number | digits, optional `.`, optional digits | `30`, `27.5`, `3.` |
//! | String | `"..."` or `'...'` | `'BMW 230'` |
//!
//! ## Strings
//!
//! A string runs from its opening quote to the next identical quote. There are no escape
//! sequences, so `"a\"b"` is the string `a\` followed by stray characters. A `'` inside a
//! `"`-quoted string (and the reverse) is ordinary text.
//!
//! ## Whitespace
//!
//! Whitespace is insignificant everywhere and is removed before validation, including
//! inside strings. `"BMW 230"` and `"BMW230"` validate identically.
//!
//! # Matching Rules
//!
//! The end of a token is found structurally, before its content is checked:
//!
//! - numbers end after the longest `digits[.digits]` run
//! - literals end after the matching word
//! - strings end at the next identical quote
//! - containers end where the count of their own open and close characters balances;
//!   other bracket kinds and quotes are not counted
//!
//! Content is then checked over exactly that span. This is why `{"x": {"a": "}"}}` is
//! rejected: the inner object is taken to end at the first `}`, leaving the string
//! unterminated inside it. The document itself follows the same rule, so `{"a": "}"}`
//! and `{}{}` are both rejected as not being one enclosed object.
//!
//! # Examples
//!
//! Valid:
//!
//! ```text
//! {"name": "John", "age": 30, "pets": None, "cars": [{"model": "BMW", "mpg": 27.5}]}
//! {5: "b"}
//! {'a': 1,}
//! {(1, 2): [(), [], {}]}
//! ```
//!
//! Invalid:
//!
//! ```text
//! {"response": , "answerId": 530}   value missing
//! {"a": 1,,}                        empty member
//! {"a": "b}                         unterminated string
//! {"flag": true}                    lowercase literal
//! {"k1" 1}                          missing colon
//! ```
//!
//! # Limitations
//!
//! - **Signed numbers**: `-1` is rejected; no sign is accepted anywhere in a number
//! - **Exponents**: `1e5` is rejected
//! - **Escapes**: not recognised inside strings
//! - **Multiple roots**: a document holds exactly one value

// This module contains only documentation; no implementation code
