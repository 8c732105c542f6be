//! # jsonpluck
//!
//! Typed extraction of native Rust values from parsed JSON trees.
//!
//! A single trait, [`Extract`], answers "can this node be read as a `T`?".
//! It is implemented per scalar type and generically for `Vec`, sets and
//! maps, so every scalar automatically works inside every container, and
//! containers nest freely (`BTreeMap<String, Vec<i32>>` just works).
//!
//! Containers are best-effort: elements that do not fit are skipped.
//! Keyed lookups are strict: the member must exist and must fit.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use jsonpluck::{extract_member, extract_or, parse_from_text};
//!
//! let doc = parse_from_text(
//!     r#"{"key1":12345,"key2":"some string content","key3":[1,2,3,4,5]}"#,
//! ).unwrap();
//!
//! assert_eq!(extract_or(&doc, "key1", 0), 12345);
//! assert_eq!(extract_member::<Vec<i32>>(&doc, "key3"), Some(vec![1, 2, 3, 4, 5]));
//!
//! let nested = parse_from_text(
//!     r#"{"key":{"sub_key1":[1,2,3,4,5],"sub_key2":[9,8,7,6,5]}}"#,
//! ).unwrap();
//! let map: BTreeMap<String, Vec<i32>> = extract_member(&nested, "key").unwrap();
//! assert_eq!(map["sub_key2"], vec![9, 8, 7, 6, 5]);
//! ```
//!
//! ## Modules
//!
//! - [`parse`] — JSON text/bytes/stream/file → [`Document`]
//! - [`kind`] — node kinds and the predicates extraction matches against
//! - [`extract`](mod@extract) — the [`Extract`] trait and its scalar/container impls
//! - [`lookup`](mod@lookup) — strict member and JSON-pointer lookup
//! - [`defaults`] — `extract_or` and the [`ValueExt`] accessors
//! - [`error`] — error types

pub mod defaults;
pub mod error;
pub mod extract;
pub mod kind;
pub mod lookup;
pub mod parse;

pub use defaults::{extract_or, extract_or_default, extract_or_else, ValueExt};
pub use error::{ExtractError, ParseError};
pub use extract::{extract, extract_into, Deserialized, Extract, ExtractKey};
pub use kind::NodeKind;
pub use lookup::{extract_member, extract_member_into, extract_pointer, lookup, lookup_pointer};
pub use parse::{
    parse_from_file, parse_from_reader, parse_from_slice, parse_from_text, Document,
    READ_BUFFER_SIZE,
};
pub use serde_json::Value;
