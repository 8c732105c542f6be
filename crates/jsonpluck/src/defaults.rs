//! Default-value facade over keyed lookup.
//!
//! Every accessor here is a thin wrapper around [`extract_or`]: a missing
//! member, a wrong-typed member and a non-object node all quietly produce
//! the default. Reach for [`crate::lookup()`] when the difference matters.

use serde_json::Value;

use crate::extract::Extract;
use crate::lookup::extract_member;

/// Extract member `key` as a `T`, or return `default` unchanged.
///
/// # Examples
///
/// ```
/// use jsonpluck::{extract_or, parse_from_text};
///
/// let doc = parse_from_text(r#"{"key1":12345,"key2":"some string content"}"#).unwrap();
/// assert_eq!(extract_or(&doc, "key1", 0), 12345);
/// assert_eq!(extract_or(&doc, "key2", String::new()), "some string content");
/// assert_eq!(extract_or(&doc, "nope", 7), 7);
/// ```
pub fn extract_or<'a, T: Extract<'a>>(node: &'a Value, key: &str, default: T) -> T {
    extract_member(node, key).unwrap_or(default)
}

/// Like [`extract_or`], computing the default only when it is needed.
pub fn extract_or_else<'a, T, F>(node: &'a Value, key: &str, default: F) -> T
where
    T: Extract<'a>,
    F: FnOnce() -> T,
{
    extract_member(node, key).unwrap_or_else(default)
}

/// Like [`extract_or`], falling back to `T::default()`.
pub fn extract_or_default<'a, T: Extract<'a> + Default>(node: &'a Value, key: &str) -> T {
    extract_member(node, key).unwrap_or_default()
}

/// Type-named accessors with implicit zero/false/empty defaults.
///
/// Implemented for `serde_json::Value`, so [`crate::Document`] picks the
/// methods up through deref.
///
/// ```
/// use jsonpluck::{parse_from_text, ValueExt};
///
/// let doc = parse_from_text(r#"{"port":8080,"debug":true}"#).unwrap();
/// assert_eq!(doc.get_uint("port"), 8080);
/// assert!(doc.get_bool("debug"));
/// assert_eq!(doc.get_string("host"), "");
/// assert_eq!(doc.get_string_or("host", "localhost"), "localhost");
/// ```
pub trait ValueExt {
    fn get_int(&self, key: &str) -> i32 {
        self.get_int_or(key, 0)
    }

    fn get_int_or(&self, key: &str, default: i32) -> i32;

    fn get_uint(&self, key: &str) -> u32 {
        self.get_uint_or(key, 0)
    }

    fn get_uint_or(&self, key: &str, default: u32) -> u32;

    fn get_int64(&self, key: &str) -> i64 {
        self.get_int64_or(key, 0)
    }

    fn get_int64_or(&self, key: &str, default: i64) -> i64;

    fn get_uint64(&self, key: &str) -> u64 {
        self.get_uint64_or(key, 0)
    }

    fn get_uint64_or(&self, key: &str, default: u64) -> u64;

    fn get_bool(&self, key: &str) -> bool {
        self.get_bool_or(key, false)
    }

    fn get_bool_or(&self, key: &str, default: bool) -> bool;

    fn get_string(&self, key: &str) -> String {
        self.get_string_or(key, "")
    }

    fn get_string_or(&self, key: &str, default: &str) -> String;

    fn get_float(&self, key: &str) -> f32 {
        self.get_float_or(key, 0.0)
    }

    fn get_float_or(&self, key: &str, default: f32) -> f32;

    fn get_double(&self, key: &str) -> f64 {
        self.get_double_or(key, 0.0)
    }

    fn get_double_or(&self, key: &str, default: f64) -> f64;

    /// Raw subtree of member `key`, or `None`.
    fn get_object(&self, key: &str) -> Option<&Value> {
        self.get_object_or(key, None)
    }

    fn get_object_or<'a>(&'a self, key: &str, default: Option<&'a Value>) -> Option<&'a Value>;
}

impl ValueExt for Value {
    fn get_int_or(&self, key: &str, default: i32) -> i32 {
        extract_or(self, key, default)
    }

    fn get_uint_or(&self, key: &str, default: u32) -> u32 {
        extract_or(self, key, default)
    }

    fn get_int64_or(&self, key: &str, default: i64) -> i64 {
        extract_or(self, key, default)
    }

    fn get_uint64_or(&self, key: &str, default: u64) -> u64 {
        extract_or(self, key, default)
    }

    fn get_bool_or(&self, key: &str, default: bool) -> bool {
        extract_or(self, key, default)
    }

    fn get_string_or(&self, key: &str, default: &str) -> String {
        extract_or(self, key, default.to_owned())
    }

    fn get_float_or(&self, key: &str, default: f32) -> f32 {
        extract_or(self, key, default)
    }

    fn get_double_or(&self, key: &str, default: f64) -> f64 {
        extract_or(self, key, default)
    }

    fn get_object_or<'a>(&'a self, key: &str, default: Option<&'a Value>) -> Option<&'a Value> {
        extract_member(self, key).or(default)
    }
}
