//! Keyed lookup — resolve a named member, then extract it.
//!
//! Unlike container extraction this path is strict: the node must be an
//! object, the member must exist, and the member must extract as `T`. Any
//! one of those failing fails the whole call.

use serde_json::Value;

use crate::error::ExtractError;
use crate::extract::Extract;
use crate::kind::NodeKind;

/// Extract member `key` of object `node` as a `T`.
///
/// Returns `None` when `node` is not an object, when `key` is absent, or
/// when the member does not extract. Use [`lookup`] to tell those apart.
///
/// # Examples
///
/// ```
/// use jsonpluck::extract_member;
/// use serde_json::json;
///
/// let doc = json!({"key3": [1, 2, "x", 4]});
/// assert_eq!(extract_member::<Vec<i32>>(&doc, "key3"), Some(vec![1, 2, 4]));
/// assert_eq!(extract_member::<i32>(&doc, "key3"), None);
/// assert_eq!(extract_member::<i32>(&doc, "missing"), None);
/// ```
pub fn extract_member<'a, T: Extract<'a>>(node: &'a Value, key: &str) -> Option<T> {
    node.as_object()?.get(key).and_then(T::extract)
}

/// Out-parameter form of [`extract_member`]. `out` is untouched on failure.
pub fn extract_member_into<'a, T: Extract<'a>>(node: &'a Value, key: &str, out: &mut T) -> bool {
    match extract_member(node, key) {
        Some(value) => {
            *out = value;
            true
        }
        None => false,
    }
}

/// Like [`extract_member`], but reports why the lookup failed.
///
/// # Errors
///
/// - [`ExtractError::NotAnObject`] if `node` is not an object
/// - [`ExtractError::MemberNotFound`] if `key` is absent
/// - [`ExtractError::TypeMismatch`] if the member does not extract as `T`
pub fn lookup<'a, T: Extract<'a>>(node: &'a Value, key: &str) -> Result<T, ExtractError> {
    let members = node.as_object().ok_or_else(|| ExtractError::NotAnObject {
        found: NodeKind::of(node),
    })?;
    let member = members
        .get(key)
        .ok_or_else(|| ExtractError::MemberNotFound {
            key: key.to_owned(),
        })?;
    extract_found(member, key)
}

/// Strict lookup along an RFC 6901 JSON pointer such as `/a/b/0`.
///
/// A path that does not resolve reports [`ExtractError::MemberNotFound`]
/// with the pointer as the key.
pub fn lookup_pointer<'a, T: Extract<'a>>(
    node: &'a Value,
    pointer: &str,
) -> Result<T, ExtractError> {
    let target = node
        .pointer(pointer)
        .ok_or_else(|| ExtractError::MemberNotFound {
            key: pointer.to_owned(),
        })?;
    extract_found(target, pointer)
}

/// `Option` form of [`lookup_pointer`].
pub fn extract_pointer<'a, T: Extract<'a>>(node: &'a Value, pointer: &str) -> Option<T> {
    node.pointer(pointer).and_then(T::extract)
}

fn extract_found<'a, T: Extract<'a>>(member: &'a Value, key: &str) -> Result<T, ExtractError> {
    T::extract(member).ok_or_else(|| ExtractError::TypeMismatch {
        key: key.to_owned(),
        expected: T::EXPECTED,
        found: NodeKind::of(member),
    })
}
