//! The extraction protocol: "read this node as a `T`".
//!
//! [`Extract`] is implemented once per scalar type and generically for
//! sequences, sets and maps of anything that is itself [`Extract`], so a
//! new scalar impl immediately works inside every container.
//!
//! # Failure policy
//!
//! - **Scalars** succeed only when the node satisfies the target's
//!   [`NodeKind`]. There is no widening, narrowing or int/float coercion.
//! - **Containers** fail only when the node itself has the wrong shape
//!   (not an array for sequences and sets, not an object for maps).
//!   Elements or members that do not extract are skipped, so a
//!   heterogeneous array still yields whatever is readable.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops::{Deref, DerefMut};

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::kind::{as_f32, as_i32, as_u32, NodeKind};

/// A type that can be read out of a JSON node.
///
/// The lifetime lets borrowed targets (`&'a str`, `&'a Value`) point into
/// the document instead of copying.
pub trait Extract<'a>: Sized {
    /// Short description of what this type reads, for error messages.
    const EXPECTED: &'static str;

    /// Produce a value from `node`, or `None` if the node does not fit.
    fn extract(node: &'a Value) -> Option<Self>;
}

/// A type that can be read from an object member *name*.
///
/// Member names are always strings; integer keys are parsed from their
/// decimal text, so `{"1": ..}` extracts into a map keyed by `i32`. Only the
/// canonical spelling counts: `"01"`, `"+1"` and `"-0"` are not keys.
pub trait ExtractKey<'a>: Sized {
    fn extract_key(name: &'a str) -> Option<Self>;
}

/// Read `node` as a `T`.
///
/// # Examples
///
/// ```
/// use jsonpluck::extract;
/// use serde_json::json;
///
/// let node = json!([1, "x", 3]);
/// let ints: Vec<i32> = extract(&node).unwrap();
/// assert_eq!(ints, vec![1, 3]);
/// assert_eq!(extract::<i32>(&json!("x")), None);
/// ```
pub fn extract<'a, T: Extract<'a>>(node: &'a Value) -> Option<T> {
    T::extract(node)
}

/// Read `node` into `out`, returning whether it succeeded.
///
/// On failure `out` is left exactly as it was; on success it is replaced.
pub fn extract_into<'a, T: Extract<'a>>(node: &'a Value, out: &mut T) -> bool {
    match T::extract(node) {
        Some(value) => {
            *out = value;
            true
        }
        None => false,
    }
}

// ============================================================================
// Scalars
// ============================================================================

macro_rules! extract_scalar {
    ($ty:ty, $kind:expr, |$node:ident| $body:expr) => {
        impl<'a> Extract<'a> for $ty {
            const EXPECTED: &'static str = $kind.name();

            fn extract($node: &'a Value) -> Option<Self> {
                $body
            }
        }
    };
}

extract_scalar!(bool, NodeKind::Bool, |node| node.as_bool());
extract_scalar!(i32, NodeKind::Int, |node| node.as_number().and_then(as_i32));
extract_scalar!(u32, NodeKind::Uint, |node| node.as_number().and_then(as_u32));
extract_scalar!(i64, NodeKind::Int64, |node| node.as_i64());
extract_scalar!(u64, NodeKind::Uint64, |node| node.as_u64());
extract_scalar!(f32, NodeKind::Float, |node| node.as_number().and_then(as_f32));
extract_scalar!(f64, NodeKind::Double, |node| {
    node.as_number().filter(|n| n.is_f64()).and_then(|n| n.as_f64())
});
extract_scalar!(String, NodeKind::String, |node| node.as_str().map(str::to_owned));

impl<'a> Extract<'a> for &'a str {
    const EXPECTED: &'static str = NodeKind::String.name();

    fn extract(node: &'a Value) -> Option<Self> {
        node.as_str()
    }
}

/// Raw subtree: always succeeds, borrowing the node itself.
impl<'a> Extract<'a> for &'a Value {
    const EXPECTED: &'static str = "any value";

    fn extract(node: &'a Value) -> Option<Self> {
        Some(node)
    }
}

/// Owned copy of the subtree: always succeeds.
impl<'a> Extract<'a> for Value {
    const EXPECTED: &'static str = "any value";

    fn extract(node: &'a Value) -> Option<Self> {
        Some(node.clone())
    }
}

/// `null` reads as `None`; anything else must extract as `T`.
impl<'a, T: Extract<'a>> Extract<'a> for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn extract(node: &'a Value) -> Option<Self> {
        if node.is_null() {
            return Some(None);
        }
        T::extract(node).map(Some)
    }
}

// ============================================================================
// Sequences and sets
// ============================================================================

/// Walk an array, keeping every element that extracts as `T`.
fn collect_elements<'a, T, C>(node: &'a Value) -> Option<C>
where
    T: Extract<'a>,
    C: FromIterator<T>,
{
    let elements = node.as_array()?;
    let collected = elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| {
            let item = T::extract(element);
            if item.is_none() {
                trace!(index, expected = T::EXPECTED, "skipping array element");
            }
            item
        })
        .collect();
    Some(collected)
}

impl<'a, T: Extract<'a>> Extract<'a> for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn extract(node: &'a Value) -> Option<Self> {
        collect_elements(node)
    }
}

impl<'a, T: Extract<'a>> Extract<'a> for VecDeque<T> {
    const EXPECTED: &'static str = "array";

    fn extract(node: &'a Value) -> Option<Self> {
        collect_elements(node)
    }
}

impl<'a, T: Extract<'a> + Ord> Extract<'a> for BTreeSet<T> {
    const EXPECTED: &'static str = "array";

    fn extract(node: &'a Value) -> Option<Self> {
        collect_elements(node)
    }
}

impl<'a, T, S> Extract<'a> for HashSet<T, S>
where
    T: Extract<'a> + Eq + Hash,
    S: BuildHasher + Default,
{
    const EXPECTED: &'static str = "array";

    fn extract(node: &'a Value) -> Option<Self> {
        collect_elements(node)
    }
}

// ============================================================================
// Maps
// ============================================================================

impl<'a> ExtractKey<'a> for String {
    fn extract_key(name: &'a str) -> Option<Self> {
        Some(name.to_owned())
    }
}

impl<'a> ExtractKey<'a> for &'a str {
    fn extract_key(name: &'a str) -> Option<Self> {
        Some(name)
    }
}

macro_rules! extract_integer_key {
    ($($ty:ty),*) => {
        $(
            impl<'a> ExtractKey<'a> for $ty {
                fn extract_key(name: &'a str) -> Option<Self> {
                    name.parse::<$ty>()
                        .ok()
                        .filter(|key| key.to_string() == name)
                }
            }
        )*
    };
}

extract_integer_key!(i32, u32, i64, u64);

/// Walk an object, keeping every member whose name extracts as `K` and
/// whose value extracts as `V`. Later duplicates overwrite earlier ones.
fn collect_members<'a, K, V, C>(node: &'a Value) -> Option<C>
where
    K: ExtractKey<'a>,
    V: Extract<'a>,
    C: FromIterator<(K, V)>,
{
    let members = node.as_object()?;
    let collected = members
        .iter()
        .filter_map(|(name, value)| {
            let pair = K::extract_key(name).zip(V::extract(value));
            if pair.is_none() {
                trace!(member = %name, expected = V::EXPECTED, "skipping object member");
            }
            pair
        })
        .collect();
    Some(collected)
}

impl<'a, K, V> Extract<'a> for BTreeMap<K, V>
where
    K: ExtractKey<'a> + Ord,
    V: Extract<'a>,
{
    const EXPECTED: &'static str = "object";

    fn extract(node: &'a Value) -> Option<Self> {
        collect_members(node)
    }
}

impl<'a, K, V, S> Extract<'a> for HashMap<K, V, S>
where
    K: ExtractKey<'a> + Eq + Hash,
    V: Extract<'a>,
    S: BuildHasher + Default,
{
    const EXPECTED: &'static str = "object";

    fn extract(node: &'a Value) -> Option<Self> {
        collect_members(node)
    }
}

// ============================================================================
// Serde bridge
// ============================================================================

/// Extract any `serde`-deserializable type straight from a node.
///
/// This is the hook for user-defined structs: wrap the target in
/// `Deserialized` and it composes with every container above.
///
/// ```
/// use jsonpluck::{extract, Deserialized};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// let node = json!([{"x": 1, "y": 2}, {"x": "bad"}]);
/// let points: Vec<Deserialized<Point>> = extract(&node).unwrap();
/// assert_eq!(points.len(), 1);
/// assert_eq!(*points[0], Point { x: 1, y: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Deserialized<T>(pub T);

impl<T> Deserialized<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Deserialized<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Deserialized<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<'a, T: Deserialize<'a>> Extract<'a> for Deserialized<T> {
    const EXPECTED: &'static str = "deserializable value";

    fn extract(node: &'a Value) -> Option<Self> {
        T::deserialize(node).ok().map(Deserialized)
    }
}
