//! Node kinds — the tag queries the extraction protocol is built on.
//!
//! `serde_json` stores every number as one of `u64`, `i64` or `f64`. The
//! protocol needs finer questions than that ("does this fit a signed 32-bit
//! integer?", "is this a float within `f32` range?"), so the
//! predicates here answer them without ever converting between the integer
//! and floating-point families.

use std::fmt;

use serde_json::{Number, Value};

/// Classification of a JSON node as seen by the extraction protocol.
///
/// Integer kinds overlap: `5` satisfies [`NodeKind::Int`], [`NodeKind::Uint`],
/// [`NodeKind::Int64`] and [`NodeKind::Uint64`]. [`NodeKind::of`] reports the
/// narrowest one; [`NodeKind::matches`] answers the membership question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    /// Integer within `i32` range.
    Int,
    /// Integer within `u32` range.
    Uint,
    /// Integer within `i64` range.
    Int64,
    /// Integer within `u64` range.
    Uint64,
    /// Floating-point number whose magnitude fits in `f32`. Narrowing may
    /// round, so `0.1` counts.
    Float,
    /// Any floating-point number.
    Double,
    String,
    Array,
    Object,
}

impl NodeKind {
    /// The narrowest kind describing `node`.
    pub fn of(node: &Value) -> Self {
        match node {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(n) => Self::of_number(n),
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    fn of_number(n: &Number) -> Self {
        if as_i32(n).is_some() {
            NodeKind::Int
        } else if as_u32(n).is_some() {
            NodeKind::Uint
        } else if n.is_i64() {
            NodeKind::Int64
        } else if n.is_u64() {
            NodeKind::Uint64
        } else if as_f32(n).is_some() {
            NodeKind::Float
        } else {
            NodeKind::Double
        }
    }

    /// Whether `node` satisfies this kind.
    pub fn matches(self, node: &Value) -> bool {
        match (self, node) {
            (NodeKind::Null, Value::Null) => true,
            (NodeKind::Bool, Value::Bool(_)) => true,
            (NodeKind::Int, Value::Number(n)) => as_i32(n).is_some(),
            (NodeKind::Uint, Value::Number(n)) => as_u32(n).is_some(),
            (NodeKind::Int64, Value::Number(n)) => n.as_i64().is_some(),
            (NodeKind::Uint64, Value::Number(n)) => n.as_u64().is_some(),
            (NodeKind::Float, Value::Number(n)) => as_f32(n).is_some(),
            (NodeKind::Double, Value::Number(n)) => n.is_f64(),
            (NodeKind::String, Value::String(_)) => true,
            (NodeKind::Array, Value::Array(_)) => true,
            (NodeKind::Object, Value::Object(_)) => true,
            _ => false,
        }
    }

    /// Lower-case name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Int => "int",
            NodeKind::Uint => "uint",
            NodeKind::Int64 => "int64",
            NodeKind::Uint64 => "uint64",
            NodeKind::Float => "float",
            NodeKind::Double => "double",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn as_i32(n: &Number) -> Option<i32> {
    n.as_i64().and_then(|v| i32::try_from(v).ok())
}

pub(crate) fn as_u32(n: &Number) -> Option<u32> {
    n.as_u64().and_then(|v| u32::try_from(v).ok())
}

/// A floating-point number within `±f32::MAX`, rounded to the nearest `f32`.
pub(crate) fn as_f32(n: &Number) -> Option<f32> {
    if !n.is_f64() {
        return None;
    }
    let wide = n.as_f64()?;
    (wide.abs() <= f64::from(f32::MAX)).then_some(wide as f32)
}
