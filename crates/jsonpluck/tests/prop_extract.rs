//! Property-based tests for the extraction protocol.
//!
//! Uses `proptest` to check, over random inputs, that:
//! - scalars read back exactly as the kind they were written as
//! - scalars never satisfy a target of a different kind
//! - sequence extraction keeps exactly the matching elements, in order
//! - map extraction keeps exactly the matching members
//! - repeated extraction from the same node is stable

use std::collections::BTreeMap;

use jsonpluck::{extract, extract_into, extract_member, extract_or, NodeKind, Value};
use proptest::prelude::*;
use serde_json::{json, Map};

// ============================================================================
// Strategies
// ============================================================================

/// Any scalar JSON node: null, bool, integer of any width, double or string.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        any::<i64>().prop_map(|n| json!(n)),
        any::<u64>().prop_map(|n| json!(n)),
        // Finite doubles only: NaN and infinities are not JSON.
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| json!(f)),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::String),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn i32_roundtrips(n in any::<i32>()) {
        let node = json!(n);
        prop_assert_eq!(extract::<i32>(&node), Some(n));
        prop_assert_eq!(extract::<i64>(&node), Some(i64::from(n)));
        prop_assert_eq!(extract::<f64>(&node), None);
        prop_assert_eq!(extract::<String>(&node), None);
        prop_assert_eq!(extract::<bool>(&node), None);
    }

    #[test]
    fn u64_roundtrips(n in any::<u64>()) {
        let node = json!(n);
        prop_assert_eq!(extract::<u64>(&node), Some(n));
        prop_assert_eq!(extract::<u32>(&node), u32::try_from(n).ok());
        prop_assert_eq!(extract::<i64>(&node), i64::try_from(n).ok());
    }

    #[test]
    fn negative_never_unsigned(n in i64::MIN..0i64) {
        let node = json!(n);
        prop_assert_eq!(extract::<u32>(&node), None);
        prop_assert_eq!(extract::<u64>(&node), None);
    }

    #[test]
    fn double_roundtrips_through_text(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let node = json!(f);
        let extracted = extract::<f64>(&node);
        prop_assert_eq!(extracted, Some(f));
        prop_assert_eq!(
            serde_json::to_string(&extracted.unwrap()).unwrap(),
            serde_json::to_string(&node).unwrap()
        );
        prop_assert_eq!(extract::<i64>(&node), None);
    }

    #[test]
    fn f32_values_extract_as_float(f in any::<f32>().prop_filter("finite", |f| f.is_finite())) {
        let node = json!(f64::from(f));
        prop_assert_eq!(extract::<f32>(&node), Some(f));
    }

    #[test]
    fn doubles_in_f32_range_narrow_to_nearest(
        d in -f64::from(f32::MAX)..=f64::from(f32::MAX)
    ) {
        let node = json!(d);
        prop_assert_eq!(extract::<f32>(&node), Some(d as f32));
        prop_assert_eq!(extract::<f64>(&node), Some(d));
    }

    #[test]
    fn string_roundtrips(s in ".{0,32}") {
        let node = Value::String(s.clone());
        prop_assert_eq!(extract::<String>(&node), Some(s.clone()));
        prop_assert_eq!(extract::<&str>(&node), Some(s.as_str()));
        prop_assert_eq!(extract::<i32>(&node), None);
    }

    #[test]
    fn mismatch_leaves_out_untouched(node in arb_scalar(), sentinel in any::<bool>()) {
        let mut out = sentinel;
        let ok = extract_into(&node, &mut out);
        prop_assert_eq!(ok, node.is_boolean());
        if !ok {
            prop_assert_eq!(out, sentinel);
        }
    }

    #[test]
    fn extraction_agrees_with_kind(node in arb_scalar()) {
        prop_assert_eq!(extract::<i32>(&node).is_some(), NodeKind::Int.matches(&node));
        prop_assert_eq!(extract::<u32>(&node).is_some(), NodeKind::Uint.matches(&node));
        prop_assert_eq!(extract::<i64>(&node).is_some(), NodeKind::Int64.matches(&node));
        prop_assert_eq!(extract::<u64>(&node).is_some(), NodeKind::Uint64.matches(&node));
        prop_assert_eq!(extract::<f32>(&node).is_some(), NodeKind::Float.matches(&node));
        prop_assert_eq!(extract::<f64>(&node).is_some(), NodeKind::Double.matches(&node));
        prop_assert_eq!(extract::<bool>(&node).is_some(), NodeKind::Bool.matches(&node));
        prop_assert_eq!(extract::<String>(&node).is_some(), NodeKind::String.matches(&node));
    }

    #[test]
    fn vec_keeps_matching_elements_in_order(items in prop::collection::vec(arb_scalar(), 0..24)) {
        let node = Value::Array(items.clone());
        let expected: Vec<i32> = items.iter().filter_map(|v| extract::<i32>(v)).collect();
        prop_assert_eq!(extract::<Vec<i32>>(&node), Some(expected));
    }

    #[test]
    fn map_keeps_matching_members(members in prop::collection::vec((arb_key(), arb_scalar()), 0..16)) {
        let mut object = Map::new();
        for (key, value) in &members {
            object.insert(key.clone(), value.clone());
        }
        let expected: BTreeMap<String, String> = object
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect();
        let node = Value::Object(object);
        prop_assert_eq!(extract::<BTreeMap<String, String>>(&node), Some(expected));
    }

    #[test]
    fn strict_lookup_vs_default(key in arb_key(), value in arb_scalar(), default in any::<i32>()) {
        let mut object = Map::new();
        object.insert(key.clone(), value);
        let node = Value::Object(object);
        match extract_member::<i32>(&node, &key) {
            Some(found) => prop_assert_eq!(extract_or(&node, &key, default), found),
            None => prop_assert_eq!(extract_or(&node, &key, default), default),
        }
        prop_assert_eq!(extract_or(&node, "MISSING", default), default);
    }

    #[test]
    fn extraction_is_idempotent(items in prop::collection::vec(arb_scalar(), 0..16)) {
        let node = Value::Array(items);
        let first = extract::<Vec<Value>>(&node);
        let second = extract::<Vec<Value>>(&node);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(extract::<Vec<String>>(&node), extract::<Vec<String>>(&node));
    }
}
