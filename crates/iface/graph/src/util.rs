//! Ordered list utilities.
//!
//! The engine builds every result list with guaranteed order and no
//! duplicates; these helpers are the generic pieces of that. They operate
//! on [`serde_json::Value`] so arbitrarily nested containers and atoms mix
//! freely, as in `flatten([1, [2, 3], [4, [5]]])`.

use serde_json::Value;
use std::collections::HashSet;

/// Single-level list of all atoms in `values`, in original order.
///
/// Arrays are descended element by element; object values are descended in
/// key order; `Null` contributes nothing. Every other value is an atom.
pub fn flatten(values: &[Value]) -> Vec<Value> {
    let mut out = Vec::new();
    // Worklist kept in reverse so atoms come out left-to-right.
    let mut stack: Vec<&Value> = values.iter().rev().collect();
    while let Some(value) = stack.pop() {
        match value {
            Value::Null => {}
            Value::Array(items) => stack.extend(items.iter().rev()),
            Value::Object(map) => stack.extend(map.values().rev()),
            atom => out.push(atom.clone()),
        }
    }
    out
}

/// Flattened, duplicate-free list of `values`.
///
/// Order of first occurrence is preserved; the result is never sorted.
pub fn unique(values: &[Value]) -> Vec<Value> {
    first_occurrence(flatten(values))
}

/// Order-preserving dedup, keyed on canonical JSON text.
pub fn first_occurrence(values: impl IntoIterator<Item = Value>) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value.to_string()) {
            out.push(value);
        }
    }
    out
}
