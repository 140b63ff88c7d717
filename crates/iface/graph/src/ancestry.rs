//! Depth-first ancestor traversal.

use iface_types::{Registry, Subject, TypeId};
use std::collections::HashSet;

/// Ancestors of `subject`, the subject itself first.
///
/// Parents are visited depth-first, left-to-right in declaration order;
/// a diamond-inherited ancestor appears once, at its earliest visit
/// position. With `exclude_interfaces`, interface-classified entries are
/// filtered out without disturbing the relative order of the remainder.
///
/// Never fails: a subject with no declared parents (including an id the
/// registry does not know) degrades to a singleton list.
pub fn ancestors(
    registry: &Registry,
    subject: impl Into<Subject>,
    exclude_interfaces: bool,
) -> Vec<TypeId> {
    let start = subject.into().type_id();
    let mut order = Vec::new();
    let mut seen = HashSet::new();
    // Explicit worklist; recursion depth is not bounded by the hierarchy.
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        order.push(id);
        if let Some(def) = registry.get(id) {
            // Reversed so the leftmost parent is popped first.
            stack.extend(def.parents.iter().rev().copied());
        }
    }
    if exclude_interfaces {
        order.retain(|id| {
            !registry
                .classification(*id)
                .is_some_and(|c| c.is_interface())
        });
    }
    order
}

/// Name projection of [`ancestors`]; ids the registry cannot name are
/// dropped.
pub fn ancestor_names(
    registry: &Registry,
    subject: impl Into<Subject>,
    exclude_interfaces: bool,
) -> Vec<String> {
    ancestors(registry, subject, exclude_interfaces)
        .into_iter()
        .filter_map(|id| registry.name_of(id).map(String::from))
        .collect()
}
