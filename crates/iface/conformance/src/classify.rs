//! Classification queries and stub/body override resolution.

use crate::naming::stub_binding;
use iface_graph::ancestors;
use iface_types::{MethodDef, Registry, StubDef, Subject, TypeId};

/// Whether `subject` is interface-classified.
///
/// True for every type on the interface side of the graph; false for
/// classes, verified implementors, instances, and ids the registry does
/// not know. Never fails.
pub fn is_interface(registry: &Registry, subject: impl Into<Subject>) -> bool {
    registry
        .classification(subject.into().type_id())
        .is_some_and(|c| c.is_interface())
}

/// The ordered, duplicate-free interface set of `subject`.
///
/// For a class or instance: every interface ancestor, in traversal order.
/// For an interface: itself first, then the interfaces it extends.
pub fn interfaces(registry: &Registry, subject: impl Into<Subject>) -> Vec<TypeId> {
    ancestors(registry, subject, false)
        .into_iter()
        .filter(|id| is_interface(registry, *id))
        .collect()
}

/// Name projection of [`interfaces`].
pub fn interface_names(registry: &Registry, subject: impl Into<Subject>) -> Vec<String> {
    interfaces(registry, subject)
        .into_iter()
        .filter_map(|id| registry.name_of(id).map(String::from))
        .collect()
}

/// A concrete override located for a stub.
#[derive(Clone, Debug)]
pub struct ResolvedOverride<'a> {
    /// The ancestor that declares the override.
    pub owner: TypeId,
    /// The override itself.
    pub method: &'a MethodDef,
}

/// Locate the override a class supplies for `stub`.
///
/// A direct override of the stub name itself is a full replacement and wins
/// outright; otherwise the stub's body binding is searched. Both passes walk
/// the class and its non-interface ancestors in traversal order, nearest
/// first.
pub fn resolve_override<'a>(
    registry: &'a Registry,
    class: TypeId,
    stub: &StubDef,
) -> Option<ResolvedOverride<'a>> {
    let path = ancestors(registry, class, true);
    let binding = stub_binding(stub);
    for name in [stub.name.as_str(), binding.as_str()] {
        for id in &path {
            if let Some(def) = registry.get(*id) {
                if let Some(method) = def.method(name) {
                    return Some(ResolvedOverride { owner: *id, method });
                }
            }
        }
    }
    None
}
