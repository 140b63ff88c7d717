//! The boolean conformance predicates.
//!
//! These never fail: invalid or foreign inputs resolve to `false`.
//! Classification, not assertion, governs them.

use crate::classify::{interfaces, is_interface};
use iface_types::{Registry, Subject, TypeId};

/// Whether `interface` extends every entry of `targets`.
///
/// False unless `interface` is interface-classified, and every target is
/// interface-classified and a strict ancestor: an interface does not
/// extend itself.
pub fn extends(registry: &Registry, interface: TypeId, targets: &[TypeId]) -> bool {
    if !is_interface(registry, interface) {
        return false;
    }
    let line = interfaces(registry, interface);
    targets.iter().all(|target| {
        *target != interface && is_interface(registry, *target) && line.contains(target)
    })
}

/// Whether `subject` (a class or instance) implements every entry of
/// `targets`.
///
/// False if any target is not interface-classified, or the subject is
/// itself an interface: interfaces extend, they do not implement.
pub fn implements(registry: &Registry, subject: impl Into<Subject>, targets: &[TypeId]) -> bool {
    let subject = subject.into();
    if is_interface(registry, subject) {
        return false;
    }
    let implemented = interfaces(registry, subject);
    targets
        .iter()
        .all(|target| is_interface(registry, *target) && implemented.contains(target))
}
