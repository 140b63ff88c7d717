//! The conformance assertion entry point.

use crate::classify::{interfaces, is_interface, resolve_override};
use crate::naming::stub_binding;
use crate::report::ConformanceReport;
use chrono::Utc;
use iface_types::{
    ConformanceDefect, ConformanceError, IfaceError, InvalidArgumentError, Registry, TypeId,
};
use tracing::{debug, info, warn};

/// Verify that `class` implements every interface it inherits from.
///
/// Every stub declared by every interface in `interfaces(class)` must have
/// a resolvable override with matching arity. All defects are collected
/// before failing, so the error names every non-conforming member at once.
///
/// On success with at least one interface checked, the registry performs
/// its single post-definition state transition: `class` becomes a verified
/// implementor. A class with no interface ancestors passes vacuously with
/// no transition. Call this immediately after the class definition.
pub fn assert_implements(
    registry: &mut Registry,
    class: TypeId,
) -> Result<ConformanceReport, IfaceError> {
    let class_name = registry
        .name_of(class)
        .ok_or(InvalidArgumentError::UnknownType(class))?
        .to_string();
    if is_interface(registry, class) {
        return Err(InvalidArgumentError::InterfaceSubject {
            type_name: class_name,
        }
        .into());
    }

    let interface_ids = interfaces(registry, class);
    let mut interfaces_checked = Vec::new();
    let mut defects = Vec::new();
    let mut stubs_checked = 0;

    for iface in &interface_ids {
        let (iface_name, stubs) = match registry.get(*iface) {
            Some(def) => (def.name.clone(), def.stubs.clone()),
            None => continue,
        };
        interfaces_checked.push(iface_name.clone());

        // An interface must carry at least one stub, directly or via an
        // ancestor, before any implementor is asserted against it.
        let has_stub = interfaces(registry, *iface)
            .iter()
            .any(|a| registry.get(*a).is_some_and(|d| !d.stubs.is_empty()));
        if !has_stub {
            defects.push(ConformanceDefect::InterfaceWithoutStubs {
                interface: iface_name,
            });
            continue;
        }

        for stub in &stubs {
            stubs_checked += 1;
            match resolve_override(registry, class, stub) {
                None => defects.push(ConformanceDefect::MissingOverride {
                    interface: iface_name.clone(),
                    stub: stub.name.clone(),
                    body: stub_binding(stub),
                }),
                Some(found) if found.method.arity != stub.arity => {
                    defects.push(ConformanceDefect::ArityMismatch {
                        interface: iface_name.clone(),
                        stub: stub.name.clone(),
                        method: found.method.name.clone(),
                        expected: stub.arity,
                        found: found.method.arity,
                    });
                }
                Some(_) => {}
            }
        }
    }

    let verified = defects.is_empty() && !interface_ids.is_empty();
    let report = ConformanceReport {
        class: class_name.clone(),
        interfaces_checked,
        stubs_checked,
        defects: defects.clone(),
        verified,
        checked_at: Utc::now(),
    };

    if !report.is_conformant() {
        warn!(class = %class_name, defects = defects.len(), "conformance assertion failed");
        return Err(ConformanceError {
            class: class_name,
            defects,
        }
        .into());
    }
    if verified {
        registry.mark_implementor(class)?;
        info!(class = %class_name, interfaces = ?report.interfaces_checked, "verified implementor");
    } else {
        debug!(class = %class_name, "no interfaces to implement; classification unchanged");
    }
    Ok(report)
}
