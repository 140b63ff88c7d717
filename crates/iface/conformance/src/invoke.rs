//! Checked method invocation.
//!
//! Invocation goes through the same stub/body resolution as the assertion,
//! and is the path on which a stub's pre- and post-conditions are enforced.
//! A stub with no resolvable override is never executable.

use crate::classify::{interfaces, resolve_override};
use iface_graph::ancestors;
use iface_types::{
    ConformanceDefect, ConformanceError, IfaceError, Instance, InvalidArgumentError, Registry,
    StubDef, TypeId, Value,
};
use tracing::trace;

/// Invoke `method` on `instance`.
///
/// When an interface ancestor declares `method` as a stub (nearest wins),
/// the call is governed by that stub: the argument count must match its
/// arity, the pre-condition is checked before the resolved body runs, and
/// the post-condition after. Predicate violations surface as conformance
/// defects distinct from a missing override. Names no interface governs
/// dispatch directly on the class and its non-interface ancestors.
pub fn call(
    registry: &Registry,
    instance: &Instance,
    method: &str,
    args: &[Value],
) -> Result<Value, IfaceError> {
    let class = instance.class();
    let class_name = registry
        .name_of(class)
        .ok_or(InvalidArgumentError::UnknownType(class))?
        .to_string();

    let governing: Option<(String, StubDef)> = interfaces(registry, class)
        .into_iter()
        .find_map(|iface| {
            registry
                .get(iface)
                .and_then(|def| def.stub(method).map(|s| (def.name.clone(), s.clone())))
        });

    match governing {
        Some((iface_name, stub)) => {
            governed_call(registry, class, class_name, &iface_name, &stub, args)
        }
        None => plain_call(registry, instance, class_name, method, args),
    }
}

fn governed_call(
    registry: &Registry,
    class: TypeId,
    class_name: String,
    iface_name: &str,
    stub: &StubDef,
    args: &[Value],
) -> Result<Value, IfaceError> {
    if args.len() != stub.arity {
        return Err(InvalidArgumentError::WrongArgumentCount {
            class: class_name,
            method: stub.name.clone(),
            expected: stub.arity,
            found: args.len(),
        }
        .into());
    }

    let Some(found) = resolve_override(registry, class, stub) else {
        return Err(conformance(
            class_name,
            ConformanceDefect::UnimplementedStub {
                interface: iface_name.to_string(),
                stub: stub.name.clone(),
            },
        ));
    };

    if let Some(pre) = &stub.pre {
        if !pre(args) {
            return Err(conformance(
                class_name,
                ConformanceDefect::PreconditionViolated {
                    interface: iface_name.to_string(),
                    stub: stub.name.clone(),
                },
            ));
        }
    }

    trace!(class = %class_name, stub = %stub.name, body = %found.method.name, "dispatching stub");
    let result = (found.method.body)(args);

    if let Some(post) = &stub.post {
        // Post-conditions see the same arguments as the call.
        if !post(args) {
            return Err(conformance(
                class_name,
                ConformanceDefect::PostconditionViolated {
                    interface: iface_name.to_string(),
                    stub: stub.name.clone(),
                },
            ));
        }
    }
    Ok(result)
}

fn plain_call(
    registry: &Registry,
    instance: &Instance,
    class_name: String,
    method: &str,
    args: &[Value],
) -> Result<Value, IfaceError> {
    for id in ancestors(registry, instance, true) {
        if let Some(def) = registry.get(id) {
            if let Some(m) = def.method(method) {
                if args.len() != m.arity {
                    return Err(InvalidArgumentError::WrongArgumentCount {
                        class: class_name,
                        method: method.to_string(),
                        expected: m.arity,
                        found: args.len(),
                    }
                    .into());
                }
                trace!(class = %class_name, %method, "dispatching plain method");
                return Ok((m.body)(args));
            }
        }
    }
    Err(InvalidArgumentError::UnknownMethod {
        class: class_name,
        method: method.to_string(),
    }
    .into())
}

fn conformance(class: String, defect: ConformanceDefect) -> IfaceError {
    ConformanceError {
        class,
        defects: vec![defect],
    }
    .into()
}
