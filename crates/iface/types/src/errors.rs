//! Error taxonomy for the conformance engine.
//!
//! Boolean predicates never produce these; they degrade to `false`. The
//! raising paths are type definition, instantiation, assertion, and checked
//! invocation.

use crate::TypeId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single non-conformance found during assertion or checked invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ConformanceDefect {
    /// No override of the stub name or its body binding anywhere on the
    /// implementor side of the graph.
    #[error("failed to define {interface} interface method `{body}` or `{stub}`")]
    MissingOverride {
        interface: String,
        stub: String,
        body: String,
    },

    /// An override exists but its parameter count differs from the stub's.
    #[error("`{method}` takes {found} args, instead of {expected} specified by {interface}.{stub}")]
    ArityMismatch {
        interface: String,
        stub: String,
        method: String,
        expected: usize,
        found: usize,
    },

    /// An interface reached by the assertion declares no stub anywhere on
    /// its extends line.
    #[error("{interface} declares no stub methods, directly or via an ancestor")]
    InterfaceWithoutStubs { interface: String },

    /// A stub was invoked with no resolvable implementation.
    #[error("failed to implement {interface} interface stub method `{stub}`")]
    UnimplementedStub { interface: String, stub: String },

    /// The stub's pre-condition predicate rejected the arguments.
    #[error("pre-condition of {interface}.{stub} violated")]
    PreconditionViolated { interface: String, stub: String },

    /// The stub's post-condition predicate rejected the arguments.
    #[error("post-condition of {interface}.{stub} violated")]
    PostconditionViolated { interface: String, stub: String },
}

impl ConformanceDefect {
    /// The interface this defect points at.
    pub fn interface(&self) -> &str {
        match self {
            ConformanceDefect::MissingOverride { interface, .. }
            | ConformanceDefect::ArityMismatch { interface, .. }
            | ConformanceDefect::InterfaceWithoutStubs { interface }
            | ConformanceDefect::UnimplementedStub { interface, .. }
            | ConformanceDefect::PreconditionViolated { interface, .. }
            | ConformanceDefect::PostconditionViolated { interface, .. } => interface,
        }
    }

    /// The stub this defect points at, if it concerns one.
    pub fn stub(&self) -> Option<&str> {
        match self {
            ConformanceDefect::MissingOverride { stub, .. }
            | ConformanceDefect::ArityMismatch { stub, .. }
            | ConformanceDefect::UnimplementedStub { stub, .. }
            | ConformanceDefect::PreconditionViolated { stub, .. }
            | ConformanceDefect::PostconditionViolated { stub, .. } => Some(stub),
            ConformanceDefect::InterfaceWithoutStubs { .. } => None,
        }
    }

    /// Whether this defect is a contract (pre/post-condition) violation.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            ConformanceDefect::PreconditionViolated { .. }
                | ConformanceDefect::PostconditionViolated { .. }
        )
    }
}

/// Assertion or invocation failure, carrying every defect found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("({class}) fails conformance: {}", format_defects(.defects))]
pub struct ConformanceError {
    /// The non-conforming class.
    pub class: String,
    /// Every defect found, in discovery order.
    pub defects: Vec<ConformanceDefect>,
}

fn format_defects(defects: &[ConformanceDefect]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Construction of an interface-classified type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("({type_name}) is an interface and may not be instantiated")]
pub struct InstantiationError {
    /// The interface whose construction was attempted.
    pub type_name: String,
}

/// A raising entry point received an argument outside its contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum InvalidArgumentError {
    /// The id was not issued by this registry.
    #[error("unknown {0}")]
    UnknownType(TypeId),

    /// `assert_implements` was handed an interface; interfaces extend,
    /// they do not implement.
    #[error("({type_name}) is an interface; call assert_implements on an implementing class")]
    InterfaceSubject { type_name: String },

    /// Checked invocation of a name no ancestor declares.
    #[error("({class}) has no method named `{method}`")]
    UnknownMethod { class: String, method: String },

    /// Checked invocation with the wrong number of arguments.
    #[error("({class}.{method}) called with {found} args, expected {expected}")]
    WrongArgumentCount {
        class: String,
        method: String,
        expected: usize,
        found: usize,
    },
}

/// Definition-phase defects reported by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DefinitionError {
    /// Every declared type name is unique per registry.
    #[error("type name `{0}` is already declared")]
    DuplicateTypeName(String),

    /// A parent id was not issued by this registry.
    #[error("unknown parent {0}")]
    UnknownParent(TypeId),

    /// Extends edges are interface-to-interface only.
    #[error("({interface}) parent `{parent}` is not an interface")]
    NonInterfaceParent { interface: String, parent: String },

    /// A stub or method name repeats within one definition.
    #[error("({type_name}) declares member `{member}` more than once")]
    DuplicateMember { type_name: String, member: String },
}

/// Umbrella error for the whole engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum IfaceError {
    #[error("conformance error: {0}")]
    Conformance(#[from] ConformanceError),
    #[error("instantiation error: {0}")]
    Instantiation(#[from] InstantiationError),
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgumentError),
    #[error("definition error: {0}")]
    Definition(#[from] DefinitionError),
}

impl IfaceError {
    /// Whether this is an assertion/invocation conformance failure.
    pub fn is_conformance(&self) -> bool {
        matches!(self, IfaceError::Conformance(_))
    }

    /// The conformance defects, when this is a conformance failure.
    pub fn defects(&self) -> &[ConformanceDefect] {
        match self {
            IfaceError::Conformance(e) => &e.defects,
            _ => &[],
        }
    }
}

/// Result type for engine operations.
pub type IfaceResult<T> = Result<T, IfaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(interface: &str, stub: &str) -> ConformanceDefect {
        ConformanceDefect::MissingOverride {
            interface: interface.into(),
            stub: stub.into(),
            body: format!("{stub}_body"),
        }
    }

    #[test]
    fn defect_display_names_interface_and_stub() {
        let d = missing("Shape", "area");
        let text = d.to_string();
        assert!(text.contains("Shape"));
        assert!(text.contains("area_body"));
        assert_eq!(d.interface(), "Shape");
        assert_eq!(d.stub(), Some("area"));
    }

    #[test]
    fn conformance_error_joins_defects() {
        let e = ConformanceError {
            class: "Square".into(),
            defects: vec![missing("Shape", "area"), missing("Shape", "perimeter")],
        };
        let text = e.to_string();
        assert!(text.contains("Square"));
        assert!(text.contains("area"));
        assert!(text.contains("perimeter"));
    }

    #[test]
    fn contract_violations_are_classified() {
        let pre = ConformanceDefect::PreconditionViolated {
            interface: "Ordered".into(),
            stub: "lt".into(),
        };
        assert!(pre.is_contract_violation());
        assert!(!missing("Shape", "area").is_contract_violation());
    }

    #[test]
    fn umbrella_from_conversions() {
        let e: IfaceError = InstantiationError {
            type_name: "Shape".into(),
        }
        .into();
        assert!(matches!(e, IfaceError::Instantiation(_)));
        assert!(!e.is_conformance());
        assert!(e.defects().is_empty());

        let e: IfaceError = ConformanceError {
            class: "Square".into(),
            defects: vec![missing("Shape", "area")],
        }
        .into();
        assert!(e.is_conformance());
        assert_eq!(e.defects().len(), 1);
    }

    #[test]
    fn definition_error_display() {
        let e = DefinitionError::DuplicateTypeName("Shape".into());
        assert!(e.to_string().contains("already declared"));
    }
}
