//! Declared-type descriptors and query subjects.

use crate::method::{MethodDef, StubDef};
use crate::registry::Instance;
use crate::TypeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a declared type participates in the conformance model.
///
/// Per-type state machine: a type is declared as `Interface` or `Class`;
/// a class becomes `Implementor` only through a successful conformance
/// assertion, and that transition is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// A protocol: declares stubs, extends other interfaces, never instantiable.
    Interface,
    /// A regular class; an implementor candidate once it inherits from an interface.
    Class,
    /// A class whose conformance has been verified by assertion.
    Implementor,
}

impl Classification {
    /// Whether this tag sits on the interface side of the graph.
    pub fn is_interface(self) -> bool {
        matches!(self, Classification::Interface)
    }

    /// Whether conformance has been verified.
    pub fn is_implementor(self) -> bool {
        matches!(self, Classification::Implementor)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Interface => "interface",
            Classification::Class => "class",
            Classification::Implementor => "implementor",
        };
        f.write_str(label)
    }
}

/// A declared type: an interface carrying stubs, or a class carrying methods.
///
/// Immutable once the defining `Registry` call returns.
#[derive(Clone, Debug)]
pub struct TypeDef {
    /// Identity within the issuing registry.
    pub id: TypeId,
    /// Declared name, unique per registry.
    pub name: String,
    /// Direct parents, in declaration order.
    pub parents: Vec<TypeId>,
    /// Stubs declared directly by this interface (empty for classes).
    pub stubs: Vec<StubDef>,
    /// Concrete methods declared directly by this class (empty for interfaces).
    pub methods: Vec<MethodDef>,
}

impl TypeDef {
    /// Directly declared stub with the given name, if any.
    pub fn stub(&self, name: &str) -> Option<&StubDef> {
        self.stubs.iter().find(|s| s.name == name)
    }

    /// Directly declared concrete method with the given name, if any.
    pub fn method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// What a graph or conformance query is about.
///
/// Instances resolve to their class before any traversal, so a `Subject` is
/// ultimately a `TypeId`; the conversion impls keep call sites uniform for
/// classes, interfaces, and instances alike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subject(TypeId);

impl Subject {
    /// The type this subject resolves to.
    pub fn type_id(self) -> TypeId {
        self.0
    }
}

impl From<TypeId> for Subject {
    fn from(id: TypeId) -> Self {
        Subject(id)
    }
}

impl From<&Instance> for Subject {
    fn from(instance: &Instance) -> Self {
        Subject(instance.class())
    }
}
