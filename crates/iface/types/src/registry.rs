//! The declared-type registry.
//!
//! Classification lives here as an explicit map from type identity to tag,
//! not as mutable state smeared over type descriptors. The definition phase
//! takes `&mut Registry`; every query takes `&Registry`; the only
//! post-definition mutation is [`Registry::mark_implementor`], performed by
//! the conformance assertion.

use crate::errors::{DefinitionError, IfaceError, InstantiationError, InvalidArgumentError};
use crate::method::{MethodDef, MethodFn, StubDef, Value};
use crate::typedef::{Classification, TypeDef};
use crate::TypeId;
use std::collections::HashMap;
use tracing::debug;

/// A live instance of a non-interface class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    class: TypeId,
}

impl Instance {
    /// The class this instance was constructed from.
    pub fn class(&self) -> TypeId {
        self.class
    }
}

/// Declaration-order description of a new interface.
#[derive(Debug)]
pub struct InterfaceBuilder {
    name: String,
    parents: Vec<TypeId>,
    stubs: Vec<StubDef>,
}

impl InterfaceBuilder {
    /// Start declaring an interface with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            stubs: Vec::new(),
        }
    }

    /// Add an extends edge. Parents are visited in declaration order.
    pub fn extends(mut self, parent: TypeId) -> Self {
        self.parents.push(parent);
        self
    }

    /// Declare a stub method.
    pub fn stub(mut self, stub: StubDef) -> Self {
        self.stubs.push(stub);
        self
    }
}

/// Declaration-order description of a new class.
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    parents: Vec<TypeId>,
    methods: Vec<MethodDef>,
}

impl ClassBuilder {
    /// Start declaring a class with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add an inheritance edge to an interface or another class.
    pub fn parent(mut self, parent: TypeId) -> Self {
        self.parents.push(parent);
        self
    }

    /// Declare a concrete method.
    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Convenience for [`ClassBuilder::method`] without building a
    /// [`MethodDef`] by hand.
    pub fn method_fn(
        self,
        name: impl Into<String>,
        arity: usize,
        body: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.method(MethodDef::new(name, arity, body))
    }
}

/// Owner of every declared type and its classification tag.
///
/// Append-only during the definition phase, read-only afterwards except for
/// the implementor-marking transition.
#[derive(Debug, Default)]
pub struct Registry {
    types: Vec<TypeDef>,
    by_name: HashMap<String, TypeId>,
    classifications: HashMap<TypeId, Classification>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define an interface. Parents must already be defined and must be
    /// interface-classified: extends edges are interface-to-interface.
    pub fn define_interface(
        &mut self,
        builder: InterfaceBuilder,
    ) -> Result<TypeId, DefinitionError> {
        let InterfaceBuilder {
            name,
            parents,
            stubs,
        } = builder;
        self.check_name_free(&name)?;
        for parent in &parents {
            let def = self
                .get(*parent)
                .ok_or(DefinitionError::UnknownParent(*parent))?;
            if !self.is_interface_id(*parent) {
                return Err(DefinitionError::NonInterfaceParent {
                    interface: name,
                    parent: def.name.clone(),
                });
            }
        }
        check_unique_members(&name, stubs.iter().map(|s| s.name.as_str()))?;

        let id = TypeId::from_index(self.types.len());
        debug!(interface = %name, %id, parents = parents.len(), stubs = stubs.len(), "declared interface");
        self.by_name.insert(name.clone(), id);
        self.classifications.insert(id, Classification::Interface);
        self.types.push(TypeDef {
            id,
            name,
            parents,
            stubs,
            methods: Vec::new(),
        });
        Ok(id)
    }

    /// Define a class. Parents must already be defined; they may be
    /// interfaces (implements edges) or classes.
    pub fn define_class(&mut self, builder: ClassBuilder) -> Result<TypeId, DefinitionError> {
        let ClassBuilder {
            name,
            parents,
            methods,
        } = builder;
        self.check_name_free(&name)?;
        for parent in &parents {
            if self.get(*parent).is_none() {
                return Err(DefinitionError::UnknownParent(*parent));
            }
        }
        check_unique_members(&name, methods.iter().map(|m| m.name.as_str()))?;

        let id = TypeId::from_index(self.types.len());
        debug!(class = %name, %id, parents = parents.len(), methods = methods.len(), "declared class");
        self.by_name.insert(name.clone(), id);
        self.classifications.insert(id, Classification::Class);
        self.types.push(TypeDef {
            id,
            name,
            parents,
            stubs: Vec::new(),
            methods,
        });
        Ok(id)
    }

    /// The descriptor for `id`, if issued by this registry.
    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.index())
    }

    /// Look a type up by declared name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// The declared name of `id`.
    pub fn name_of(&self, id: TypeId) -> Option<&str> {
        self.get(id).map(|d| d.name.as_str())
    }

    /// The classification tag of `id`.
    pub fn classification(&self, id: TypeId) -> Option<Classification> {
        self.classifications.get(&id).copied()
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Transition a class to verified implementor.
    ///
    /// This is the single post-definition state mutation in the engine; it
    /// is performed by `assert_implements` and is terminal.
    pub fn mark_implementor(&mut self, id: TypeId) -> Result<(), InvalidArgumentError> {
        match self.classification(id) {
            None => Err(InvalidArgumentError::UnknownType(id)),
            Some(Classification::Interface) => Err(InvalidArgumentError::InterfaceSubject {
                type_name: self.name_of(id).unwrap_or_default().to_string(),
            }),
            Some(_) => {
                debug!(class = %self.name_of(id).unwrap_or_default(), %id, "marked verified implementor");
                self.classifications.insert(id, Classification::Implementor);
                Ok(())
            }
        }
    }

    /// Construct an instance of `id`.
    ///
    /// Interfaces are rejected at construction time.
    pub fn instantiate(&self, id: TypeId) -> Result<Instance, IfaceError> {
        match self.classification(id) {
            None => Err(InvalidArgumentError::UnknownType(id).into()),
            Some(Classification::Interface) => Err(InstantiationError {
                type_name: self.name_of(id).unwrap_or_default().to_string(),
            }
            .into()),
            Some(_) => Ok(Instance { class: id }),
        }
    }

    /// Concrete method body declared directly on `id`, if any.
    pub fn method_on(&self, id: TypeId, name: &str) -> Option<&MethodFn> {
        self.get(id).and_then(|d| d.method(name)).map(|m| &m.body)
    }

    fn check_name_free(&self, name: &str) -> Result<(), DefinitionError> {
        if self.by_name.contains_key(name) {
            return Err(DefinitionError::DuplicateTypeName(name.to_string()));
        }
        Ok(())
    }

    fn is_interface_id(&self, id: TypeId) -> bool {
        matches!(self.classification(id), Some(Classification::Interface))
    }
}

fn check_unique_members<'a>(
    type_name: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), DefinitionError> {
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(DefinitionError::DuplicateMember {
                type_name: type_name.to_string(),
                member: name.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shape(reg: &mut Registry) -> TypeId {
        reg.define_interface(InterfaceBuilder::new("Shape").stub(StubDef::new("area", 0)))
            .unwrap()
    }

    #[test]
    fn define_and_look_up() {
        let mut reg = Registry::new();
        let id = shape(&mut reg);
        assert_eq!(reg.lookup("Shape"), Some(id));
        assert_eq!(reg.name_of(id), Some("Shape"));
        assert_eq!(reg.classification(id), Some(Classification::Interface));
        assert_eq!(reg.len(), 1);
        assert!(!reg.is_empty());
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut reg = Registry::new();
        shape(&mut reg);
        let err = reg
            .define_class(ClassBuilder::new("Shape"))
            .unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateTypeName(_)));
    }

    #[test]
    fn interface_parent_must_be_interface() {
        let mut reg = Registry::new();
        let base = reg.define_class(ClassBuilder::new("Base")).unwrap();
        let err = reg
            .define_interface(InterfaceBuilder::new("Shape").extends(base))
            .unwrap_err();
        assert!(matches!(err, DefinitionError::NonInterfaceParent { .. }));
    }

    #[test]
    fn duplicate_stub_rejected() {
        let mut reg = Registry::new();
        let err = reg
            .define_interface(
                InterfaceBuilder::new("Shape")
                    .stub(StubDef::new("area", 0))
                    .stub(StubDef::new("area", 1)),
            )
            .unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateMember { .. }));
    }

    #[test]
    fn class_parents_may_mix_interfaces_and_classes() {
        let mut reg = Registry::new();
        let iface = shape(&mut reg);
        let base = reg.define_class(ClassBuilder::new("Base")).unwrap();
        let id = reg
            .define_class(ClassBuilder::new("Circle").parent(iface).parent(base))
            .unwrap();
        assert_eq!(reg.get(id).unwrap().parents, vec![iface, base]);
        assert_eq!(reg.classification(id), Some(Classification::Class));
    }

    #[test]
    fn instantiate_rejects_interfaces() {
        let mut reg = Registry::new();
        let iface = shape(&mut reg);
        let err = reg.instantiate(iface).unwrap_err();
        assert!(matches!(err, IfaceError::Instantiation(_)));
        assert!(err.to_string().contains("Shape"));
    }

    #[test]
    fn instantiate_class_resolves_back() {
        let mut reg = Registry::new();
        let circle = reg
            .define_class(
                ClassBuilder::new("Circle").method_fn("area_body", 0, |_| json!(12.5)),
            )
            .unwrap();
        let instance = reg.instantiate(circle).unwrap();
        assert_eq!(instance.class(), circle);
        assert!(reg.method_on(circle, "area_body").is_some());
    }

    #[test]
    fn mark_implementor_transitions_class_only() {
        let mut reg = Registry::new();
        let iface = shape(&mut reg);
        let circle = reg.define_class(ClassBuilder::new("Circle").parent(iface)).unwrap();

        assert!(reg.mark_implementor(iface).is_err());
        reg.mark_implementor(circle).unwrap();
        assert_eq!(reg.classification(circle), Some(Classification::Implementor));
        // Terminal: marking again is a no-op transition to the same state.
        reg.mark_implementor(circle).unwrap();
        assert_eq!(reg.classification(circle), Some(Classification::Implementor));
    }

    #[test]
    fn unknown_parent_rejected() {
        let mut reg = Registry::new();
        let foreign = {
            let mut other = Registry::new();
            shape(&mut other);
            other.define_class(ClassBuilder::new("Stray")).unwrap()
        };
        // `foreign` indexes past the end of this registry.
        let err = reg
            .define_class(ClassBuilder::new("Orphan").parent(foreign))
            .unwrap_err();
        assert!(matches!(err, DefinitionError::UnknownParent(_)));
    }
}
