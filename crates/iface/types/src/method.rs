//! Stub and body method descriptors.
//!
//! A stub is an interface-declared calling convention: a name, an arity
//! (receiver excluded), optional documentation, and optional pre/post
//! condition predicates. A body is the concrete callable an implementor
//! supplies for a stub.

use std::fmt;
use std::sync::Arc;

/// Dynamic value passed to and returned from method bodies.
pub use serde_json::Value;

/// A concrete method body.
pub type MethodFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A pre- or post-condition over the invocation arguments.
/// Returning `false` is a contract violation.
pub type Predicate = Arc<dyn Fn(&[Value]) -> bool + Send + Sync>;

/// An interface-declared method with no executable implementation.
///
/// Stubs are immutable once the owning interface is defined. The optional
/// `body_binding` is the explicit per-stub override name; when absent the
/// conformance layer derives it from the stub name (`area` → `area_body`).
#[derive(Clone)]
pub struct StubDef {
    /// Method name as declared on the interface.
    pub name: String,
    /// Formal parameter count, excluding the implicit receiver.
    pub arity: usize,
    /// Descriptive text carried over to implementors.
    pub doc: Option<String>,
    /// Pre-condition, evaluated against the invocation arguments.
    pub pre: Option<Predicate>,
    /// Post-condition, evaluated against the same arguments.
    pub post: Option<Predicate>,
    /// Explicit override name; `None` means "derive from the stub name".
    pub body_binding: Option<String>,
}

impl StubDef {
    /// Declare a stub with the given name and arity.
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            doc: None,
            pre: None,
            post: None,
            body_binding: None,
        }
    }

    /// Attach a documentation string.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Attach a pre-condition predicate.
    pub fn with_pre(mut self, pre: impl Fn(&[Value]) -> bool + Send + Sync + 'static) -> Self {
        self.pre = Some(Arc::new(pre));
        self
    }

    /// Attach a post-condition predicate.
    pub fn with_post(mut self, post: impl Fn(&[Value]) -> bool + Send + Sync + 'static) -> Self {
        self.post = Some(Arc::new(post));
        self
    }

    /// Bind the stub to an explicitly named body method instead of the
    /// derived name.
    pub fn with_body_binding(mut self, name: impl Into<String>) -> Self {
        self.body_binding = Some(name.into());
        self
    }
}

impl fmt::Debug for StubDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("doc", &self.doc)
            .field("pre", &self.pre.is_some())
            .field("post", &self.post.is_some())
            .field("body_binding", &self.body_binding)
            .finish()
    }
}

/// A concrete method supplied by a class.
#[derive(Clone)]
pub struct MethodDef {
    /// Method name as declared on the class.
    pub name: String,
    /// Formal parameter count, excluding the implicit receiver.
    pub arity: usize,
    /// The callable body.
    pub body: MethodFn,
}

impl MethodDef {
    /// Declare a concrete method.
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        body: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            body: Arc::new(body),
        }
    }
}

impl fmt::Debug for MethodDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stub_builder_chain() {
        let stub = StubDef::new("area", 0)
            .with_doc("surface area")
            .with_pre(|_| true)
            .with_post(|_| true)
            .with_body_binding("compute_area");
        assert_eq!(stub.name, "area");
        assert_eq!(stub.arity, 0);
        assert!(stub.pre.is_some());
        assert!(stub.post.is_some());
        assert_eq!(stub.body_binding.as_deref(), Some("compute_area"));
    }

    #[test]
    fn stub_debug_elides_callables() {
        let stub = StubDef::new("lt", 1).with_pre(|_| true);
        let rendered = format!("{:?}", stub);
        assert!(rendered.contains("pre: true"));
        assert!(rendered.contains("post: false"));
    }

    #[test]
    fn method_body_is_callable() {
        let m = MethodDef::new("area_body", 0, |_| json!(12.5));
        assert_eq!((m.body)(&[]), json!(12.5));
    }
}
