//! Interface conformance data model.
//!
//! This crate is the bottom layer of the engine: it holds the declared-type
//! registry, the stub/body method descriptors, and the error taxonomy. The
//! graph and conformance layers are built on top of it and never bypass the
//! registry.
//!
//! ## Key Types
//!
//! - [`Registry`] — owns every declared type and its classification tag
//! - [`TypeId`] / [`Subject`] — opaque type identity, query subject
//! - [`StubDef`] / [`MethodDef`] — interface stub and implementor body
//! - [`Classification`] — Interface | Class | Implementor state machine
//! - [`IfaceError`] — umbrella over the conformance error taxonomy

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod errors;
mod ids;
mod method;
mod registry;
mod typedef;

pub use errors::{
    ConformanceDefect, ConformanceError, DefinitionError, IfaceError, IfaceResult,
    InstantiationError, InvalidArgumentError,
};
pub use ids::TypeId;
pub use method::{MethodDef, MethodFn, Predicate, StubDef, Value};
pub use registry::{ClassBuilder, Instance, InterfaceBuilder, Registry};
pub use typedef::{Classification, Subject, TypeDef};
