//! Interface conformance verification.
//!
//! The top layer of the engine: classification queries, the boolean
//! predicates, the assertion entry point, and checked method invocation.
//!
//! ## Architecture
//!
//! ```text
//! iface-types        data model: registry, stubs, bodies, errors
//!     ↑
//! iface-graph        ancestor traversal, flatten/unique
//!     ↑
//! iface-conformance  is_interface / interfaces / extends / implements
//!                    assert_implements / call
//! ```
//!
//! A protocol author defines interfaces; an implementing class inherits
//! from them and supplies body overrides; `assert_implements` walks the
//! ancestor graph, checks every stub against a resolvable override, and on
//! success performs the one state transition in the engine: the class
//! becomes a verified implementor.
//!
//! ## Key Types
//!
//! - [`assert_implements`] — the assertion entry point
//! - [`ConformanceReport`] — structured outcome of an assertion
//! - [`extends`] / [`implements`] / [`is_interface`] — never-failing predicates
//! - [`interfaces`] / [`interface_names`] — ordered protocol sets
//! - [`call`] — stub-resolving invocation with pre/post-condition checks

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod assertion;
mod classify;
mod invoke;
mod naming;
mod predicates;
mod report;

pub use assertion::assert_implements;
pub use classify::{interface_names, interfaces, is_interface, resolve_override, ResolvedOverride};
pub use invoke::call;
pub use naming::{body_method_name, stub_binding};
pub use predicates::{extends, implements};
pub use report::ConformanceReport;
