//! End-to-end scenarios for the conformance engine: protocol authors
//! define interfaces, implementors inherit and override, the assertion
//! reclassifies verified implementors.

use iface_conformance::{
    assert_implements, call, extends, implements, interface_names, interfaces, is_interface,
};
use iface_graph::{ancestor_names, ancestors};
use iface_types::{
    ClassBuilder, Classification, ConformanceDefect, IfaceError, InterfaceBuilder, MethodDef,
    Registry, StubDef, TypeId,
};
use serde_json::json;

fn define_shape(reg: &mut Registry) -> TypeId {
    reg.define_interface(
        InterfaceBuilder::new("Shape")
            .stub(StubDef::new("area", 0).with_doc("surface area of the shape")),
    )
    .unwrap()
}

#[test]
fn circle_implements_shape() {
    let mut reg = Registry::new();
    let shape = define_shape(&mut reg);
    let circle = reg
        .define_class(
            ClassBuilder::new("Circle")
                .parent(shape)
                .method(MethodDef::new("area_body", 0, |_| json!(12.57))),
        )
        .unwrap();

    let report = assert_implements(&mut reg, circle).unwrap();
    assert!(report.verified);

    let instance = reg.instantiate(circle).unwrap();
    assert!(implements(&reg, &instance, &[shape]));
    assert_eq!(interface_names(&reg, circle), vec!["Shape"]);
    assert_eq!(call(&reg, &instance, "area", &[]).unwrap(), json!(12.57));
}

#[test]
fn square_without_override_fails_naming_shape_and_area() {
    let mut reg = Registry::new();
    let shape = define_shape(&mut reg);
    let square = reg
        .define_class(ClassBuilder::new("Square").parent(shape))
        .unwrap();

    let err = assert_implements(&mut reg, square).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("Shape"));
    assert!(text.contains("area"));
    assert_eq!(reg.classification(square), Some(Classification::Class));
}

#[test]
fn interfaces_are_not_instantiable() {
    let mut reg = Registry::new();
    let shape = define_shape(&mut reg);
    let err = reg.instantiate(shape).unwrap_err();
    assert!(matches!(err, IfaceError::Instantiation(_)));
}

#[test]
fn sortable_extends_ordered_and_partial_override_fails() {
    let mut reg = Registry::new();
    let ordered = reg
        .define_interface(InterfaceBuilder::new("Ordered").stub(StubDef::new("lt", 1)))
        .unwrap();
    let sortable = reg
        .define_interface(
            InterfaceBuilder::new("Sortable")
                .extends(ordered)
                .stub(StubDef::new("sort_key", 0)),
        )
        .unwrap();
    assert!(extends(&reg, sortable, &[ordered]));

    // Only `lt` is overridden; the failure must name `sort_key`.
    let partial = reg
        .define_class(
            ClassBuilder::new("Partial")
                .parent(sortable)
                .method(MethodDef::new("lt_body", 1, |_| json!(true))),
        )
        .unwrap();
    let err = assert_implements(&mut reg, partial).unwrap_err();
    assert_eq!(err.defects().len(), 1);
    match &err.defects()[0] {
        ConformanceDefect::MissingOverride {
            interface, stub, ..
        } => {
            assert_eq!(interface, "Sortable");
            assert_eq!(stub, "sort_key");
        }
        other => panic!("expected missing override, got {other:?}"),
    }

    // Overriding both stubs (one directly, one via body name) conforms.
    let full = reg
        .define_class(
            ClassBuilder::new("Full")
                .parent(sortable)
                .method(MethodDef::new("lt", 1, |_| json!(true)))
                .method(MethodDef::new("sort_key_body", 0, |_| json!(0))),
        )
        .unwrap();
    let report = assert_implements(&mut reg, full).unwrap();
    assert!(report.verified);
    assert!(implements(&reg, full, &[sortable, ordered]));
}

#[test]
fn interface_predicates_across_the_graph() {
    let mut reg = Registry::new();
    let shape = define_shape(&mut reg);
    let circle = reg
        .define_class(
            ClassBuilder::new("Circle")
                .parent(shape)
                .method(MethodDef::new("area_body", 0, |_| json!(1))),
        )
        .unwrap();
    assert_implements(&mut reg, circle).unwrap();

    assert!(is_interface(&reg, shape));
    assert!(!is_interface(&reg, circle));
    let instance = reg.instantiate(circle).unwrap();
    assert!(!is_interface(&reg, &instance));

    assert!(!extends(&reg, shape, &[shape]));
    assert!(implements(&reg, circle, &[shape]));
}

#[test]
fn diamond_inheritance_checks_each_stub_once() {
    let mut reg = Registry::new();
    let ordered = reg
        .define_interface(InterfaceBuilder::new("Ordered").stub(StubDef::new("lt", 1)))
        .unwrap();
    let left = reg
        .define_interface(InterfaceBuilder::new("Left").extends(ordered))
        .unwrap();
    let right = reg
        .define_interface(InterfaceBuilder::new("Right").extends(ordered))
        .unwrap();
    let both = reg
        .define_class(
            ClassBuilder::new("Both")
                .parent(left)
                .parent(right)
                .method(MethodDef::new("lt_body", 1, |_| json!(true))),
        )
        .unwrap();

    // Ordered appears once, at its first-occurrence position.
    assert_eq!(
        interface_names(&reg, both),
        vec!["Left", "Ordered", "Right"]
    );
    let walk = ancestors(&reg, both, false);
    assert_eq!(
        walk.len(),
        walk.iter().collect::<std::collections::HashSet<_>>().len()
    );

    let report = assert_implements(&mut reg, both).unwrap();
    assert!(report.verified);
    // One inherited stub, checked once per declaring interface.
    assert_eq!(report.stubs_checked, 1);
}

#[test]
fn ancestor_names_include_class_side() {
    let mut reg = Registry::new();
    let shape = define_shape(&mut reg);
    let base = reg.define_class(ClassBuilder::new("Base")).unwrap();
    let circle = reg
        .define_class(ClassBuilder::new("Circle").parent(shape).parent(base))
        .unwrap();

    assert_eq!(
        ancestor_names(&reg, circle, false),
        vec!["Circle", "Shape", "Base"]
    );
    assert_eq!(ancestor_names(&reg, circle, true), vec!["Circle", "Base"]);
    assert_eq!(interface_names(&reg, circle), vec!["Shape"]);
}

#[test]
fn decorated_stub_names_resolve_through_body_marker() {
    let mut reg = Registry::new();
    let comparable = reg
        .define_interface(
            InterfaceBuilder::new("Comparable").stub(StubDef::new("__cmp__", 1)),
        )
        .unwrap();
    let version = reg
        .define_class(
            ClassBuilder::new("Version")
                .parent(comparable)
                .method(MethodDef::new("__cmp_body__", 1, |_| json!(0))),
        )
        .unwrap();
    let report = assert_implements(&mut reg, version).unwrap();
    assert!(report.verified);

    let instance = reg.instantiate(version).unwrap();
    assert_eq!(
        call(&reg, &instance, "__cmp__", &[json!("1.0")]).unwrap(),
        json!(0)
    );
}

#[test]
fn verified_classification_survives_further_queries() {
    let mut reg = Registry::new();
    let shape = define_shape(&mut reg);
    let circle = reg
        .define_class(
            ClassBuilder::new("Circle")
                .parent(shape)
                .method(MethodDef::new("area_body", 0, |_| json!(1))),
        )
        .unwrap();
    assert_implements(&mut reg, circle).unwrap();
    assert_eq!(reg.classification(circle), Some(Classification::Implementor));

    // Queries are pure; classification does not drift.
    let _ = interfaces(&reg, circle);
    let _ = ancestors(&reg, circle, false);
    assert_eq!(reg.classification(circle), Some(Classification::Implementor));
    assert!(implements(&reg, circle, &[shape]));
}
