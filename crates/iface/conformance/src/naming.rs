//! Stub-to-body naming convention.

use iface_types::StubDef;

/// Derived body-method name for a stub name.
///
/// The `_body` marker is inserted before a trailing `__` pair so reserved
/// name decoration survives; otherwise it is appended:
///
/// ```text
/// area      =>   area_body
/// __cmp     => __cmp_body
/// __cmp__   => __cmp_body__
/// ```
pub fn body_method_name(stub_name: &str) -> String {
    if stub_name.len() < 3 || !stub_name.ends_with("__") {
        format!("{stub_name}_body")
    } else {
        let split = stub_name.len() - 2;
        format!("{}_body{}", &stub_name[..split], &stub_name[split..])
    }
}

/// The override name a stub binds to: its explicit binding when declared,
/// the derived body name otherwise.
pub fn stub_binding(stub: &StubDef) -> String {
    stub.body_binding
        .clone()
        .unwrap_or_else(|| body_method_name(&stub.name))
}
