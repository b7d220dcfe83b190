//! Assertion helpers over forwarding declarations and rendered text.

use delegation::resolve::{ForwardingDecl, TypeResolution};

/// Names of every forwarder, in generation order.
pub fn decl_names(resolution: &TypeResolution) -> Vec<&str> {
    resolution.decls().map(|d| d.name.as_str()).collect()
}

/// Forwarders generated for one field.
pub fn field_decls<'a>(resolution: &'a TypeResolution, field: &str) -> Vec<&'a ForwardingDecl> {
    resolution
        .field(field)
        .map(|f| f.decls().collect())
        .unwrap_or_default()
}

/// The single forwarder with this name.
pub fn decl_named<'a>(resolution: &'a TypeResolution, name: &str) -> &'a ForwardingDecl {
    let matches: Vec<_> = resolution.decls().filter(|d| d.name == name).collect();
    assert_eq!(matches.len(), 1, "expected exactly one forwarder named {name}");
    matches[0]
}

/// Rendered lines with indentation stripped.
pub fn trimmed_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// Rendered member lines (everything that forwards through `this.`).
pub fn member_lines(text: &str) -> Vec<&str> {
    trimmed_lines(text)
        .into_iter()
        .filter(|l| l.contains("this."))
        .collect()
}
