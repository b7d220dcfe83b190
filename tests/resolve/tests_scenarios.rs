//! The reference delegation scenarios.

use delegation::diagnostics::DiagnosticKind;
use delegation::resolve::{ForwardAccess, ForwardKind, Qualifier};
use delegation::symbols::Accessibility;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::fixtures::*;
use crate::helpers::forward_assertions::*;

#[test]
fn test_explicit_interface_field_forwards_only_unimplemented_members() {
    let scenario = test_thing();
    let resolved = scenario.resolve_type();

    assert_no_diagnostics(&resolved);
    assert_eq!(decl_names(&resolved), vec!["PassThru"]);

    let ithing = scenario.ty("Demo.Tests.IThing");
    let decl = decl_named(&resolved, "PassThru");
    assert_eq!(decl.kind, ForwardKind::Method);
    assert_eq!(decl.qualifier, Qualifier::Explicit(ithing));
    assert_eq!(decl.expr.cast, ithing);
    assert_eq!(decl.expr.field, "_pizza");
    assert_eq!(
        decl.expr.access,
        ForwardAccess::Call {
            member: "PassThru".into(),
            args: vec!["a".into()],
        }
    );
}

#[test]
fn test_virtual_base_member_forwarded_as_override() {
    let scenario = derived_virt();
    let resolved = scenario.resolve_type();

    assert_no_diagnostics(&resolved);
    let decl = decl_named(&resolved, "Get");
    assert_eq!(decl.qualifier, Qualifier::Override);
    assert_eq!(decl.accessibility, Accessibility::Public);
    assert_eq!(decl.expr.cast, scenario.ty("Demo.Tests.BaseVirt"));
    assert_eq!(resolved.decls().count(), 1);
}

#[test]
fn test_stream_wrapper_forwards_abstract_and_virtual_members() {
    let scenario = no_dispose_stream();
    let resolved = scenario.resolve_type();

    // Both disposables are already implemented by Stream itself.
    let idle: Vec<&str> = of_kind(&resolved, DiagnosticKind::NoMemberDelegated)
        .iter()
        .map(|d| d.args[1].as_ref())
        .collect();
    assert_eq!(idle, vec!["System.IAsyncDisposable", "System.IDisposable"]);
    assert!(!resolved.diagnostics.iter().any(|d| d.is_error()));
    assert_eq!(resolved.diagnostics.len(), 2);

    let field = resolved.field("_baseStream").unwrap();
    let targets: Vec<_> = field
        .targets
        .iter()
        .map(|t| (scenario.table_name(t.target.ty), t.decls.len()))
        .collect();
    assert_eq!(
        targets,
        vec![
            ("System.IAsyncDisposable", 0),
            ("System.IDisposable", 0),
            ("System.MarshalByRefObject", 1),
            ("System.IO.Stream", 5),
        ]
    );

    assert_eq!(
        decl_names(&resolved),
        vec!["InitializeLifetimeService", "Read", "ReadByte", "DisposeAsync", "CanRead", "Position"]
    );
    assert!(resolved.decls().all(|d| d.qualifier == Qualifier::Override));

    let position = decl_named(&resolved, "Position");
    assert!(position.getter.is_some());
    assert!(position.setter.is_some());
    let can_read = decl_named(&resolved, "CanRead");
    assert!(can_read.setter.is_none());
}

#[test]
fn test_two_implicit_fields_conflict_on_same_interface() {
    let scenario = pizza_kitchen(&["_first", "_second"]);
    let resolved = scenario.resolve_type();

    assert_eq!(kinds(&resolved), vec![DiagnosticKind::DuplicateTargetOwnership]);
    let diagnostic = &resolved.diagnostics[0];
    let args: Vec<&str> = diagnostic.args.iter().map(|a| a.as_ref()).collect();
    assert_eq!(args, vec!["_first", "_second", "Demo.Tests.Kitchen", "Demo.Tests.IPizza"]);
    assert_eq!(diagnostic.span, scenario.fields[1].span);
    assert_eq!(diagnostic.related[0].span, scenario.fields[0].span);

    assert_eq!(
        field_decls(&resolved, "_first")
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Toppings", "Describe"]
    );
    assert!(resolved.field("_second").is_none());
}
