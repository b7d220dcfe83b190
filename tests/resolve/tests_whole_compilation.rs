//! Whole-compilation resolution and configuration.

use delegation::decl::{DelegateAnnotation, FieldDecl};
use delegation::diagnostics::DiagnosticKind;
use delegation::symbols::{MemberBuilder, SymbolTable, TypeId, TypeKind};
use delegation::{DelegationConfig, DelegationError, EmitOptions, render_resolution, resolve_all};

use crate::helpers::fixtures::*;

/// `count` holders, each delegating one of two interfaces; fields are
/// interleaved so grouping has to restore per-type order.
fn many_holders(count: usize) -> (SymbolTable, Vec<FieldDecl>, Vec<TypeId>) {
    let mut table = SymbolTable::new();
    let int = table.named("int");
    let left = table
        .interface("Demo.ILeft")
        .unwrap()
        .with(MemberBuilder::method("Left", int).param("x", int))
        .finish();
    let right = table
        .interface("Demo.IRight")
        .unwrap()
        .with(MemberBuilder::property("Right", int).get().set())
        .finish();

    let holders: Vec<TypeId> = (0..count)
        .map(|i| {
            table
                .class(&format!("Demo.Holder{i}"))
                .unwrap()
                .implements(left)
                .implements(right)
                .finish()
        })
        .collect();

    let mut fields = Vec::new();
    for holder in &holders {
        fields.push(FieldDecl::new(*holder, "_left", left).annotate(DelegateAnnotation::new()));
    }
    for holder in &holders {
        fields.push(
            FieldDecl::new(*holder, "_right", right).annotate(DelegateAnnotation::new().implement_explicitly(true)),
        );
    }
    (table, fields, holders)
}

#[test]
fn test_parallel_and_sequential_resolution_agree() {
    let (table, fields, _) = many_holders(24);
    let sequential = DelegationConfig {
        parallel: false,
        ..DelegationConfig::default()
    };

    let a = resolve_all(&table, &fields, &DelegationConfig::default()).unwrap();
    let b = resolve_all(&table, &fields, &sequential).unwrap();

    assert_eq!(a, b);
    assert_eq!(
        render_resolution(&table, &a, &EmitOptions::default()),
        render_resolution(&table, &b, &EmitOptions::default())
    );
}

#[test]
fn test_types_in_first_appearance_order() {
    let (table, fields, holders) = many_holders(5);
    let resolution = resolve_all(&table, &fields, &DelegationConfig::default()).unwrap();

    let order: Vec<TypeId> = resolution.types.iter().map(|t| t.declaring_type).collect();
    assert_eq!(order, holders);
    for ty in &resolution.types {
        let names: Vec<&str> = ty.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["_left", "_right"]);
    }
    assert_eq!(resolution.decl_count(), 10);
    assert!(!resolution.has_errors());
}

#[test]
fn test_unknown_type_aborts_resolution() {
    let (table, mut fields, holders) = many_holders(2);
    fields.push(FieldDecl::new(holders[0], "_ghost", TypeId::new(9_999)));

    let err = resolve_all(&table, &fields, &DelegationConfig::default()).unwrap_err();
    assert_eq!(err, DelegationError::UnknownType(TypeId::new(9_999)));
}

#[test]
fn test_config_from_options_controls_resolution() {
    let mut table = SymbolTable::new();
    let string = table.named("string");
    let ithing = table
        .interface("Demo.IThing")
        .unwrap()
        .with(MemberBuilder::method("Describe", string))
        .finish();
    let record = table.declare("Demo.Record", TypeKind::Struct).unwrap();
    table.edit(record).unwrap().implements(ithing).finish();

    let scenario =
        Scenario::new(table, record).field(FieldDecl::new(record, "_thing", ithing).nullable().annotate(DelegateAnnotation::new()));

    let defaults = scenario.resolve_type();
    assert!(defaults.is_empty());
    assert!(defaults.diagnostics.is_empty());

    let config = DelegationConfig::from_options([
        ("delegation.only_classes", "false"),
        ("delegation.report_nullable", "false"),
    ])
    .unwrap();
    let resolved = scenario.resolve_type_with(&config);
    assert_eq!(resolved.decls().count(), 1);
    assert!(resolved.diagnostics.is_empty());

    let config = DelegationConfig::from_options([("delegation.only_classes", "false")]).unwrap();
    let resolved = scenario.resolve_type_with(&config);
    assert_eq!(resolved.diagnostics[0].kind, DiagnosticKind::NullableDelegateField);
}

#[test]
fn test_resolution_is_repeatable() {
    let scenario = no_dispose_stream();
    let config = DelegationConfig::default();
    assert_eq!(scenario.resolve_all(&config), scenario.resolve_all(&config));
}
