//! Target ownership between fields of one declaring type.

use delegation::decl::{DelegateAnnotation, FieldDecl};
use delegation::diagnostics::DiagnosticKind;
use delegation::symbols::{MemberBuilder, SymbolTable};
use rstest::rstest;

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::fixtures::*;
use crate::helpers::forward_assertions::*;

#[test]
fn test_explicit_claims_conflict_first_field_wins() {
    let base = pizza_kitchen(&[]);
    let ipizza = base.ty("Demo.Tests.IPizza");
    let kitchen = base.declaring;
    let scenario = base
        .field(FieldDecl::new(kitchen, "_f1", ipizza).annotate(DelegateAnnotation::new().target(ipizza)))
        .field(FieldDecl::new(kitchen, "_f2", ipizza).annotate(DelegateAnnotation::new().target(ipizza)));

    let resolved = scenario.resolve_type();

    let conflicts = of_kind(&resolved, DiagnosticKind::DuplicateTargetOwnership);
    assert_eq!(conflicts.len(), 1);
    assert!(conflicts[0].message.contains("'_f1' and '_f2'"));
    assert_eq!(field_decls(&resolved, "_f1").len(), 2);
    assert!(field_decls(&resolved, "_f2").is_empty());
}

#[rstest]
#[case::explicit_first(true)]
#[case::implicit_first(false)]
fn test_explicit_claim_beats_implicit_silently(#[case] explicit_first: bool) {
    let base = pizza_kitchen(&[]);
    let ipizza = base.ty("Demo.Tests.IPizza");
    let kitchen = base.declaring;

    let explicit = FieldDecl::new(kitchen, "_explicit", ipizza).annotate(DelegateAnnotation::new().target(ipizza));
    let implicit = FieldDecl::new(kitchen, "_implicit", ipizza).annotate(DelegateAnnotation::new());
    let scenario = if explicit_first {
        base.field(explicit).field(implicit)
    } else {
        base.field(implicit).field(explicit)
    };

    let resolved = scenario.resolve_type();

    assert_no_diagnostics(&resolved);
    assert_eq!(field_decls(&resolved, "_explicit").len(), 2);
    assert!(resolved.field("_implicit").is_none());
}

#[test]
fn test_lost_claim_only_drops_that_target() {
    let mut table = SymbolTable::new();
    let int = table.named("int");
    let ipizza = table
        .interface("Demo.IPizza")
        .unwrap()
        .with(MemberBuilder::method("Slices", int))
        .finish();
    let ioven = table
        .interface("Demo.IOven")
        .unwrap()
        .with(MemberBuilder::method("Heat", int).param("degrees", int))
        .finish();
    let pizza_oven = table
        .class("Demo.PizzaOven")
        .unwrap()
        .implements(ipizza)
        .implements(ioven)
        .finish();
    let kitchen = table
        .class("Demo.Kitchen")
        .unwrap()
        .implements(ipizza)
        .implements(ioven)
        .finish();

    let scenario = Scenario::new(table, kitchen)
        .field(FieldDecl::new(kitchen, "_pizza", ipizza).annotate(DelegateAnnotation::new()))
        .field(FieldDecl::new(kitchen, "_oven", pizza_oven).annotate(DelegateAnnotation::new()));

    let resolved = scenario.resolve_type();

    assert_eq!(kinds(&resolved), vec![DiagnosticKind::DuplicateTargetOwnership]);
    assert_eq!(
        field_decls(&resolved, "_pizza")
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Slices"]
    );
    assert_eq!(
        field_decls(&resolved, "_oven")
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Heat"]
    );
}

#[test]
fn test_explicit_claim_takes_over_inferred_target() {
    let mut table = SymbolTable::new();
    let int = table.named("int");
    let ia = table
        .interface("Demo.IA")
        .unwrap()
        .with(MemberBuilder::method("A", int))
        .finish();
    let ib = table
        .interface("Demo.IB")
        .unwrap()
        .with(MemberBuilder::method("B", int))
        .finish();
    let both_impl = table
        .class("Demo.BothImpl")
        .unwrap()
        .implements(ia)
        .implements(ib)
        .finish();
    let host = table
        .class("Demo.Host")
        .unwrap()
        .implements(ia)
        .implements(ib)
        .finish();

    // `_inferred` claims IA and IB implicitly; `_explicit` upgrades IB.
    let scenario = Scenario::new(table, host)
        .field(FieldDecl::new(host, "_inferred", both_impl).annotate(DelegateAnnotation::new()))
        .field(FieldDecl::new(host, "_explicit", both_impl).annotate(DelegateAnnotation::new().target(ib)));

    let resolved = scenario.resolve_type();

    assert_no_diagnostics(&resolved);
    assert_eq!(decl_names(&resolved), vec!["A", "B"]);
    assert_eq!(field_decls(&resolved, "_explicit")[0].name, "B");
}
