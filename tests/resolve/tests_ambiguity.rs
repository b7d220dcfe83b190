//! Qualification forced by clashing interface members.

use delegation::decl::{DelegateAnnotation, FieldDecl};
use delegation::resolve::Qualifier;
use delegation::symbols::{MemberBuilder, SymbolTable};

use crate::helpers::diagnostic_helpers::*;
use crate::helpers::fixtures::*;
use crate::helpers::forward_assertions::*;

#[test]
fn test_clashing_member_is_qualified_without_flag() {
    let scenario = ambiguous();
    let resolved = scenario.resolve_type();
    let ia = scenario.ty("Demo.IA");

    assert_no_diagnostics(&resolved);
    assert_eq!(decl_named(&resolved, "Get").qualifier, Qualifier::Explicit(ia));
    assert_eq!(decl_named(&resolved, "Name").qualifier, Qualifier::Plain);
}

#[test]
fn test_same_result_type_does_not_force_qualification() {
    let mut table = SymbolTable::new();
    let int = table.named("int");
    let ia = table
        .interface("Demo.IA")
        .unwrap()
        .with(MemberBuilder::method("Get", int).param("key", int))
        .finish();
    let ib = table
        .interface("Demo.IB")
        .unwrap()
        .with(MemberBuilder::method("Get", int).param("key", int))
        .finish();
    let both = table.class("Demo.Both").unwrap().implements(ia).implements(ib).finish();

    let scenario =
        Scenario::new(table, both).field(FieldDecl::new(both, "_a", ia).annotate(DelegateAnnotation::new().target(ia)));
    let resolved = scenario.resolve_type();

    assert_eq!(decl_named(&resolved, "Get").qualifier, Qualifier::Plain);
}

#[test]
fn test_different_parameters_do_not_clash() {
    let mut table = SymbolTable::new();
    let int = table.named("int");
    let long = table.named("long");
    let ia = table
        .interface("Demo.IA")
        .unwrap()
        .with(MemberBuilder::method("Get", int).param("key", int))
        .finish();
    let ib = table
        .interface("Demo.IB")
        .unwrap()
        .with(MemberBuilder::method("Get", long).param("key", long))
        .finish();
    let both = table.class("Demo.Both").unwrap().implements(ia).implements(ib).finish();

    let scenario =
        Scenario::new(table, both).field(FieldDecl::new(both, "_a", ia).annotate(DelegateAnnotation::new().target(ia)));
    let resolved = scenario.resolve_type();

    assert_eq!(decl_named(&resolved, "Get").qualifier, Qualifier::Plain);
}

#[test]
fn test_clash_through_inherited_interface() {
    let mut table = SymbolTable::new();
    let int = table.named("int");
    let string = table.named("string");
    let ia = table
        .interface("Demo.IA")
        .unwrap()
        .with(MemberBuilder::property("Current", int).get())
        .finish();
    let iparent = table
        .interface("Demo.IParent")
        .unwrap()
        .with(MemberBuilder::property("Current", string).get())
        .finish();
    let ichild = table.interface("Demo.IChild").unwrap().implements(iparent).finish();
    let base = table.class("Demo.Base").unwrap().implements(ichild).finish();
    let host = table.class("Demo.Host").unwrap().extends(base).implements(ia).finish();

    let scenario =
        Scenario::new(table, host).field(FieldDecl::new(host, "_a", ia).annotate(DelegateAnnotation::new().target(ia)));
    let resolved = scenario.resolve_type();

    assert_eq!(decl_named(&resolved, "Current").qualifier, Qualifier::Explicit(ia));
}
