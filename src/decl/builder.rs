//! Building [`DelegationField`]s from raw declarations.
//!
//! Resolves the effective target list of one field: explicit targets are
//! checked for convertibility, missing ones are inferred from the field's
//! type. Flags fall back from per-target mention to member-level default to
//! `false`.

use indexmap::{IndexMap, IndexSet};

use super::field::{DelegateFlag, DelegationField, FieldDecl, FieldTarget, FlagScope};
use crate::config::DelegationConfig;
use crate::diagnostics::DiagnosticCollector;
use crate::error::Result;
use crate::symbols::{SymbolHost, TypeId, TypeKind};

/// Flags attached to one explicit mention of a target type.
#[derive(Clone, Copy, Debug)]
struct Mention {
    include_virtual: Option<bool>,
    implement_explicitly: Option<bool>,
}

/// Targets inferred for a field that lists none.
///
/// Every interface the field type implements, then its base class when that
/// base is not the root (it has a base of its own), then the field type
/// itself.
pub fn default_targets<H: SymbolHost + ?Sized>(host: &H, field_type: TypeId) -> IndexSet<TypeId> {
    let mut targets = host.all_interfaces(field_type);
    if let Some(base) = host.base_type(field_type) {
        if host.base_type(base).is_some() {
            targets.insert(base);
        }
    }
    targets.insert(field_type);
    targets
}

/// Normalize one declaration.
///
/// Reports TargetNotImplemented, DeclaringTypeMissingTarget, ConflictingFlag,
/// FlagWithoutApplicableTarget, NullableDelegateField and NoMatchingTarget.
/// Fails only when the declaration refers to ids the host does not know.
pub fn build_field<H: SymbolHost + ?Sized>(
    host: &H,
    decl: &FieldDecl,
    config: &DelegationConfig,
    diagnostics: &mut DiagnosticCollector,
) -> Result<DelegationField> {
    host.expect_type(decl.declaring_type)?;
    host.expect_type(decl.field_type)?;

    if decl.nullable && config.report_nullable {
        diagnostics.nullable_delegate_field(decl);
    }

    let mut mentions: IndexMap<TypeId, Mention> = IndexMap::new();
    let mut default_virtual = None;
    let mut default_explicit = None;

    for annotation in &decl.annotations {
        if annotation.targets.is_empty() {
            merge_default(&mut default_virtual, annotation.include_virtual, DelegateFlag::IncludeVirtual, decl, diagnostics);
            merge_default(
                &mut default_explicit,
                annotation.implement_explicitly,
                DelegateFlag::ImplementExplicitly,
                decl,
                diagnostics,
            );
            continue;
        }

        let mut has_class = false;
        let mut has_interface = false;
        for ty in &annotation.targets {
            if host.expect_type(*ty)?.kind == TypeKind::Interface {
                has_interface = true;
            } else {
                has_class = true;
            }
            mentions.entry(*ty).or_insert(Mention {
                include_virtual: annotation.include_virtual,
                implement_explicitly: annotation.implement_explicitly,
            });
        }

        for flag in [DelegateFlag::IncludeVirtual, DelegateFlag::ImplementExplicitly] {
            let relevant = match flag {
                DelegateFlag::IncludeVirtual => has_class,
                DelegateFlag::ImplementExplicitly => has_interface,
            };
            if !relevant && annotation.flag(flag).is_some() {
                diagnostics.flag_without_applicable_target(decl, flag, FlagScope::Annotation);
            }
        }
    }

    let is_explicit = !mentions.is_empty();
    let mut targets = Vec::new();

    if is_explicit {
        for (ty, mention) in &mentions {
            if !host.is_convertible_to(decl.field_type, *ty) {
                diagnostics.target_not_implemented(decl, host.type_name(decl.field_type), host.type_name(*ty));
                continue;
            }
            if !host.is_subtype_of(decl.declaring_type, *ty) {
                diagnostics.declaring_type_missing_target(decl, host.type_name(decl.declaring_type), host.type_name(*ty));
            }
            targets.push(FieldTarget {
                ty: *ty,
                include_virtual: mention.include_virtual.or(default_virtual).unwrap_or(false),
                implement_explicitly: mention.implement_explicitly.or(default_explicit).unwrap_or(false),
            });
        }
    } else {
        for ty in default_targets(host, decl.field_type) {
            let delegable = matches!(host.type_kind(ty), Some(TypeKind::Class | TypeKind::Interface));
            if !delegable || !host.is_subtype_of(decl.declaring_type, ty) {
                tracing::trace!(field = %decl.name, target = host.type_name(ty), "default target not inherited, skipped");
                continue;
            }
            targets.push(FieldTarget {
                ty,
                include_virtual: default_virtual.unwrap_or(false),
                implement_explicitly: default_explicit.unwrap_or(false),
            });
        }
    }

    if targets.is_empty() {
        diagnostics.no_matching_target(decl, host.type_name(decl.declaring_type));
    } else {
        let any_class = targets.iter().any(|t| !host.is_interface(t.ty));
        let any_interface = targets.iter().any(|t| host.is_interface(t.ty));
        if default_virtual.is_some() && !any_class {
            diagnostics.flag_without_applicable_target(decl, DelegateFlag::IncludeVirtual, FlagScope::Field);
        }
        if default_explicit.is_some() && !any_interface {
            diagnostics.flag_without_applicable_target(decl, DelegateFlag::ImplementExplicitly, FlagScope::Field);
        }
    }

    tracing::debug!(
        field = %decl.name,
        explicit = is_explicit,
        targets = targets.len(),
        "built delegation field"
    );

    Ok(DelegationField {
        decl: decl.clone(),
        is_explicit,
        targets,
        default_include_virtual: default_virtual,
        default_implement_explicitly: default_explicit,
    })
}

/// Record a member-level default; a contradicting later value is reported
/// and the first one kept.
fn merge_default(
    slot: &mut Option<bool>,
    value: Option<bool>,
    flag: DelegateFlag,
    decl: &FieldDecl,
    diagnostics: &mut DiagnosticCollector,
) {
    match (*slot, value) {
        (None, Some(v)) => *slot = Some(v),
        (Some(existing), Some(v)) if existing != v => diagnostics.conflicting_flag(decl, flag),
        _ => {}
    }
}
