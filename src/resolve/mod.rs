//! Delegation resolution: from annotated fields to forwarding declarations.
//!
//! Each declaring type is resolved on its own. Its fields are normalized
//! ([`build_field`]), folded in declaration order into a [`TargetRegistry`]
//! that settles ownership of every target type, and then every member of
//! every owned target runs through the [`MemberFilter`] and, if accepted,
//! [`synthesize`](synth::synthesize).
//!
//! ## Key Types
//!
//! - [`TargetRegistry`] - Target type -> owning field, explicit claims first
//! - [`MemberFilter`] - Ordered eligibility checks for one target's members
//! - [`ForwardingDecl`] - One generated member, ready for rendering
//! - [`TypeResolution`] / [`Resolution`] - Results per declaring type / compilation

pub mod ambiguity;
pub mod filter;
mod hidden;
mod registry;
pub mod synth;

pub use filter::{FilterDecision, MemberFilter, SkipReason};
pub use hidden::hidden_members;
pub use registry::{AssignOutcome, FieldId, ImplTarget, TargetRegistry};
pub use synth::{
    ForwardAccess, ForwardExpr, ForwardKind, ForwardedAccessor, ForwardingDecl, Qualifier, synthesize,
};

use indexmap::IndexMap;
use rayon::prelude::*;
use smol_str::SmolStr;

use crate::config::DelegationConfig;
use crate::decl::{DelegationField, FieldDecl, build_field};
use crate::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::error::{DelegationError, Result};
use crate::symbols::{SymbolHost, TypeId, TypeKind};

// ============================================================================
// RESULTS
// ============================================================================

/// Forwarders generated for one owned target of a field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct TargetForwarding {
    pub target: ImplTarget,
    pub kind: TypeKind,
    pub decls: Vec<ForwardingDecl>,
}

/// Everything generated on behalf of one field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct FieldForwarding {
    pub field: SmolStr,
    pub field_type: TypeId,
    pub is_explicit: bool,
    /// Owned targets, explicit ones first.
    pub targets: Vec<TargetForwarding>,
}

impl FieldForwarding {
    pub fn decls(&self) -> impl Iterator<Item = &ForwardingDecl> {
        self.targets.iter().flat_map(|t| t.decls.iter())
    }
}

/// Result for one declaring type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct TypeResolution {
    pub declaring_type: TypeId,
    /// Fields that own at least one target, in declaration order.
    pub fields: Vec<FieldForwarding>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TypeResolution {
    fn empty(declaring_type: TypeId) -> Self {
        Self {
            declaring_type,
            fields: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn decls(&self) -> impl Iterator<Item = &ForwardingDecl> {
        self.fields.iter().flat_map(|f| f.decls())
    }

    pub fn field(&self, name: &str) -> Option<&FieldForwarding> {
        self.fields.iter().find(|f| f.field == name)
    }

    /// No field owns a target, so nothing is rendered for this type.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Results for a whole compilation, in first-appearance order of the
/// declaring types.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Resolution {
    pub types: Vec<TypeResolution>,
}

impl Resolution {
    pub fn get(&self, declaring_type: TypeId) -> Option<&TypeResolution> {
        self.types.iter().find(|t| t.declaring_type == declaring_type)
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.types.iter().flat_map(|t| t.diagnostics.iter())
    }

    pub fn decl_count(&self) -> usize {
        self.types.iter().map(|t| t.decls().count()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics().any(|d| d.is_error())
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Resolve every delegation field of one declaring type.
///
/// `fields` must all belong to `declaring_type` and be in declaration order;
/// that order decides ownership conflicts.
pub fn resolve_type<H: SymbolHost + ?Sized>(
    host: &H,
    declaring_type: TypeId,
    fields: &[FieldDecl],
    config: &DelegationConfig,
) -> Result<TypeResolution> {
    let declaring = host.expect_type(declaring_type)?;
    if let Some(foreign) = fields.iter().find(|f| f.declaring_type != declaring_type) {
        return Err(DelegationError::ForeignField {
            field: foreign.name.to_string(),
            expected: declaring.name.to_string(),
        });
    }
    if config.only_classes && !declaring.is_class() {
        tracing::trace!(declaring = %declaring.name, "not a class, skipped");
        return Ok(TypeResolution::empty(declaring_type));
    }

    let mut diagnostics = DiagnosticCollector::new();
    let built = fields
        .iter()
        .map(|decl| build_field(host, decl, config, &mut diagnostics))
        .collect::<Result<Vec<_>>>()?;

    let registry = fold_targets(host, declaring_type, &built, &mut diagnostics);
    let hidden = hidden_members(host, declaring_type);
    let interfaces = host.all_interfaces(declaring_type);

    let mut forwarded = Vec::new();
    for (index, field) in built.iter().enumerate() {
        let owned = registry.targets_for(FieldId::from(index));
        if owned.is_empty() {
            continue;
        }

        let mut targets = Vec::with_capacity(owned.len());
        for target in owned {
            let target_kind = host.expect_type(target.ty)?.kind;
            let target_is_interface = target_kind == TypeKind::Interface;
            let filter = MemberFilter::new(host, declaring_type, target, &hidden);

            let mut decls = Vec::new();
            for member in host.members_of(target.ty) {
                if let FilterDecision::Forward { get, set } = filter.check(member) {
                    let ambiguous =
                        target_is_interface && ambiguity::requires_explicit(host, &interfaces, target.ty, member);
                    decls.push(synthesize(member, target, target_is_interface, &field.decl.name, get, set, ambiguous));
                }
            }

            tracing::debug!(
                field = %field.decl.name,
                target = host.type_name(target.ty),
                members = decls.len(),
                "target forwarded"
            );
            if decls.is_empty() {
                diagnostics.no_member_delegated(&field.decl, host.type_name(target.ty));
            }
            targets.push(TargetForwarding {
                target,
                kind: target_kind,
                decls,
            });
        }

        forwarded.push(FieldForwarding {
            field: field.decl.name.clone(),
            field_type: field.decl.field_type,
            is_explicit: field.is_explicit,
            targets,
        });
    }

    tracing::debug!(
        declaring = %declaring.name,
        fields = forwarded.len(),
        diagnostics = diagnostics.diagnostics().len(),
        "resolved declaring type"
    );

    Ok(TypeResolution {
        declaring_type,
        fields: forwarded,
        diagnostics: diagnostics.finish(),
    })
}

/// Fold fields into a registry in declaration order, reporting lost claims.
fn fold_targets<H: SymbolHost + ?Sized>(
    host: &H,
    declaring_type: TypeId,
    fields: &[DelegationField],
    diagnostics: &mut DiagnosticCollector,
) -> TargetRegistry {
    let mut registry = TargetRegistry::new();
    for (index, field) in fields.iter().enumerate() {
        let id = FieldId::from(index);
        for target in &field.targets {
            let outcome = registry.assign(
                target.ty,
                id,
                field.is_explicit,
                target.include_virtual,
                target.implement_explicitly,
            );
            match outcome {
                AssignOutcome::Conflict(owner) => diagnostics.duplicate_target_ownership(
                    &field.decl,
                    &fields[owner.index()].decl,
                    host.type_name(declaring_type),
                    host.type_name(target.ty),
                ),
                outcome => tracing::trace!(
                    field = %field.decl.name,
                    target = host.type_name(target.ty),
                    ?outcome,
                    "target claimed"
                ),
            }
        }
    }
    registry
}

/// Resolve every delegation field of a compilation.
///
/// Fields are grouped by declaring type in first-appearance order; groups
/// are independent and run on the rayon pool when `config.parallel` is set.
pub fn resolve_all<H: SymbolHost + Sync + ?Sized>(
    host: &H,
    fields: &[FieldDecl],
    config: &DelegationConfig,
) -> Result<Resolution> {
    let mut groups: IndexMap<TypeId, Vec<FieldDecl>> = IndexMap::new();
    for decl in fields {
        groups.entry(decl.declaring_type).or_default().push(decl.clone());
    }
    let groups: Vec<(TypeId, Vec<FieldDecl>)> = groups.into_iter().collect();

    tracing::debug!(types = groups.len(), fields = fields.len(), parallel = config.parallel, "resolving");

    let types = if config.parallel {
        groups
            .par_iter()
            .map(|(ty, decls)| resolve_type(host, *ty, decls, config))
            .collect::<Result<Vec<_>>>()?
    } else {
        groups
            .iter()
            .map(|(ty, decls)| resolve_type(host, *ty, decls, config))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(Resolution { types })
}
