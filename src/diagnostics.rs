//! Delegation diagnostics.
//!
//! This module provides the diagnostic types produced while resolving
//! delegation declarations. Nothing here is ever thrown: every problem is
//! collected and analysis continues with the offending target or field
//! dropped.

use std::sync::Arc;

use crate::base::{FileId, Span};
use crate::decl::{DelegateFlag, FieldDecl, FlagScope};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// Stable, machine-readable diagnostic kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    /// An explicitly named target is not reachable from the field's type.
    TargetNotImplemented,
    /// Two fields claim the same target with the same precedence.
    DuplicateTargetOwnership,
    /// Member-level default flags contradict each other.
    ConflictingFlag,
    /// The declaring type neither inherits nor implements an explicit target.
    DeclaringTypeMissingTarget,
    /// The field has no target left after filtering.
    NoMatchingTarget,
    /// A resolved target produced no forwarding member.
    NoMemberDelegated,
    /// A flag has no target of the kind it affects.
    FlagWithoutApplicableTarget,
    /// The field's type is nullable-annotated.
    NullableDelegateField,
}

impl DiagnosticKind {
    /// The stable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::TargetNotImplemented => codes::TARGET_NOT_IMPLEMENTED,
            DiagnosticKind::DuplicateTargetOwnership => codes::DUPLICATE_TARGET_OWNERSHIP,
            DiagnosticKind::ConflictingFlag => codes::CONFLICTING_FLAG,
            DiagnosticKind::DeclaringTypeMissingTarget => codes::DECLARING_TYPE_MISSING_TARGET,
            DiagnosticKind::NoMatchingTarget => codes::NO_MATCHING_TARGET,
            DiagnosticKind::NoMemberDelegated => codes::NO_MEMBER_DELEGATED,
            DiagnosticKind::FlagWithoutApplicableTarget => codes::FLAG_WITHOUT_APPLICABLE_TARGET,
            DiagnosticKind::NullableDelegateField => codes::NULLABLE_DELEGATE_FIELD,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::TargetNotImplemented
            | DiagnosticKind::DuplicateTargetOwnership
            | DiagnosticKind::ConflictingFlag
            | DiagnosticKind::DeclaringTypeMissingTarget => Severity::Error,
            DiagnosticKind::NoMatchingTarget
            | DiagnosticKind::NoMemberDelegated
            | DiagnosticKind::FlagWithoutApplicableTarget
            | DiagnosticKind::NullableDelegateField => Severity::Warning,
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The file containing the offending declaration.
    pub file: FileId,
    /// Location of the offending declaration.
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// Stable code (e.g., "E0001").
    pub code: &'static str,
    /// The rendered message.
    pub message: Arc<str>,
    /// Message parameters (field names, type names) in message order.
    pub args: Vec<Arc<str>>,
    /// Optional related information.
    pub related: Vec<RelatedInfo>,
}

/// Related information for a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct RelatedInfo {
    pub file: FileId,
    pub span: Span,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a diagnostic; severity and code follow from the kind.
    pub fn new(kind: DiagnosticKind, file: FileId, span: Span, message: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            file,
            span,
            severity: kind.severity(),
            code: kind.code(),
            message: message.into(),
            args: Vec::new(),
            related: Vec::new(),
        }
    }

    /// Append a message parameter.
    pub fn with_arg(mut self, arg: impl Into<Arc<str>>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add related information.
    pub fn with_related(mut self, info: RelatedInfo) -> Self {
        self.related.push(info);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes for delegation.
///
/// ## Code Ranges
///
/// - **E0001-E0099**: Errors; the affected target is dropped or left unsatisfied
/// - **W0001-W0099**: Warnings; generation proceeds
pub mod codes {
    // ========================================================================
    // ERRORS (E0001-E0099)
    // ========================================================================

    /// Explicit target not reachable from the field's type.
    pub const TARGET_NOT_IMPLEMENTED: &str = "E0001";
    /// Two fields claim the same target.
    pub const DUPLICATE_TARGET_OWNERSHIP: &str = "E0002";
    /// Contradictory member-level flags.
    pub const CONFLICTING_FLAG: &str = "E0003";
    /// Declaring type does not derive from an explicit target.
    pub const DECLARING_TYPE_MISSING_TARGET: &str = "E0004";

    // ========================================================================
    // WARNINGS (W0001-W0099)
    // ========================================================================

    /// Field matches no target.
    pub const NO_MATCHING_TARGET: &str = "W0001";
    /// Target produced no members.
    pub const NO_MEMBER_DELEGATED: &str = "W0002";
    /// Flag without a target it could affect.
    pub const FLAG_WITHOUT_APPLICABLE_TARGET: &str = "W0003";
    /// Nullable field.
    pub const NULLABLE_DELEGATE_FIELD: &str = "W0004";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during delegation resolution.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(code = diagnostic.code, message = %diagnostic.message, "diagnostic");
        self.diagnostics.push(diagnostic);
    }

    fn at(field: &FieldDecl, kind: DiagnosticKind, message: String) -> Diagnostic {
        Diagnostic::new(kind, field.file, field.span, message)
    }

    /// Add a target-not-implemented error.
    pub fn target_not_implemented(&mut self, field: &FieldDecl, field_type: &str, target: &str) {
        self.add(
            Self::at(
                field,
                DiagnosticKind::TargetNotImplemented,
                format!(
                    "field '{}' of type '{}' does not implement '{}'",
                    field.name, field_type, target
                ),
            )
            .with_arg(field.name.as_str())
            .with_arg(field_type)
            .with_arg(target),
        );
    }

    /// Add a declaring-type-missing-target error.
    pub fn declaring_type_missing_target(&mut self, field: &FieldDecl, declaring: &str, target: &str) {
        self.add(
            Self::at(
                field,
                DiagnosticKind::DeclaringTypeMissingTarget,
                format!("type '{}' does not implement '{}'", declaring, target),
            )
            .with_arg(declaring)
            .with_arg(target),
        );
    }

    /// Add a duplicate ownership error on `field`, pointing back at `existing`.
    pub fn duplicate_target_ownership(
        &mut self,
        field: &FieldDecl,
        existing: &FieldDecl,
        declaring: &str,
        target: &str,
    ) {
        self.add(
            Self::at(
                field,
                DiagnosticKind::DuplicateTargetOwnership,
                format!(
                    "fields '{}' and '{}' of '{}' both delegate '{}', specify target types explicitly",
                    existing.name, field.name, declaring, target
                ),
            )
            .with_arg(existing.name.as_str())
            .with_arg(field.name.as_str())
            .with_arg(declaring)
            .with_arg(target)
            .with_related(RelatedInfo {
                file: existing.file,
                span: existing.span,
                message: Arc::from(format!("'{}' already delegates '{}'", existing.name, target)),
            }),
        );
    }

    /// Add a conflicting flag error.
    pub fn conflicting_flag(&mut self, field: &FieldDecl, flag: DelegateFlag) {
        self.add(
            Self::at(
                field,
                DiagnosticKind::ConflictingFlag,
                format!(
                    "field '{}' has conflicting values of {}, remove one",
                    field.name,
                    flag.name()
                ),
            )
            .with_arg(field.name.as_str())
            .with_arg(flag.name()),
        );
    }

    /// Add a no-matching-target warning.
    pub fn no_matching_target(&mut self, field: &FieldDecl, declaring: &str) {
        self.add(
            Self::at(
                field,
                DiagnosticKind::NoMatchingTarget,
                format!(
                    "field '{}' does not implement any matching type of '{}'",
                    field.name, declaring
                ),
            )
            .with_arg(field.name.as_str())
            .with_arg(declaring),
        );
    }

    /// Add a no-member-delegated warning.
    pub fn no_member_delegated(&mut self, field: &FieldDecl, target: &str) {
        self.add(
            Self::at(
                field,
                DiagnosticKind::NoMemberDelegated,
                format!(
                    "no members of '{}' were delegated to field '{}', consider removing it from the delegation",
                    target, field.name
                ),
            )
            .with_arg(field.name.as_str())
            .with_arg(target),
        );
    }

    /// Add a flag-without-applicable-target warning.
    pub fn flag_without_applicable_target(&mut self, field: &FieldDecl, flag: DelegateFlag, scope: FlagScope) {
        let subject = match scope {
            FlagScope::Annotation => format!("an annotation on field '{}' lists types and", field.name),
            FlagScope::Field => format!("field '{}'", field.name),
        };
        self.add(
            Self::at(
                field,
                DiagnosticKind::FlagWithoutApplicableTarget,
                format!(
                    "{} specifies {}, but delegates no {}; remove {} or add such a type",
                    subject,
                    flag.name(),
                    flag.applies_to(),
                    flag.name()
                ),
            )
            .with_arg(field.name.as_str())
            .with_arg(flag.name()),
        );
    }

    /// Add a nullable field warning.
    pub fn nullable_delegate_field(&mut self, field: &FieldDecl) {
        self.add(
            Self::at(
                field,
                DiagnosticKind::NullableDelegateField,
                format!(
                    "field '{}' is nullable, delegated members fail when it holds no value",
                    field.name
                ),
            )
            .with_arg(field.name.as_str()),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get diagnostics of one kind.
    pub fn of_kind(&self, kind: DiagnosticKind) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.kind == kind).collect()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Consume the collector.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
