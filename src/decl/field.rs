//! Raw and normalized delegation declarations.

use smol_str::SmolStr;

use crate::base::{FileId, Span};
use crate::symbols::TypeId;

/// The two boolean options an annotation can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DelegateFlag {
    /// Also forward non-abstract virtual members of class targets.
    IncludeVirtual,
    /// Forward interface members with type-qualified declarations.
    ImplementExplicitly,
}

impl DelegateFlag {
    pub fn name(&self) -> &'static str {
        match self {
            DelegateFlag::IncludeVirtual => "IncludeVirtual",
            DelegateFlag::ImplementExplicitly => "ImplementExplicitly",
        }
    }

    /// The kind of target the flag has an effect on.
    pub fn applies_to(&self) -> &'static str {
        match self {
            DelegateFlag::IncludeVirtual => "base classes",
            DelegateFlag::ImplementExplicitly => "interfaces",
        }
    }
}

/// Where a flag was found when it turned out to be irrelevant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagScope {
    /// On an annotation that lists target types.
    Annotation,
    /// As a member-level default.
    Field,
}

/// Decoded payload of one delegation annotation.
///
/// An annotation with no targets contributes member-level defaults; one with
/// targets contributes those targets and per-target flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DelegateAnnotation {
    pub targets: Vec<TypeId>,
    pub include_virtual: Option<bool>,
    pub implement_explicitly: Option<bool>,
}

impl DelegateAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, ty: TypeId) -> Self {
        self.targets.push(ty);
        self
    }

    pub fn include_virtual(mut self, value: bool) -> Self {
        self.include_virtual = Some(value);
        self
    }

    pub fn implement_explicitly(mut self, value: bool) -> Self {
        self.implement_explicitly = Some(value);
        self
    }

    pub fn flag(&self, flag: DelegateFlag) -> Option<bool> {
        match flag {
            DelegateFlag::IncludeVirtual => self.include_virtual,
            DelegateFlag::ImplementExplicitly => self.implement_explicitly,
        }
    }
}

/// A delegation-bearing field as handed over by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    pub declaring_type: TypeId,
    pub name: SmolStr,
    /// Static type of the field.
    pub field_type: TypeId,
    /// The field type carries a nullable annotation.
    pub nullable: bool,
    pub file: FileId,
    pub span: Span,
    /// Annotations in source order.
    pub annotations: Vec<DelegateAnnotation>,
}

impl FieldDecl {
    pub fn new(declaring_type: TypeId, name: impl Into<SmolStr>, field_type: TypeId) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            field_type,
            nullable: false,
            file: FileId::default(),
            span: Span::default(),
            annotations: Vec::new(),
        }
    }

    pub fn annotate(mut self, annotation: DelegateAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn at(mut self, file: FileId, span: Span) -> Self {
        self.file = file;
        self.span = span;
        self
    }
}

/// One effective target of a field, with its resolved flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldTarget {
    pub ty: TypeId,
    pub include_virtual: bool,
    pub implement_explicitly: bool,
}

/// A field after its annotations have been normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelegationField {
    pub decl: FieldDecl,
    /// Targets were listed by the author rather than inferred.
    pub is_explicit: bool,
    /// Effective targets in declaration order.
    pub targets: Vec<FieldTarget>,
    pub default_include_virtual: Option<bool>,
    pub default_implement_explicitly: Option<bool>,
}

impl DelegationField {
    pub fn name(&self) -> &str {
        &self.decl.name
    }
}
