//! Forwarding declarations.
//!
//! A [`ForwardingDecl`] is the structured form of one generated member: what
//! it is, how it is qualified, and how its body reaches the held value. The
//! [`emit`](crate::emit) module renders them; hosts with their own code
//! model can consume them directly.

use smol_str::SmolStr;

use super::registry::ImplTarget;
use crate::symbols::{AccessorSymbol, Accessibility, MemberId, MemberKind, MemberSymbol, Parameter, TypeId};

// ============================================================================
// TYPES
// ============================================================================

/// What kind of member a forwarder declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum ForwardKind {
    Method,
    Property,
    Indexer,
}

impl From<MemberKind> for ForwardKind {
    fn from(kind: MemberKind) -> Self {
        match kind {
            MemberKind::Method => ForwardKind::Method,
            MemberKind::Property => ForwardKind::Property,
            MemberKind::Indexer => ForwardKind::Indexer,
        }
    }
}

/// How a forwarder is declared relative to the member it satisfies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum Qualifier {
    /// An ordinary public member implementing an interface member implicitly.
    Plain,
    /// An override of a base-class member.
    Override,
    /// A member qualified with the interface it implements.
    Explicit(TypeId),
}

/// One accessor of a forwarded property or indexer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ForwardedAccessor {
    /// Set when the accessor is narrower than the property itself.
    pub accessibility: Option<Accessibility>,
}

/// The operation a forwarder performs on the cast field value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum ForwardAccess {
    /// `member(args...)`
    Call { member: SmolStr, args: Vec<SmolStr> },
    /// `member`, read by the getter and assigned by the setter.
    Property { member: SmolStr },
    /// `[args...]`, read by the getter and assigned by the setter.
    Index { args: Vec<SmolStr> },
}

/// `((cast)this.field)` followed by an access.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ForwardExpr {
    pub field: SmolStr,
    pub cast: TypeId,
    pub access: ForwardAccess,
}

/// A generated member forwarding to the held value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ForwardingDecl {
    pub kind: ForwardKind,
    pub name: SmolStr,
    pub parameters: Vec<Parameter>,
    /// Return type for methods, value type for properties and indexers.
    pub result_type: TypeId,
    pub accessibility: Accessibility,
    pub qualifier: Qualifier,
    /// The target type the member comes from.
    pub target: TypeId,
    pub source_member: MemberId,
    pub getter: Option<ForwardedAccessor>,
    pub setter: Option<ForwardedAccessor>,
    pub expr: ForwardExpr,
}

impl ForwardingDecl {
    pub fn is_explicit(&self) -> bool {
        matches!(self.qualifier, Qualifier::Explicit(_))
    }
}

// ============================================================================
// SYNTHESIS
// ============================================================================

/// Build the forwarder for `member` of `target`, which the filter accepted.
///
/// `get`/`set` are the accessors that survived filtering and are ignored for
/// methods. `ambiguous` forces qualification of interface members.
pub fn synthesize(
    member: &MemberSymbol,
    target: ImplTarget,
    target_is_interface: bool,
    field: &SmolStr,
    get: bool,
    set: bool,
    ambiguous: bool,
) -> ForwardingDecl {
    let qualifier = if !target_is_interface {
        Qualifier::Override
    } else if target.implement_explicitly || ambiguous {
        Qualifier::Explicit(target.ty)
    } else {
        Qualifier::Plain
    };

    let accessibility = match qualifier {
        Qualifier::Plain => Accessibility::Public,
        _ => member.accessibility,
    };

    let args: Vec<SmolStr> = member.parameters.iter().map(|p| p.name.clone()).collect();
    let access = match member.kind {
        MemberKind::Method => ForwardAccess::Call {
            member: member.name.clone(),
            args,
        },
        MemberKind::Property => ForwardAccess::Property {
            member: member.name.clone(),
        },
        MemberKind::Indexer => ForwardAccess::Index { args },
    };

    let narrowed = |accessor: Option<AccessorSymbol>| ForwardedAccessor {
        accessibility: accessor
            .map(|a| a.accessibility)
            .filter(|a| *a != member.accessibility),
    };
    let (getter, setter) = if member.kind.has_accessors() {
        (
            get.then(|| narrowed(member.getter)),
            set.then(|| narrowed(member.setter)),
        )
    } else {
        (None, None)
    };

    ForwardingDecl {
        kind: member.kind.into(),
        name: member.name.clone(),
        parameters: member.parameters.clone(),
        result_type: member.result_type,
        accessibility,
        qualifier,
        target: target.ty,
        source_member: member.id,
        getter,
        setter,
        expr: ForwardExpr {
            field: field.clone(),
            cast: target.ty,
            access,
        },
    }
}
