//! Symbol data handed to the engine by the host.
//!
//! Ids are canonical: two mentions of the same nominal type always carry the
//! same [`TypeId`], so ids are used directly as registry keys, hidden-set
//! entries and ambiguity comparisons.

use bitflags::bitflags;
use smol_str::SmolStr;

/// Canonical identity of a nominal type in the host snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeId(u32);

impl TypeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Canonical identity of a member (method, property, indexer, accessor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberId(u32);

impl MemberId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
}

impl TypeKind {
    /// Get a display label for this kind.
    pub fn display(&self) -> &'static str {
        match self {
            TypeKind::Class => "Class",
            TypeKind::Interface => "Interface",
            TypeKind::Struct => "Struct",
        }
    }
}

/// Declared accessibility, ordered from most to least restrictive.
///
/// The ordering follows the host's lattice: `Protected` sorts below
/// `Internal`, so "at least internal" excludes protected-only members.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum Accessibility {
    Private,
    ProtectedAndInternal,
    Protected,
    Internal,
    ProtectedOrInternal,
    Public,
}

impl Accessibility {
    /// Source keyword(s) for this accessibility.
    pub fn keyword(&self) -> &'static str {
        match self {
            Accessibility::Private => "private",
            Accessibility::ProtectedAndInternal => "private protected",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
            Accessibility::ProtectedOrInternal => "protected internal",
            Accessibility::Public => "public",
        }
    }

    pub fn is_at_least_internal(&self) -> bool {
        *self >= Accessibility::Internal
    }
}

/// The kind of a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum MemberKind {
    Method,
    Property,
    Indexer,
}

impl MemberKind {
    /// Properties and indexers both go through accessors.
    pub fn has_accessors(&self) -> bool {
        matches!(self, MemberKind::Property | MemberKind::Indexer)
    }

    /// Whether two kinds are considered the same for signature matching.
    ///
    /// Indexers are parameterised properties, so they match properties.
    pub fn same_family(&self, other: MemberKind) -> bool {
        self.has_accessors() == other.has_accessors()
    }
}

bitflags! {
    /// Member modifiers relevant to forwarding decisions.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MemberModifiers: u8 {
        /// Declared `virtual`
        const VIRTUAL = 0x01;
        /// Declared `abstract` (implicit for interface members without a body)
        const ABSTRACT = 0x02;
        /// Declared `override`
        const OVERRIDE = 0x04;
        /// Declared `sealed`, closing the override chain
        const SEALED = 0x08;
        /// Declared `static`
        const STATIC = 0x10;
    }
}

/// A parameter of a method or indexer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    pub name: SmolStr,
    pub ty: TypeId,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// A property or indexer accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccessorSymbol {
    pub accessibility: Accessibility,
}

/// A member of a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberSymbol {
    pub id: MemberId,
    pub name: SmolStr,
    pub kind: MemberKind,
    pub containing_type: TypeId,
    pub parameters: Vec<Parameter>,
    /// Return type for methods, value type for properties and indexers.
    pub result_type: TypeId,
    pub accessibility: Accessibility,
    pub modifiers: MemberModifiers,
    /// The member this one overrides, if declared `override`.
    pub overridden: Option<MemberId>,
    /// For accessor methods: the property they belong to.
    pub associated: Option<MemberId>,
    /// Interface member this one implements with a type-qualified declaration.
    pub explicit_implementation: Option<MemberId>,
    pub getter: Option<AccessorSymbol>,
    pub setter: Option<AccessorSymbol>,
}

impl MemberSymbol {
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(MemberModifiers::ABSTRACT)
    }

    /// Virtual in the overridable sense: `virtual`, or an unsealed `override`.
    pub fn is_virtual(&self) -> bool {
        if self.modifiers.contains(MemberModifiers::SEALED) {
            return false;
        }
        self.modifiers
            .intersects(MemberModifiers::VIRTUAL | MemberModifiers::OVERRIDE)
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(MemberModifiers::STATIC)
    }

    /// Accessor methods have no forwardable identity of their own.
    pub fn is_accessor(&self) -> bool {
        self.associated.is_some()
    }

    /// A property with a getter and no setter.
    pub fn is_read_only(&self) -> bool {
        self.kind.has_accessors() && self.getter.is_some() && self.setter.is_none()
    }

    /// A property with a setter and no getter.
    pub fn is_write_only(&self) -> bool {
        self.kind.has_accessors() && self.getter.is_none() && self.setter.is_some()
    }

    /// Same name, same kind family and identical parameter types.
    ///
    /// Result types are deliberately not compared.
    pub fn same_signature(&self, other: &MemberSymbol) -> bool {
        self.name == other.name
            && self.kind.same_family(other.kind)
            && self.parameters.len() == other.parameters.len()
            && self
                .parameters
                .iter()
                .zip(&other.parameters)
                .all(|(a, b)| a.ty == b.ty)
    }
}

/// A type in the host snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSymbol {
    pub id: TypeId,
    /// Fully qualified display name.
    pub name: SmolStr,
    pub kind: TypeKind,
    pub base: Option<TypeId>,
    /// Directly declared interfaces, in declaration order.
    pub interfaces: Vec<TypeId>,
    /// Declared members, in declaration order.
    pub members: Vec<MemberId>,
}

impl TypeSymbol {
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }
}
