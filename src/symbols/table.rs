//! In-memory symbol snapshot.
//!
//! `SymbolTable` is the reference [`SymbolHost`]: hosts that materialize
//! their compiler's view up front, and the test suite, build one with
//! [`TypeBuilder`] / [`MemberBuilder`] and hand it to the resolver.

use indexmap::IndexMap;
use smol_str::SmolStr;

use super::host::SymbolHost;
use super::types::{
    AccessorSymbol, Accessibility, MemberId, MemberKind, MemberModifiers, MemberSymbol, Parameter,
    TypeId, TypeKind, TypeSymbol,
};
use crate::error::{DelegationError, Result};

/// Name the host uses for indexers.
pub const INDEXER_NAME: &str = "this[]";

/// Arena-backed symbol snapshot.
///
/// Types and members are stored once and referenced by id everywhere else.
/// A fresh table already contains the universal root class (`object`) and
/// the `void` result type.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    types: Vec<TypeSymbol>,
    members: Vec<MemberSymbol>,
    /// Full name -> id (IndexMap preserves registration order).
    by_name: IndexMap<SmolStr, TypeId>,
    object: TypeId,
    void: TypeId,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    pub const OBJECT: &'static str = "object";
    pub const VOID: &'static str = "void";

    /// Create a table seeded with `object` and `void`.
    pub fn new() -> Self {
        let mut table = Self {
            types: Vec::new(),
            members: Vec::new(),
            by_name: IndexMap::new(),
            object: TypeId::new(0),
            void: TypeId::new(0),
        };
        table.object = table.push_type(Self::OBJECT.into(), TypeKind::Class, None);
        table.void = table.push_type(Self::VOID.into(), TypeKind::Struct, None);
        table
    }

    /// The universal root class.
    pub fn object(&self) -> TypeId {
        self.object
    }

    /// The result type of methods that return nothing.
    pub fn void(&self) -> TypeId {
        self.void
    }

    /// Look up a type by full name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Number of registered types, including the seeded ones.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Iterate over all types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeSymbol> {
        self.types.iter()
    }

    /// Register a new type. Classes derive from `object` until told otherwise.
    pub fn declare(&mut self, name: &str, kind: TypeKind) -> Result<TypeId> {
        if self.by_name.contains_key(name) {
            return Err(DelegationError::DuplicateType(name.to_string()));
        }
        let base = (kind == TypeKind::Class).then_some(self.object);
        Ok(self.push_type(name.into(), kind, base))
    }

    /// Get or register a type used only in signatures (`int`, `string`, ...).
    pub fn named(&mut self, name: &str) -> TypeId {
        match self.lookup(name) {
            Some(id) => id,
            None => self.push_type(name.into(), TypeKind::Struct, None),
        }
    }

    /// Declare a class and start building it.
    pub fn class(&mut self, name: &str) -> Result<TypeBuilder<'_>> {
        let id = self.declare(name, TypeKind::Class)?;
        Ok(TypeBuilder { table: self, id })
    }

    /// Declare an interface and start building it.
    pub fn interface(&mut self, name: &str) -> Result<TypeBuilder<'_>> {
        let id = self.declare(name, TypeKind::Interface)?;
        Ok(TypeBuilder { table: self, id })
    }

    /// Continue building a type declared earlier (forward references).
    pub fn edit(&mut self, id: TypeId) -> Result<TypeBuilder<'_>> {
        self.expect_type(id)?;
        Ok(TypeBuilder { table: self, id })
    }

    /// Add a member to an existing type.
    pub fn add_member(&mut self, ty: TypeId, member: MemberBuilder) -> Result<MemberId> {
        self.expect_type(ty)?;
        Ok(self.push_member(ty, member))
    }

    fn push_type(&mut self, name: SmolStr, kind: TypeKind, base: Option<TypeId>) -> TypeId {
        let id = TypeId::new(self.types.len() as u32);
        self.types.push(TypeSymbol {
            id,
            name: name.clone(),
            kind,
            base,
            interfaces: Vec::new(),
            members: Vec::new(),
        });
        self.by_name.insert(name, id);
        id
    }

    fn push_member(&mut self, ty: TypeId, builder: MemberBuilder) -> MemberId {
        let in_interface = self.types[ty.index()].is_interface();
        let mut modifiers = builder.modifiers;
        if in_interface && !modifiers.intersects(MemberModifiers::VIRTUAL | MemberModifiers::STATIC) {
            modifiers |= MemberModifiers::ABSTRACT;
        }

        let accessibility = builder.accessibility;
        let getter = builder.getter.map(|a| AccessorSymbol {
            accessibility: a.unwrap_or(accessibility),
        });
        let setter = builder.setter.map(|a| AccessorSymbol {
            accessibility: a.unwrap_or(accessibility),
        });

        let id = MemberId::new(self.members.len() as u32);
        let member = MemberSymbol {
            id,
            name: builder.name,
            kind: builder.kind,
            containing_type: ty,
            parameters: builder.parameters,
            result_type: builder.result_type,
            accessibility,
            modifiers,
            overridden: builder.overridden,
            associated: None,
            explicit_implementation: builder.explicit_implementation,
            getter,
            setter,
        };
        self.members.push(member);
        self.types[ty.index()].members.push(id);

        if builder.kind.has_accessors() {
            self.push_accessor_methods(id);
        }
        id
    }

    /// Hosts list accessor methods alongside their property; mirror that.
    fn push_accessor_methods(&mut self, property: MemberId) {
        let prop = self.members[property.index()].clone();
        let stem = if prop.kind == MemberKind::Indexer {
            SmolStr::new("Item")
        } else {
            prop.name.clone()
        };

        let mut accessors = Vec::new();
        if let Some(getter) = prop.getter {
            accessors.push((format!("get_{stem}"), getter, prop.result_type, prop.parameters.clone()));
        }
        if let Some(setter) = prop.setter {
            let mut params = prop.parameters.clone();
            params.push(Parameter::new("value", prop.result_type));
            accessors.push((format!("set_{stem}"), setter, self.void, params));
        }

        for (name, accessor, result_type, parameters) in accessors {
            let id = MemberId::new(self.members.len() as u32);
            self.members.push(MemberSymbol {
                id,
                name: name.into(),
                kind: MemberKind::Method,
                containing_type: prop.containing_type,
                parameters,
                result_type,
                accessibility: accessor.accessibility,
                modifiers: prop.modifiers,
                overridden: None,
                associated: Some(property),
                explicit_implementation: None,
                getter: None,
                setter: None,
            });
            self.types[prop.containing_type.index()].members.push(id);
        }
    }
}

impl SymbolHost for SymbolTable {
    fn type_symbol(&self, ty: TypeId) -> Option<&TypeSymbol> {
        self.types.get(ty.index())
    }

    fn member(&self, id: MemberId) -> Option<&MemberSymbol> {
        self.members.get(id.index())
    }
}

/// Fluent editor for one type of a [`SymbolTable`].
pub struct TypeBuilder<'a> {
    table: &'a mut SymbolTable,
    id: TypeId,
}

impl<'a> TypeBuilder<'a> {
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Set the base class.
    pub fn extends(self, base: TypeId) -> Self {
        self.table.types[self.id.index()].base = Some(base);
        self
    }

    /// Remove the base class (only the root type should have none).
    pub fn root(self) -> Self {
        self.table.types[self.id.index()].base = None;
        self
    }

    /// Add a directly implemented interface.
    pub fn implements(self, iface: TypeId) -> Self {
        let interfaces = &mut self.table.types[self.id.index()].interfaces;
        if !interfaces.contains(&iface) {
            interfaces.push(iface);
        }
        self
    }

    /// Add a member, returning its id.
    pub fn member(&mut self, member: MemberBuilder) -> MemberId {
        self.table.push_member(self.id, member)
    }

    /// Add a member, chaining.
    pub fn with(mut self, member: MemberBuilder) -> Self {
        self.member(member);
        self
    }

    pub fn finish(self) -> TypeId {
        self.id
    }
}

/// Description of a member to add to a [`SymbolTable`].
#[derive(Clone, Debug)]
pub struct MemberBuilder {
    name: SmolStr,
    kind: MemberKind,
    parameters: Vec<Parameter>,
    result_type: TypeId,
    accessibility: Accessibility,
    modifiers: MemberModifiers,
    overridden: Option<MemberId>,
    explicit_implementation: Option<MemberId>,
    /// `Some(None)` inherits the member's accessibility.
    getter: Option<Option<Accessibility>>,
    setter: Option<Option<Accessibility>>,
}

impl MemberBuilder {
    fn new(name: impl Into<SmolStr>, kind: MemberKind, result_type: TypeId) -> Self {
        Self {
            name: name.into(),
            kind,
            parameters: Vec::new(),
            result_type,
            accessibility: Accessibility::Public,
            modifiers: MemberModifiers::empty(),
            overridden: None,
            explicit_implementation: None,
            getter: None,
            setter: None,
        }
    }

    /// A public method.
    pub fn method(name: impl Into<SmolStr>, result_type: TypeId) -> Self {
        Self::new(name, MemberKind::Method, result_type)
    }

    /// A public property with no accessors yet.
    pub fn property(name: impl Into<SmolStr>, ty: TypeId) -> Self {
        Self::new(name, MemberKind::Property, ty)
    }

    /// A public indexer with no accessors yet.
    pub fn indexer(ty: TypeId) -> Self {
        Self::new(INDEXER_NAME, MemberKind::Indexer, ty)
    }

    pub fn param(mut self, name: impl Into<SmolStr>, ty: TypeId) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn modifiers(mut self, modifiers: MemberModifiers) -> Self {
        self.modifiers |= modifiers;
        self
    }

    /// Declare as `override` of `overridden`.
    pub fn overrides(mut self, overridden: MemberId) -> Self {
        self.modifiers |= MemberModifiers::OVERRIDE;
        self.overridden = Some(overridden);
        self
    }

    /// Declare as a type-qualified implementation of an interface member.
    pub fn implements(mut self, interface_member: MemberId) -> Self {
        self.explicit_implementation = Some(interface_member);
        self.accessibility = Accessibility::Private;
        self
    }

    /// Add a getter with the member's accessibility.
    pub fn get(mut self) -> Self {
        self.getter = Some(None);
        self
    }

    /// Add a setter with the member's accessibility.
    pub fn set(mut self) -> Self {
        self.setter = Some(None);
        self
    }

    /// Add a getter with its own accessibility.
    pub fn get_as(mut self, accessibility: Accessibility) -> Self {
        self.getter = Some(Some(accessibility));
        self
    }

    /// Add a setter with its own accessibility.
    pub fn set_as(mut self, accessibility: Accessibility) -> Self {
        self.setter = Some(Some(accessibility));
        self
    }
}
