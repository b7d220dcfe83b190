//! The capability interface the engine needs from a host symbol database.
//!
//! Hosts implement the three required methods; every inheritance query the
//! engine performs is derived from them, so the engine never depends on a
//! particular compiler's API.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;

use super::types::{Accessibility, MemberId, MemberSymbol, TypeId, TypeKind, TypeSymbol};
use crate::error::{DelegationError, Result};

/// Read-only view over an immutable symbol snapshot.
pub trait SymbolHost {
    /// Look up a type by id.
    fn type_symbol(&self, ty: TypeId) -> Option<&TypeSymbol>;

    /// Look up a member by id.
    fn member(&self, id: MemberId) -> Option<&MemberSymbol>;

    /// Find the member of `implementor` (or its bases) that the host's
    /// member-resolution rules bind to `interface_member`.
    ///
    /// The default walks the base chain, most derived first, preferring a
    /// type-qualified implementation over a matching public member at each
    /// level. Returns `None` when `implementor` does not implement the
    /// interface at all.
    fn find_implementation(&self, implementor: TypeId, interface_member: MemberId) -> Option<MemberId> {
        let wanted = self.member(interface_member)?;
        if !self.is_subtype_of(implementor, wanted.containing_type) {
            return None;
        }

        for ty in self.base_chain(implementor) {
            let Some(symbol) = self.type_symbol(ty) else {
                break;
            };
            let members: Vec<&MemberSymbol> =
                symbol.members.iter().filter_map(|id| self.member(*id)).collect();

            if let Some(found) = members
                .iter()
                .find(|m| m.explicit_implementation == Some(interface_member))
            {
                return Some(found.id);
            }

            if let Some(found) = members.iter().find(|m| {
                !m.is_static()
                    && !m.is_accessor()
                    && m.accessibility == Accessibility::Public
                    && m.same_signature(wanted)
                    && m.result_type == wanted.result_type
            }) {
                return Some(found.id);
            }
        }

        None
    }

    /// Get a type, failing on ids the snapshot does not contain.
    fn expect_type(&self, ty: TypeId) -> Result<&TypeSymbol> {
        self.type_symbol(ty).ok_or(DelegationError::UnknownType(ty))
    }

    /// Get a member, failing on ids the snapshot does not contain.
    fn expect_member(&self, id: MemberId) -> Result<&MemberSymbol> {
        self.member(id).ok_or(DelegationError::UnknownMember(id))
    }

    /// Display name of a type, or `"?"` for unknown ids.
    fn type_name(&self, ty: TypeId) -> &str {
        self.type_symbol(ty).map(|t| t.name.as_str()).unwrap_or("?")
    }

    fn type_kind(&self, ty: TypeId) -> Option<TypeKind> {
        self.type_symbol(ty).map(|t| t.kind)
    }

    fn is_interface(&self, ty: TypeId) -> bool {
        self.type_kind(ty) == Some(TypeKind::Interface)
    }

    fn base_type(&self, ty: TypeId) -> Option<TypeId> {
        self.type_symbol(ty).and_then(|t| t.base)
    }

    /// Declared members of a type, in declaration order.
    fn members_of(&self, ty: TypeId) -> Vec<&MemberSymbol> {
        self.type_symbol(ty)
            .map(|t| t.members.iter().filter_map(|id| self.member(*id)).collect())
            .unwrap_or_default()
    }

    /// `ty` followed by its base classes, nearest first. Stops on cycles.
    fn base_chain(&self, ty: TypeId) -> Vec<TypeId> {
        let mut chain = Vec::new();
        let mut seen = FxHashSet::default();
        let mut current = Some(ty);
        while let Some(t) = current {
            if !seen.insert(t) || self.type_symbol(t).is_none() {
                break;
            }
            chain.push(t);
            current = self.base_type(t);
        }
        chain
    }

    /// Every interface implemented by `ty`, directly or transitively,
    /// including those inherited through base classes. Never contains `ty`.
    fn all_interfaces(&self, ty: TypeId) -> IndexSet<TypeId> {
        let mut out = IndexSet::new();
        for t in self.base_chain(ty) {
            if let Some(symbol) = self.type_symbol(t) {
                for iface in &symbol.interfaces {
                    collect_interface(self, *iface, &mut out);
                }
            }
        }
        out.shift_remove(&ty);
        out
    }

    /// Strict subtyping: `candidate` inherits from or implements `target`.
    fn is_subtype_of(&self, candidate: TypeId, target: TypeId) -> bool {
        if self.base_chain(candidate).iter().skip(1).any(|b| *b == target) {
            return true;
        }
        self.all_interfaces(candidate).contains(&target)
    }

    /// Identity or subtyping.
    fn is_convertible_to(&self, source: TypeId, target: TypeId) -> bool {
        source == target || self.is_subtype_of(source, target)
    }
}

fn collect_interface<H: SymbolHost + ?Sized>(host: &H, iface: TypeId, out: &mut IndexSet<TypeId>) {
    if !out.insert(iface) {
        return;
    }
    if let Some(symbol) = host.type_symbol(iface) {
        for parent in &symbol.interfaces {
            collect_interface(host, *parent, out);
        }
    }
}
