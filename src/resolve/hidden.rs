//! Members a declaring type already overrides.

use rustc_hash::FxHashSet;

use crate::symbols::{MemberId, SymbolHost, TypeId};

/// Every member of `ty` plus everything reachable from them through
/// `overridden` links, and every slot a base class of `ty` has already
/// overridden.
///
/// A target member in this set already has an implementation on the
/// declaring type or one of its bases and must not be forwarded again. A
/// base's own overriding member stays visible; it is the most derived
/// implementation of its slot.
pub fn hidden_members<H: SymbolHost + ?Sized>(host: &H, ty: TypeId) -> FxHashSet<MemberId> {
    let mut hidden = FxHashSet::default();
    for (depth, owner) in host.base_chain(ty).into_iter().enumerate() {
        for member in host.members_of(owner) {
            let mut current = if depth == 0 { Some(member.id) } else { member.overridden };
            while let Some(id) = current {
                if !hidden.insert(id) {
                    break;
                }
                current = host.member(id).and_then(|m| m.overridden);
            }
        }
    }
    hidden
}
