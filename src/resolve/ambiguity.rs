//! Detecting interface members that cannot be implemented implicitly.
//!
//! Two interfaces of the same declaring type may declare a member with the
//! same name and parameter types but different result types. One public
//! member cannot satisfy both, so the forwarder for the member being
//! delegated has to be qualified with its interface.

use indexmap::IndexSet;

use crate::symbols::{MemberSymbol, SymbolHost, TypeId};

/// Whether `member` of interface `target` clashes with a member of any other
/// interface in `interfaces` (the declaring type's full interface set).
///
/// Class targets never clash; their forwarders are always overrides.
pub fn requires_explicit<H: SymbolHost + ?Sized>(
    host: &H,
    interfaces: &IndexSet<TypeId>,
    target: TypeId,
    member: &MemberSymbol,
) -> bool {
    if !host.is_interface(target) {
        return false;
    }

    interfaces
        .iter()
        .filter(|iface| **iface != target)
        .flat_map(|iface| host.members_of(*iface))
        .any(|other| other.same_signature(member) && other.result_type != member.result_type)
}
