//! Per-member forwarding eligibility.
//!
//! Checks run in a fixed order and the first failing one decides; skipped
//! members are silent apart from a trace event.

use rustc_hash::FxHashSet;

use super::registry::ImplTarget;
use crate::symbols::{Accessibility, MemberId, MemberKind, MemberSymbol, SymbolHost, TypeId};

/// Why a member was not forwarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The declaring type already overrides it.
    Hidden,
    /// An accessor method; its property is forwarded instead.
    Accessor,
    Static,
    /// A class member that is neither abstract nor selected by IncludeVirtual.
    NotSelected,
    /// An interface member with a body of its own, without IncludeVirtual.
    HasDefaultBody,
    /// The declaring type already implements the interface member.
    AlreadyImplemented,
    /// The member, or every one of its accessors, is too restrictive.
    Inaccessible,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Hidden => "hidden",
            SkipReason::Accessor => "accessor",
            SkipReason::Static => "static",
            SkipReason::NotSelected => "not selected",
            SkipReason::HasDefaultBody => "default body",
            SkipReason::AlreadyImplemented => "already implemented",
            SkipReason::Inaccessible => "inaccessible",
        }
    }
}

/// Outcome of [`MemberFilter::check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterDecision {
    /// Forward the member. For properties and indexers `get`/`set` say
    /// which accessors survive; both are `false` for methods.
    Forward { get: bool, set: bool },
    Skip(SkipReason),
}

impl FilterDecision {
    pub fn is_forward(&self) -> bool {
        matches!(self, FilterDecision::Forward { .. })
    }
}

/// Eligibility checks for the members of one target on one declaring type.
pub struct MemberFilter<'a, H: SymbolHost + ?Sized> {
    host: &'a H,
    declaring_type: TypeId,
    target: ImplTarget,
    target_is_interface: bool,
    hidden: &'a FxHashSet<MemberId>,
}

impl<'a, H: SymbolHost + ?Sized> MemberFilter<'a, H> {
    pub fn new(host: &'a H, declaring_type: TypeId, target: ImplTarget, hidden: &'a FxHashSet<MemberId>) -> Self {
        Self {
            host,
            declaring_type,
            target,
            target_is_interface: host.is_interface(target.ty),
            hidden,
        }
    }

    pub fn check(&self, member: &MemberSymbol) -> FilterDecision {
        let decision = self.decide(member);
        if let FilterDecision::Skip(reason) = decision {
            tracing::trace!(member = %member.name, reason = reason.as_str(), "member skipped");
        }
        decision
    }

    fn decide(&self, member: &MemberSymbol) -> FilterDecision {
        if self.hidden.contains(&member.id) {
            return FilterDecision::Skip(SkipReason::Hidden);
        }
        if member.is_accessor() {
            return FilterDecision::Skip(SkipReason::Accessor);
        }
        if member.is_static() {
            return FilterDecision::Skip(SkipReason::Static);
        }

        if !(member.is_abstract() || (self.target.include_virtual && member.is_virtual())) {
            return FilterDecision::Skip(if self.target_is_interface {
                SkipReason::HasDefaultBody
            } else {
                SkipReason::NotSelected
            });
        }
        if self.target_is_interface
            && self
                .host
                .find_implementation(self.declaring_type, member.id)
                .is_some()
        {
            return FilterDecision::Skip(SkipReason::AlreadyImplemented);
        }

        match member.kind {
            MemberKind::Method => {
                if member.accessibility == Accessibility::Public {
                    FilterDecision::Forward { get: false, set: false }
                } else {
                    FilterDecision::Skip(SkipReason::Inaccessible)
                }
            }
            MemberKind::Property | MemberKind::Indexer => {
                if !member.accessibility.is_at_least_internal() {
                    return FilterDecision::Skip(SkipReason::Inaccessible);
                }
                let get = !member.is_write_only()
                    && member
                        .getter
                        .is_some_and(|a| a.accessibility.is_at_least_internal());
                let set = !member.is_read_only()
                    && member
                        .setter
                        .is_some_and(|a| a.accessibility.is_at_least_internal());
                if get || set {
                    FilterDecision::Forward { get, set }
                } else {
                    FilterDecision::Skip(SkipReason::Inaccessible)
                }
            }
        }
    }
}
