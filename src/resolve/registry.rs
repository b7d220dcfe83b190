//! Per-declaring-type ownership of target types.
//!
//! Fields are folded into a [`TargetRegistry`] in declaration order. Each
//! target type ends up owned by at most one field: an explicit claim beats
//! an implicit one silently, while two claims of the same strength from
//! different fields conflict and the first claim keeps the target.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::symbols::TypeId;

/// Position of a field among its declaring type's delegation fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u32);

impl FieldId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for FieldId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

/// A target owned by a field, with the flags accumulated for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ImplTarget {
    pub ty: TypeId,
    pub include_virtual: bool,
    pub implement_explicitly: bool,
}

/// Result of [`TargetRegistry::assign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The target had no owner and now belongs to the field.
    Assigned,
    /// An implicit owner was replaced by an explicit claim.
    Upgraded { previous: FieldId },
    /// The field already owned the target; flags were merged.
    Retained,
    /// An implicit claim lost silently to an existing explicit owner.
    Ignored,
    /// A claim of the same strength from another field; the owner is kept.
    Conflict(FieldId),
}

impl AssignOutcome {
    /// Whether the claiming field owns the target afterwards.
    pub fn is_owned(&self) -> bool {
        matches!(
            self,
            AssignOutcome::Assigned | AssignOutcome::Upgraded { .. } | AssignOutcome::Retained
        )
    }
}

/// Target -> owning field map for one declaring type.
#[derive(Clone, Debug, Default)]
pub struct TargetRegistry {
    explicit: IndexMap<TypeId, FieldId>,
    implicit: IndexMap<TypeId, FieldId>,
    include_virtual: FxHashSet<TypeId>,
    implement_explicitly: FxHashSet<TypeId>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `ty` for `field`.
    ///
    /// Flags are unioned onto the target whenever the claim ends up owning
    /// it; on an upgrade the flags stored for the implicit owner carry over.
    pub fn assign(
        &mut self,
        ty: TypeId,
        field: FieldId,
        is_explicit: bool,
        include_virtual: bool,
        implement_explicitly: bool,
    ) -> AssignOutcome {
        let outcome = if let Some(&owner) = self.explicit.get(&ty) {
            match (owner == field, is_explicit) {
                (true, _) => AssignOutcome::Retained,
                (false, true) => AssignOutcome::Conflict(owner),
                (false, false) => AssignOutcome::Ignored,
            }
        } else if let Some(&owner) = self.implicit.get(&ty) {
            match (owner == field, is_explicit) {
                (true, false) => AssignOutcome::Retained,
                (_, true) => {
                    self.implicit.shift_remove(&ty);
                    self.explicit.insert(ty, field);
                    if owner == field {
                        AssignOutcome::Retained
                    } else {
                        AssignOutcome::Upgraded { previous: owner }
                    }
                }
                (false, false) => AssignOutcome::Conflict(owner),
            }
        } else {
            if is_explicit {
                self.explicit.insert(ty, field);
            } else {
                self.implicit.insert(ty, field);
            }
            AssignOutcome::Assigned
        };

        if outcome.is_owned() {
            if include_virtual {
                self.include_virtual.insert(ty);
            }
            if implement_explicitly {
                self.implement_explicitly.insert(ty);
            }
        }
        outcome
    }

    /// Current owner of `ty`, if any.
    pub fn owner(&self, ty: TypeId) -> Option<FieldId> {
        self.explicit.get(&ty).or_else(|| self.implicit.get(&ty)).copied()
    }

    pub fn is_explicit(&self, ty: TypeId) -> bool {
        self.explicit.contains_key(&ty)
    }

    /// Targets owned by `field`: explicit ones first, each group in
    /// assignment order.
    pub fn targets_for(&self, field: FieldId) -> Vec<ImplTarget> {
        self.explicit
            .iter()
            .chain(self.implicit.iter())
            .filter(|(_, owner)| **owner == field)
            .map(|(ty, _)| ImplTarget {
                ty: *ty,
                include_virtual: self.include_virtual.contains(ty),
                implement_explicitly: self.implement_explicitly.contains(ty),
            })
            .collect()
    }

    /// Number of owned targets.
    pub fn len(&self) -> usize {
        self.explicit.len() + self.implicit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
