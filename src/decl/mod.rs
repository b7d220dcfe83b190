//! Declaration model: normalized delegation-bearing members.
//!
//! The host decodes its annotation syntax into [`FieldDecl`]s; [`build_field`]
//! turns one into a [`DelegationField`] carrying the effective target list.

mod builder;
mod field;

pub use builder::{build_field, default_targets};
pub use field::{DelegateAnnotation, DelegateFlag, DelegationField, FieldDecl, FieldTarget, FlagScope};
