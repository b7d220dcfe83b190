//! Host symbol model: the read-only view of types and members the engine
//! resolves against.
//!
//! ## Key Types
//!
//! - [`SymbolHost`] - Narrow capability trait any host symbol database can satisfy
//! - [`TypeId`] / [`MemberId`] - Canonical identities used as keys everywhere
//! - [`TypeSymbol`] / [`MemberSymbol`] - Snapshot data for one type / member
//! - [`SymbolTable`] - In-memory snapshot implementing [`SymbolHost`]

mod host;
mod table;
mod types;

pub use host::SymbolHost;
pub use table::{INDEXER_NAME, MemberBuilder, SymbolTable, TypeBuilder};
pub use types::{
    AccessorSymbol, Accessibility, MemberId, MemberKind, MemberModifiers, MemberSymbol, Parameter,
    TypeId, TypeKind, TypeSymbol,
};
