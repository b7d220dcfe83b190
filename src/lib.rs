//! # delegation-base
//!
//! Core library for member delegation: given fields annotated to delegate
//! to their held value, work out which interface and base-class members the
//! declaring type should forward, and describe each forwarder.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! emit         → Reference renderer (C#-style partial classes)
//!   ↓
//! resolve      → Target registry, member filter, forwarder synthesis
//!   ↓
//! diagnostics  → Collected, never thrown, user-facing findings
//!   ↓
//! decl         → Annotated field declarations and their normalization
//!   ↓
//! symbols      → Host capability trait, in-memory SymbolTable
//!   ↓
//! base         → Primitives (FileId, Span, Position)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use delegation::{DelegationConfig, EmitOptions, resolve_all, render_resolution};
//!
//! let resolution = resolve_all(&table, &fields, &DelegationConfig::default())?;
//! for diagnostic in resolution.diagnostics() {
//!     eprintln!("{}: {}", diagnostic.code, diagnostic.message);
//! }
//! let source = render_resolution(&table, &resolution, &EmitOptions::default());
//! ```

// ============================================================================
// MODULES (dependency order: base → symbols → decl → diagnostics → resolve → emit)
// ============================================================================

/// Foundation types: FileId, Span, Position
pub mod base;

/// Host symbol model: types, members, SymbolHost, SymbolTable
pub mod symbols;

/// Delegation declarations: annotations, fields, target normalization
pub mod decl;

/// Diagnostics: kinds, codes, collector
pub mod diagnostics;

/// Resolution engine: registry, filter, synthesis, per-type and whole-compilation entry points
pub mod resolve;

/// Rendering of forwarding declarations as source text
pub mod emit;

/// Key/value configuration
pub mod config;

/// Host-contract and configuration errors
pub mod error;

/// JSON export of resolutions
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export the entry points
pub use config::DelegationConfig;
pub use decl::{DelegateAnnotation, FieldDecl};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use emit::{EmitOptions, render_resolution, render_type};
pub use error::{ConfigError, DelegationError, Result};
pub use resolve::{Resolution, TypeResolution, resolve_all, resolve_type};
pub use symbols::{SymbolHost, SymbolTable, TypeId};

// Re-export foundation types
pub use base::{FileId, Position, Span};
