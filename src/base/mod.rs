//! Foundation types for the delegation engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Opaque identifiers for source files owned by the host
//! - [`Position`], [`Span`] - Line/column locations of declarations
//!
//! This module has NO dependencies on other crate modules.

mod file_id;
mod position;

pub use file_id::FileId;
pub use position::{Position, Span};
