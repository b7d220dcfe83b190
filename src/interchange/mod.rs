//! Interchange format for resolved delegation.
//!
//! Hosts that emit source out of process (a separate tool, a language
//! server, a build cache) receive the [`Resolution`](crate::resolve::Resolution)
//! as JSON instead of rendered text.
//!
//! ## Usage
//!
//! ```ignore
//! use delegation::interchange::Json;
//!
//! let resolution = delegation::resolve_all(&table, &fields, &config)?;
//! let bytes = Json.write(&table, &resolution)?;
//! ```

mod error;
mod json;

pub use error::InterchangeError;
pub use json::{FORMAT_VERSION, Json, ResolutionDocument, TypeEntry};
