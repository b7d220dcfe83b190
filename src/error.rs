//! Error types for host-contract and configuration failures.
//!
//! Problems in the *user's* declarations are never errors here; they are
//! reported as [`Diagnostic`](crate::diagnostics::Diagnostic)s. These types
//! cover a host handing the engine ids it does not know, or malformed
//! configuration values.

use thiserror::Error;

use crate::symbols::{MemberId, TypeId};

/// Errors that can occur while resolving delegation against a host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DelegationError {
    /// A type id was not present in the symbol snapshot.
    #[error("Unknown type: {0:?}")]
    UnknownType(TypeId),

    /// A member id was not present in the symbol snapshot.
    #[error("Unknown member: {0:?}")]
    UnknownMember(MemberId),

    /// A type with the same full name was registered twice.
    #[error("Duplicate type: {0}")]
    DuplicateType(String),

    /// A declaration referred to the wrong declaring type.
    #[error("Field {field} is not declared on {expected}")]
    ForeignField { field: String, expected: String },

    /// Configuration could not be applied.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while reading key/value configuration options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The value of a boolean option was not `true`/`false`.
    #[error("Invalid boolean for {key}: {value}")]
    InvalidBool { key: String, value: String },

    /// The value of a numeric option could not be parsed.
    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: String, value: String },
}

impl ConfigError {
    /// Create an invalid boolean error.
    pub fn invalid_bool(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidBool {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an invalid number error.
    pub fn invalid_number(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = DelegationError> = std::result::Result<T, E>;
