//! Resolution tests
//!
//! End-to-end tests of the resolution engine over in-memory symbol tables:
//! - The reference scenarios (explicit interface, virtual base, stream wrapper)
//! - Target ownership between fields
//! - Ambiguity forcing and member filtering
//! - Property and indexer accessor combinations
//! - Whole-compilation resolution and configuration

pub mod tests_ambiguity;
pub mod tests_ownership;
pub mod tests_scenarios;
pub mod tests_whole_compilation;
