//! Diagnostic assertion helpers for resolution tests.

use delegation::diagnostics::{Diagnostic, DiagnosticKind};
use delegation::resolve::TypeResolution;

/// Kinds of all diagnostics, in report order.
pub fn kinds(resolution: &TypeResolution) -> Vec<DiagnosticKind> {
    resolution.diagnostics.iter().map(|d| d.kind).collect()
}

/// Diagnostics of one kind.
pub fn of_kind(resolution: &TypeResolution, kind: DiagnosticKind) -> Vec<&Diagnostic> {
    resolution.diagnostics.iter().filter(|d| d.kind == kind).collect()
}

/// Assert a resolution reported nothing.
pub fn assert_no_diagnostics(resolution: &TypeResolution) {
    assert!(
        resolution.diagnostics.is_empty(),
        "Expected no diagnostics, got {}:\n{}",
        resolution.diagnostics.len(),
        resolution
            .diagnostics
            .iter()
            .map(|d| format!("  {} {}", d.code, d.message))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
