//! Rendering options

/// Options for rendering forwarding declarations as source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Number of spaces per indentation level (or tab width if using tabs)
    pub tab_size: usize,
    /// Use spaces for indentation (false = use tabs)
    pub insert_spaces: bool,
    /// Write `// Delegation for ...` comments above fields and targets
    pub emit_comments: bool,
    /// Tool name in the generated-code attribute
    pub generator_name: String,
    /// Tool version in the generated-code attribute
    pub generator_version: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            tab_size: 2,
            insert_spaces: true,
            emit_comments: true,
            generator_name: "DelegatedImplementation".to_string(),
            generator_version: "1.0.0.0".to_string(),
        }
    }
}

impl EmitOptions {
    /// Generate indentation string for the given level
    pub fn indent(&self, level: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size * level)
        } else {
            "\t".repeat(level)
        }
    }
}
