//! Engine configuration.
//!
//! Hosts usually carry settings as string pairs (build properties, an
//! editorconfig section, command-line `key=value` switches). Both option
//! structs here can be read from such pairs; keys they do not recognize are
//! left for other consumers.

use crate::emit::EmitOptions;
use crate::error::ConfigError;

/// Prefix shared by every recognized key.
pub const KEY_PREFIX: &str = "delegation.";

/// Options that influence resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegationConfig {
    /// Resolve declaring types on the rayon pool.
    pub parallel: bool,
    /// Warn about fields whose type is nullable.
    pub report_nullable: bool,
    /// Ignore fields declared in anything other than a class.
    pub only_classes: bool,
}

impl Default for DelegationConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            report_nullable: true,
            only_classes: true,
        }
    }
}

impl DelegationConfig {
    /// Read `delegation.parallel`, `delegation.report_nullable` and
    /// `delegation.only_classes` over the defaults.
    pub fn from_options<'a, I>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in options {
            match key.trim() {
                "delegation.parallel" => config.parallel = parse_bool(key, value)?,
                "delegation.report_nullable" => config.report_nullable = parse_bool(key, value)?,
                "delegation.only_classes" => config.only_classes = parse_bool(key, value)?,
                _ => {}
            }
        }
        Ok(config)
    }
}

impl EmitOptions {
    /// Read the `delegation.emit_*`, `delegation.tab_size`,
    /// `delegation.insert_spaces` and `delegation.generator_*` keys over the
    /// defaults.
    pub fn from_options<'a, I>(options: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut emit = Self::default();
        for (key, value) in options {
            match key.trim() {
                "delegation.emit_comments" => emit.emit_comments = parse_bool(key, value)?,
                "delegation.insert_spaces" => emit.insert_spaces = parse_bool(key, value)?,
                "delegation.tab_size" => {
                    emit.tab_size = value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::invalid_number(key, value))?
                }
                "delegation.generator_name" => emit.generator_name = value.trim().into(),
                "delegation.generator_version" => emit.generator_version = value.trim().into(),
                _ => {}
            }
        }
        Ok(emit)
    }
}

/// Accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0`, case-insensitively.
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::invalid_bool(key, value)),
    }
}
