//! Script host configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Default name of the global table holding the accessors.
pub const DEFAULT_TABLE_NAME: &str = "press";

/// Globals removed from the interpreter when sandboxing.
pub const SANDBOXED_GLOBALS: &[&str] = &["os", "io", "package", "require", "dofile", "loadfile"];

/// Settings for a [`ScriptHost`](crate::ScriptHost).
///
/// # Example
///
/// ```
/// use horizon_press_script::ScriptHostConfig;
///
/// let config = ScriptHostConfig::from_toml_str(r#"
///     table_name = "doc"
///     memory_limit = 16777216
/// "#).unwrap();
///
/// assert_eq!(config.table_name, "doc");
/// assert!(config.sandbox);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptHostConfig {
    /// Name of the global table the accessors are registered in.
    pub table_name: String,
    /// Interpreter memory limit in bytes, unlimited if `None`.
    pub memory_limit: Option<usize>,
    /// Remove file, process and module loading facilities from scripts.
    pub sandbox: bool,
}

impl Default for ScriptHostConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            memory_limit: None,
            sandbox: true,
        }
    }
}

impl ScriptHostConfig {
    /// Parses and validates a configuration from TOML.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the table name is usable as a Lua global.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_lua_identifier(&self.table_name) {
            Ok(())
        } else {
            Err(ConfigError::InvalidTableName(self.table_name.clone()))
        }
    }
}

fn is_lua_identifier(name: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
        "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
    ];

    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name)
}
