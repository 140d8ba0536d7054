//! Environment configuration.

use std::fs;
use std::path::Path;

use crate::env::method::ArityPolicy;

/// Which namespaces a guest context gets.
///
/// Each namespace is gated independently. Disabling one removes both the
/// root member and its top-level alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    pub console: bool,
    pub history: bool,
    pub document: bool,
}

impl CapabilitySet {
    /// Every namespace enabled, `document` included.
    pub fn full() -> Self {
        CapabilitySet {
            console: true,
            history: true,
            document: true,
        }
    }

    /// Document introspection disabled.
    pub fn restricted() -> Self {
        CapabilitySet {
            document: false,
            ..Self::full()
        }
    }
}

impl Default for CapabilitySet {
    fn default() -> Self {
        Self::full()
    }
}

/// Complete configuration for one guest context.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub capabilities: CapabilitySet,
    pub arity_policy: ArityPolicy,
}

impl EnvConfig {
    pub fn new() -> Self {
        EnvConfig {
            capabilities: CapabilitySet::full(),
            arity_policy: ArityPolicy::Lenient,
        }
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("Failed to read config file: {}", e)))?;
        Self::parse(&content)
    }

    /// Parse configuration from text.
    ///
    /// Expected format, one `key = value` pair per line:
    ///
    /// ```text
    /// # namespaces
    /// console = true
    /// history = true
    /// document = false
    ///
    /// strict_arity = false
    /// ```
    ///
    /// Omitted keys keep their defaults (all namespaces on, lenient arity).
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = EnvConfig::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(str::trim).unwrap_or("");
            let value = match parts.next() {
                Some(v) => v.trim(),
                None => {
                    return Err(ConfigError::ParseError(format!(
                        "Expected 'key = value', got '{}'",
                        line
                    )))
                }
            };

            let flag = match value {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "Expected 'true' or 'false' for '{}', got '{}'",
                        key, value
                    )))
                }
            };

            match key {
                "console" => config.capabilities.console = flag,
                "history" => config.capabilities.history = flag,
                "document" => config.capabilities.document = flag,
                "strict_arity" => {
                    config.arity_policy = if flag {
                        ArityPolicy::Strict
                    } else {
                        ArityPolicy::Lenient
                    }
                }
                _ => return Err(ConfigError::ParseError(format!("Unknown key '{}'", key))),
            }
        }

        Ok(config)
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    ReadError(String),
    /// Config text is malformed.
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(msg) => write!(f, "Config read error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
