//! stack-config: YAML stack configuration with built-in defaults
//!
//! Loads the infrastructure stack settings file once, falling back to a
//! hardcoded default mapping when the file is absent, and answers dotted-key
//! lookups (`"frontend.domain_name"`) against the loaded tree.

pub mod config;
pub mod error;

pub use config::{default_config, ConfigManager, ConfigSource, DEFAULT_STACK_NAME_BASE};
pub use error::{ConfigError, Result};

/// The configuration tree type. Re-exported so callers can match on variants
/// without naming `serde_yaml` themselves.
pub use serde_yaml::Value;
