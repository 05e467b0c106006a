//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed reading config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file (or inline document) is not valid YAML.
    #[error("Invalid YAML syntax: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An in-memory document passed to `from_yaml_str` is not valid YAML.
    #[error("Invalid YAML syntax in inline config")]
    ParseInline {
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Config value at '{key}' has an unexpected shape")]
    Type {
        key: String,
        #[source]
        source: serde_yaml::Error,
    },
}
