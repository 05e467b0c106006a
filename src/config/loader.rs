//! Config file loading

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::defaults::default_config;
use super::lookup::lookup;
use crate::error::{ConfigError, Result};

/// Where a [`ConfigManager`]'s tree came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// Parsed from an in-memory YAML string.
    Inline,
    /// Built-in defaults. `missing` is the resolved path that was probed and
    /// not found, if the manager was built from a path at all.
    Defaults { missing: Option<PathBuf> },
}

/// Stack configuration loaded once from YAML, with dotted-key lookups.
///
/// The tree is never mutated after construction. [`ConfigManager::get_props`]
/// hands out a shared borrow; clone it if an owned copy is needed.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: Value,
    source: ConfigSource,
}

impl ConfigManager {
    /// Load `<base_dir>/../<config_file>`.
    ///
    /// `base_dir` is the directory of the component that owns the config
    /// (the CDK app's `utils/` directory, say), so the file sits next to it.
    /// A missing file is not an error: the built-in defaults are used. A file
    /// that exists but cannot be read or parsed fails construction.
    pub fn new(base_dir: impl AsRef<Path>, config_file: impl AsRef<Path>) -> Result<Self> {
        let config_path = Self::resolve_path(base_dir.as_ref(), config_file.as_ref());

        if !config_path.exists() {
            tracing::debug!(
                "Config file {} not found, using built-in defaults",
                config_path.display()
            );
            return Ok(Self {
                config: default_config(),
                source: ConfigSource::Defaults { missing: Some(config_path) },
            });
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|source| ConfigError::Read { path: config_path.clone(), source })?;
        let config = parse_yaml(&content)
            .map_err(|source| ConfigError::Parse { path: config_path.clone(), source })?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(Self { config, source: ConfigSource::File(config_path) })
    }

    /// Parse an in-memory YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config = parse_yaml(content).map_err(|source| ConfigError::ParseInline { source })?;
        Ok(Self { config, source: ConfigSource::Inline })
    }

    /// Path a manager built with these arguments would read.
    pub fn resolve_path(base_dir: &Path, config_file: &Path) -> PathBuf {
        base_dir.join("..").join(config_file)
    }

    /// The whole configuration tree.
    pub fn get_props(&self) -> &Value {
        &self.config
    }

    /// Look up a dotted key such as `"frontend.domain_name"`.
    ///
    /// `None` means the path could not be walked: a segment was missing or an
    /// intermediate value was not a mapping. An explicit YAML `null` is
    /// `Some(&Value::Null)`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let found = lookup(&self.config, key);
        if found.is_none() {
            tracing::trace!("Config key '{}' not found", key);
        }
        found
    }

    /// Like [`get`](Self::get), returning `default` on a miss.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Look up a dotted key and deserialize it into `T`.
    ///
    /// A miss is `Ok(None)`; a value of the wrong shape is
    /// [`ConfigError::Type`].
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        serde_yaml::from_value(value.clone())
            .map(Some)
            .map_err(|source| ConfigError::Type { key: key.to_string(), source })
    }

    /// String leaf at `key`. `None` for a miss, a null, or a non-string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// True when the built-in defaults are in use.
    pub fn is_default(&self) -> bool {
        matches!(self.source, ConfigSource::Defaults { .. })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self { config: default_config(), source: ConfigSource::Defaults { missing: None } }
    }
}

// `<<: *anchor` merge keys are resolved before the tree is stored.
fn parse_yaml(content: &str) -> std::result::Result<Value, serde_yaml::Error> {
    let mut value: Value = serde_yaml::from_str(content)?;
    value.apply_merge()?;
    Ok(value)
}
