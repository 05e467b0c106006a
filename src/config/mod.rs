//! Configuration loading and lookup
//!
//! A single YAML file is read at construction time. When it does not exist
//! the built-in defaults are used instead; nothing is merged or overlaid.

pub mod defaults;
pub mod loader;
pub mod lookup;

pub use defaults::{default_config, DEFAULT_STACK_NAME_BASE};
pub use loader::{ConfigManager, ConfigSource};
