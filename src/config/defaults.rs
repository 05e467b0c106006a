//! Built-in fallback configuration

use serde_yaml::{Mapping, Value};

pub const DEFAULT_STACK_NAME_BASE: &str = "genaiid-agentcore-starter-pack";

/// Configuration used when no config file is present.
///
/// ```yaml
/// stack_name_base: "genaiid-agentcore-starter-pack"
/// frontend:
///   domain_name: null
///   certificate_arn: null
/// ```
///
/// Built fresh on every call so each manager owns its own tree.
pub fn default_config() -> Value {
    let mut frontend = Mapping::new();
    frontend.insert(Value::from("domain_name"), Value::Null);
    frontend.insert(Value::from("certificate_arn"), Value::Null);

    let mut root = Mapping::new();
    root.insert(Value::from("stack_name_base"), Value::from(DEFAULT_STACK_NAME_BASE));
    root.insert(Value::from("frontend"), Value::Mapping(frontend));

    Value::Mapping(root)
}
