//! Dotted-key traversal over a configuration tree

use serde_yaml::Value;

/// Split a dotted key into its mapping segments.
///
/// An empty key yields one empty segment, which only matches an explicit
/// `""` key.
pub fn split_key(key: &str) -> impl Iterator<Item = &str> {
    key.split('.')
}

/// Walk `root` one segment at a time.
///
/// Descends only while the current value is a mapping holding the segment as
/// a string key. Anything else (missing key, scalar, sequence, null) ends the
/// walk with `None`. The reached value is returned as-is, so an explicit
/// `null` leaf is `Some(&Value::Null)`.
pub fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in split_key(key) {
        match current {
            Value::Mapping(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}
