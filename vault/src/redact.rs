//! Redaction of sensitive fields in objects headed for a logger.
//!
//! The decision is made on field names only. Objects are copied and walked
//! recursively; arrays are passed through untouched, including any sensitive
//! objects nested inside them.

use crate::config::RedactionConfig;
use serde_json::{Map, Value};
use std::sync::OnceLock;

fn default_config() -> &'static RedactionConfig {
    static DEFAULT: OnceLock<RedactionConfig> = OnceLock::new();
    DEFAULT.get_or_init(RedactionConfig::default)
}

/// Copy `value` with every sensitive scalar field replaced by
/// `***REDACTED***`.
///
/// Null and non-object values are returned unchanged.
///
/// # Examples
///
/// ```
/// use secret_store_client::clean_object;
/// use serde_json::json;
///
/// let cleaned = clean_object(&json!({"user": "ann", "password": "hunter2"}));
/// assert_eq!(cleaned, json!({"user": "ann", "password": "***REDACTED***"}));
/// ```
#[must_use]
pub fn clean_object(value: &Value) -> Value {
    clean_object_with(value, default_config())
}

/// Same as [`clean_object`] with a custom policy.
#[must_use]
pub fn clean_object_with(value: &Value, config: &RedactionConfig) -> Value {
    match value {
        Value::Object(fields) => Value::Object(clean_fields(fields, config)),
        other => other.clone(),
    }
}

/// Whether `key` is sensitive under the default policy.
#[must_use]
pub fn is_sensitive_key(key: &str) -> bool {
    default_config().is_sensitive(key)
}

fn clean_fields(fields: &Map<String, Value>, config: &RedactionConfig) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| {
            let cleaned = match value {
                Value::Object(nested) => Value::Object(clean_fields(nested, config)),
                Value::Array(_) => value.clone(),
                _ if config.is_sensitive(key) => Value::String(config.marker.clone()),
                _ => value.clone(),
            };
            (key.clone(), cleaned)
        })
        .collect()
}
