//! Shared proptest generators for secret store tests.

use proptest::prelude::*;
use secret_store_client::is_sensitive_key;
use serde_json::{Map, Value};

/// Keys redacted on exact match.
pub fn exact_sensitive_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("username".to_string()),
        Just("password".to_string()),
        Just("passwd".to_string()),
        Just("client_token".to_string()),
        Just("accessor".to_string()),
    ]
}

/// Keys redacted by the `pass` substring rule.
pub fn pass_key_strategy() -> impl Strategy<Value = String> {
    ("[a-z_]{0,8}", "[a-z_]{0,8}").prop_map(|(head, tail)| format!("{head}pass{tail}"))
}

/// Any key that is redacted under the default policy.
pub fn sensitive_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![exact_sensitive_key_strategy(), pass_key_strategy()]
}

/// Keys that are never redacted under the default policy.
pub fn plain_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,15}".prop_filter("key must not be sensitive", |k| !is_sensitive_key(k))
}

/// Generate JSON scalars, null included.
pub fn json_scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,24}".prop_map(Value::String),
    ]
}

/// Generate arbitrary JSON values with nested objects and arrays, using both
/// sensitive and plain keys.
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    json_scalar_strategy().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            json_object_strategy_with(inner),
        ]
    })
}

/// Generate JSON objects whose values come from `values`.
pub fn json_object_strategy_with(
    values: impl Strategy<Value = Value>,
) -> impl Strategy<Value = Value> {
    let key = prop_oneof![plain_key_strategy(), sensitive_key_strategy()];
    prop::collection::vec((key, values), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<String, Value>>()))
}

/// Generate arbitrary JSON objects.
pub fn json_object_strategy() -> impl Strategy<Value = Value> {
    json_object_strategy_with(json_value_strategy())
}

/// Generate valid secret paths.
pub fn secret_path_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}(/[a-z][a-z0-9-]{0,20}){0,3}"
}

/// Generate store type names.
pub fn type_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9]{0,20}"
}

/// Generate log messages.
pub fn log_message_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,64}"
}
