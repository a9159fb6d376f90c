//! Secret value returned by secret stores.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Field holding the secret's values.
pub const DATA_FIELD: &str = "data";

/// Field holding store-specific metadata.
pub const METADATA_FIELD: &str = "metadata";

/// A secret that holds the values from the store.
///
/// Built from the raw response of a store: every top-level field of the
/// response is kept as-is. [`get`](Self::get) only reads through the nested
/// `data` field, so a response without one yields no values.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Map<String, Value>")]
pub struct Secret {
    raw_fields: Map<String, Value>,
}

impl Secret {
    /// Construct the secret from the store's data.
    ///
    /// Anything other than an object is kept under the `data` field.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        let raw_fields = match raw {
            Value::Object(fields) => fields,
            other => {
                let mut fields = Map::new();
                fields.insert(DATA_FIELD.to_string(), other);
                fields
            }
        };
        Self { raw_fields }
    }

    /// Parse a raw JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`SecretStoreError::Serialization`](crate::SecretStoreError::Serialization)
    /// if `body` is not valid JSON.
    pub fn from_json(body: &str) -> crate::SecretStoreResult<Self> {
        Ok(Self::new(serde_json::from_str(body)?))
    }

    /// Returns a value from the secret's `data`, or `None` if not set.
    ///
    /// ```
    /// use secret_store_client::Secret;
    /// use serde_json::json;
    ///
    /// let secret = Secret::new(json!({"data": {"user": "a"}}));
    /// assert_eq!(secret.get("user"), Some(&json!("a")));
    /// assert_eq!(Secret::new(json!({"user": "a"})).get("user"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw_fields
            .get(DATA_FIELD)?
            .as_object()?
            .get(key)
            .filter(|value| !value.is_null())
    }

    /// Returns a string value from the secret's `data`, wrapped so it does not
    /// leak through `Debug`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<SecretString> {
        self.get(key)?.as_str().map(SecretString::from)
    }

    /// Returns the store's metadata for this secret, if set.
    #[must_use]
    pub fn meta(&self) -> Option<&Value> {
        self.raw_fields.get(METADATA_FIELD)
    }

    /// Returns a top-level field of the raw response.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.raw_fields.get(name)
    }

    /// All top-level fields of the raw response.
    #[must_use]
    pub const fn raw_fields(&self) -> &Map<String, Value> {
        &self.raw_fields
    }
}

impl From<Value> for Secret {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

impl From<Map<String, Value>> for Secret {
    fn from(raw_fields: Map<String, Value>) -> Self {
        Self { raw_fields }
    }
}

impl From<Secret> for Map<String, Value> {
    fn from(secret: Secret) -> Self {
        secret.raw_fields
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.raw_fields.keys().map(String::as_str).collect();
        f.debug_struct("Secret")
            .field("fields", &fields)
            .field(DATA_FIELD, &"[REDACTED]")
            .field(METADATA_FIELD, &self.meta())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serde_json::json;

    fn kv_secret() -> Secret {
        Secret::new(json!({
            "data": {"user": "a", "password": "b", "unset": null},
            "metadata": {"v": 1},
        }))
    }

    #[test]
    fn test_get_reads_nested_data() {
        let secret = kv_secret();
        assert_eq!(secret.get("user"), Some(&json!("a")));
        assert_eq!(secret.get("password"), Some(&json!("b")));
        assert_eq!(secret.get("missing"), None);
        assert_eq!(secret.meta(), Some(&json!({"v": 1})));
    }

    #[test]
    fn test_null_value_is_unset() {
        assert_eq!(kv_secret().get("unset"), None);
    }

    #[test]
    fn test_flat_input_has_no_values() {
        let secret = Secret::new(json!({"user": "a"}));
        assert_eq!(secret.get("user"), None);
        assert_eq!(secret.meta(), None);
        assert_eq!(secret.field("user"), Some(&json!("a")));
    }

    #[test]
    fn test_raw_fields_mirror_input() {
        let input = json!({"data": {"k": 1}, "lease_id": "", "renewable": false});
        let secret = Secret::new(input.clone());
        assert_eq!(Value::Object(secret.raw_fields().clone()), input);
    }

    #[test]
    fn test_scalar_input_stored_under_data() {
        let secret = Secret::new(json!("opaque"));
        assert_eq!(secret.field("data"), Some(&json!("opaque")));
        assert_eq!(secret.get("anything"), None);
        assert_eq!(secret.meta(), None);
    }

    #[test]
    fn test_array_input_stored_under_data() {
        let secret = Secret::new(json!([1, 2]));
        assert_eq!(secret.raw_fields().len(), 1);
        assert_eq!(secret.field("data"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_non_object_data_yields_none() {
        let secret = Secret::new(json!({"data": "flat"}));
        assert_eq!(secret.get("flat"), None);
    }

    #[test]
    fn test_get_str() {
        let secret = kv_secret();
        let password = secret.get_str("password").unwrap();
        assert_eq!(password.expose_secret(), "b");
        assert!(Secret::new(json!({"data": {"n": 5}})).get_str("n").is_none());
    }

    #[test]
    fn test_from_json() {
        let secret = Secret::from_json(r#"{"data":{"user":"a"}}"#).unwrap();
        assert_eq!(secret.get("user"), Some(&json!("a")));
        assert!(Secret::from_json("{not json").is_err());
    }

    #[test]
    fn test_serde_round_trip_keeps_fields() {
        let secret = kv_secret();
        let encoded = serde_json::to_value(&secret).unwrap();
        assert_eq!(encoded["metadata"], json!({"v": 1}));
        let decoded: Secret = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, secret);
    }

    #[test]
    fn test_debug_hides_data() {
        let debug = format!("{:?}", kv_secret());
        assert!(!debug.contains("\"b\""));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("metadata"));
    }
}
