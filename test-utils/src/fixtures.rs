//! Test fixtures with sample store responses.

use serde_json::{Value, json};

/// KV v2 read response with credentials and version metadata.
#[must_use]
pub fn kv_v2_response() -> Value {
    json!({
        "data": {
            "username": "app_user",
            "password": "db-password-xyz",
            "host": "db.internal",
            "port": 5432,
        },
        "metadata": {
            "created_time": "2024-01-01T00:00:00Z",
            "deletion_time": "",
            "destroyed": false,
            "version": 3,
        },
    })
}

/// Flat response without a nested `data` field.
#[must_use]
pub fn flat_response() -> Value {
    json!({
        "username": "app_user",
        "password": "db-password-xyz",
    })
}

/// Auth response carrying a client token and accessor.
#[must_use]
pub fn auth_response() -> Value {
    json!({
        "auth": {
            "client_token": "s.abc123",
            "accessor": "acc-456",
            "policies": ["default", "auth-platform"],
            "lease_duration": 3600,
            "renewable": true,
        },
    })
}

/// Response whose sensitive values sit inside an array.
#[must_use]
pub fn response_with_credential_list() -> Value {
    json!({
        "role": "readonly",
        "credentials": [
            {"username": "a", "password": "p1"},
            {"username": "b", "password": "p2"},
        ],
    })
}
