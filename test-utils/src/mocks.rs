//! Mock implementations for testing.

use secret_store_client::{
    LogLevel, Logger, Secret, SecretStore, SecretStoreClientBase, SecretStoreError,
    SecretStoreResult,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// A log call captured by [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq)]
pub struct MockLogEntry {
    /// Log level
    pub level: LogLevel,
    /// Message as delivered, prefix included
    pub message: String,
    /// Object as delivered, already redacted
    pub object: Option<Value>,
}

/// Logger that keeps every call in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    logs: Mutex<Vec<MockLogEntry>>,
}

impl RecordingLogger {
    /// Create a new recording logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, level: LogLevel, message: &str, object: Option<&Value>) {
        let entry = MockLogEntry {
            level,
            message: message.to_string(),
            object: object.cloned(),
        };
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).push(entry);
    }

    /// Get all logged entries.
    pub fn get_logs(&self) -> Vec<MockLogEntry> {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Clear all logs.
    pub fn clear(&self) {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Get log count.
    pub fn count(&self) -> usize {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str, object: Option<&Value>) {
        self.record(LogLevel::Debug, message, object);
    }

    fn warn(&self, message: &str, object: Option<&Value>) {
        self.record(LogLevel::Warn, message, object);
    }

    fn info(&self, message: &str, object: Option<&Value>) {
        self.record(LogLevel::Info, message, object);
    }

    fn error(&self, message: &str, object: Option<&Value>) {
        self.record(LogLevel::Error, message, object);
    }
}

/// In-memory secret store keyed by path.
#[derive(Debug)]
pub struct MockSecretStore {
    base: SecretStoreClientBase,
    secrets: HashMap<String, Value>,
}

impl Default for MockSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSecretStore {
    /// Create an empty store without a logger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: SecretStoreClientBase::for_type::<Self>(),
            secrets: HashMap::new(),
        }
    }

    /// Set the raw response returned for `path`.
    pub fn set_secret(&mut self, path: &str, raw: Value) {
        self.secrets.insert(path.to_string(), raw);
    }

    /// Delete a secret.
    pub fn delete_secret(&mut self, path: &str) {
        self.secrets.remove(path);
    }

    /// Check if a secret exists.
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.secrets.contains_key(path)
    }
}

impl SecretStore for MockSecretStore {
    fn base(&self) -> &SecretStoreClientBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut SecretStoreClientBase {
        &mut self.base
    }

    fn get_secret(&self, path: &str) -> SecretStoreResult<Secret> {
        self.debug("Getting secret", Some(&json!({ "path": path })));
        match self.secrets.get(path) {
            Some(raw) => {
                self.info("Secret retrieved", Some(raw));
                Ok(Secret::new(raw.clone()))
            }
            None => {
                self.warn("Secret not found", Some(&json!({ "path": path })));
                Err(SecretStoreError::not_found(path))
            }
        }
    }
}
