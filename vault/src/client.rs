//! Client base shared by concrete secret stores.
//!
//! Provides the logging mechanism only: every object handed to the logger is
//! redacted first, and every message is prefixed with `[TypeName] `.

use crate::{
    config::RedactionConfig,
    logger::{LogLevel, Logger},
    redact,
};
use serde_json::Value;
use std::{fmt, sync::Arc, sync::OnceLock};

/// Logging and redaction state embedded by every secret store.
pub struct SecretStoreClientBase {
    type_name: String,
    logger: Option<Arc<dyn Logger>>,
    redaction: RedactionConfig,
    prefix: OnceLock<String>,
}

impl SecretStoreClientBase {
    /// Create a client base for the store named `type_name`, without a logger.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            logger: None,
            redaction: RedactionConfig::default(),
            prefix: OnceLock::new(),
        }
    }

    /// Create a client base named after `T`'s short type name.
    ///
    /// ```
    /// use secret_store_client::SecretStoreClientBase;
    ///
    /// struct FileStore;
    /// let base = SecretStoreClientBase::for_type::<FileStore>();
    /// assert_eq!(base.logger_prefix(), "[FileStore] ");
    /// ```
    #[must_use]
    pub fn for_type<T: ?Sized>() -> Self {
        Self::new(short_type_name::<T>())
    }

    /// Inject a logger at construction.
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Use a custom redaction policy for logged objects.
    #[must_use]
    pub fn with_redaction(mut self, redaction: RedactionConfig) -> Self {
        self.redaction = redaction;
        self
    }

    /// Set the logger and log all information via this object.
    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.logger = Some(logger);
    }

    /// Remove the logger; subsequent log calls are no-ops.
    pub fn clear_logger(&mut self) {
        self.logger = None;
    }

    /// Whether a logger is configured.
    #[must_use]
    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }

    /// Display name of the concrete store.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Redaction policy applied to logged objects.
    #[must_use]
    pub const fn redaction(&self) -> &RedactionConfig {
        &self.redaction
    }

    /// Prefix for logged messages, computed on first use.
    pub fn logger_prefix(&self) -> &str {
        self.prefix.get_or_init(|| format!("[{}] ", self.type_name))
    }

    /// Redact `value` with the default policy.
    #[must_use]
    pub fn clean_object(value: &Value) -> Value {
        redact::clean_object(value)
    }

    /// Log at `level`, redacting `object`. No-op without a logger.
    pub fn log(&self, level: LogLevel, message: &str, object: Option<&Value>) {
        let Some(logger) = &self.logger else {
            return;
        };
        let cleaned = object.map(|o| redact::clean_object_with(o, &self.redaction));
        let message = format!("{}{message}", self.logger_prefix());
        logger.log(level, &message, cleaned.as_ref());
    }

    /// Log in debug level.
    pub fn debug(&self, message: &str, object: Option<&Value>) {
        self.log(LogLevel::Debug, message, object);
    }

    /// Log in warn level.
    pub fn warn(&self, message: &str, object: Option<&Value>) {
        self.log(LogLevel::Warn, message, object);
    }

    /// Log in info level.
    pub fn info(&self, message: &str, object: Option<&Value>) {
        self.log(LogLevel::Info, message, object);
    }

    /// Log in error level.
    pub fn error(&self, message: &str, object: Option<&Value>) {
        self.log(LogLevel::Error, message, object);
    }
}

impl fmt::Debug for SecretStoreClientBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretStoreClientBase")
            .field("type_name", &self.type_name)
            .field("has_logger", &self.has_logger())
            .field("redaction", &self.redaction)
            .finish_non_exhaustive()
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    type Entry = (LogLevel, String, Option<Value>);

    #[derive(Default)]
    struct Capture(Mutex<Vec<Entry>>);

    impl Capture {
        fn push(&self, level: LogLevel, message: &str, object: Option<&Value>) {
            self.0.lock().unwrap().push((level, message.to_string(), object.cloned()));
        }

        fn entries(&self) -> Vec<Entry> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Logger for Capture {
        fn debug(&self, message: &str, object: Option<&Value>) {
            self.push(LogLevel::Debug, message, object);
        }
        fn warn(&self, message: &str, object: Option<&Value>) {
            self.push(LogLevel::Warn, message, object);
        }
        fn info(&self, message: &str, object: Option<&Value>) {
            self.push(LogLevel::Info, message, object);
        }
        fn error(&self, message: &str, object: Option<&Value>) {
            self.push(LogLevel::Error, message, object);
        }
    }

    struct KmsStore<T>(T);

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<KmsStore<String>>(), "KmsStore");
        assert_eq!(short_type_name::<Capture>(), "Capture");
        assert_eq!(short_type_name::<u32>(), "u32");
    }

    #[test]
    fn test_prefix_format_and_cache() {
        let base = SecretStoreClientBase::new("HttpStore");
        let first: *const str = base.logger_prefix();
        let second: *const str = base.logger_prefix();
        assert_eq!(base.logger_prefix(), "[HttpStore] ");
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_no_logger_is_noop() {
        let base = SecretStoreClientBase::new("HttpStore");
        assert!(!base.has_logger());
        base.debug("nothing", Some(&json!({"password": "p"})));
        base.error("nothing", None);
    }

    #[test]
    fn test_each_level_prefixes_and_redacts() {
        let capture = Arc::new(Capture::default());
        let base = SecretStoreClientBase::new("HttpStore").with_logger(capture.clone());
        let object = json!({"path": "kv/app", "password": "p"});

        base.debug("d", Some(&object));
        base.info("i", Some(&object));
        base.warn("w", None);
        base.error("e", Some(&object));

        let expected = Some(json!({"path": "kv/app", "password": "***REDACTED***"}));
        assert_eq!(
            capture.entries(),
            vec![
                (LogLevel::Debug, "[HttpStore] d".to_string(), expected.clone()),
                (LogLevel::Info, "[HttpStore] i".to_string(), expected.clone()),
                (LogLevel::Warn, "[HttpStore] w".to_string(), None),
                (LogLevel::Error, "[HttpStore] e".to_string(), expected),
            ]
        );
    }

    #[test]
    fn test_set_logger_replaces_previous() {
        let first = Arc::new(Capture::default());
        let second = Arc::new(Capture::default());
        let mut base = SecretStoreClientBase::new("FileStore").with_logger(first.clone());

        base.info("one", None);
        base.set_logger(second.clone());
        base.info("two", None);

        assert_eq!(first.entries().len(), 1);
        assert_eq!(second.entries().len(), 1);
        assert_eq!(second.entries()[0].1, "[FileStore] two");
    }

    #[test]
    fn test_clear_logger() {
        let capture = Arc::new(Capture::default());
        let mut base = SecretStoreClientBase::new("FileStore").with_logger(capture.clone());
        base.clear_logger();
        base.info("dropped", None);
        assert!(capture.entries().is_empty());
    }

    #[test]
    fn test_custom_redaction() {
        let capture = Arc::new(Capture::default());
        let base = SecretStoreClientBase::new("FileStore")
            .with_logger(capture.clone())
            .with_redaction(RedactionConfig::default().with_sensitive_key("api_key"));

        base.info("keys", Some(&json!({"api_key": "k"})));
        assert_eq!(capture.entries()[0].2, Some(json!({"api_key": "***REDACTED***"})));
    }

    #[test]
    fn test_debug_hides_logger() {
        let base = SecretStoreClientBase::new("FileStore");
        let debug = format!("{base:?}");
        assert!(debug.contains("FileStore"));
        assert!(debug.contains("has_logger: false"));
    }
}
