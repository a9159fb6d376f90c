//! Logger interface consumed by secret store clients.
//!
//! Clients never construct a logger; one is injected. [`TracingLogger`]
//! forwards to the `tracing` facade for services that already install a
//! subscriber (see [`crate::tracing_config`]).

use serde_json::Value;
use tracing::{debug, error, info, warn};

/// Log level of a client log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level
    Error,
}

impl LogLevel {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Leveled logger accepting a message and an optional structured object.
///
/// Implementations must not panic; a client treats logging as infallible.
pub trait Logger: Send + Sync {
    /// Log in debug level.
    fn debug(&self, message: &str, object: Option<&Value>);

    /// Log in warn level.
    fn warn(&self, message: &str, object: Option<&Value>);

    /// Log in info level.
    fn info(&self, message: &str, object: Option<&Value>);

    /// Log in error level.
    fn error(&self, message: &str, object: Option<&Value>);

    /// Log at the given level.
    fn log(&self, level: LogLevel, message: &str, object: Option<&Value>) {
        match level {
            LogLevel::Debug => self.debug(message, object),
            LogLevel::Info => self.info(message, object),
            LogLevel::Warn => self.warn(message, object),
            LogLevel::Error => self.error(message, object),
        }
    }
}

/// Logger backed by the `tracing` macros.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    service_id: String,
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("secret-store")
    }
}

impl TracingLogger {
    /// Create a logger tagging every event with `service_id`.
    #[must_use]
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
        }
    }

    /// Get the service ID.
    #[must_use]
    pub fn service_id(&self) -> &str {
        &self.service_id
    }
}

fn render(object: Option<&Value>) -> String {
    object.map_or_else(|| "-".to_string(), Value::to_string)
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str, object: Option<&Value>) {
        debug!(service = %self.service_id, object = %render(object), "{}", message);
    }

    fn warn(&self, message: &str, object: Option<&Value>) {
        warn!(service = %self.service_id, object = %render(object), "{}", message);
    }

    fn info(&self, message: &str, object: Option<&Value>) {
        info!(service = %self.service_id, object = %render(object), "{}", message);
    }

    fn error(&self, message: &str, object: Option<&Value>) {
        error!(service = %self.service_id, object = %render(object), "{}", message);
    }
}
