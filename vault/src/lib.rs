//! Secret store client core for Auth Platform
//!
//! Provides the retrieval contract for secret stores, a redacting logging
//! base that stores embed, and the [`Secret`] value they return.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod provider;
pub mod redact;
pub mod secret;
pub mod tracing_config;

pub use client::SecretStoreClientBase;
pub use config::{REDACTED_MARKER, RedactionConfig};
pub use error::{ErrorCode, SecretStoreError, SecretStoreResult};
pub use logger::{LogLevel, Logger, TracingLogger};
pub use provider::SecretStore;
pub use redact::{clean_object, clean_object_with, is_sensitive_key};
pub use secret::Secret;
pub use tracing_config::{TracingConfig, init_tracing};
