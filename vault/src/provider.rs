//! Retrieval contract for secret stores.

use crate::{
    client::SecretStoreClientBase,
    error::{SecretStoreError, SecretStoreResult},
    logger::Logger,
    secret::Secret,
};
use serde_json::Value;
use std::sync::Arc;

/// A secret store that resolves paths to secrets.
///
/// Implementors embed a [`SecretStoreClientBase`] and override
/// [`get_secret`](Self::get_secret); the logging methods forward to the base.
pub trait SecretStore {
    /// The embedded client base.
    fn base(&self) -> &SecretStoreClientBase;

    /// Mutable access to the embedded client base.
    fn base_mut(&mut self) -> &mut SecretStoreClientBase;

    /// Returns the secret at `path`, an arbitrary string that uniquely
    /// identifies a secret in the store.
    ///
    /// # Errors
    ///
    /// The provided implementation always returns
    /// [`SecretStoreError::Internal`]; stores report their own failures
    /// when the secret cannot be found or retrieved.
    fn get_secret(&self, path: &str) -> SecretStoreResult<Secret> {
        let _ = path;
        Err(SecretStoreError::not_implemented(self.base().type_name()))
    }

    /// Set the logger and log all information via this object.
    fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.base_mut().set_logger(logger);
    }

    /// Log in debug level.
    fn debug(&self, message: &str, object: Option<&Value>) {
        self.base().debug(message, object);
    }

    /// Log in warn level.
    fn warn(&self, message: &str, object: Option<&Value>) {
        self.base().warn(message, object);
    }

    /// Log in info level.
    fn info(&self, message: &str, object: Option<&Value>) {
        self.base().info(message, object);
    }

    /// Log in error level.
    fn error(&self, message: &str, object: Option<&Value>) {
        self.base().error(message, object);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    struct UnfinishedStore {
        base: SecretStoreClientBase,
    }

    impl SecretStore for UnfinishedStore {
        fn base(&self) -> &SecretStoreClientBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut SecretStoreClientBase {
            &mut self.base
        }
    }

    #[test]
    fn test_default_get_secret_is_internal_error() {
        let store = UnfinishedStore {
            base: SecretStoreClientBase::for_type::<UnfinishedStore>(),
        };
        let err = store.get_secret("kv/app").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.to_string(), "UnfinishedStore::get_secret() must be implemented.");
    }

    #[test]
    fn test_set_logger_reaches_base() {
        let mut store = UnfinishedStore {
            base: SecretStoreClientBase::new("UnfinishedStore"),
        };
        assert!(!store.base().has_logger());
        store.set_logger(Arc::new(crate::logger::TracingLogger::default()));
        assert!(store.base().has_logger());
        store.info("logged through tracing", None);
    }
}
