//! Secret store error types using thiserror 2.0.
//!
//! Every error carries a numeric [`ErrorCode`] and a retryability
//! classification so callers can decide how to react without matching on
//! backend-specific details.

use thiserror::Error;

/// Numeric error codes shared by all secret stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    /// Programming error inside the client, e.g. an unimplemented contract
    Internal = 1,
    /// No secret at the requested path
    NotFound = 2,
    /// Caller may not read the requested path
    PermissionDenied = 3,
    /// Store rejected the client's credentials
    AuthenticationFailed = 4,
    /// Store could not be reached
    Unavailable = 5,
    /// Response could not be decoded
    Serialization = 6,
}

impl ErrorCode {
    /// Numeric value of the code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Secret store errors.
#[derive(Error, Debug)]
pub enum SecretStoreError {
    /// Internal error
    #[error("{message}")]
    Internal {
        /// Human readable description
        message: String,
        /// Fixed internal error code
        code: ErrorCode,
    },

    /// Secret not found
    #[error("Secret not found at path: {0}")]
    NotFound(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Secret store unavailable
    #[error("Secret store unavailable: {0}")]
    Unavailable(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for secret store operations.
pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

impl SecretStoreError {
    /// Error code of this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Internal { code, .. } => *code,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::PermissionDenied(_) => ErrorCode::PermissionDenied,
            Self::AuthenticationFailed(_) => ErrorCode::AuthenticationFailed,
            Self::Unavailable(_) => ErrorCode::Unavailable,
            Self::Serialization(_) => ErrorCode::Serialization,
        }
    }

    /// Check if error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Create the error returned when a store does not override `get_secret`.
    #[must_use]
    pub fn not_implemented(type_name: &str) -> Self {
        Self::Internal {
            message: format!("{type_name}::get_secret() must be implemented."),
            code: ErrorCode::Internal,
        }
    }

    /// Create a secret not found error.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create an authentication failed error.
    #[must_use]
    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self::AuthenticationFailed(msg.into())
    }

    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
