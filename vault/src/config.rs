//! Redaction policy configuration.

/// Marker that replaces sensitive values in logged objects.
pub const REDACTED_MARKER: &str = "***REDACTED***";

/// Keys that are always redacted.
pub const SENSITIVE_KEYS: [&str; 5] = ["username", "password", "passwd", "client_token", "accessor"];

/// Any key containing this substring is redacted.
pub const SENSITIVE_SUBSTRING: &str = "pass";

/// Redaction policy applied to objects on the logging path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionConfig {
    /// Replacement for sensitive values
    pub marker: String,
    /// Keys matched exactly (case-sensitive)
    pub sensitive_keys: Vec<String>,
    /// Substrings matched anywhere in a key (case-sensitive)
    pub sensitive_substrings: Vec<String>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            marker: REDACTED_MARKER.to_string(),
            sensitive_keys: SENSITIVE_KEYS.iter().map(ToString::to_string).collect(),
            sensitive_substrings: vec![SENSITIVE_SUBSTRING.to_string()],
        }
    }
}

impl RedactionConfig {
    /// Set the replacement marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Add a key that is redacted on exact match.
    #[must_use]
    pub fn with_sensitive_key(mut self, key: impl Into<String>) -> Self {
        self.sensitive_keys.push(key.into());
        self
    }

    /// Add a substring that marks any key containing it as sensitive.
    #[must_use]
    pub fn with_sensitive_substring(mut self, substring: impl Into<String>) -> Self {
        self.sensitive_substrings.push(substring.into());
        self
    }

    /// Whether values under `key` must be redacted.
    #[must_use]
    pub fn is_sensitive(&self, key: &str) -> bool {
        self.sensitive_keys.iter().any(|k| k == key)
            || self.sensitive_substrings.iter().any(|s| key.contains(s.as_str()))
    }
}
