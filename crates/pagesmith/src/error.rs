//! Error types for Pagesmith operations
//!
//! One taxonomy is shared by the pipeline, the Gemini client and the
//! server. Nothing in Pagesmith retries: [`Error::is_retryable`] exists
//! so callers can classify a failure, not because a retry loop does.

use thiserror::Error;

/// Result type alias for Pagesmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Pagesmith operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation error (empty page description, missing template
    /// variable). Not retryable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (bad address, unparseable temperature).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Authentication/authorization error from the model provider
    /// (missing or rejected API key). Requires a credential fix.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Rate limit reported by the model provider.
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// API error from the model provider (non-2xx status, provider-side
    /// failure message).
    #[error("API error: {0}")]
    Api(String),

    /// API format mismatch (response parsed but missing the fields we
    /// need, e.g. no candidates).
    #[error("API format error: {0}")]
    ApiFormat(String),

    /// Network error (connect failure, reset, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// Timeout from the underlying HTTP client.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error for anything else.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an authentication error
    pub fn authentication<S: Into<String>>(msg: S) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a rate limit error
    pub fn rate_limit<S: Into<String>>(msg: S) -> Self {
        Self::RateLimit(msg.into())
    }

    /// Create an API error
    pub fn api<S: Into<String>>(msg: S) -> Self {
        Self::Api(msg.into())
    }

    /// Create an API format error
    pub fn api_format<S: Into<String>>(msg: S) -> Self {
        Self::ApiFormat(msg.into())
    }

    /// Create a network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// Transient transport failures and rate limits are retryable;
    /// credential, input and format errors are not. Pagesmith itself
    /// never retries (a failed turn simply surfaces to the caller).
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Network(_) | Error::Timeout(_) | Error::RateLimit(_)
        )
    }

    /// Whether this failure needs operator attention (credentials,
    /// configuration) rather than different input.
    #[must_use]
    pub fn is_environmental(&self) -> bool {
        matches!(
            self,
            Error::Authentication(_)
                | Error::Configuration(_)
                | Error::Network(_)
                | Error::Timeout(_)
                | Error::RateLimit(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let base_msg = err.to_string();

        // Keep the target host in the message for diagnostics
        let url_info = err
            .url()
            .map(|u| format!(" (host: {})", u.host_str().unwrap_or("unknown")))
            .unwrap_or_default();

        if err.is_timeout() {
            Error::Timeout(format!("{base_msg}{url_info}"))
        } else if err.is_connect() || err.is_request() {
            Error::Network(format!("{base_msg}{url_info}"))
        } else if err.is_status() {
            Error::Api(format!("{base_msg}{url_info}"))
        } else {
            Error::Other(format!("{base_msg}{url_info}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = Error::api("test error");
        assert!(matches!(err, Error::Api(_)));

        let err = Error::invalid_input("bad input");
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = Error::rate_limit("too many requests");
        assert!(matches!(err, Error::RateLimit(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::api("test").to_string(), "API error: test");
        assert_eq!(
            Error::invalid_input("invalid").to_string(),
            "Invalid input: invalid"
        );
        assert_eq!(
            Error::authentication("no key").to_string(),
            "Authentication error: no key"
        );
        assert_eq!(Error::other("anything").to_string(), "anything");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::network("connection refused").is_retryable());
        assert!(Error::rate_limit("429").is_retryable());
        assert!(Error::Timeout("10s elapsed".into()).is_retryable());

        assert!(!Error::authentication("invalid key").is_retryable());
        assert!(!Error::invalid_input("empty").is_retryable());
        assert!(!Error::api_format("no candidates").is_retryable());
        assert!(!Error::api("500").is_retryable());
    }

    #[test]
    fn test_is_environmental() {
        assert!(Error::authentication("invalid key").is_environmental());
        assert!(Error::config("bad port").is_environmental());
        assert!(Error::network("reset").is_environmental());

        assert!(!Error::invalid_input("empty").is_environmental());
        assert!(!Error::api_format("missing field").is_environmental());
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err: std::result::Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("not json");
        let err: Error = match json_err {
            Err(e) => e.into(),
            Ok(_) => unreachable!(),
        };
        assert!(matches!(err, Error::Serialization(_)));
    }
}
