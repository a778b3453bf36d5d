//! Error types for the Bursary domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Two failure families
//! exist: configuration faults and generation-service faults. Everything
//! else in the system — empty model output, unparseable deadline tokens —
//! is handled in place and never becomes an error (see the provider sentinel
//! and the listings filter).

use thiserror::Error;

/// The top-level error type for all Bursary operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The generation call failed.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Configuration is missing or invalid.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures at the generation-service boundary.
///
/// `MissingApiKey` is a configuration fault detected at call time — provider
/// construction never fails. The remaining variants are service faults. All
/// of them surface to the caller unmodified; nothing here is retried.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API key not set — export OPENAI_API_KEY or add api_key to the config file")]
    MissingApiKey,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Malformed response body: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays_status() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 503,
            message: "upstream unavailable".into(),
        });
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[test]
    fn missing_key_error_names_the_env_var() {
        let err = Error::Provider(ProviderError::MissingApiKey);
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn config_error_display() {
        let err = Error::Config {
            message: "history.max_turns must be at least 1".into(),
        };
        assert!(err.to_string().contains("max_turns"));
    }
}
