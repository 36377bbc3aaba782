//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use appconsole_api::Realm;

// Re-export library error type
pub use appconsole_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No session material stored for the realm; the user must log in again
    #[error("No active {0} session")]
    MissingSession(Realm),

    /// Backend returned something that could not be interpreted
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Too many failed login attempts
    #[error("Too many attempts, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Screen not found in the app configuration
    #[error("Screen not found: {0}")]
    ScreenNotFound(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Backend error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, expired session, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingSession(_)
            | Self::ValidationError(_)
            | Self::RateLimited { .. }
            | Self::ScreenNotFound(_) => true,
            Self::Api(e) => e.is_expected(),
            _ => false,
        }
    }

    /// Whether the user has to log in again.
    #[must_use]
    pub fn requires_login(&self) -> bool {
        match self {
            Self::MissingSession(_) => true,
            Self::Api(e) => e.is_session_expired(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_is_expected_and_requires_login() {
        let err = CoreError::MissingSession(Realm::Admin);
        assert!(err.is_expected());
        assert!(err.requires_login());
        assert_eq!(err.to_string(), "No active admin session");
    }

    #[test]
    fn api_errors_delegate_classification() {
        let unauthorized: CoreError = ApiError::Unauthorized {
            endpoint: "GET /promo".into(),
            raw_message: None,
        }
        .into();
        assert!(unauthorized.is_expected());
        assert!(unauthorized.requires_login());

        let network: CoreError = ApiError::NetworkError {
            endpoint: "GET /promo".into(),
            detail: "connection refused".into(),
        }
        .into();
        assert!(!network.is_expected());
        assert!(!network.requires_login());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::RateLimited {
            retry_after_secs: 42,
        })
        .unwrap();
        assert_eq!(json["code"], "RateLimited");
        assert_eq!(json["details"]["retry_after_secs"], 42);
    }
}
