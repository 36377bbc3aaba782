use serde::{Deserialize, Serialize};

/// Unified error type for all console backend operations.
///
/// Each variant includes an `endpoint` field identifying the request that
/// failed, plus variant-specific context. All variants are serializable for
/// structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): backend rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Request that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Request that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The session key, auth seed or token was rejected (HTTP 401).
    Unauthorized {
        /// Request that produced the error.
        endpoint: String,
        /// Original error message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The authenticated session lacks permission for the operation (HTTP 403).
    PermissionDenied {
        /// Request that produced the error.
        endpoint: String,
        /// Original error message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The addressed resource does not exist (HTTP 404).
    NotFound {
        /// Request that produced the error.
        endpoint: String,
        /// Original error message from the backend, if available.
        raw_message: Option<String>,
    },

    /// A request parameter was rejected (HTTP 400/422), e.g. a malformed phone number.
    InvalidParameter {
        /// Request that produced the error.
        endpoint: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The backend rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Request that produced the error.
        endpoint: String,
        /// Suggested wait time in seconds before retrying, if provided.
        retry_after: Option<u64>,
        /// Original error message from the backend, if available.
        raw_message: Option<String>,
    },

    /// The backend answered `{"success": false, ...}` with a 2xx status.
    Rejected {
        /// Request that produced the error.
        endpoint: String,
        /// Message carried by the envelope.
        raw_message: String,
    },

    /// Failed to parse the backend response.
    ParseError {
        /// Request that produced the error.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Request that produced the error.
        endpoint: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// Any other non-success status.
    Unknown {
        /// Request that produced the error.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        raw_message: String,
    },
}

impl ApiError {
    /// Whether the failure is expected behavior (bad input, missing resource, expired
    /// session), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::PermissionDenied { .. }
                | Self::NotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::Rejected { .. }
        )
    }

    /// Whether the session behind the request is no longer valid.
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Request that produced the error.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        match self {
            Self::NetworkError { endpoint, .. }
            | Self::Timeout { endpoint, .. }
            | Self::Unauthorized { endpoint, .. }
            | Self::PermissionDenied { endpoint, .. }
            | Self::NotFound { endpoint, .. }
            | Self::InvalidParameter { endpoint, .. }
            | Self::RateLimited { endpoint, .. }
            | Self::Rejected { endpoint, .. }
            | Self::ParseError { endpoint, .. }
            | Self::SerializationError { endpoint, .. }
            | Self::Unknown { endpoint, .. } => endpoint,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timeout: {detail}")
            }
            Self::Unauthorized {
                endpoint,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] Session rejected: {msg}")
                } else {
                    write!(f, "[{endpoint}] Session rejected")
                }
            }
            Self::PermissionDenied {
                endpoint,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] Permission denied: {msg}")
                } else {
                    write!(f, "[{endpoint}] Permission denied")
                }
            }
            Self::NotFound {
                endpoint,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{endpoint}] Not found: {msg}")
                } else {
                    write!(f, "[{endpoint}] Not found")
                }
            }
            Self::InvalidParameter { endpoint, detail } => {
                write!(f, "[{endpoint}] Invalid parameter: {detail}")
            }
            Self::RateLimited {
                endpoint,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{endpoint}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{endpoint}] Rate limited")
                }
            }
            Self::Rejected {
                endpoint,
                raw_message,
            } => {
                write!(f, "[{endpoint}] Request rejected: {raw_message}")
            }
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::SerializationError { endpoint, detail } => {
                write!(f, "[{endpoint}] Serialization error: {detail}")
            }
            Self::Unknown {
                endpoint,
                status,
                raw_message,
            } => {
                write!(f, "[{endpoint}] HTTP {status}: {raw_message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            endpoint: "GET /promos".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[GET /promos] Network error: connection refused"
        );
    }

    #[test]
    fn display_unauthorized_with_message() {
        let e = ApiError::Unauthorized {
            endpoint: "GET /sessions".to_string(),
            raw_message: Some("token expired".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[GET /sessions] Session rejected: token expired"
        );
    }

    #[test]
    fn display_unauthorized_without_message() {
        let e = ApiError::Unauthorized {
            endpoint: "GET /sessions".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[GET /sessions] Session rejected");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ApiError::RateLimited {
            endpoint: "POST /admin/login".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(
            e.to_string(),
            "[POST /admin/login] Rate limited (retry after 30s)"
        );
    }

    #[test]
    fn display_unknown_includes_status() {
        let e = ApiError::Unknown {
            endpoint: "DELETE /hadiah/7".to_string(),
            status: 418,
            raw_message: "teapot".to_string(),
        };
        assert_eq!(e.to_string(), "[DELETE /hadiah/7] HTTP 418: teapot");
    }

    #[test]
    fn expected_classification() {
        let expected = ApiError::NotFound {
            endpoint: "x".to_string(),
            raw_message: None,
        };
        let unexpected = ApiError::ParseError {
            endpoint: "x".to_string(),
            detail: "eof".to_string(),
        };
        assert!(expected.is_expected());
        assert!(!unexpected.is_expected());
    }

    #[test]
    fn only_unauthorized_means_expired_session() {
        let e = ApiError::Unauthorized {
            endpoint: "x".to_string(),
            raw_message: None,
        };
        assert!(e.is_session_expired());
        let e = ApiError::PermissionDenied {
            endpoint: "x".to_string(),
            raw_message: None,
        };
        assert!(!e.is_session_expired());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ApiError::Rejected {
            endpoint: "POST /member/verify".to_string(),
            raw_message: "OTP salah".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "Rejected");
        assert_eq!(json["raw_message"], "OTP salah");
    }
}
