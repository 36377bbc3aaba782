//! Request transport shared by every backend call
//!
//! Callers build the `RequestBuilder` (headers, body, multipart) and get
//! back the status and body text; 429 and gateway failures come back as
//! transient errors and are retried here.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

const BASE_DELAY_MS: u64 = 100;
const MAX_DELAY_MS: u64 = 10_000;
const MAX_RETRY_AFTER_SECS: u64 = 30;

/// Send once. `endpoint` is the `"METHOD /path"` label used in logs and
/// errors.
pub(crate) async fn send(
    request: RequestBuilder,
    endpoint: &str,
) -> Result<(u16, String), ApiError> {
    log::debug!("{endpoint}");

    let response = request.send().await.map_err(|e| {
        let detail = e.to_string();
        let endpoint = endpoint.to_string();
        if e.is_timeout() {
            ApiError::Timeout { endpoint, detail }
        } else {
            ApiError::NetworkError { endpoint, detail }
        }
    })?;

    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let body = response.text().await.map_err(|e| ApiError::NetworkError {
        endpoint: endpoint.to_string(),
        detail: format!("Failed to read response body: {e}"),
    })?;
    log::debug!("[{endpoint}] HTTP {status}: {}", truncate_for_log(&body));

    match transient_status(status, retry_after, &body, endpoint) {
        Some(err) => {
            log::warn!("{err}");
            Err(err)
        }
        None => Ok((status, body)),
    }
}

/// Send, retrying transient failures with exponential backoff. A
/// `Retry-After` hint replaces the backoff; bodies that cannot be cloned
/// (multipart streams) are sent once.
pub(crate) async fn send_with_retry(
    request: RequestBuilder,
    endpoint: &str,
    max_retries: u32,
) -> Result<(u16, String), ApiError> {
    let mut attempt = 0;
    loop {
        if attempt == max_retries {
            return send(request, endpoint).await;
        }
        let Some(copy) = request.try_clone() else {
            log::debug!("[{endpoint}] Request body is not clonable, sending once");
            return send(request, endpoint).await;
        };
        match send(copy, endpoint).await {
            Err(e) if is_retryable(&e) => {
                let delay = retry_delay(&e, attempt);
                log::warn!(
                    "[{endpoint}] Attempt {}/{} failed, retrying in {:.1}s",
                    attempt + 1,
                    max_retries + 1,
                    delay.as_secs_f32()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}

/// Decode a JSON body.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &str, endpoint: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("[{endpoint}] Bad JSON ({e}): {}", truncate_for_log(body));
        ApiError::ParseError {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        }
    })
}

/// Statuses that are worth another attempt: 429 and 502 to 504.
fn transient_status(
    status: u16,
    retry_after: Option<u64>,
    body: &str,
    endpoint: &str,
) -> Option<ApiError> {
    match status {
        429 => Some(ApiError::RateLimited {
            endpoint: endpoint.to_string(),
            retry_after,
            raw_message: Some(body.to_string()),
        }),
        502..=504 => Some(ApiError::NetworkError {
            endpoint: endpoint.to_string(),
            detail: format!("HTTP {status}: {}", truncate_for_log(body)),
        }),
        _ => None,
    }
}

pub(crate) fn is_retryable(error: &ApiError) -> bool {
    matches!(
        error,
        ApiError::NetworkError { .. } | ApiError::Timeout { .. } | ApiError::RateLimited { .. }
    )
}

fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
    match error {
        ApiError::RateLimited {
            retry_after: Some(secs),
            ..
        } => Duration::from_secs((*secs).min(MAX_RETRY_AFTER_SECS)),
        _ => backoff_delay(attempt),
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    let delay_ms = BASE_DELAY_MS.saturating_mul(1_u64 << attempt.min(20));
    Duration::from_millis(delay_ms.min(MAX_DELAY_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_and_throttle_statuses_are_transient() {
        let limited = transient_status(429, Some(5), "slow down", "GET /hadiah").unwrap();
        assert!(matches!(
            limited,
            ApiError::RateLimited {
                retry_after: Some(5),
                ..
            }
        ));
        for status in [502, 503, 504] {
            let err = transient_status(status, None, "", "GET /hadiah").unwrap();
            assert!(is_retryable(&err), "{status} should be retried");
        }
        assert!(transient_status(200, None, "", "GET /hadiah").is_none());
        assert!(transient_status(500, None, "", "GET /hadiah").is_none());
        assert!(transient_status(401, None, "", "GET /hadiah").is_none());
    }

    #[test]
    fn business_errors_are_not_retried() {
        let unauthorized = ApiError::Unauthorized {
            endpoint: "t".into(),
            raw_message: None,
        };
        let rejected = ApiError::Rejected {
            endpoint: "t".into(),
            raw_message: "no".into(),
        };
        assert!(!is_retryable(&unauthorized));
        assert!(!is_retryable(&rejected));
    }

    #[test]
    fn backoff_doubles_then_caps() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_hint_is_capped() {
        let e = ApiError::RateLimited {
            endpoint: "t".into(),
            retry_after: Some(120),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result: Result<serde_json::Value, ApiError> = parse_json("not json", "t");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
