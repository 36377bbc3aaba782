//! reqwest-backed [`ConsoleApi`] implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};

use crate::envelope::{ensure_success, message_of, normalize};
use crate::error::{ApiError, Result};
use crate::http_client;
use crate::traits::ConsoleApi;
use crate::types::{
    AssetUpload, OtpChallenge, Realm, Resource, SessionCredentials, VerifiedSession,
};
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default retry count for idempotent requests
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Header carrying the session token.
pub const HEADER_TOKEN: &str = "X-Token";
/// Header carrying the session key.
pub const HEADER_SESSION_KEY: &str = "Session-Key";
/// Header carrying the auth seed.
pub const HEADER_AUTH_SEED: &str = "Auth-Seed";

/// Options for [`HttpConsoleApi`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Backend base URL, without trailing slash (e.g. `https://api.example.com`).
    pub base_url: String,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// Retries for idempotent requests (0 disables retrying).
    pub max_retries: u32,
}

impl ClientOptions {
    /// Options with default timeouts for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// HTTP console backend client
pub struct HttpConsoleApi {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl HttpConsoleApi {
    /// Create a client from options.
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.request_timeout)
            .build()
            .map_err(|e| ApiError::NetworkError {
                endpoint: "client".to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            max_retries: options.max_retries,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_path(resource: Resource, id: &str) -> String {
        format!("{}/{}", resource.path(), urlencoding::encode(id))
    }

    fn authed(builder: RequestBuilder, session: &SessionCredentials) -> RequestBuilder {
        log::debug!(
            "Authenticated request with session {}",
            mask_secret(&session.session_key)
        );
        builder
            .header(HEADER_TOKEN, session.x_token())
            .header(HEADER_SESSION_KEY, &session.session_key)
            .header(HEADER_AUTH_SEED, &session.auth_seed)
    }

    /// Send, map the status code, and decode the JSON body (`null` when empty).
    async fn send_json(
        &self,
        builder: RequestBuilder,
        endpoint: &str,
        retries: u32,
    ) -> Result<Value> {
        let (status, text) =
            http_client::send_with_retry(builder, endpoint, retries).await?;

        if let Some(err) = map_status(status, &text, endpoint) {
            if err.is_expected() {
                log::warn!("{err}");
            } else {
                log::error!("{err}");
            }
            return Err(err);
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        http_client::parse_json(&text, endpoint)
    }
}

/// Map a non-success HTTP status to an error.
///
/// Returns `None` for 2xx. 429 and 502 to 504 never reach this point; the
/// transport already turned them into transient errors.
pub(crate) fn map_status(status: u16, body: &str, endpoint: &str) -> Option<ApiError> {
    if (200..300).contains(&status) {
        return None;
    }

    let raw_message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| message_of(&v))
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| truncate_for_log(trimmed))
        });
    let endpoint = endpoint.to_string();

    Some(match status {
        401 => ApiError::Unauthorized {
            endpoint,
            raw_message,
        },
        403 => ApiError::PermissionDenied {
            endpoint,
            raw_message,
        },
        404 => ApiError::NotFound {
            endpoint,
            raw_message,
        },
        400 | 422 => ApiError::InvalidParameter {
            endpoint,
            detail: raw_message.unwrap_or_else(|| format!("HTTP {status}")),
        },
        _ => ApiError::Unknown {
            endpoint,
            status,
            raw_message: raw_message.unwrap_or_default(),
        },
    })
}

#[async_trait]
impl ConsoleApi for HttpConsoleApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_otp(&self, realm: Realm, phone: &str) -> Result<OtpChallenge> {
        let path = format!("{}/login", realm.auth_prefix());
        let endpoint = format!("POST {path}");
        let builder = self.client.post(self.url(&path)).json(&json!({ "phone": phone }));

        // Sending an OTP is not idempotent
        let value = self.send_json(builder, &endpoint, 0).await?;
        ensure_success(&value, &endpoint)?;

        let mut challenge = value
            .get("data")
            .filter(|d| d.is_object())
            .and_then(|d| serde_json::from_value::<OtpChallenge>(d.clone()).ok())
            .unwrap_or_default();
        if challenge.message.is_none() {
            challenge.message = message_of(&value);
        }
        Ok(challenge)
    }

    async fn verify_otp(&self, realm: Realm, phone: &str, code: &str) -> Result<VerifiedSession> {
        let path = format!("{}/verify", realm.auth_prefix());
        let endpoint = format!("POST {path}");
        let builder = self
            .client
            .post(self.url(&path))
            .json(&json!({ "phone": phone, "otp": code }));

        let value = self.send_json(builder, &endpoint, 0).await?;
        normalize(value, &endpoint)
    }

    async fn logout(&self, realm: Realm, session: &SessionCredentials) -> Result<()> {
        let path = format!("{}/logout", realm.auth_prefix());
        let endpoint = format!("POST {path}");
        let builder = Self::authed(self.client.post(self.url(&path)), session);
        let value = self.send_json(builder, &endpoint, 0).await?;
        ensure_success(&value, &endpoint)
    }

    async fn list(&self, resource: Resource, session: &SessionCredentials) -> Result<Value> {
        let endpoint = format!("GET {}", resource.path());
        let builder = Self::authed(self.client.get(self.url(resource.path())), session);
        self.send_json(builder, &endpoint, self.max_retries).await
    }

    async fn fetch_document(
        &self,
        resource: Resource,
        session: &SessionCredentials,
    ) -> Result<Value> {
        let endpoint = format!("GET {}", resource.path());
        let builder = Self::authed(self.client.get(self.url(resource.path())), session);
        self.send_json(builder, &endpoint, self.max_retries).await
    }

    async fn put_document(
        &self,
        resource: Resource,
        session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value> {
        let endpoint = format!("PUT {}", resource.path());
        let builder = Self::authed(self.client.put(self.url(resource.path())), session).json(body);
        let value = self.send_json(builder, &endpoint, self.max_retries).await?;
        ensure_success(&value, &endpoint)?;
        Ok(value)
    }

    async fn create(
        &self,
        resource: Resource,
        session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value> {
        let endpoint = format!("POST {}", resource.path());
        let builder =
            Self::authed(self.client.post(self.url(resource.path())), session).json(body);
        let value = self.send_json(builder, &endpoint, 0).await?;
        ensure_success(&value, &endpoint)?;
        Ok(value)
    }

    async fn update(
        &self,
        resource: Resource,
        id: &str,
        session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value> {
        let path = Self::item_path(resource, id);
        let endpoint = format!("PUT {path}");
        let builder = Self::authed(self.client.put(self.url(&path)), session).json(body);
        let value = self.send_json(builder, &endpoint, self.max_retries).await?;
        ensure_success(&value, &endpoint)?;
        Ok(value)
    }

    async fn delete(
        &self,
        resource: Resource,
        id: &str,
        session: &SessionCredentials,
    ) -> Result<()> {
        let path = Self::item_path(resource, id);
        let endpoint = format!("DELETE {path}");
        let builder = Self::authed(self.client.delete(self.url(&path)), session);
        let value = self.send_json(builder, &endpoint, self.max_retries).await?;
        ensure_success(&value, &endpoint)
    }

    async fn toggle(
        &self,
        resource: Resource,
        id: &str,
        session: &SessionCredentials,
    ) -> Result<Value> {
        let path = format!("{}/toggle", Self::item_path(resource, id));
        let endpoint = format!("POST {path}");
        let builder = Self::authed(self.client.post(self.url(&path)), session);
        let value = self.send_json(builder, &endpoint, 0).await?;
        ensure_success(&value, &endpoint)?;
        Ok(value)
    }

    async fn upload_asset(
        &self,
        session: &SessionCredentials,
        asset: AssetUpload,
    ) -> Result<Value> {
        let endpoint = "POST /assets/upload".to_string();
        let part = Part::bytes(asset.bytes)
            .file_name(asset.file_name)
            .mime_str(&asset.mime_type)
            .map_err(|e| ApiError::SerializationError {
                endpoint: endpoint.clone(),
                detail: e.to_string(),
            })?;
        let form = Form::new().part("file", part);
        let builder =
            Self::authed(self.client.post(self.url("/assets/upload")), session).multipart(form);
        self.send_json(builder, &endpoint, 0).await
    }
}
