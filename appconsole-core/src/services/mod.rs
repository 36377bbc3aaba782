//! Business logic service layer

mod auth_service;
mod rate_limiter;
mod session_service;
mod upload_service;

pub use auth_service::{AuthService, LoginOutcome, OtpCountdown, OtpRequest, OTP_RESEND_COOLDOWN};
pub use rate_limiter::{
    LoginRateLimiter, RateLimitPolicy, RateLimitState, RateLimitStatus, ATTEMPT_WINDOW,
    LOCKOUT_DURATION, MAX_ATTEMPTS,
};
pub use session_service::SessionService;
pub use upload_service::UploadService;

use std::sync::Arc;

use appconsole_api::{ApiError, ConsoleApi, Realm, SessionCredentials};

use crate::error::{CoreError, CoreResult};
use crate::traits::KeyValueStore;

/// Service context - holds all dependencies
///
/// The platform layer creates this context and injects the backend client
/// and a key-value store implementation.
pub struct ServiceContext {
    /// Console backend
    pub api: Arc<dyn ConsoleApi>,
    /// Sessions, login attempts, UI flags and caches
    pub store: Arc<dyn KeyValueStore>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(api: Arc<dyn ConsoleApi>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { api, store }
    }

    /// Session of `realm`, or [`CoreError::MissingSession`].
    ///
    /// Every authenticated call goes through here before touching the network.
    pub async fn require_session(&self, realm: Realm) -> CoreResult<SessionCredentials> {
        session_service::load(self.store.as_ref(), realm)
            .await?
            .ok_or(CoreError::MissingSession(realm))
    }

    /// Convert a backend error, dropping the stored session when the backend
    /// says it has expired.
    pub async fn handle_api_error(&self, realm: Realm, err: ApiError) -> CoreError {
        if err.is_session_expired() {
            if let Err(e) = session_service::clear(self.store.as_ref(), realm).await {
                log::error!("Failed to clear expired {realm} session: {e}");
            } else {
                log::warn!("{realm} session expired, cleared stored credentials");
            }
        }
        CoreError::Api(err)
    }
}
