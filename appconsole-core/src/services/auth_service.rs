//! Phone/OTP login

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use appconsole_api::{ApiError, OtpChallenge, Realm, SessionCredentials};

use crate::error::{CoreError, CoreResult};
use crate::services::rate_limiter::LoginRateLimiter;
use crate::services::session_service;
use crate::services::ServiceContext;
use crate::utils::phone::normalize_phone;

/// Minimum wait before another OTP can be requested.
pub const OTP_RESEND_COOLDOWN: Duration = Duration::from_secs(60);

/// Countdown until an OTP may be requested again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpCountdown {
    sent_at: DateTime<Utc>,
    cooldown: Duration,
}

impl OtpCountdown {
    pub fn new(sent_at: DateTime<Utc>, cooldown: Duration) -> Self {
        Self { sent_at, cooldown }
    }

    /// Whole seconds left at `now`, rounded up.
    pub fn remaining_secs(&self, now: DateTime<Utc>) -> u64 {
        let elapsed_ms = (now - self.sent_at).num_milliseconds().max(0);
        let elapsed_ms = u128::try_from(elapsed_ms).unwrap_or(0);
        let left = self.cooldown.as_millis().saturating_sub(elapsed_ms);
        u64::try_from(left.div_ceil(1000)).unwrap_or(u64::MAX)
    }

    pub fn can_resend(&self, now: DateTime<Utc>) -> bool {
        self.remaining_secs(now) == 0
    }
}

/// An OTP that was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRequest {
    /// Phone number in `62…` form, to pass to [`AuthService::verify_otp`].
    pub phone: String,
    pub challenge: OtpChallenge,
    pub countdown: OtpCountdown,
}

/// A completed login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub realm: Realm,
    pub session: SessionCredentials,
    /// Display name, when the backend returns one.
    pub name: Option<String>,
}

fn validate_code(code: &str) -> CoreResult<&str> {
    let code = code.trim();
    if !(4..=8).contains(&code.len()) || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::ValidationError(
            "The OTP code is 4 to 8 digits".to_string(),
        ));
    }
    Ok(code)
}

/// Whether a failed verification counts towards the rate limit.
///
/// Only answers from the backend count; transport failures do not.
fn counts_as_failed_attempt(err: &ApiError) -> bool {
    matches!(
        err,
        ApiError::Unauthorized { .. }
            | ApiError::PermissionDenied { .. }
            | ApiError::InvalidParameter { .. }
            | ApiError::Rejected { .. }
            | ApiError::NotFound { .. }
    )
}

/// Login service
pub struct AuthService {
    ctx: Arc<ServiceContext>,
    limiter: LoginRateLimiter,
}

impl AuthService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let limiter = LoginRateLimiter::new(ctx.store.clone());
        Self { ctx, limiter }
    }

    #[must_use]
    pub fn with_limiter(ctx: Arc<ServiceContext>, limiter: LoginRateLimiter) -> Self {
        Self { ctx, limiter }
    }

    pub fn limiter(&self) -> &LoginRateLimiter {
        &self.limiter
    }

    /// Stored session of a realm, used at startup to skip the login page.
    pub async fn bootstrap(&self, realm: Realm) -> Option<SessionCredentials> {
        match session_service::load(self.ctx.store.as_ref(), realm).await {
            Ok(session) => session,
            Err(e) => {
                log::error!("Failed to read stored {realm} session: {e}");
                None
            }
        }
    }

    /// Normalize the phone number and ask the backend for an OTP.
    pub async fn request_otp(&self, realm: Realm, raw_phone: &str) -> CoreResult<OtpRequest> {
        let phone = normalize_phone(raw_phone)?;
        let now = Utc::now();
        self.limiter.ensure_allowed(realm, now).await?;

        let challenge = self.ctx.api.request_otp(realm, &phone).await?;
        let cooldown = challenge
            .resend_after
            .map_or(OTP_RESEND_COOLDOWN, Duration::from_secs);
        log::info!("OTP requested for {realm} login");

        Ok(OtpRequest {
            phone,
            challenge,
            countdown: OtpCountdown::new(now, cooldown),
        })
    }

    /// Exchange an OTP for a session and store it.
    ///
    /// Rejected codes count towards the login rate limit; a successful
    /// login resets it.
    pub async fn verify_otp(&self, realm: Realm, phone: &str, code: &str) -> CoreResult<LoginOutcome> {
        let code = validate_code(code)?;
        self.limiter.ensure_allowed(realm, Utc::now()).await?;

        let verified = match self.ctx.api.verify_otp(realm, phone, code).await {
            Ok(v) => v,
            Err(e) => {
                if counts_as_failed_attempt(&e) {
                    let status = self.limiter.record_failure(realm, Utc::now()).await?;
                    log::warn!("OTP verification failed for {realm}: {e} ({status:?})");
                }
                return Err(e.into());
            }
        };

        let name = verified.name.clone();
        let session: SessionCredentials = verified.into();
        session_service::save(self.ctx.store.as_ref(), realm, &session).await?;
        self.limiter.reset(realm).await?;
        log::info!("{realm} login succeeded");

        Ok(LoginOutcome {
            realm,
            session,
            name,
        })
    }

    /// Revoke the session on the backend (best effort) and forget it locally.
    pub async fn logout(&self, realm: Realm) -> CoreResult<()> {
        if let Some(session) = session_service::load(self.ctx.store.as_ref(), realm).await? {
            if let Err(e) = self.ctx.api.logout(realm, &session).await {
                log::warn!("Backend logout failed, clearing local session anyway: {e}");
            }
        }
        session_service::clear(self.ctx.store.as_ref(), realm).await?;
        log::info!("{realm} logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;
    use chrono::TimeDelta;

    #[tokio::test]
    async fn request_then_verify_stores_session() {
        let (ctx, api) = create_test_context();
        let auth = AuthService::new(ctx.clone());

        let request = auth.request_otp(Realm::Admin, "0812 3456 789").await.unwrap();
        assert_eq!(request.phone, "628123456789");
        assert_eq!(api.otp_requests().await, vec!["628123456789".to_string()]);

        let outcome = auth
            .verify_otp(Realm::Admin, &request.phone, api.valid_otp())
            .await
            .unwrap();
        assert_eq!(outcome.name.as_deref(), Some("Admin Test"));
        assert_eq!(auth.bootstrap(Realm::Admin).await, Some(outcome.session));
        assert_eq!(auth.bootstrap(Realm::Member).await, None);
    }

    #[tokio::test]
    async fn invalid_phone_never_reaches_backend() {
        let (ctx, api) = create_test_context();
        let auth = AuthService::new(ctx);
        assert!(matches!(
            auth.request_otp(Realm::Member, "abc").await,
            Err(CoreError::ValidationError(_))
        ));
        assert!(api.otp_requests().await.is_empty());
    }

    #[tokio::test]
    async fn five_wrong_codes_lock_the_realm() {
        let (ctx, api) = create_test_context();
        let auth = AuthService::new(ctx);
        for _ in 0..5 {
            let result = auth.verify_otp(Realm::Member, "628123456789", "000000").await;
            assert!(matches!(result, Err(CoreError::Api(ApiError::Rejected { .. }))));
        }
        let result = auth
            .verify_otp(Realm::Member, "628123456789", api.valid_otp())
            .await;
        assert!(matches!(result, Err(CoreError::RateLimited { .. })));
        assert_eq!(api.verify_calls().await, 5);
    }

    #[tokio::test]
    async fn malformed_code_is_not_an_attempt() {
        let (ctx, api) = create_test_context();
        let auth = AuthService::new(ctx);
        assert!(matches!(
            auth.verify_otp(Realm::Admin, "628123456789", "12").await,
            Err(CoreError::ValidationError(_))
        ));
        assert_eq!(api.verify_calls().await, 0);
    }

    #[tokio::test]
    async fn logout_clears_session_even_if_backend_fails() {
        let (ctx, api) = create_test_context();
        let auth = AuthService::new(ctx.clone());
        auth.verify_otp(Realm::Admin, "628123456789", api.valid_otp())
            .await
            .unwrap();
        api.fail_next_with_network_error().await;
        auth.logout(Realm::Admin).await.unwrap();
        assert_eq!(auth.bootstrap(Realm::Admin).await, None);
    }

    #[test]
    fn countdown() {
        let sent = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let countdown = OtpCountdown::new(sent, OTP_RESEND_COOLDOWN);
        assert_eq!(countdown.remaining_secs(sent), 60);
        assert_eq!(countdown.remaining_secs(sent + TimeDelta::milliseconds(500)), 60);
        assert_eq!(countdown.remaining_secs(sent + TimeDelta::seconds(59)), 1);
        assert!(countdown.can_resend(sent + TimeDelta::seconds(60)));
        assert!(!countdown.can_resend(sent - TimeDelta::seconds(5)));
    }
}
