//! Client-side login rate limiting
//!
//! Advisory only: the state lives in the local key-value store and anyone
//! with access to it can reset it. The backend remains the authority.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use appconsole_api::Realm;

use crate::error::{CoreError, CoreResult};
use crate::storage_keys;
use crate::traits::{load_json, save_json, KeyValueStore};

/// Failed attempts allowed inside [`ATTEMPT_WINDOW`].
pub const MAX_ATTEMPTS: usize = 5;
/// Rolling window failed attempts are counted in.
pub const ATTEMPT_WINDOW: Duration = Duration::from_secs(60);
/// How long logins are blocked after too many failures.
pub const LOCKOUT_DURATION: Duration = Duration::from_secs(300);

/// Limits of a [`LoginRateLimiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_attempts: usize,
    pub window: Duration,
    pub lockout: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            window: ATTEMPT_WINDOW,
            lockout: LOCKOUT_DURATION,
        }
    }
}

/// Whether a login attempt may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RateLimitStatus {
    Allowed { remaining: usize },
    Locked { retry_after_secs: u64 },
}

impl RateLimitStatus {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }
}

/// Persisted limiter state: failed attempt times and lockout expiry,
/// all in epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitState {
    pub attempts: Vec<i64>,
    pub lockout_until: Option<i64>,
}

fn millis(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}

fn secs_until(until_ms: i64, now_ms: i64) -> u64 {
    // Round up so "0s left" is never shown while still locked.
    let remaining = until_ms.saturating_sub(now_ms).max(0);
    u64::try_from(remaining).map_or(0, |ms| ms.div_ceil(1000))
}

impl RateLimitState {
    /// Status at `now`, dropping attempts outside the window and an
    /// elapsed lockout. An elapsed lockout also resets the attempt log.
    pub fn evaluate(&mut self, policy: &RateLimitPolicy, now: DateTime<Utc>) -> RateLimitStatus {
        let now_ms = now.timestamp_millis();
        if let Some(until) = self.lockout_until {
            if now_ms < until {
                return RateLimitStatus::Locked {
                    retry_after_secs: secs_until(until, now_ms),
                };
            }
            self.lockout_until = None;
            self.attempts.clear();
        }

        let window_start = now_ms.saturating_sub(millis(policy.window));
        self.attempts.retain(|t| *t > window_start);
        RateLimitStatus::Allowed {
            remaining: policy.max_attempts.saturating_sub(self.attempts.len()),
        }
    }

    /// Record a failed attempt at `now`, starting a lockout when the window fills up.
    pub fn record_failure(
        &mut self,
        policy: &RateLimitPolicy,
        now: DateTime<Utc>,
    ) -> RateLimitStatus {
        if let status @ RateLimitStatus::Locked { .. } = self.evaluate(policy, now) {
            return status;
        }
        let now_ms = now.timestamp_millis();
        self.attempts.push(now_ms);
        if self.attempts.len() >= policy.max_attempts {
            let until = now_ms.saturating_add(millis(policy.lockout));
            self.lockout_until = Some(until);
            return RateLimitStatus::Locked {
                retry_after_secs: secs_until(until, now_ms),
            };
        }
        RateLimitStatus::Allowed {
            remaining: policy.max_attempts - self.attempts.len(),
        }
    }
}

/// Login rate limiter backed by the key-value store
#[derive(Clone)]
pub struct LoginRateLimiter {
    store: Arc<dyn KeyValueStore>,
    policy: RateLimitPolicy,
}

impl LoginRateLimiter {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_policy(store, RateLimitPolicy::default())
    }

    #[must_use]
    pub fn with_policy(store: Arc<dyn KeyValueStore>, policy: RateLimitPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    async fn load(&self, realm: Realm) -> CoreResult<RateLimitState> {
        let store = self.store.as_ref();
        Ok(RateLimitState {
            attempts: load_json(store, &storage_keys::login_attempts(realm))
                .await?
                .unwrap_or_default(),
            lockout_until: load_json(store, &storage_keys::login_lockout_until(realm)).await?,
        })
    }

    async fn persist(&self, realm: Realm, state: &RateLimitState) -> CoreResult<()> {
        let store = self.store.as_ref();
        let attempts_key = storage_keys::login_attempts(realm);
        let lockout_key = storage_keys::login_lockout_until(realm);
        if state.attempts.is_empty() {
            store.remove(&attempts_key).await?;
        } else {
            save_json(store, &attempts_key, &state.attempts).await?;
        }
        match state.lockout_until {
            Some(until) => save_json(store, &lockout_key, &until).await,
            None => store.remove(&lockout_key).await,
        }
    }

    /// Status of the next attempt at `now`.
    pub async fn check(&self, realm: Realm, now: DateTime<Utc>) -> CoreResult<RateLimitStatus> {
        let mut state = self.load(realm).await?;
        let before = state.clone();
        let status = state.evaluate(&self.policy, now);
        if state != before {
            self.persist(realm, &state).await?;
        }
        Ok(status)
    }

    /// Fail with [`CoreError::RateLimited`] while locked out.
    pub async fn ensure_allowed(&self, realm: Realm, now: DateTime<Utc>) -> CoreResult<()> {
        match self.check(realm, now).await? {
            RateLimitStatus::Locked { retry_after_secs } => {
                log::warn!("{realm} login locked for another {retry_after_secs}s");
                Err(CoreError::RateLimited { retry_after_secs })
            }
            RateLimitStatus::Allowed { .. } => Ok(()),
        }
    }

    pub async fn record_failure(
        &self,
        realm: Realm,
        now: DateTime<Utc>,
    ) -> CoreResult<RateLimitStatus> {
        let mut state = self.load(realm).await?;
        let status = state.record_failure(&self.policy, now);
        self.persist(realm, &state).await?;
        if status.is_locked() {
            log::warn!("Too many failed {realm} logins, locking out");
        }
        Ok(status)
    }

    /// Forget all failures (after a successful login).
    pub async fn reset(&self, realm: Realm) -> CoreResult<()> {
        self.persist(realm, &RateLimitState::default()).await
    }
}
