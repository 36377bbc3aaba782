//! Session persistence

use std::sync::Arc;

use appconsole_api::{Realm, SessionCredentials};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::storage_keys;
use crate::traits::KeyValueStore;

pub(crate) async fn load(
    store: &dyn KeyValueStore,
    realm: Realm,
) -> CoreResult<Option<SessionCredentials>> {
    let key = store.get(storage_keys::session_key(realm)).await?;
    let seed = store.get(storage_keys::auth_seed(realm)).await?;
    let token = store.get(storage_keys::session_token(realm)).await?;

    Ok(match (key, seed) {
        (Some(key), Some(seed)) if !key.is_empty() && !seed.is_empty() => {
            Some(SessionCredentials {
                session_key: key,
                auth_seed: seed,
                token: token.filter(|t| !t.is_empty()),
            })
        }
        _ => None,
    })
}

pub(crate) async fn save(
    store: &dyn KeyValueStore,
    realm: Realm,
    session: &SessionCredentials,
) -> CoreResult<()> {
    store
        .set(storage_keys::session_key(realm), &session.session_key)
        .await?;
    store
        .set(storage_keys::auth_seed(realm), &session.auth_seed)
        .await?;
    match &session.token {
        Some(token) => store.set(storage_keys::session_token(realm), token).await,
        None => store.remove(storage_keys::session_token(realm)).await,
    }
}

pub(crate) async fn clear(store: &dyn KeyValueStore, realm: Realm) -> CoreResult<()> {
    store.remove(storage_keys::session_key(realm)).await?;
    store.remove(storage_keys::auth_seed(realm)).await?;
    store.remove(storage_keys::session_token(realm)).await
}

/// Session persistence service
///
/// Session material lives under fixed per-realm keys; a session exists
/// only when both the session key and the auth seed are present.
pub struct SessionService {
    ctx: Arc<ServiceContext>,
}

impl SessionService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Stored session of a realm, if any.
    pub async fn current(&self, realm: Realm) -> CoreResult<Option<SessionCredentials>> {
        load(self.ctx.store.as_ref(), realm).await
    }

    /// Whether a realm has a stored session. Storage errors read as "no".
    pub async fn is_logged_in(&self, realm: Realm) -> bool {
        match self.current(realm).await {
            Ok(session) => session.is_some(),
            Err(e) => {
                log::error!("Failed to read {realm} session: {e}");
                false
            }
        }
    }

    pub async fn store(&self, realm: Realm, session: &SessionCredentials) -> CoreResult<()> {
        save(self.ctx.store.as_ref(), realm, session).await?;
        log::info!("Stored {realm} session");
        Ok(())
    }

    pub async fn clear(&self, realm: Realm) -> CoreResult<()> {
        clear(self.ctx.store.as_ref(), realm).await?;
        log::info!("Cleared {realm} session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_context;

    #[tokio::test]
    async fn store_load_clear() {
        let (ctx, _api) = create_test_context();
        let service = SessionService::new(ctx.clone());
        assert!(!service.is_logged_in(Realm::Admin).await);

        let mut session = SessionCredentials::new("sk", "seed");
        session.token = Some("tok".into());
        service.store(Realm::Admin, &session).await.unwrap();

        assert_eq!(service.current(Realm::Admin).await.unwrap(), Some(session));
        assert!(!service.is_logged_in(Realm::Member).await);
        assert_eq!(
            ctx.store.get("adminSessionKey").await.unwrap().as_deref(),
            Some("sk")
        );

        service.clear(Realm::Admin).await.unwrap();
        assert!(!service.is_logged_in(Realm::Admin).await);
    }

    #[tokio::test]
    async fn half_a_session_is_no_session() {
        let (ctx, _api) = create_test_context();
        ctx.store.set("memberSessionKey", "sk").await.unwrap();
        let service = SessionService::new(ctx.clone());
        assert_eq!(service.current(Realm::Member).await.unwrap(), None);
        assert!(matches!(
            ctx.require_session(Realm::Member).await,
            Err(crate::CoreError::MissingSession(Realm::Member))
        ));
    }
}
