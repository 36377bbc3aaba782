//! List panel I/O

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use appconsole_api::{normalize, normalize_list, Realm, SessionCredentials};

use crate::error::{CoreError, CoreResult};
use crate::panels::PanelResource;
use crate::services::ServiceContext;
use crate::storage_keys;
use crate::traits::{load_json, save_json};

/// I/O of a list panel: cache, fetch and mutations.
pub struct PanelService<R> {
    ctx: Arc<ServiceContext>,
    realm: Realm,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for PanelService<R> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            realm: self.realm,
            _resource: PhantomData,
        }
    }
}

impl<R: PanelResource> PanelService<R> {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, realm: Realm) -> Self {
        Self {
            ctx,
            realm,
            _resource: PhantomData,
        }
    }

    fn endpoint(&self, verb: &str) -> String {
        format!("{verb} {}", R::RESOURCE.path())
    }

    async fn session(&self) -> CoreResult<SessionCredentials> {
        self.ctx.require_session(self.realm).await
    }

    fn ensure(allowed: bool, action: &str) -> CoreResult<()> {
        if allowed {
            Ok(())
        } else {
            Err(CoreError::ValidationError(format!(
                "{} cannot be {action}",
                R::RESOURCE
            )))
        }
    }

    /// Cached records. A missing or unreadable cache is an empty list.
    pub async fn cached(&self) -> Vec<R> {
        let key = storage_keys::cache(R::RESOURCE);
        match load_json::<Vec<R>>(self.ctx.store.as_ref(), &key).await {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                log::warn!("Failed to read {key}: {e}");
                Vec::new()
            }
        }
    }

    /// Write the cache. Failures are logged only.
    pub async fn store_cache(&self, items: &[R]) {
        let key = storage_keys::cache(R::RESOURCE);
        if let Err(e) = save_json(self.ctx.store.as_ref(), &key, items).await {
            log::warn!("Failed to write {key}: {e}");
        }
    }

    /// Fetch the list from the backend and refresh the cache.
    pub async fn fetch(&self) -> CoreResult<Vec<R>> {
        let session = self.session().await?;
        let raw = match self.ctx.api.list(R::RESOURCE, &session).await {
            Ok(v) => v,
            Err(e) => return Err(self.ctx.handle_api_error(self.realm, e).await),
        };
        let items: Vec<R> = normalize_list(raw, &self.endpoint("GET"))?;
        log::debug!("Fetched {} {}", items.len(), R::RESOURCE);
        self.store_cache(&items).await;
        Ok(items)
    }

    /// Record returned by a mutation, or `fallback` when the response
    /// carries none.
    fn returned_or(raw: Value, endpoint: &str, fallback: &R) -> R {
        if raw.is_null() {
            return fallback.clone();
        }
        match normalize::<R>(raw, endpoint) {
            Ok(item) if !item.id().is_empty() || fallback.id().is_empty() => item,
            Ok(_) => fallback.clone(),
            Err(e) => {
                log::debug!("{endpoint}: response carries no record ({e}), keeping local copy");
                fallback.clone()
            }
        }
    }

    /// Create (empty id) or update a record.
    pub async fn save(&self, item: &R) -> CoreResult<R> {
        let creating = item.id().is_empty();
        if creating {
            Self::ensure(R::CAPABILITIES.create, "created")?;
        } else {
            Self::ensure(R::CAPABILITIES.edit, "edited")?;
        }
        let problems = item.validate();
        if !problems.is_empty() {
            return Err(CoreError::ValidationError(problems.join("; ")));
        }

        let session = self.session().await?;
        let body = serde_json::to_value(item)?;
        let result = if creating {
            self.ctx.api.create(R::RESOURCE, &session, &body).await
        } else {
            self.ctx
                .api
                .update(R::RESOURCE, item.id(), &session, &body)
                .await
        };
        let raw = match result {
            Ok(v) => v,
            Err(e) => return Err(self.ctx.handle_api_error(self.realm, e).await),
        };
        let saved = Self::returned_or(raw, &self.endpoint(if creating { "POST" } else { "PUT" }), item);
        if creating && saved.id().is_empty() {
            log::warn!("{}: created record came back without an id", R::RESOURCE);
        }
        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> CoreResult<()> {
        Self::ensure(R::CAPABILITIES.delete, "deleted")?;
        let session = self.session().await?;
        if let Err(e) = self.ctx.api.delete(R::RESOURCE, id, &session).await {
            return Err(self.ctx.handle_api_error(self.realm, e).await);
        }
        Ok(())
    }

    /// Flip the record's flag on the backend; returns the updated record.
    pub async fn toggle(&self, item: &R) -> CoreResult<R> {
        Self::ensure(R::CAPABILITIES.toggle && item.is_active().is_some(), "toggled")?;
        let session = self.session().await?;
        let raw = match self.ctx.api.toggle(R::RESOURCE, item.id(), &session).await {
            Ok(v) => v,
            Err(e) => return Err(self.ctx.handle_api_error(self.realm, e).await),
        };
        let mut flipped = item.clone();
        flipped.set_active(!item.is_active().unwrap_or_default());
        Ok(Self::returned_or(raw, &self.endpoint("POST"), &flipped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, login};
    use crate::types::{ActivityLog, Promo, Reward};
    use appconsole_api::Resource;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_normalizes_every_envelope_and_caches() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = PanelService::<Promo>::new(ctx.clone(), Realm::Admin);

        for body in [
            json!([{"id": 1, "title": "A"}]),
            json!({"success": true, "data": [{"id": 1, "title": "A"}]}),
            json!({"data": [{"id": 1, "title": "A"}]}),
        ] {
            api.set_list(Resource::Promos, body).await;
            let items = service.fetch().await.unwrap();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, "1");
        }
        assert_eq!(service.cached().await.len(), 1);
    }

    #[tokio::test]
    async fn mutations_without_session_never_hit_the_network() {
        let (ctx, api) = create_test_context();
        let service = PanelService::<Reward>::new(ctx, Realm::Admin);
        let reward = Reward {
            id: "9".into(),
            name: "Voucher".into(),
            points: 10,
            ..Reward::default()
        };

        assert!(matches!(
            service.delete("9").await,
            Err(CoreError::MissingSession(Realm::Admin))
        ));
        assert!(matches!(
            service.toggle(&reward).await,
            Err(CoreError::MissingSession(_))
        ));
        assert!(matches!(
            service.save(&reward).await,
            Err(CoreError::MissingSession(_))
        ));
        assert_eq!(api.mutation_calls().await, 0);
    }

    #[tokio::test]
    async fn expired_session_is_cleared() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        api.expire_sessions().await;
        let service = PanelService::<Promo>::new(ctx.clone(), Realm::Admin);
        let err = service.fetch().await.unwrap_err();
        assert!(err.requires_login());
        assert!(ctx.require_session(Realm::Admin).await.is_err());
    }

    #[tokio::test]
    async fn create_uses_returned_record() {
        let (ctx, _api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = PanelService::<Reward>::new(ctx, Realm::Admin);
        let saved = service
            .save(&Reward {
                name: "Voucher".into(),
                points: 10,
                ..Reward::default()
            })
            .await
            .unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(saved.name, "Voucher");
    }

    #[tokio::test]
    async fn invalid_record_is_not_sent() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = PanelService::<Reward>::new(ctx, Realm::Admin);
        assert!(matches!(
            service.save(&Reward::default()).await,
            Err(CoreError::ValidationError(_))
        ));
        assert_eq!(api.mutation_calls().await, 0);
    }

    #[tokio::test]
    async fn toggle_without_record_in_response_flips_locally() {
        let (ctx, _api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = PanelService::<Promo>::new(ctx, Realm::Admin);
        let promo = Promo {
            id: "3".into(),
            title: "Diskon".into(),
            active: true,
            ..Promo::default()
        };
        let toggled = service.toggle(&promo).await.unwrap();
        assert!(!toggled.active);
    }

    #[tokio::test]
    async fn read_only_resources_refuse_mutations() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = PanelService::<ActivityLog>::new(ctx, Realm::Admin);
        assert!(matches!(
            service.delete("1").await,
            Err(CoreError::ValidationError(_))
        ));
        assert_eq!(api.mutation_calls().await, 0);
    }
}
