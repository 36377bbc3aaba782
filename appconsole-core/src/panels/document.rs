//! Singleton document panels (cutoff times, app configuration)

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

use appconsole_api::{normalize, Realm};

use crate::error::{CoreError, CoreResult};
use crate::panels::{DocumentResource, RefreshTicket, Toast};
use crate::services::ServiceContext;
use crate::storage_keys;
use crate::traits::{load_json, save_json};
use crate::types::AppConfig;

/// I/O of a document panel.
pub struct DocumentService<D> {
    ctx: Arc<ServiceContext>,
    realm: Realm,
    _document: PhantomData<fn() -> D>,
}

impl<D> Clone for DocumentService<D> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            realm: self.realm,
            _document: PhantomData,
        }
    }
}

impl<D: DocumentResource> DocumentService<D> {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, realm: Realm) -> Self {
        Self {
            ctx,
            realm,
            _document: PhantomData,
        }
    }

    pub async fn cached(&self) -> Option<D> {
        let key = storage_keys::cache(D::RESOURCE);
        load_json::<D>(self.ctx.store.as_ref(), &key)
            .await
            .unwrap_or_else(|e| {
                log::warn!("Failed to read {key}: {e}");
                None
            })
    }

    async fn store_cache(&self, document: &D) {
        let key = storage_keys::cache(D::RESOURCE);
        if let Err(e) = save_json(self.ctx.store.as_ref(), &key, document).await {
            log::warn!("Failed to write {key}: {e}");
        }
    }

    pub async fn fetch(&self) -> CoreResult<D> {
        let session = self.ctx.require_session(self.realm).await?;
        let raw = match self.ctx.api.fetch_document(D::RESOURCE, &session).await {
            Ok(v) => v,
            Err(e) => return Err(self.ctx.handle_api_error(self.realm, e).await),
        };
        let document = if raw.is_null() {
            D::default()
        } else {
            normalize::<D>(raw, &format!("GET {}", D::RESOURCE.path()))?
        };
        self.store_cache(&document).await;
        Ok(document)
    }

    /// Validate and replace the document on the backend.
    pub async fn save(&self, document: &D) -> CoreResult<D> {
        let problems = document.validate();
        if !problems.is_empty() {
            return Err(CoreError::ValidationError(problems.join("; ")));
        }
        let session = self.ctx.require_session(self.realm).await?;
        let body = serde_json::to_value(document)?;
        if let Err(e) = self
            .ctx
            .api
            .put_document(D::RESOURCE, &session, &body)
            .await
        {
            return Err(self.ctx.handle_api_error(self.realm, e).await);
        }
        log::info!("Saved {}", D::RESOURCE);
        self.store_cache(document).await;
        Ok(document.clone())
    }
}

/// Service of the app configuration document.
pub type ConfigService = DocumentService<AppConfig>;

impl DocumentService<AppConfig> {
    /// Replace the live app configuration with `config`.
    pub async fn publish(&self, config: &AppConfig) -> CoreResult<AppConfig> {
        self.save(config).await
    }
}

/// State of a document panel: the last known document and the draft being
/// edited.
#[derive(Debug)]
pub struct DocumentController<D> {
    value: D,
    draft: D,
    loading: bool,
    saving: bool,
    generation: u64,
    in_flight: Option<u64>,
    sent: Option<D>,
    toast: Option<Toast>,
    session_expired: bool,
}

impl<D: DocumentResource> Default for DocumentController<D> {
    fn default() -> Self {
        Self {
            value: D::default(),
            draft: D::default(),
            loading: false,
            saving: false,
            generation: 0,
            in_flight: None,
            sent: None,
            toast: None,
            session_expired: false,
        }
    }
}

impl<D: DocumentResource> DocumentController<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &D {
        &self.value
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Edit the draft in place.
    pub fn edit(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.value
    }

    pub fn discard_draft(&mut self) {
        self.draft = self.value.clone();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    pub fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn session_expired(&self) -> bool {
        self.session_expired
    }

    fn fail(&mut self, context: &str, err: &CoreError) {
        if err.requires_login() {
            self.session_expired = true;
        }
        self.toast = Some(Toast::from_error(context, err));
    }

    /// Replace the known document; an untouched draft follows it.
    fn accept(&mut self, document: D) {
        if !self.is_dirty() {
            self.draft = document.clone();
        }
        self.value = document;
    }

    pub fn mount(&mut self, cached: Option<D>) {
        if let Some(document) = cached {
            self.accept(document);
        }
    }

    pub fn begin_refresh(&mut self) -> Option<RefreshTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        Some(self.force_refresh())
    }

    pub fn force_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.loading = true;
        RefreshTicket::new(self.generation)
    }

    /// Apply a refresh result. Returns `false` for a superseded ticket.
    pub fn finish_refresh(&mut self, ticket: RefreshTicket, result: CoreResult<D>) -> bool {
        if self.in_flight != Some(ticket.generation()) {
            log::debug!("Dropping stale {} refresh", D::RESOURCE);
            return false;
        }
        self.in_flight = None;
        self.loading = false;
        match result {
            Ok(document) => self.accept(document),
            Err(e) => self.fail("Refresh failed", &e),
        }
        true
    }

    /// Draft to send, or `None` when a save is running or the draft does
    /// not validate (the problems end up in the toast).
    pub fn begin_save(&mut self) -> Option<D> {
        if self.saving {
            return None;
        }
        let problems = self.draft.validate();
        if !problems.is_empty() {
            self.fail(
                "Cannot save",
                &CoreError::ValidationError(problems.join("; ")),
            );
            return None;
        }
        self.saving = true;
        self.sent = Some(self.draft.clone());
        Some(self.draft.clone())
    }

    /// Settle a save. The draft is kept on failure so nothing typed is lost,
    /// and it only follows the saved document when it was not edited after
    /// `begin_save`.
    pub fn finish_save(&mut self, result: CoreResult<D>) {
        self.saving = false;
        let sent = self.sent.take();
        match result {
            Ok(saved) => {
                if sent.as_ref().is_none_or(|sent| *sent == self.draft) {
                    self.draft = saved.clone();
                } else {
                    log::debug!("Keeping {} edits made during the save", D::RESOURCE);
                }
                self.value = saved;
                self.toast = Some(Toast::success("Saved"));
            }
            Err(e) => self.fail("Save failed", &e),
        }
    }

    pub async fn mount_with(&mut self, service: &DocumentService<D>) {
        self.mount(service.cached().await);
        self.refresh_with(service).await;
    }

    pub async fn refresh_with(&mut self, service: &DocumentService<D>) {
        if let Some(ticket) = self.begin_refresh() {
            let result = service.fetch().await;
            self.finish_refresh(ticket, result);
        }
    }

    pub async fn save_with(&mut self, service: &DocumentService<D>) {
        if let Some(draft) = self.begin_save() {
            let result = service.save(&draft).await;
            self.finish_save(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::ToastKind;
    use crate::test_utils::{create_test_context, login};
    use crate::types::{AppConfig, CutoffConfig, CutoffTime};
    use appconsole_api::Resource;
    use serde_json::json;

    fn cutoff(time: &str) -> CutoffTime {
        CutoffTime {
            label: "Pagi".into(),
            time: time.into(),
        }
    }

    #[tokio::test]
    async fn fetch_unwraps_document_and_caches_it() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        api.set_document(
            Resource::Cutoff,
            json!({"success": true, "data": {"times": [{"label": "Pagi", "time": "09:00"}]}}),
        )
        .await;
        let service = DocumentService::<CutoffConfig>::new(ctx, Realm::Admin);

        let config = service.fetch().await.unwrap();
        assert_eq!(config.times, vec![cutoff("09:00")]);
        assert_eq!(config.timezone, "Asia/Jakarta");
        assert_eq!(service.cached().await, Some(config));
    }

    #[tokio::test]
    async fn invalid_cutoff_is_not_sent() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = DocumentService::<CutoffConfig>::new(ctx, Realm::Admin);

        let mut panel = DocumentController::new();
        panel.edit(|c: &mut CutoffConfig| c.times.push(cutoff("9:00")));
        panel.save_with(&service).await;

        assert_eq!(panel.toast().map(|t| t.kind), Some(ToastKind::Error));
        assert!(panel.is_dirty());
        assert_eq!(api.mutation_calls().await, 0);
    }

    #[tokio::test]
    async fn saved_draft_becomes_the_value() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = DocumentService::<CutoffConfig>::new(ctx, Realm::Admin);

        let mut panel = DocumentController::new();
        panel.edit(|c: &mut CutoffConfig| c.times.push(cutoff("16:30")));
        panel.save_with(&service).await;

        assert!(!panel.is_dirty());
        assert_eq!(panel.value().times.len(), 1);
        let stored = api.document(Resource::Cutoff).await.unwrap();
        assert_eq!(stored["times"][0]["time"], "16:30");
    }

    #[test]
    fn edits_made_during_a_save_survive_it() {
        let mut panel = DocumentController::<AppConfig>::new();
        panel.edit(|c| c.app_title = Some("v1".into()));
        let sent = panel.begin_save().unwrap();
        panel.edit(|c| c.app_title = Some("v2".into()));
        panel.finish_save(Ok(sent));

        assert_eq!(panel.value().app_title.as_deref(), Some("v1"));
        assert_eq!(panel.draft().app_title.as_deref(), Some("v2"));
        assert!(panel.is_dirty());
    }

    #[test]
    fn failed_save_forgets_the_sent_draft() {
        let mut panel = DocumentController::<AppConfig>::new();
        panel.edit(|c| c.app_title = Some("v1".into()));
        panel.begin_save().unwrap();
        panel.finish_save(Err(CoreError::MissingSession(Realm::Admin)));

        let sent = panel.begin_save().unwrap();
        panel.finish_save(Ok(sent));
        assert!(!panel.is_dirty());
        assert_eq!(panel.draft().app_title.as_deref(), Some("v1"));
    }

    #[tokio::test]
    async fn refresh_does_not_clobber_a_dirty_draft() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        api.set_document(Resource::AppConfig, json!({"appTitle": "Server"}))
            .await;
        let service = DocumentService::<AppConfig>::new(ctx, Realm::Admin);

        let mut panel = DocumentController::<AppConfig>::new();
        panel.edit(|c| c.app_title = Some("Local".into()));
        panel.refresh_with(&service).await;

        assert_eq!(panel.value().app_title.as_deref(), Some("Server"));
        assert_eq!(panel.draft().app_title.as_deref(), Some("Local"));
    }

    #[tokio::test]
    async fn publish_puts_the_whole_config() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service: ConfigService = DocumentService::new(ctx, Realm::Admin);

        let config = AppConfig {
            app_title: Some("Koperasi".into()),
            ..AppConfig::default()
        };
        let published = service.publish(&config).await.unwrap();

        assert_eq!(published, config);
        let stored = api.document(Resource::AppConfig).await.unwrap();
        assert_eq!(stored["appTitle"], "Koperasi");
    }

    #[tokio::test]
    async fn save_without_session_keeps_draft() {
        let (ctx, _api) = create_test_context();
        let service = DocumentService::<CutoffConfig>::new(ctx, Realm::Admin);

        let mut panel = DocumentController::new();
        panel.edit(|c: &mut CutoffConfig| c.enabled = false);
        panel.save_with(&service).await;

        assert!(panel.session_expired());
        assert!(!panel.is_saving());
        assert!(!panel.draft().enabled);
    }
}
