//! Platform-agnostic application bootstrap for the mobile-app console.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection),
//! `StartupHooks` (front-end callbacks during startup) and `ConsoleConfig`.

pub mod adapters;
mod config;

pub use config::{ConfigError, ConsoleConfig, API_BASE_ENV};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use appconsole_api::{create_api, ConsoleApi, Realm, SessionCredentials};
use appconsole_core::error::{CoreError, CoreResult};
use appconsole_core::panels::{DocumentResource, DocumentService, PanelResource, PanelService};
use appconsole_core::services::{AuthService, ServiceContext, SessionService, UploadService};
use appconsole_core::storage_keys;
use appconsole_core::traits::KeyValueStore;

use adapters::JsonFileStore;

/// Front-end callbacks for the startup sequence.
#[async_trait::async_trait]
pub trait StartupHooks: Send + Sync {
    /// A stored session was found for `realm`.
    async fn session_restored(&self, _realm: Realm, _session: &SessionCredentials) {}

    /// No usable session for `realm`; the front-end shows its login page.
    async fn session_missing(&self, _realm: Realm) {}
}

/// No-op startup hooks.
pub struct NoopStartupHooks;

#[async_trait::async_trait]
impl StartupHooks for NoopStartupHooks {}

/// Which realms had a stored session at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartupReport {
    pub admin: bool,
    pub member: bool,
}

impl StartupReport {
    pub fn has_session(&self, realm: Realm) -> bool {
        match realm {
            Realm::Admin => self.admin,
            Realm::Member => self.member,
        }
    }
}

/// Platform-agnostic application state.
///
/// Every front-end constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (backend client and key-value store)
    pub ctx: Arc<ServiceContext>,
    /// Settings the state was built from
    pub config: ConsoleConfig,
    /// OTP login / logout
    pub auth_service: Arc<AuthService>,
    /// Stored sessions
    pub session_service: SessionService,
    /// Whether session restoration has completed
    pub restore_completed: AtomicBool,
}

impl AppState {
    /// Restore stored sessions for both realms.
    pub async fn run_startup(&self, hooks: &dyn StartupHooks) -> StartupReport {
        let mut report = StartupReport::default();
        for realm in [Realm::Admin, Realm::Member] {
            match self.auth_service.bootstrap(realm).await {
                Some(session) => {
                    log::info!("Restored {realm} session");
                    hooks.session_restored(realm, &session).await;
                    match realm {
                        Realm::Admin => report.admin = true,
                        Realm::Member => report.member = true,
                    }
                }
                None => hooks.session_missing(realm).await,
            }
        }
        self.restore_completed.store(true, Ordering::SeqCst);
        report
    }

    /// List panel service for `R`.
    pub fn panel<R: PanelResource>(&self, realm: Realm) -> PanelService<R> {
        PanelService::new(Arc::clone(&self.ctx), realm)
    }

    /// Document panel service for `D`.
    pub fn document<D: DocumentResource>(&self, realm: Realm) -> DocumentService<D> {
        DocumentService::new(Arc::clone(&self.ctx), realm)
    }

    pub fn uploads(&self, realm: Realm) -> UploadService {
        UploadService::new(Arc::clone(&self.ctx), realm)
    }

    /// Persisted sidebar state; open unless stored otherwise.
    pub async fn sidebar_open(&self) -> bool {
        match self.ctx.store.get(storage_keys::SIDEBAR_OPEN).await {
            Ok(Some(value)) => value != "false",
            Ok(None) => true,
            Err(e) => {
                log::warn!("Failed to read sidebar state: {e}");
                true
            }
        }
    }

    pub async fn set_sidebar_open(&self, open: bool) -> CoreResult<()> {
        self.ctx
            .store
            .set(storage_keys::SIDEBAR_OPEN, if open { "true" } else { "false" })
            .await
    }
}

/// Builder for constructing `AppState` with platform-specific adapters.
///
/// # Optional
/// - `api`: defaults to the HTTP client built from the config
/// - `store`: defaults to [`JsonFileStore`] in the config's data directory
pub struct AppStateBuilder {
    config: ConsoleConfig,
    api: Option<Arc<dyn ConsoleApi>>,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ConsoleConfig::default(),
            api: None,
            store: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn api(mut self, api: Arc<dyn ConsoleApi>) -> Self {
        self.api = Some(api);
        self
    }

    #[must_use]
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` for an invalid config and
    /// `CoreError::Api` when the HTTP client cannot be created.
    pub fn build(self) -> CoreResult<AppState> {
        let config = self.config;
        config
            .validate()
            .map_err(|e| CoreError::ValidationError(e.to_string()))?;

        let api = match self.api {
            Some(api) => api,
            None => create_api(config.client_options())?,
        };
        let store = self.store.unwrap_or_else(|| {
            let dir = config.resolved_data_dir();
            log::info!("Using key-value store in {}", dir.display());
            Arc::new(JsonFileStore::in_dir(&dir))
        });

        let ctx = Arc::new(ServiceContext::new(api, store));
        let auth_service = Arc::new(AuthService::new(Arc::clone(&ctx)));
        let session_service = SessionService::new(Arc::clone(&ctx));

        Ok(AppState {
            ctx,
            config,
            auth_service,
            session_service,
            restore_completed: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
