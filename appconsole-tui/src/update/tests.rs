#![allow(clippy::unwrap_used, clippy::panic)]
//! Update-layer tests against a stub backend
//!
//! Each test builds a real `AppState` over a stub `ConsoleApi` and an
//! in-memory store, feeds messages through [`update`] and applies the
//! task results with [`settle`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use appconsole_api::{
    ApiError, AssetUpload, ConsoleApi, OtpChallenge, Realm, Resource, SessionCredentials,
    VerifiedSession,
};
use appconsole_app::{AppStateBuilder, StartupReport};
use appconsole_core::types::Route;
use appconsole_core::InMemoryKeyValueStore;

use super::{open_page, start, update};
use crate::backend::{settle, Backend};
use crate::i18n::t;
use crate::message::{AppMessage, ContentMessage, LoginMessage, ModalMessage};
use crate::model::state::{LoginStep, Modal};
use crate::model::{App, Page, PanelKind};

const VALID_OTP: &str = "123456";

#[derive(Default)]
struct StubApi {
    lists: RwLock<HashMap<Resource, Value>>,
    documents: RwLock<HashMap<Resource, Value>>,
    expired: AtomicBool,
}

impl StubApi {
    fn check(&self, endpoint: &str) -> Result<(), ApiError> {
        if self.expired.load(Ordering::SeqCst) {
            return Err(ApiError::Unauthorized {
                endpoint: endpoint.to_string(),
                raw_message: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ConsoleApi for StubApi {
    fn base_url(&self) -> &str {
        "https://stub.test"
    }

    async fn request_otp(&self, _realm: Realm, _phone: &str) -> Result<OtpChallenge, ApiError> {
        Ok(OtpChallenge {
            message: Some("OTP terkirim".to_string()),
            expires_in: Some(300),
            resend_after: Some(60),
        })
    }

    async fn verify_otp(
        &self,
        realm: Realm,
        _phone: &str,
        code: &str,
    ) -> Result<VerifiedSession, ApiError> {
        if code != VALID_OTP {
            return Err(ApiError::Rejected {
                endpoint: format!("POST {}/verify", realm.auth_prefix()),
                raw_message: "OTP salah".to_string(),
            });
        }
        Ok(VerifiedSession {
            session_key: "key".to_string(),
            auth_seed: "seed".to_string(),
            token: None,
            name: Some("Ani".to_string()),
        })
    }

    async fn logout(&self, _realm: Realm, _session: &SessionCredentials) -> Result<(), ApiError> {
        Ok(())
    }

    async fn list(&self, resource: Resource, _s: &SessionCredentials) -> Result<Value, ApiError> {
        self.check(resource.path())?;
        Ok(self
            .lists
            .read()
            .await
            .get(&resource)
            .cloned()
            .unwrap_or_else(|| json!([])))
    }

    async fn fetch_document(
        &self,
        resource: Resource,
        _s: &SessionCredentials,
    ) -> Result<Value, ApiError> {
        self.check(resource.path())?;
        Ok(self
            .documents
            .read()
            .await
            .get(&resource)
            .cloned()
            .unwrap_or(Value::Null))
    }

    async fn put_document(
        &self,
        resource: Resource,
        _s: &SessionCredentials,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.check(resource.path())?;
        self.documents.write().await.insert(resource, body.clone());
        Ok(json!({ "success": true }))
    }

    async fn create(
        &self,
        resource: Resource,
        _s: &SessionCredentials,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.check(resource.path())?;
        let mut created = body.clone();
        created["id"] = json!("77");
        Ok(json!({ "success": true, "data": created }))
    }

    async fn update(
        &self,
        resource: Resource,
        _id: &str,
        _s: &SessionCredentials,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.check(resource.path())?;
        Ok(json!({ "success": true, "data": body }))
    }

    async fn delete(
        &self,
        resource: Resource,
        _id: &str,
        _s: &SessionCredentials,
    ) -> Result<(), ApiError> {
        self.check(resource.path())
    }

    async fn toggle(
        &self,
        resource: Resource,
        _id: &str,
        _s: &SessionCredentials,
    ) -> Result<Value, ApiError> {
        self.check(resource.path())?;
        Ok(json!({ "success": true }))
    }

    async fn upload_asset(
        &self,
        _s: &SessionCredentials,
        _asset: AssetUpload,
    ) -> Result<Value, ApiError> {
        Err(ApiError::PermissionDenied {
            endpoint: "POST /assets/upload".to_string(),
            raw_message: None,
        })
    }
}

fn app_with(api: Arc<StubApi>) -> App {
    let state = AppStateBuilder::new()
        .api(api)
        .store(Arc::new(InMemoryKeyValueStore::new()))
        .build()
        .unwrap();
    let backend = Backend::new(Arc::new(state)).unwrap();
    App::new(backend, true)
}

fn send(app: &mut App, msg: AppMessage) {
    update(app, msg);
}

fn type_login(app: &mut App, text: &str) {
    for c in text.chars() {
        send(app, AppMessage::Login(LoginMessage::Input(c)));
    }
}

fn content(app: &mut App, msg: ContentMessage) {
    send(app, AppMessage::Content(msg));
}

/// Walk the OTP flow of `realm` and settle on its dashboard.
fn log_in(app: &mut App, realm: Realm) {
    let route = match realm {
        Realm::Admin => Route::AdminLogin,
        Realm::Member => Route::Login,
    };
    start(app, Some(route), StartupReport::default());
    type_login(app, "0812345678");
    send(app, AppMessage::Login(LoginMessage::Submit));
    settle(app);
    type_login(app, VALID_OTP);
    send(app, AppMessage::Login(LoginMessage::Submit));
    settle(app);
}

#[test]
fn otp_login_enters_the_dashboard() {
    let mut app = app_with(Arc::new(StubApi::default()));
    start(&mut app, Some(Route::AdminLogin), StartupReport::default());
    assert_eq!(app.current_page, Page::Login);

    type_login(&mut app, "0812345678");
    send(&mut app, AppMessage::Login(LoginMessage::Submit));
    assert!(app.login.pending);
    settle(&mut app);
    assert_eq!(app.login.step, LoginStep::Code);
    assert_eq!(app.login.sent_to(), "62812345678");

    type_login(&mut app, VALID_OTP);
    send(&mut app, AppMessage::Login(LoginMessage::Submit));
    settle(&mut app);

    assert_eq!(app.realm, Realm::Admin);
    assert_eq!(app.current_page, Page::Canvas);
    assert_eq!(app.user_name.as_deref(), Some("Ani"));
}

#[test]
fn rejected_code_stays_on_the_code_step() {
    let mut app = app_with(Arc::new(StubApi::default()));
    start(&mut app, Some(Route::AdminLogin), StartupReport::default());
    type_login(&mut app, "0812345678");
    send(&mut app, AppMessage::Login(LoginMessage::Submit));
    settle(&mut app);

    type_login(&mut app, "000000");
    send(&mut app, AppMessage::Login(LoginMessage::Submit));
    settle(&mut app);

    assert_eq!(app.current_page, Page::Login);
    assert_eq!(app.login.step, LoginStep::Code);
    assert!(app.login.code.is_empty());
    assert!(app.login.error.is_some());
    assert!(!app.login.pending);
}

#[test]
fn protected_route_without_session_shows_the_login() {
    let mut app = app_with(Arc::new(StubApi::default()));
    start(&mut app, Some(Route::WebReport), StartupReport::default());
    assert_eq!(app.current_page, Page::Login);
    assert_eq!(app.login.realm, Realm::Member);
}

#[test]
fn restored_session_opens_the_dashboard() {
    let mut app = app_with(Arc::new(StubApi::default()));
    let startup = StartupReport {
        admin: true,
        member: false,
    };
    start(&mut app, Some(Route::AdminLogin), startup);
    assert_eq!(app.current_page, Page::Canvas);
}

#[test]
fn panel_lists_come_from_the_backend() {
    let api = Arc::new(StubApi::default());
    let mut app = app_with(Arc::clone(&api));
    log_in(&mut app, Realm::Admin);
    app.backend.block_on(async {
        api.lists.write().await.insert(
            Resource::Promos,
            json!({"success": true, "data": [{"id": 1, "title": "Diskon"}]}),
        );
    });

    open_page(&mut app, Page::Panel(PanelKind::Promos));
    settle(&mut app);

    let promos = app.panels.promos.controller.items();
    assert_eq!(promos.len(), 1);
    assert_eq!(promos[0].title, "Diskon");
    assert_eq!(promos[0].id, "1");
}

#[test]
fn new_promo_is_saved_and_selected() {
    let mut app = app_with(Arc::new(StubApi::default()));
    log_in(&mut app, Realm::Admin);
    open_page(&mut app, Page::Panel(PanelKind::Promos));
    settle(&mut app);

    content(&mut app, ContentMessage::Add);
    assert!(matches!(app.modal.active, Some(Modal::Form { .. })));
    for c in "Flash Sale".chars() {
        send(&mut app, AppMessage::Modal(ModalMessage::Input(c)));
    }
    send(&mut app, AppMessage::Modal(ModalMessage::Confirm));
    assert!(!app.modal.is_open());
    settle(&mut app);

    let view = &app.panels.promos;
    let saved = view.selected_item().unwrap();
    assert_eq!(saved.id, "77");
    assert_eq!(saved.title, "Flash Sale");
}

#[test]
fn invalid_form_stays_open_with_the_error() {
    let mut app = app_with(Arc::new(StubApi::default()));
    log_in(&mut app, Realm::Admin);
    open_page(&mut app, Page::Panel(PanelKind::Promos));
    settle(&mut app);

    content(&mut app, ContentMessage::Add);
    send(&mut app, AppMessage::Modal(ModalMessage::Confirm));

    match &app.modal.active {
        Some(Modal::Form { error, .. }) => assert!(error.is_some()),
        other => panic!("form closed: {other:?}"),
    }
    assert!(app.panels.promos.controller.items().is_empty());
}

#[test]
fn members_only_browse() {
    let mut app = app_with(Arc::new(StubApi::default()));
    log_in(&mut app, Realm::Member);
    assert_eq!(app.current_page, Page::Panel(PanelKind::Rewards));

    content(&mut app, ContentMessage::Add);
    assert!(!app.modal.is_open());
    assert_eq!(app.status_message.as_deref(), Some(t().common.read_only));
}

#[test]
fn expired_session_returns_to_login() {
    let api = Arc::new(StubApi::default());
    let mut app = app_with(Arc::clone(&api));
    log_in(&mut app, Realm::Admin);
    open_page(&mut app, Page::Panel(PanelKind::Rewards));
    settle(&mut app);

    api.expired.store(true, Ordering::SeqCst);
    send(&mut app, AppMessage::Refresh);
    settle(&mut app);
    send(&mut app, AppMessage::Noop);

    assert_eq!(app.current_page, Page::Login);
    assert_eq!(app.login.realm, Realm::Admin);
    assert_eq!(app.status_message.as_deref(), Some(t().common.session_expired));
}

#[test]
fn published_canvas_carries_the_new_widget() {
    let api = Arc::new(StubApi::default());
    let mut app = app_with(Arc::clone(&api));
    app.backend.block_on(async {
        api.documents.write().await.insert(
            Resource::AppConfig,
            json!({"screens": [{"screen": "home", "content": []}]}),
        );
    });
    log_in(&mut app, Realm::Admin);
    settle(&mut app);
    assert_eq!(app.canvas.screen_count(), 1);

    content(&mut app, ContentMessage::Add);
    assert!(matches!(app.modal.active, Some(Modal::WidgetPicker { .. })));
    send(&mut app, AppMessage::Modal(ModalMessage::Confirm));
    assert!(app.canvas.has_unpublished_changes());

    content(&mut app, ContentMessage::Save);
    settle(&mut app);

    let published = app
        .backend
        .block_on(async { api.documents.read().await.get(&Resource::AppConfig).cloned() })
        .unwrap();
    assert_eq!(published["screens"][0]["content"].as_array().unwrap().len(), 1);
    assert!(!app.canvas.has_unpublished_changes());
}

#[test]
fn widget_added_while_publishing_stays_unpublished() {
    let api = Arc::new(StubApi::default());
    let mut app = app_with(Arc::clone(&api));
    app.backend.block_on(async {
        api.documents.write().await.insert(
            Resource::AppConfig,
            json!({"screens": [{"screen": "home", "content": []}]}),
        );
    });
    log_in(&mut app, Realm::Admin);
    settle(&mut app);

    content(&mut app, ContentMessage::Add);
    send(&mut app, AppMessage::Modal(ModalMessage::Confirm));
    content(&mut app, ContentMessage::Save);
    // Second widget lands before the publish answer is applied.
    content(&mut app, ContentMessage::Add);
    send(&mut app, AppMessage::Modal(ModalMessage::Confirm));
    settle(&mut app);

    let published = app
        .backend
        .block_on(async { api.documents.read().await.get(&Resource::AppConfig).cloned() })
        .unwrap();
    assert_eq!(published["screens"][0]["content"].as_array().unwrap().len(), 1);
    let editor = app.canvas.editor.as_ref().unwrap();
    assert_eq!(editor.screen().content.len(), 2);
    assert!(editor.is_dirty());
    assert_eq!(app.canvas.config.draft().screens[0].content.len(), 2);
    assert!(app.canvas.has_unpublished_changes());
}

#[test]
fn logout_goes_back_to_the_realm_login() {
    let mut app = app_with(Arc::new(StubApi::default()));
    log_in(&mut app, Realm::Member);
    send(&mut app, AppMessage::Logout);
    settle(&mut app);
    assert_eq!(app.current_page, Page::Login);
    assert_eq!(app.login.realm, Realm::Member);
    assert!(app.user_name.is_none());
}
