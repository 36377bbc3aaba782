//! Test helpers
//!
//! In-memory backend mock and context factories.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use appconsole_api::{
    ApiError, AssetUpload, ConsoleApi, OtpChallenge, Realm, Resource, SessionCredentials,
    VerifiedSession,
};

use crate::services::{ServiceContext, SessionService};
use crate::traits::InMemoryKeyValueStore;

const VALID_OTP: &str = "123456";

// ===== MockConsoleApi =====

#[derive(Default)]
struct MockState {
    otp_requests: Vec<String>,
    verify_calls: usize,
    uploads: Vec<(String, String)>,
    lists: HashMap<Resource, Value>,
    documents: HashMap<Resource, Value>,
    mutation_calls: usize,
    fail_next: bool,
    sessions_expired: bool,
}

pub struct MockConsoleApi {
    state: RwLock<MockState>,
    next_id: AtomicU64,
}

impl MockConsoleApi {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MockState::default()),
            next_id: AtomicU64::new(100),
        }
    }

    pub fn valid_otp(&self) -> &'static str {
        VALID_OTP
    }

    pub async fn otp_requests(&self) -> Vec<String> {
        self.state.read().await.otp_requests.clone()
    }

    pub async fn verify_calls(&self) -> usize {
        self.state.read().await.verify_calls
    }

    pub async fn uploads(&self) -> Vec<(String, String)> {
        self.state.read().await.uploads.clone()
    }

    /// Create/update/delete/toggle/put/upload calls that reached the mock.
    pub async fn mutation_calls(&self) -> usize {
        self.state.read().await.mutation_calls
    }

    pub async fn set_list(&self, resource: Resource, body: Value) {
        self.state.write().await.lists.insert(resource, body);
    }

    pub async fn set_document(&self, resource: Resource, body: Value) {
        self.state.write().await.documents.insert(resource, body);
    }

    pub async fn document(&self, resource: Resource) -> Option<Value> {
        self.state.read().await.documents.get(&resource).cloned()
    }

    /// The next call fails with a network error.
    pub async fn fail_next_with_network_error(&self) {
        self.state.write().await.fail_next = true;
    }

    /// Every authenticated call answers 401 from now on.
    pub async fn expire_sessions(&self) {
        self.state.write().await.sessions_expired = true;
    }

    async fn check(&self, endpoint: &str, authenticated: bool) -> Result<(), ApiError> {
        let mut state = self.state.write().await;
        if std::mem::take(&mut state.fail_next) {
            return Err(ApiError::NetworkError {
                endpoint: endpoint.to_string(),
                detail: "mock network failure".to_string(),
            });
        }
        if authenticated && state.sessions_expired {
            return Err(ApiError::Unauthorized {
                endpoint: endpoint.to_string(),
                raw_message: Some("Session expired".to_string()),
            });
        }
        Ok(())
    }

    async fn mutation(&self, endpoint: &str) -> Result<(), ApiError> {
        self.check(endpoint, true).await?;
        self.state.write().await.mutation_calls += 1;
        Ok(())
    }
}

#[async_trait]
impl ConsoleApi for MockConsoleApi {
    fn base_url(&self) -> &str {
        "https://api.test"
    }

    async fn request_otp(&self, realm: Realm, phone: &str) -> Result<OtpChallenge, ApiError> {
        self.check(&format!("POST {}/login", realm.auth_prefix()), false)
            .await?;
        self.state.write().await.otp_requests.push(phone.to_string());
        Ok(OtpChallenge {
            message: Some("OTP terkirim".to_string()),
            expires_in: Some(300),
            resend_after: None,
        })
    }

    async fn verify_otp(
        &self,
        realm: Realm,
        _phone: &str,
        code: &str,
    ) -> Result<VerifiedSession, ApiError> {
        let endpoint = format!("POST {}/verify", realm.auth_prefix());
        self.check(&endpoint, false).await?;
        self.state.write().await.verify_calls += 1;
        if code != VALID_OTP {
            return Err(ApiError::Rejected {
                endpoint,
                raw_message: "OTP salah".to_string(),
            });
        }
        Ok(VerifiedSession {
            session_key: format!("{realm}-session"),
            auth_seed: format!("{realm}-seed"),
            token: None,
            name: Some("Admin Test".to_string()),
        })
    }

    async fn logout(&self, realm: Realm, _session: &SessionCredentials) -> Result<(), ApiError> {
        self.check(&format!("POST {}/logout", realm.auth_prefix()), true)
            .await
    }

    async fn list(
        &self,
        resource: Resource,
        _session: &SessionCredentials,
    ) -> Result<Value, ApiError> {
        self.check(&format!("GET {}", resource.path()), true).await?;
        Ok(self
            .state
            .read()
            .await
            .lists
            .get(&resource)
            .cloned()
            .unwrap_or_else(|| json!([])))
    }

    async fn fetch_document(
        &self,
        resource: Resource,
        _session: &SessionCredentials,
    ) -> Result<Value, ApiError> {
        self.check(&format!("GET {}", resource.path()), true).await?;
        Ok(self
            .state
            .read()
            .await
            .documents
            .get(&resource)
            .cloned()
            .unwrap_or(Value::Null))
    }

    async fn put_document(
        &self,
        resource: Resource,
        _session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.mutation(&format!("PUT {}", resource.path())).await?;
        self.state
            .write()
            .await
            .documents
            .insert(resource, body.clone());
        Ok(json!({ "success": true }))
    }

    async fn create(
        &self,
        resource: Resource,
        _session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.mutation(&format!("POST {}", resource.path())).await?;
        let mut created = body.clone();
        created["id"] = json!(self.next_id.fetch_add(1, Ordering::Relaxed).to_string());
        Ok(json!({ "success": true, "data": created }))
    }

    async fn update(
        &self,
        resource: Resource,
        id: &str,
        _session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.mutation(&format!("PUT {}/{id}", resource.path()))
            .await?;
        Ok(json!({ "success": true, "data": body }))
    }

    async fn delete(
        &self,
        resource: Resource,
        id: &str,
        _session: &SessionCredentials,
    ) -> Result<(), ApiError> {
        self.mutation(&format!("DELETE {}/{id}", resource.path()))
            .await
    }

    async fn toggle(
        &self,
        resource: Resource,
        id: &str,
        _session: &SessionCredentials,
    ) -> Result<Value, ApiError> {
        self.mutation(&format!("POST {}/{id}/toggle", resource.path()))
            .await?;
        Ok(json!({ "success": true }))
    }

    async fn upload_asset(
        &self,
        _session: &SessionCredentials,
        asset: AssetUpload,
    ) -> Result<Value, ApiError> {
        self.mutation("POST /assets/upload").await?;
        let path = format!("/uploads/{}", asset.file_name);
        self.state
            .write()
            .await
            .uploads
            .push((asset.file_name, asset.mime_type));
        Ok(json!({ "filename": path }))
    }
}

// ===== Factories =====

/// Context backed by a fresh mock backend and in-memory store.
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockConsoleApi>) {
    let api = Arc::new(MockConsoleApi::new());
    let store = Arc::new(InMemoryKeyValueStore::new());
    let ctx = Arc::new(ServiceContext::new(api.clone(), store));
    (ctx, api)
}

/// Store a session for `realm` without going through the OTP flow.
pub async fn login(ctx: &Arc<ServiceContext>, realm: Realm) {
    SessionService::new(ctx.clone())
        .store(realm, &SessionCredentials::new("test-session", "test-seed"))
        .await
        .unwrap();
}
