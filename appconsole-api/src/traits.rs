use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::{
    AssetUpload, OtpChallenge, Realm, Resource, SessionCredentials, VerifiedSession,
};

/// Console backend trait
///
/// Auth calls are typed. Resource calls exchange raw JSON because the
/// backend wraps payloads inconsistently; decode them with
/// [`crate::normalize`] / [`crate::normalize_list`].
#[async_trait]
pub trait ConsoleApi: Send + Sync {
    /// Base URL of the backend, used to absolutize relative asset paths.
    fn base_url(&self) -> &str;

    /// Ask the backend to send an OTP to `phone`.
    async fn request_otp(&self, realm: Realm, phone: &str) -> Result<OtpChallenge>;

    /// Exchange an OTP for a session.
    async fn verify_otp(&self, realm: Realm, phone: &str, code: &str) -> Result<VerifiedSession>;

    /// Revoke the current session on the backend.
    async fn logout(&self, realm: Realm, session: &SessionCredentials) -> Result<()>;

    /// List a collection.
    async fn list(&self, resource: Resource, session: &SessionCredentials) -> Result<Value>;

    /// Fetch a singleton document.
    async fn fetch_document(
        &self,
        resource: Resource,
        session: &SessionCredentials,
    ) -> Result<Value>;

    /// Replace a singleton document.
    async fn put_document(
        &self,
        resource: Resource,
        session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value>;

    /// Create an item in a collection.
    async fn create(
        &self,
        resource: Resource,
        session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value>;

    /// Update an item in a collection.
    async fn update(
        &self,
        resource: Resource,
        id: &str,
        session: &SessionCredentials,
        body: &Value,
    ) -> Result<Value>;

    /// Delete an item from a collection.
    async fn delete(&self, resource: Resource, id: &str, session: &SessionCredentials)
        -> Result<()>;

    /// Flip the active/enabled flag of an item.
    async fn toggle(
        &self,
        resource: Resource,
        id: &str,
        session: &SessionCredentials,
    ) -> Result<Value>;

    /// Upload an asset and return the backend's raw response.
    async fn upload_asset(&self, session: &SessionCredentials, asset: AssetUpload)
        -> Result<Value>;
}
