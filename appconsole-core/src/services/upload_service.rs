//! Asset upload

use std::sync::Arc;

use appconsole_api::{AssetUpload, Realm};

use crate::editor::extract_uploaded_url;
use crate::services::ServiceContext;

/// Asset upload service
///
/// Uploads never fail loudly: any problem is logged and reported as
/// `None`, and the caller leaves the edited field unchanged.
pub struct UploadService {
    ctx: Arc<ServiceContext>,
    realm: Realm,
}

impl UploadService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, realm: Realm) -> Self {
        Self { ctx, realm }
    }

    /// Upload a file and return its public URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Option<String> {
        if bytes.is_empty() {
            log::warn!("Refusing to upload empty file '{file_name}'");
            return None;
        }
        let session = match self.ctx.require_session(self.realm).await {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Upload of '{file_name}' blocked: {e}");
                return None;
            }
        };

        let asset = AssetUpload {
            file_name: file_name.to_string(),
            mime_type: AssetUpload::guess_mime(file_name).to_string(),
            bytes,
        };
        let response = match self.ctx.api.upload_asset(&session, asset).await {
            Ok(r) => r,
            Err(e) => {
                let err = self.ctx.handle_api_error(self.realm, e).await;
                log::error!("Upload of '{file_name}' failed: {err}");
                return None;
            }
        };

        let url = extract_uploaded_url(&response, self.ctx.api.base_url());
        if url.is_none() {
            log::warn!("Upload of '{file_name}' returned no usable URL");
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, login};

    #[tokio::test]
    async fn upload_returns_absolute_url() {
        let (ctx, api) = create_test_context();
        login(&ctx, Realm::Admin).await;
        let service = UploadService::new(ctx, Realm::Admin);
        let url = service.upload("banner.png", vec![1, 2, 3]).await;
        assert_eq!(url.as_deref(), Some("https://api.test/uploads/banner.png"));
        assert_eq!(api.uploads().await, vec![("banner.png".to_string(), "image/png".to_string())]);
    }

    #[tokio::test]
    async fn no_session_no_upload() {
        let (ctx, api) = create_test_context();
        let service = UploadService::new(ctx, Realm::Admin);
        assert_eq!(service.upload("banner.png", vec![1]).await, None);
        assert!(api.uploads().await.is_empty());
    }
}
