//! Background tasks
//!
//! Each task takes owned handles (services are cheap `Arc` clones), runs
//! the call and returns the [`Job`] that hands the result to the update
//! layer.

use std::path::PathBuf;
use std::sync::Arc;

use appconsole_api::Realm;
use appconsole_app::{AppState, ConsoleConfig};
use appconsole_core::panels::{ConfigService, DocumentService, PanelService, RefreshTicket};
use appconsole_core::services::UploadService;
use appconsole_core::types::{AppConfig, CutoffConfig};

use crate::backend::Job;
use crate::model::state::PanelRecord;
use crate::update::{canvas, cutoff, login, panels, settings};

// ===== Auth =====

pub async fn request_otp(state: Arc<AppState>, realm: Realm, phone: String) -> Job {
    let result = state.auth_service.request_otp(realm, &phone).await;
    Box::new(move |app| login::otp_sent(app, realm, result))
}

pub async fn verify_otp(state: Arc<AppState>, realm: Realm, phone: String, code: String) -> Job {
    let result = state.auth_service.verify_otp(realm, &phone, &code).await;
    Box::new(move |app| login::verified(app, realm, result))
}

pub async fn logout(state: Arc<AppState>, realm: Realm) -> Job {
    let result = state.auth_service.logout(realm).await;
    Box::new(move |app| login::logged_out(app, realm, result))
}

// ===== List panels =====

pub async fn refresh_panel<R: PanelRecord>(service: PanelService<R>, ticket: RefreshTicket) -> Job {
    let result = service.fetch().await;
    Box::new(move |app| panels::refreshed::<R>(app, ticket, result))
}

pub async fn save_record<R: PanelRecord>(service: PanelService<R>, staged: R) -> Job {
    let result = service.save(&staged).await;
    Box::new(move |app| panels::saved::<R>(app, &staged, result))
}

pub async fn delete_record<R: PanelRecord>(service: PanelService<R>, id: String) -> Job {
    let result = service.delete(&id).await;
    Box::new(move |app| panels::deleted::<R>(app, &id, result))
}

/// `original` is the record as it was before the local flip.
pub async fn toggle_record<R: PanelRecord>(service: PanelService<R>, original: R) -> Job {
    let result = service.toggle(&original).await;
    Box::new(move |app| panels::toggled::<R>(app, original.id(), result))
}

// ===== App configuration =====

pub async fn refresh_config(service: ConfigService, ticket: RefreshTicket) -> Job {
    let result = service.fetch().await;
    Box::new(move |app| canvas::config_loaded(app, ticket, result))
}

pub async fn publish_config(service: ConfigService, config: AppConfig) -> Job {
    let result = service.publish(&config).await;
    Box::new(move |app| canvas::published(app, result))
}

/// Read a local image and upload it as the header background of `screen`.
pub async fn upload_background(uploads: UploadService, path: PathBuf, screen: String) -> Job {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let url = match tokio::fs::read(&path).await {
        Ok(bytes) => uploads.upload(&file_name, bytes).await,
        Err(e) => {
            log::warn!("Cannot read {}: {e}", path.display());
            None
        }
    };
    Box::new(move |app| canvas::background_uploaded(app, &screen, url))
}

// ===== Cutoff times =====

pub async fn refresh_cutoff(service: DocumentService<CutoffConfig>, ticket: RefreshTicket) -> Job {
    let result = service.fetch().await;
    Box::new(move |app| cutoff::loaded(app, ticket, result))
}

pub async fn save_cutoff(service: DocumentService<CutoffConfig>, draft: CutoffConfig) -> Job {
    let result = service.save(&draft).await;
    Box::new(move |app| cutoff::saved(app, result))
}

// ===== Preferences =====

pub async fn persist_sidebar(state: Arc<AppState>, open: bool) -> Job {
    let result = state.set_sidebar_open(open).await.map_err(|e| e.to_string());
    Box::new(move |app| settings::persisted(app, result))
}

/// Store the language in the configuration file. The file is re-read so
/// the environment override is not written into it.
pub async fn persist_language(path: PathBuf, language: &'static str) -> Job {
    let result = tokio::task::spawn_blocking(move || {
        let mut config = ConsoleConfig::load_from(&path)?;
        config.language = language.to_string();
        config.save_to(&path)
    })
    .await
    .map_err(|e| e.to_string())
    .and_then(|r| r.map_err(|e| e.to_string()));
    Box::new(move |app| settings::persisted(app, result))
}
