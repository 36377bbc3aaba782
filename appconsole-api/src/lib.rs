//! # appconsole-api
//!
//! Typed HTTP client for the mobile-app console backend.
//!
//! ## Endpoints
//!
//! | Area | Method | Path |
//! |------|--------|------|
//! | OTP request | `POST` | `/{admin,member}/login` |
//! | OTP verify | `POST` | `/{admin,member}/verify` |
//! | Collections | `GET/POST/PUT/DELETE` | `/hadiah`, `/promo`, `/feedback`, `/markdown`, `/sessions` |
//! | Toggle | `POST` | `/{collection}/{id}/toggle` |
//! | Documents | `GET/PUT` | `/cutoff`, `/config` |
//! | Activity log | `GET` | `/admin/activity-logs` |
//! | Upload | `POST` (multipart) | `/assets/upload` |
//!
//! Authenticated calls carry `X-Token`, `Session-Key` and `Auth-Seed`
//! headers built from [`SessionCredentials`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use appconsole_api::{
//!     create_api, normalize_list, ClientOptions, Realm, Resource, SessionCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = create_api(ClientOptions::new("https://api.example.com"))?;
//!
//!     api.request_otp(Realm::Admin, "6281234567890").await?;
//!     let session: SessionCredentials = api
//!         .verify_otp(Realm::Admin, "6281234567890", "123456")
//!         .await?
//!         .into();
//!
//!     let raw = api.list(Resource::Promos, &session).await?;
//!     let promos: Vec<serde_json::Value> = normalize_list(raw, "GET /promo")?;
//!     println!("{} promos", promos.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Transient errors
//! (`NetworkError`, `Timeout`, `RateLimited`) are retried with exponential
//! backoff for idempotent requests; OTP, create and toggle calls are sent once.

mod client;
mod envelope;
mod error;
mod factory;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{
    ClientOptions, HttpConsoleApi, HEADER_AUTH_SEED, HEADER_SESSION_KEY, HEADER_TOKEN,
};
pub use envelope::{ensure_success, message_of, normalize, normalize_list, Envelope};
pub use error::{ApiError, Result};
pub use factory::create_api;
pub use traits::ConsoleApi;
pub use types::{
    AssetUpload, OtpChallenge, Realm, Resource, SessionCredentials, VerifiedSession,
};
pub use utils::log_sanitizer;
