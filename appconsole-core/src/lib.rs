//! Mobile App Console Core Library
//!
//! Platform-independent logic of the console that configures a mobile app:
//! - Screen and widget model of the app configuration document
//! - Canvas editor (widget ordering, header settings, action buttons)
//! - Phone preview and theme palette derivation
//! - OTP login with a client-side attempt limiter
//! - Management panels (rewards, promos, feedback, markdown, sessions,
//!   cutoff times, activity log)
//!
//! Storage is abstracted behind [`KeyValueStore`] and the backend behind
//! [`appconsole_api::ConsoleApi`]; front-ends inject both through
//! [`ServiceContext`].

pub mod editor;
pub mod error;
pub mod panels;
pub mod preview;
pub mod route_args;
pub mod services;
pub mod storage_keys;
pub mod theme;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{InMemoryKeyValueStore, KeyValueStore};
