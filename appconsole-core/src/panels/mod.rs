//! Management panels
//!
//! Every panel follows the same pattern:
//!
//! 1. Paint from the local cache (`cache:<resource>`) before any network call.
//! 2. Refresh in the background; the result is merged without discarding
//!    local edits that are still in flight.
//! 3. Mutations need a stored session. Without one nothing is sent.
//! 4. Failures end up in a [`Toast`]; the loading flag is always cleared.
//!
//! [`PanelService`] / [`DocumentService`] do the I/O and never touch UI
//! state. [`PanelController`] / [`DocumentController`] hold UI state and
//! never do I/O on their own, so a front-end can run the I/O elsewhere and
//! feed the results back with the `finish_*` methods. The `*_with`
//! helpers chain both for callers that can await in place.

mod controller;
mod document;
mod resources;
mod service;

pub use controller::{PanelController, RefreshTicket};
pub use document::{ConfigService, DocumentController, DocumentService};
pub use resources::validate_app_config;
pub use service::PanelService;

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;

use appconsole_api::Resource;

use crate::error::CoreError;

/// How long a toast stays visible.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// What a panel allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub create: bool,
    pub edit: bool,
    pub toggle: bool,
    pub delete: bool,
}

impl Capabilities {
    pub const FULL: Capabilities = Capabilities {
        create: true,
        edit: true,
        toggle: true,
        delete: true,
    };
    pub const READ_ONLY: Capabilities = Capabilities {
        create: false,
        edit: false,
        toggle: false,
        delete: false,
    };
}

/// A record type managed by a list panel.
pub trait PanelResource:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const RESOURCE: Resource;
    const CAPABILITIES: Capabilities = Capabilities::FULL;

    /// Backend id; empty for records not created yet.
    fn id(&self) -> &str;

    /// Main text of the row.
    fn label(&self) -> String;

    /// Secondary text of the row.
    fn detail(&self) -> String {
        String::new()
    }

    /// Toggleable flag, when the record has one.
    fn is_active(&self) -> Option<bool> {
        None
    }

    fn set_active(&mut self, _active: bool) {}

    /// Problems that block saving.
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

/// A singleton document managed by a document panel.
pub trait DocumentResource:
    Clone + PartialEq + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const RESOURCE: Resource;

    /// Problems that block saving.
    fn validate(&self) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Error toast; logs at `warn` for expected errors and `error` otherwise.
    pub fn from_error(context: &str, err: &CoreError) -> Self {
        if err.is_expected() {
            log::warn!("{context}: {err}");
        } else {
            log::error!("{context}: {err}");
        }
        Self::new(ToastKind::Error, format!("{context}: {err}"))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_TTL
    }
}
