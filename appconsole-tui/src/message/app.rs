//! Main message enum

use super::{ContentMessage, LoginMessage, ModalMessage, NavigationMessage};

#[derive(Debug, Clone)]
pub enum AppMessage {
    Quit,

    /// Switch between sidebar and content.
    ToggleFocus,

    Navigation(NavigationMessage),
    Content(ContentMessage),
    Modal(ModalMessage),
    Login(LoginMessage),

    GoBack,
    Refresh,
    ShowHelp,
    Logout,
    ClearStatus,

    /// No input this frame; expires toasts.
    Tick,

    /// Ignored event.
    Noop,
}
